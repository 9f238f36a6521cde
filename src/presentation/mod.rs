/// Course assignment models
pub mod assignment;
/// Shared request parameter models (pagination, filters)
pub mod common;
/// Course models
pub mod course;
/// Student-guardian relation models
pub mod guardian;
/// Incident report models
pub mod incident;
/// Notification models
pub mod notification;
/// Student models
pub mod student;
/// Logged-in user profile
pub mod user;
/// Early withdrawal models
pub mod withdrawal;
