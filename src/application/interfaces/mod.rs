/// Course assignment service interface
pub mod assignment;
/// Course service interface
pub mod course;
/// Student-guardian relation service interface
pub mod guardian;
/// Incident service interfaces
pub mod incident;
/// Notification service interface
pub mod notification;
/// Student service interface
pub mod student;
/// Early withdrawal service interface
pub mod withdrawal;
