/// Course assignment service
pub mod assignment_service;
/// Course service, including term discovery
pub mod course_service;
/// Student-guardian relation service
pub mod guardian_service;
/// Incident and incident catalog services
pub mod incident_service;
/// Notification service
pub mod notification_service;
/// Student service
pub mod student_service;
/// Probing of the terms that have courses
pub mod term_discovery;
/// Early withdrawal service
pub mod withdrawal_service;

pub use crate::application::interfaces::assignment::*;
pub use crate::application::interfaces::course::*;
pub use crate::application::interfaces::guardian::*;
pub use crate::application::interfaces::incident::*;
pub use crate::application::interfaces::notification::*;
pub use crate::application::interfaces::student::*;
pub use crate::application::interfaces::withdrawal::*;
pub use assignment_service::*;
pub use course_service::*;
pub use guardian_service::*;
pub use incident_service::*;
pub use notification_service::*;
pub use student_service::*;
pub use withdrawal_service::*;
