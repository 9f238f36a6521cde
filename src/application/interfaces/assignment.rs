use crate::error::AppError;
use crate::presentation::assignment::{AssignStudentRequest, Assignment};
use crate::presentation::student::Student;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the course assignment service
#[async_trait]
pub trait AssignmentService: Send + Sync {
    /// Enrolls a student in a course
    async fn assign_student(&self, data: &AssignStudentRequest) -> Result<Assignment, AppError>;

    /// Removes a student from a course
    async fn unassign_student(&self, estudiante_id: i64, curso_id: i64) -> Result<(), AppError>;

    /// Courses a student is enrolled in
    async fn courses_for_student(&self, estudiante_id: i64) -> Result<Vec<Value>, AppError>;

    /// Students enrolled in a course; empty when the roster is missing
    async fn students_in_course(&self, curso_id: i64) -> Result<Vec<Student>, AppError>;
}
