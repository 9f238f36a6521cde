use crate::error::AppError;
use crate::presentation::guardian::GuardianRelation;
use async_trait::async_trait;

/// Interface for the student-guardian relation service
#[async_trait]
pub trait GuardianService: Send + Sync {
    /// Students in the care of a guardian, looked up by person id
    async fn students_for_guardian(&self, id_persona: i64)
    -> Result<Vec<GuardianRelation>, AppError>;

    /// Guardians of a student
    async fn guardians_for_student(
        &self,
        id_estudiante: i64,
    ) -> Result<Vec<GuardianRelation>, AppError>;

    /// Primary contact of a student
    async fn primary_contact(&self, id_estudiante: i64) -> Result<GuardianRelation, AppError>;
}
