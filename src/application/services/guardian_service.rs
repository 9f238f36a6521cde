use crate::application::client::HttpClient;
use crate::application::interfaces::guardian::GuardianService;
use crate::error::AppError;
use crate::presentation::guardian::GuardianRelation;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Implementation of the student-guardian relation service
pub struct GuardianServiceImpl {
    client: Arc<HttpClient>,
}

impl GuardianServiceImpl {
    /// Creates a new instance of the guardian service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl GuardianService for GuardianServiceImpl {
    async fn students_for_guardian(
        &self,
        id_persona: i64,
    ) -> Result<Vec<GuardianRelation>, AppError> {
        // The backend resolves the guardian from the person id.
        debug!("Getting students of guardian person {}", id_persona);
        self.client
            .get(&format!("/estudiantes-apoderados/apoderado/{id_persona}"))
            .await
    }

    async fn guardians_for_student(
        &self,
        id_estudiante: i64,
    ) -> Result<Vec<GuardianRelation>, AppError> {
        self.client
            .get(&format!("/estudiantes-apoderados/estudiante/{id_estudiante}"))
            .await
    }

    async fn primary_contact(&self, id_estudiante: i64) -> Result<GuardianRelation, AppError> {
        self.client
            .get(&format!(
                "/estudiantes-apoderados/estudiante/{id_estudiante}/contacto-principal"
            ))
            .await
    }
}
