use crate::application::client::HttpClient;
use crate::application::interfaces::assignment::AssignmentService;
use crate::error::AppError;
use crate::presentation::assignment::{AssignStudentRequest, Assignment, CourseRoster};
use crate::presentation::student::Student;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Implementation of the course assignment service
pub struct AssignmentServiceImpl {
    client: Arc<HttpClient>,
}

impl AssignmentServiceImpl {
    /// Creates a new instance of the assignment service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AssignmentService for AssignmentServiceImpl {
    async fn assign_student(&self, data: &AssignStudentRequest) -> Result<Assignment, AppError> {
        info!(
            "Assigning student {} to course {}",
            data.id_estudiante, data.id_curso
        );
        let result = self.client.post("/asignaciones/asignar", data).await;
        if let Err(AppError::Api(e)) = &result {
            error!("Assignment failed: {}", e);
            for v in e.validation_errors() {
                error!("Validation error at {:?}: {}", v.loc, v.msg);
            }
        }
        result
    }

    async fn unassign_student(&self, estudiante_id: i64, curso_id: i64) -> Result<(), AppError> {
        info!(
            "Removing student {} from course {}",
            estudiante_id, curso_id
        );
        self.client
            .delete(&format!("/asignaciones/desasignar/{estudiante_id}/{curso_id}"))
            .await?;
        Ok(())
    }

    async fn courses_for_student(&self, estudiante_id: i64) -> Result<Vec<Value>, AppError> {
        self.client
            .get(&format!("/asignaciones/estudiante/{estudiante_id}/cursos"))
            .await
    }

    async fn students_in_course(&self, curso_id: i64) -> Result<Vec<Student>, AppError> {
        let payload: Value = self
            .client
            .get(&format!("/asignaciones/curso/{curso_id}/estudiantes"))
            .await?;
        let roster: CourseRoster = match payload {
            Value::Object(_) => serde_json::from_value(payload)
                .map_err(|e| AppError::Deserialization(format!("course {curso_id} roster: {e}")))?,
            _ => CourseRoster::default(),
        };
        let students: Vec<Student> = roster
            .estudiantes
            .unwrap_or_default()
            .into_iter()
            .map(Student::from)
            .collect();
        debug!("Course {} has {} students", curso_id, students.len());
        Ok(students)
    }
}
