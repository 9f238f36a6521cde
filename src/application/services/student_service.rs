use crate::application::client::HttpClient;
use crate::application::interfaces::student::StudentService;
use crate::error::AppError;
use crate::model::download::DownloadedFile;
use crate::model::http::{QueryParams, build_query};
use crate::model::upload::UploadFile;
use crate::presentation::common::{Pagination, ReportFilter};
use crate::presentation::student::{
    Student, StudentCreate, StudentStatusChange, StudentUpdate, TermStudentFilter,
};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the student service
pub struct StudentServiceImpl {
    client: Arc<HttpClient>,
}

impl StudentServiceImpl {
    /// Creates a new instance of the student service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StudentService for StudentServiceImpl {
    async fn list_students(&self, pagination: &Pagination) -> Result<Vec<Student>, AppError> {
        let path = format!("/estudiantes/{}", build_query(&QueryParams::from(pagination)));
        info!("Listing students");

        let listing = self
            .client
            .get_listing::<Student>(&path, "estudiantes")
            .await?;
        let total = listing.total();
        let students = listing.into_items();
        debug!("Students obtained: {} of {}", students.len(), total);
        Ok(students)
    }

    async fn get_student(&self, id: i64) -> Result<Student, AppError> {
        debug!("Getting student {}", id);
        self.client.get(&format!("/estudiantes/{id}")).await
    }

    async fn create_student(&self, data: &StudentCreate) -> Result<Student, AppError> {
        info!("Creating student {} {}", data.nombres, data.apellido_paterno);
        let student: Student = self.client.post("/estudiantes/", data).await?;
        debug!("Student created with id {}", student.id);
        Ok(student)
    }

    async fn update_student(&self, id: i64, data: &StudentUpdate) -> Result<Student, AppError> {
        info!("Updating student {}", id);
        self.client.put(&format!("/estudiantes/{id}"), data).await
    }

    async fn delete_student(&self, id: i64) -> Result<(), AppError> {
        info!("Deleting student {}", id);
        self.client.delete(&format!("/estudiantes/{id}")).await?;
        Ok(())
    }

    async fn change_student_status(&self, id: i64, estado: &str) -> Result<Student, AppError> {
        info!("Changing status of student {} to {}", id, estado);
        let body = StudentStatusChange {
            estado: estado.to_string(),
        };
        self.client
            .patch(&format!("/estudiantes/{id}/estado"), &body)
            .await
    }

    async fn list_students_by_status(&self, estado: &str) -> Result<Vec<Student>, AppError> {
        let path = format!("/estudiantes/estado/{}", urlencoding::encode(estado));
        debug!("Listing students with status {}", estado);
        self.client.get(&path).await
    }

    async fn list_students_by_term(
        &self,
        gestion: &str,
        filter: &TermStudentFilter,
    ) -> Result<Vec<Student>, AppError> {
        let path = format!(
            "/estudiantes/gestion/{}{}",
            urlencoding::encode(gestion),
            build_query(&QueryParams::from(filter))
        );
        debug!("Listing students of term {}", gestion);
        self.client.get(&path).await
    }

    async fn export_students(&self) -> Result<DownloadedFile, AppError> {
        info!("Exporting students");
        self.client.download_file("/estudiantes/exportar/todos").await
    }

    async fn download_import_template(&self) -> Result<DownloadedFile, AppError> {
        debug!("Downloading student import template");
        self.client.download_file("/estudiantes/plantilla/excel").await
    }

    async fn import_students(&self, file: UploadFile) -> Result<Value, AppError> {
        info!("Importing students from {}", file.file_name);
        let form = file.into_form("file")?;
        self.client.post_multipart("/estudiantes/importar", form).await
    }

    async fn students_report(&self, filter: &ReportFilter) -> Result<Value, AppError> {
        let path = format!("/reports/students/{}", build_query(&QueryParams::from(filter)));
        self.client.get(&path).await
    }

    async fn guardians_report(&self, con_apoderados: Option<bool>) -> Result<Value, AppError> {
        let query = QueryParams::new().push("con_apoderados", con_apoderados);
        let path = format!("/reports/students/guardians/{}", build_query(&query));
        self.client.get(&path).await
    }

    async fn guardian_contacts_report(&self, filter: &ReportFilter) -> Result<Value, AppError> {
        let path = format!(
            "/reports/students/guardian-contacts/{}",
            build_query(&QueryParams::from(filter))
        );
        self.client.get(&path).await
    }

    async fn age_distribution_report(&self, filter: &ReportFilter) -> Result<Value, AppError> {
        let path = format!(
            "/reports/students/age-distribution/{}",
            build_query(&QueryParams::from(filter))
        );
        self.client.get(&path).await
    }

    async fn course_history_report(&self, estudiante_id: Option<i64>) -> Result<Value, AppError> {
        let query = QueryParams::new().push("estudiante_id", estudiante_id);
        let path = format!("/reports/students/course-history/{}", build_query(&query));
        self.client.get(&path).await
    }
}
