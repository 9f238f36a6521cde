use crate::error::AppError;
use crate::model::download::DownloadedFile;
use crate::model::upload::UploadFile;
use crate::presentation::common::{Pagination, ReportFilter};
use crate::presentation::student::{Student, StudentCreate, StudentUpdate, TermStudentFilter};
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the student service
#[async_trait]
pub trait StudentService: Send + Sync {
    /// Lists students
    ///
    /// Accepts both `{"estudiantes": [...], "total": N}` and a bare array.
    /// Every record exposes a generic `id`, back-filled from `id_estudiante`.
    async fn list_students(&self, pagination: &Pagination) -> Result<Vec<Student>, AppError>;

    /// Gets one student
    async fn get_student(&self, id: i64) -> Result<Student, AppError>;

    /// Creates a student
    async fn create_student(&self, data: &StudentCreate) -> Result<Student, AppError>;

    /// Replaces the fields set in `data`
    async fn update_student(&self, id: i64, data: &StudentUpdate) -> Result<Student, AppError>;

    /// Deletes a student
    async fn delete_student(&self, id: i64) -> Result<(), AppError>;

    /// Changes the enrollment status of a student
    async fn change_student_status(&self, id: i64, estado: &str) -> Result<Student, AppError>;

    /// Lists the students with the given status
    async fn list_students_by_status(&self, estado: &str) -> Result<Vec<Student>, AppError>;

    /// Lists the students enrolled in a term
    async fn list_students_by_term(
        &self,
        gestion: &str,
        filter: &TermStudentFilter,
    ) -> Result<Vec<Student>, AppError>;

    /// Downloads the spreadsheet with every student
    async fn export_students(&self) -> Result<DownloadedFile, AppError>;

    /// Downloads the empty import template
    async fn download_import_template(&self) -> Result<DownloadedFile, AppError>;

    /// Uploads a spreadsheet of students
    async fn import_students(&self, file: UploadFile) -> Result<Value, AppError>;

    /// Student listing report
    async fn students_report(&self, filter: &ReportFilter) -> Result<Value, AppError>;

    /// Students with (or without) registered guardians
    async fn guardians_report(&self, con_apoderados: Option<bool>) -> Result<Value, AppError>;

    /// Guardian contact sheet
    async fn guardian_contacts_report(&self, filter: &ReportFilter) -> Result<Value, AppError>;

    /// Age distribution of the students
    async fn age_distribution_report(&self, filter: &ReportFilter) -> Result<Value, AppError>;

    /// Courses taken by a student, or by every student when `estudiante_id` is `None`
    async fn course_history_report(&self, estudiante_id: Option<i64>) -> Result<Value, AppError>;
}
