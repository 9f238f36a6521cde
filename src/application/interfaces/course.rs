use crate::error::AppError;
use crate::model::http::QueryParams;
use crate::presentation::common::Pagination;
use crate::presentation::course::{CopyTermRequest, Course, CourseCreate, CourseUpdate};
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the course service
#[async_trait]
pub trait CourseService: Send + Sync {
    /// Lists courses; without pagination the first 1000 are requested
    async fn list_courses(&self, pagination: Option<Pagination>) -> Result<Vec<Course>, AppError>;

    /// Gets one course
    async fn get_course(&self, id: i64) -> Result<Course, AppError>;

    /// Creates a course
    async fn create_course(&self, data: &CourseCreate) -> Result<Course, AppError>;

    /// Updates a course
    async fn update_course(&self, id: i64, data: &CourseUpdate) -> Result<Course, AppError>;

    /// Deletes a course
    async fn delete_course(&self, id: i64) -> Result<(), AppError>;

    /// Courses of a term and education level
    async fn list_courses_by_term_and_level(
        &self,
        gestion: &str,
        nivel: &str,
    ) -> Result<Vec<Course>, AppError>;

    /// Courses of a term, filtered from the full listing
    async fn list_courses_by_term(&self, gestion: &str) -> Result<Vec<Course>, AppError>;

    /// Courses of an education level, filtered from the full listing
    async fn list_courses_by_level(&self, nivel: &str) -> Result<Vec<Course>, AppError>;

    /// Terms that have at least one course, most recent first
    ///
    /// Never fails: when nothing is found the current year is returned.
    async fn list_terms(&self) -> Result<Vec<String>, AppError>;

    /// Copies every course of a term into another
    async fn copy_term(&self, data: &CopyTermRequest) -> Result<Value, AppError>;

    /// Courses taught by a person; defaults to the logged-in user
    async fn teacher_courses(&self, id_persona: Option<i64>) -> Result<Value, AppError>;

    /// Course list of a teacher
    async fn teacher_course_list(&self, id: i64) -> Result<Value, AppError>;

    /// Course as exposed by the teacher endpoints
    async fn legacy_course(&self, id: i64) -> Result<Value, AppError>;

    /// Students of a course, teacher endpoints
    async fn legacy_course_students(
        &self,
        course_id: i64,
        params: &QueryParams,
    ) -> Result<Value, AppError>;

    /// Teachers of a course, teacher endpoints
    async fn legacy_course_teachers(
        &self,
        course_id: i64,
        params: &QueryParams,
    ) -> Result<Value, AppError>;

    /// Creates a course through the teacher endpoints
    async fn create_legacy_course(&self, data: &Value) -> Result<Value, AppError>;

    /// Updates a course through the teacher endpoints
    async fn update_legacy_course(&self, id: i64, data: &Value) -> Result<Value, AppError>;

    /// Deletes a course through the teacher endpoints
    async fn delete_legacy_course(&self, id: i64) -> Result<(), AppError>;
}
