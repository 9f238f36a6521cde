use crate::application::client::HttpClient;
use crate::application::config::TermDiscoveryConfig;
use crate::application::interfaces::course::CourseService;
use crate::application::services::term_discovery::discover_terms;
use crate::constants::DEFAULT_COURSE_PAGE_LIMIT;
use crate::error::AppError;
use crate::model::http::{QueryParams, build_query};
use crate::presentation::common::Pagination;
use crate::presentation::course::{CopyTermRequest, Course, CourseCreate, CourseUpdate};
use async_trait::async_trait;
use chrono::Datelike;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Implementation of the course service
pub struct CourseServiceImpl {
    client: Arc<HttpClient>,
    term_discovery: TermDiscoveryConfig,
}

impl CourseServiceImpl {
    /// Creates a new instance of the course service
    ///
    /// # Arguments
    /// * `client` - Shared request core
    /// * `term_discovery` - Window and fan-out used by [`CourseService::list_terms`]
    pub fn new(client: Arc<HttpClient>, term_discovery: TermDiscoveryConfig) -> Self {
        Self {
            client,
            term_discovery,
        }
    }

    /// Gets the term discovery configuration
    pub fn get_term_discovery(&self) -> &TermDiscoveryConfig {
        &self.term_discovery
    }
}

#[async_trait]
impl CourseService for CourseServiceImpl {
    async fn list_courses(&self, pagination: Option<Pagination>) -> Result<Vec<Course>, AppError> {
        let pagination = pagination.unwrap_or_else(|| Pagination::new(0, DEFAULT_COURSE_PAGE_LIMIT));
        let path = format!("/cursos/{}", build_query(&QueryParams::from(&pagination)));

        let courses = self
            .client
            .get_listing::<Course>(&path, "cursos")
            .await?
            .into_items();
        debug!("Courses obtained: {}", courses.len());
        Ok(courses)
    }

    async fn get_course(&self, id: i64) -> Result<Course, AppError> {
        debug!("Getting course {}", id);
        self.client.get(&format!("/cursos/{id}")).await
    }

    async fn create_course(&self, data: &CourseCreate) -> Result<Course, AppError> {
        info!("Creating course {} ({})", data.nombre, data.gestion);
        self.client.post("/cursos/", data).await
    }

    async fn update_course(&self, id: i64, data: &CourseUpdate) -> Result<Course, AppError> {
        info!("Updating course {}", id);
        self.client.put(&format!("/cursos/{id}"), data).await
    }

    async fn delete_course(&self, id: i64) -> Result<(), AppError> {
        info!("Deleting course {}", id);
        self.client.delete(&format!("/cursos/{id}")).await?;
        Ok(())
    }

    async fn list_courses_by_term_and_level(
        &self,
        gestion: &str,
        nivel: &str,
    ) -> Result<Vec<Course>, AppError> {
        let path = format!(
            "/cursos/gestion/{}/nivel/{}",
            urlencoding::encode(gestion),
            urlencoding::encode(nivel)
        );
        self.client.get(&path).await
    }

    async fn list_courses_by_term(&self, gestion: &str) -> Result<Vec<Course>, AppError> {
        let courses = self.list_courses(None).await?;
        Ok(courses.into_iter().filter(|c| c.gestion == gestion).collect())
    }

    async fn list_courses_by_level(&self, nivel: &str) -> Result<Vec<Course>, AppError> {
        let courses = self.list_courses(None).await?;
        Ok(courses
            .into_iter()
            .filter(|c| c.nivel_educativo == nivel)
            .collect())
    }

    async fn list_terms(&self) -> Result<Vec<String>, AppError> {
        info!("Discovering terms");
        let current_year = chrono::Local::now().year();
        let service = self;
        let terms = discover_terms(current_year, &self.term_discovery, move |year| async move {
            service
                .list_courses_by_term(&year.to_string())
                .await
                .map(|courses| courses.len())
        })
        .await;
        info!("Terms found: {:?}", terms);
        Ok(terms)
    }

    async fn copy_term(&self, data: &CopyTermRequest) -> Result<Value, AppError> {
        info!(
            "Copying courses from {} to {}",
            data.gestion_origen, data.gestion_destino
        );
        match self.client.post("/cursos/copiar-gestion", data).await {
            Ok(result) => Ok(result),
            Err(AppError::Api(e)) => {
                error!("Copying term failed with status {}: {}", e.status, e.details);
                for v in e.validation_errors() {
                    error!("Validation error at {:?}: {}", v.loc, v.msg);
                }
                Err(AppError::Api(e))
            }
            Err(e) => Err(e),
        }
    }

    async fn teacher_courses(&self, id_persona: Option<i64>) -> Result<Value, AppError> {
        let id_persona = id_persona.or_else(|| {
            self.client
                .session()
                .profile()
                .and_then(|profile| profile.id_persona)
        });
        if id_persona.is_none() {
            debug!("No person id available, listing courses unfiltered");
        }
        let query = QueryParams::new().push("id_persona", id_persona);
        self.client
            .get(&format!("/courses/{}", build_query(&query)))
            .await
    }

    async fn teacher_course_list(&self, id: i64) -> Result<Value, AppError> {
        self.client.get(&format!("/courses/mis_cursos/{id}")).await
    }

    async fn legacy_course(&self, id: i64) -> Result<Value, AppError> {
        self.client.get(&format!("/courses/{id}")).await
    }

    async fn legacy_course_students(
        &self,
        course_id: i64,
        params: &QueryParams,
    ) -> Result<Value, AppError> {
        let path = format!("/courses/{course_id}/students/{}", build_query(params));
        self.client.get(&path).await
    }

    async fn legacy_course_teachers(
        &self,
        course_id: i64,
        params: &QueryParams,
    ) -> Result<Value, AppError> {
        let path = format!("/courses/{course_id}/teachers/{}", build_query(params));
        self.client.get(&path).await
    }

    async fn create_legacy_course(&self, data: &Value) -> Result<Value, AppError> {
        self.client.post("/courses/", data).await
    }

    async fn update_legacy_course(&self, id: i64, data: &Value) -> Result<Value, AppError> {
        self.client.put(&format!("/courses/{id}"), data).await
    }

    async fn delete_legacy_course(&self, id: i64) -> Result<(), AppError> {
        self.client.delete(&format!("/courses/{id}")).await?;
        Ok(())
    }
}
