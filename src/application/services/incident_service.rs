use crate::application::client::HttpClient;
use crate::application::interfaces::incident::{IncidentCatalogService, IncidentService};
use crate::constants::{DEFAULT_ATTACHMENT_FILENAME, INCIDENTS_PREFIX};
use crate::error::AppError;
use crate::model::download::DownloadedFile;
use crate::model::http::{QueryParams, build_query};
use crate::model::upload::UploadFile;
use crate::presentation::common::DirectorPermission;
use crate::presentation::incident::{
    Attachment, Incident, IncidentCreate, IncidentDetails, IncidentUpdate, LookupPerson,
    LookupSituation, ModificationRecord, Referral, ReferralCreate, Situation, SituationCreate,
};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

fn incidents_path(path: &str) -> String {
    format!("{INCIDENTS_PREFIX}/{path}")
}

/// Implementation of the incident service
pub struct IncidentServiceImpl {
    client: Arc<HttpClient>,
}

impl IncidentServiceImpl {
    /// Creates a new instance of the incident service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl IncidentService for IncidentServiceImpl {
    async fn list_incidents(&self) -> Result<Vec<Incident>, AppError> {
        let incidents: Vec<Incident> = self.client.get(&incidents_path("incidentes")).await?;
        debug!("Incidents obtained: {}", incidents.len());
        Ok(incidents)
    }

    async fn create_incident(&self, data: &IncidentCreate) -> Result<Incident, AppError> {
        info!(
            "Reporting incident of {} involving {} students",
            data.fecha,
            data.estudiantes.len()
        );
        self.client.post(&incidents_path("incidentes"), data).await
    }

    async fn incident_details(&self, id_incidente: i64) -> Result<IncidentDetails, AppError> {
        self.client
            .get(&incidents_path(&format!("detalles/{id_incidente}")))
            .await
    }

    async fn modify_incident(&self, id: i64, data: &IncidentUpdate) -> Result<Value, AppError> {
        info!(
            "Modifying incident {} on behalf of user {}",
            id, data.id_usuario_modifica
        );
        self.client
            .patch(&incidents_path(&format!("modificaciones/{id}")), data)
            .await
    }

    async fn modification_history(
        &self,
        id_incidente: i64,
    ) -> Result<Vec<ModificationRecord>, AppError> {
        self.client
            .get(&incidents_path(&format!("modificaciones/{id_incidente}")))
            .await
    }

    async fn create_referral(
        &self,
        id_incidente: i64,
        data: &ReferralCreate,
    ) -> Result<Referral, AppError> {
        info!(
            "Referring incident {} from user {} to user {}",
            id_incidente, data.id_quien_deriva, data.id_quien_recibe
        );
        self.client
            .post(&incidents_path(&format!("derivaciones/{id_incidente}")), data)
            .await
    }

    async fn upload_attachment(
        &self,
        id_incidente: i64,
        file: UploadFile,
        uploaded_by: Option<i64>,
    ) -> Result<Attachment, AppError> {
        info!(
            "Uploading {} ({} bytes) to incident {}",
            file.file_name,
            file.bytes.len(),
            id_incidente
        );
        let query = QueryParams::new().push("id_subido_por", uploaded_by);
        let path = incidents_path(&format!(
            "adjuntos/{id_incidente}{}",
            build_query(&query)
        ));
        let form = file.into_form("archivo")?;
        self.client.post_multipart(&path, form).await
    }

    async fn list_attachments(&self, id_incidente: i64) -> Result<Vec<Attachment>, AppError> {
        self.client
            .get(&incidents_path(&format!("adjuntos/{id_incidente}")))
            .await
    }

    async fn download_attachment(&self, id_adjunto: i64) -> Result<DownloadedFile, AppError> {
        let mut file = self
            .client
            .download_file(&incidents_path(&format!("adjuntos/{id_adjunto}")))
            .await?;
        if file.filename.is_none() {
            file.filename = Some(DEFAULT_ATTACHMENT_FILENAME.to_string());
        }
        Ok(file)
    }

    async fn delete_attachment(&self, id_adjunto: i64) -> Result<(), AppError> {
        info!("Deleting attachment {}", id_adjunto);
        self.client
            .delete(&incidents_path(&format!("adjuntos/{id_adjunto}")))
            .await?;
        Ok(())
    }
}

/// Implementation of the incident catalog service
pub struct IncidentCatalogServiceImpl {
    client: Arc<HttpClient>,
}

impl IncidentCatalogServiceImpl {
    /// Creates a new instance of the incident catalog service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl IncidentCatalogService for IncidentCatalogServiceImpl {
    async fn list_areas(&self) -> Result<Vec<Value>, AppError> {
        self.client.get(&incidents_path("areas")).await
    }

    async fn create_area(&self, data: &Value) -> Result<Value, AppError> {
        info!("Creating incident area");
        self.client.post(&incidents_path("areas"), data).await
    }

    async fn update_area(&self, id_area: i64, data: &Value) -> Result<Value, AppError> {
        self.client
            .put(&incidents_path(&format!("areas/{id_area}")), data)
            .await
    }

    async fn delete_area(&self, id_area: i64) -> Result<(), AppError> {
        info!("Deleting incident area {}", id_area);
        self.client
            .delete(&incidents_path(&format!("areas/{id_area}")))
            .await?;
        Ok(())
    }

    async fn list_situations(&self) -> Result<Vec<Situation>, AppError> {
        self.client.get(&incidents_path("situaciones")).await
    }

    async fn create_situation(&self, data: &SituationCreate) -> Result<Situation, AppError> {
        info!("Creating situation {}", data.nombre_situacion);
        self.client.post(&incidents_path("situaciones"), data).await
    }

    async fn update_situation(
        &self,
        id_situacion: i64,
        data: &Value,
    ) -> Result<Situation, AppError> {
        self.client
            .patch(&incidents_path(&format!("situaciones/{id_situacion}")), data)
            .await
    }

    async fn delete_situation(&self, id_situacion: i64) -> Result<(), AppError> {
        info!("Deleting situation {}", id_situacion);
        self.client
            .delete(&incidents_path(&format!("situaciones/{id_situacion}")))
            .await?;
        Ok(())
    }

    async fn director_permission(&self) -> Result<DirectorPermission, AppError> {
        self.client.get(&incidents_path("permisos/director")).await
    }

    async fn lookup_students(&self) -> Result<Vec<LookupPerson>, AppError> {
        self.client
            .get(&incidents_path("estudiantes-temporal"))
            .await
    }

    async fn lookup_teachers(&self) -> Result<Vec<LookupPerson>, AppError> {
        self.client
            .get(&incidents_path("profesores-temporal"))
            .await
    }

    async fn lookup_situations(&self) -> Result<Vec<LookupSituation>, AppError> {
        self.client
            .get(&incidents_path("situaciones-temporal"))
            .await
    }

    async fn lookup_roles(&self) -> Result<Vec<Value>, AppError> {
        self.client.get(&incidents_path("roles-temporal")).await
    }

    async fn users_by_role(&self, rol: &str) -> Result<Vec<Value>, AppError> {
        self.client
            .get(&incidents_path(&format!(
                "usuarios-por-rol-temporal/{}",
                urlencoding::encode(rol)
            )))
            .await
    }
}
