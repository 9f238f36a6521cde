use crate::error::AppError;
use crate::model::download::DownloadedFile;
use crate::model::upload::UploadFile;
use crate::presentation::common::DirectorPermission;
use crate::presentation::incident::{
    Attachment, Incident, IncidentCreate, IncidentDetails, IncidentUpdate, LookupPerson,
    LookupSituation, ModificationRecord, Referral, ReferralCreate, Situation, SituationCreate,
};
use async_trait::async_trait;
use serde_json::Value;

/// Interface for incident reports and their sub-resources
#[async_trait]
pub trait IncidentService: Send + Sync {
    /// Lists incidents
    async fn list_incidents(&self) -> Result<Vec<Incident>, AppError>;

    /// Reports an incident
    async fn create_incident(&self, data: &IncidentCreate) -> Result<Incident, AppError>;

    /// Incident with participants and situations expanded
    async fn incident_details(&self, id_incidente: i64) -> Result<IncidentDetails, AppError>;

    /// Modifies an incident, recording the change in its history
    async fn modify_incident(&self, id: i64, data: &IncidentUpdate) -> Result<Value, AppError>;

    /// Modification history of an incident
    async fn modification_history(
        &self,
        id_incidente: i64,
    ) -> Result<Vec<ModificationRecord>, AppError>;

    /// Hands an incident over to another user
    async fn create_referral(
        &self,
        id_incidente: i64,
        data: &ReferralCreate,
    ) -> Result<Referral, AppError>;

    /// Attaches a file to an incident
    async fn upload_attachment(
        &self,
        id_incidente: i64,
        file: UploadFile,
        uploaded_by: Option<i64>,
    ) -> Result<Attachment, AppError>;

    /// Attachments of an incident
    async fn list_attachments(&self, id_incidente: i64) -> Result<Vec<Attachment>, AppError>;

    /// Downloads an attachment; the filename defaults to `archivo`
    async fn download_attachment(&self, id_adjunto: i64) -> Result<DownloadedFile, AppError>;

    /// Deletes an attachment
    async fn delete_attachment(&self, id_adjunto: i64) -> Result<(), AppError>;
}

/// Interface for the incident catalogs: areas, situations and lookup lists
#[async_trait]
pub trait IncidentCatalogService: Send + Sync {
    /// Lists areas
    async fn list_areas(&self) -> Result<Vec<Value>, AppError>;

    /// Creates an area
    async fn create_area(&self, data: &Value) -> Result<Value, AppError>;

    /// Updates an area
    async fn update_area(&self, id_area: i64, data: &Value) -> Result<Value, AppError>;

    /// Deletes an area
    async fn delete_area(&self, id_area: i64) -> Result<(), AppError>;

    /// Lists situations
    async fn list_situations(&self) -> Result<Vec<Situation>, AppError>;

    /// Creates a situation
    async fn create_situation(&self, data: &SituationCreate) -> Result<Situation, AppError>;

    /// Updates a situation (director only)
    async fn update_situation(&self, id_situacion: i64, data: &Value)
    -> Result<Situation, AppError>;

    /// Deletes a situation (director only)
    async fn delete_situation(&self, id_situacion: i64) -> Result<(), AppError>;

    /// Asks the backend whether the logged-in user is a director
    async fn director_permission(&self) -> Result<DirectorPermission, AppError>;

    /// Student lookup list
    async fn lookup_students(&self) -> Result<Vec<LookupPerson>, AppError>;

    /// Teacher lookup list
    async fn lookup_teachers(&self) -> Result<Vec<LookupPerson>, AppError>;

    /// Situation lookup list
    async fn lookup_situations(&self) -> Result<Vec<LookupSituation>, AppError>;

    /// Role lookup list
    async fn lookup_roles(&self) -> Result<Vec<Value>, AppError>;

    /// Users holding a role
    async fn users_by_role(&self, rol: &str) -> Result<Vec<Value>, AppError>;
}
