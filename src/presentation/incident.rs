use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Payload used to report an incident
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct IncidentCreate {
    /// Date of the incident (ISO 8601)
    pub fecha: String,
    /// What happened
    pub antecedentes: String,
    pub acciones_tomadas: Option<String>,
    pub seguimiento: Option<String>,
    /// Workflow state, e.g. `abierto`
    pub estado: String,
    /// User in charge of the follow-up
    pub id_responsable: Option<i64>,
    /// Involved students
    pub estudiantes: Vec<i64>,
    /// Involved teachers (person ids)
    pub profesores: Vec<i64>,
    /// Matching situations of the catalog
    pub situaciones: Vec<i64>,
}

/// Incident as listed by the backend
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct Incident {
    pub id_incidente: i64,
    pub fecha: String,
    #[serde(default)]
    pub antecedentes: Option<String>,
    #[serde(default)]
    pub acciones_tomadas: Option<String>,
    #[serde(default)]
    pub seguimiento: Option<String>,
    pub estado: String,
    #[serde(default)]
    pub id_responsable: Option<i64>,
    #[serde(default)]
    pub responsable_usuario: Option<String>,
    #[serde(default)]
    pub estudiantes: Vec<i64>,
    #[serde(default)]
    pub profesores: Vec<i64>,
    #[serde(default)]
    pub situaciones: Vec<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IncidentStudent {
    pub id_estudiante: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IncidentTeacher {
    pub id_persona: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IncidentSituation {
    pub id_situacion: i64,
    pub nombre_situacion: String,
    pub nivel_gravedad: String,
}

/// Incident with its participants and situations expanded
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct IncidentDetails {
    pub id_incidente: i64,
    pub fecha: String,
    #[serde(default)]
    pub antecedentes: Option<String>,
    #[serde(default)]
    pub acciones_tomadas: Option<String>,
    #[serde(default)]
    pub seguimiento: Option<String>,
    pub estado: String,
    #[serde(default)]
    pub id_responsable: Option<i64>,
    #[serde(default)]
    pub estudiantes: Vec<IncidentStudent>,
    #[serde(default)]
    pub profesores: Vec<IncidentTeacher>,
    #[serde(default)]
    pub situaciones: Vec<IncidentSituation>,
}

/// Partial modification of an incident; every change is recorded in the history
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct IncidentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub antecedentes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acciones_tomadas: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seguimiento: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estado: Option<String>,
    /// User performing the change
    pub id_usuario_modifica: i64,
}

/// One entry of the modification history
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModificationRecord {
    pub id_historial: i64,
    pub id_incidente: i64,
    pub id_usuario: i64,
    pub fecha_cambio: String,
    pub campo_modificado: String,
    #[serde(default)]
    pub valor_anterior: Option<String>,
    #[serde(default)]
    pub valor_nuevo: Option<String>,
}

/// Hand-over of an incident to another user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReferralCreate {
    pub id_quien_deriva: i64,
    pub id_quien_recibe: i64,
    pub observaciones: Option<String>,
}

#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct Referral {
    pub id_derivacion: i64,
    pub id_incidente: i64,
    pub id_quien_deriva: i64,
    pub id_quien_recibe: i64,
    pub fecha_derivacion: String,
    #[serde(default)]
    pub observaciones: Option<String>,
}

/// File attached to an incident
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct Attachment {
    pub id_adjunto: i64,
    pub id_incidente: i64,
    #[serde(default)]
    pub nombre_archivo: Option<String>,
    #[serde(default)]
    pub ruta: Option<String>,
    #[serde(default)]
    pub tipo_mime: Option<String>,
    #[serde(default)]
    pub id_subido_por: Option<i64>,
    pub fecha_subida: String,
}

/// Catalog situation, grouped by area
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct Situation {
    pub id_situacion: i64,
    pub id_area: i64,
    pub nombre_situacion: String,
    /// `leve`, `grave` or `muy grave`
    pub nivel_gravedad: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SituationCreate {
    pub id_area: i64,
    pub nombre_situacion: String,
    pub nivel_gravedad: String,
}

/// Entry of the student and teacher lookup lists
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LookupPerson {
    pub id: i64,
    pub nombre: String,
}

/// Entry of the situation lookup list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LookupSituation {
    pub id: i64,
    pub nombre: String,
    pub nivel: String,
}
