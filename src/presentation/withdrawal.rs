/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 5/11/25
******************************************************************************/
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a withdrawal request
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    /// Created by the requester, waiting for reception
    #[default]
    Recibida,
    /// Forwarded by reception to a regent
    Derivada,
    /// Approved by a regent
    Aprobada,
    /// Rejected by a regent
    Rechazada,
    /// Cancelled before resolution
    Cancelada,
    /// Student left the premises
    Finalizado,
}

/// Severity of a withdrawal motive
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum MotiveSeverity {
    #[default]
    Leve,
    Grave,
    Critico,
}

/// Reason a student may be withdrawn early
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct WithdrawalMotive {
    pub id_motivo: i64,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    pub severidad: MotiveSeverity,
    #[serde(default)]
    pub requiere_evidencia: Option<bool>,
    pub activo: bool,
}

/// Payload used to create a motive
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MotiveCreate {
    pub nombre: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    pub severidad: MotiveSeverity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requiere_evidencia: Option<bool>,
}

/// Partial update of a motive
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MotiveUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severidad: Option<MotiveSeverity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requiere_evidencia: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activo: Option<bool>,
}

/// Individual early withdrawal request
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct WithdrawalRequest {
    pub id_solicitud: i64,
    pub id_apoderado: i64,
    pub id_estudiante: i64,
    pub id_motivo: i64,
    /// Planned departure (ISO 8601)
    pub fecha_hora_salida: String,
    #[serde(default)]
    pub fecha_hora_retorno_previsto: Option<String>,
    #[serde(default)]
    pub foto_evidencia: Option<String>,
    #[serde(default)]
    pub observacion: Option<String>,
    pub estado: RequestStatus,
    pub fecha_creacion: String,
    #[serde(default)]
    pub fecha_derivacion: Option<String>,
    #[serde(default)]
    pub fecha_resolucion: Option<String>,
    #[serde(default)]
    pub justificacion_resolucion: Option<String>,
    #[serde(default)]
    pub estudiante_nombre: Option<String>,
    #[serde(default)]
    pub estudiante_ci: Option<String>,
    #[serde(default)]
    pub apoderado_nombre: Option<String>,
    #[serde(default)]
    pub motivo_nombre: Option<String>,
}

/// Payload used to create an individual request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct WithdrawalRequestCreate {
    pub id_estudiante: i64,
    pub id_motivo: i64,
    pub fecha_hora_salida: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_hora_retorno_previsto: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foto_evidencia: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observacion: Option<String>,
}

/// Partial update of a request, individual or bulk
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct WithdrawalRequestUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_hora_salida: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_hora_retorno_previsto: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foto_evidencia: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observacion: Option<String>,
}

/// One student of a bulk request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BulkStudentDetail {
    pub id_estudiante: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observacion_individual: Option<String>,
}

/// Bulk withdrawal request (a whole group leaves together)
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct BulkWithdrawalRequest {
    pub id_solicitud: i64,
    pub id_solicitante: i64,
    pub id_motivo: i64,
    pub fecha_hora_salida: String,
    #[serde(default)]
    pub fecha_hora_retorno_previsto: Option<String>,
    /// Evidence photo, mandatory for bulk requests
    pub foto_evidencia: String,
    #[serde(default)]
    pub observacion: Option<String>,
    pub fecha_creacion: String,
    pub estado: RequestStatus,
    #[serde(default)]
    pub fecha_derivacion: Option<String>,
    #[serde(default)]
    pub fecha_resolucion: Option<String>,
    #[serde(default)]
    pub justificacion_resolucion: Option<String>,
    #[serde(default)]
    pub cantidad_estudiantes: Option<u32>,
    #[serde(default)]
    pub solicitante_nombre: Option<String>,
    #[serde(default)]
    pub motivo_nombre: Option<String>,
}

/// Payload used to create a bulk request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct BulkWithdrawalRequestCreate {
    pub id_motivo: i64,
    pub fecha_hora_salida: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_hora_retorno_previsto: Option<String>,
    pub foto_evidencia: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observacion: Option<String>,
    pub estudiantes: Vec<BulkStudentDetail>,
}

/// Body of the cancel endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CancelRequest {
    pub motivo_cancelacion: String,
}

/// Optional note attached to an approval
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ApproveRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observacion: Option<String>,
}

/// Mandatory justification of a rejection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RejectRequest {
    pub justificacion: String,
}

/// Body of the `autorizaciones-retiro/.../decision` endpoints
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub(crate) struct Decision {
    pub aprobado: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observacion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justificacion: Option<String>,
}

impl From<ApproveRequest> for Decision {
    fn from(a: ApproveRequest) -> Self {
        Decision {
            aprobado: true,
            observacion: a.observacion,
            justificacion: None,
        }
    }
}

impl From<RejectRequest> for Decision {
    fn from(r: RejectRequest) -> Self {
        Decision {
            aprobado: false,
            observacion: None,
            justificacion: Some(r.justificacion),
        }
    }
}

/// Body of the forward endpoints
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub(crate) struct ForwardRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observacion_derivacion: Option<String>,
}

/// Actual departure of a student
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExitRecord {
    pub id_registro: i64,
    #[serde(default)]
    pub id_solicitud: Option<i64>,
    #[serde(default)]
    pub id_solicitud_masiva: Option<i64>,
    pub id_estudiante: i64,
    /// `individual` or `masivo`
    pub tipo_registro: String,
    pub fecha_hora_salida_real: String,
    #[serde(default)]
    pub fecha_hora_retorno_real: Option<String>,
    #[serde(default)]
    pub estudiante_nombre: Option<String>,
    #[serde(default)]
    pub estudiante_ci: Option<String>,
}

/// Details recorded when a student actually leaves
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ExitRecordCreate {
    /// Person taking the student, when different from the requester
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsable_retiro: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observaciones: Option<String>,
}

/// Exit registration body for an individual request
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub(crate) struct IndividualExit {
    pub id_solicitud: i64,
    #[serde(flatten)]
    pub data: ExitRecordCreate,
}

/// Exit registration body for a bulk request
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub(crate) struct BulkExit {
    pub id_solicitud_masiva: i64,
    #[serde(flatten)]
    pub data: ExitRecordCreate,
}
