use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Notification addressed to a user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotificationCreate {
    pub titulo: String,
    pub mensaje: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_incidente: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_derivacion: Option<i64>,
    /// Recipient
    pub id_usuario: i64,
}

#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notification {
    pub id_notificacion: i64,
    pub id_usuario: i64,
    pub leido: bool,
    /// Creation date (ISO 8601)
    pub fecha: String,
    pub titulo: String,
    pub mensaje: String,
    #[serde(default)]
    pub id_incidente: Option<i64>,
    #[serde(default)]
    pub id_derivacion: Option<i64>,
}

/// Answer of the mark-all-as-read endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MarkAllReadResponse {
    #[serde(default)]
    pub mensaje: String,
    pub cantidad: u64,
}
