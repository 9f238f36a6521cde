use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Link between a student and one of their guardians
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GuardianRelation {
    /// Student identifier
    pub id_estudiante: i64,
    /// Guardian identifier
    pub id_apoderado: i64,
    /// Kinship, e.g. `madre`
    pub parentesco: String,
    /// Whether this guardian is the student's primary contact
    #[serde(default)]
    pub es_contacto_principal: bool,
    /// Whether this guardian is the legal tutor
    #[serde(default)]
    pub es_tutor_legal: bool,
    /// Whether this guardian may pick the student up early
    #[serde(default)]
    pub puede_retirar: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estudiante_nombre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estudiante_ci: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apoderado_nombre: Option<String>,
}
