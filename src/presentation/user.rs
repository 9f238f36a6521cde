use crate::model::envelope::null_as_default;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Profile of the logged-in user, cached next to the bearer token
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct UserProfile {
    /// User account identifier
    #[serde(default, alias = "id", skip_serializing_if = "Option::is_none")]
    pub id_usuario: Option<i64>,
    /// Person identifier linked to the account
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_persona: Option<i64>,
    /// Login name
    #[serde(default, deserialize_with = "null_as_default")]
    pub usuario: String,
    /// Display name
    #[serde(default, deserialize_with = "null_as_default")]
    pub nombres: String,
    /// Role name as sent by the backend, e.g. `Director` or `apoderado`
    #[serde(default, deserialize_with = "null_as_default")]
    pub rol: String,
    /// Any other field sent by the backend
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserProfile {
    /// Role, `None` when the backend sent an empty one
    #[must_use]
    pub fn role(&self) -> Option<&str> {
        Some(self.rol.as_str()).filter(|r| !r.is_empty())
    }
}
