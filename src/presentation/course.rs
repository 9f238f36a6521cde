use crate::model::envelope::{null_as_default, resolve_primary_key};
use crate::presentation::common::EducationLevel;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Course of a given term
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(try_from = "CourseRecord")]
pub struct Course {
    /// Generic identifier, back-filled from `id_curso` when missing
    pub id: i64,
    /// Course name, e.g. `1ro A`
    pub nombre: String,
    /// Term (school year) the course belongs to, e.g. `2025`
    pub gestion: String,
    /// Education level as sent by the backend
    pub nivel_educativo: String,
    /// Maximum number of students
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacidad_maxima: Option<u32>,
    /// Enrolled students, when the endpoint embeds them
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estudiantes: Option<Vec<Value>>,
    /// Any other field sent by the backend
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Deserialize)]
struct CourseRecord {
    #[serde(default)]
    id: Option<i64>,
    #[serde(default)]
    id_curso: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    nombre: String,
    #[serde(default, deserialize_with = "term_as_string")]
    gestion: String,
    #[serde(default, deserialize_with = "null_as_default")]
    nivel_educativo: String,
    #[serde(default)]
    capacidad_maxima: Option<u32>,
    #[serde(default)]
    estudiantes: Option<Vec<Value>>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl TryFrom<CourseRecord> for Course {
    type Error = String;

    fn try_from(r: CourseRecord) -> Result<Self, Self::Error> {
        Ok(Course {
            id: resolve_primary_key(r.id, r.id_curso, "id_curso")?,
            nombre: r.nombre,
            gestion: r.gestion,
            nivel_educativo: r.nivel_educativo,
            capacidad_maxima: r.capacidad_maxima,
            estudiantes: r.estudiantes,
            extra: r.extra,
        })
    }
}

// Some endpoints send the term as a number.
fn term_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "invalid gestion value: {other}"
        ))),
    }
}

/// Payload used to create a course
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CourseCreate {
    /// Course name
    pub nombre: String,
    /// Term the course belongs to
    pub gestion: String,
    /// Education level
    pub nivel_educativo: EducationLevel,
    /// Maximum number of students
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacidad_maxima: Option<u32>,
}

/// Partial update of a course
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CourseUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gestion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nivel_educativo: Option<EducationLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacidad_maxima: Option<u32>,
}

/// Request to copy every course of one term into another
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CopyTermRequest {
    /// Source term
    pub gestion_origen: String,
    /// Destination term
    pub gestion_destino: String,
}
