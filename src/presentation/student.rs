/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 4/11/25
******************************************************************************/
use crate::model::envelope::{null_as_default, resolve_primary_key};
use crate::model::http::QueryParams;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Student record as exposed to callers
///
/// Always carries a generic `id`. The backend may only send `id_estudiante`;
/// in that case `id` is back-filled from it during deserialization.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(try_from = "StudentRecord")]
pub struct Student {
    /// Generic identifier
    pub id: i64,
    /// Backend specific identifier, when sent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_estudiante: Option<i64>,
    /// Given names
    pub nombres: String,
    /// Paternal surname
    pub apellido_paterno: String,
    /// Maternal surname
    pub apellido_materno: String,
    /// National identity document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ci: Option<String>,
    /// Birth date (ISO 8601)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_nacimiento: Option<String>,
    /// Home address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direccion: Option<String>,
    /// Enrollment status, e.g. `activo`
    pub estado: String,
    /// Father's given names
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre_padre: Option<String>,
    /// Father's paternal surname
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apellido_paterno_padre: Option<String>,
    /// Father's maternal surname
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apellido_materno_padre: Option<String>,
    /// Father's phone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefono_padre: Option<String>,
    /// Mother's given names
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre_madre: Option<String>,
    /// Mother's paternal surname
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apellido_paterno_madre: Option<String>,
    /// Mother's maternal surname
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apellido_materno_madre: Option<String>,
    /// Mother's phone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefono_madre: Option<String>,
    /// Courses the student is enrolled in, as sent by the backend
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursos: Option<Vec<Value>>,
    /// Any other field sent by the backend
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Student {
    /// Full name, surnames last
    #[must_use]
    pub fn full_name(&self) -> String {
        [
            self.nombres.as_str(),
            self.apellido_paterno.as_str(),
            self.apellido_materno.as_str(),
        ]
        .iter()
        .filter(|s| !s.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
    }
}

/// Student as sent on the wire, before identifier resolution
#[derive(Deserialize)]
struct StudentRecord {
    #[serde(default)]
    id: Option<i64>,
    #[serde(default)]
    id_estudiante: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    nombres: String,
    #[serde(default, deserialize_with = "null_as_default")]
    apellido_paterno: String,
    #[serde(default, deserialize_with = "null_as_default")]
    apellido_materno: String,
    #[serde(default)]
    ci: Option<String>,
    #[serde(default)]
    fecha_nacimiento: Option<String>,
    #[serde(default)]
    direccion: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    estado: String,
    #[serde(default)]
    nombre_padre: Option<String>,
    #[serde(default)]
    apellido_paterno_padre: Option<String>,
    #[serde(default)]
    apellido_materno_padre: Option<String>,
    #[serde(default)]
    telefono_padre: Option<String>,
    #[serde(default)]
    nombre_madre: Option<String>,
    #[serde(default)]
    apellido_paterno_madre: Option<String>,
    #[serde(default)]
    apellido_materno_madre: Option<String>,
    #[serde(default)]
    telefono_madre: Option<String>,
    #[serde(default)]
    cursos: Option<Vec<Value>>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl TryFrom<StudentRecord> for Student {
    type Error = String;

    fn try_from(r: StudentRecord) -> Result<Self, Self::Error> {
        let id = resolve_primary_key(r.id, r.id_estudiante, "id_estudiante")?;
        Ok(Student {
            id,
            id_estudiante: r.id_estudiante,
            nombres: r.nombres,
            apellido_paterno: r.apellido_paterno,
            apellido_materno: r.apellido_materno,
            ci: r.ci,
            fecha_nacimiento: r.fecha_nacimiento,
            direccion: r.direccion,
            estado: r.estado,
            nombre_padre: r.nombre_padre,
            apellido_paterno_padre: r.apellido_paterno_padre,
            apellido_materno_padre: r.apellido_materno_padre,
            telefono_padre: r.telefono_padre,
            nombre_madre: r.nombre_madre,
            apellido_paterno_madre: r.apellido_paterno_madre,
            apellido_materno_madre: r.apellido_materno_madre,
            telefono_madre: r.telefono_madre,
            cursos: r.cursos,
            extra: r.extra,
        })
    }
}

/// Payload used to create a student
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct StudentCreate {
    /// Given names
    pub nombres: String,
    /// Paternal surname
    pub apellido_paterno: String,
    /// Maternal surname
    pub apellido_materno: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ci: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_nacimiento: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direccion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estado: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre_padre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apellido_paterno_padre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apellido_materno_padre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefono_padre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre_madre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apellido_paterno_madre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apellido_materno_madre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefono_madre: Option<String>,
}

/// Partial update of a student; only the fields set are sent
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct StudentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombres: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apellido_paterno: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apellido_materno: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ci: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_nacimiento: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direccion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estado: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre_padre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apellido_paterno_padre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apellido_materno_padre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefono_padre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre_madre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apellido_paterno_madre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apellido_materno_madre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefono_madre: Option<String>,
}

/// Body of the status change endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudentStatusChange {
    /// New status
    pub estado: String,
}

/// Filters of the per-term student listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermStudentFilter {
    /// Education level, as the backend spells it
    pub nivel: Option<String>,
    /// Restrict to one course
    pub curso_id: Option<i64>,
}

impl From<&TermStudentFilter> for QueryParams {
    fn from(f: &TermStudentFilter) -> Self {
        QueryParams::new()
            .push("nivel", f.nivel.as_deref())
            .push("curso_id", f.curso_id)
    }
}
