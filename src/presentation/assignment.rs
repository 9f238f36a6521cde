use crate::model::envelope::null_as_default;
use crate::presentation::student::Student;
use serde::{Deserialize, Serialize};
use serde_json::Map;

/// Request to enroll a student in a course
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssignStudentRequest {
    /// Student to enroll
    pub id_estudiante: i64,
    /// Target course
    pub id_curso: i64,
}

/// Enrollment created by the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Assignment {
    /// Enrolled student
    pub estudiante_id: i64,
    /// Course
    pub curso_id: i64,
    /// Enrollment date (ISO 8601)
    pub fecha_inscripcion: String,
}

/// Student entry of the course roster endpoint, in backend field names
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct EnrolledStudent {
    pub id_estudiante: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nombres: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub apellido_paterno: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub apellido_materno: String,
    #[serde(default)]
    pub ci: Option<String>,
    #[serde(default)]
    pub fecha_nacimiento: Option<String>,
    #[serde(default)]
    pub direccion: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub estado: String,
    #[serde(default)]
    pub nombre_padre: Option<String>,
    #[serde(default)]
    pub apellido_paterno_padre: Option<String>,
    #[serde(default)]
    pub telefono_padre: Option<String>,
    #[serde(default)]
    pub nombre_madre: Option<String>,
    #[serde(default)]
    pub apellido_paterno_madre: Option<String>,
    #[serde(default)]
    pub telefono_madre: Option<String>,
}

/// Roster payload: `{"estudiantes": [...]}`
#[derive(Debug, Clone, Deserialize, Default)]
pub(crate) struct CourseRoster {
    #[serde(default)]
    pub estudiantes: Option<Vec<EnrolledStudent>>,
}

impl From<EnrolledStudent> for Student {
    fn from(e: EnrolledStudent) -> Self {
        Student {
            id: e.id_estudiante,
            id_estudiante: None,
            nombres: e.nombres,
            apellido_paterno: e.apellido_paterno,
            apellido_materno: e.apellido_materno,
            ci: e.ci,
            fecha_nacimiento: e.fecha_nacimiento,
            direccion: e.direccion,
            estado: e.estado,
            nombre_padre: e.nombre_padre,
            apellido_paterno_padre: e.apellido_paterno_padre,
            apellido_materno_padre: None,
            telefono_padre: e.telefono_padre,
            nombre_madre: e.nombre_madre,
            apellido_paterno_madre: e.apellido_paterno_madre,
            apellido_materno_madre: None,
            telefono_madre: e.telefono_madre,
            cursos: None,
            extra: Map::new(),
        }
    }
}
