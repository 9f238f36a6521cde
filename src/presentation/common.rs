use crate::model::http::QueryParams;
use serde::{Deserialize, Serialize};
use std::fmt;

/// `skip`/`limit` pagination accepted by list endpoints
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Number of records to skip
    pub skip: Option<u32>,
    /// Maximum number of records to return
    pub limit: Option<u32>,
}

impl Pagination {
    /// Creates a pagination window
    #[must_use]
    pub fn new(skip: u32, limit: u32) -> Self {
        Self {
            skip: Some(skip),
            limit: Some(limit),
        }
    }
}

impl From<&Pagination> for QueryParams {
    fn from(p: &Pagination) -> Self {
        QueryParams::new()
            .push("skip", p.skip)
            .push("limit", p.limit)
    }
}

/// Education level of a course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EducationLevel {
    /// Kindergarten
    Inicial,
    /// Primary school
    Primaria,
    /// Secondary school
    Secundaria,
}

impl EducationLevel {
    /// Lower-case form expected by report filters
    #[must_use]
    pub fn as_filter(&self) -> &'static str {
        match self {
            EducationLevel::Inicial => "inicial",
            EducationLevel::Primaria => "primaria",
            EducationLevel::Secundaria => "secundaria",
        }
    }
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EducationLevel::Inicial => "Inicial",
            EducationLevel::Primaria => "Primaria",
            EducationLevel::Secundaria => "Secundaria",
        };
        f.write_str(name)
    }
}

/// Filters shared by the student reports
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportFilter {
    /// Restrict to one course
    pub curso_id: Option<i64>,
    /// Restrict to one education level
    pub nivel: Option<EducationLevel>,
    /// Restrict to one term
    pub gestion: Option<String>,
}

impl From<&ReportFilter> for QueryParams {
    fn from(f: &ReportFilter) -> Self {
        QueryParams::new()
            .push("curso_id", f.curso_id)
            .push("nivel", f.nivel.map(|n| n.as_filter()))
            .push("gestion", f.gestion.as_deref())
    }
}

/// Answer of the `permisos/director` endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectorPermission {
    /// Whether the current user holds the director role
    #[serde(rename = "isDirector")]
    pub is_director: bool,
}
