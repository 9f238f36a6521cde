/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 6/11/25
******************************************************************************/

//! Role based permission checks
//!
//! Management checks compare the role exactly (`Director`, `Admin`).
//! Withdrawal workflow checks lower-case the role first.

use crate::presentation::user::UserProfile;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

const DEFAULT_ROLE_LABEL: &str = "Usuario";

/// Entity families whose management is restricted to directors and admins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ManagedEntity {
    /// Teachers
    Teachers,
    /// Courses
    Courses,
    /// Subjects
    Subjects,
}

/// Management action on a [`ManagedEntity`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityAction {
    /// Register a new record
    Create,
    /// Modify an existing record
    Edit,
    /// Remove a record
    Delete,
    /// Only meaningful for teachers
    AssignSubjects,
}

impl ManagedEntity {
    /// Module name used in messages
    #[must_use]
    pub fn module_name(&self) -> &'static str {
        match self {
            ManagedEntity::Teachers => "profesores",
            ManagedEntity::Courses => "cursos",
            ManagedEntity::Subjects => "materias",
        }
    }

    /// Label of an action on this entity, e.g. `crear cursos`
    #[must_use]
    pub fn action_label(&self, action: EntityAction) -> Option<&'static str> {
        let label = match (self, action) {
            (ManagedEntity::Teachers, EntityAction::Create) => "crear profesores",
            (ManagedEntity::Teachers, EntityAction::Edit) => "editar profesores",
            (ManagedEntity::Teachers, EntityAction::Delete) => "eliminar profesores",
            (ManagedEntity::Teachers, EntityAction::AssignSubjects) => {
                "asignar materias a profesores"
            }
            (ManagedEntity::Courses, EntityAction::Create) => "crear cursos",
            (ManagedEntity::Courses, EntityAction::Edit) => "editar cursos",
            (ManagedEntity::Courses, EntityAction::Delete) => "eliminar cursos",
            (ManagedEntity::Subjects, EntityAction::Create) => "crear materias",
            (ManagedEntity::Subjects, EntityAction::Edit) => "editar materias",
            (ManagedEntity::Subjects, EntityAction::Delete) => "eliminar materias",
            (_, EntityAction::AssignSubjects) => return None,
        };
        Some(label)
    }
}

impl fmt::Display for ManagedEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.module_name())
    }
}

/// Outcome of [`RolePermissions::check`]
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionCheck {
    /// Whether the action is allowed
    pub permitted: bool,
    /// Explanation for the user, empty when permitted
    pub message: String,
    /// Role the check was made for
    pub role: String,
}

/// Permission predicates over the role of the current user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RolePermissions<'a> {
    role: Option<&'a str>,
}

impl<'a> RolePermissions<'a> {
    /// Checks for the given role; `None` when nobody is logged in
    #[must_use]
    pub fn new(role: Option<&'a str>) -> Self {
        Self { role }
    }

    /// Checks for the role of a user profile
    #[must_use]
    pub fn for_profile(profile: &'a UserProfile) -> Self {
        Self::new(profile.role())
    }

    /// Role as received
    #[must_use]
    pub fn role(&self) -> Option<&'a str> {
        self.role
    }

    fn is_director_or_admin(&self) -> bool {
        matches!(self.role, Some("Director") | Some("Admin"))
    }

    fn lower_role(&self) -> Option<String> {
        self.role.map(str::to_lowercase)
    }

    fn role_label(&self) -> &'a str {
        self.role.filter(|r| !r.is_empty()).unwrap_or(DEFAULT_ROLE_LABEL)
    }

    /// Create, edit and delete teachers
    #[must_use]
    pub fn can_manage_teachers(&self) -> bool {
        let permitted = self.is_director_or_admin();
        debug!(
            "Teacher management check for role {:?}: {}",
            self.role, permitted
        );
        permitted
    }

    /// Create, edit and delete courses
    #[must_use]
    pub fn can_manage_courses(&self) -> bool {
        self.is_director_or_admin()
    }

    /// Create, edit and delete subjects
    #[must_use]
    pub fn can_manage_subjects(&self) -> bool {
        self.is_director_or_admin()
    }

    #[must_use]
    pub fn is_guardian(&self) -> bool {
        self.lower_role().as_deref() == Some("apoderado")
    }

    #[must_use]
    pub fn is_receptionist(&self) -> bool {
        matches!(
            self.lower_role().as_deref(),
            Some("recepcionista") | Some("recepción")
        )
    }

    #[must_use]
    pub fn is_regent(&self) -> bool {
        self.lower_role().as_deref() == Some("regente")
    }

    #[must_use]
    pub fn is_teacher(&self) -> bool {
        self.lower_role().as_deref() == Some("profesor")
    }

    /// Guardians and teachers create individual requests
    #[must_use]
    pub fn can_create_individual_request(&self) -> bool {
        self.is_guardian() || self.is_teacher()
    }

    /// Only reception creates bulk requests
    #[must_use]
    pub fn can_create_bulk_request(&self) -> bool {
        self.is_receptionist()
    }

    /// Reception, regents and `Admin` (exact case) see every request
    #[must_use]
    pub fn can_view_all_requests(&self) -> bool {
        self.is_receptionist() || self.is_regent() || self.role == Some("Admin")
    }

    #[must_use]
    pub fn can_forward_requests(&self) -> bool {
        self.is_receptionist()
    }

    #[must_use]
    pub fn can_approve_or_reject_requests(&self) -> bool {
        self.is_regent()
    }

    /// Guardians cancel their own requests; reception and regents any request
    #[must_use]
    pub fn can_cancel_requests(&self) -> bool {
        self.is_guardian() || self.is_receptionist() || self.is_regent()
    }

    #[must_use]
    pub fn can_view_individual_tab(&self) -> bool {
        !self.is_teacher()
    }

    #[must_use]
    pub fn can_view_bulk_tab(&self) -> bool {
        !self.is_guardian()
    }

    /// Message shown when a management action is denied
    #[must_use]
    pub fn permission_denied_message(&self, action: &str, module: &str) -> String {
        format!(
            "No tienes permisos para {action} {module}. Solo Director y Admin pueden realizar esta acción. Tu rol actual: {}",
            self.role_label()
        )
    }

    /// Checks a management permission and explains a denial
    #[must_use]
    pub fn check(&self, entity: ManagedEntity) -> PermissionCheck {
        let permitted = match entity {
            ManagedEntity::Teachers => self.can_manage_teachers(),
            ManagedEntity::Courses => self.can_manage_courses(),
            ManagedEntity::Subjects => self.can_manage_subjects(),
        };
        let role = self.role_label().to_string();
        let message = if permitted {
            String::new()
        } else {
            format!("Solo Director y Admin pueden gestionar {entity}. Tu rol actual: {role}")
        };
        PermissionCheck {
            permitted,
            message,
            role,
        }
    }
}
