use brisa_client::prelude::*;

fn profile_with_role(rol: &str) -> UserProfile {
    UserProfile {
        rol: rol.to_string(),
        ..Default::default()
    }
}

#[test]
fn test_director_and_admin_manage_everything() {
    for role in ["Director", "Admin"] {
        let profile = profile_with_role(role);
        let permissions = RolePermissions::for_profile(&profile);
        assert!(permissions.can_manage_teachers());
        assert!(permissions.can_manage_courses());
        assert!(permissions.can_manage_subjects());
        assert!(permissions.check(ManagedEntity::Subjects).permitted);
    }
}

#[test]
fn test_empty_role_is_anonymous() {
    let profile = profile_with_role("");
    let permissions = RolePermissions::for_profile(&profile);
    assert_eq!(permissions.role(), None);
    assert!(!permissions.can_manage_courses());
    assert!(!permissions.can_create_individual_request());
    assert!(permissions.can_view_individual_tab());
    assert!(permissions.can_view_bulk_tab());
}

#[test]
fn test_receptionist_workflow() {
    for role in ["Recepcionista", "recepción"] {
        let permissions = RolePermissions::new(Some(role));
        assert!(permissions.is_receptionist());
        assert!(permissions.can_create_bulk_request());
        assert!(permissions.can_forward_requests());
        assert!(permissions.can_cancel_requests());
        assert!(permissions.can_view_all_requests());
        assert!(!permissions.can_approve_or_reject_requests());
    }
}

#[test]
fn test_regent_decides() {
    let permissions = RolePermissions::new(Some("REGENTE"));
    assert!(permissions.can_approve_or_reject_requests());
    assert!(permissions.can_view_all_requests());
    assert!(!permissions.can_forward_requests());
    assert!(!permissions.can_create_bulk_request());
}

#[test]
fn test_teacher_only_sees_bulk_tab() {
    let permissions = RolePermissions::new(Some("Profesor"));
    assert!(permissions.can_create_individual_request());
    assert!(!permissions.can_view_individual_tab());
    assert!(permissions.can_view_bulk_tab());
    assert!(!permissions.can_cancel_requests());
}

#[test]
fn test_denied_message_names_action_and_role() {
    let permissions = RolePermissions::new(Some("Regente"));
    assert_eq!(
        permissions.permission_denied_message("eliminar", ManagedEntity::Teachers.module_name()),
        "No tienes permisos para eliminar profesores. Solo Director y Admin pueden realizar esta acción. Tu rol actual: Regente"
    );
    assert_eq!(
        RolePermissions::new(None).permission_denied_message("editar", "cursos"),
        "No tienes permisos para editar cursos. Solo Director y Admin pueden realizar esta acción. Tu rol actual: Usuario"
    );
}
