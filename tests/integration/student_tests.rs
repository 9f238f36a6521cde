use crate::common::create_test_client;
use brisa_client::prelude::*;
use tracing::info;

#[tokio::test]
#[ignore = "requires a running BRISA backend"]
async fn test_list_students() {
    let service = StudentServiceImpl::new(create_test_client());

    let students = service
        .list_students(&Pagination::new(0, 20))
        .await
        .expect("Failed to list students");
    info!("Students obtained: {}", students.len());

    assert!(students.len() <= 20);
    for student in &students {
        assert!(student.id > 0, "every student exposes a generic id");
    }
}

#[tokio::test]
#[ignore = "requires a running BRISA backend"]
async fn test_get_first_student() {
    let service = StudentServiceImpl::new(create_test_client());

    let students = service
        .list_students(&Pagination::new(0, 1))
        .await
        .expect("Failed to list students");
    let Some(first) = students.first() else {
        info!("No students registered, skipping");
        return;
    };

    let student = service
        .get_student(first.id)
        .await
        .expect("Failed to get student");
    assert_eq!(student.id, first.id);
}

#[tokio::test]
#[ignore = "requires a running BRISA backend"]
async fn test_download_import_template() {
    let service = StudentServiceImpl::new(create_test_client());

    let template = service
        .download_import_template()
        .await
        .expect("Failed to download template");
    info!(
        "Template {} ({} bytes)",
        template.filename_or("plantilla.xlsx"),
        template.len()
    );
    assert!(!template.is_empty());
}
