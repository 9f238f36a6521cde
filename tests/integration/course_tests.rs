use crate::common::{create_test_client, term_discovery};
use brisa_client::prelude::*;
use tracing::info;

#[tokio::test]
#[ignore = "requires a running BRISA backend"]
async fn test_list_courses() {
    let service = CourseServiceImpl::new(create_test_client(), term_discovery());

    let courses = service.list_courses(None).await.expect("Failed to list courses");
    info!("Courses obtained: {}", courses.len());
    assert!(courses.iter().all(|c| c.id > 0));
}

#[tokio::test]
#[ignore = "requires a running BRISA backend"]
async fn test_list_terms_is_sorted_descending() {
    let service = CourseServiceImpl::new(create_test_client(), term_discovery());

    let terms = service.list_terms().await.expect("Failed to list terms");
    info!("Terms: {:?}", terms);

    assert!(!terms.is_empty());
    let years: Vec<i32> = terms.iter().filter_map(|t| t.parse().ok()).collect();
    assert!(years.windows(2).all(|w| w[0] > w[1]));
}

#[tokio::test]
#[ignore = "requires a running BRISA backend"]
async fn test_students_of_first_course() {
    let client = create_test_client();
    let courses = CourseServiceImpl::new(client.clone(), term_discovery())
        .list_courses(None)
        .await
        .expect("Failed to list courses");
    let Some(course) = courses.first() else {
        info!("No courses registered, skipping");
        return;
    };

    let students = AssignmentServiceImpl::new(client)
        .students_in_course(course.id)
        .await
        .expect("Failed to get course roster");
    info!("Course {} has {} students", course.nombre, students.len());
}
