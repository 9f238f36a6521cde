use brisa_client::prelude::*;
use std::env;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    setup_logger();

    // Load configuration from the environment
    info!("Starting simple client example");
    let config = Config::new();
    let session = Arc::new(Session::from_config(&config, Arc::new(LoggingRedirect)));
    if let Ok(token) = env::var("BRISA_API_TOKEN") {
        session.set_token(&token)?;
    }

    let client = Arc::new(HttpClient::new(&config, session.clone())?);
    info!("✓ Client created for {}", client.base_url());

    let courses = CourseServiceImpl::new(client.clone(), config.term_discovery.clone());
    let terms = courses.list_terms().await?;
    info!("Terms with courses: {:?}", terms);

    let students = StudentServiceImpl::new(client);
    let page = students.list_students(&Pagination::new(0, 10)).await?;
    for student in &page {
        info!("{} {}", student.id, student.full_name());
    }

    if let Some(profile) = session.profile() {
        let permissions = RolePermissions::for_profile(&profile);
        let check = permissions.check(ManagedEntity::Courses);
        info!("Course management allowed: {} {}", check.permitted, check.message);
    }

    Ok(())
}
