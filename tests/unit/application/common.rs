// Shared fixtures for the request core and service tests

use brisa_client::prelude::*;
use mockito::{Server, ServerGuard};
use std::sync::Mutex;

pub const TEST_TOKEN: &str = "test-token";

/// Records every redirect requested by the session
#[derive(Debug, Default)]
pub struct RecordingRedirect {
    locations: Mutex<Vec<String>>,
}

impl RecordingRedirect {
    pub fn locations(&self) -> Vec<String> {
        self.locations.lock().unwrap().clone()
    }
}

impl LoginRedirect for RecordingRedirect {
    fn redirect(&self, location: &str) {
        self.locations.lock().unwrap().push(location.to_string());
    }
}

pub struct TestContext {
    pub server: ServerGuard,
    pub client: Arc<HttpClient>,
    pub session: Arc<Session>,
    pub redirect: Arc<RecordingRedirect>,
}

pub fn test_profile() -> UserProfile {
    UserProfile {
        id_usuario: Some(5),
        id_persona: Some(42),
        usuario: "mrojas".to_string(),
        nombres: "María Rojas".to_string(),
        rol: "Profesor".to_string(),
        ..Default::default()
    }
}

/// Mock server plus a client pointing at `<server>/api/`, logged in
pub async fn setup() -> TestContext {
    setup_with_token(Some(TEST_TOKEN)).await
}

pub async fn setup_with_token(token: Option<&str>) -> TestContext {
    let server = Server::new_async().await;
    let redirect = Arc::new(RecordingRedirect::default());
    let session = Arc::new(Session::new(
        Arc::new(MemorySessionStore::new()),
        redirect.clone(),
        "/login",
    ));
    if let Some(token) = token {
        session.set_token(token).unwrap();
        session.set_profile(&test_profile()).unwrap();
    }
    let config = Config::with_base_url(&format!("{}/api/", server.url()));
    let client = Arc::new(HttpClient::new(&config, session.clone()).unwrap());
    TestContext {
        server,
        client,
        session,
        redirect,
    }
}

pub fn bearer() -> String {
    format!("Bearer {TEST_TOKEN}")
}
