// Common utilities for integration tests
//
// These tests talk to a running BRISA backend. Point `BRISA_API_URL` at it and
// put a valid bearer token in `BRISA_API_TOKEN`.

use brisa_client::prelude::*;
use std::env;
use tracing::{info, warn};

/// Creates a client for the configured backend, authenticated when a token is available
pub fn create_test_client() -> Arc<HttpClient> {
    setup_logger();
    let config = Config::new();
    let session = Arc::new(Session::from_config(&config, Arc::new(LoggingRedirect)));

    match env::var("BRISA_API_TOKEN") {
        Ok(token) if !token.is_empty() => {
            session.set_token(&token).expect("Failed to store token");
            info!("Using token from BRISA_API_TOKEN");
        }
        _ => warn!("BRISA_API_TOKEN not set, requests will be anonymous"),
    }

    Arc::new(HttpClient::new(&config, session).expect("Failed to create client"))
}

/// Term discovery settings from the environment
pub fn term_discovery() -> TermDiscoveryConfig {
    Config::new().term_discovery
}
