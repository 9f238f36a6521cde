use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_LOGIN_PATH, DEFAULT_TERM_PROBE_CONCURRENCY,
    DEFAULT_TERM_YEARS_AHEAD, DEFAULT_TERM_YEARS_BACK,
};
use crate::utils::config::{get_env_or_default, get_env_or_none, load_dotenv};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::warn;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the BRISA API client
pub struct Config {
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Session persistence and login redirection
    pub session: SessionConfig,
    /// Term discovery probing window
    pub term_discovery: TermDiscoveryConfig,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL of the BRISA REST API, e.g. `http://localhost:8000/api`
    pub base_url: String,
    /// Optional request timeout in seconds; requests wait indefinitely when unset
    pub timeout: Option<u64>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration of the client side session
pub struct SessionConfig {
    /// Location users are redirected to when the session ends
    pub login_path: String,
    /// JSON file used to persist the token and profile; in memory when unset
    pub storage_file: Option<PathBuf>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Window and fan-out used to discover which terms exist
pub struct TermDiscoveryConfig {
    /// Years probed before the current one
    pub years_back: i32,
    /// Years probed after the current one
    pub years_ahead: i32,
    /// Maximum number of probes in flight
    pub concurrency: usize,
}

impl Default for TermDiscoveryConfig {
    fn default() -> Self {
        Self {
            years_back: DEFAULT_TERM_YEARS_BACK,
            years_ahead: DEFAULT_TERM_YEARS_AHEAD,
            concurrency: DEFAULT_TERM_PROBE_CONCURRENCY,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment (and `.env`, if present)
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `BRISA_API_URL` | `http://localhost:8000/api` |
    /// | `BRISA_API_TIMEOUT` | unset |
    /// | `BRISA_LOGIN_PATH` | `/login` |
    /// | `BRISA_SESSION_FILE` | unset |
    /// | `BRISA_TERMS_YEARS_BACK` | `5` |
    /// | `BRISA_TERMS_YEARS_AHEAD` | `2` |
    /// | `BRISA_TERMS_CONCURRENCY` | `4` |
    pub fn new() -> Self {
        load_dotenv();

        let base_url = get_env_or_default("BRISA_API_URL", String::from(DEFAULT_API_BASE_URL));
        if base_url == DEFAULT_API_BASE_URL {
            warn!("BRISA_API_URL not set, using {}", DEFAULT_API_BASE_URL);
        }

        let mut term_discovery = TermDiscoveryConfig {
            years_back: get_env_or_default("BRISA_TERMS_YEARS_BACK", DEFAULT_TERM_YEARS_BACK),
            years_ahead: get_env_or_default("BRISA_TERMS_YEARS_AHEAD", DEFAULT_TERM_YEARS_AHEAD),
            concurrency: get_env_or_default(
                "BRISA_TERMS_CONCURRENCY",
                DEFAULT_TERM_PROBE_CONCURRENCY,
            ),
        };
        if term_discovery.concurrency == 0 {
            warn!("BRISA_TERMS_CONCURRENCY must be positive, using 1");
            term_discovery.concurrency = 1;
        }

        Config {
            rest_api: RestApiConfig {
                base_url,
                timeout: get_env_or_none("BRISA_API_TIMEOUT"),
            },
            session: SessionConfig {
                login_path: get_env_or_default("BRISA_LOGIN_PATH", String::from(DEFAULT_LOGIN_PATH)),
                storage_file: get_env_or_none::<String>("BRISA_SESSION_FILE").map(PathBuf::from),
            },
            term_discovery,
        }
    }

    /// Creates a configuration pointing at `base_url` with every other value defaulted
    ///
    /// Does not read the environment; handy for tests and embedded use.
    #[must_use]
    pub fn with_base_url(base_url: &str) -> Self {
        Config {
            rest_api: RestApiConfig {
                base_url: base_url.to_string(),
                timeout: None,
            },
            session: SessionConfig {
                login_path: DEFAULT_LOGIN_PATH.to_string(),
                storage_file: None,
            },
            term_discovery: TermDiscoveryConfig::default(),
        }
    }
}
