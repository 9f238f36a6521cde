/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 4/11/25
******************************************************************************/

//! Client side session: bearer token, cached user profile and login redirection
//!
//! The token is written at login (outside this crate), read on every request
//! and removed, together with the profile, on logout or when the backend
//! answers 401.

use crate::application::config::Config;
use crate::constants::{PROFILE_STORAGE_KEY, TOKEN_STORAGE_KEY};
use crate::error::AppError;
use crate::presentation::user::UserProfile;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use tracing::{debug, info, warn};

/// Persistent key-value storage for the session
pub trait SessionStore: Send + Sync {
    /// Returns the bearer token, `None` when unauthenticated
    fn get_token(&self) -> Option<String>;

    /// Stores the bearer token
    fn set_token(&self, token: &str) -> Result<(), AppError>;

    /// Returns the cached user profile
    fn get_profile(&self) -> Option<UserProfile>;

    /// Caches the user profile
    fn set_profile(&self, profile: &UserProfile) -> Result<(), AppError>;

    /// Removes both the token and the profile
    fn clear_session(&self) -> Result<(), AppError>;
}

/// Client side navigation triggered when the session ends
pub trait LoginRedirect: Send + Sync {
    /// Sends the user to `location`
    fn redirect(&self, location: &str);
}

/// Redirect that only records the navigation in the logs
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingRedirect;

impl LoginRedirect for LoggingRedirect {
    fn redirect(&self, location: &str) {
        warn!("Session ended, redirecting to {}", location);
    }
}

/// Session store kept in process memory
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: RwLock<BTreeMap<String, String>>,
}

impl MemorySessionStore {
    /// Creates an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.entries.read() {
            Ok(entries) => entries.get(key).cloned(),
            Err(poisoned) => poisoned.into_inner().get(key).cloned(),
        }
    }

    fn write(&self, key: &str, value: Option<String>) {
        let mut entries = match self.entries.write() {
            Ok(entries) => entries,
            Err(poisoned) => poisoned.into_inner(),
        };
        match value {
            Some(v) => entries.insert(key.to_string(), v),
            None => entries.remove(key),
        };
    }
}

impl SessionStore for MemorySessionStore {
    fn get_token(&self) -> Option<String> {
        self.read(TOKEN_STORAGE_KEY)
    }

    fn set_token(&self, token: &str) -> Result<(), AppError> {
        self.write(TOKEN_STORAGE_KEY, Some(token.to_string()));
        Ok(())
    }

    fn get_profile(&self) -> Option<UserProfile> {
        self.read(PROFILE_STORAGE_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
    }

    fn set_profile(&self, profile: &UserProfile) -> Result<(), AppError> {
        let raw = serde_json::to_string(profile)?;
        self.write(PROFILE_STORAGE_KEY, Some(raw));
        Ok(())
    }

    fn clear_session(&self) -> Result<(), AppError> {
        self.write(TOKEN_STORAGE_KEY, None);
        self.write(PROFILE_STORAGE_KEY, None);
        Ok(())
    }
}

/// Session store persisted as a JSON object in a file
///
/// The file is created on first write. A missing or unreadable file reads as
/// an empty session.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    lock: RwLock<()>,
}

impl FileSessionStore {
    /// Creates a store backed by `path`
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: RwLock::new(()),
        }
    }

    /// Location of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> BTreeMap<String, String> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => return BTreeMap::new(),
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!("Ignoring corrupt session file {}: {}", self.path.display(), e);
            BTreeMap::new()
        })
    }

    fn read(&self, key: &str) -> Option<String> {
        let _guard = self.lock.read().unwrap_or_else(|p| p.into_inner());
        self.load().remove(key)
    }

    fn modify(&self, f: impl FnOnce(&mut BTreeMap<String, String>)) -> Result<(), AppError> {
        let _guard = self.lock.write().unwrap_or_else(|p| p.into_inner());
        let mut entries = self.load();
        f(&mut entries);
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&entries)?)?;
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn get_token(&self) -> Option<String> {
        self.read(TOKEN_STORAGE_KEY)
    }

    fn set_token(&self, token: &str) -> Result<(), AppError> {
        self.modify(|entries| {
            entries.insert(TOKEN_STORAGE_KEY.to_string(), token.to_string());
        })
    }

    fn get_profile(&self) -> Option<UserProfile> {
        self.read(PROFILE_STORAGE_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
    }

    fn set_profile(&self, profile: &UserProfile) -> Result<(), AppError> {
        let raw = serde_json::to_string(profile)?;
        self.modify(|entries| {
            entries.insert(PROFILE_STORAGE_KEY.to_string(), raw);
        })
    }

    fn clear_session(&self) -> Result<(), AppError> {
        self.modify(|entries| {
            entries.remove(TOKEN_STORAGE_KEY);
            entries.remove(PROFILE_STORAGE_KEY);
        })
    }
}

/// Session handle shared by the request core and the services
pub struct Session {
    store: Arc<dyn SessionStore>,
    redirect: Arc<dyn LoginRedirect>,
    login_path: String,
}

impl Session {
    /// Creates a session over the given store and redirect
    pub fn new(
        store: Arc<dyn SessionStore>,
        redirect: Arc<dyn LoginRedirect>,
        login_path: &str,
    ) -> Self {
        Self {
            store,
            redirect,
            login_path: login_path.to_string(),
        }
    }

    /// In-memory session that only logs redirects
    #[must_use]
    pub fn in_memory(login_path: &str) -> Self {
        Self::new(
            Arc::new(MemorySessionStore::new()),
            Arc::new(LoggingRedirect),
            login_path,
        )
    }

    /// Builds the session described by the configuration
    ///
    /// Uses a [`FileSessionStore`] when `session.storage_file` is set.
    pub fn from_config(config: &Config, redirect: Arc<dyn LoginRedirect>) -> Self {
        let store: Arc<dyn SessionStore> = match &config.session.storage_file {
            Some(path) => {
                debug!("Using session file {}", path.display());
                Arc::new(FileSessionStore::new(path))
            }
            None => Arc::new(MemorySessionStore::new()),
        };
        Self::new(store, redirect, &config.session.login_path)
    }

    /// Current bearer token
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.store.get_token().filter(|t| !t.is_empty())
    }

    /// Returns true when a token is present
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Stores a new bearer token
    pub fn set_token(&self, token: &str) -> Result<(), AppError> {
        self.store.set_token(token)
    }

    /// Cached user profile
    #[must_use]
    pub fn profile(&self) -> Option<UserProfile> {
        self.store.get_profile()
    }

    /// Caches the user profile
    pub fn set_profile(&self, profile: &UserProfile) -> Result<(), AppError> {
        self.store.set_profile(profile)
    }

    /// Location used for login redirects
    #[must_use]
    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    /// Clears token and profile, then redirects to the login location
    pub fn logout(&self) -> Result<(), AppError> {
        info!("Logging out");
        let cleared = self.store.clear_session();
        self.redirect.redirect(&self.login_path);
        cleared
    }

    /// Reaction to a 401 response: same effect as [`Session::logout`]
    ///
    /// Storage failures are logged; the caller still receives the HTTP failure.
    pub fn handle_unauthorized(&self) {
        warn!("Unauthorized response, clearing session");
        if let Err(e) = self.store.clear_session() {
            warn!("Failed to clear session: {}", e);
        }
        self.redirect.redirect(&self.login_path);
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .field("login_path", &self.login_path)
            .finish()
    }
}
