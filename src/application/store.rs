//! Observable state cells holding the last fetched values

use crate::application::interfaces::incident::IncidentService;
use crate::application::session::Session;
use crate::error::AppError;
use crate::presentation::incident::Incident;
use crate::presentation::user::UserProfile;
use tokio::sync::watch;
use tracing::{debug, error};

/// Value cell with change notification
///
/// Every subscriber sees the latest value; intermediate values may be skipped.
#[derive(Debug)]
pub struct Store<T> {
    tx: watch::Sender<T>,
}

impl<T: Clone> Store<T> {
    /// Creates a store holding `initial`
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Returns a copy of the current value
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Replaces the value and notifies subscribers
    pub fn set(&self, value: T) {
        self.tx.send_replace(value);
    }

    /// Modifies the value in place and notifies subscribers
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        self.tx.send_modify(f);
    }

    /// Receiver notified on every change
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }
}

impl<T: Clone + Default> Default for Store<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// Last fetched incident list
#[derive(Debug, Default)]
pub struct IncidentStore {
    incidents: Store<Vec<Incident>>,
}

impl IncidentStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Current incidents
    pub fn incidents(&self) -> Vec<Incident> {
        self.incidents.get()
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<Incident>> {
        self.incidents.subscribe()
    }

    /// Fetches the incidents and replaces the cached list
    ///
    /// A failed fetch is logged and leaves the cached list untouched.
    pub async fn reload(&self, service: &dyn IncidentService) {
        match service.list_incidents().await {
            Ok(incidents) => {
                debug!("Incident store reloaded: {} incidents", incidents.len());
                self.incidents.set(incidents);
            }
            Err(e) => error!("Error loading incidents: {}", e),
        }
    }
}

/// Profile of the logged-in user
#[derive(Debug, Default)]
pub struct CurrentUserStore {
    user: Store<UserProfile>,
}

impl CurrentUserStore {
    /// Creates a store with an empty profile
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the profile cached in the session, if any
    pub fn from_session(session: &Session) -> Self {
        Self {
            user: Store::new(session.profile().unwrap_or_default()),
        }
    }

    /// Current profile
    pub fn user(&self) -> UserProfile {
        self.user.get()
    }

    /// Replaces the current profile
    pub fn set_user(&self, profile: UserProfile) {
        self.user.set(profile);
    }

    pub fn subscribe(&self) -> watch::Receiver<UserProfile> {
        self.user.subscribe()
    }

    /// Resets the profile, clears the session and redirects to the login page
    pub fn logout(&self, session: &Session) -> Result<(), AppError> {
        self.user.set(UserProfile::default());
        session.logout()
    }
}
