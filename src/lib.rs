/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 3/11/25
******************************************************************************/

//! # BRISA Client
//!
//! Typed Rust client for the BRISA school administration REST API: students,
//! courses, course assignments, early withdrawal requests, incident reports and
//! notifications.
//!
//! The crate is organised in three layers:
//!
//! - **Request core** ([`application::client::HttpClient`]): builds URLs from a
//!   configured base address, attaches the bearer token held by the
//!   [`application::session::Session`], issues the call and classifies the
//!   outcome (content, no content, structured failure, unauthorized).
//! - **Services** ([`application::services`]): one facade per backend resource
//!   family. Each operation resolves a path template, delegates to the request
//!   core and normalises the payload (`{"data": ...}` envelopes, named listings,
//!   primary key aliases).
//! - **Presentation models** ([`presentation`]): the DTOs exchanged with callers.
//!
//! Role based permission checks live in [`application::permissions`].
//!
//! ## Example
//!
//! ```ignore
//! use brisa_client::prelude::*;
//!
//! let config = Config::new();
//! let session = Arc::new(Session::in_memory(&config.session.login_path));
//! session.set_token("eyJhbGciOi...")?;
//!
//! let client = Arc::new(HttpClient::new(&config, session)?);
//! let students = StudentServiceImpl::new(client.clone());
//! for student in students.list_students(&Pagination::default()).await? {
//!     info!("{} {}", student.id, student.nombres);
//! }
//! ```

/// Application layer: configuration, session, request core and services
pub mod application;
/// Global constants
pub mod constants;
/// Error types
pub mod error;
/// Wire level helpers: queries, envelopes, downloads and uploads
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Data transfer objects per resource family
pub mod presentation;
/// Environment and logging utilities
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
