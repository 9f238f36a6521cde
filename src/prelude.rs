/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 3/11/25
******************************************************************************/

//! # BRISA Client Prelude
//!
//! Re-exports the types and traits needed by most callers.
//!
//! ## Usage
//!
//! ```rust
//! use brisa_client::prelude::*;
//!
//! let config = Config::with_base_url("http://localhost:8000/api");
//! let session = Arc::new(Session::in_memory(&config.session.login_path));
//! let client = HttpClient::new(&config, session).unwrap();
//! assert_eq!(client.base_url(), "http://localhost:8000/api");
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the BRISA API client
pub use crate::application::config::{Config, RestApiConfig, SessionConfig, TermDiscoveryConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

pub use crate::error::{ApiError, AppError, ValidationError};

// ============================================================================
// SESSION AND REQUEST CORE
// ============================================================================

pub use crate::application::session::{
    FileSessionStore, LoggingRedirect, LoginRedirect, MemorySessionStore, Session, SessionStore,
};

pub use crate::application::client::{ApiResponse, HttpClient, RequestBody};

// ============================================================================
// SERVICES (TRAITS AND IMPLEMENTATIONS)
// ============================================================================

pub use crate::application::services::*;

pub use crate::application::services::term_discovery::discover_terms;

// ============================================================================
// PERMISSIONS AND STORES
// ============================================================================

pub use crate::application::permissions::{
    EntityAction, ManagedEntity, PermissionCheck, RolePermissions,
};

pub use crate::application::store::{CurrentUserStore, IncidentStore, Store};

// ============================================================================
// WIRE HELPERS
// ============================================================================

pub use crate::model::download::DownloadedFile;
pub use crate::model::envelope::{Envelope, Listing};
pub use crate::model::http::{QueryParams, build_query};
pub use crate::model::upload::UploadFile;

// ============================================================================
// PRESENTATION MODELS
// ============================================================================

pub use crate::presentation::assignment::{AssignStudentRequest, Assignment, EnrolledStudent};
pub use crate::presentation::common::{DirectorPermission, EducationLevel, Pagination, ReportFilter};
pub use crate::presentation::course::{CopyTermRequest, Course, CourseCreate, CourseUpdate};
pub use crate::presentation::guardian::GuardianRelation;
pub use crate::presentation::incident::{
    Attachment, Incident, IncidentCreate, IncidentDetails, IncidentUpdate, LookupPerson,
    LookupSituation, ModificationRecord, Referral, ReferralCreate, Situation, SituationCreate,
};
pub use crate::presentation::notification::{Notification, NotificationCreate};
pub use crate::presentation::student::{
    Student, StudentCreate, StudentUpdate, TermStudentFilter,
};
pub use crate::presentation::user::UserProfile;
pub use crate::presentation::withdrawal::{
    ApproveRequest, BulkStudentDetail, BulkWithdrawalRequest, BulkWithdrawalRequestCreate,
    CancelRequest, ExitRecord, ExitRecordCreate, MotiveCreate, MotiveSeverity, MotiveUpdate,
    RejectRequest, RequestStatus, WithdrawalMotive, WithdrawalRequest, WithdrawalRequestCreate,
    WithdrawalRequestUpdate,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};

/// Re-export reqwest types used in signatures
pub use reqwest::{Method, StatusCode};
