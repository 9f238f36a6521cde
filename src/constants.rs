/// Default base address of the BRISA REST API
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";
/// Default client side location users are sent to when the session ends
pub const DEFAULT_LOGIN_PATH: &str = "/login";
/// Storage key holding the bearer token
pub const TOKEN_STORAGE_KEY: &str = "brisa_auth_token";
/// Storage key holding the serialized user profile
pub const PROFILE_STORAGE_KEY: &str = "brisa_user_data";
/// User agent string used in HTTP requests to identify this client to the backend
pub const USER_AGENT: &str = "brisa-client/0.3.0";
/// Path prefix of the incident reporting router
pub const INCIDENTS_PREFIX: &str = "/incidentes/Incidentes";
/// Page size used when listing courses without explicit pagination
pub const DEFAULT_COURSE_PAGE_LIMIT: u32 = 1000;
/// Years before the current one probed during term discovery
pub const DEFAULT_TERM_YEARS_BACK: i32 = 5;
/// Years after the current one probed during term discovery
pub const DEFAULT_TERM_YEARS_AHEAD: i32 = 2;
/// Maximum number of term probes in flight at once
pub const DEFAULT_TERM_PROBE_CONCURRENCY: usize = 4;
/// File name used for attachments whose response carries no content disposition
pub const DEFAULT_ATTACHMENT_FILENAME: &str = "archivo";
