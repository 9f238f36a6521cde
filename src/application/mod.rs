/// Request core
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces
pub mod interfaces;
/// Role based permission checks
pub mod permissions;
/// Service implementations
pub mod services;
/// Client side session
pub mod session;
/// Observable state stores
pub mod store;
