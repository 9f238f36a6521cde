use brisa_client::error::{ApiError, AppError};
use reqwest::StatusCode;
use serde_json::json;
use std::error::Error;

fn api_error(status: StatusCode) -> ApiError {
    ApiError {
        status,
        message: "Estudiante no encontrado".to_string(),
        details: json!({"detail": "Estudiante no encontrado"}),
    }
}

#[test]
fn test_app_error_display_api() {
    let error = AppError::Api(api_error(StatusCode::NOT_FOUND));
    assert_eq!(error.to_string(), "api error: Estudiante no encontrado (404)");
}

#[test]
fn test_app_error_display_download() {
    let error = AppError::Download(StatusCode::FORBIDDEN);
    assert_eq!(error.to_string(), "download failed with status 403");
}

#[test]
fn test_app_error_display_no_content() {
    assert_eq!(AppError::NoContent.to_string(), "no content");
}

#[test]
fn test_app_error_display_deserialization() {
    let error = AppError::Deserialization("Invalid JSON".to_string());
    assert_eq!(error.to_string(), "deserialization error: Invalid JSON");
}

#[test]
fn test_app_error_display_invalid_input() {
    let error = AppError::InvalidInput("empty file".to_string());
    assert_eq!(error.to_string(), "invalid input: empty file");
}

#[test]
fn test_app_error_status_and_unauthorized() {
    let error = AppError::from(api_error(StatusCode::UNAUTHORIZED));
    assert_eq!(error.status(), Some(StatusCode::UNAUTHORIZED));
    assert!(error.is_unauthorized());
    assert!(error.api_error().is_some());

    let download = AppError::Download(StatusCode::UNAUTHORIZED);
    assert!(download.is_unauthorized());
    assert!(download.api_error().is_none());

    assert_eq!(AppError::NoContent.status(), None);
}

#[test]
fn test_app_error_from_json_keeps_source() {
    let parse_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let error = AppError::from(parse_error);
    assert!(matches!(error, AppError::Json(_)));
    assert!(error.source().is_some());
}

#[test]
fn test_app_error_from_io() {
    let error = AppError::from(std::io::Error::other("disk full"));
    assert_eq!(error.to_string(), "io error: disk full");
}
