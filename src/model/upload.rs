use reqwest::multipart::{Form, Part};
use std::path::Path;

use crate::error::AppError;

/// A file to be sent in a multipart request
#[derive(Debug, Clone, PartialEq)]
pub struct UploadFile {
    /// File name reported to the backend
    pub file_name: String,
    /// MIME type, `application/octet-stream` when unknown
    pub mime: String,
    /// File contents
    pub bytes: Vec<u8>,
}

impl UploadFile {
    /// Creates an upload from in-memory contents
    #[must_use]
    pub fn new(file_name: &str, mime: &str, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.to_string(),
            mime: mime.to_string(),
            bytes,
        }
    }

    /// Reads a file from disk, guessing the MIME type from its extension
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| AppError::InvalidInput(format!("invalid file path: {}", path.display())))?
            .to_string();
        let mime = mime_from_extension(&file_name).to_string();
        Ok(Self {
            file_name,
            mime,
            bytes,
        })
    }

    /// Wraps the file in a single-part multipart form under `field`
    pub fn into_form(self, field: &str) -> Result<Form, AppError> {
        let part = Part::bytes(self.bytes)
            .file_name(self.file_name)
            .mime_str(&self.mime)
            .map_err(|e| AppError::InvalidInput(format!("invalid mime type {}: {e}", self.mime)))?;
        Ok(Form::new().part(field.to_string(), part))
    }
}

fn mime_from_extension(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "xls" => "application/vnd.ms-excel",
        "csv" => "text/csv",
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}
