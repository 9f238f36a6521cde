/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 5/11/25
******************************************************************************/

//! Request core shared by every service
//!
//! Builds the URL from the configured base address, attaches the bearer token
//! kept in the [`Session`], issues the call and classifies the outcome.

use crate::application::config::Config;
use crate::application::session::Session;
use crate::constants::USER_AGENT;
use crate::error::{ApiError, AppError};
use crate::model::download::{DownloadedFile, filename_from_content_disposition};
use crate::model::envelope::{Listing, decode_enveloped};
use crate::model::http::{extract_error_message, join_url, normalize_base_url};
use reqwest::header::{AUTHORIZATION, CONTENT_DISPOSITION, CONTENT_TYPE};
use reqwest::multipart::Form;
use reqwest::{Client as HttpInternalClient, Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

/// Body of an outgoing request
#[derive(Debug)]
pub enum RequestBody {
    /// No body; the JSON content type is still announced
    Empty,
    /// JSON document
    Json(Value),
    /// Multipart form; the transport sets the content type and boundary
    Multipart(Form),
}

/// Successful outcome of a request
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// Parsed JSON body
    Json(Value),
    /// 204 reply, the body was not read
    NoContent,
}

impl ApiResponse {
    /// Returns the parsed body, `None` for a 204
    #[must_use]
    pub fn into_value(self) -> Option<Value> {
        match self {
            ApiResponse::Json(v) => Some(v),
            ApiResponse::NoContent => None,
        }
    }

    /// Unwraps the `data` envelope and decodes the payload
    ///
    /// Fails with [`AppError::NoContent`] when the backend replied 204.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T, AppError> {
        match self {
            ApiResponse::Json(v) => decode_enveloped(v),
            ApiResponse::NoContent => Err(AppError::NoContent),
        }
    }

    /// Decodes a list payload that may wrap its records in `field`
    pub fn listing<T: DeserializeOwned>(self, field: &str) -> Result<Listing<T>, AppError> {
        match self {
            ApiResponse::Json(v) => Listing::from_response(v, field),
            ApiResponse::NoContent => Err(AppError::NoContent),
        }
    }
}

/// HTTP client for the BRISA REST API
#[derive(Debug, Clone)]
pub struct HttpClient {
    http_client: HttpInternalClient,
    base_url: String,
    session: Arc<Session>,
}

impl HttpClient {
    /// Creates a client for the configured base address
    ///
    /// Trailing `/` are stripped from the base address here, once.
    pub fn new(config: &Config, session: Arc<Session>) -> Result<Self, AppError> {
        let mut builder = HttpInternalClient::builder().user_agent(USER_AGENT);
        if let Some(secs) = config.rest_api.timeout {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self {
            http_client: builder.build()?,
            base_url: normalize_base_url(&config.rest_api.base_url),
            session,
        })
    }

    /// Normalized base address
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Session used to authenticate requests
    #[must_use]
    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    /// Full URL for an endpoint path
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    /// Makes a GET request and decodes the payload
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.send(Method::GET, path, RequestBody::Empty).await?.decode()
    }

    /// Makes a GET request on a list endpoint
    pub async fn get_listing<T: DeserializeOwned>(
        &self,
        path: &str,
        field: &str,
    ) -> Result<Listing<T>, AppError> {
        self.send(Method::GET, path, RequestBody::Empty)
            .await?
            .listing(field)
    }

    /// Makes a POST request with a JSON body
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        self.send(Method::POST, path, json_body(body)?)
            .await?
            .decode()
    }

    /// Makes a POST request with a multipart body
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> Result<T, AppError> {
        self.send(Method::POST, path, RequestBody::Multipart(form))
            .await?
            .decode()
    }

    /// Makes a PUT request with a JSON body
    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        self.send(Method::PUT, path, json_body(body)?)
            .await?
            .decode()
    }

    /// Makes a PATCH request with a JSON body
    pub async fn patch<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        self.send(Method::PATCH, path, json_body(body)?)
            .await?
            .decode()
    }

    /// Makes a PATCH request without body
    pub async fn patch_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.send(Method::PATCH, path, RequestBody::Empty)
            .await?
            .decode()
    }

    /// Makes a DELETE request; the reply may or may not carry a body
    pub async fn delete(&self, path: &str) -> Result<ApiResponse, AppError> {
        self.send(Method::DELETE, path, RequestBody::Empty).await
    }

    /// Issues a request and classifies the response
    ///
    /// # Returns
    /// * `ApiResponse::NoContent` for a 204, the body is not read
    /// * `ApiResponse::Json` for any other success status
    /// * `AppError::Api` for a non-success status; a 401 also ends the session
    /// * `AppError::Json` when a success body is not valid JSON
    /// * `AppError::Network` when the transport fails
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
    ) -> Result<ApiResponse, AppError> {
        let url = self.url(path);
        debug!("{} {}", method, url);

        let mut request = self.authorized(self.http_client.request(method, &url));
        request = match body {
            RequestBody::Empty => request.header(CONTENT_TYPE, "application/json"),
            RequestBody::Json(value) => request
                .header(CONTENT_TYPE, "application/json")
                .body(serde_json::to_vec(&value)?),
            RequestBody::Multipart(form) => request.multipart(form),
        };

        let response = request.send().await?;
        self.classify(response).await
    }

    /// Downloads a binary payload
    ///
    /// Same authentication rules as JSON requests. The body is returned
    /// unparsed together with the filename suggested by `Content-Disposition`.
    pub async fn download_file(&self, path: &str) -> Result<DownloadedFile, AppError> {
        let url = self.url(path);
        debug!("GET {} (download)", url);

        let response = self
            .authorized(self.http_client.get(&url))
            .send()
            .await?;
        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            if status == StatusCode::UNAUTHORIZED {
                self.session.handle_unauthorized();
            }
            error!("Download of {} failed with status {}", url, status);
            return Err(AppError::Download(status));
        }

        let headers = response.headers();
        let filename = headers
            .get(CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .and_then(filename_from_content_disposition);
        let content_type = headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = response.bytes().await?.to_vec();
        debug!("Downloaded {} bytes", bytes.len());

        Ok(DownloadedFile {
            bytes,
            filename,
            content_type,
        })
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => request.header(AUTHORIZATION, format!("Bearer {token}")),
            None => request,
        }
    }

    async fn classify(&self, response: Response) -> Result<ApiResponse, AppError> {
        let status = response.status();
        debug!("Response status: {}", status);

        if status == StatusCode::NO_CONTENT {
            return Ok(ApiResponse::NoContent);
        }

        let bytes = response.bytes().await?;
        if status.is_success() {
            return Ok(ApiResponse::Json(serde_json::from_slice(&bytes)?));
        }

        if status == StatusCode::UNAUTHORIZED {
            self.session.handle_unauthorized();
        }
        let details: Value =
            serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::Object(Map::new()));
        let message = extract_error_message(&details, status);
        error!("Request failed with status {}: {}", status, message);
        Err(ApiError {
            status,
            message,
            details,
        }
        .into())
    }
}

fn json_body<B: Serialize>(body: &B) -> Result<RequestBody, AppError> {
    Ok(RequestBody::Json(serde_json::to_value(body)?))
}
