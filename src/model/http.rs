/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 3/11/25
******************************************************************************/

//! URL and query helpers shared by every request issued by the client

use reqwest::StatusCode;
use serde_json::Value;
use std::fmt::Display;

/// Ordered list of query parameters
///
/// Entries whose value is `None` or renders as an empty string are kept in the
/// list but skipped by [`build_query`], so optional filters can be pushed
/// unconditionally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(String, Option<String>)>,
}

impl QueryParams {
    /// Creates an empty parameter list
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a parameter, preserving insertion order
    #[must_use]
    pub fn push<V: Display>(mut self, key: &str, value: Option<V>) -> Self {
        self.entries
            .push((key.to_string(), value.map(|v| v.to_string())));
        self
    }

    /// Iterates over the parameters that survive filtering
    pub fn eligible(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().filter_map(|(k, v)| match v.as_deref() {
            Some(v) if !v.is_empty() => Some((k.as_str(), v)),
            _ => None,
        })
    }

    /// Returns true when no parameter would be emitted
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.eligible().next().is_none()
    }
}

/// Builds a query string from the given parameters
///
/// Absent and empty values are dropped, names and values are percent-encoded
/// and joined with `&`. Returns `?a=1&b=2`, or an empty string when nothing is
/// left after filtering.
#[must_use]
pub fn build_query(params: &QueryParams) -> String {
    let qs = params
        .eligible()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    if qs.is_empty() {
        String::new()
    } else {
        format!("?{qs}")
    }
}

/// Strips every trailing `/` from a base address
#[must_use]
pub fn normalize_base_url(base_url: &str) -> String {
    base_url.trim().trim_end_matches('/').to_string()
}

/// Joins a normalized base address and an endpoint path
///
/// Absolute `http(s)://` endpoints are returned untouched; relative ones get
/// exactly one leading `/` before concatenation.
#[must_use]
pub fn join_url(base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    if path.starts_with('/') {
        format!("{base_url}{path}")
    } else {
        format!("{base_url}/{path}")
    }
}

/// Extracts a human readable message from an error body
///
/// Looks at `message`, then at `detail` when it is a plain string, and
/// otherwise synthesizes `HTTP Error: <status>`.
#[must_use]
pub fn extract_error_message(details: &Value, status: StatusCode) -> String {
    let from_body = ["message", "detail"].iter().find_map(|key| {
        details
            .get(*key)
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string)
    });
    from_body.unwrap_or_else(|| format!("HTTP Error: {}", status.as_u16()))
}
