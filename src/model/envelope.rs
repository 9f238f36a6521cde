/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 3/11/25
******************************************************************************/

//! Response shape normalization
//!
//! The backend answers either with the payload itself or with an object
//! wrapping it under `data`, and list endpoints sometimes wrap the sequence in
//! a named field next to a `total`. Both ambiguities are resolved here, once,
//! right after the response is parsed.

use crate::error::AppError;
use serde::Deserialize;
use serde::de::{DeserializeOwned, Deserializer};
use serde_json::Value;

/// A response payload, either wrapped in `{"data": ...}` or raw
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    /// Payload found under a non-null `data` field
    Data(Value),
    /// Payload returned as is
    Raw(Value),
}

impl Envelope {
    /// Classifies a parsed response body
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(mut map) if map.get("data").is_some_and(|d| !d.is_null()) => {
                Envelope::Data(map.remove("data").unwrap_or(Value::Null))
            }
            other => Envelope::Raw(other),
        }
    }

    /// Returns the payload, preferring `data` when present
    #[must_use]
    pub fn into_inner(self) -> Value {
        match self {
            Envelope::Data(v) | Envelope::Raw(v) => v,
        }
    }
}

/// Unwraps the envelope and decodes the payload into `T`
pub fn decode_enveloped<T: DeserializeOwned>(value: Value) -> Result<T, AppError> {
    let payload = Envelope::from_value(value).into_inner();
    Ok(serde_json::from_value(payload)?)
}

/// A list payload in one of the shapes the backend produces
#[derive(Debug, Clone, PartialEq)]
pub enum Listing<T> {
    /// `{"<field>": [...], "total": N}`
    Named {
        /// Records found under the named field
        items: Vec<T>,
        /// Total reported by the backend, if any
        total: Option<u64>,
    },
    /// A bare JSON array
    Bare(Vec<T>),
    /// Neither shape; treated as an empty sequence
    Absent,
}

impl<T: DeserializeOwned> Listing<T> {
    /// Decodes an (already unwrapped) payload
    ///
    /// The named field is checked first, then the payload itself. Records that
    /// fail to decode are reported as an error rather than silently dropped.
    ///
    /// # Arguments
    /// * `payload` - Payload with any `data` envelope already removed
    /// * `field` - Name of the field that may wrap the sequence, e.g. `estudiantes`
    pub fn decode(payload: Value, field: &str) -> Result<Self, AppError> {
        match payload {
            Value::Object(mut map) => match map.remove(field) {
                Some(Value::Array(items)) => {
                    let total = map.get("total").and_then(Value::as_u64);
                    let items = serde_json::from_value(Value::Array(items))?;
                    Ok(Listing::Named { items, total })
                }
                _ => Ok(Listing::Absent),
            },
            Value::Array(items) => Ok(Listing::Bare(serde_json::from_value(Value::Array(
                items,
            ))?)),
            _ => Ok(Listing::Absent),
        }
    }

    /// Unwraps the `data` envelope then decodes the listing
    pub fn from_response(value: Value, field: &str) -> Result<Self, AppError> {
        Self::decode(Envelope::from_value(value).into_inner(), field)
    }
}

impl<T> Listing<T> {
    /// Total number of records; the reported total for named listings,
    /// otherwise the number of records received
    #[must_use]
    pub fn total(&self) -> u64 {
        match self {
            Listing::Named { items, total } => total.unwrap_or(items.len() as u64),
            Listing::Bare(items) => items.len() as u64,
            Listing::Absent => 0,
        }
    }

    /// Consumes the listing and returns its records
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        match self {
            Listing::Named { items, .. } | Listing::Bare(items) => items,
            Listing::Absent => Vec::new(),
        }
    }
}

/// Resolves the generic `id` of a record exposing a resource specific alias
///
/// The generic field wins when present; otherwise the alias is used.
///
/// # Arguments
/// * `id` - Value of the generic `id` field
/// * `alias` - Value of the resource specific field
/// * `alias_name` - Name of the resource specific field, used in the error
pub fn resolve_primary_key(
    id: Option<i64>,
    alias: Option<i64>,
    alias_name: &str,
) -> Result<i64, String> {
    id.or(alias)
        .ok_or_else(|| format!("record has neither `id` nor `{alias_name}`"))
}

/// Deserializes a field that the backend may send as an explicit `null`,
/// yielding the type's default instead of failing the whole record
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
