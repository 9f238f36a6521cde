/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 4/11/25
******************************************************************************/
use once_cell::sync::Lazy;
use regex::Regex;

static EXTENDED_FILENAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)filename\*\s*=\s*(?:[\w-]+)?'[^']*'([^;]+)"#).expect("valid regex")
});

static PLAIN_FILENAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)filename\s*=\s*(?:"([^"]*)"|([^;]+))"#).expect("valid regex")
});

/// A binary payload returned by a download endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadedFile {
    /// Raw response body
    pub bytes: Vec<u8>,
    /// File name suggested by `Content-Disposition`, if any
    pub filename: Option<String>,
    /// `Content-Type` of the response, if any
    pub content_type: Option<String>,
}

impl DownloadedFile {
    /// Suggested file name, or `default` when the server did not send one
    #[must_use]
    pub fn filename_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.filename.as_deref().unwrap_or(default)
    }

    /// Size of the payload in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true for an empty payload
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Extracts the suggested file name from a `Content-Disposition` header value
///
/// The RFC 5987 `filename*=UTF-8''...` form wins over the plain `filename=`
/// parameter; quotes are stripped and percent-encoding is decoded.
#[must_use]
pub fn filename_from_content_disposition(header: &str) -> Option<String> {
    if let Some(caps) = EXTENDED_FILENAME.captures(header) {
        let raw = caps[1].trim();
        let decoded = urlencoding::decode(raw)
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| raw.to_string());
        if !decoded.is_empty() {
            return Some(decoded);
        }
    }
    PLAIN_FILENAME.captures(header).and_then(|caps| {
        caps.get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str().trim().replace('"', ""))
            .filter(|name| !name.is_empty())
    })
}
