use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Query parameters whose values are never echoed back in error text.
const REDACTED_PARAMS: &[&str] = &["client_secret"];

/// Errors returned by every Clearbit client operation.
#[derive(Debug)]
pub enum ClearbitError {
    /// Client settings are invalid.
    Config(String),
    /// The request could not be assembled (bad URL, unserializable body).
    Request(String),
    /// The HTTP round trip failed (DNS, connect, TLS, timeout, body read).
    Transport(reqwest::Error),
    /// The API answered with a non-2xx status.
    Api(ErrorResponse),
    /// A 2xx body could not be decoded into the expected record.
    Decode(serde_json::Error),
}

impl ClearbitError {
    /// Returns the API error response, if this is an API-level failure.
    pub fn as_api(&self) -> Option<&ErrorResponse> {
        match self {
            ClearbitError::Api(resp) => Some(resp),
            _ => None,
        }
    }

    /// HTTP status of the failed call, when the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        self.as_api().map(|resp| resp.status)
    }
}

impl fmt::Display for ClearbitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClearbitError::Config(msg) => write!(f, "Invalid configuration: {}", msg),
            ClearbitError::Request(msg) => write!(f, "Invalid request: {}", msg),
            ClearbitError::Transport(e) => write!(f, "Transport error: {}", e),
            ClearbitError::Api(resp) => write!(f, "{}", resp),
            ClearbitError::Decode(e) => write!(f, "Failed to decode response: {}", e),
        }
    }
}

impl std::error::Error for ClearbitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClearbitError::Config(_) | ClearbitError::Request(_) => None,
            ClearbitError::Transport(e) => Some(e),
            ClearbitError::Api(resp) => Some(resp),
            ClearbitError::Decode(e) => Some(e),
        }
    }
}

impl From<reqwest::Error> for ClearbitError {
    /// Wraps a transport failure, redacting secrets in the URL it carries.
    fn from(mut err: reqwest::Error) -> Self {
        if let Some(url) = err.url_mut() {
            *url = sanitize_url(url);
        }
        ClearbitError::Transport(err)
    }
}

impl From<serde_json::Error> for ClearbitError {
    fn from(err: serde_json::Error) -> Self {
        ClearbitError::Decode(err)
    }
}

/// A non-2xx response from the API.
///
/// Always produced on the failure path, even when the body was empty or not
/// JSON; in that case `error` keeps its empty default.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    /// Status line returned by the server.
    pub status: StatusCode,
    /// Method of the request that failed.
    pub method: Method,
    /// Request URL with secrets redacted.
    pub url: Url,
    /// Provider-defined detail, empty when the body could not be parsed.
    pub error: ApiErrorDetail,
}

impl ErrorResponse {
    /// Builds an error response from the raw parts of a failed call.
    ///
    /// The URL is sanitized before it is stored.
    pub fn new(status: StatusCode, method: Method, url: &Url, body: &[u8]) -> Self {
        Self {
            status,
            method,
            url: sanitize_url(url),
            error: decode_error_body(body),
        }
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.method, self.url, self.status)?;
        if !self.error.is_empty() {
            write!(f, " ({})", self.error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ErrorResponse {}

/// The `{"type": ..., "message": ...}` object inside an API error body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    /// Machine-readable error category, e.g. `email_invalid`.
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub message: String,
}

impl ApiErrorDetail {
    pub fn is_empty(&self) -> bool {
        self.kind.is_empty() && self.message.is_empty()
    }
}

impl fmt::Display for ApiErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

#[derive(Debug, Default, Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    error: ApiErrorDetail,
}

/// Parses an error body of shape `{"error": {"type": T, "message": M}}`.
///
/// Anything else (empty, HTML, a different JSON shape) yields an empty detail.
pub fn decode_error_body(body: &[u8]) -> ApiErrorDetail {
    serde_json::from_slice::<ErrorEnvelope>(body)
        .map(|envelope| envelope.error)
        .unwrap_or_default()
}

/// Returns a copy of `url` with secret query parameters replaced by `REDACTED`.
pub fn sanitize_url(url: &Url) -> Url {
    let has_secret = url
        .query_pairs()
        .any(|(key, value)| REDACTED_PARAMS.contains(&&*key) && !value.is_empty());
    if !has_secret {
        return url.clone();
    }

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(key, value)| {
            if REDACTED_PARAMS.contains(&&*key) && !value.is_empty() {
                (key.into_owned(), "REDACTED".to_string())
            } else {
                (key.into_owned(), value.into_owned())
            }
        })
        .collect();

    let mut sanitized = url.clone();
    sanitized.query_pairs_mut().clear().extend_pairs(pairs);
    sanitized
}
