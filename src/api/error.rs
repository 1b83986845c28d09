//
//  bookstack-client
//  api/error.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Error taxonomy for BookStack API operations.
//!
//! Every failure produced by the request pipeline ends up as exactly one
//! [`ApiError`] value. HTTP failures (a response was received with a status
//! of 400 or above) are classified by [`ApiError::from_response`]; transport
//! failures (nothing usable was received) by [`ApiError::from_transport`].
//!
//! # Classification
//!
//! | Status | Variant | Extra data |
//! |--------|---------|------------|
//! | 401 | `AuthenticationFailed` | |
//! | 403 | `PermissionDenied` | |
//! | 404 | `NotFound` | |
//! | 422 | `ValidationFailed` | field → messages mapping |
//! | 429 | `RateLimited` | optional `Retry-After` seconds |
//! | 500-599 | `ServerError` | |
//! | any other ≥ 400 | `Api` | |
//!
//! Every HTTP variant carries an [`ErrorResponse`] with the status code, the
//! extracted message, the parsed body and the method/URL of the request.
//!
//! # Example
//!
//! ```rust,no_run
//! use bookstack_client::api::ApiError;
//!
//! fn report(err: &ApiError) {
//!     match err {
//!         ApiError::NotFound(resp) => eprintln!("missing: {}", resp.url),
//!         ApiError::ValidationFailed { field_errors, .. } => {
//!             for (field, messages) in field_errors {
//!                 eprintln!("{}: {}", field, messages.join(", "));
//!             }
//!         }
//!         e if e.is_connection_error() => eprintln!("network trouble: {}", e),
//!         e => eprintln!("error: {}", e),
//!     }
//! }
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use serde_json::Value;
use thiserror::Error;

use super::request::RawResponse;

/// Message used when the error body offers nothing better.
const DEFAULT_MESSAGE: &str = "API request failed";

/// Maximum number of characters of a raw body quoted in a fallback message.
const BODY_SNIPPET_CHARS: usize = 200;

/// Top-level body fields searched for a message, in order.
const MESSAGE_FIELDS: [&str; 4] = ["message", "error", "detail", "title"];

/// Fields of a nested `error` object searched for a message, in order.
const NESTED_MESSAGE_FIELDS: [&str; 3] = ["message", "detail", "description"];

/// Details of a failed HTTP exchange.
///
/// Shared by every HTTP-classified [`ApiError`] variant.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    /// HTTP status code of the response.
    pub status: u16,

    /// Human-readable message extracted from the body.
    pub message: String,

    /// Parsed JSON body, or `Value::Null` when the body was not JSON.
    pub body: Value,

    /// HTTP method of the request that failed.
    pub method: String,

    /// Full URL of the request that failed.
    pub url: String,
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | Status: {} | Request: {} {}",
            self.message, self.status, self.method, self.url
        )
    }
}

/// Unified error type for all BookStack client operations.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The token pair was rejected (401).
    #[error("{0}")]
    AuthenticationFailed(ErrorResponse),

    /// The token's user lacks permission for the operation (403).
    #[error("{0}")]
    PermissionDenied(ErrorResponse),

    /// The requested item does not exist (404).
    #[error("{0}")]
    NotFound(ErrorResponse),

    /// The request payload was rejected (422).
    ///
    /// `field_errors` is taken from `error.validation` in the body.
    #[error("{response}")]
    ValidationFailed {
        response: ErrorResponse,
        field_errors: BTreeMap<String, Vec<String>>,
    },

    /// Too many requests (429).
    ///
    /// `retry_after` holds the `Retry-After` header in seconds when it was
    /// present and numeric.
    #[error("{response}")]
    RateLimited {
        response: ErrorResponse,
        retry_after: Option<u64>,
    },

    /// The server failed to handle the request (5xx).
    #[error("{0}")]
    ServerError(ErrorResponse),

    /// Any other status of 400 or above.
    #[error("{0}")]
    Api(ErrorResponse),

    /// The request did not complete within the configured timeout.
    ///
    /// A timeout is a kind of connection failure; see
    /// [`ApiError::is_connection_error`].
    #[error("Request timed out")]
    Timeout {
        timeout: Option<Duration>,
        #[source]
        source: reqwest::Error,
    },

    /// DNS, connect or other network-level failure.
    #[error("Connection failed: {source}")]
    Connection {
        #[source]
        source: reqwest::Error,
    },

    /// Any other failure before a response was received.
    #[error("Request error: {source}")]
    Request {
        #[source]
        source: reqwest::Error,
    },

    /// A successful response body could not be decoded.
    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The caller passed something the API contract forbids.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The client could not be constructed.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ApiError {
    /// Classifies a response whose status is 400 or above.
    ///
    /// The body is parsed as JSON when possible. The message comes from the
    /// first of `message`, `error`, `detail`, `title` present at the top
    /// level; a nested `error` object's `message`, `detail` or `description`
    /// takes precedence. Without any of those, the first 200 characters of
    /// the raw body are quoted.
    pub fn from_response(raw: &RawResponse) -> Self {
        let text = String::from_utf8_lossy(&raw.body);
        let body: Value = serde_json::from_str(&text).unwrap_or(Value::Null);

        let message = match extract_message(&body) {
            Some(message) => message,
            None if !text.is_empty() => {
                let snippet: String = text.chars().take(BODY_SNIPPET_CHARS).collect();
                format!("{}: {}", DEFAULT_MESSAGE, snippet)
            }
            None => DEFAULT_MESSAGE.to_string(),
        };

        let field_errors = (raw.status == 422).then(|| extract_field_errors(&body));
        let retry_after = if raw.status == 429 {
            raw.headers
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.trim().parse::<u64>().ok())
        } else {
            None
        };

        let response = ErrorResponse {
            status: raw.status,
            message,
            body,
            method: raw.method.clone(),
            url: raw.url.clone(),
        };

        match raw.status {
            401 => Self::AuthenticationFailed(response),
            403 => Self::PermissionDenied(response),
            404 => Self::NotFound(response),
            422 => Self::ValidationFailed {
                response,
                field_errors: field_errors.unwrap_or_default(),
            },
            429 => Self::RateLimited {
                response,
                retry_after,
            },
            500..=599 => Self::ServerError(response),
            _ => Self::Api(response),
        }
    }

    /// Classifies a failure that happened before a response was received.
    ///
    /// `timeout` is the per-request timeout the client was configured with;
    /// it is reported back on [`ApiError::Timeout`].
    pub fn from_transport(source: reqwest::Error, timeout: Option<Duration>) -> Self {
        if source.is_timeout() {
            Self::Timeout { timeout, source }
        } else if source.is_connect() || has_io_cause(&source) {
            Self::Connection { source }
        } else {
            Self::Request { source }
        }
    }

    /// Returns the HTTP exchange details for HTTP-classified errors.
    pub fn response(&self) -> Option<&ErrorResponse> {
        match self {
            Self::AuthenticationFailed(response)
            | Self::PermissionDenied(response)
            | Self::NotFound(response)
            | Self::ServerError(response)
            | Self::Api(response)
            | Self::ValidationFailed { response, .. }
            | Self::RateLimited { response, .. } => Some(response),
            _ => None,
        }
    }

    /// Returns the HTTP status code, if a response was received.
    pub fn status(&self) -> Option<u16> {
        self.response().map(|response| response.status)
    }

    /// Returns the human-readable message without the status/request suffix.
    pub fn message(&self) -> String {
        match self.response() {
            Some(response) => response.message.clone(),
            None => self.to_string(),
        }
    }

    /// Returns the per-field validation messages of a 422 response.
    pub fn field_errors(&self) -> Option<&BTreeMap<String, Vec<String>>> {
        match self {
            Self::ValidationFailed { field_errors, .. } => Some(field_errors),
            _ => None,
        }
    }

    /// Returns the `Retry-After` delay of a 429 response, in seconds.
    pub fn retry_after(&self) -> Option<u64> {
        match self {
            Self::RateLimited { retry_after, .. } => *retry_after,
            _ => None,
        }
    }

    /// Returns the BookStack error code (`error.code`) from the body.
    pub fn error_code(&self) -> Option<String> {
        self.response()
            .and_then(|response| response.body.get("error"))
            .and_then(|error| error.get("code"))
            .map(value_text)
    }

    /// Returns the detailed error information (`error.details`) from the body.
    pub fn error_details(&self) -> Option<&Value> {
        self.response()
            .and_then(|response| response.body.get("error"))
            .and_then(|error| error.get("details"))
    }

    /// True for HTTP-classified errors.
    pub fn is_api_error(&self) -> bool {
        self.response().is_some()
    }

    /// True for network-level failures, timeouts included.
    pub fn is_connection_error(&self) -> bool {
        matches!(self, Self::Timeout { .. } | Self::Connection { .. })
    }
}

fn extract_message(body: &Value) -> Option<String> {
    let object = body.as_object().filter(|object| !object.is_empty())?;

    let mut message = MESSAGE_FIELDS
        .iter()
        .find_map(|field| object.get(*field))
        .map(value_text);

    if let Some(Value::Object(nested)) = object.get("error") {
        if let Some(found) = NESTED_MESSAGE_FIELDS
            .iter()
            .find_map(|field| nested.get(*field))
        {
            message = Some(value_text(found));
        }
    }

    message
}

fn extract_field_errors(body: &Value) -> BTreeMap<String, Vec<String>> {
    body.get("error")
        .and_then(|error| error.get("validation"))
        .and_then(Value::as_object)
        .map(|validation| {
            validation
                .iter()
                .map(|(field, messages)| {
                    let messages = match messages {
                        Value::Array(items) => items.iter().map(value_text).collect(),
                        other => vec![value_text(other)],
                    };
                    (field.clone(), messages)
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Strings are taken verbatim, anything else as compact JSON.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn has_io_cause(error: &reqwest::Error) -> bool {
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        if cause.is::<std::io::Error>() {
            return true;
        }
        source = cause.source();
    }
    false
}
