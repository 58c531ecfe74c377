/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Error types for the Daily client.
//!
//! Every failed call returns exactly one [`DailyError`]. Callers decide what to
//! do with it by [`category`](DailyError::category): transport failures and
//! rate limiting are worth retrying, bad requests and auth failures are not,
//! and decode failures mean the service and this crate disagree on a shape.

use std::borrow::Cow;
use std::fmt;

use daily_types::ErrorDetails;
use thiserror::Error;

use crate::transport::TransportError;

/// Classification of a non-200 HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// HTTP 400.
    BadRequest,
    /// HTTP 401.
    Unauthorized,
    /// HTTP 429.
    RateLimited,
    /// HTTP 500.
    Internal,
    /// Any other non-200 status.
    Unexpected,
}

impl StatusKind {
    /// Maps a status code to its kind. Total: every code has exactly one kind.
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => Self::BadRequest,
            401 => Self::Unauthorized,
            429 => Self::RateLimited,
            500 => Self::Internal,
            _ => Self::Unexpected,
        }
    }

    /// Canonical message for this kind.
    pub fn message(self) -> &'static str {
        match self {
            Self::BadRequest => "bad request",
            Self::Unauthorized => "unauthorized",
            Self::RateLimited => "too many requests",
            Self::Internal => "internal service error",
            Self::Unexpected => "unexpected response",
        }
    }
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// The service answered with a status other than 200.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub kind: StatusKind,
    /// Status code as received.
    pub status: u16,
    /// The body parsed as [`ErrorDetails`], when it parsed.
    pub details: Option<ErrorDetails>,
    /// The body exactly as received, byte for byte.
    pub raw_body: Vec<u8>,
}

impl ApiError {
    /// Builds the error for a failed response, parsing the body on a best-effort basis.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        Self {
            kind: StatusKind::from_status(status),
            status,
            details: serde_json::from_slice(body).ok(),
            raw_body: body.to_vec(),
        }
    }

    /// The body as text. Invalid UTF-8 is replaced with U+FFFD.
    pub fn raw_body_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.raw_body)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (HTTP {})", self.kind, self.status)?;
        match &self.details {
            Some(details) => write!(f, ": {details}"),
            None if !self.raw_body.is_empty() => write!(f, ": {}", self.raw_body_text()),
            None => Ok(()),
        }
    }
}

impl std::error::Error for ApiError {}

/// Flat view of the error taxonomy, for branching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// The request could not be built; nothing was sent.
    Build,
    /// Network failure, timeout, or cancellation. The server may or may not have seen the call.
    Transport,
    /// The server answered with a non-200 status.
    Status(StatusKind),
    /// The server answered 200 but the body did not match the expected shape.
    Decode,
}

/// Errors returned by [`DailyClient`](crate::DailyClient) methods.
#[derive(Debug, Error)]
pub enum DailyError {
    /// Malformed path or unencodable body. Never leaves the process.
    #[error("daily: failed to build request: {0}")]
    Build(String),

    /// The transport call did not produce a response.
    #[error("daily: request failed: {0}")]
    Transport(#[from] TransportError),

    /// Non-200 response.
    #[error("daily: {0}")]
    Api(ApiError),

    /// 200 response whose body did not decode.
    #[error("daily: parse error (HTTP {status}): {source}")]
    Decode {
        status: u16,
        raw_body: Vec<u8>,
        #[source]
        source: serde_json::Error,
    },
}

impl DailyError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Build(_) => ErrorCategory::Build,
            Self::Transport(_) => ErrorCategory::Transport,
            Self::Api(err) => ErrorCategory::Status(err.kind),
            Self::Decode { .. } => ErrorCategory::Decode,
        }
    }

    /// HTTP status, when the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api(err) => Some(err.status),
            Self::Decode { status, .. } => Some(*status),
            Self::Build(_) | Self::Transport(_) => None,
        }
    }

    /// Response body as received, when the server answered.
    pub fn raw_body(&self) -> Option<&[u8]> {
        match self {
            Self::Api(err) => Some(&err.raw_body),
            Self::Decode { raw_body, .. } => Some(raw_body),
            Self::Build(_) | Self::Transport(_) => None,
        }
    }

    /// [`raw_body`](Self::raw_body) as text, with invalid UTF-8 replaced.
    pub fn raw_body_text(&self) -> Option<Cow<'_, str>> {
        self.raw_body().map(String::from_utf8_lossy)
    }

    /// Parsed error payload of a non-200 response, if it parsed.
    pub fn details(&self) -> Option<&ErrorDetails> {
        match self {
            Self::Api(err) => err.details.as_ref(),
            _ => None,
        }
    }

    /// `true` for failures that may succeed if the same call is made again:
    /// transport errors and rate limiting.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Transport | ErrorCategory::Status(StatusKind::RateLimited)
        )
    }
}

/// Errors raised while constructing a [`DailyClient`](crate::DailyClient).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid base URL {url:?}: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("base URL {0:?} cannot be used as a base for relative paths")]
    NotABase(String),

    #[error("API key is not a valid header value")]
    InvalidApiKey,

    #[error("user agent {0:?} is not a valid header value")]
    InvalidUserAgent(String),

    #[error("{0} must be a whole number of seconds")]
    InvalidTimeout(&'static str),

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}
