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

//! Error payload returned by the service on failed calls.

use serde::{Deserialize, Serialize};

/// Body of a non-success response, e.g.
/// `{ "error": "invalid-request-error", "info": "name must be unique" }`.
///
/// Both keys are optional; the service does not guarantee either.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetails {
    /// Machine-readable error class.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Human-readable explanation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
}

impl std::fmt::Display for ErrorDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.error, &self.info) {
            (Some(error), Some(info)) => write!(f, "[{error}] {info}"),
            (Some(error), None) => f.write_str(error),
            (None, Some(info)) => f.write_str(info),
            (None, None) => f.write_str("no details"),
        }
    }
}
