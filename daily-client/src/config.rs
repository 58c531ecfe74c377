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

//! Client configuration.

use std::env;
use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

/// Base URL of the public API.
pub const DEFAULT_BASE_URL: &str = "https://api.daily.co/v1/";

/// Timeout applied to each call unless configured otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// `User-Agent` sent with every call unless configured otherwise.
pub const DEFAULT_USER_AGENT: &str = concat!("daily-client/", env!("CARGO_PKG_VERSION"));

/// Settings fixed for the lifetime of a [`DailyClient`](crate::DailyClient).
#[derive(Clone)]
pub struct ClientConfig {
    /// Endpoint that relative request paths are resolved against.
    pub base_url: String,
    /// API key sent as a bearer credential. Calls are unauthenticated when `None`.
    pub api_key: Option<String>,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl ClientConfig {
    /// Default configuration authenticated with `api_key`.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// Load configuration from environment variables.
    ///
    /// # Optional
    /// - `DAILY_API_KEY`
    /// - `DAILY_API_URL` (default: [`DEFAULT_BASE_URL`])
    /// - `DAILY_TIMEOUT_SECS` (default: `"5"`)
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("DAILY_API_KEY").ok().filter(|s| !s.is_empty());
        let base_url = env::var("DAILY_API_URL")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let timeout = match env::var("DAILY_TIMEOUT_SECS") {
            Ok(secs) => Duration::from_secs(
                secs.trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidTimeout("DAILY_TIMEOUT_SECS"))?,
            ),
            Err(_) => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            base_url,
            api_key,
            timeout,
            ..Self::default()
        })
    }

    /// Parses [`base_url`](Self::base_url), appending a trailing `/` when
    /// missing so that `rooms` resolves to `<base>/rooms` rather than
    /// replacing the last path segment.
    pub fn parsed_base_url(&self) -> Result<Url, ConfigError> {
        let mut url = Url::parse(&self.base_url).map_err(|source| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            source,
        })?;
        if url.cannot_be_a_base() {
            return Err(ConfigError::NotABase(self.base_url.clone()));
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }
}
