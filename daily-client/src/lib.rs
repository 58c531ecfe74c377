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

//! Typed REST client for the Daily.co video API.
//!
//! Manages rooms, meeting tokens, domain configuration and recordings. Every
//! method makes exactly one HTTP round trip: no caching, no retries, no
//! automatic pagination.
//!
//! # Example
//!
//! ```no_run
//! use daily_client::DailyClient;
//! use daily_client::daily_types::requests::CreateRoomRequest;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = DailyClient::new("my-api-key")?;
//!
//! let room = client
//!     .create_room(&CreateRoomRequest {
//!         name: Some("standup".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("Join at {}", room.url.unwrap_or_default());
//! # Ok(())
//! # }
//! ```
//!
//! # Errors
//!
//! Failures come back as [`DailyError`]; branch on
//! [`DailyError::category`] to tell retryable conditions from permanent ones.
//!
//! # Cancellation
//!
//! Dropping a call's future aborts it. To cancel from elsewhere, bind a
//! [`CancellationToken`] with [`DailyClient::with_cancellation`]; a cancelled
//! call fails with [`TransportError::Cancelled`].

pub mod config;
pub mod dispatch;
pub mod domain;
pub mod error;
pub mod meeting_tokens;
pub mod recordings;
pub mod rooms;
pub mod transport;

pub use config::ClientConfig;
pub use daily_types;
pub use error::{ApiError, ConfigError, DailyError, ErrorCategory, StatusKind};
pub use reqwest::Method;
pub use tokio_util::sync::CancellationToken;
pub use transport::{
    BearerAuth, HttpTransport, ReqwestTransport, TransportError, TransportRequest,
    TransportResponse,
};

use std::sync::Arc;

use reqwest::header::HeaderValue;
use url::Url;

/// A typed client for the Daily.co REST API.
///
/// Holds only immutable configuration and a shared transport, so one instance
/// (or its clones) can serve any number of concurrent calls.
#[derive(Debug, Clone)]
pub struct DailyClient {
    base_url: Url,
    user_agent: HeaderValue,
    transport: Arc<dyn HttpTransport>,
    cancel: CancellationToken,
}

impl DailyClient {
    /// Client for the public API, authenticated with `api_key`.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ConfigError> {
        Self::from_config(ClientConfig::new(api_key))
    }

    /// Client using reqwest with the configured timeout.
    pub fn from_config(config: ClientConfig) -> Result<Self, ConfigError> {
        let transport = ReqwestTransport::new(config.timeout).map_err(ConfigError::HttpClient)?;
        Self::with_transport(config, transport)
    }

    /// Client running on a caller-supplied transport.
    ///
    /// When `config.api_key` is set the transport is wrapped in
    /// [`BearerAuth`]. `config.timeout` is not applied; timeouts are the
    /// transport's concern.
    pub fn with_transport<T>(config: ClientConfig, transport: T) -> Result<Self, ConfigError>
    where
        T: HttpTransport + 'static,
    {
        let base_url = config.parsed_base_url()?;
        let user_agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|_| ConfigError::InvalidUserAgent(config.user_agent.clone()))?;
        let transport: Arc<dyn HttpTransport> = match &config.api_key {
            Some(api_key) => Arc::new(
                BearerAuth::new(transport, api_key).map_err(|_| ConfigError::InvalidApiKey)?,
            ),
            None => Arc::new(transport),
        };

        Ok(Self {
            base_url,
            user_agent,
            transport,
            cancel: CancellationToken::new(),
        })
    }

    /// A clone of this client whose calls abort when `token` is cancelled.
    ///
    /// The transport and configuration are shared with `self`.
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        Self {
            cancel: token,
            ..self.clone()
        }
    }

    /// Endpoint request paths are resolved against. Always ends in `/`.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}
