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

//! The HTTP capability the dispatcher runs on.
//!
//! [`HttpTransport`] is the seam: [`ReqwestTransport`] is the production
//! implementation, [`BearerAuth`] decorates any transport with the API key,
//! and tests substitute their own.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Method, StatusCode};
use thiserror::Error;
use url::Url;

/// A fully built request.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    /// `None` sends no body at all.
    pub body: Option<Vec<u8>>,
}

/// A response with its body already read to the end.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

/// Failure to get a complete response.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout,

    #[error("request cancelled")]
    Cancelled,

    #[error(transparent)]
    Http(reqwest::Error),

    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Http(err)
        }
    }
}

/// Executes a single HTTP request.
///
/// Implementations must return only once the whole response body has been
/// read, whatever the status, so the connection is released.
#[async_trait]
pub trait HttpTransport: Send + Sync + fmt::Debug {
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, TransportError>;
}

#[async_trait]
impl<T: HttpTransport + ?Sized> HttpTransport for Arc<T> {
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        (**self).execute(request).await
    }
}

/// [`HttpTransport`] backed by a [`reqwest::Client`].
///
/// Connection pooling and TLS are reqwest's. The timeout set at build time
/// covers the whole call, body included.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http })
    }

    /// Wraps an already configured client.
    pub fn from_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        let mut builder = self
            .http
            .request(request.method, request.url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();

        Ok(TransportResponse {
            status,
            headers,
            body,
        })
    }
}

/// Adds `Authorization: Bearer <key>` to every request and otherwise
/// delegates to the wrapped transport unchanged.
pub struct BearerAuth<T> {
    inner: T,
    credential: HeaderValue,
}

impl<T> BearerAuth<T> {
    /// Fails if `api_key` contains characters not allowed in a header value.
    pub fn new(inner: T, api_key: &str) -> Result<Self, reqwest::header::InvalidHeaderValue> {
        let mut credential = HeaderValue::from_str(&format!("Bearer {api_key}"))?;
        credential.set_sensitive(true);
        Ok(Self { inner, credential })
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }
}

impl<T: fmt::Debug> fmt::Debug for BearerAuth<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BearerAuth")
            .field("inner", &self.inner)
            .field("credential", &"<redacted>")
            .finish()
    }
}

#[async_trait]
impl<T: HttpTransport> HttpTransport for BearerAuth<T> {
    async fn execute(
        &self,
        mut request: TransportRequest,
    ) -> Result<TransportResponse, TransportError> {
        request
            .headers
            .insert(AUTHORIZATION, self.credential.clone());
        self.inner.execute(request).await
    }
}
