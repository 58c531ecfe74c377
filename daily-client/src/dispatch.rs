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

//! The request pipeline every endpoint goes through.

use std::borrow::Cow;

use log::{debug, trace};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, USER_AGENT};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ApiError, DailyError};
use crate::transport::{TransportError, TransportRequest};
use crate::DailyClient;

/// Body argument for calls that send none.
pub const NO_BODY: Option<&()> = None;

impl DailyClient {
    /// Performs one call and decodes the 200 response into `T`.
    ///
    /// `path` is resolved against the base URL and may carry a query string.
    /// `body`, when given, is sent as JSON; `None` sends no body at all.
    ///
    /// Any status other than 200 is returned as [`DailyError::Api`] without
    /// attempting to decode `T`. A 200 whose body does not decode as `T` is
    /// [`DailyError::Decode`].
    pub async fn perform<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, DailyError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| DailyError::Build(format!("invalid request path {path:?}: {e}")))?;

        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, self.user_agent.clone());
        let body = match body {
            Some(body) => {
                let encoded = serde_json::to_vec(body)
                    .map_err(|e| DailyError::Build(format!("failed to encode request body: {e}")))?;
                headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
                Some(encoded)
            }
            None => None,
        };

        debug!("{method} {url}");
        if let Some(body) = &body {
            trace!("request body: {} bytes", body.len());
        }

        let request = TransportRequest {
            method,
            url,
            headers,
            body,
        };
        let response = tokio::select! {
            biased;
            _ = self.cancel.cancelled() => return Err(TransportError::Cancelled.into()),
            result = self.transport.execute(request) => result?,
        };

        let status = response.status;
        debug!("{path} -> {status} ({} bytes)", response.body.len());

        if status != StatusCode::OK {
            return Err(DailyError::Api(ApiError::from_response(
                status.as_u16(),
                &response.body,
            )));
        }

        let decoded: Result<T, _> = serde_json::from_slice(&response.body);
        match decoded {
            Ok(value) => Ok(value),
            Err(source) => Err(DailyError::Decode {
                status: status.as_u16(),
                raw_body: response.body,
                source,
            }),
        }
    }
}

/// Percent-encodes an identifier for use as one path segment.
///
/// `""`, `"."` and `".."` are rejected: URL resolution would treat them as
/// dot segments and the call would land on a different resource.
pub fn path_segment(id: &str) -> Result<Cow<'_, str>, DailyError> {
    match id {
        "" | "." | ".." => Err(DailyError::Build(format!(
            "identifier {id:?} is not a valid path segment"
        ))),
        _ => Ok(urlencoding::encode(id)),
    }
}

/// Appends `pairs` to `path` as `?k=v&k=v`, in the order given.
///
/// Values are percent-encoded. With no pairs the path is returned unchanged.
pub fn with_query(path: &str, pairs: &[(&str, String)]) -> String {
    let mut out = path.to_string();
    for (i, (key, value)) in pairs.iter().enumerate() {
        out.push(if i == 0 { '?' } else { '&' });
        out.push_str(key);
        out.push('=');
        out.push_str(&urlencoding::encode(value));
    }
    out
}
