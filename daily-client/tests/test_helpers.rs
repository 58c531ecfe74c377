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

//! Shared helpers for the client integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use daily_client::{
    ClientConfig, DailyClient, HttpTransport, TransportError, TransportRequest, TransportResponse,
};
use wiremock::MockServer;

pub const API_KEY: &str = "test-api-key";

pub fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig {
        base_url: format!("{}/v1/", server.uri()),
        api_key: Some(API_KEY.to_string()),
        timeout: Duration::from_secs(2),
        ..ClientConfig::default()
    }
}

/// A client pointed at `server`, authenticated with [`API_KEY`].
pub fn client_for(server: &MockServer) -> DailyClient {
    DailyClient::from_config(config_for(server)).expect("build client")
}

/// The single request the server received.
pub async fn only_request(server: &MockServer) -> wiremock::Request {
    let mut requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1, "expected exactly one request");
    requests.remove(0)
}

/// A transport that never answers, counting how often it is called.
#[derive(Debug, Default)]
pub struct Hanging {
    pub calls: AtomicUsize,
}

impl Hanging {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HttpTransport for Hanging {
    async fn execute(&self, _: TransportRequest) -> Result<TransportResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        std::future::pending().await
    }
}

