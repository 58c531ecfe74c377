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

//! Integration tests for domain configuration and meeting token endpoints.

mod test_helpers;

use chrono::DateTime;
use daily_client::daily_types::requests::{CreateMeetingTokenRequest, SetDomainConfigRequest};
use daily_client::daily_types::{DomainProperties, MeetingToken, PermissionType, Permissions};
use daily_client::{ErrorCategory, StatusKind};
use serde_json::json;
use test_helpers::*;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_get_domain_config_hits_the_base_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "domain_name": "your-domain",
            "config": { "hide_daily_branding": false, "lang": "en" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let domain = client_for(&server).get_domain_config().await.unwrap();
    assert_eq!(domain.domain_name.as_deref(), Some("your-domain"));
    let config = domain.config.unwrap();
    assert_eq!(config.hide_daily_branding, Some(false));
    assert_eq!(config.hipaa, None);
}

#[tokio::test]
async fn test_set_domain_config_wraps_properties() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/"))
        .and(body_json(json!({ "properties": { "redirect_on_meeting_exit": "https://example.com/bye" } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "domain_name": "your-domain" })))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .set_domain_config(&SetDomainConfigRequest {
            properties: Some(DomainProperties {
                redirect_on_meeting_exit: Some("https://example.com/bye".to_string()),
                ..Default::default()
            }),
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_create_meeting_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/meeting-tokens"))
        .and(body_json(json!({
            "properties": {
                "room_name": "standup",
                "is_owner": false,
                "exp": 1_700_000_000,
                "permissions": { "canSend": ["audio"] }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "eyJhbGciOi" })))
        .expect(1)
        .mount(&server)
        .await;

    let created = client_for(&server)
        .create_meeting_token(&CreateMeetingTokenRequest {
            properties: Some(MeetingToken {
                room_name: Some("standup".to_string()),
                is_owner: Some(false),
                expires_at: DateTime::from_timestamp(1_700_000_000, 0),
                permissions: Some(Permissions {
                    can_send: Some(vec![PermissionType::Audio]),
                    ..Default::default()
                }),
                ..Default::default()
            }),
        })
        .await
        .unwrap();

    assert_eq!(created.token.as_deref(), Some("eyJhbGciOi"));
}

#[tokio::test]
async fn test_get_meeting_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/meeting-tokens/eyJhbGciOi"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "room_name": "standup",
            "is_owner": true,
            "user_name": "Alice"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let token = client_for(&server).get_meeting_token("eyJhbGciOi").await.unwrap();
    assert_eq!(token.room_name.as_deref(), Some("standup"));
    assert_eq!(token.is_owner, Some(true));
    assert_eq!(token.user_name.as_deref(), Some("Alice"));
    assert_eq!(token.expires_at, None);
}

#[tokio::test]
async fn test_invalid_meeting_token_is_bad_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_string(r#"{"error":"invalid-request-error","info":"token invalid"}"#),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).get_meeting_token("garbage").await.unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Status(StatusKind::BadRequest));
    assert_eq!(
        err.details().and_then(|d| d.error.as_deref()),
        Some("invalid-request-error")
    );
}

#[tokio::test]
async fn test_dot_token_sends_nothing() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let err = client.get_meeting_token("..").await.unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Build);
    assert!(server.received_requests().await.unwrap().is_empty());
}
