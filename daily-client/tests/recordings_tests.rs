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

//! Integration tests for recording endpoints.

mod test_helpers;

use chrono::DateTime;
use daily_client::daily_types::requests::{ListRecordingsQuery, StartRecordingRequest};
use daily_client::daily_types::{LayoutPreset, RecordingLayout, RecordingStatus};
use daily_client::ErrorCategory;
use serde_json::json;
use test_helpers::*;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_list_recordings_preserves_parameter_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/recordings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_count": 1,
            "data": [{
                "id": "rec-1",
                "room_name": "x",
                "start_ts": 1_700_000_000,
                "status": "finished",
                "duration": 61,
                "tracks": []
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = client_for(&server)
        .list_recordings(&ListRecordingsQuery {
            limit: Some(10),
            room_name: Some("x".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    let request = only_request(&server).await;
    assert!(request.url.as_str().ends_with("/v1/recordings?limit=10&room_name=x"));

    let recordings = page.recordings.unwrap();
    assert_eq!(recordings.len(), 1);
    assert_eq!(recordings[0].status, Some(RecordingStatus::Finished));
    assert_eq!(
        recordings[0].started_at,
        DateTime::from_timestamp(1_700_000_000, 0)
    );
}

#[tokio::test]
async fn test_list_recordings_with_all_cursors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "total_count": 0, "data": [] })))
        .mount(&server)
        .await;

    client_for(&server)
        .list_recordings(&ListRecordingsQuery {
            limit: Some(5),
            ending_before: Some("r9".to_string()),
            starting_after: Some("r1".to_string()),
            room_name: Some("standup".to_string()),
        })
        .await
        .unwrap();

    let request = only_request(&server).await;
    assert_eq!(
        request.url.query(),
        Some("limit=5&ending_before=r9&starting_after=r1&room_name=standup")
    );
}

#[tokio::test]
async fn test_start_recording() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/rooms/standup/recordings/start"))
        .and(body_json(json!({
            "width": 1280,
            "height": 720,
            "layout": { "preset": "active-participant" }
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "sent": true, "recordingId": "rec-2" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let started = client_for(&server)
        .start_recording(
            "standup",
            &StartRecordingRequest {
                width: Some(1280),
                height: Some(720),
                layout: Some(RecordingLayout {
                    preset: Some(LayoutPreset::ActiveParticipant),
                }),
            },
        )
        .await
        .unwrap();

    assert_eq!(started.sent, Some(true));
    assert_eq!(started.recording_id.as_deref(), Some("rec-2"));
}

#[tokio::test]
async fn test_stop_recording_discards_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/rooms/standup/recordings/stop"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "stopped": ["rec-2"] })))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).stop_recording("standup").await.unwrap();
}

#[tokio::test]
async fn test_stop_recording_requires_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .mount(&server)
        .await;

    let err = client_for(&server).stop_recording("standup").await.unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Decode);
}

#[tokio::test]
async fn test_get_and_delete_recording() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/recordings/rec-1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "id": "rec-1", "status": "in-progress" })),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v1/recordings/rec-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "rec-1", "deleted": true })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let recording = client.get_recording("rec-1").await.unwrap();
    assert_eq!(recording.status, Some(RecordingStatus::InProgress));

    let deleted = client.delete_recording("rec-1").await.unwrap();
    assert_eq!(deleted.id.as_deref(), Some("rec-1"));
    assert_eq!(deleted.deleted, Some(true));
}

#[tokio::test]
async fn test_get_recording_link() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/recordings/rec-1/access-link"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "download_link": "https://download.example/rec-1.mp4",
            "expires": 1_700_003_600
        })))
        .expect(1)
        .mount(&server)
        .await;

    let link = client_for(&server).get_recording_link("rec-1").await.unwrap();
    assert_eq!(link.download_link.as_deref(), Some("https://download.example/rec-1.mp4"));
    assert_eq!(link.expires, DateTime::from_timestamp(1_700_003_600, 0));
}

#[tokio::test]
async fn test_dot_recording_ids_send_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    for id in ["", ".", ".."] {
        let err = client.get_recording_link(id).await.unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Build, "get_recording_link({id:?})");

        let err = client.get_recording(id).await.unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Build, "get_recording({id:?})");

        let err = client.delete_recording(id).await.unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Build, "delete_recording({id:?})");

        let err = client.stop_recording(id).await.unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Build, "stop_recording({id:?})");

        let err = client
            .start_recording(id, &StartRecordingRequest::default())
            .await
            .unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Build, "start_recording({id:?})");
    }

    assert!(server.received_requests().await.unwrap().is_empty());
}
