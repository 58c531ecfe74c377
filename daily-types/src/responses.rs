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

//! Response payloads.
//!
//! Single-resource endpoints (get/create/update room, get domain config,
//! validate token, get recording) return the resource record itself; the
//! types here cover the envelopes that wrap or summarize resources.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::recording::Recording;
use crate::room::Room;

/// Response payload for `GET /rooms`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListRoomsResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,

    #[serde(default, rename = "data", skip_serializing_if = "Option::is_none")]
    pub rooms: Option<Vec<Room>>,
}

/// Response payload for `GET /recordings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListRecordingsResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,

    #[serde(default, rename = "data", skip_serializing_if = "Option::is_none")]
    pub recordings: Option<Vec<Recording>>,
}

/// Response payload for `POST /meeting-tokens`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateMeetingTokenResponse {
    /// The signed token to hand to the participant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// Response payload for `POST /rooms/{name}/recordings/start`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartRecordingResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sent: Option<bool>,

    #[serde(default, rename = "recordingId", skip_serializing_if = "Option::is_none")]
    pub recording_id: Option<String>,
}

/// Response payload for `GET /recordings/{id}/access-link`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordingAccessLink {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_link: Option<String>,

    /// When `download_link` stops working.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::optional::unix_seconds"
    )]
    pub expires: Option<DateTime<Utc>>,
}

/// Acknowledgement returned by delete endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deleted {
    /// Name of the deleted room, for room deletes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Id of the deleted resource, for recording deletes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
}
