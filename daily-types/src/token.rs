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

//! Meeting tokens: per-participant access and session settings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::room::RecordingMode;

string_enum! {
    /// A media kind a participant may send.
    pub enum PermissionType {
        Video => "video",
        Audio => "audio",
        ScreenAudio => "screenAudio",
        ScreenVideo => "screenVideo",
    }
}

/// What a token holder may do once in the room.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permissions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_send: Option<Vec<PermissionType>>,

    /// `false` hides the participant from other participants.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_presence: Option<bool>,
}

/// Properties carried by a meeting token.
///
/// Sent as `properties` when creating a token, and returned directly when a
/// token is validated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeetingToken {
    #[serde(
        default,
        rename = "nbf",
        skip_serializing_if = "Option::is_none",
        with = "crate::optional::unix_seconds"
    )]
    pub not_before: Option<DateTime<Utc>>,

    #[serde(
        default,
        rename = "exp",
        skip_serializing_if = "Option::is_none",
        with = "crate::optional::unix_seconds"
    )]
    pub expires_at: Option<DateTime<Utc>>,

    /// Room the token is valid for. Unset tokens are valid for every room in the domain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_owner: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    #[serde(
        default,
        rename = "enable_screenshare",
        skip_serializing_if = "Option::is_none"
    )]
    pub enable_screen_share: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_video_off: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_audio_off: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_recording: Option<RecordingMode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_cloud_recording: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close_tab_on_exit: Option<bool>,

    #[serde(
        default,
        rename = "eject_at_room_exp",
        skip_serializing_if = "Option::is_none"
    )]
    pub eject_at_room_expiry: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eject_after_elapsed: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Permissions>,
}
