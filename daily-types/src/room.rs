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

//! Rooms: the video session namespaces a domain hosts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

string_enum! {
    /// Who may join a room.
    pub enum RoomPrivacy {
        /// Anyone with the URL can join.
        Public => "public",
        /// Joining requires a meeting token or knocking.
        Private => "private",
        /// Restricted to members of the owning organization.
        Organization => "org",
    }
}

string_enum! {
    /// Recording mode a room or token enables.
    pub enum RecordingMode {
        Cloud => "cloud",
        Local => "local",
        RtpTracks => "rtp-tracks",
        OutputByteStream => "output-byte-stream",
    }
}

/// A room as returned by the service.
///
/// See <https://docs.daily.co/reference/rest-api/rooms>.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Room {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// `true` when the room was created through the REST API rather than the dashboard.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_created: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privacy: Option<RoomPrivacy>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::optional::unix_seconds"
    )]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<RoomConfig>,
}

/// Per-room settings.
///
/// Sent as `properties` when creating or updating a room and returned as
/// `config` on the room itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoomConfig {
    /// Users cannot join before this time.
    #[serde(
        default,
        rename = "nbf",
        skip_serializing_if = "Option::is_none",
        with = "crate::optional::unix_seconds"
    )]
    pub not_before: Option<DateTime<Utc>>,

    /// Users cannot join after this time.
    #[serde(
        default,
        rename = "exp",
        skip_serializing_if = "Option::is_none",
        with = "crate::optional::unix_seconds"
    )]
    pub expires_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_video_off: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_audio_off: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_participants: Option<i32>,

    #[serde(default, rename = "autojoin", skip_serializing_if = "Option::is_none")]
    pub auto_join: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_knocking: Option<bool>,

    #[serde(
        default,
        rename = "enable_screenshare",
        skip_serializing_if = "Option::is_none"
    )]
    pub enable_screen_share: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_chat: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_only_broadcast: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_recording: Option<RecordingMode>,

    #[serde(
        default,
        rename = "eject_at_room_exp",
        skip_serializing_if = "Option::is_none"
    )]
    pub eject_at_room_expiry: Option<bool>,

    /// Seconds after joining at which participants are ejected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eject_after_elapsed: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,

    /// Webhook URL the service calls when a participant joins.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting_join_hook: Option<String>,

    #[serde(default, rename = "signaling_impl", skip_serializing_if = "Option::is_none")]
    pub signaling_type: Option<String>,

    /// Participant count at which the call switches to the SFU.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sfu_switchover: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_mesh_sfu: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_terse_logging: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_hidden_participants: Option<bool>,
}
