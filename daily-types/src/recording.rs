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

//! Cloud recordings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

string_enum! {
    /// Lifecycle state of a recording.
    pub enum RecordingStatus {
        InProgress => "in-progress",
        Finished => "finished",
        Canceled => "canceled",
    }
}

string_enum! {
    /// Layout the recorder composes participants into.
    pub enum LayoutPreset {
        Default => "default",
        SingleParticipant => "single-participant",
        ActiveParticipant => "active-participant",
        Portrait => "portrait",
    }
}

/// Layout settings for a recording.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordingLayout {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<LayoutPreset>,
}

/// A recording stored by the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recording {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_name: Option<String>,

    #[serde(
        default,
        rename = "start_ts",
        skip_serializing_if = "Option::is_none",
        with = "crate::optional::unix_seconds"
    )]
    pub started_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<RecordingStatus>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_participants: Option<i32>,

    /// Length in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share_token: Option<String>,

    /// Per-track metadata. The shape is service-defined and passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracks: Option<Vec<serde_json::Value>>,
}
