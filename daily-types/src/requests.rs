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

//! Request bodies and query parameters.
//!
//! Bodies serialize with every unset field omitted, so the same type serves
//! both "create with defaults" and "update only what is set".

use serde::{Deserialize, Serialize};

use crate::domain::DomainProperties;
use crate::recording::RecordingLayout;
use crate::room::{RoomConfig, RoomPrivacy};
use crate::token::MeetingToken;

/// Body for `POST /rooms`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateRoomRequest {
    /// Room name. The service generates one when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privacy: Option<RoomPrivacy>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<RoomConfig>,
}

/// Body for `POST /rooms/{name}`.
///
/// Only the fields that are set are changed on the room.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateRoomRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privacy: Option<RoomPrivacy>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<RoomConfig>,
}

/// Body for `POST /`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetDomainConfigRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<DomainProperties>,
}

/// Body for `POST /meeting-tokens`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateMeetingTokenRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<MeetingToken>,
}

/// Body for `POST /rooms/{name}/recordings/start`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StartRecordingRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<RecordingLayout>,
}

/// Query parameters for `GET /rooms`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListRoomsQuery {
    /// Page size.
    pub limit: Option<u32>,
    /// Cursor: return rooms created before the room with this id.
    pub ending_before: Option<String>,
    /// Cursor: return rooms created after the room with this id.
    pub starting_after: Option<String>,
}

impl ListRoomsQuery {
    /// The set parameters as `(key, value)` pairs, in the order
    /// `limit`, `ending_before`, `starting_after`.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(cursor) = &self.ending_before {
            pairs.push(("ending_before", cursor.clone()));
        }
        if let Some(cursor) = &self.starting_after {
            pairs.push(("starting_after", cursor.clone()));
        }
        pairs
    }
}

/// Query parameters for `GET /recordings`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListRecordingsQuery {
    pub limit: Option<u32>,
    pub ending_before: Option<String>,
    pub starting_after: Option<String>,
    /// Only return recordings of this room.
    pub room_name: Option<String>,
}

impl ListRecordingsQuery {
    /// The set parameters as `(key, value)` pairs, in the order
    /// `limit`, `ending_before`, `starting_after`, `room_name`.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(cursor) = &self.ending_before {
            pairs.push(("ending_before", cursor.clone()));
        }
        if let Some(cursor) = &self.starting_after {
            pairs.push(("starting_after", cursor.clone()));
        }
        if let Some(room) = &self.room_name {
            pairs.push(("room_name", room.clone()));
        }
        pairs
    }
}
