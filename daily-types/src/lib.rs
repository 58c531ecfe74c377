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

//! Shared types for the Daily.co REST API.
//!
//! This crate defines the wire contract between [`daily-client`] and the
//! service: resource records, request bodies, response envelopes, and the
//! error detail payload the service returns on failure. It is transport
//! agnostic and carries no HTTP types.
//!
//! # Optional fields
//!
//! Every settable field is an [`Option`]. `None` means "not set" and is left
//! out of the encoded JSON entirely; `Some(v)` is always emitted, even when
//! `v` is a zero value. Update requests rely on this to tell "leave this field
//! alone" apart from "set this field to `false`/`0`/`""`".
//!
//! ```
//! use daily_types::{requests::CreateRoomRequest, room::RoomConfig};
//!
//! let request = CreateRoomRequest {
//!     name: Some("standup".to_string()),
//!     properties: Some(RoomConfig {
//!         enable_chat: Some(false),
//!         ..Default::default()
//!     }),
//!     ..Default::default()
//! };
//! let json = serde_json::to_value(&request).unwrap();
//! assert_eq!(
//!     json,
//!     serde_json::json!({ "name": "standup", "properties": { "enable_chat": false } })
//! );
//! ```
//!
//! [`daily-client`]: https://docs.rs/daily-client

#[macro_use]
mod macros;

pub mod domain;
pub mod error;
pub mod optional;
pub mod recording;
pub mod requests;
pub mod responses;
pub mod room;
pub mod token;

pub use domain::{DomainConfig, DomainProperties};
pub use error::ErrorDetails;
pub use recording::{LayoutPreset, Recording, RecordingLayout, RecordingStatus};
pub use room::{RecordingMode, Room, RoomConfig, RoomPrivacy};
pub use token::{MeetingToken, PermissionType, Permissions};
