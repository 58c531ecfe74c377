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

//! Serde support for optional fields.
//!
//! Optional fields are plain [`Option`]s with
//! `#[serde(default, skip_serializing_if = "Option::is_none")]`: a missing key
//! decodes to `None` and `None` is never written. This module adds the pieces
//! that `Option` alone does not cover.

/// Encodes `Option<DateTime<Utc>>` as whole seconds since the Unix epoch.
///
/// Use together with `default` and `skip_serializing_if = "Option::is_none"`
/// so an unset timestamp stays off the wire:
///
/// ```
/// use chrono::{DateTime, Utc};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Window {
///     #[serde(
///         default,
///         skip_serializing_if = "Option::is_none",
///         with = "daily_types::optional::unix_seconds"
///     )]
///     exp: Option<DateTime<Utc>>,
/// }
///
/// let window = Window { exp: DateTime::from_timestamp(1_700_000_000, 0) };
/// assert_eq!(serde_json::to_string(&window).unwrap(), r#"{"exp":1700000000}"#);
/// ```
///
/// Sub-second precision is dropped on encode. Decoding accepts an integer or,
/// because some service payloads carry them, an RFC 3339 string. An explicit
/// `null` decodes to `None`.
pub mod unix_seconds {
    use chrono::{DateTime, Utc};
    use serde::de::{self, Deserializer};
    use serde::{Deserialize, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(time) => serializer.serialize_i64(time.timestamp()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Seconds(i64),
            Text(String),
        }

        match Option::<Raw>::deserialize(deserializer)? {
            None => Ok(None),
            Some(Raw::Seconds(secs)) => DateTime::from_timestamp(secs, 0)
                .map(Some)
                .ok_or_else(|| de::Error::custom(format!("timestamp {secs} out of range"))),
            Some(Raw::Text(text)) => DateTime::parse_from_rfc3339(&text)
                .map(|time| Some(time.with_timezone(&Utc)))
                .map_err(de::Error::custom),
        }
    }
}
