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

//! Domain-wide configuration.

use serde::{Deserialize, Serialize};

/// The domain and its current settings, as returned by `GET /` and `POST /`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DomainConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<DomainProperties>,
}

/// Settings that apply to every room in the domain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DomainProperties {
    /// Where participants are sent after leaving a meeting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_on_meeting_exit: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_daily_branding: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hipaa: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intercom_auto_record: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
}
