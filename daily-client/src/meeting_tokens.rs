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

//! Meeting token endpoints.

use daily_types::requests::CreateMeetingTokenRequest;
use daily_types::responses::CreateMeetingTokenResponse;
use daily_types::MeetingToken;
use reqwest::Method;

use crate::dispatch::{path_segment, NO_BODY};
use crate::error::DailyError;
use crate::DailyClient;

impl DailyClient {
    /// Issue a token carrying the given properties.
    ///
    /// Calls `POST /meeting-tokens`.
    pub async fn create_meeting_token(
        &self,
        request: &CreateMeetingTokenRequest,
    ) -> Result<CreateMeetingTokenResponse, DailyError> {
        self.perform(Method::POST, "meeting-tokens", Some(request)).await
    }

    /// Validate a token and return its properties.
    ///
    /// Calls `GET /meeting-tokens/{token}`. An invalid or expired token is
    /// reported by the service as a non-200 status.
    pub async fn get_meeting_token(&self, token: &str) -> Result<MeetingToken, DailyError> {
        let path = format!("meeting-tokens/{}", path_segment(token)?);
        self.perform(Method::GET, &path, NO_BODY).await
    }
}
