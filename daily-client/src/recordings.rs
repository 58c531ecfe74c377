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

//! Recording endpoints: list, inspect, start/stop, delete, download links.

use daily_types::requests::{ListRecordingsQuery, StartRecordingRequest};
use daily_types::responses::{
    Deleted, ListRecordingsResponse, RecordingAccessLink, StartRecordingResponse,
};
use daily_types::Recording;
use reqwest::Method;
use serde::de::IgnoredAny;

use crate::dispatch::{path_segment, with_query, NO_BODY};
use crate::error::DailyError;
use crate::DailyClient;

impl DailyClient {
    /// List recordings, optionally for a single room.
    ///
    /// Calls `GET /recordings?limit=..&ending_before=..&starting_after=..&room_name=..`
    /// with only the parameters that are set.
    pub async fn list_recordings(
        &self,
        query: &ListRecordingsQuery,
    ) -> Result<ListRecordingsResponse, DailyError> {
        let path = with_query("recordings", &query.query_pairs());
        self.perform(Method::GET, &path, NO_BODY).await
    }

    /// Calls `GET /recordings/{id}`.
    pub async fn get_recording(&self, recording_id: &str) -> Result<Recording, DailyError> {
        let path = format!("recordings/{}", path_segment(recording_id)?);
        self.perform(Method::GET, &path, NO_BODY).await
    }

    /// Start a cloud recording of a room's ongoing session.
    ///
    /// Calls `POST /rooms/{name}/recordings/start`.
    pub async fn start_recording(
        &self,
        room_name: &str,
        request: &StartRecordingRequest,
    ) -> Result<StartRecordingResponse, DailyError> {
        let path = format!("rooms/{}/recordings/start", path_segment(room_name)?);
        self.perform(Method::POST, &path, Some(request)).await
    }

    /// Stop the room's running recording.
    ///
    /// Calls `POST /rooms/{name}/recordings/stop`. The response body only
    /// needs to be valid JSON; its content is discarded.
    pub async fn stop_recording(&self, room_name: &str) -> Result<(), DailyError> {
        let path = format!("rooms/{}/recordings/stop", path_segment(room_name)?);
        let _: IgnoredAny = self.perform(Method::POST, &path, NO_BODY).await?;
        Ok(())
    }

    /// Calls `DELETE /recordings/{id}`.
    pub async fn delete_recording(&self, recording_id: &str) -> Result<Deleted, DailyError> {
        let path = format!("recordings/{}", path_segment(recording_id)?);
        self.perform(Method::DELETE, &path, NO_BODY).await
    }

    /// Get a time-limited download link for a recording.
    ///
    /// Calls `GET /recordings/{id}/access-link`.
    pub async fn get_recording_link(
        &self,
        recording_id: &str,
    ) -> Result<RecordingAccessLink, DailyError> {
        let path = format!("recordings/{}/access-link", path_segment(recording_id)?);
        self.perform(Method::GET, &path, NO_BODY).await
    }
}
