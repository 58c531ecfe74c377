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

//! Room CRUD endpoints.

use daily_types::requests::{CreateRoomRequest, ListRoomsQuery, UpdateRoomRequest};
use daily_types::responses::{Deleted, ListRoomsResponse};
use daily_types::Room;
use reqwest::Method;

use crate::dispatch::{path_segment, with_query, NO_BODY};
use crate::error::DailyError;
use crate::DailyClient;

impl DailyClient {
    /// List rooms, one page at a time.
    ///
    /// Calls `GET /rooms?limit=..&ending_before=..&starting_after=..` with
    /// only the parameters that are set.
    pub async fn list_rooms(&self, query: &ListRoomsQuery) -> Result<ListRoomsResponse, DailyError> {
        let path = with_query("rooms", &query.query_pairs());
        self.perform(Method::GET, &path, NO_BODY).await
    }

    /// Create a room. Unset fields take the domain defaults.
    ///
    /// Calls `POST /rooms`.
    pub async fn create_room(&self, request: &CreateRoomRequest) -> Result<Room, DailyError> {
        self.perform(Method::POST, "rooms", Some(request)).await
    }

    /// Calls `GET /rooms/{name}`.
    pub async fn get_room(&self, name: &str) -> Result<Room, DailyError> {
        let path = format!("rooms/{}", path_segment(name)?);
        self.perform(Method::GET, &path, NO_BODY).await
    }

    /// Change a room's privacy or properties. Fields left unset keep their
    /// current value; fields set to a zero value are changed to it.
    ///
    /// Calls `POST /rooms/{name}`.
    pub async fn update_room(
        &self,
        name: &str,
        request: &UpdateRoomRequest,
    ) -> Result<Room, DailyError> {
        let path = format!("rooms/{}", path_segment(name)?);
        self.perform(Method::POST, &path, Some(request)).await
    }

    /// Calls `DELETE /rooms/{name}`.
    pub async fn delete_room(&self, name: &str) -> Result<Deleted, DailyError> {
        let path = format!("rooms/{}", path_segment(name)?);
        self.perform(Method::DELETE, &path, NO_BODY).await
    }
}
