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

//! Domain configuration endpoints: `GET /` and `POST /`.

use daily_types::requests::SetDomainConfigRequest;
use daily_types::DomainConfig;
use reqwest::Method;

use crate::dispatch::NO_BODY;
use crate::error::DailyError;
use crate::DailyClient;

impl DailyClient {
    /// Get the domain name and its current settings.
    ///
    /// Calls `GET /`.
    pub async fn get_domain_config(&self) -> Result<DomainConfig, DailyError> {
        self.perform(Method::GET, "", NO_BODY).await
    }

    /// Change domain settings. Only the properties that are set are changed.
    ///
    /// Calls `POST /` and returns the resulting configuration.
    pub async fn set_domain_config(
        &self,
        request: &SetDomainConfigRequest,
    ) -> Result<DomainConfig, DailyError> {
        self.perform(Method::POST, "", Some(request)).await
    }
}
