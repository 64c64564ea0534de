// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use reqwest::header::{HeaderValue, ACCEPT, CONTENT_TYPE};
use serde::Serialize;
use tracing::{debug, warn};

use super::configuration::Configuration;
use super::operation::Operation;
use super::response::ApiResponse;
use super::transport::HttpRequest;
use crate::codec::Model;
use crate::error::ResponseError;
use crate::Error;

fn json() -> HeaderValue {
    HeaderValue::from_static("application/json")
}

/// Shared request machinery of the API classes.
#[derive(Clone, Debug, Default)]
pub struct BaseApi {
    configuration: Configuration,
}

impl BaseApi {
    pub fn new(configuration: Configuration) -> Self {
        Self { configuration }
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// Issue `operation` with `params` and return the raw 2xx response.
    ///
    /// # Errors
    /// Required parameters are checked before anything is sent. A non-2xx
    /// status is returned as [`Error::Response`].
    pub async fn request<P, T>(
        &self,
        operation: &Operation,
        params: &P,
    ) -> Result<ApiResponse<T>, Error>
    where
        P: Serialize,
        T: Model,
    {
        let body = operation.prepare(params)?;

        let mut headers = self.configuration.headers().clone();
        headers.insert(ACCEPT, json());
        let body = match body {
            Some(body) => {
                headers.insert(CONTENT_TYPE, json());
                Some(serde_json::to_vec(&body)?)
            }
            None => None,
        };

        let url = format!("{}{}", self.configuration.base_path(), operation.path);
        debug!(operation = operation.id, %url, "Sending Core API request");

        let response = self
            .configuration
            .transport()
            .send(HttpRequest {
                method: operation.method.into(),
                url,
                headers,
                body,
            })
            .await?;

        let status = response.status;
        if !status.is_success() {
            warn!(
                operation = operation.id,
                status = status.as_u16(),
                "Core API request failed"
            );
            return Err(ResponseError {
                operation: operation.id,
                status,
                headers: response.headers,
                body: response.body,
            }
            .into());
        }

        debug!(
            operation = operation.id,
            status = status.as_u16(),
            bytes = response.body.len(),
            "Received Core API response"
        );
        Ok(ApiResponse::new(status, response.headers, response.body))
    }
}
