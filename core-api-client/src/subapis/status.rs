// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use crate::apis::StatusApi;
use crate::models::{
    NetworkConfigurationResponse, NetworkStatusRequest, NetworkStatusResponse,
};
use crate::Error;

#[derive(Clone, Debug)]
pub struct Status {
    api: StatusApi,
    network: String,
}

impl Status {
    pub fn new<S: Into<String>>(api: StatusApi, network: S) -> Self {
        Self {
            api,
            network: network.into(),
        }
    }

    pub fn api(&self) -> &StatusApi {
        &self.api
    }

    pub async fn network_configuration(
        &self,
    ) -> Result<NetworkConfigurationResponse, Error> {
        self.api.status_network_configuration_post().await
    }

    pub async fn network_status(&self) -> Result<NetworkStatusResponse, Error> {
        self.api
            .status_network_status_post(NetworkStatusRequest {
                network: self.network.clone(),
            })
            .await
    }
}
