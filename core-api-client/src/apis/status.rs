// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use super::params;
use crate::models::{
    NetworkConfigurationResponse, NetworkStatusRequest, NetworkStatusResponse,
};
use crate::runtime::{ApiResponse, BaseApi, Configuration, Operation};
use crate::Error;

pub const STATUS_NETWORK_CONFIGURATION_POST: Operation = Operation::post_empty(
    "status_network_configuration_post",
    "/status/network-configuration",
);
pub const STATUS_NETWORK_STATUS_POST: Operation = Operation::post(
    "status_network_status_post",
    "/status/network-status",
    &["network_status_request"],
);

params!(StatusNetworkStatusPostParams {
    network_status_request: NetworkStatusRequest
});

/// Node and network status.
#[derive(Clone, Debug, Default)]
pub struct StatusApi {
    base: BaseApi,
}

impl StatusApi {
    pub fn new(configuration: Configuration) -> Self {
        Self {
            base: BaseApi::new(configuration),
        }
    }

    pub fn configuration(&self) -> &Configuration {
        self.base.configuration()
    }

    /// Get Network Configuration.
    ///
    /// Returns the network identifier, address encoding and well-known
    /// addresses. Takes no parameters.
    pub async fn status_network_configuration_post_raw(
        &self,
    ) -> Result<ApiResponse<NetworkConfigurationResponse>, Error> {
        self.base
            .request(&STATUS_NETWORK_CONFIGURATION_POST, &())
            .await
    }

    pub async fn status_network_configuration_post(
        &self,
    ) -> Result<NetworkConfigurationResponse, Error> {
        self.status_network_configuration_post_raw().await?.value()
    }

    /// Get Network Status.
    ///
    /// Returns the genesis and current ledger position of the node.
    pub async fn status_network_status_post_raw(
        &self,
        params: impl Into<StatusNetworkStatusPostParams>,
    ) -> Result<ApiResponse<NetworkStatusResponse>, Error> {
        self.base
            .request(&STATUS_NETWORK_STATUS_POST, &params.into())
            .await
    }

    pub async fn status_network_status_post(
        &self,
        params: impl Into<StatusNetworkStatusPostParams>,
    ) -> Result<NetworkStatusResponse, Error> {
        self.status_network_status_post_raw(params).await?.value()
    }
}
