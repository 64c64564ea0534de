// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use super::params;
use crate::models::{
    StateAccessControllerRequest,
    StateAccessControllerResponse,
    StateClockRequest,
    StateClockResponse,
    StateComponentRequest,
    StateComponentResponse,
    StateEpochRequest,
    StateEpochResponse,
    StateNonFungibleRequest,
    StateNonFungibleResponse,
    StatePackageRequest,
    StatePackageResponse,
    StateResourceRequest,
    StateResourceResponse,
    StateValidatorRequest,
    StateValidatorResponse,
};
use crate::runtime::{ApiResponse, BaseApi, Configuration, Operation};
use crate::Error;

pub const STATE_EPOCH_POST: Operation = Operation::post(
    "state_epoch_post",
    "/state/epoch",
    &["state_epoch_request"],
);
pub const STATE_CLOCK_POST: Operation = Operation::post(
    "state_clock_post",
    "/state/clock",
    &["state_clock_request"],
);
pub const STATE_COMPONENT_POST: Operation = Operation::post(
    "state_component_post",
    "/state/component",
    &["state_component_request"],
);
pub const STATE_VALIDATOR_POST: Operation = Operation::post(
    "state_validator_post",
    "/state/validator",
    &["state_validator_request"],
);
pub const STATE_ACCESS_CONTROLLER_POST: Operation = Operation::post(
    "state_access_controller_post",
    "/state/access-controller",
    &["state_access_controller_request"],
);
pub const STATE_PACKAGE_POST: Operation = Operation::post(
    "state_package_post",
    "/state/package",
    &["state_package_request"],
);
pub const STATE_RESOURCE_POST: Operation = Operation::post(
    "state_resource_post",
    "/state/resource",
    &["state_resource_request"],
);
pub const STATE_NON_FUNGIBLE_POST: Operation = Operation::post(
    "state_non_fungible_post",
    "/state/non-fungible",
    &["state_non_fungible_request"],
);

params!(StateEpochPostParams {
    state_epoch_request: StateEpochRequest
});
params!(StateClockPostParams {
    state_clock_request: StateClockRequest
});
params!(StateComponentPostParams {
    state_component_request: StateComponentRequest
});
params!(StateValidatorPostParams {
    state_validator_request: StateValidatorRequest
});
params!(StateAccessControllerPostParams {
    state_access_controller_request: StateAccessControllerRequest
});
params!(StatePackagePostParams {
    state_package_request: StatePackageRequest
});
params!(StateResourcePostParams {
    state_resource_request: StateResourceRequest
});
params!(StateNonFungiblePostParams {
    state_non_fungible_request: StateNonFungibleRequest
});

/// Current substates of individual entities.
#[derive(Clone, Debug, Default)]
pub struct StateApi {
    base: BaseApi,
}

impl StateApi {
    pub fn new(configuration: Configuration) -> Self {
        Self {
            base: BaseApi::new(configuration),
        }
    }

    pub fn configuration(&self) -> &Configuration {
        self.base.configuration()
    }

    /// Get Epoch Details.
    ///
    /// Returns the consensus manager state and the current validator set.
    pub async fn state_epoch_post_raw(
        &self,
        params: impl Into<StateEpochPostParams>,
    ) -> Result<ApiResponse<StateEpochResponse>, Error> {
        self.base.request(&STATE_EPOCH_POST, &params.into()).await
    }

    pub async fn state_epoch_post(
        &self,
        params: impl Into<StateEpochPostParams>,
    ) -> Result<StateEpochResponse, Error> {
        self.state_epoch_post_raw(params).await?.value()
    }

    /// Get Current Time.
    ///
    /// The ledger clock, rounded down to the minute.
    pub async fn state_clock_post_raw(
        &self,
        params: impl Into<StateClockPostParams>,
    ) -> Result<ApiResponse<StateClockResponse>, Error> {
        self.base.request(&STATE_CLOCK_POST, &params.into()).await
    }

    pub async fn state_clock_post(
        &self,
        params: impl Into<StateClockPostParams>,
    ) -> Result<StateClockResponse, Error> {
        self.state_clock_post_raw(params).await?.value()
    }

    /// Get Component Details.
    ///
    /// Includes the component's vault balances and every owned descendent node.
    pub async fn state_component_post_raw(
        &self,
        params: impl Into<StateComponentPostParams>,
    ) -> Result<ApiResponse<StateComponentResponse>, Error> {
        self.base.request(&STATE_COMPONENT_POST, &params.into()).await
    }

    pub async fn state_component_post(
        &self,
        params: impl Into<StateComponentPostParams>,
    ) -> Result<StateComponentResponse, Error> {
        self.state_component_post_raw(params).await?.value()
    }

    /// Get Validator Details.
    pub async fn state_validator_post_raw(
        &self,
        params: impl Into<StateValidatorPostParams>,
    ) -> Result<ApiResponse<StateValidatorResponse>, Error> {
        self.base.request(&STATE_VALIDATOR_POST, &params.into()).await
    }

    pub async fn state_validator_post(
        &self,
        params: impl Into<StateValidatorPostParams>,
    ) -> Result<StateValidatorResponse, Error> {
        self.state_validator_post_raw(params).await?.value()
    }

    /// Get Access Controller Details.
    pub async fn state_access_controller_post_raw(
        &self,
        params: impl Into<StateAccessControllerPostParams>,
    ) -> Result<ApiResponse<StateAccessControllerResponse>, Error> {
        self.base.request(&STATE_ACCESS_CONTROLLER_POST, &params.into()).await
    }

    pub async fn state_access_controller_post(
        &self,
        params: impl Into<StateAccessControllerPostParams>,
    ) -> Result<StateAccessControllerResponse, Error> {
        self.state_access_controller_post_raw(params).await?.value()
    }

    /// Get Package Details.
    pub async fn state_package_post_raw(
        &self,
        params: impl Into<StatePackagePostParams>,
    ) -> Result<ApiResponse<StatePackageResponse>, Error> {
        self.base.request(&STATE_PACKAGE_POST, &params.into()).await
    }

    pub async fn state_package_post(
        &self,
        params: impl Into<StatePackagePostParams>,
    ) -> Result<StatePackageResponse, Error> {
        self.state_package_post_raw(params).await?.value()
    }

    /// Get Resource Details.
    pub async fn state_resource_post_raw(
        &self,
        params: impl Into<StateResourcePostParams>,
    ) -> Result<ApiResponse<StateResourceResponse>, Error> {
        self.base.request(&STATE_RESOURCE_POST, &params.into()).await
    }

    pub async fn state_resource_post(
        &self,
        params: impl Into<StateResourcePostParams>,
    ) -> Result<StateResourceResponse, Error> {
        self.state_resource_post_raw(params).await?.value()
    }

    /// Get Non-Fungible Details.
    ///
    /// The data substate of a single non-fungible of a resource.
    pub async fn state_non_fungible_post_raw(
        &self,
        params: impl Into<StateNonFungiblePostParams>,
    ) -> Result<ApiResponse<StateNonFungibleResponse>, Error> {
        self.base.request(&STATE_NON_FUNGIBLE_POST, &params.into()).await
    }

    pub async fn state_non_fungible_post(
        &self,
        params: impl Into<StateNonFungiblePostParams>,
    ) -> Result<StateNonFungibleResponse, Error> {
        self.state_non_fungible_post_raw(params).await?.value()
    }
}
