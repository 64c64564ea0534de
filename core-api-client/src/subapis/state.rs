// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use crate::apis::StateApi;
use crate::models::{
    StateAccessControllerRequest, StateAccessControllerResponse,
    StateClockRequest, StateClockResponse, StateComponentRequest,
    StateComponentResponse, StateEpochRequest, StateEpochResponse,
    StateNonFungibleRequest, StateNonFungibleResponse, StatePackageRequest,
    StatePackageResponse, StateResourceRequest, StateResourceResponse,
    StateValidatorRequest, StateValidatorResponse,
};
use crate::Error;

#[derive(Clone, Debug)]
pub struct State {
    api: StateApi,
    network: String,
}

impl State {
    pub fn new<S: Into<String>>(api: StateApi, network: S) -> Self {
        Self {
            api,
            network: network.into(),
        }
    }

    pub fn api(&self) -> &StateApi {
        &self.api
    }

    pub async fn epoch(&self) -> Result<StateEpochResponse, Error> {
        self.api
            .state_epoch_post(StateEpochRequest {
                network: self.network.clone(),
            })
            .await
    }

    pub async fn clock(&self) -> Result<StateClockResponse, Error> {
        self.api
            .state_clock_post(StateClockRequest {
                network: self.network.clone(),
            })
            .await
    }

    pub async fn component<S: Into<String>>(
        &self,
        component_address: S,
    ) -> Result<StateComponentResponse, Error> {
        self.api
            .state_component_post(StateComponentRequest {
                network: self.network.clone(),
                component_address: component_address.into(),
            })
            .await
    }

    pub async fn validator<S: Into<String>>(
        &self,
        validator_address: S,
    ) -> Result<StateValidatorResponse, Error> {
        self.api
            .state_validator_post(StateValidatorRequest {
                network: self.network.clone(),
                validator_address: validator_address.into(),
            })
            .await
    }

    pub async fn access_controller<S: Into<String>>(
        &self,
        controller_address: S,
    ) -> Result<StateAccessControllerResponse, Error> {
        self.api
            .state_access_controller_post(StateAccessControllerRequest {
                network: self.network.clone(),
                controller_address: controller_address.into(),
            })
            .await
    }

    pub async fn package<S: Into<String>>(
        &self,
        package_address: S,
    ) -> Result<StatePackageResponse, Error> {
        self.api
            .state_package_post(StatePackageRequest {
                network: self.network.clone(),
                package_address: package_address.into(),
            })
            .await
    }

    pub async fn resource<S: Into<String>>(
        &self,
        resource_address: S,
    ) -> Result<StateResourceResponse, Error> {
        self.api
            .state_resource_post(StateResourceRequest {
                network: self.network.clone(),
                resource_address: resource_address.into(),
            })
            .await
    }

    pub async fn non_fungible<R, N>(
        &self,
        resource_address: R,
        non_fungible_id: N,
    ) -> Result<StateNonFungibleResponse, Error>
    where
        R: Into<String>,
        N: Into<String>,
    {
        self.api
            .state_non_fungible_post(StateNonFungibleRequest {
                network: self.network.clone(),
                resource_address: resource_address.into(),
                non_fungible_id: non_fungible_id.into(),
            })
            .await
    }
}
