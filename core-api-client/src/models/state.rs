// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! # State Models
//!
//! Payloads of the `/state/*` endpoints, which read the current substates of
//! a single entity.
//!
//! Entity addresses in requests are Bech32m strings; the node rejects an
//! address of the wrong entity type with a `Basic` error response.

use serde::{Deserialize, Serialize};

use super::common::{EntityReference, ResourceAmount};
use super::substate::Substate;
use crate::codec::impl_model;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateEpochRequest {
    pub network: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateEpochResponse {
    pub epoch: u64,
    pub consensus_manager: Substate,
    pub current_validator_set: Substate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateClockRequest {
    pub network: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateClockResponse {
    pub current_minute: Substate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultBalance {
    pub vault_entity: EntityReference,
    pub resource_amount: ResourceAmount,
}

/// An entity owned, directly or transitively, by the requested one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateComponentDescendentNode {
    pub entity: EntityReference,
    pub parent_entity: EntityReference,
    /// Distance from the requested entity; direct children have depth 1.
    pub depth: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateComponentRequest {
    pub network: String,
    pub component_address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateComponentResponse {
    pub info: Substate,
    pub state: Substate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub royalty_accumulator: Option<Substate>,
    pub vaults: Vec<VaultBalance>,
    pub descendent_nodes: Vec<StateComponentDescendentNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateValidatorRequest {
    pub network: String,
    pub validator_address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateValidatorResponse {
    pub address: String,
    pub state: Substate,
    pub owned_vaults: Vec<VaultBalance>,
    pub descendent_nodes: Vec<StateComponentDescendentNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateAccessControllerRequest {
    pub network: String,
    pub controller_address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateAccessControllerResponse {
    pub access_controller: Substate,
    pub vaults: Vec<VaultBalance>,
    pub descendent_nodes: Vec<StateComponentDescendentNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatePackageRequest {
    pub network: String,
    pub package_address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatePackageResponse {
    pub code: Substate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub royalty_accumulator: Option<Substate>,
}

/// Resource manager substates, tagged by `resource_type`.
///
/// `total_supply` is only tracked for resources created with supply
/// tracking enabled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "resource_type")]
pub enum StateResourceManager {
    Fungible {
        divisibility: Substate,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        total_supply: Option<Substate>,
    },
    NonFungible {
        id_type: Substate,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        total_supply: Option<Substate>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateResourceRequest {
    pub network: String,
    pub resource_address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateResourceResponse {
    pub manager: StateResourceManager,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateNonFungibleRequest {
    pub network: String,
    pub resource_address: String,
    /// Simple representation of the local id, e.g. `#1#`.
    pub non_fungible_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateNonFungibleResponse {
    pub non_fungible: Substate,
}

impl_model!(
    StateEpochRequest,
    StateEpochResponse,
    StateClockRequest,
    StateClockResponse,
    VaultBalance,
    StateComponentDescendentNode,
    StateComponentRequest,
    StateComponentResponse,
    StateValidatorRequest,
    StateValidatorResponse,
    StateAccessControllerRequest,
    StateAccessControllerResponse,
    StatePackageRequest,
    StatePackageResponse,
    StateResourceManager,
    StateResourceRequest,
    StateResourceResponse,
    StateNonFungibleRequest,
    StateNonFungibleResponse,
);
