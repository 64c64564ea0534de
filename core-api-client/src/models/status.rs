// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! # Status Models
//!
//! Payloads of the `/status/*` endpoints.
//!
//! ## Key Structures
//!
//! - [`NetworkConfigurationResponse`]: network identity, address encoding and
//!   the addresses of well-known system entities.
//! - [`NetworkStatusResponse`]: genesis and current ledger position.

use serde::{Deserialize, Serialize};

use super::common::{CommittedStateIdentifier, EntityType, EpochRound};
use crate::codec::impl_model;

/// Versions of the running node software and of the API it serves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    pub core_version: String,
    pub api_version: String,
}

/// How addresses of one entity type are encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressType {
    pub subtype: EntityType,
    /// Bech32m human readable part, network suffix included.
    pub hrp_prefix: String,
    pub entity_type: String,
    pub address_byte_prefix: u8,
    pub address_byte_length: u32,
}

/// Addresses of the system entities created at genesis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WellKnownAddresses {
    pub xrd: String,
    pub system_transaction_badge: String,
    pub package_of_direct_caller_virtual_badge: String,
    pub global_caller_virtual_badge: String,
    pub package_owner_badge: String,
    pub validator_owner_badge: String,
    pub account_owner_badge: String,
    pub identity_owner_badge: String,
    pub package_package: String,
    pub resource_package: String,
    pub account_package: String,
    pub identity_package: String,
    pub consensus_manager_package: String,
    pub access_controller_package: String,
    pub transaction_processor_package: String,
    pub metadata_module_package: String,
    pub royalty_module_package: String,
    pub role_assignment_module_package: String,
    pub genesis_helper_package: String,
    pub faucet_package: String,
    pub pool_package: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_tracker_package: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locker_package: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_utils_package: Option<String>,
    pub consensus_manager: String,
    pub genesis_helper: String,
    pub faucet: String,
    pub transaction_tracker: String,
}

/// Response of `/status/network-configuration`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfigurationResponse {
    pub version: Version,
    /// The logical network name, e.g. `mainnet` or `localnet`.
    pub network: String,
    pub network_id: u8,
    pub network_hrp_suffix: String,
    pub address_types: Vec<AddressType>,
    pub well_known_addresses: WellKnownAddresses,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkStatusRequest {
    pub network: String,
}

/// Response of `/status/network-status`.
///
/// The post-genesis fields are absent until the genesis transaction has been
/// committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkStatusResponse {
    pub pre_genesis_state_identifier: CommittedStateIdentifier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genesis_epoch_round: Option<EpochRound>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_genesis_state_identifier: Option<CommittedStateIdentifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_genesis_epoch_round: Option<EpochRound>,
    pub current_state_identifier: CommittedStateIdentifier,
    pub current_epoch_round: EpochRound,
}

impl_model!(
    Version,
    AddressType,
    WellKnownAddresses,
    NetworkConfigurationResponse,
    NetworkStatusRequest,
    NetworkStatusResponse,
);
