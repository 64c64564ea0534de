// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! # Receipt Models
//!
//! The outcome of executing a transaction: status, fees, the substates it
//! touched, emitted events and, at the end of an epoch, the next validator
//! set.

use serde::{Deserialize, Serialize};

use super::common::{EntityReference, EntityType, ModuleId, PublicKey, SborData, SubstateKey};
use super::substate::Substate;
use crate::codec::impl_model;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub enum TransactionStatus {
    Succeeded,
    Failed,
    Rejected,
}

/// Costs charged for a transaction. XRD amounts are decimal strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSummary {
    pub execution_cost_units_consumed: u64,
    pub finalization_cost_units_consumed: u64,
    pub xrd_total_execution_cost: String,
    pub xrd_total_finalization_cost: String,
    pub xrd_total_royalty_cost: String,
    pub xrd_total_storage_cost: String,
    pub xrd_total_tipping_cost: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionId {
    pub entity_type: EntityType,
    pub entity_address: String,
    pub entity_module: ModuleId,
    pub partition_number: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstateId {
    pub entity_type: EntityType,
    pub entity_address: String,
    pub entity_module: ModuleId,
    pub partition_number: u8,
    pub substate_key: SubstateKey,
}

/// A substate's content in the representations selected by the request's
/// substate format options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubstateValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub substate_data: Option<Substate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub substate_hex: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub substate_data_hash: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedSubstate {
    pub substate_id: SubstateId,
    pub value: SubstateValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdatedSubstate {
    pub substate_id: SubstateId,
    pub new_value: SubstateValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_value: Option<SubstateValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeletedSubstate {
    pub substate_id: SubstateId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_value: Option<SubstateValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateUpdates {
    pub deleted_partitions: Vec<PartitionId>,
    pub created_substates: Vec<CreatedSubstate>,
    pub updated_substates: Vec<UpdatedSubstate>,
    pub deleted_substates: Vec<DeletedSubstate>,
    pub new_global_entities: Vec<EntityReference>,
}

/// Where an event was emitted from, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EventEmitterIdentifier {
    Function {
        package_address: String,
        blueprint_name: String,
    },
    Method {
        entity: EntityReference,
        object_module_id: ModuleId,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventTypeIdentifier {
    pub emitter: EventEmitterIdentifier,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub event_type: EventTypeIdentifier,
    pub data: SborData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveValidator {
    pub address: String,
    pub key: PublicKey,
    /// Decimal string.
    pub stake: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextEpoch {
    pub epoch: u64,
    pub validators: Vec<ActiveValidator>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionReceipt {
    pub status: TransactionStatus,
    pub fee_summary: FeeSummary,
    pub state_updates: StateUpdates,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<Event>>,
    /// One entry per manifest instruction; only for committed successes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<Vec<SborData>>,
    /// Set on the last transaction of an epoch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_epoch: Option<NextEpoch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl_model!(
    TransactionStatus,
    FeeSummary,
    PartitionId,
    SubstateId,
    SubstateValue,
    CreatedSubstate,
    UpdatedSubstate,
    DeletedSubstate,
    StateUpdates,
    EventEmitterIdentifier,
    EventTypeIdentifier,
    Event,
    ActiveValidator,
    NextEpoch,
    TransactionReceipt,
);
