// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! # Long Term Support Models
//!
//! Payloads of the `/lts/*` endpoints. These are kept backwards compatible
//! across node releases and cover what a wallet or exchange integration
//! needs: transaction construction, submission and tracking, balance-change
//! outcomes and account balances.
//!
//! ## Key Structures
//!
//! - [`LtsTransactionStatusResponse`]: intent status with the known payloads.
//! - [`LtsCommittedTransactionOutcome`]: balance changes of one committed
//!   transaction, fee payments separated from other transfers.
//! - [`LtsFungibleResourceBalance`]: one account balance.

use serde::{Deserialize, Serialize};

use super::common::{InstantMs, TransactionIdentifiers};
use crate::codec::impl_model;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LtsTransactionConstructionRequest {
    pub network: String,
}

/// What a client needs to build a transaction header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LtsTransactionConstructionResponse {
    pub current_epoch: u64,
    pub ledger_clock: InstantMs,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LtsTransactionSubmitRequest {
    pub network: String,
    pub notarized_transaction_hex: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub force_recalculate: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LtsTransactionSubmitResponse {
    pub duplicate: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LtsTransactionStatusRequest {
    pub network: String,
    pub intent_hash: String,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub enum LtsTransactionIntentStatus {
    CommittedSuccess,
    CommittedFailure,
    InMempool,
    NotSeen,
    FateUncertain,
    FateUncertainButLikelyRejection,
    PermanentRejection,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub enum LtsTransactionPayloadStatus {
    CommittedSuccess,
    CommittedFailure,
    InMempool,
    NotInMempool,
    PermanentlyRejected,
    TemporarilyRejected,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LtsTransactionPayloadDetails {
    pub payload_hash: String,
    pub status: LtsTransactionPayloadStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LtsTransactionStatusResponse {
    pub intent_status: LtsTransactionIntentStatus,
    pub status_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub committed_state_version: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invalid_from_epoch: Option<u64>,
    pub known_payloads: Vec<LtsTransactionPayloadDetails>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LtsStreamTransactionOutcomesRequest {
    pub network: String,
    pub from_state_version: u64,
    pub limit: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LtsStreamTransactionOutcomesResponse {
    pub from_state_version: u64,
    pub count: u32,
    pub max_ledger_state_version: u64,
    pub committed_transaction_outcomes: Vec<LtsCommittedTransactionOutcome>,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub enum LtsCommittedTransactionStatus {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LtsFungibleResourceBalanceChange {
    pub resource_address: String,
    /// Signed decimal string.
    pub balance_change: String,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub enum LtsFeeFungibleResourceBalanceChangeType {
    FeePayment,
    FeeDistributed,
    TipDistributed,
    RoyaltyDistributed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LtsFeeFungibleResourceBalanceChange {
    #[serde(rename = "type")]
    pub change_type: LtsFeeFungibleResourceBalanceChangeType,
    pub resource_address: String,
    pub balance_change: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LtsEntityFungibleBalanceChanges {
    pub entity_address: String,
    /// Net fee payment of the entity, if it paid any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee_balance_change: Option<LtsFungibleResourceBalanceChange>,
    pub fee_balance_changes: Vec<LtsFeeFungibleResourceBalanceChange>,
    pub non_fee_balance_changes: Vec<LtsFungibleResourceBalanceChange>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LtsEntityNonFungibleBalanceChanges {
    pub entity_address: String,
    pub resource_address: String,
    pub added: Vec<String>,
    pub removed: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LtsResultantFungibleBalance {
    pub resource_address: String,
    pub resultant_balance: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LtsResultantAccountFungibleBalances {
    pub account_address: String,
    pub resultant_balances: Vec<LtsResultantFungibleBalance>,
}

/// Balance effects of one committed transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LtsCommittedTransactionOutcome {
    pub state_version: u64,
    pub proposer_timestamp_ms: i64,
    pub accumulator_hash: String,
    /// Absent for system transactions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_transaction_identifiers: Option<TransactionIdentifiers>,
    pub status: LtsCommittedTransactionStatus,
    pub fungible_entity_balance_changes: Vec<LtsEntityFungibleBalanceChanges>,
    pub non_fungible_entity_balance_changes: Vec<LtsEntityNonFungibleBalanceChanges>,
    pub resultant_account_fungible_balances: Vec<LtsResultantAccountFungibleBalances>,
    /// Decimal string, in XRD.
    pub total_fee: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LtsFungibleResourceBalance {
    pub fungible_resource_address: String,
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LtsStateAccountAllFungibleResourceBalancesRequest {
    pub network: String,
    pub account_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LtsStateAccountAllFungibleResourceBalancesResponse {
    pub state_version: u64,
    pub account_address: String,
    pub fungible_resource_balances: Vec<LtsFungibleResourceBalance>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LtsStateAccountFungibleResourceBalanceRequest {
    pub network: String,
    pub account_address: String,
    pub resource_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LtsStateAccountFungibleResourceBalanceResponse {
    pub state_version: u64,
    pub account_address: String,
    pub fungible_resource_balance: LtsFungibleResourceBalance,
}

impl_model!(
    LtsTransactionConstructionRequest,
    LtsTransactionConstructionResponse,
    LtsTransactionSubmitRequest,
    LtsTransactionSubmitResponse,
    LtsTransactionStatusRequest,
    LtsTransactionIntentStatus,
    LtsTransactionPayloadStatus,
    LtsTransactionPayloadDetails,
    LtsTransactionStatusResponse,
    LtsStreamTransactionOutcomesRequest,
    LtsStreamTransactionOutcomesResponse,
    LtsCommittedTransactionStatus,
    LtsFungibleResourceBalanceChange,
    LtsFeeFungibleResourceBalanceChangeType,
    LtsFeeFungibleResourceBalanceChange,
    LtsEntityFungibleBalanceChanges,
    LtsEntityNonFungibleBalanceChanges,
    LtsResultantFungibleBalance,
    LtsResultantAccountFungibleBalances,
    LtsCommittedTransactionOutcome,
    LtsFungibleResourceBalance,
    LtsStateAccountAllFungibleResourceBalancesRequest,
    LtsStateAccountAllFungibleResourceBalancesResponse,
    LtsStateAccountFungibleResourceBalanceRequest,
    LtsStateAccountFungibleResourceBalanceResponse,
);
