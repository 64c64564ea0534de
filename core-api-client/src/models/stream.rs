// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! # Stream Models
//!
//! Payloads of `/stream/transactions`, which pages through committed
//! transactions by state version.
//!
//! The `*FormatOptions` records let the caller trade response size for
//! detail. Every flag is optional; the node picks its own default for a flag
//! that is left out.

use serde::{Deserialize, Serialize};

use super::common::{CommittedStateIdentifier, InstantMs};
use super::receipt::TransactionReceipt;
use super::transaction::NotarizedTransaction;
use crate::codec::impl_model;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SborFormatOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub programmatic_json: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionFormatOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blobs: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_system_transaction: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_notarized_transaction: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_ledger_transaction: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstateFormatOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typed: Option<bool>,
    /// Include the previous value of updated substates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamTransactionsRequest {
    pub network: String,
    /// First state version to return, 1-based.
    pub from_state_version: u64,
    /// Maximum number of transactions to return.
    pub limit: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sbor_format_options: Option<SborFormatOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_format_options: Option<TransactionFormatOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub substate_format_options: Option<SubstateFormatOptions>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamTransactionsResponse {
    /// Absent when streaming from the very first state version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_state_identifiers: Option<CommittedStateIdentifier>,
    pub from_state_version: u64,
    pub count: u32,
    pub max_ledger_state_version: u64,
    pub transactions: Vec<CommittedTransaction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderProposalHistory {
    /// Validator indices of the leaders of the skipped rounds.
    pub gap_round_leaders: Vec<u32>,
    pub current_leader: u32,
    pub is_fallback: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundUpdateTransaction {
    pub proposer_timestamp: InstantMs,
    pub epoch: u64,
    pub round_in_epoch: u64,
    pub leader_proposal_history: LeaderProposalHistory,
}

/// A transaction as stored on the ledger, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LedgerTransaction {
    Genesis {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        payload_hex: Option<String>,
        /// Whether this genesis transaction only flashes substates.
        is_flash: bool,
    },
    RoundUpdate {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        payload_hex: Option<String>,
        round_update_transaction: RoundUpdateTransaction,
    },
    User {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        payload_hex: Option<String>,
        notarized_transaction: NotarizedTransaction,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommittedTransaction {
    pub resultant_state_identifiers: CommittedStateIdentifier,
    pub ledger_transaction: LedgerTransaction,
    pub receipt: TransactionReceipt,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proposer_timestamp_ms: Option<i64>,
}

impl_model!(
    SborFormatOptions,
    TransactionFormatOptions,
    SubstateFormatOptions,
    StreamTransactionsRequest,
    StreamTransactionsResponse,
    LeaderProposalHistory,
    RoundUpdateTransaction,
    LedgerTransaction,
    CommittedTransaction,
);
