// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! # Error Response Models
//!
//! Bodies the node returns with a non-2xx status.
//!
//! [`ErrorResponse`] is tagged by `error_type`. Endpoints with structured
//! failure modes attach a `details` union, itself tagged by `type`.

use serde::{Deserialize, Serialize};

use super::common::InstantMs;
use super::lts::LtsCommittedTransactionOutcome;
use crate::codec::impl_model;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TransactionSubmitErrorDetails {
    MempoolFull {
        mempool_transaction_count: u32,
        mempool_capacity: u32,
    },
    Rejected {
        error_message: String,
        /// Whether the rejection was computed for this request.
        is_fresh: bool,
        is_payload_rejection_permanent: bool,
        is_intent_rejection_permanent: bool,
        is_rejected_because_intent_already_committed: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        retry_from_timestamp: Option<InstantMs>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        retry_from_epoch: Option<u64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        invalid_from_epoch: Option<u64>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LtsTransactionSubmitErrorDetails {
    MempoolFull {
        mempool_transaction_count: u32,
        mempool_capacity: u32,
    },
    Rejected {
        error_message: String,
        is_fresh: bool,
        is_payload_rejection_permanent: bool,
        is_intent_rejection_permanent: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        retry_from_timestamp: Option<InstantMs>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        retry_from_epoch: Option<u64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        invalid_from_epoch: Option<u64>,
    },
    IntentAlreadyCommitted {
        committed_as: LtsCommittedTransactionOutcome,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StreamTransactionsErrorDetails {
    RequestedStateVersionOutOfBounds { max_ledger_state_version: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "error_type")]
pub enum ErrorResponse {
    #[serde(alias = "BasicErrorResponse")]
    Basic {
        /// HTTP status code of the response.
        code: u16,
        message: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        trace_id: Option<String>,
    },
    #[serde(alias = "TransactionSubmitErrorResponse")]
    TransactionSubmit {
        code: u16,
        message: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        trace_id: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        details: Option<TransactionSubmitErrorDetails>,
    },
    #[serde(alias = "LtsTransactionSubmitErrorResponse")]
    LtsTransactionSubmit {
        code: u16,
        message: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        trace_id: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        details: Option<LtsTransactionSubmitErrorDetails>,
    },
    #[serde(alias = "StreamTransactionsErrorResponse")]
    StreamTransactions {
        code: u16,
        message: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        trace_id: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        details: Option<StreamTransactionsErrorDetails>,
    },
}

impl ErrorResponse {
    pub fn code(&self) -> u16 {
        match self {
            Self::Basic { code, .. }
            | Self::TransactionSubmit { code, .. }
            | Self::LtsTransactionSubmit { code, .. }
            | Self::StreamTransactions { code, .. } => *code,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Basic { message, .. }
            | Self::TransactionSubmit { message, .. }
            | Self::LtsTransactionSubmit { message, .. }
            | Self::StreamTransactions { message, .. } => message,
        }
    }

    pub fn trace_id(&self) -> Option<&str> {
        match self {
            Self::Basic { trace_id, .. }
            | Self::TransactionSubmit { trace_id, .. }
            | Self::LtsTransactionSubmit { trace_id, .. }
            | Self::StreamTransactions { trace_id, .. } => trace_id.as_deref(),
        }
    }
}

impl_model!(
    TransactionSubmitErrorDetails,
    LtsTransactionSubmitErrorDetails,
    StreamTransactionsErrorDetails,
    ErrorResponse,
);
