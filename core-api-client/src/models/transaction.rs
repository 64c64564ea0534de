// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! # Transaction Models
//!
//! Payloads of the `/transaction/*` endpoints, together with the decoded
//! shapes of notarized transactions.
//!
//! ## Key Structures
//!
//! - [`NotarizedTransaction`], [`SignedTransactionIntent`] and
//!   [`TransactionIntent`]: the three layers of a user transaction.
//! - [`TransactionStatusResponse`]: intent-level status plus the status of
//!   every payload the node has seen for that intent.
//! - [`ParsedTransaction`]: result of `/transaction/parse`, tagged by `type`.
//! - [`TargetIdentifier`]: what `/transaction/call-preview` invokes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::common::{
    EntityReference, PublicKey, SborData, Signature, SignatureWithPublicKey,
    TransactionIdentifiers,
};
use super::receipt::{TransactionReceipt, TransactionStatus};
use super::stream::{CommittedTransaction, LedgerTransaction, TransactionFormatOptions};
use crate::codec::impl_model;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionHeader {
    pub network_id: u8,
    pub start_epoch_inclusive: u64,
    pub end_epoch_exclusive: u64,
    pub nonce: u64,
    pub notary_public_key: PublicKey,
    /// Whether the notary also counts as a signatory of the intent.
    pub notary_is_signatory: bool,
    pub tip_percentage: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionIntent {
    pub hash: String,
    pub header: TransactionHeader,
    /// Decompiled manifest, present only if requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    /// Blob hash to blob hex, present only if requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blobs_hex: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedTransactionIntent {
    pub hash: String,
    pub intent: TransactionIntent,
    pub intent_signatures: Vec<SignatureWithPublicKey>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotarizedTransaction {
    pub hash: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload_hex: Option<String>,
    pub signed_intent: SignedTransactionIntent,
    pub notary_signature: Signature,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionSubmitRequest {
    pub network: String,
    pub notarized_transaction_hex: String,
    /// Re-run rejection checks even if a cached result exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub force_recalculate: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionSubmitResponse {
    /// Whether the payload was already in the mempool.
    pub duplicate: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionStatusRequest {
    pub network: String,
    pub intent_hash: String,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub enum TransactionIntentStatus {
    CommittedSuccess,
    CommittedFailure,
    CommitPendingOutcomeUnknown,
    PermanentRejection,
    FateUnknown,
    LikelyButNotCertainRejection,
    NotSeen,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub enum TransactionPayloadStatus {
    CommittedSuccess,
    CommittedFailure,
    CommitPendingOutcomeUnknown,
    PermanentlyRejected,
    TransientlyAccepted,
    TransientlyRejected,
    NotInMempool,
    InMempool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionPayloadDetails {
    pub payload_hash: String,
    /// Set once the payload has been committed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_version: Option<u64>,
    pub status: TransactionPayloadStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionStatusResponse {
    pub intent_status: TransactionIntentStatus,
    pub status_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invalid_from_epoch: Option<u64>,
    pub known_payloads: Vec<TransactionPayloadDetails>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionReceiptRequest {
    pub network: String,
    pub intent_hash: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_format_options: Option<TransactionFormatOptions>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionReceiptResponse {
    pub committed: CommittedTransaction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionPreviewRequestFlags {
    pub use_free_credit: bool,
    pub assume_all_signature_proofs: bool,
    pub skip_epoch_check: bool,
}

/// Executes a manifest against current state without committing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionPreviewRequest {
    pub network: String,
    /// Text representation of the manifest.
    pub manifest: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blobs_hex: Option<Vec<String>>,
    pub start_epoch_inclusive: u64,
    pub end_epoch_exclusive: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notary_public_key: Option<PublicKey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notary_is_signatory: Option<bool>,
    pub tip_percentage: u16,
    pub nonce: u64,
    pub signer_public_keys: Vec<PublicKey>,
    pub flags: TransactionPreviewRequestFlags,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceChange {
    pub resource_address: String,
    pub component_entity: EntityReference,
    pub vault_entity: EntityReference,
    /// Signed decimal string.
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructionResourceChanges {
    pub index: u32,
    pub resource_changes: Vec<ResourceChange>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionPreviewResponseLogsInner {
    pub level: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionPreviewResponse {
    /// Hex of the SBOR-encoded receipt.
    pub encoded_receipt: String,
    pub receipt: TransactionReceipt,
    pub instruction_resource_changes: Vec<InstructionResourceChanges>,
    pub logs: Vec<TransactionPreviewResponseLogsInner>,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub enum ParseMode {
    Any,
    Notarized,
    Signed,
    Unsigned,
    Ledger,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub enum ValidationMode {
    None,
    Static,
    Full,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub enum ResponseMode {
    Basic,
    Full,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionParseRequest {
    pub network: String,
    pub payload_hex: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_mode: Option<ValidationMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_mode: Option<ResponseMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_format_options: Option<TransactionFormatOptions>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedNotarizedTransactionValidationError {
    pub reason: String,
    pub is_permanent: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedSignedTransactionIntentIdentifiers {
    pub intent_hash: String,
    pub signed_intent_hash: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedTransactionIntentIdentifiers {
    pub intent_hash: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedLedgerTransactionIdentifiers {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signed_intent_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload_hash: Option<String>,
    pub ledger_hash: String,
}

/// A payload decoded by `/transaction/parse`, tagged by `type`.
///
/// The decoded body is only present in [`ResponseMode::Full`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ParsedTransaction {
    NotarizedTransaction {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        notarized_transaction: Option<NotarizedTransaction>,
        identifiers: TransactionIdentifiers,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        validation_error: Option<ParsedNotarizedTransactionValidationError>,
    },
    SignedTransactionIntent {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        signed_intent: Option<SignedTransactionIntent>,
        identifiers: ParsedSignedTransactionIntentIdentifiers,
    },
    TransactionIntent {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        intent: Option<TransactionIntent>,
        identifiers: ParsedTransactionIntentIdentifiers,
    },
    LedgerTransaction {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        ledger_transaction: Option<LedgerTransaction>,
        identifiers: ParsedLedgerTransactionIdentifiers,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionParseResponse {
    pub parsed: ParsedTransaction,
}

/// The function or method invoked by a call preview, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TargetIdentifier {
    Method {
        component_address: String,
        method_name: String,
    },
    Function {
        package_address: String,
        blueprint_name: String,
        function_name: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionCallPreviewRequest {
    pub network: String,
    pub target: TargetIdentifier,
    /// SBOR-encoded arguments, hex each.
    pub arguments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionCallPreviewResponse {
    pub status: TransactionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<SborData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl_model!(
    TransactionHeader,
    TransactionIntent,
    SignedTransactionIntent,
    NotarizedTransaction,
    TransactionSubmitRequest,
    TransactionSubmitResponse,
    TransactionStatusRequest,
    TransactionIntentStatus,
    TransactionPayloadStatus,
    TransactionPayloadDetails,
    TransactionStatusResponse,
    TransactionReceiptRequest,
    TransactionReceiptResponse,
    TransactionPreviewRequestFlags,
    TransactionPreviewRequest,
    ResourceChange,
    InstructionResourceChanges,
    TransactionPreviewResponseLogsInner,
    TransactionPreviewResponse,
    ParseMode,
    ValidationMode,
    ResponseMode,
    TransactionParseRequest,
    ParsedNotarizedTransactionValidationError,
    ParsedSignedTransactionIntentIdentifiers,
    ParsedTransactionIntentIdentifiers,
    ParsedLedgerTransactionIdentifiers,
    ParsedTransaction,
    TransactionParseResponse,
    TargetIdentifier,
    TransactionCallPreviewRequest,
    TransactionCallPreviewResponse,
);
