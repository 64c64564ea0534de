// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use crate::apis::TransactionApi;
use crate::models::{
    TargetIdentifier, TransactionCallPreviewRequest,
    TransactionCallPreviewResponse, TransactionParseRequest,
    TransactionParseResponse, TransactionPreviewRequest,
    TransactionPreviewResponse, TransactionReceiptRequest,
    TransactionReceiptResponse, TransactionStatusRequest,
    TransactionStatusResponse, TransactionSubmitRequest,
    TransactionSubmitResponse,
};
use crate::Error;

#[derive(Clone, Debug)]
pub struct Transactions {
    api: TransactionApi,
    network: String,
}

impl Transactions {
    pub fn new<S: Into<String>>(api: TransactionApi, network: S) -> Self {
        Self {
            api,
            network: network.into(),
        }
    }

    pub fn api(&self) -> &TransactionApi {
        &self.api
    }

    /// Submits a hex-encoded notarized transaction to the mempool.
    pub async fn submit<S: Into<String>>(
        &self,
        notarized_transaction_hex: S,
    ) -> Result<TransactionSubmitResponse, Error> {
        self.api
            .transaction_submit_post(TransactionSubmitRequest {
                network: self.network.clone(),
                notarized_transaction_hex: notarized_transaction_hex.into(),
                force_recalculate: None,
            })
            .await
    }

    pub async fn status<S: Into<String>>(
        &self,
        intent_hash: S,
    ) -> Result<TransactionStatusResponse, Error> {
        self.api
            .transaction_status_post(TransactionStatusRequest {
                network: self.network.clone(),
                intent_hash: intent_hash.into(),
            })
            .await
    }

    pub async fn receipt<S: Into<String>>(
        &self,
        intent_hash: S,
    ) -> Result<TransactionReceiptResponse, Error> {
        self.api
            .transaction_receipt_post(TransactionReceiptRequest {
                network: self.network.clone(),
                intent_hash: intent_hash.into(),
                transaction_format_options: None,
            })
            .await
    }

    /// Previews `request`; its `network` is replaced by the configured one.
    pub async fn preview(
        &self,
        request: TransactionPreviewRequest,
    ) -> Result<TransactionPreviewResponse, Error> {
        self.api
            .transaction_preview_post(TransactionPreviewRequest {
                network: self.network.clone(),
                ..request
            })
            .await
    }

    pub async fn parse<S: Into<String>>(
        &self,
        payload_hex: S,
    ) -> Result<TransactionParseResponse, Error> {
        self.api
            .transaction_parse_post(TransactionParseRequest {
                network: self.network.clone(),
                payload_hex: payload_hex.into(),
                parse_mode: None,
                validation_mode: None,
                response_mode: None,
                transaction_format_options: None,
            })
            .await
    }

    /// Calls `target` read-only with SBOR-encoded `arguments`.
    pub async fn call_preview(
        &self,
        target: TargetIdentifier,
        arguments: Vec<String>,
    ) -> Result<TransactionCallPreviewResponse, Error> {
        self.api
            .transaction_call_preview_post(TransactionCallPreviewRequest {
                network: self.network.clone(),
                target,
                arguments,
            })
            .await
    }
}
