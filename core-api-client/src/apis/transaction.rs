// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use super::params;
use crate::models::{
    TransactionCallPreviewRequest,
    TransactionCallPreviewResponse,
    TransactionParseRequest,
    TransactionParseResponse,
    TransactionPreviewRequest,
    TransactionPreviewResponse,
    TransactionReceiptRequest,
    TransactionReceiptResponse,
    TransactionStatusRequest,
    TransactionStatusResponse,
    TransactionSubmitRequest,
    TransactionSubmitResponse,
};
use crate::runtime::{ApiResponse, BaseApi, Configuration, Operation};
use crate::Error;

pub const TRANSACTION_PARSE_POST: Operation = Operation::post(
    "transaction_parse_post",
    "/transaction/parse",
    &["transaction_parse_request"],
);
pub const TRANSACTION_SUBMIT_POST: Operation = Operation::post(
    "transaction_submit_post",
    "/transaction/submit",
    &["transaction_submit_request"],
);
pub const TRANSACTION_STATUS_POST: Operation = Operation::post(
    "transaction_status_post",
    "/transaction/status",
    &["transaction_status_request"],
);
pub const TRANSACTION_RECEIPT_POST: Operation = Operation::post(
    "transaction_receipt_post",
    "/transaction/receipt",
    &["transaction_receipt_request"],
);
pub const TRANSACTION_PREVIEW_POST: Operation = Operation::post(
    "transaction_preview_post",
    "/transaction/preview",
    &["transaction_preview_request"],
);
pub const TRANSACTION_CALL_PREVIEW_POST: Operation = Operation::post(
    "transaction_call_preview_post",
    "/transaction/call-preview",
    &["transaction_call_preview_request"],
);

params!(TransactionParsePostParams {
    transaction_parse_request: TransactionParseRequest
});
params!(TransactionSubmitPostParams {
    transaction_submit_request: TransactionSubmitRequest
});
params!(TransactionStatusPostParams {
    transaction_status_request: TransactionStatusRequest
});
params!(TransactionReceiptPostParams {
    transaction_receipt_request: TransactionReceiptRequest
});
params!(TransactionPreviewPostParams {
    transaction_preview_request: TransactionPreviewRequest
});
params!(TransactionCallPreviewPostParams {
    transaction_call_preview_request: TransactionCallPreviewRequest
});

/// Submission, tracking and preview of transactions.
#[derive(Clone, Debug, Default)]
pub struct TransactionApi {
    base: BaseApi,
}

impl TransactionApi {
    pub fn new(configuration: Configuration) -> Self {
        Self {
            base: BaseApi::new(configuration),
        }
    }

    pub fn configuration(&self) -> &Configuration {
        self.base.configuration()
    }

    /// Parse Transaction Payload.
    ///
    /// Decodes a notarized, signed or unsigned transaction, or a ledger
    /// transaction, without submitting it.
    pub async fn transaction_parse_post_raw(
        &self,
        params: impl Into<TransactionParsePostParams>,
    ) -> Result<ApiResponse<TransactionParseResponse>, Error> {
        self.base.request(&TRANSACTION_PARSE_POST, &params.into()).await
    }

    pub async fn transaction_parse_post(
        &self,
        params: impl Into<TransactionParsePostParams>,
    ) -> Result<TransactionParseResponse, Error> {
        self.transaction_parse_post_raw(params).await?.value()
    }

    /// Submit Transaction.
    ///
    /// A rejected payload fails with a `TransactionSubmit` error response;
    /// see [`ResponseError::error_response`](crate::error::ResponseError::error_response).
    pub async fn transaction_submit_post_raw(
        &self,
        params: impl Into<TransactionSubmitPostParams>,
    ) -> Result<ApiResponse<TransactionSubmitResponse>, Error> {
        self.base.request(&TRANSACTION_SUBMIT_POST, &params.into()).await
    }

    pub async fn transaction_submit_post(
        &self,
        params: impl Into<TransactionSubmitPostParams>,
    ) -> Result<TransactionSubmitResponse, Error> {
        self.transaction_submit_post_raw(params).await?.value()
    }

    /// Get Transaction Status.
    pub async fn transaction_status_post_raw(
        &self,
        params: impl Into<TransactionStatusPostParams>,
    ) -> Result<ApiResponse<TransactionStatusResponse>, Error> {
        self.base.request(&TRANSACTION_STATUS_POST, &params.into()).await
    }

    pub async fn transaction_status_post(
        &self,
        params: impl Into<TransactionStatusPostParams>,
    ) -> Result<TransactionStatusResponse, Error> {
        self.transaction_status_post_raw(params).await?.value()
    }

    /// Get Transaction Receipt.
    ///
    /// Only committed transactions have a receipt.
    pub async fn transaction_receipt_post_raw(
        &self,
        params: impl Into<TransactionReceiptPostParams>,
    ) -> Result<ApiResponse<TransactionReceiptResponse>, Error> {
        self.base.request(&TRANSACTION_RECEIPT_POST, &params.into()).await
    }

    pub async fn transaction_receipt_post(
        &self,
        params: impl Into<TransactionReceiptPostParams>,
    ) -> Result<TransactionReceiptResponse, Error> {
        self.transaction_receipt_post_raw(params).await?.value()
    }

    /// Transaction Preview.
    ///
    /// Runs the manifest against the current state; nothing is committed.
    pub async fn transaction_preview_post_raw(
        &self,
        params: impl Into<TransactionPreviewPostParams>,
    ) -> Result<ApiResponse<TransactionPreviewResponse>, Error> {
        self.base.request(&TRANSACTION_PREVIEW_POST, &params.into()).await
    }

    pub async fn transaction_preview_post(
        &self,
        params: impl Into<TransactionPreviewPostParams>,
    ) -> Result<TransactionPreviewResponse, Error> {
        self.transaction_preview_post_raw(params).await?.value()
    }

    /// Scrypto Call Preview.
    ///
    /// Calls a single function or method read-only.
    pub async fn transaction_call_preview_post_raw(
        &self,
        params: impl Into<TransactionCallPreviewPostParams>,
    ) -> Result<ApiResponse<TransactionCallPreviewResponse>, Error> {
        self.base.request(&TRANSACTION_CALL_PREVIEW_POST, &params.into()).await
    }

    pub async fn transaction_call_preview_post(
        &self,
        params: impl Into<TransactionCallPreviewPostParams>,
    ) -> Result<TransactionCallPreviewResponse, Error> {
        self.transaction_call_preview_post_raw(params).await?.value()
    }
}
