// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use super::params;
use crate::models::{
    MempoolListRequest, MempoolListResponse, MempoolTransactionRequest,
    MempoolTransactionResponse,
};
use crate::runtime::{ApiResponse, BaseApi, Configuration, Operation};
use crate::Error;

pub const MEMPOOL_LIST_POST: Operation = Operation::post(
    "mempool_list_post",
    "/mempool/list",
    &["mempool_list_request"],
);
pub const MEMPOOL_TRANSACTION_POST: Operation = Operation::post(
    "mempool_transaction_post",
    "/mempool/transaction",
    &["mempool_transaction_request"],
);

params!(MempoolListPostParams {
    mempool_list_request: MempoolListRequest
});
params!(MempoolTransactionPostParams {
    mempool_transaction_request: MempoolTransactionRequest
});

/// Read access to the node's mempool.
#[derive(Clone, Debug, Default)]
pub struct MempoolApi {
    base: BaseApi,
}

impl MempoolApi {
    pub fn new(configuration: Configuration) -> Self {
        Self {
            base: BaseApi::new(configuration),
        }
    }

    pub fn configuration(&self) -> &Configuration {
        self.base.configuration()
    }

    /// Get Mempool List.
    pub async fn mempool_list_post_raw(
        &self,
        params: impl Into<MempoolListPostParams>,
    ) -> Result<ApiResponse<MempoolListResponse>, Error> {
        self.base.request(&MEMPOOL_LIST_POST, &params.into()).await
    }

    pub async fn mempool_list_post(
        &self,
        params: impl Into<MempoolListPostParams>,
    ) -> Result<MempoolListResponse, Error> {
        self.mempool_list_post_raw(params).await?.value()
    }

    /// Get Mempool Transaction.
    ///
    /// Payloads that are no longer in the mempool are reported per payload,
    /// not as a failed request.
    pub async fn mempool_transaction_post_raw(
        &self,
        params: impl Into<MempoolTransactionPostParams>,
    ) -> Result<ApiResponse<MempoolTransactionResponse>, Error> {
        self.base
            .request(&MEMPOOL_TRANSACTION_POST, &params.into())
            .await
    }

    pub async fn mempool_transaction_post(
        &self,
        params: impl Into<MempoolTransactionPostParams>,
    ) -> Result<MempoolTransactionResponse, Error> {
        self.mempool_transaction_post_raw(params).await?.value()
    }
}
