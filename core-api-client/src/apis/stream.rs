// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use super::params;
use crate::models::{StreamTransactionsRequest, StreamTransactionsResponse};
use crate::runtime::{ApiResponse, BaseApi, Configuration, Operation};
use crate::Error;

pub const STREAM_TRANSACTIONS_POST: Operation = Operation::post(
    "stream_transactions_post",
    "/stream/transactions",
    &["stream_transactions_request"],
);

params!(StreamTransactionsPostParams {
    stream_transactions_request: StreamTransactionsRequest
});

#[derive(Clone, Debug, Default)]
pub struct StreamApi {
    base: BaseApi,
}

impl StreamApi {
    pub fn new(configuration: Configuration) -> Self {
        Self {
            base: BaseApi::new(configuration),
        }
    }

    pub fn configuration(&self) -> &Configuration {
        self.base.configuration()
    }

    /// Get Committed Transactions.
    ///
    /// Pages through the ledger starting at `from_state_version`. A start
    /// beyond the ledger tip fails with a `StreamTransactions` error
    /// response.
    pub async fn stream_transactions_post_raw(
        &self,
        params: impl Into<StreamTransactionsPostParams>,
    ) -> Result<ApiResponse<StreamTransactionsResponse>, Error> {
        self.base
            .request(&STREAM_TRANSACTIONS_POST, &params.into())
            .await
    }

    pub async fn stream_transactions_post(
        &self,
        params: impl Into<StreamTransactionsPostParams>,
    ) -> Result<StreamTransactionsResponse, Error> {
        self.stream_transactions_post_raw(params).await?.value()
    }
}
