// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use crate::apis::StreamApi;
use crate::models::{StreamTransactionsRequest, StreamTransactionsResponse};
use crate::Error;

#[derive(Clone, Debug)]
pub struct Stream {
    api: StreamApi,
    network: String,
}

impl Stream {
    pub fn new<S: Into<String>>(api: StreamApi, network: S) -> Self {
        Self {
            api,
            network: network.into(),
        }
    }

    pub fn api(&self) -> &StreamApi {
        &self.api
    }

    /// Up to `limit` committed transactions from `from_state_version` on,
    /// in the node's default formats.
    pub async fn transactions(
        &self,
        from_state_version: u64,
        limit: u32,
    ) -> Result<StreamTransactionsResponse, Error> {
        self.api
            .stream_transactions_post(StreamTransactionsRequest {
                network: self.network.clone(),
                from_state_version,
                limit,
                sbor_format_options: None,
                transaction_format_options: None,
                substate_format_options: None,
            })
            .await
    }
}
