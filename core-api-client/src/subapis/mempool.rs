// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use crate::apis::MempoolApi;
use crate::models::{
    MempoolListRequest, MempoolListResponse, MempoolTransactionRequest,
    MempoolTransactionResponse,
};
use crate::Error;

#[derive(Clone, Debug)]
pub struct Mempool {
    api: MempoolApi,
    network: String,
}

impl Mempool {
    pub fn new<S: Into<String>>(api: MempoolApi, network: S) -> Self {
        Self {
            api,
            network: network.into(),
        }
    }

    pub fn api(&self) -> &MempoolApi {
        &self.api
    }

    /// Hashes of every transaction currently in the mempool.
    pub async fn list(&self) -> Result<MempoolListResponse, Error> {
        self.api
            .mempool_list_post(MempoolListRequest {
                network: self.network.clone(),
            })
            .await
    }

    /// Payloads of the given mempool transactions, by payload hash.
    pub async fn transaction(
        &self,
        payload_hashes: Vec<String>,
    ) -> Result<MempoolTransactionResponse, Error> {
        self.api
            .mempool_transaction_post(MempoolTransactionRequest {
                network: self.network.clone(),
                payload_hashes,
            })
            .await
    }
}
