// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use crate::apis::LtsApi;
use crate::models::{
    LtsStateAccountAllFungibleResourceBalancesRequest,
    LtsStateAccountAllFungibleResourceBalancesResponse,
    LtsStateAccountFungibleResourceBalanceRequest,
    LtsStateAccountFungibleResourceBalanceResponse,
    LtsStreamTransactionOutcomesRequest, LtsStreamTransactionOutcomesResponse,
    LtsTransactionConstructionRequest, LtsTransactionConstructionResponse,
    LtsTransactionStatusRequest, LtsTransactionStatusResponse,
    LtsTransactionSubmitRequest, LtsTransactionSubmitResponse,
};
use crate::Error;

#[derive(Clone, Debug)]
pub struct Lts {
    api: LtsApi,
    network: String,
}

impl Lts {
    pub fn new<S: Into<String>>(api: LtsApi, network: S) -> Self {
        Self {
            api,
            network: network.into(),
        }
    }

    pub fn api(&self) -> &LtsApi {
        &self.api
    }

    pub async fn construction_metadata(
        &self,
    ) -> Result<LtsTransactionConstructionResponse, Error> {
        self.api
            .lts_transaction_construction_post(
                LtsTransactionConstructionRequest {
                    network: self.network.clone(),
                },
            )
            .await
    }

    pub async fn submit<S: Into<String>>(
        &self,
        notarized_transaction_hex: S,
    ) -> Result<LtsTransactionSubmitResponse, Error> {
        self.api
            .lts_transaction_submit_post(LtsTransactionSubmitRequest {
                network: self.network.clone(),
                notarized_transaction_hex: notarized_transaction_hex.into(),
                force_recalculate: None,
            })
            .await
    }

    pub async fn status<S: Into<String>>(
        &self,
        intent_hash: S,
    ) -> Result<LtsTransactionStatusResponse, Error> {
        self.api
            .lts_transaction_status_post(LtsTransactionStatusRequest {
                network: self.network.clone(),
                intent_hash: intent_hash.into(),
            })
            .await
    }

    pub async fn transaction_outcomes(
        &self,
        from_state_version: u64,
        limit: u32,
    ) -> Result<LtsStreamTransactionOutcomesResponse, Error> {
        self.api
            .lts_stream_transaction_outcomes_post(
                LtsStreamTransactionOutcomesRequest {
                    network: self.network.clone(),
                    from_state_version,
                    limit,
                },
            )
            .await
    }

    pub async fn account_all_fungible_resource_balances<S: Into<String>>(
        &self,
        account_address: S,
    ) -> Result<LtsStateAccountAllFungibleResourceBalancesResponse, Error> {
        self.api
            .lts_state_account_all_fungible_resource_balances_post(
                LtsStateAccountAllFungibleResourceBalancesRequest {
                    network: self.network.clone(),
                    account_address: account_address.into(),
                },
            )
            .await
    }

    pub async fn account_fungible_resource_balance<A, R>(
        &self,
        account_address: A,
        resource_address: R,
    ) -> Result<LtsStateAccountFungibleResourceBalanceResponse, Error>
    where
        A: Into<String>,
        R: Into<String>,
    {
        self.api
            .lts_state_account_fungible_resource_balance_post(
                LtsStateAccountFungibleResourceBalanceRequest {
                    network: self.network.clone(),
                    account_address: account_address.into(),
                    resource_address: resource_address.into(),
                },
            )
            .await
    }
}
