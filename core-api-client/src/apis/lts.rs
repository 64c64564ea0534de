// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use super::params;
use crate::models::{
    LtsStateAccountAllFungibleResourceBalancesRequest,
    LtsStateAccountAllFungibleResourceBalancesResponse,
    LtsStateAccountFungibleResourceBalanceRequest,
    LtsStateAccountFungibleResourceBalanceResponse,
    LtsStreamTransactionOutcomesRequest,
    LtsStreamTransactionOutcomesResponse,
    LtsTransactionConstructionRequest,
    LtsTransactionConstructionResponse,
    LtsTransactionStatusRequest,
    LtsTransactionStatusResponse,
    LtsTransactionSubmitRequest,
    LtsTransactionSubmitResponse,
};
use crate::runtime::{ApiResponse, BaseApi, Configuration, Operation};
use crate::Error;

pub const LTS_TRANSACTION_CONSTRUCTION_POST: Operation = Operation::post(
    "lts_transaction_construction_post",
    "/lts/transaction/construction",
    &["lts_transaction_construction_request"],
);
pub const LTS_TRANSACTION_STATUS_POST: Operation = Operation::post(
    "lts_transaction_status_post",
    "/lts/transaction/status",
    &["lts_transaction_status_request"],
);
pub const LTS_TRANSACTION_SUBMIT_POST: Operation = Operation::post(
    "lts_transaction_submit_post",
    "/lts/transaction/submit",
    &["lts_transaction_submit_request"],
);
pub const LTS_STREAM_TRANSACTION_OUTCOMES_POST: Operation = Operation::post(
    "lts_stream_transaction_outcomes_post",
    "/lts/stream/transactions-basic-outcomes",
    &["lts_stream_transaction_outcomes_request"],
);
pub const LTS_STATE_ACCOUNT_ALL_FUNGIBLE_RESOURCE_BALANCES_POST: Operation = Operation::post(
    "lts_state_account_all_fungible_resource_balances_post",
    "/lts/state/account-all-fungible-resource-balances",
    &["lts_state_account_all_fungible_resource_balances_request"],
);
pub const LTS_STATE_ACCOUNT_FUNGIBLE_RESOURCE_BALANCE_POST: Operation = Operation::post(
    "lts_state_account_fungible_resource_balance_post",
    "/lts/state/account-fungible-resource-balance",
    &["lts_state_account_fungible_resource_balance_request"],
);

params!(LtsTransactionConstructionPostParams {
    lts_transaction_construction_request: LtsTransactionConstructionRequest
});
params!(LtsTransactionStatusPostParams {
    lts_transaction_status_request: LtsTransactionStatusRequest
});
params!(LtsTransactionSubmitPostParams {
    lts_transaction_submit_request: LtsTransactionSubmitRequest
});
params!(LtsStreamTransactionOutcomesPostParams {
    lts_stream_transaction_outcomes_request: LtsStreamTransactionOutcomesRequest
});
params!(LtsStateAccountAllFungibleResourceBalancesPostParams {
    lts_state_account_all_fungible_resource_balances_request: LtsStateAccountAllFungibleResourceBalancesRequest
});
params!(LtsStateAccountFungibleResourceBalancePostParams {
    lts_state_account_fungible_resource_balance_request: LtsStateAccountFungibleResourceBalanceRequest
});

/// Long term support endpoints, stable across node releases.
#[derive(Clone, Debug, Default)]
pub struct LtsApi {
    base: BaseApi,
}

impl LtsApi {
    pub fn new(configuration: Configuration) -> Self {
        Self {
            base: BaseApi::new(configuration),
        }
    }

    pub fn configuration(&self) -> &Configuration {
        self.base.configuration()
    }

    /// Get Construction Metadata.
    ///
    /// The current epoch and ledger clock, for building a transaction header.
    pub async fn lts_transaction_construction_post_raw(
        &self,
        params: impl Into<LtsTransactionConstructionPostParams>,
    ) -> Result<ApiResponse<LtsTransactionConstructionResponse>, Error> {
        self.base.request(&LTS_TRANSACTION_CONSTRUCTION_POST, &params.into()).await
    }

    pub async fn lts_transaction_construction_post(
        &self,
        params: impl Into<LtsTransactionConstructionPostParams>,
    ) -> Result<LtsTransactionConstructionResponse, Error> {
        self.lts_transaction_construction_post_raw(params).await?.value()
    }

    /// Get Transaction Status.
    pub async fn lts_transaction_status_post_raw(
        &self,
        params: impl Into<LtsTransactionStatusPostParams>,
    ) -> Result<ApiResponse<LtsTransactionStatusResponse>, Error> {
        self.base.request(&LTS_TRANSACTION_STATUS_POST, &params.into()).await
    }

    pub async fn lts_transaction_status_post(
        &self,
        params: impl Into<LtsTransactionStatusPostParams>,
    ) -> Result<LtsTransactionStatusResponse, Error> {
        self.lts_transaction_status_post_raw(params).await?.value()
    }

    /// Submit Transaction.
    pub async fn lts_transaction_submit_post_raw(
        &self,
        params: impl Into<LtsTransactionSubmitPostParams>,
    ) -> Result<ApiResponse<LtsTransactionSubmitResponse>, Error> {
        self.base.request(&LTS_TRANSACTION_SUBMIT_POST, &params.into()).await
    }

    pub async fn lts_transaction_submit_post(
        &self,
        params: impl Into<LtsTransactionSubmitPostParams>,
    ) -> Result<LtsTransactionSubmitResponse, Error> {
        self.lts_transaction_submit_post_raw(params).await?.value()
    }

    /// Get Transactions Outcomes.
    ///
    /// Pages through committed transactions, reporting only their balance
    /// changes and fees.
    pub async fn lts_stream_transaction_outcomes_post_raw(
        &self,
        params: impl Into<LtsStreamTransactionOutcomesPostParams>,
    ) -> Result<ApiResponse<LtsStreamTransactionOutcomesResponse>, Error> {
        self.base.request(&LTS_STREAM_TRANSACTION_OUTCOMES_POST, &params.into()).await
    }

    pub async fn lts_stream_transaction_outcomes_post(
        &self,
        params: impl Into<LtsStreamTransactionOutcomesPostParams>,
    ) -> Result<LtsStreamTransactionOutcomesResponse, Error> {
        self.lts_stream_transaction_outcomes_post_raw(params).await?.value()
    }

    /// Get All Account Balances.
    pub async fn lts_state_account_all_fungible_resource_balances_post_raw(
        &self,
        params: impl Into<LtsStateAccountAllFungibleResourceBalancesPostParams>,
    ) -> Result<ApiResponse<LtsStateAccountAllFungibleResourceBalancesResponse>, Error> {
        self.base.request(&LTS_STATE_ACCOUNT_ALL_FUNGIBLE_RESOURCE_BALANCES_POST, &params.into()).await
    }

    pub async fn lts_state_account_all_fungible_resource_balances_post(
        &self,
        params: impl Into<LtsStateAccountAllFungibleResourceBalancesPostParams>,
    ) -> Result<LtsStateAccountAllFungibleResourceBalancesResponse, Error> {
        self.lts_state_account_all_fungible_resource_balances_post_raw(params).await?.value()
    }

    /// Get Single Account Balance.
    pub async fn lts_state_account_fungible_resource_balance_post_raw(
        &self,
        params: impl Into<LtsStateAccountFungibleResourceBalancePostParams>,
    ) -> Result<ApiResponse<LtsStateAccountFungibleResourceBalanceResponse>, Error> {
        self.base.request(&LTS_STATE_ACCOUNT_FUNGIBLE_RESOURCE_BALANCE_POST, &params.into()).await
    }

    pub async fn lts_state_account_fungible_resource_balance_post(
        &self,
        params: impl Into<LtsStateAccountFungibleResourceBalancePostParams>,
    ) -> Result<LtsStateAccountFungibleResourceBalanceResponse, Error> {
        self.lts_state_account_fungible_resource_balance_post_raw(params).await?.value()
    }
}
