// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::path::PathBuf;

use clap::Subcommand;
use core_api_client::models::TransactionPreviewRequest;
use core_api_client::{CoreApiClient, Model};
use serde_json::Value;

/// Queries that can be run against a node
#[derive(PartialEq, Eq, Clone, Subcommand, Debug)]
pub(crate) enum Command {
    /// Print the effective configuration as TOML
    Config,

    /// Show the node's network configuration
    NetworkConfiguration,

    /// Show the node's ledger status
    NetworkStatus,

    /// List the payload hashes in the mempool
    MempoolList,

    /// Fetch mempool payloads by hash
    MempoolTransaction {
        /// Payload hashes
        #[arg(required = true)]
        payload_hashes: Vec<String>,
    },

    /// Stream committed transactions
    Stream {
        /// First state version to return
        #[arg(long, default_value_t = 1)]
        from: u64,
        /// Maximum number of transactions
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },

    /// Show the current epoch and validator set
    Epoch,

    /// Show the consensus clock
    Clock,

    /// Show a component's state
    Component {
        /// Component address
        address: String,
    },

    /// Show a validator's state
    Validator {
        /// Validator address
        address: String,
    },

    /// Show an access controller's state
    AccessController {
        /// Access controller address
        address: String,
    },

    /// Show a package's state
    Package {
        /// Package address
        address: String,
    },

    /// Show a resource manager's state
    Resource {
        /// Resource address
        address: String,
    },

    /// Show a non-fungible's data
    NonFungible {
        /// Resource address
        resource: String,
        /// Non-fungible local id, in its simple string form
        id: String,
    },

    /// Submit a notarized transaction
    Submit {
        /// Notarized transaction payload, hex encoded
        payload_hex: String,
    },

    /// Show the status of a transaction intent
    Status {
        /// Intent hash
        intent_hash: String,
    },

    /// Show the receipt of a committed transaction
    Receipt {
        /// Intent hash
        intent_hash: String,
    },

    /// Parse a transaction payload
    Parse {
        /// Payload, hex encoded
        payload_hex: String,
    },

    /// Preview a transaction described by a JSON request file
    Preview {
        /// Path to a `TransactionPreviewRequest` JSON document
        file: PathBuf,
    },

    /// Show the LTS construction metadata
    LtsConstruction,

    /// Submit a notarized transaction through the LTS endpoint
    LtsSubmit {
        /// Notarized transaction payload, hex encoded
        payload_hex: String,
    },

    /// Show the LTS status of a transaction intent
    LtsStatus {
        /// Intent hash
        intent_hash: String,
    },

    /// Stream committed transaction outcomes
    LtsOutcomes {
        /// First state version to return
        #[arg(long, default_value_t = 1)]
        from: u64,
        /// Maximum number of outcomes
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },

    /// Show every fungible balance of an account
    Balances {
        /// Account address
        account: String,
    },

    /// Show one fungible balance of an account
    Balance {
        /// Account address
        account: String,
        /// Resource address
        resource: String,
    },
}

impl Command {
    /// Whether the command needs a node at all.
    pub(crate) fn is_remote(&self) -> bool {
        !matches!(self, Self::Config)
    }

    /// Runs a remote command and returns the response as JSON.
    pub(crate) async fn run(self, client: &CoreApiClient) -> anyhow::Result<Value> {
        let value = match self {
            Self::Config => anyhow::bail!("`config` does not query a node"),
            Self::NetworkConfiguration => {
                client.status.network_configuration().await?.to_json()
            }
            Self::NetworkStatus => client.status.network_status().await?.to_json(),
            Self::MempoolList => client.mempool.list().await?.to_json(),
            Self::MempoolTransaction { payload_hashes } => {
                client.mempool.transaction(payload_hashes).await?.to_json()
            }
            Self::Stream { from, limit } => {
                client.stream.transactions(from, limit).await?.to_json()
            }
            Self::Epoch => client.state.epoch().await?.to_json(),
            Self::Clock => client.state.clock().await?.to_json(),
            Self::Component { address } => {
                client.state.component(address).await?.to_json()
            }
            Self::Validator { address } => {
                client.state.validator(address).await?.to_json()
            }
            Self::AccessController { address } => {
                client.state.access_controller(address).await?.to_json()
            }
            Self::Package { address } => {
                client.state.package(address).await?.to_json()
            }
            Self::Resource { address } => {
                client.state.resource(address).await?.to_json()
            }
            Self::NonFungible { resource, id } => {
                client.state.non_fungible(resource, id).await?.to_json()
            }
            Self::Submit { payload_hex } => {
                client.transactions.submit(payload_hex).await?.to_json()
            }
            Self::Status { intent_hash } => {
                client.transactions.status(intent_hash).await?.to_json()
            }
            Self::Receipt { intent_hash } => {
                client.transactions.receipt(intent_hash).await?.to_json()
            }
            Self::Parse { payload_hex } => {
                client.transactions.parse(payload_hex).await?.to_json()
            }
            Self::Preview { file } => {
                let content = std::fs::read(&file)?;
                let request = TransactionPreviewRequest::from_slice(&content)?;
                client.transactions.preview(request).await?.to_json()
            }
            Self::LtsConstruction => {
                client.lts.construction_metadata().await?.to_json()
            }
            Self::LtsSubmit { payload_hex } => {
                client.lts.submit(payload_hex).await?.to_json()
            }
            Self::LtsStatus { intent_hash } => {
                client.lts.status(intent_hash).await?.to_json()
            }
            Self::LtsOutcomes { from, limit } => {
                client.lts.transaction_outcomes(from, limit).await?.to_json()
            }
            Self::Balances { account } => client
                .lts
                .account_all_fungible_resource_balances(account)
                .await?
                .to_json(),
            Self::Balance { account, resource } => client
                .lts
                .account_fungible_resource_balance(account, resource)
                .await?
                .to_json(),
        };

        Ok(value)
    }
}
