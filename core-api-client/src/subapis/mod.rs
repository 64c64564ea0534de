// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! # Subapi Wrappers
//!
//! Thin facades over the [`apis`](crate::apis) classes that remember the
//! logical network name and fill the `network` field of every request.
//! They add no behavior of their own: each method issues exactly one call to
//! the wrapped API.
//!
//! [`CoreApiClient`] bundles one wrapper per endpoint group.

mod lts;
mod mempool;
mod state;
mod status;
mod stream;
mod transactions;

pub use lts::Lts;
pub use mempool::Mempool;
pub use state::State;
pub use status::Status;
pub use stream::Stream;
pub use transactions::Transactions;

use tracing::info;

use crate::apis::{
    LtsApi, MempoolApi, StateApi, StatusApi, StreamApi, TransactionApi,
};
use crate::config::ClientConfig;
use crate::runtime::Configuration;
use crate::Error;

/// All endpoint groups of a single node, for one logical network.
#[derive(Clone, Debug)]
pub struct CoreApiClient {
    pub status: Status,
    pub mempool: Mempool,
    pub stream: Stream,
    pub state: State,
    pub transactions: Transactions,
    pub lts: Lts,
    network: String,
}

impl CoreApiClient {
    /// Build every wrapper from the same configuration. No request is made.
    pub fn new<S: Into<String>>(configuration: Configuration, network: S) -> Self {
        let network = network.into();

        Self {
            status: Status::new(StatusApi::new(configuration.clone()), &network),
            mempool: Mempool::new(
                MempoolApi::new(configuration.clone()),
                &network,
            ),
            stream: Stream::new(StreamApi::new(configuration.clone()), &network),
            state: State::new(StateApi::new(configuration.clone()), &network),
            transactions: Transactions::new(
                TransactionApi::new(configuration.clone()),
                &network,
            ),
            lts: Lts::new(LtsApi::new(configuration), &network),
            network,
        }
    }

    /// Build a client from a loaded [`ClientConfig`]. No request is made.
    ///
    /// # Errors
    /// Fails if the configured base path or headers are invalid.
    pub fn from_config(config: &ClientConfig) -> Result<Self, Error> {
        Ok(Self::new(config.configuration()?, config.network.as_str()))
    }

    /// Build a client and check that the node serves `network`.
    ///
    /// # Errors
    /// Returns [`Error::NetworkMismatch`] if the node reports another
    /// network, or any error of the network-configuration request.
    pub async fn initialize<S: Into<String>>(
        configuration: Configuration,
        network: S,
    ) -> Result<Self, Error> {
        let client = Self::new(configuration, network);
        client.check_network().await?;
        Ok(client)
    }

    /// Fetch the node's network configuration and compare it with the
    /// configured network name.
    pub async fn check_network(&self) -> Result<(), Error> {
        let node = self.status.network_configuration().await?;
        if node.network != self.network {
            return Err(Error::NetworkMismatch {
                expected: self.network.clone(),
                actual: node.network,
            });
        }

        info!(
            network = %node.network,
            network_id = node.network_id,
            core_version = %node.version.core_version,
            "Connected to Core API"
        );
        Ok(())
    }

    /// The logical network name filled into requests.
    pub fn network(&self) -> &str {
        &self.network
    }
}
