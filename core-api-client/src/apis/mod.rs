// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! # API Classes
//!
//! One type per endpoint group. Each operation comes in two forms:
//!
//! - `<operation>_raw` returns the [`ApiResponse`](crate::runtime::ApiResponse)
//!   with status, headers and body;
//! - `<operation>` decodes the body into the response model.
//!
//! Operations take a `…Params` struct whose fields are all optional, so that
//! a missing parameter is reported as [`Error::Required`](crate::Error)
//! before any request is sent. Every params struct also converts from its
//! body model, which is the usual way to call an operation:
//!
//! ```no_run
//! # async fn run() -> Result<(), core_api_client::Error> {
//! use core_api_client::apis::StateApi;
//! use core_api_client::models::StateEpochRequest;
//!
//! let api = StateApi::default();
//! let epoch = api
//!     .state_epoch_post(StateEpochRequest { network: "localnet".into() })
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod lts;
mod mempool;
mod state;
mod status;
mod stream;
mod transaction;

pub use lts::*;
pub use mempool::*;
pub use state::*;
pub use status::*;
pub use stream::*;
pub use transaction::*;

use crate::runtime::Operation;

/// Defines the parameter object of an operation whose only parameter is its
/// JSON body.
macro_rules! params {
    ($(#[$meta:meta])* $name:ident { $field:ident: $ty:ty }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, ::serde::Serialize)]
        pub struct $name {
            #[serde(skip_serializing_if = "Option::is_none")]
            pub $field: Option<$ty>,
        }

        impl From<$ty> for $name {
            fn from(value: $ty) -> Self {
                Self {
                    $field: Some(value),
                }
            }
        }
    };
}

pub(crate) use params;

/// Every operation the client knows about.
pub const OPERATIONS: &[Operation] = &[
    STATUS_NETWORK_CONFIGURATION_POST,
    STATUS_NETWORK_STATUS_POST,
    MEMPOOL_LIST_POST,
    MEMPOOL_TRANSACTION_POST,
    STREAM_TRANSACTIONS_POST,
    STATE_EPOCH_POST,
    STATE_CLOCK_POST,
    STATE_COMPONENT_POST,
    STATE_VALIDATOR_POST,
    STATE_ACCESS_CONTROLLER_POST,
    STATE_PACKAGE_POST,
    STATE_RESOURCE_POST,
    STATE_NON_FUNGIBLE_POST,
    TRANSACTION_PARSE_POST,
    TRANSACTION_SUBMIT_POST,
    TRANSACTION_STATUS_POST,
    TRANSACTION_RECEIPT_POST,
    TRANSACTION_PREVIEW_POST,
    TRANSACTION_CALL_PREVIEW_POST,
    LTS_TRANSACTION_CONSTRUCTION_POST,
    LTS_TRANSACTION_STATUS_POST,
    LTS_TRANSACTION_SUBMIT_POST,
    LTS_STREAM_TRANSACTION_OUTCOMES_POST,
    LTS_STATE_ACCOUNT_ALL_FUNGIBLE_RESOURCE_BALANCES_POST,
    LTS_STATE_ACCOUNT_FUNGIBLE_RESOURCE_BALANCE_POST,
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use reqwest::Method;

    use super::*;

    #[test]
    fn operation_ids_and_paths_are_unique() {
        let ids: HashSet<_> = OPERATIONS.iter().map(|op| op.id).collect();
        let paths: HashSet<_> = OPERATIONS.iter().map(|op| op.path).collect();
        assert_eq!(ids.len(), OPERATIONS.len());
        assert_eq!(paths.len(), OPERATIONS.len());
    }

    #[test]
    fn every_operation_is_posted() {
        for op in OPERATIONS {
            assert_eq!(Method::from(op.method), Method::POST, "{}", op.id);
        }
    }

    #[test]
    fn body_parameter_is_always_required() {
        for op in OPERATIONS {
            if let Some(body) = op.body {
                assert!(op.required.contains(&body), "{}", op.id);
            }
        }
    }
}
