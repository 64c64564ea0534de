// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Typed client for the JSON/HTTP Core API of a Babylon node.
//!
//! The crate is layered, leaves first:
//!
//! - [`codec`]: the [`Model`] trait and [`DecodeError`];
//! - [`models`]: one type per API schema;
//! - [`runtime`]: [`Configuration`], the [`Transport`] seam and request
//!   dispatch;
//! - [`apis`]: one class per endpoint group, one method pair per operation;
//! - [`subapis`]: wrappers that fill in the network name, and the
//!   [`CoreApiClient`] aggregate;
//! - [`config`]: loading a [`ClientConfig`] from TOML and the environment.
//!
//! ```no_run
//! use core_api_client::{Configuration, CoreApiClient};
//!
//! # async fn run() -> Result<(), core_api_client::Error> {
//! let configuration = Configuration::new("http://127.0.0.1:3333/core")?;
//! let client = CoreApiClient::initialize(configuration, "localnet").await?;
//!
//! let status = client.status.network_status().await?;
//! println!("at state version {}", status.current_state_identifier.state_version);
//! # Ok(())
//! # }
//! ```

#![deny(missing_debug_implementations)]

pub mod apis;
pub mod codec;
pub mod config;
pub mod error;
pub mod models;
pub mod runtime;
pub mod subapis;

pub use codec::{DecodeError, Model};
pub use config::{ClientConfig, ConfigError};
pub use error::{Error, ResponseError};
pub use runtime::{
    ApiResponse, Configuration, HttpRequest, HttpResponse, ReqwestTransport,
    Transport, TransportError,
};
pub use subapis::CoreApiClient;
