// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! # Core API Data Models
//!
//! One Rust type per API schema, grouped by endpoint family. Every type
//! implements [`Model`](crate::codec::Model).
//!
//! ## Conventions
//!
//! - Field names match the JSON keys exactly (snake_case).
//! - Optional keys are `Option<T>`: absent and `null` both decode to `None`,
//!   and `None` is omitted when encoding.
//! - Tagged unions are enums with an internal tag, named after the JSON
//!   discriminator key (`type`, `key_type`, `substate_type`, ...).
//! - Unknown keys are ignored when decoding.

pub mod common;
pub mod error_response;
pub mod lts;
pub mod mempool;
pub mod receipt;
pub mod state;
pub mod status;
pub mod stream;
pub mod substate;
pub mod transaction;

pub use common::*;
pub use error_response::*;
pub use lts::*;
pub use mempool::*;
pub use receipt::*;
pub use state::*;
pub use status::*;
pub use stream::*;
pub use substate::*;
pub use transaction::*;
