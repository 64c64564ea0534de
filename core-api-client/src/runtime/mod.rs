// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Request plumbing shared by all API classes.
//!
//! A request flows through [`BaseApi::request`]: the [`Operation`] checks
//! required parameters and extracts the body, the [`Configuration`] supplies
//! base path, default headers and [`Transport`], and a 2xx response comes
//! back as an [`ApiResponse`] that decodes lazily.

mod base;
mod configuration;
mod operation;
mod response;
mod transport;

pub use base::BaseApi;
pub use configuration::{Configuration, DEFAULT_BASE_PATH};
pub use operation::{HttpMethod, Operation};
pub use response::ApiResponse;
pub use transport::{
    HttpRequest, HttpResponse, ReqwestTransport, Transport, TransportError,
};
