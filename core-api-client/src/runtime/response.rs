// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::marker::PhantomData;

use reqwest::header::HeaderMap;
use reqwest::StatusCode;

use crate::codec::Model;
use crate::Error;

/// A successful (2xx) raw response, decoded on demand.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
    model: PhantomData<fn() -> T>,
}

impl<T: Model> ApiResponse<T> {
    pub(crate) fn new(status: StatusCode, headers: HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
            model: PhantomData,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Decodes the body as `T`.
    ///
    /// # Errors
    /// Returns [`Error::Decode`] if the body does not match the model.
    pub fn value(&self) -> Result<T, Error> {
        Ok(T::from_slice(&self.body)?)
    }

    pub fn into_value(self) -> Result<T, Error> {
        self.value()
    }
}
