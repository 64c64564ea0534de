// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Central error handling for the Core API client.
//!
//! Every fallible operation of the crate returns [`Error`]. Failures are
//! sorted by where they happen:
//!
//! 1. **Before any I/O:** a required parameter is missing
//!    ([`Error::Required`]), a body cannot be encoded ([`Error::Encode`]) or
//!    the configuration is unusable ([`Error::InvalidBasePath`],
//!    [`Error::InvalidHeader`]).
//! 2. **On the wire:** the transport failed ([`Error::Transport`]) or the node
//!    answered with a non-2xx status ([`Error::Response`]).
//! 3. **After the response:** the body does not match the expected model
//!    ([`Error::Decode`]), or the node serves another network than the one
//!    configured ([`Error::NetworkMismatch`]).

use std::fmt;

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use thiserror::Error;

use crate::codec::{DecodeError, Model};
use crate::models::ErrorResponse;
use crate::runtime::TransportError;

#[derive(Error, Debug)]
pub enum Error {
    /// A required request parameter was not provided.
    #[error(
        "Required parameter `{parameter}` was null or undefined when calling `{operation}`"
    )]
    Required {
        parameter: &'static str,
        operation: &'static str,
    },

    /// A response body did not match the expected model.
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// A request body could not be encoded.
    #[error("Encode error: {0}")]
    Encode(#[from] serde_json::Error),

    /// The node answered with a non-2xx status.
    #[error("{0}")]
    Response(Box<ResponseError>),

    /// The request could not be delivered, or no response was received.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The configured base path is not a valid absolute URL.
    #[error("Invalid base path `{base_path}`: {source}")]
    InvalidBasePath {
        base_path: String,
        #[source]
        source: url::ParseError,
    },

    /// A configured header name or value is not valid HTTP.
    #[error("Invalid header `{0}`")]
    InvalidHeader(String),

    /// The node serves a different network than the configured one.
    #[error("Network mismatch: expected `{expected}`, node is on `{actual}`")]
    NetworkMismatch { expected: String, actual: String },
}

impl Error {
    /// HTTP status of a [`Error::Response`], if this is one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Response(response) => Some(response.status()),
            _ => None,
        }
    }
}

impl From<ResponseError> for Error {
    fn from(err: ResponseError) -> Self {
        Self::Response(Box::new(err))
    }
}

/// A non-2xx response, kept whole so the caller can inspect it.
#[derive(Debug)]
pub struct ResponseError {
    pub(crate) operation: &'static str,
    pub(crate) status: StatusCode,
    pub(crate) headers: HeaderMap,
    pub(crate) body: Vec<u8>,
}

impl ResponseError {
    /// Identifier of the operation that failed, e.g. `state_epoch_post`.
    pub fn operation(&self) -> &'static str {
        self.operation
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

    /// Decodes the body as the node's structured error, if it is one.
    pub fn error_response(&self) -> Option<ErrorResponse> {
        ErrorResponse::from_slice(&self.body).ok()
    }
}

impl fmt::Display for ResponseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` failed with HTTP {}", self.operation, self.status)?;

        match self.error_response() {
            Some(error) => write!(f, ": {}", error.message()),
            None if self.body.is_empty() => Ok(()),
            None => {
                write!(f, ": {}", String::from_utf8_lossy(&self.body))
            }
        }
    }
}

impl std::error::Error for ResponseError {}
