// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Payloads of the `/mempool/*` endpoints.

use serde::{Deserialize, Serialize};

use crate::codec::impl_model;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MempoolListRequest {
    pub network: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MempoolTransactionHashes {
    pub intent_hash: String,
    pub payload_hash: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MempoolListResponse {
    pub contents: Vec<MempoolTransactionHashes>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MempoolTransactionRequest {
    pub network: String,
    pub payload_hashes: Vec<String>,
}

/// One requested payload. Exactly one of `hex` and `error` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MempoolTransactionResponsePayload {
    pub payload_hash: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hex: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MempoolTransactionResponse {
    pub count: u32,
    pub payloads: Vec<MempoolTransactionResponsePayload>,
}

impl_model!(
    MempoolListRequest,
    MempoolTransactionHashes,
    MempoolListResponse,
    MempoolTransactionRequest,
    MempoolTransactionResponsePayload,
    MempoolTransactionResponse,
);
