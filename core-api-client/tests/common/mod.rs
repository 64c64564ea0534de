// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use core_api_client::{
    Configuration, HttpRequest, HttpResponse, Transport, TransportError,
};
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde_json::{json, Value};

/// Records every request and answers from a queue of canned responses.
#[derive(Clone, Default)]
pub struct MockTransport {
    requests: Arc<Mutex<Vec<HttpRequest>>>,
    responses: Arc<Mutex<VecDeque<HttpResponse>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: Value) -> &Self {
        let status =
            StatusCode::from_u16(status).expect("status should be valid");
        self.responses.lock().unwrap().push_back(HttpResponse {
            status,
            headers: HeaderMap::new(),
            body: serde_json::to_vec(&body).expect("body should encode"),
        });
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests()
            .pop()
            .expect("at least one request should be sent")
    }

    /// The JSON body of the last request.
    pub fn last_body(&self) -> Value {
        let body = self.last_request().body.expect("request should have a body");
        serde_json::from_slice(&body).expect("body should be JSON")
    }

    pub fn configuration(&self) -> Configuration {
        Configuration::new("http://node.test/core")
            .expect("base path should be valid")
            .with_transport(self.clone())
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(
        &self,
        request: HttpRequest,
    ) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| TransportError::Other("no response queued".into()))
    }
}

pub fn state_identifier(state_version: u64) -> Value {
    json!({ "state_version": state_version, "accumulator_hash": "00" })
}

pub fn network_status() -> Value {
    json!({
        "pre_genesis_state_identifier": state_identifier(0),
        "current_state_identifier": state_identifier(5),
        "current_epoch_round": { "epoch": 2, "round": 7 },
    })
}

pub fn network_configuration(network: &str) -> Value {
    let address = |name: &str| format!("{name}_tdx_2_1qqqq");
    json!({
        "version": { "core_version": "v1.0.0", "api_version": "v1.0.0" },
        "network": network,
        "network_id": 242,
        "network_hrp_suffix": "loc",
        "address_types": [],
        "well_known_addresses": {
            "xrd": address("resource"),
            "system_transaction_badge": address("resource"),
            "package_of_direct_caller_virtual_badge": address("resource"),
            "global_caller_virtual_badge": address("resource"),
            "package_owner_badge": address("resource"),
            "validator_owner_badge": address("resource"),
            "account_owner_badge": address("resource"),
            "identity_owner_badge": address("resource"),
            "package_package": address("package"),
            "resource_package": address("package"),
            "account_package": address("package"),
            "identity_package": address("package"),
            "consensus_manager_package": address("package"),
            "access_controller_package": address("package"),
            "transaction_processor_package": address("package"),
            "metadata_module_package": address("package"),
            "royalty_module_package": address("package"),
            "role_assignment_module_package": address("package"),
            "genesis_helper_package": address("package"),
            "faucet_package": address("package"),
            "pool_package": address("package"),
            "consensus_manager": address("consensusmanager"),
            "genesis_helper": address("component"),
            "faucet": address("component"),
            "transaction_tracker": address("internal_keyvaluestore"),
        },
    })
}
