// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

mod common;

use assert_matches::assert_matches;
use core_api_client::models::TargetIdentifier;
use core_api_client::{CoreApiClient, Error};
use serde_json::json;

use common::MockTransport;

#[tokio::test]
async fn wrappers_fill_in_the_network() {
    let mock = MockTransport::new();
    let client = CoreApiClient::new(mock.configuration(), "stokenet");

    mock.respond(200, json!({ "contents": [] }));
    client.mempool.list().await.expect("list should decode");
    assert_eq!(mock.last_body(), json!({ "network": "stokenet" }));

    mock.respond(200, json!({ "duplicate": false }));
    let response = client
        .transactions
        .submit("0a0b")
        .await
        .expect("submit should decode");
    assert!(!response.duplicate);
    assert_eq!(
        mock.last_body(),
        json!({ "network": "stokenet", "notarized_transaction_hex": "0a0b" })
    );
    assert_eq!(
        mock.last_request().url,
        "http://node.test/core/transaction/submit"
    );
}

#[tokio::test]
async fn wrapper_arguments_reach_the_body() {
    let mock = MockTransport::new();
    let client = CoreApiClient::new(mock.configuration(), "localnet");

    mock.respond(200, json!({ "status": "Succeeded" }));
    client
        .transactions
        .call_preview(
            TargetIdentifier::Method {
                component_address: "component_loc1".into(),
                method_name: "get_amount".into(),
            },
            vec!["5c21".into()],
        )
        .await
        .expect("call preview should decode");
    assert_eq!(
        mock.last_body(),
        json!({
            "network": "localnet",
            "target": {
                "type": "Method",
                "component_address": "component_loc1",
                "method_name": "get_amount",
            },
            "arguments": ["5c21"],
        })
    );

    mock.respond(200, json!({ "payloads": [], "count": 0 }));
    client
        .mempool
        .transaction(vec!["ff".into()])
        .await
        .expect("payloads should decode");
    assert_eq!(
        mock.last_body(),
        json!({ "network": "localnet", "payload_hashes": ["ff"] })
    );
}

#[tokio::test]
async fn initialize_accepts_matching_network() {
    let mock = MockTransport::new();
    mock.respond(200, common::network_configuration("localnet"));

    let client = CoreApiClient::initialize(mock.configuration(), "localnet")
        .await
        .expect("network should match");
    assert_eq!(client.network(), "localnet");
    assert_eq!(mock.requests().len(), 1);
}

#[tokio::test]
async fn initialize_rejects_other_network() {
    let mock = MockTransport::new();
    mock.respond(200, common::network_configuration("mainnet"));

    let err = CoreApiClient::initialize(mock.configuration(), "localnet")
        .await
        .expect_err("network should not match");

    assert_matches!(err, Error::NetworkMismatch { expected, actual } => {
        assert_eq!(expected, "localnet");
        assert_eq!(actual, "mainnet");
    });
}

#[tokio::test]
async fn new_sends_nothing() {
    let mock = MockTransport::new();
    let _client = CoreApiClient::new(mock.configuration(), "localnet");
    assert!(mock.requests().is_empty());
}
