// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

mod common;

use std::time::Duration;

use assert_matches::assert_matches;
use core_api_client::{ClientConfig, CoreApiClient, Error, TransportError};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig {
        base_path: format!("{}/core/", server.uri()),
        ..ClientConfig::default()
    }
}

#[tokio::test]
async fn reqwest_transport_talks_to_a_node() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/core/status/network-status"))
        .and(header("content-type", "application/json"))
        .and(header("accept", "application/json"))
        .and(body_json(json!({ "network": "localnet" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(common::network_status()),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = CoreApiClient::from_config(&config_for(&server))
        .expect("client should build");
    let status = client
        .status
        .network_status()
        .await
        .expect("status should decode");

    assert_eq!(status.current_state_identifier.state_version, 5);
}

#[tokio::test]
async fn configured_headers_reach_the_node() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/core/status/network-configuration"))
        .and(header("x-api-key", "secret"))
        .and(header("user-agent", "core-api-test"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(common::network_configuration("localnet")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut config = config_for(&server);
    config.user_agent = Some("core-api-test".into());
    config.headers.insert("x-api-key".into(), "secret".into());

    let client = CoreApiClient::from_config(&config).expect("client should build");
    client.check_network().await.expect("network should match");
}

#[tokio::test]
async fn error_status_comes_back_as_response_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/core/transaction/submit"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error_type": "TransactionSubmit",
            "code": 400,
            "message": "Transaction rejected",
            "details": {
                "type": "Rejected",
                "error_message": "Signature invalid",
                "is_fresh": true,
                "is_payload_rejection_permanent": true,
                "is_intent_rejection_permanent": false,
                "is_rejected_because_intent_already_committed": false,
            },
        })))
        .mount(&server)
        .await;

    let client = CoreApiClient::from_config(&config_for(&server))
        .expect("client should build");
    let err = client
        .transactions
        .submit("00")
        .await
        .expect_err("submit should be rejected");

    assert_eq!(err.status().map(|s| s.as_u16()), Some(400));
    assert_matches!(err, Error::Response(response) => {
        let body = response.error_response().expect("body should decode");
        assert_eq!(body.message(), "Transaction rejected");
    });
}

#[tokio::test]
async fn request_timeout_is_applied() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(common::network_status())
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let mut config = config_for(&server);
    config.request_timeout = Some(Duration::from_millis(50));

    let client = CoreApiClient::from_config(&config).expect("client should build");
    let err = client
        .status
        .network_status()
        .await
        .expect_err("request should time out");

    assert_matches!(err, Error::Transport(TransportError::Request(e)) => {
        assert!(e.is_timeout());
    });
}
