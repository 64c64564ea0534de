// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

mod common;

use assert_matches::assert_matches;
use core_api_client::apis::*;
use core_api_client::models::{
    ErrorResponse, MempoolListRequest, NetworkStatusRequest, StateEpochRequest,
};
use core_api_client::{DecodeError, Error};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde_json::json;

use common::MockTransport;

macro_rules! assert_required {
    ($call:expr, $parameter:literal, $operation:literal) => {
        assert_matches!(
            $call.await,
            Err(Error::Required { parameter, operation }) => {
                assert_eq!(parameter, $parameter);
                assert_eq!(operation, $operation);
            }
        )
    };
}

#[tokio::test]
async fn missing_body_is_rejected_before_sending() {
    let mock = MockTransport::new();
    let configuration = mock.configuration();

    let status = StatusApi::new(configuration.clone());
    assert_required!(
        status.status_network_status_post(StatusNetworkStatusPostParams::default()),
        "network_status_request",
        "status_network_status_post"
    );

    let mempool = MempoolApi::new(configuration.clone());
    assert_required!(
        mempool.mempool_list_post(MempoolListPostParams::default()),
        "mempool_list_request",
        "mempool_list_post"
    );
    assert_required!(
        mempool.mempool_transaction_post(MempoolTransactionPostParams::default()),
        "mempool_transaction_request",
        "mempool_transaction_post"
    );

    let stream = StreamApi::new(configuration.clone());
    assert_required!(
        stream.stream_transactions_post(StreamTransactionsPostParams::default()),
        "stream_transactions_request",
        "stream_transactions_post"
    );

    let state = StateApi::new(configuration.clone());
    assert_required!(
        state.state_epoch_post(StateEpochPostParams::default()),
        "state_epoch_request",
        "state_epoch_post"
    );
    assert_required!(
        state.state_clock_post(StateClockPostParams::default()),
        "state_clock_request",
        "state_clock_post"
    );
    assert_required!(
        state.state_component_post(StateComponentPostParams::default()),
        "state_component_request",
        "state_component_post"
    );
    assert_required!(
        state.state_validator_post(StateValidatorPostParams::default()),
        "state_validator_request",
        "state_validator_post"
    );
    assert_required!(
        state.state_access_controller_post(
            StateAccessControllerPostParams::default()
        ),
        "state_access_controller_request",
        "state_access_controller_post"
    );
    assert_required!(
        state.state_package_post(StatePackagePostParams::default()),
        "state_package_request",
        "state_package_post"
    );
    assert_required!(
        state.state_resource_post(StateResourcePostParams::default()),
        "state_resource_request",
        "state_resource_post"
    );
    assert_required!(
        state.state_non_fungible_post(StateNonFungiblePostParams::default()),
        "state_non_fungible_request",
        "state_non_fungible_post"
    );

    let transaction = TransactionApi::new(configuration.clone());
    assert_required!(
        transaction.transaction_parse_post(TransactionParsePostParams::default()),
        "transaction_parse_request",
        "transaction_parse_post"
    );
    assert_required!(
        transaction
            .transaction_submit_post(TransactionSubmitPostParams::default()),
        "transaction_submit_request",
        "transaction_submit_post"
    );
    assert_required!(
        transaction
            .transaction_status_post(TransactionStatusPostParams::default()),
        "transaction_status_request",
        "transaction_status_post"
    );
    assert_required!(
        transaction
            .transaction_receipt_post(TransactionReceiptPostParams::default()),
        "transaction_receipt_request",
        "transaction_receipt_post"
    );
    assert_required!(
        transaction
            .transaction_preview_post(TransactionPreviewPostParams::default()),
        "transaction_preview_request",
        "transaction_preview_post"
    );
    assert_required!(
        transaction.transaction_call_preview_post(
            TransactionCallPreviewPostParams::default()
        ),
        "transaction_call_preview_request",
        "transaction_call_preview_post"
    );

    let lts = LtsApi::new(configuration);
    assert_required!(
        lts.lts_transaction_construction_post(
            LtsTransactionConstructionPostParams::default()
        ),
        "lts_transaction_construction_request",
        "lts_transaction_construction_post"
    );
    assert_required!(
        lts.lts_transaction_status_post(LtsTransactionStatusPostParams::default()),
        "lts_transaction_status_request",
        "lts_transaction_status_post"
    );
    assert_required!(
        lts.lts_transaction_submit_post(LtsTransactionSubmitPostParams::default()),
        "lts_transaction_submit_request",
        "lts_transaction_submit_post"
    );
    assert_required!(
        lts.lts_stream_transaction_outcomes_post(
            LtsStreamTransactionOutcomesPostParams::default()
        ),
        "lts_stream_transaction_outcomes_request",
        "lts_stream_transaction_outcomes_post"
    );
    assert_required!(
        lts.lts_state_account_all_fungible_resource_balances_post(
            LtsStateAccountAllFungibleResourceBalancesPostParams::default()
        ),
        "lts_state_account_all_fungible_resource_balances_request",
        "lts_state_account_all_fungible_resource_balances_post"
    );
    assert_required!(
        lts.lts_state_account_fungible_resource_balance_post(
            LtsStateAccountFungibleResourceBalancePostParams::default()
        ),
        "lts_state_account_fungible_resource_balance_request",
        "lts_state_account_fungible_resource_balance_post"
    );

    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn request_is_posted_as_json_to_operation_path() {
    let mock = MockTransport::new();
    mock.respond(200, common::network_status());
    let api = StatusApi::new(mock.configuration());

    let status = api
        .status_network_status_post(NetworkStatusRequest {
            network: "localnet".into(),
        })
        .await
        .expect("status should decode");
    assert_eq!(status.current_state_identifier.state_version, 5);
    assert_eq!(status.current_epoch_round.round, 7);
    assert!(status.post_genesis_state_identifier.is_none());

    let request = mock.last_request();
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.url, "http://node.test/core/status/network-status");
    assert_eq!(request.headers[ACCEPT], "application/json");
    assert_eq!(request.headers[CONTENT_TYPE], "application/json");
    assert_eq!(mock.last_body(), json!({ "network": "localnet" }));
}

#[tokio::test]
async fn operation_without_body_sends_no_content_type() {
    let mock = MockTransport::new();
    mock.respond(200, common::network_configuration("localnet"));
    let api = StatusApi::new(mock.configuration());

    let config = api
        .status_network_configuration_post()
        .await
        .expect("configuration should decode");
    assert_eq!(config.network, "localnet");
    assert_eq!(config.network_id, 242);

    let request = mock.last_request();
    assert_eq!(
        request.url,
        "http://node.test/core/status/network-configuration"
    );
    assert!(request.body.is_none());
    assert!(!request.headers.contains_key(CONTENT_TYPE));
    assert_eq!(request.headers[ACCEPT], "application/json");
}

#[tokio::test]
async fn configured_headers_are_sent() {
    let mock = MockTransport::new();
    mock.respond(200, json!({ "contents": [] }));
    let configuration = mock
        .configuration()
        .with_header("x-api-key", "secret")
        .expect("header should be valid")
        .with_user_agent("core-api-test/1.0")
        .expect("user agent should be valid");
    let api = MempoolApi::new(configuration);

    api.mempool_list_post(MempoolListRequest {
        network: "localnet".into(),
    })
    .await
    .expect("list should decode");

    let headers = mock.last_request().headers;
    assert_eq!(headers["x-api-key"], "secret");
    assert_eq!(headers[reqwest::header::USER_AGENT], "core-api-test/1.0");
}

#[tokio::test]
async fn raw_response_exposes_status_and_body() {
    let mock = MockTransport::new();
    mock.respond(200, common::network_status());
    let api = StatusApi::new(mock.configuration());

    let response = api
        .status_network_status_post_raw(NetworkStatusRequest {
            network: "localnet".into(),
        })
        .await
        .expect("request should succeed");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value =
        serde_json::from_slice(response.body()).expect("body should be JSON");
    assert_eq!(body, common::network_status());

    let status = response.into_value().expect("status should decode");
    assert_eq!(status.pre_genesis_state_identifier.accumulator_hash, "00");
}

#[tokio::test]
async fn non_success_status_is_a_response_error() {
    let mock = MockTransport::new();
    mock.respond(
        500,
        json!({
            "error_type": "Basic",
            "code": 500,
            "message": "Internal server error",
            "trace_id": "abc",
        }),
    );
    let api = StateApi::new(mock.configuration());

    let err = api
        .state_epoch_post(StateEpochRequest {
            network: "localnet".into(),
        })
        .await
        .expect_err("500 should fail");
    assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));

    assert_matches!(err, Error::Response(response) => {
        assert_eq!(response.operation(), "state_epoch_post");
        let body = response.error_response().expect("body should decode");
        assert_eq!(body.code(), 500);
        assert_eq!(body.message(), "Internal server error");
        assert_eq!(body.trace_id(), Some("abc"));
        assert_matches!(body, ErrorResponse::Basic { .. });
    });
}

#[tokio::test]
async fn legacy_error_discriminator_is_understood() {
    let mock = MockTransport::new();
    mock.respond(
        400,
        json!({
            "error_type": "StreamTransactionsErrorResponse",
            "code": 400,
            "message": "State version out of bounds",
            "details": {
                "type": "RequestedStateVersionOutOfBounds",
                "max_ledger_state_version": 41,
            },
        }),
    );
    let api = MempoolApi::new(mock.configuration());

    let err = api
        .mempool_list_post(MempoolListRequest {
            network: "localnet".into(),
        })
        .await
        .expect_err("400 should fail");

    assert_matches!(err, Error::Response(response) => {
        assert_matches!(
            response.error_response(),
            Some(ErrorResponse::StreamTransactions { code: 400, .. })
        );
    });
}

#[tokio::test]
async fn unreadable_error_body_is_kept_raw() {
    let mock = MockTransport::new();
    mock.respond(502, json!("bad gateway"));
    let api = MempoolApi::new(mock.configuration());

    let err = api
        .mempool_list_post(MempoolListRequest {
            network: "localnet".into(),
        })
        .await
        .expect_err("502 should fail");

    assert_matches!(err, Error::Response(response) => {
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(response.body(), b"\"bad gateway\"");
        assert!(response.error_response().is_none());
    });
}

#[tokio::test]
async fn response_missing_a_field_is_a_decode_error() {
    let mock = MockTransport::new();
    mock.respond(200, json!({ "contents": [{ "intent_hash": "aa" }] }));
    let api = MempoolApi::new(mock.configuration());

    let err = api
        .mempool_list_post(MempoolListRequest {
            network: "localnet".into(),
        })
        .await
        .expect_err("payload should not decode");

    assert_matches!(
        err,
        Error::Decode(DecodeError::MissingField { field, .. }) => {
            assert_eq!(field, "payload_hash");
        }
    );
}

#[tokio::test]
async fn transport_failure_is_reported() {
    let mock = MockTransport::new();
    let api = MempoolApi::new(mock.configuration());

    let err = api
        .mempool_list_post(MempoolListRequest {
            network: "localnet".into(),
        })
        .await
        .expect_err("no response is queued");

    assert_matches!(err, Error::Transport(_));
    assert_eq!(mock.requests().len(), 1);
}

#[tokio::test]
async fn base_api_decodes_any_model() {
    use core_api_client::models::CommittedStateIdentifier;
    use core_api_client::runtime::{BaseApi, Operation};

    const OP: Operation =
        Operation::post("identifier_post", "/identifier", &["identifier_request"]);

    let mock = MockTransport::new();
    mock.respond(200, json!({ "accumulator_hash": "00", "state_version": 5 }));
    let base = BaseApi::new(mock.configuration());

    let response = base
        .request::<_, CommittedStateIdentifier>(
            &OP,
            &json!({ "identifier_request": { "network": "localnet" } }),
        )
        .await
        .expect("request should succeed");
    let identifier = response.value().expect("identifier should decode");

    assert_eq!(identifier.state_version, 5);
    assert_eq!(identifier.accumulator_hash, "00");
    assert_eq!(mock.last_body(), json!({ "network": "localnet" }));
}
