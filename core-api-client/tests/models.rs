// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

mod common;

use assert_matches::assert_matches;
use core_api_client::models::{
    CommittedStateIdentifier, LedgerTransaction, NetworkStatusResponse,
    ResourceAmount, StateClockResponse, Substate, SubstateType,
};
use core_api_client::{DecodeError, Model};
use serde_json::json;

#[test]
fn required_only_payload_round_trips() {
    let json = common::network_status();
    let status = NetworkStatusResponse::from_json(json.clone())
        .expect("status should decode");
    assert_eq!(status.to_json(), json);
}

#[test]
fn unknown_keys_are_ignored() {
    let identifier = CommittedStateIdentifier::from_json(json!({
        "state_version": 5,
        "accumulator_hash": "00",
        "added_in_a_later_version": [1, 2, 3],
    }))
    .expect("superset should decode");

    assert_eq!(identifier.state_version, 5);
    assert_eq!(identifier.to_json(), common::state_identifier(5));
}

#[test]
fn null_and_absent_optionals_are_equivalent() {
    let mut json = common::network_status();
    json["genesis_epoch_round"] = json!(null);

    let status =
        NetworkStatusResponse::from_json(json).expect("null should decode");
    assert!(status.genesis_epoch_round.is_none());
    assert_eq!(status.to_json(), common::network_status());
}

#[test]
fn missing_required_field_is_named() {
    let err = CommittedStateIdentifier::from_json(json!({ "state_version": 5 }))
        .expect_err("accumulator hash is required");

    assert_eq!(err.model(), "CommittedStateIdentifier");
    assert_matches!(err, DecodeError::MissingField { field, .. } => {
        assert_eq!(field, "accumulator_hash");
    });
}

#[test]
fn wrong_value_type_is_malformed() {
    let err = CommittedStateIdentifier::from_slice(
        br#"{"state_version":"five","accumulator_hash":"00"}"#,
    )
    .expect_err("state version is a number");
    assert_matches!(err, DecodeError::Malformed { model: "CommittedStateIdentifier", .. });
}

#[test]
fn unknown_discriminator_is_reported() {
    let err = Substate::from_json(json!({
        "substate_type": "SomethingNew",
        "is_locked": false,
        "value": {},
    }))
    .expect_err("discriminator is unknown");

    assert_matches!(err, DecodeError::UnknownVariant { variant, .. } => {
        assert_eq!(variant, "SomethingNew");
    });
}

#[test]
fn missing_discriminator_is_reported() {
    let err = ResourceAmount::from_json(json!({
        "resource_address": "resource_loc1",
        "amount": "10",
    }))
    .expect_err("resource type is required");

    assert_matches!(err, DecodeError::MissingField { field, .. } => {
        assert_eq!(field, "resource_type");
    });
}

#[test]
fn union_variant_is_selected_by_discriminator() {
    let amount = ResourceAmount::from_json(json!({
        "resource_type": "NonFungible",
        "resource_address": "resource_loc1",
        "non_fungible_ids": ["#1#", "#2#"],
    }))
    .expect("non-fungible amount should decode");

    assert_eq!(amount.resource_address(), "resource_loc1");
    assert_matches!(amount, ResourceAmount::NonFungible { non_fungible_ids, .. } => {
        assert_eq!(non_fungible_ids.len(), 2);
    });

    let genesis = LedgerTransaction::from_json(json!({
        "type": "Genesis",
        "is_flash": true,
    }))
    .expect("genesis should decode");
    assert_eq!(
        genesis,
        LedgerTransaction::Genesis {
            payload_hex: None,
            is_flash: true,
        }
    );
}

#[test]
fn nested_legacy_substate_is_normalized() {
    let clock = StateClockResponse::from_json(json!({
        "current_minute": {
            "substate_type": "ConsensusManagerFieldCurrentTimeRoundedToMinutesSubstate",
            "is_locked": false,
            "value": {
                "proposer_timestamp_rounded_down_to_minute": {
                    "unix_timestamp_ms": 1_700_000_040_000_i64,
                    "date_time": "2023-11-14T22:14:00.000Z",
                },
            },
        },
    }))
    .expect("clock should decode");

    assert_eq!(
        clock.current_minute.substate_type(),
        SubstateType::ConsensusManagerFieldCurrentTimeRoundedToMinutes
    );
    assert_eq!(
        clock.to_json()["current_minute"]["substate_type"],
        json!("ConsensusManagerFieldCurrentTimeRoundedToMinutes")
    );
}

#[test]
fn optional_model_encodes_to_none() {
    assert_eq!(CommittedStateIdentifier::to_json_opt(None), None);

    let identifier = CommittedStateIdentifier {
        state_version: 1,
        accumulator_hash: "00".into(),
    };
    assert_eq!(
        CommittedStateIdentifier::to_json_opt(Some(&identifier)),
        Some(common::state_identifier(1))
    );
}
