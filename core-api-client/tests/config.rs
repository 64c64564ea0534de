// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::io::Write;
use std::time::Duration;

use assert_matches::assert_matches;
use core_api_client::{ClientConfig, ConfigError};
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file should be created");
    file.write_all(content.as_bytes())
        .expect("config should be written");
    file
}

fn no_env(_: &str) -> Option<String> {
    None
}

#[test]
fn file_values_are_loaded() {
    let file = write_config(
        r#"
        base_path = "https://node.example.com/core"
        network = "stokenet"
        connect_timeout = "3s"
        request_timeout = "1m"

        [headers]
        x-api-key = "secret"
        "#,
    );

    let config = ClientConfig::load_with_env(Some(file.path()), None, no_env)
        .expect("config should load");

    assert_eq!(config.base_path, "https://node.example.com/core");
    assert_eq!(config.network, "stokenet");
    assert_eq!(config.connect_timeout, Some(Duration::from_secs(3)));
    assert_eq!(config.request_timeout, Some(Duration::from_secs(60)));
    assert_eq!(config.headers["x-api-key"], "secret");
}

#[test]
fn env_wins_over_file() {
    let file = write_config(
        r#"
        base_path = "https://node.example.com/core"
        network = "stokenet"
        "#,
    );

    let config = ClientConfig::load_with_env(Some(file.path()), None, |name| {
        (name == "NETWORK").then(|| "mainnet".to_string())
    })
    .expect("config should load");

    assert_eq!(config.base_path, "https://node.example.com/core");
    assert_eq!(config.network, "mainnet");
}

#[test]
fn explicit_missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let path = dir.path().join("config.toml");

    let err = ClientConfig::load_with_env(Some(path.as_path()), None, no_env)
        .expect_err("a given config file must exist");
    assert_matches!(err, ConfigError::FileRead(e) => {
        assert_eq!(e.kind(), std::io::ErrorKind::NotFound);
    });
}

#[test]
fn no_file_means_defaults() {
    let config = ClientConfig::load_with_env(None, None, no_env)
        .expect("defaults should load");
    assert_eq!(config, ClientConfig::default());
}

const PROFILES: &str = r#"
    connect_timeout = "10s"

    [networks.stokenet]
    base_path = "https://stokenet.example.com/core"
    request_timeout = "30s"

    [networks.devnet]
    base_path = "http://10.0.0.5:3333/core"
    network = "localnet"
    "#;

#[test]
fn profile_is_selected_from_file() {
    let file = write_config(PROFILES);

    let stokenet =
        ClientConfig::load_with_env(Some(file.path()), Some("stokenet"), no_env)
            .expect("profile exists");
    assert_eq!(stokenet.network, "stokenet");
    assert_eq!(stokenet.base_path, "https://stokenet.example.com/core");
    assert_eq!(stokenet.connect_timeout, Some(Duration::from_secs(10)));
    assert_eq!(stokenet.request_timeout, Some(Duration::from_secs(30)));

    let devnet =
        ClientConfig::load_with_env(Some(file.path()), Some("devnet"), no_env)
            .expect("profile exists");
    assert_eq!(devnet.network, "localnet");
}

#[test]
fn env_wins_over_selected_profile() {
    let file = write_config(PROFILES);

    let config = ClientConfig::load_with_env(
        Some(file.path()),
        Some("stokenet"),
        |name| match name {
            "BASE_PATH" => Some("https://env.example.com/core".to_string()),
            "REQUEST_TIMEOUT" => Some("5s".to_string()),
            "USER_AGENT" => Some("from-env".to_string()),
            _ => None,
        },
    )
    .expect("config should load");

    assert_eq!(config.base_path, "https://env.example.com/core");
    assert_eq!(config.request_timeout, Some(Duration::from_secs(5)));
    assert_eq!(config.user_agent.as_deref(), Some("from-env"));
    assert_eq!(config.network, "stokenet");
    assert_eq!(config.connect_timeout, Some(Duration::from_secs(10)));
}

#[test]
fn unknown_profile_is_reported() {
    let file = write_config(PROFILES);
    let err =
        ClientConfig::load_with_env(Some(file.path()), Some("mainnet"), no_env)
            .expect_err("profile is not defined");
    assert_matches!(err, ConfigError::UnknownNetwork(name) => {
        assert_eq!(name, "mainnet");
    });
}

#[test]
fn malformed_file_is_a_parse_error() {
    let file = write_config("base_path = [");
    let err = ClientConfig::load_with_env(Some(file.path()), None, no_env)
        .expect_err("file should not parse");
    assert_matches!(err, ConfigError::TomlParse(_));
}

#[test]
fn zero_timeout_is_rejected() {
    let file = write_config(r#"request_timeout = "0s""#);
    let err = ClientConfig::load_with_env(Some(file.path()), None, no_env)
        .expect_err("zero timeout should fail");
    assert_matches!(err, ConfigError::Validation(_));
}

#[test]
fn configuration_uses_file_values() {
    let file = write_config(
        r#"
        base_path = "https://node.example.com/core/"
        user_agent = "core-api-test"
        "#,
    );
    let config = ClientConfig::load_with_env(Some(file.path()), None, no_env)
        .expect("config should load");

    let configuration = config.configuration().expect("configuration should build");
    assert_eq!(configuration.base_path(), "https://node.example.com/core");
    assert_eq!(configuration.headers()["user-agent"], "core-api-test");
}
