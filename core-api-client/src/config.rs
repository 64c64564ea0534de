// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! # Client Configuration
//!
//! [`ClientConfig`] describes how to reach a node. It is loaded with the
//! following precedence:
//!
//! 1. Environment variables (`CORE_API_*`)
//! 2. The selected `[networks.<name>]` profile
//! 3. Config file (if present)
//! 4. Default values
//!
//! ## TOML Format
//!
//! ```toml
//! base_path = "http://127.0.0.1:3333/core"
//! network = "localnet"
//! connect_timeout = "5s"
//! request_timeout = "30s"
//! user_agent = "my-integration/1.0"
//!
//! [headers]
//! x-api-key = "secret"
//!
//! [networks.stokenet]
//! base_path = "https://stokenet.example.com/core"
//! request_timeout = "1m"
//! ```
//!
//! Each `[networks.<name>]` entry is a profile, selected by passing `<name>`
//! to [`ClientConfig::load`]. Its fields override the top-level ones of the
//! file, but not the environment, and its logical network name defaults to
//! `<name>`.
//!
//! ## Environment Variables
//!
//! - `CORE_API_BASE_PATH`
//! - `CORE_API_NETWORK`
//! - `CORE_API_CONNECT_TIMEOUT`, `CORE_API_REQUEST_TIMEOUT` (humantime, e.g.
//!   `10s`)
//! - `CORE_API_USER_AGENT`

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use std::{fs, io};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::runtime::{Configuration, ReqwestTransport, DEFAULT_BASE_PATH};

/// Logical network name used when none is configured.
pub const DEFAULT_NETWORK: &str = "localnet";

const ENV_PREFIX: &str = "CORE_API_";

/// Errors that can occur when loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Error reading configuration file
    #[error("Failed to read configuration file: {0}")]
    FileRead(#[from] io::Error),

    /// Error parsing TOML
    #[error("Failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Error serializing to TOML
    #[error("Failed to serialize to TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Error parsing environment variable
    #[error("Failed to parse environment variable {0}: {1}")]
    EnvParse(String, String),

    /// Validation error
    #[error("Configuration validation error: {0}")]
    Validation(String),

    /// No `[networks.<name>]` profile with that name
    #[error("Unknown network profile `{0}`")]
    UnknownNetwork(String),
}

impl ConfigError {
    pub fn validation(msg: impl Into<String>) -> Self {
        ConfigError::Validation(msg.into())
    }
}

/// A named set of overrides, selected by name in [`ClientConfig::load`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_path: Option<String>,
    /// Logical network name; defaults to the profile name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    #[serde(with = "humantime_serde", skip_serializing_if = "Option::is_none")]
    pub connect_timeout: Option<Duration>,
    #[serde(with = "humantime_serde", skip_serializing_if = "Option::is_none")]
    pub request_timeout: Option<Duration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

/// How to reach a node, and which network it is expected to serve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_path: String,
    pub network: String,
    #[serde(with = "humantime_serde", skip_serializing_if = "Option::is_none")]
    pub connect_timeout: Option<Duration>,
    #[serde(with = "humantime_serde", skip_serializing_if = "Option::is_none")]
    pub request_timeout: Option<Duration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    /// Extra headers sent with every request.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub networks: BTreeMap<String, NetworkProfile>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_path: DEFAULT_BASE_PATH.to_string(),
            network: DEFAULT_NETWORK.to_string(),
            connect_timeout: None,
            request_timeout: None,
            user_agent: None,
            headers: BTreeMap::new(),
            networks: BTreeMap::new(),
        }
    }
}

fn read_to_string<P: AsRef<Path>>(path: P) -> io::Result<Option<String>> {
    fs::read_to_string(&path)
        .map(Some)
        .or_else(|e| match e.kind() {
            io::ErrorKind::NotFound => Ok(None),
            _ => Err(e),
        })
}

fn std_env(name: &str) -> Option<String> {
    std::env::var(format!("{ENV_PREFIX}{name}")).ok()
}

fn parse_duration(name: &str, value: &str) -> Result<Duration, ConfigError> {
    humantime_serde::re::humantime::parse_duration(value).map_err(|e| {
        ConfigError::EnvParse(format!("{ENV_PREFIX}{name}"), e.to_string())
    })
}

impl ClientConfig {
    /// Default config file: `$HOME/.config/core-api/config.toml`.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("core-api");
            path.push("config.toml");
            path
        })
    }

    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ClientConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables over the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env(std_env)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with the following precedence:
    /// 1. Environment variables
    /// 2. The `[networks.<profile>]` profile, if one is selected
    /// 3. Config file (if specified)
    /// 4. Default values
    ///
    /// A `config_file` that is given must exist.
    pub fn load(
        config_file: Option<&Path>,
        profile: Option<&str>,
    ) -> Result<Self, ConfigError> {
        Self::load_with_env(config_file, profile, std_env)
    }

    /// Same as [`ClientConfig::load`], reading variables through `get_env`.
    ///
    /// `get_env` receives the variable name without the `CORE_API_` prefix.
    pub fn load_with_env<F>(
        config_file: Option<&Path>,
        profile: Option<&str>,
        get_env: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let content = config_file.map(fs::read_to_string).transpose()?;
        Self::merge(content, profile, get_env)
    }

    /// Load from the default path. A missing default file means defaults.
    pub fn load_default(profile: Option<&str>) -> Result<Self, ConfigError> {
        let content = match Self::default_config_path() {
            Some(path) => read_to_string(path)?,
            None => None,
        };
        Self::merge(content, profile, std_env)
    }

    fn merge<F>(
        content: Option<String>,
        profile: Option<&str>,
        get_env: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match content {
            Some(content) => toml::from_str(&content)?,
            None => Self::default(),
        };

        if let Some(name) = profile {
            config.apply_profile(name)?;
        }
        config.apply_env(get_env)?;
        config.validate()?;
        Ok(config)
    }

    fn apply_env<F>(&mut self, get_env: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_path) = get_env("BASE_PATH") {
            self.base_path = base_path;
        }
        if let Some(network) = get_env("NETWORK") {
            self.network = network;
        }
        if let Some(timeout) = get_env("CONNECT_TIMEOUT") {
            self.connect_timeout = Some(parse_duration("CONNECT_TIMEOUT", &timeout)?);
        }
        if let Some(timeout) = get_env("REQUEST_TIMEOUT") {
            self.request_timeout = Some(parse_duration("REQUEST_TIMEOUT", &timeout)?);
        }
        if let Some(user_agent) = get_env("USER_AGENT") {
            self.user_agent = Some(user_agent);
        }
        Ok(())
    }

    fn apply_profile(&mut self, name: &str) -> Result<(), ConfigError> {
        let profile = self
            .networks
            .get(name)
            .cloned()
            .ok_or_else(|| ConfigError::UnknownNetwork(name.to_string()))?;

        if let Some(base_path) = profile.base_path {
            self.base_path = base_path;
        }
        self.network = profile.network.unwrap_or_else(|| name.to_string());
        if profile.connect_timeout.is_some() {
            self.connect_timeout = profile.connect_timeout;
        }
        if profile.request_timeout.is_some() {
            self.request_timeout = profile.request_timeout;
        }
        if profile.user_agent.is_some() {
            self.user_agent = profile.user_agent;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.base_path).map_err(|e| {
            ConfigError::validation(format!(
                "base_path `{}` is not a valid URL: {e}",
                self.base_path
            ))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::validation(format!(
                "base_path must use http or https, got `{}`",
                url.scheme()
            )));
        }
        if self.network.trim().is_empty() {
            return Err(ConfigError::validation("network must not be empty"));
        }
        if self.connect_timeout.is_some_and(|t| t.is_zero()) {
            return Err(ConfigError::validation(
                "connect_timeout must be greater than 0",
            ));
        }
        if self.request_timeout.is_some_and(|t| t.is_zero()) {
            return Err(ConfigError::validation(
                "request_timeout must be greater than 0",
            ));
        }
        Ok(())
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    /// Builds the request [`Configuration`] described by this config.
    ///
    /// # Errors
    /// Fails if the base path or a header is invalid, or if the HTTP client
    /// cannot be created.
    pub fn configuration(&self) -> Result<Configuration, crate::Error> {
        let transport = ReqwestTransport::with_timeouts(
            self.connect_timeout,
            self.request_timeout,
        )?;

        let mut configuration =
            Configuration::new(self.base_path.as_str())?.with_transport(transport);
        if let Some(user_agent) = &self.user_agent {
            configuration = configuration.with_user_agent(user_agent)?;
        }
        for (name, value) in &self.headers {
            configuration = configuration.with_header(name, value)?;
        }

        Ok(configuration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: BTreeMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_are_valid() {
        let config = ClientConfig::default();
        config.validate().unwrap();
        assert_eq!(config.base_path, DEFAULT_BASE_PATH);
        assert_eq!(config.network, DEFAULT_NETWORK);
    }

    #[test]
    fn bundled_default_config_parses() {
        let config =
            ClientConfig::from_toml_str(include_str!("../default.config.toml"))
                .unwrap();
        assert_eq!(config.network, DEFAULT_NETWORK);
        assert!(config.networks.contains_key("stokenet"));
    }

    #[test]
    fn env_overrides_defaults() {
        let config = ClientConfig::load_with_env(
            None,
            None,
            env(&[
                ("BASE_PATH", "https://node.example.com/core"),
                ("NETWORK", "stokenet"),
                ("REQUEST_TIMEOUT", "15s"),
            ]),
        )
        .unwrap();

        assert_eq!(config.base_path, "https://node.example.com/core");
        assert_eq!(config.network, "stokenet");
        assert_eq!(config.request_timeout, Some(Duration::from_secs(15)));
        assert_eq!(config.connect_timeout, None);
    }

    #[test]
    fn bad_env_duration_is_reported() {
        let err =
            ClientConfig::load_with_env(None, None, env(&[("CONNECT_TIMEOUT", "soon")]))
                .unwrap_err();
        assert!(
            matches!(err, ConfigError::EnvParse(ref name, _) if name == "CORE_API_CONNECT_TIMEOUT")
        );
    }

    #[test]
    fn profile_overrides_file() {
        let mut config = ClientConfig::from_toml_str(
            r#"
            request_timeout = "30s"

            [networks.stokenet]
            base_path = "https://stokenet.example.com/core"
            "#,
        )
        .unwrap();
        config.apply_profile("stokenet").unwrap();

        assert_eq!(config.base_path, "https://stokenet.example.com/core");
        assert_eq!(config.network, "stokenet");
        assert_eq!(config.request_timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn env_overrides_profile() {
        let content = r#"
            [networks.stokenet]
            base_path = "https://stokenet.example.com/core"
            request_timeout = "30s"
            "#;
        let config = ClientConfig::merge(
            Some(content.to_string()),
            Some("stokenet"),
            env(&[
                ("BASE_PATH", "https://env.example.com/core"),
                ("REQUEST_TIMEOUT", "5s"),
            ]),
        )
        .unwrap();

        assert_eq!(config.base_path, "https://env.example.com/core");
        assert_eq!(config.request_timeout, Some(Duration::from_secs(5)));
        assert_eq!(config.network, "stokenet");
    }

    #[test]
    fn unknown_profile_fails() {
        let err = ClientConfig::merge(None, Some("mainnet"), env(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownNetwork(name) if name == "mainnet"));
    }

    #[test]
    fn absent_default_file_reads_as_none() {
        let dir = std::env::temp_dir().join("core-api-client-absent-config");
        assert!(read_to_string(dir.join("config.toml")).unwrap().is_none());
    }

    #[test]
    fn invalid_scheme_is_rejected() {
        let config = ClientConfig {
            base_path: "ftp://node/core".into(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn toml_round_trip() {
        let mut config = ClientConfig {
            connect_timeout: Some(Duration::from_secs(5)),
            ..Default::default()
        };
        config.headers.insert("x-api-key".into(), "secret".into());

        let toml = config.to_toml_string().unwrap();
        assert_eq!(ClientConfig::from_toml_str(&toml).unwrap(), config);
    }
}
