// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::fmt;
use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT};

use super::transport::{ReqwestTransport, Transport};
use crate::Error;

/// Base path used when none is configured.
pub const DEFAULT_BASE_PATH: &str = "http://127.0.0.1:3333/core";

/// Connection settings shared by every API instance built from it.
///
/// Cloning is cheap; the transport is reference counted.
#[derive(Clone)]
pub struct Configuration {
    base_path: String,
    headers: HeaderMap,
    transport: Arc<dyn Transport>,
}

impl Configuration {
    /// Create a configuration pointing at `base_path`, using the default
    /// reqwest transport.
    ///
    /// # Errors
    /// Fails if `base_path` is not an absolute URL.
    pub fn new<S: Into<String>>(base_path: S) -> Result<Self, Error> {
        let base_path = base_path.into();
        url::Url::parse(&base_path).map_err(|source| {
            Error::InvalidBasePath {
                base_path: base_path.clone(),
                source,
            }
        })?;

        Ok(Self {
            base_path: base_path.trim_end_matches('/').to_string(),
            headers: HeaderMap::new(),
            transport: Arc::new(ReqwestTransport::new()),
        })
    }

    pub fn with_transport<T: Transport + 'static>(self, transport: T) -> Self {
        self.with_shared_transport(Arc::new(transport))
    }

    pub fn with_shared_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = transport;
        self
    }

    /// Add a header sent with every request.
    ///
    /// # Errors
    /// Fails if the name or value is not valid HTTP.
    pub fn with_header(mut self, name: &str, value: &str) -> Result<Self, Error> {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| Error::InvalidHeader(name.to_string()))?;
        let value = HeaderValue::from_str(value)
            .map_err(|_| Error::InvalidHeader(name.to_string()))?;
        self.headers.insert(name, value);
        Ok(self)
    }

    pub fn with_user_agent(self, user_agent: &str) -> Result<Self, Error> {
        self.with_header(USER_AGENT.as_str(), user_agent)
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub(crate) fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            base_path: DEFAULT_BASE_PATH.to_string(),
            headers: HeaderMap::new(),
            transport: Arc::new(ReqwestTransport::new()),
        }
    }
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("base_path", &self.base_path)
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_dropped() {
        let config = Configuration::new("http://node:3333/core/").unwrap();
        assert_eq!(config.base_path(), "http://node:3333/core");
    }

    #[test]
    fn relative_base_path_is_rejected() {
        let err = Configuration::new("core").unwrap_err();
        assert!(matches!(err, Error::InvalidBasePath { .. }));
    }

    #[test]
    fn invalid_header_is_rejected() {
        let err = Configuration::default()
            .with_header("bad header", "x")
            .unwrap_err();
        assert!(matches!(err, Error::InvalidHeader(name) if name == "bad header"));
    }

    #[test]
    fn user_agent_is_a_default_header() {
        let config = Configuration::default()
            .with_user_agent("core-api/0.1")
            .unwrap();
        assert_eq!(config.headers()[USER_AGENT], "core-api/0.1");
    }
}
