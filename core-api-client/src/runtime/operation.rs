// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use reqwest::Method;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::Error;

/// Static description of one API operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    /// Identifier in snake_case, e.g. `state_epoch_post`.
    pub id: &'static str,
    pub method: HttpMethod,
    /// Path relative to the base path, with a leading `/`.
    pub path: &'static str,
    /// Name of the parameter sent as the JSON body, if any.
    pub body: Option<&'static str>,
    /// Parameters that must be present and non-null.
    pub required: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Post,
}

impl From<HttpMethod> for Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Post => Method::POST,
        }
    }
}

impl Operation {
    /// A `POST` operation whose single, required parameter is the body.
    pub const fn post(
        id: &'static str,
        path: &'static str,
        body: &'static [&'static str; 1],
    ) -> Self {
        Self {
            id,
            method: HttpMethod::Post,
            path,
            body: Some(body[0]),
            required: body,
        }
    }

    /// A `POST` operation without parameters.
    pub const fn post_empty(id: &'static str, path: &'static str) -> Self {
        Self {
            id,
            method: HttpMethod::Post,
            path,
            body: None,
            required: &[],
        }
    }

    /// Checks `params` against this operation and extracts the body.
    ///
    /// `params` must serialize to a JSON object keyed by parameter name;
    /// absent parameters are either omitted or `null`.
    ///
    /// # Errors
    /// [`Error::Required`] names the first required parameter that is
    /// missing. [`Error::Encode`] is returned if `params` cannot be encoded.
    pub fn prepare<P: Serialize>(
        &self,
        params: &P,
    ) -> Result<Option<Value>, Error> {
        let mut params = match serde_json::to_value(params)? {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => {
                return Err(Error::Encode(serde::ser::Error::custom(format!(
                    "parameters of `{}` must encode to an object, got {other}",
                    self.id
                ))));
            }
        };

        if let Some(parameter) = self
            .required
            .iter()
            .find(|name| params.get(**name).is_none_or(Value::is_null))
        {
            return Err(Error::Required {
                parameter: *parameter,
                operation: self.id,
            });
        }

        Ok(self
            .body
            .and_then(|name| params.remove(name))
            .filter(|body| !body.is_null()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const OP: Operation =
        Operation::post("thing_post", "/thing", &["thing_request"]);

    #[derive(Serialize)]
    struct Params {
        #[serde(skip_serializing_if = "Option::is_none")]
        thing_request: Option<Value>,
    }

    #[test]
    fn missing_required_parameter_is_reported() {
        let err = OP.prepare(&Params { thing_request: None }).unwrap_err();
        assert!(matches!(
            err,
            Error::Required {
                parameter: "thing_request",
                operation: "thing_post"
            }
        ));
    }

    #[test]
    fn null_required_parameter_is_reported() {
        let err = OP
            .prepare(&json!({ "thing_request": null }))
            .unwrap_err();
        assert!(matches!(err, Error::Required { .. }));
    }

    #[test]
    fn body_is_extracted() {
        let body = OP
            .prepare(&Params {
                thing_request: Some(json!({ "network": "localnet" })),
            })
            .unwrap();
        assert_eq!(body, Some(json!({ "network": "localnet" })));
    }

    #[test]
    fn operation_without_parameters_has_no_body() {
        let op = Operation::post_empty("empty_post", "/empty");
        assert_eq!(op.prepare(&()).unwrap(), None);
    }
}
