// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! # Model codecs
//!
//! Every Core API schema type implements [`Model`], which pairs the derived
//! `serde` implementations with a typed [`DecodeError`].
//!
//! Decoding never accepts a payload with a missing required key, and tagged
//! unions reject a discriminator that matches none of their variants. Unknown
//! keys are ignored. Encoding is infallible: every model is a string-keyed
//! record, so `serde_json` cannot reject it.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Errors produced when a JSON value does not match a model's schema.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// A required key was absent (for unions, possibly the discriminator).
    #[error("{model}: missing required field `{field}`")]
    MissingField {
        /// Name of the model being decoded.
        model: &'static str,
        /// The absent key.
        field: String,
    },
    /// A discriminator (or string enum) carried a value no variant matches.
    #[error("{model}: unrecognized variant `{variant}`")]
    UnknownVariant {
        /// Name of the model being decoded.
        model: &'static str,
        /// The unmatched discriminator value.
        variant: String,
    },
    /// Any other shape mismatch: wrong value type, invalid JSON, etc.
    #[error("{model}: {source}")]
    Malformed {
        /// Name of the model being decoded.
        model: &'static str,
        /// Underlying serde error.
        #[source]
        source: serde_json::Error,
    },
}

impl DecodeError {
    /// Name of the model whose decoding failed.
    pub fn model(&self) -> &'static str {
        match self {
            Self::MissingField { model, .. }
            | Self::UnknownVariant { model, .. }
            | Self::Malformed { model, .. } => model,
        }
    }

    /// Sorts a serde error into the typed categories.
    ///
    /// The derived deserializers report missing keys and unknown variants
    /// through `serde::de::Error::missing_field` and `unknown_variant`, whose
    /// messages start with a fixed prefix followed by the backquoted name.
    pub(crate) fn classify(model: &'static str, source: serde_json::Error) -> Self {
        let message = source.to_string();

        if let Some(field) = backquoted_after(&message, "missing field ") {
            return Self::MissingField { model, field };
        }
        if let Some(variant) = backquoted_after(&message, "unknown variant ") {
            return Self::UnknownVariant { model, variant };
        }

        Self::Malformed { model, source }
    }
}

fn backquoted_after(message: &str, prefix: &str) -> Option<String> {
    let rest = message.strip_prefix(prefix)?.strip_prefix('`')?;
    let end = rest.find('`')?;
    Some(rest[..end].to_string())
}

/// A Core API schema type.
pub trait Model: Serialize + DeserializeOwned {
    /// Schema name, as used in the API definition.
    const NAME: &'static str;

    /// Decodes a JSON value into the model.
    ///
    /// # Errors
    /// Returns a [`DecodeError`] if a required field is missing, a union
    /// discriminator is not recognized, or a value has the wrong type.
    fn from_json(value: Value) -> Result<Self, DecodeError> {
        serde_json::from_value(value)
            .map_err(|err| DecodeError::classify(Self::NAME, err))
    }

    /// Decodes a raw JSON document into the model.
    ///
    /// # Errors
    /// See [`Model::from_json`]; additionally fails on malformed JSON.
    fn from_slice(bytes: &[u8]) -> Result<Self, DecodeError> {
        serde_json::from_slice(bytes)
            .map_err(|err| DecodeError::classify(Self::NAME, err))
    }

    /// Encodes the model. Optional fields set to `None` are omitted.
    ///
    /// Models hold only strings, numbers, booleans, string-keyed maps and
    /// other models, so encoding cannot fail. A type breaking that rule
    /// trips a debug assertion and encodes as `null` in release builds.
    fn to_json(&self) -> Value {
        let value = serde_json::to_value(self);
        debug_assert!(value.is_ok(), "{} failed to encode", Self::NAME);
        value.unwrap_or(Value::Null)
    }

    /// Encodes an optional model, keeping absence as absence.
    fn to_json_opt(value: Option<&Self>) -> Option<Value> {
        value.map(Self::to_json)
    }
}

/// Implements [`Model`] for each listed type, naming it after the type.
macro_rules! impl_model {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl $crate::codec::Model for $ty {
                const NAME: &'static str = stringify!($ty);
            }
        )+
    };
}

pub(crate) use impl_model;

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Record {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    #[serde(tag = "kind")]
    enum Shape {
        Circle { radius: u32 },
        Square { side: u32 },
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct ByteKeyed {
        entries: std::collections::BTreeMap<Vec<u8>, u32>,
    }

    impl_model!(Record, Shape, ByteKeyed);

    #[test]
    fn missing_field_is_classified() {
        let err = Record::from_json(json!({ "note": "x" })).unwrap_err();
        assert!(
            matches!(err, DecodeError::MissingField { model: "Record", ref field } if field == "name")
        );
    }

    #[test]
    fn missing_field_is_classified_from_slice() {
        let err = Record::from_slice(br#"{"note": "x"}"#).unwrap_err();
        assert!(
            matches!(err, DecodeError::MissingField { ref field, .. } if field == "name")
        );
    }

    #[test]
    fn unknown_discriminator_is_classified() {
        let err =
            Shape::from_json(json!({ "kind": "Hexagon", "side": 1 })).unwrap_err();
        assert!(
            matches!(err, DecodeError::UnknownVariant { model: "Shape", ref variant } if variant == "Hexagon")
        );
    }

    #[test]
    fn missing_discriminator_names_the_tag() {
        let err = Shape::from_json(json!({ "side": 1 })).unwrap_err();
        assert!(
            matches!(err, DecodeError::MissingField { ref field, .. } if field == "kind")
        );
    }

    #[test]
    fn wrong_type_is_malformed() {
        let err = Record::from_json(json!({ "name": 7 })).unwrap_err();
        assert!(matches!(err, DecodeError::Malformed { .. }));
        assert_eq!(err.model(), "Record");
    }

    #[test]
    fn null_optional_decodes_to_none_and_is_omitted() {
        let record =
            Record::from_json(json!({ "name": "a", "note": null })).unwrap();
        assert_eq!(record.note, None);
        assert_eq!(record.to_json(), json!({ "name": "a" }));
    }

    #[test]
    fn absent_input_stays_absent() {
        assert_eq!(Record::to_json_opt(None), None);
        let record = Record {
            name: "a".into(),
            note: None,
        };
        assert_eq!(Record::to_json_opt(Some(&record)), Some(json!({ "name": "a" })));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "ByteKeyed failed to encode")]
    fn encode_failure_is_not_silent() {
        let value = ByteKeyed {
            entries: [(vec![1u8], 1)].into_iter().collect(),
        };
        let _ = value.to_json();
    }
}
