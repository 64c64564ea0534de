// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! # Shared Core API Models
//!
//! Building blocks referenced from several endpoint groups: ledger state
//! identifiers, entity references, keys and signatures, substate keys and
//! SBOR payloads.
//!
//! Addresses, hashes and `*_hex` fields are passed through as opaque strings;
//! decimal amounts are kept as their string representation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::codec::impl_model;

/// Identifies a committed point in the ledger's transaction history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommittedStateIdentifier {
    /// Resultant state version after the transaction was committed.
    pub state_version: u64,
    /// Hex-encoded accumulator hash at that state version.
    pub accumulator_hash: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpochRound {
    pub epoch: u64,
    pub round: u64,
}

/// A millisecond timestamp, also rendered as an ISO 8601 string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstantMs {
    pub unix_timestamp_ms: i64,
    pub date_time: String,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub enum EntityType {
    GlobalPackage,
    GlobalConsensusManager,
    GlobalValidator,
    GlobalAccessController,
    GlobalAccount,
    GlobalIdentity,
    GlobalGenericComponent,
    GlobalVirtualSecp256k1Account,
    GlobalVirtualEd25519Account,
    GlobalVirtualSecp256k1Identity,
    GlobalVirtualEd25519Identity,
    GlobalFungibleResource,
    InternalFungibleVault,
    GlobalNonFungibleResource,
    InternalNonFungibleVault,
    InternalGenericComponent,
    InternalAccount,
    InternalKeyValueStore,
}

/// A reference to an on-ledger entity by address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityReference {
    pub entity_type: EntityType,
    pub is_global: bool,
    /// Bech32m-encoded entity address.
    pub entity_address: String,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub enum ModuleId {
    Main,
    TypeInfo,
    Metadata,
    Royalty,
    AccessRules,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub enum PublicKeyType {
    EcdsaSecp256k1,
    EddsaEd25519,
}

/// A public key, discriminated by `key_type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "key_type")]
pub enum PublicKey {
    /// A 33-byte compressed Secp256k1 key.
    EcdsaSecp256k1 { key_hex: String },
    /// A 32-byte Ed25519 key.
    EddsaEd25519 { key_hex: String },
}

impl PublicKey {
    pub fn key_type(&self) -> PublicKeyType {
        match self {
            Self::EcdsaSecp256k1 { .. } => PublicKeyType::EcdsaSecp256k1,
            Self::EddsaEd25519 { .. } => PublicKeyType::EddsaEd25519,
        }
    }

    pub fn key_hex(&self) -> &str {
        match self {
            Self::EcdsaSecp256k1 { key_hex } | Self::EddsaEd25519 { key_hex } => {
                key_hex
            }
        }
    }
}

/// A signature, discriminated by `key_type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "key_type")]
pub enum Signature {
    /// A 65-byte recoverable Secp256k1 signature.
    EcdsaSecp256k1 { signature_hex: String },
    /// A 64-byte Ed25519 signature.
    EddsaEd25519 { signature_hex: String },
}

/// A signature together with whatever is needed to verify it.
///
/// Secp256k1 signatures are recoverable, so they carry no public key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "key_type")]
pub enum SignatureWithPublicKey {
    EcdsaSecp256k1 {
        recoverable_signature: Signature,
    },
    EddsaEd25519 {
        public_key: PublicKey,
        signature: Signature,
    },
}

/// The key of a substate within its partition, discriminated by `key_type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "key_type")]
pub enum SubstateKey {
    Field { id: u32 },
    Map { key_hex: String },
    Sorted { sort_prefix_hex: String, key_hex: String },
}

/// An SBOR-encoded value, as raw hex and/or programmatic JSON.
///
/// Which representations are present depends on the request's format
/// options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SborData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hex: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub programmatic_json: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataStruct {
    pub struct_data: SborData,
    pub owned_entities: Vec<EntityReference>,
    pub referenced_entities: Vec<EntityReference>,
}

/// An amount of a resource, discriminated by `resource_type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "resource_type")]
pub enum ResourceAmount {
    Fungible {
        resource_address: String,
        /// Decimal string.
        amount: String,
    },
    NonFungible {
        resource_address: String,
        non_fungible_ids: Vec<String>,
    },
}

impl ResourceAmount {
    pub fn resource_address(&self) -> &str {
        match self {
            Self::Fungible {
                resource_address, ..
            }
            | Self::NonFungible {
                resource_address, ..
            } => resource_address,
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub enum NonFungibleIdType {
    String,
    Integer,
    Bytes,
    #[serde(rename = "RUID")]
    Ruid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonFungibleLocalId {
    /// The canonical string form, e.g. `#1#` or `<name>`.
    pub simple_rep: String,
    pub id_type: NonFungibleIdType,
    pub sbor_hex: String,
}

/// The hashes identifying a user transaction at each layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionIdentifiers {
    pub intent_hash: String,
    pub signed_intent_hash: String,
    pub payload_hash: String,
}

impl_model!(
    CommittedStateIdentifier,
    EpochRound,
    InstantMs,
    EntityType,
    EntityReference,
    ModuleId,
    PublicKeyType,
    PublicKey,
    Signature,
    SignatureWithPublicKey,
    SubstateKey,
    SborData,
    DataStruct,
    ResourceAmount,
    NonFungibleIdType,
    NonFungibleLocalId,
    TransactionIdentifiers,
);
