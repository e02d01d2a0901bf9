//! Decoding raw proto payloads into the strict card record
//!
//! The external card API wraps nullable fields in ad hoc envelopes
//! (`{"Int64": n}` for stats, `{"String": s}` for the tribe). Decoding is an
//! explicit step returning a typed result-or-error, never untyped field
//! probing: a missing envelope is a hard failure, not a silent default, so
//! downstream layers can tell "not yet loaded" from "failed to load".

use serde::Deserialize;
use thiserror::Error;

use crate::models::CardProtoData;

/// Error type for payload normalization failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProtoError {
    /// A required envelope field is missing from the raw payload.
    #[error("malformed payload: field `{field}` is missing its `{envelope}` envelope")]
    MalformedPayload { field: &'static str, envelope: &'static str },
}

/// Result type alias for normalization operations.
pub type Result<T> = std::result::Result<T, ProtoError>;

/// Numeric envelope used by the card API for nullable integers.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Int64Envelope {
    #[serde(rename = "Int64")]
    pub int64: Option<i64>,
}

/// String envelope used by the card API for nullable strings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StringEnvelope {
    #[serde(rename = "String")]
    pub string: Option<String>,
}

/// A card-data payload as the external API ships it: plain string fields plus
/// envelope-wrapped stats and tribe. Untrusted shape - every field is
/// optional at decode time and validated during [`normalize`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawProtoPayload {
    pub id: String,
    #[serde(rename = "type")]
    pub card_type: String,
    pub effect: String,
    pub name: String,
    pub rarity: String,
    pub god: String,
    pub set: String,
    pub mana: String,
    pub art_id: String,
    pub attack: Option<Int64Envelope>,
    pub health: Option<Int64Envelope>,
    pub tribe: Option<StringEnvelope>,
}

fn unwrap_int64(envelope: &Option<Int64Envelope>, field: &'static str) -> Result<i64> {
    envelope
        .as_ref()
        .and_then(|e| e.int64)
        .ok_or(ProtoError::MalformedPayload { field, envelope: "Int64" })
}

fn unwrap_string(envelope: &Option<StringEnvelope>, field: &'static str) -> Result<String> {
    envelope
        .as_ref()
        .and_then(|e| e.string.clone())
        .ok_or(ProtoError::MalformedPayload { field, envelope: "String" })
}

/// Normalize an external API payload into the strict card record.
///
/// Plain string fields are copied verbatim; `attack`, `health`, and `tribe`
/// are unwrapped from their envelopes. A missing envelope (the outer field or
/// the inner key) fails with [`ProtoError::MalformedPayload`].
pub fn normalize(raw: &RawProtoPayload) -> Result<CardProtoData> {
    Ok(CardProtoData {
        id: raw.id.clone(),
        card_type: raw.card_type.clone(),
        effect: raw.effect.clone(),
        name: raw.name.clone(),
        rarity: raw.rarity.clone(),
        god: raw.god.clone(),
        set: raw.set.clone(),
        tribe: unwrap_string(&raw.tribe, "tribe")?,
        mana: raw.mana.clone(),
        attack: Some(unwrap_int64(&raw.attack, "attack")?),
        health: Some(unwrap_int64(&raw.health, "health")?),
        art_id: raw.art_id.clone(),
    })
}

/// Normalize caller-supplied data: a structural copy, no unwrapping.
///
/// This is the lenient counterpart of [`normalize`] for the direct-input
/// trust boundary. Missing fields in caller-supplied JSON already defaulted
/// during deserialization of [`CardProtoData`], so nothing can fail here.
pub fn normalize_direct(input: &CardProtoData) -> CardProtoData {
    input.clone()
}
