// FILE: crates/audio-engine/src/wire.rs

//! JSON projection of query results.
//!
//! The field names and casing produced here are read by the HyperRoute
//! plugin; see [`crate::AudioDevice`] and [`crate::AudioSession`] for the
//! contract.

use crate::error::EngineResult;
use serde::Serialize;

/// Serializes a result list as a pretty-printed JSON array, preserving
/// input order.
///
/// An empty list serializes as `[]`, never as null.
pub fn to_json<T: Serialize>(records: &[T]) -> EngineResult<String> {
    Ok(serde_json::to_string_pretty(records)?)
}
