// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Record identifiers and the dual-field identifier convention.
//!
//! The backend serves records with the identifier under either `_id` (raw
//! Mongo documents) or `id` (serializer output), as a string or a number.
//! Every lookup and comparison site goes through [`Identified::record_id`]
//! instead of touching the raw fields.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A record identifier, deserialized from either a JSON string or integer.
///
/// Equality is strict across variants: `Int(1)` and `Str("1")` are different
/// identifiers. No cross-type coercion happens anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Str(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(n) => write!(f, "{}", n),
            RecordId::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(n: i64) -> Self {
        RecordId::Int(n)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        RecordId::Str(s.to_string())
    }
}

/// Access to a record's identifier under the dual-field convention.
pub trait Identified {
    /// The record's identifier: `_id` if present, else `id`.
    fn record_id(&self) -> Option<&RecordId>;

    /// Identifier as display text, "N/A" when neither field is present.
    fn display_id(&self) -> String {
        self.record_id()
            .map(|id| id.to_string())
            .unwrap_or_else(|| "N/A".to_string())
    }
}
