// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Team model mirrored from the fitness API.

use serde::{Deserialize, Serialize};

use crate::models::record::{Identified, RecordId};

/// Team record as returned by `GET /teams/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub doc_id: Option<RecordId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    /// Team name
    #[serde(default)]
    pub name: Option<String>,
    /// Free-text description (nullable)
    #[serde(default)]
    pub description: Option<String>,
}

impl Identified for Team {
    fn record_id(&self) -> Option<&RecordId> {
        self.doc_id.as_ref().or(self.id.as_ref())
    }
}
