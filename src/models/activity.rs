// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity model mirrored from the fitness API.

use serde::{Deserialize, Serialize};

use crate::models::record::{Identified, RecordId};

/// Activity record as returned by `GET /activities/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub doc_id: Option<RecordId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    /// Sport type (Running, Cycling, etc.)
    #[serde(default)]
    pub activity_type: Option<String>,
    /// Duration in minutes
    #[serde(default)]
    pub duration: Option<f64>,
    /// Distance in kilometers
    #[serde(default)]
    pub distance: Option<f64>,
    /// Calories burned; missing values count as 0 in aggregation
    #[serde(default)]
    pub calories: Option<i64>,
    /// ISO-ish date string, possibly malformed
    #[serde(default)]
    pub date: Option<String>,
    /// Owning user foreign key
    #[serde(default)]
    pub user_id: Option<RecordId>,
}

impl Identified for Activity {
    fn record_id(&self) -> Option<&RecordId> {
        self.doc_id.as_ref().or(self.id.as_ref())
    }
}
