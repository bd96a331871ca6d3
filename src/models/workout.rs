// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout model mirrored from the fitness API.

use serde::{Deserialize, Serialize};

use crate::models::record::{Identified, RecordId};

/// Workout record as returned by `GET /workouts/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub doc_id: Option<RecordId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    /// Workout name
    #[serde(default)]
    pub name: Option<String>,
    /// Description
    #[serde(default)]
    pub description: Option<String>,
    /// Suggested duration in minutes
    #[serde(default)]
    pub duration: Option<f64>,
    /// Raw difficulty text; classified via [`Difficulty::classify`]
    #[serde(default)]
    pub difficulty: Option<String>,
}

impl Identified for Workout {
    fn record_id(&self) -> Option<&RecordId> {
        self.doc_id.as_ref().or(self.id.as_ref())
    }
}

impl Workout {
    /// Difficulty classification for badge styling.
    pub fn difficulty_class(&self) -> Difficulty {
        Difficulty::classify(self.difficulty.as_deref())
    }
}

/// Difficulty classification. Matching is case-sensitive, so "easy" is
/// `Other` just like any unknown label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Other,
}

impl Difficulty {
    pub fn classify(raw: Option<&str>) -> Self {
        match raw {
            Some("Easy") => Difficulty::Easy,
            Some("Medium") => Difficulty::Medium,
            Some("Hard") => Difficulty::Hard,
            _ => Difficulty::Other,
        }
    }
}
