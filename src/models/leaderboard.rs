// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Leaderboard entry model mirrored from the fitness API.

use serde::{Deserialize, Serialize};

use crate::models::record::{Identified, RecordId};

/// Leaderboard standing as returned by `GET /leaderboard/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub doc_id: Option<RecordId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    /// Stored rank; display falls back to list position when absent
    #[serde(default)]
    pub rank: Option<u32>,
    /// Ranked user foreign key
    #[serde(default)]
    pub user_id: Option<RecordId>,
    /// Team foreign key (nullable)
    #[serde(default)]
    pub team_id: Option<RecordId>,
    /// Points total; missing displays as 0
    #[serde(default)]
    pub total_points: Option<i64>,
}

impl Identified for LeaderboardEntry {
    fn record_id(&self) -> Option<&RecordId> {
        self.doc_id.as_ref().or(self.id.as_ref())
    }
}

impl LeaderboardEntry {
    /// Rank to display for this entry.
    ///
    /// A missing `rank` defaults to the entry's 1-based position in the
    /// returned sequence. This is a documented display default, not a
    /// guaranteed server semantic.
    pub fn display_rank(&self, position: usize) -> u32 {
        self.rank.unwrap_or(position as u32 + 1)
    }
}
