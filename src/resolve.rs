// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Cross-reference resolution across independently-fetched collections.
//!
//! The API performs no joins, so foreign keys are resolved here from the
//! in-memory collections. All functions are pure and recompute from the
//! collections they are handed on every call; absence of a referenced
//! record degrades to sentinel text, never an error.

use crate::models::{Activity, Identified, RecordId, Team, User};

pub const UNKNOWN_USER: &str = "Unknown User";
pub const NO_TEAM: &str = "No Team";
pub const NOT_AVAILABLE: &str = "N/A";

/// Resolve a user foreign key to a display name.
///
/// Total: an unknown id, or a matching user with no name, yields
/// "Unknown User".
pub fn user_name(user_id: &RecordId, users: &[User]) -> String {
    users
        .iter()
        .find(|user| user.record_id() == Some(user_id))
        .and_then(|user| user.name.clone())
        .unwrap_or_else(|| UNKNOWN_USER.to_string())
}

/// Resolve a nullable team foreign key to a display name.
///
/// No key at all means "No Team"; a key with no matching team is "N/A".
pub fn team_name(team_id: Option<&RecordId>, teams: &[Team]) -> String {
    let Some(team_id) = team_id else {
        return NO_TEAM.to_string();
    };
    teams
        .iter()
        .find(|team| team.record_id() == Some(team_id))
        .and_then(|team| team.name.clone())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Sum of calories across a user's activities.
///
/// Activities with no calories value count as 0.
pub fn total_calories(user_id: &RecordId, activities: &[Activity]) -> i64 {
    activities
        .iter()
        .filter(|activity| activity.user_id.as_ref() == Some(user_id))
        .map(|activity| activity.calories.unwrap_or(0))
        .sum()
}

/// Number of users whose `team_id` references the given team.
pub fn member_count(team_id: &RecordId, users: &[User]) -> usize {
    users
        .iter()
        .filter(|user| user.team_id.as_ref() == Some(team_id))
        .count()
}
