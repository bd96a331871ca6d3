// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Leaderboard view: standings with user/team names and calorie totals
//! resolved from three other collections.

use crate::api::ApiClient;
use crate::models::{Activity, LeaderboardEntry, Team, User};
use crate::resolve;
use crate::views::{self, table, ViewState};

/// Collections the Leaderboard view requires: the standings plus users,
/// teams, and activities for per-row resolution.
#[derive(Debug, Clone)]
pub struct LeaderboardData {
    pub entries: Vec<LeaderboardEntry>,
    pub users: Vec<User>,
    pub teams: Vec<Team>,
    pub activities: Vec<Activity>,
}

/// The Leaderboard dashboard view.
pub struct LeaderboardView {
    state: ViewState<LeaderboardData>,
}

impl LeaderboardView {
    pub fn new() -> Self {
        Self {
            state: ViewState::new(),
        }
    }

    pub fn state(&self) -> &ViewState<LeaderboardData> {
        &self.state
    }

    /// Fetch all four collections concurrently and commit one state
    /// transition once every fetch has succeeded.
    pub async fn activate(&mut self, api: &ApiClient) {
        let outcome = tokio::try_join!(
            api.fetch_leaderboard(),
            api.fetch_users(),
            api.fetch_teams(),
            api.fetch_activities(),
        )
        .map(|(entries, users, teams, activities)| LeaderboardData {
            entries,
            users,
            teams,
            activities,
        });
        self.state.finish(outcome);
    }

    pub fn render(&self) -> String {
        match &self.state {
            ViewState::Loading => views::LOADING_TEXT.to_string(),
            ViewState::Error(message) => views::render_error_panel(message),
            ViewState::Ready(data) if data.entries.is_empty() => {
                "No leaderboard data available.".to_string()
            }
            ViewState::Ready(data) => {
                let rows: Vec<Vec<String>> = data
                    .entries
                    .iter()
                    .enumerate()
                    .map(|(position, entry)| {
                        let (user, calories) = match &entry.user_id {
                            Some(user_id) => (
                                resolve::user_name(user_id, &data.users),
                                resolve::total_calories(user_id, &data.activities).to_string(),
                            ),
                            None => (resolve::UNKNOWN_USER.to_string(), "0".to_string()),
                        };
                        vec![
                            format_rank(entry.display_rank(position), position),
                            user,
                            resolve::team_name(entry.team_id.as_ref(), &data.teams),
                            entry.total_points.unwrap_or(0).to_string(),
                            calories,
                        ]
                    })
                    .collect();
                table::render_table(
                    &["Rank", "User", "Team", "Total Points", "Total Calories"],
                    &rows,
                )
            }
        }
    }
}

impl Default for LeaderboardView {
    fn default() -> Self {
        Self::new()
    }
}

/// Medal prefix for the top three positions in the returned order.
fn format_rank(rank: u32, position: usize) -> String {
    match position {
        0 => format!("🥇 {}", rank),
        1 => format!("🥈 {}", rank),
        2 => format!("🥉 {}", rank),
        _ => rank.to_string(),
    }
}
