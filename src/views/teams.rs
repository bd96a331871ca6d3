// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Teams view: team roster with member counts derived from the users
//! collection.

use crate::api::ApiClient;
use crate::models::{Identified, Team, User};
use crate::resolve;
use crate::views::{self, table, ViewState};

/// Collections the Teams view requires: teams plus users (member counts).
#[derive(Debug, Clone)]
pub struct TeamsData {
    pub teams: Vec<Team>,
    pub users: Vec<User>,
}

/// The Teams dashboard view.
pub struct TeamsView {
    state: ViewState<TeamsData>,
}

impl TeamsView {
    pub fn new() -> Self {
        Self {
            state: ViewState::new(),
        }
    }

    pub fn state(&self) -> &ViewState<TeamsData> {
        &self.state
    }

    /// Fetch teams and users concurrently and commit one state transition.
    pub async fn activate(&mut self, api: &ApiClient) {
        let outcome = tokio::try_join!(api.fetch_teams(), api.fetch_users())
            .map(|(teams, users)| TeamsData { teams, users });
        self.state.finish(outcome);
    }

    pub fn render(&self) -> String {
        match &self.state {
            ViewState::Loading => views::LOADING_TEXT.to_string(),
            ViewState::Error(message) => views::render_error_panel(message),
            ViewState::Ready(data) if data.teams.is_empty() => "No teams found.".to_string(),
            ViewState::Ready(data) => {
                let rows: Vec<Vec<String>> = data
                    .teams
                    .iter()
                    .map(|team| {
                        let members = match team.record_id() {
                            Some(id) => resolve::member_count(id, &data.users),
                            None => 0,
                        };
                        vec![
                            team.display_id(),
                            team.name.clone().unwrap_or_default(),
                            team.description
                                .clone()
                                .unwrap_or_else(|| "N/A".to_string()),
                            format!("{} members", members),
                        ]
                    })
                    .collect();
                table::render_table(&["Team ID", "Team Name", "Description", "Members"], &rows)
            }
        }
    }
}

impl Default for TeamsView {
    fn default() -> Self {
        Self::new()
    }
}
