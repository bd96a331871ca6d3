// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Users view: the user roster with team names, plus the edit workflow.

use crate::api::ApiClient;
use crate::edit::{EditForm, EditWorkflow};
use crate::error::{ApiError, Result};
use crate::models::{Identified, RecordId, Role, Team, User};
use crate::resolve;
use crate::views::{self, table, ViewState};
use validator::Validate;

/// Collections the Users view requires: users plus teams (team name
/// resolution and the edit form's team options).
#[derive(Debug, Clone)]
pub struct UsersData {
    pub users: Vec<User>,
    pub teams: Vec<Team>,
}

/// The Users dashboard view.
pub struct UsersView {
    state: ViewState<UsersData>,
    edit: EditWorkflow,
}

impl UsersView {
    pub fn new() -> Self {
        Self {
            state: ViewState::new(),
            edit: EditWorkflow::Closed,
        }
    }

    pub fn state(&self) -> &ViewState<UsersData> {
        &self.state
    }

    pub fn edit(&self) -> &EditWorkflow {
        &self.edit
    }

    /// Fetch users and teams concurrently and commit one state transition.
    pub async fn activate(&mut self, api: &ApiClient) {
        let outcome = tokio::try_join!(api.fetch_users(), api.fetch_teams())
            .map(|(users, teams)| UsersData { users, teams });
        self.state.finish(outcome);
    }

    /// Open the edit form pre-populated from the selected user.
    ///
    /// Returns false when the view is not Ready or no user matches.
    pub fn open_edit(&mut self, id: &RecordId) -> bool {
        let ViewState::Ready(data) = &self.state else {
            return false;
        };
        let form = data
            .users
            .iter()
            .find(|user| user.record_id() == Some(id))
            .and_then(EditForm::from_user);
        match form {
            Some(form) => {
                self.edit = EditWorkflow::Editing(form);
                true
            }
            None => false,
        }
    }

    /// Mutable access to the open form for field edits.
    pub fn form_mut(&mut self) -> Option<&mut EditForm> {
        match &mut self.edit {
            EditWorkflow::Editing(form) => Some(form),
            _ => None,
        }
    }

    /// Discard the form snapshot unconditionally. No network call.
    pub fn cancel_edit(&mut self) {
        self.edit = EditWorkflow::Closed;
    }

    /// Validate and submit the open form as a full-record PUT.
    ///
    /// On success the in-memory record matched by identifier is replaced
    /// with the server's representation and the workflow closes. On any
    /// failure the workflow returns to Editing with the snapshot intact and
    /// the collection untouched; the error is returned for operator
    /// notification.
    pub async fn submit_edit(&mut self, api: &ApiClient) -> Result<()> {
        let form = match std::mem::take(&mut self.edit) {
            EditWorkflow::Editing(form) => form,
            other => {
                self.edit = other;
                return Ok(());
            }
        };

        if let Err(errors) = form.validate() {
            self.edit = EditWorkflow::Editing(form);
            return Err(ApiError::InvalidForm(errors));
        }

        let update = form.to_update();
        self.edit = EditWorkflow::Submitting(form.clone());

        match api.update_user(&form.id, &update).await {
            Ok(updated) => {
                if let ViewState::Ready(data) = &mut self.state {
                    for user in &mut data.users {
                        if user.record_id() == Some(&form.id) {
                            *user = updated;
                            break;
                        }
                    }
                }
                self.edit = EditWorkflow::Closed;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(user = %form.id, error = %e, "User update failed");
                self.edit = EditWorkflow::Editing(form);
                Err(e)
            }
        }
    }

    /// Team select options for the edit form: "No Team" plus one entry per
    /// fetched team, derived from the teams collection at call time.
    pub fn team_options(&self) -> Vec<(Option<RecordId>, String)> {
        let mut options = vec![(None, resolve::NO_TEAM.to_string())];
        if let ViewState::Ready(data) = &self.state {
            for team in &data.teams {
                if let Some(id) = team.record_id() {
                    options.push((
                        Some(id.clone()),
                        team.name
                            .clone()
                            .unwrap_or_else(|| resolve::NOT_AVAILABLE.to_string()),
                    ));
                }
            }
        }
        options
    }

    pub fn render(&self) -> String {
        match &self.state {
            ViewState::Loading => views::LOADING_TEXT.to_string(),
            ViewState::Error(message) => views::render_error_panel(message),
            ViewState::Ready(data) if data.users.is_empty() => "No users found.".to_string(),
            ViewState::Ready(data) => {
                let rows: Vec<Vec<String>> = data
                    .users
                    .iter()
                    .map(|user| {
                        vec![
                            user.display_id(),
                            user.name.clone().unwrap_or_else(|| "N/A".to_string()),
                            user.email.clone().unwrap_or_default(),
                            match user.role {
                                Role::Unset => "N/A".to_string(),
                                role => role.as_str().to_string(),
                            },
                            resolve::team_name(user.team_id.as_ref(), &data.teams),
                        ]
                    })
                    .collect();
                table::render_table(&["ID", "Name", "Email", "Role", "Team"], &rows)
            }
        }
    }
}

impl Default for UsersView {
    fn default() -> Self {
        Self::new()
    }
}
