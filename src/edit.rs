// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Edit workflow for user records.
//!
//! A bounded sub-flow scoped to the Users view: a form snapshot is taken
//! from the selected record, edited field-by-field, validated, and
//! submitted as a full-record PUT. The snapshot is discarded on cancel and
//! reconciled into the collection only after the server confirms.

use validator::{Validate, ValidationError};

use crate::models::{Identified, RecordId, Role, User, UserUpdate};

/// Edit workflow state.
///
/// `Closed → Editing → Submitting → Closed` on success; a failed submit
/// returns to `Editing` with the snapshot intact.
#[derive(Debug, Clone, Default)]
pub enum EditWorkflow {
    #[default]
    Closed,
    Editing(EditForm),
    Submitting(EditForm),
}

impl EditWorkflow {
    pub fn is_open(&self) -> bool {
        !matches!(self, EditWorkflow::Closed)
    }

    /// The current form snapshot, if any.
    pub fn form(&self) -> Option<&EditForm> {
        match self {
            EditWorkflow::Closed => None,
            EditWorkflow::Editing(form) | EditWorkflow::Submitting(form) => Some(form),
        }
    }
}

/// Editable snapshot of one user record.
///
/// `name` and `email` are required; the role must be one of the three
/// concrete options. `team_id` holds the raw select value, empty string
/// meaning "No Team".
#[derive(Debug, Clone, Validate)]
pub struct EditForm {
    /// Identifier captured at open time; sent as `_id` on submit.
    pub id: RecordId,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    #[validate(custom(function = validate_role))]
    pub role: Role,
    pub team_id: String,
}

impl EditForm {
    /// Snapshot a user's editable fields. Absent values default to empty
    /// strings so the form is always fully populated.
    ///
    /// Returns `None` for a record with no identifier, which cannot be
    /// addressed for update.
    pub fn from_user(user: &User) -> Option<Self> {
        let id = user.record_id()?.clone();
        Some(Self {
            id,
            name: user.name.clone().unwrap_or_default(),
            email: user.email.clone().unwrap_or_default(),
            role: user.role,
            team_id: user
                .team_id
                .as_ref()
                .map(|t| t.to_string())
                .unwrap_or_default(),
        })
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn set_email(&mut self, email: &str) {
        self.email = email.to_string();
    }

    pub fn set_role(&mut self, role: Role) {
        self.role = role;
    }

    pub fn set_team_id(&mut self, team_id: &str) {
        self.team_id = team_id.to_string();
    }

    /// Build the full-record PUT body.
    ///
    /// A non-empty `team_id` is parsed to an integer; unparseable input
    /// degrades to null rather than erroring, matching the backend's
    /// nullable foreign key.
    pub fn to_update(&self) -> UserUpdate {
        let team_id = self.team_id.trim();
        UserUpdate {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
            team_id: if team_id.is_empty() {
                None
            } else {
                team_id.parse().ok()
            },
        }
    }
}

fn validate_role(role: &Role) -> Result<(), ValidationError> {
    if matches!(role, Role::Unset) {
        return Err(ValidationError::new("role_required"));
    }
    Ok(())
}
