// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Per-view state machines and rendering.
//!
//! Each of the five dashboard views owns an independent [`ViewState`]
//! instance, populated by exactly one fetch round per activation.

pub mod activities;
pub mod leaderboard;
pub mod table;
pub mod teams;
pub mod users;
pub mod workouts;

pub use activities::ActivitiesView;
pub use leaderboard::LeaderboardView;
pub use teams::TeamsView;
pub use users::UsersView;
pub use workouts::WorkoutsView;

use crate::error::Result;

/// Per-view finite state machine: `Loading` → `Ready` | `Error`.
///
/// Both outcomes are terminal. The Ready transition stores all fetched
/// collections atomically with the transition, so partial population is
/// never observable.
#[derive(Debug, Clone)]
pub enum ViewState<T> {
    Loading,
    Ready(T),
    Error(String),
}

impl<T> ViewState<T> {
    pub fn new() -> Self {
        ViewState::Loading
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ViewState::Ready(_))
    }

    /// Apply the outcome of the view's fetch round.
    ///
    /// Terminal states absorb late results: once Ready or Error, further
    /// outcomes are discarded.
    pub fn finish(&mut self, outcome: Result<T>) {
        if !matches!(self, ViewState::Loading) {
            return;
        }
        *self = match outcome {
            Ok(data) => ViewState::Ready(data),
            Err(e) => ViewState::Error(e.to_string()),
        };
    }
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared text for a view still waiting on its fetches.
pub(crate) const LOADING_TEXT: &str = "Loading...";

/// Error panel: the failure's message and nothing else, no partial table.
pub(crate) fn render_error_panel(message: &str) -> String {
    format!("Error!\n{}", message)
}
