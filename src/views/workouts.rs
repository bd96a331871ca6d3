// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workouts view: the workout catalog.

use crate::api::ApiClient;
use crate::models::{Identified, Workout};
use crate::views::{self, table, ViewState};

/// The Workouts dashboard view.
pub struct WorkoutsView {
    state: ViewState<Vec<Workout>>,
}

impl WorkoutsView {
    pub fn new() -> Self {
        Self {
            state: ViewState::new(),
        }
    }

    pub fn state(&self) -> &ViewState<Vec<Workout>> {
        &self.state
    }

    pub async fn activate(&mut self, api: &ApiClient) {
        let outcome = api.fetch_workouts().await;
        self.state.finish(outcome);
    }

    pub fn render(&self) -> String {
        match &self.state {
            ViewState::Loading => views::LOADING_TEXT.to_string(),
            ViewState::Error(message) => views::render_error_panel(message),
            ViewState::Ready(workouts) if workouts.is_empty() => {
                "No workouts available.".to_string()
            }
            ViewState::Ready(workouts) => {
                let rows: Vec<Vec<String>> = workouts
                    .iter()
                    .map(|workout| {
                        vec![
                            workout.display_id(),
                            workout.name.clone().unwrap_or_default(),
                            workout.description.clone().unwrap_or_default(),
                            match workout.duration {
                                Some(_) => format!("{} min", table::format_number(workout.duration)),
                                None => "N/A".to_string(),
                            },
                            workout.difficulty.clone().unwrap_or_default(),
                        ]
                    })
                    .collect();
                table::render_table(
                    &[
                        "ID",
                        "Workout Name",
                        "Description",
                        "Duration (min)",
                        "Difficulty",
                    ],
                    &rows,
                )
            }
        }
    }
}

impl Default for WorkoutsView {
    fn default() -> Self {
        Self::new()
    }
}
