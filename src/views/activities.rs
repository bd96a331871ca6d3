// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activities view: the raw activity log.

use crate::api::ApiClient;
use crate::models::Activity;
use crate::time_utils::format_activity_date;
use crate::views::{self, table, ViewState};

/// The Activities dashboard view.
pub struct ActivitiesView {
    state: ViewState<Vec<Activity>>,
}

impl ActivitiesView {
    pub fn new() -> Self {
        Self {
            state: ViewState::new(),
        }
    }

    pub fn state(&self) -> &ViewState<Vec<Activity>> {
        &self.state
    }

    pub async fn activate(&mut self, api: &ApiClient) {
        let outcome = api.fetch_activities().await;
        self.state.finish(outcome);
    }

    pub fn render(&self) -> String {
        match &self.state {
            ViewState::Loading => views::LOADING_TEXT.to_string(),
            ViewState::Error(message) => views::render_error_panel(message),
            ViewState::Ready(activities) if activities.is_empty() => {
                "No activities found.".to_string()
            }
            ViewState::Ready(activities) => {
                let rows: Vec<Vec<String>> = activities
                    .iter()
                    .map(|activity| {
                        vec![
                            activity.activity_type.clone().unwrap_or_default(),
                            table::format_number(activity.duration),
                            table::format_number(activity.distance),
                            activity
                                .calories
                                .map(|c| c.to_string())
                                .unwrap_or_default(),
                            format_activity_date(activity.date.as_deref()),
                            activity
                                .user_id
                                .as_ref()
                                .map(|id| id.to_string())
                                .unwrap_or_else(|| "N/A".to_string()),
                        ]
                    })
                    .collect();
                table::render_table(
                    &[
                        "Activity Type",
                        "Duration (min)",
                        "Distance (km)",
                        "Calories",
                        "Date",
                        "User",
                    ],
                    &rows,
                )
            }
        }
    }
}

impl Default for ActivitiesView {
    fn default() -> Self {
        Self::new()
    }
}
