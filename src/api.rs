// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fitness API client for fetching collections and updating users.
//!
//! Handles:
//! - One GET per collection (users, teams, activities, workouts, leaderboard)
//! - Normalizing bare-array and paginated-envelope response shapes
//! - Full-record user updates via PUT
//! - Surfacing transport and HTTP status failures without retrying

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{Activity, LeaderboardEntry, RecordId, Team, User, UserUpdate, Workout};

/// Fixed per-collection endpoint suffixes, appended to the configured base.
pub mod endpoints {
    pub const USERS: &str = "users/";
    pub const TEAMS: &str = "teams/";
    pub const ACTIVITIES: &str = "activities/";
    pub const WORKOUTS: &str = "workouts/";
    pub const LEADERBOARD: &str = "leaderboard/";
}

/// Coerce a collection payload to its record sequence.
///
/// The backend returns either a bare JSON array or a pagination envelope
/// `{ "results": [...], ... }`; this always yields the former. No element
/// validation happens here. Idempotent for both contract shapes.
pub fn normalize(payload: Value) -> Value {
    match payload {
        Value::Object(mut map) if map.contains_key("results") => {
            map.remove("results").unwrap_or(Value::Null)
        }
        other => other,
    }
}

/// Fitness API client.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new client against the configured base address.
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api_base.clone(),
        }
    }

    pub async fn fetch_users(&self) -> Result<Vec<User>> {
        self.get_collection(endpoints::USERS).await
    }

    pub async fn fetch_teams(&self) -> Result<Vec<Team>> {
        self.get_collection(endpoints::TEAMS).await
    }

    pub async fn fetch_activities(&self) -> Result<Vec<Activity>> {
        self.get_collection(endpoints::ACTIVITIES).await
    }

    pub async fn fetch_workouts(&self) -> Result<Vec<Workout>> {
        self.get_collection(endpoints::WORKOUTS).await
    }

    pub async fn fetch_leaderboard(&self) -> Result<Vec<LeaderboardEntry>> {
        self.get_collection(endpoints::LEADERBOARD).await
    }

    /// Update a user with a full-record PUT.
    ///
    /// Returns the server's representation of the updated record.
    pub async fn update_user(&self, id: &RecordId, update: &UserUpdate) -> Result<User> {
        let url = format!("{}/users/{}/", self.base_url, id);
        tracing::info!(user = %id, "Updating user");

        let response = self.http.put(&url).json(update).send().await?;
        let response = check_status(response).await?;

        response.json().await.map_err(|e| ApiError::Decode {
            endpoint: endpoints::USERS.to_string(),
            message: e.to_string(),
        })
    }

    /// Generic collection GET: fetch, check status, normalize, decode.
    async fn get_collection<T: DeserializeOwned>(&self, endpoint: &str) -> Result<Vec<T>> {
        let url = format!("{}/{}", self.base_url, endpoint);
        tracing::debug!(url = %url, "Fetching collection");

        let response = self.http.get(&url).send().await?;
        let response = check_status(response).await?;

        let payload: Value = response.json().await.map_err(|e| ApiError::Decode {
            endpoint: endpoint.to_string(),
            message: e.to_string(),
        })?;

        serde_json::from_value(normalize(payload)).map_err(|e| ApiError::Decode {
            endpoint: endpoint.to_string(),
            message: e.to_string(),
        })
    }
}

/// Check response status, surfacing non-2xx as a status failure.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    tracing::warn!(status, "API returned error status");
    Err(ApiError::Status { status, body })
}
