// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Error types for talking to the fitness API.

/// Errors surfaced by the API client and the edit workflow.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Network-level failure before any status code exists.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The body arrived but is not valid JSON, or not a record sequence.
    #[error("Invalid response from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },

    /// Edit form failed validation; raised before any network call.
    #[error("Invalid form input: {0}")]
    InvalidForm(#[from] validator::ValidationErrors),
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ApiError>;
