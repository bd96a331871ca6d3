// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Fitboard: terminal dashboard client for a team fitness-tracking API.
//!
//! This crate owns the client-side data layer: it fetches the five record
//! collections, normalizes the backend's response shapes, resolves foreign
//! keys across collections (the API performs no joins), and drives each
//! view's loading/ready/error lifecycle plus the user edit workflow.

pub mod api;
pub mod config;
pub mod edit;
pub mod error;
pub mod models;
pub mod resolve;
pub mod time_utils;
pub mod views;
