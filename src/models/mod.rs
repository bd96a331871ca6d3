// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models mirrored from the fitness API.

pub mod activity;
pub mod leaderboard;
pub mod record;
pub mod team;
pub mod user;
pub mod workout;

pub use activity::Activity;
pub use leaderboard::LeaderboardEntry;
pub use record::{Identified, RecordId};
pub use team::Team;
pub use user::{Role, User, UserUpdate};
pub use workout::{Difficulty, Workout};
