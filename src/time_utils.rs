// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting.

use chrono::{DateTime, NaiveDate};

/// Format an activity date for display.
///
/// Absent or empty input is "N/A"; an RFC 3339 datetime or a bare
/// `YYYY-MM-DD` date renders US-style ("Mar 5, 2024"); anything else is
/// "Invalid Date".
pub fn format_activity_date(raw: Option<&str>) -> String {
    let raw = match raw {
        None => return "N/A".to_string(),
        Some(s) if s.is_empty() => return "N/A".to_string(),
        Some(s) => s,
    };

    let parsed = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));

    match parsed {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => "Invalid Date".to_string(),
    }
}
