//! Human-readable date formatting for page templates.

use chrono::{DateTime, Utc};

/// Format a timestamp the way the post index displays it: short month,
/// day-of-month, year, in UTC (e.g. `Mar 5, 2025`).
pub fn readable_date(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Format an optional timestamp, rendering `None` as the empty string.
pub fn readable_date_opt(date: Option<&DateTime<Utc>>) -> String {
    date.map(readable_date).unwrap_or_default()
}

// ============================================================================
// Tests
// ============================================================================
