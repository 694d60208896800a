//! Date helper functions

use chrono::NaiveDate;

/// Format a date for display in listings, e.g. "Jan 15, 2024"
pub fn format_display(date: &NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

/// Format a date as its ISO-8601 calendar form, e.g. "2024-01-15"
pub fn format_iso(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
