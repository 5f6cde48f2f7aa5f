/// Shared formatting utilities for the UI layer.
use chrono::{DateTime, NaiveDate, Utc};

/// Format a `YYYY-MM-DD` date as "Jan 15, 2024".
///
/// Anything that is not a valid calendar date is returned unchanged.
pub fn format_date_human(date_str: &str) -> String {
    match NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d") {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Format a marking timestamp as "Jan 15, 2024 9:05 AM".
pub fn format_marked_at(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %Y %-I:%M %p").to_string()
}

/// Up to two uppercase initials for an avatar bubble ("Dr. John Smith" → "DJ").
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().find(|c| c.is_alphanumeric()))
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}
