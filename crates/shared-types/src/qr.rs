//! The attendance QR token.
//!
//! A "QR code" here is a plain string `<className>_<YYYYMMDD>_<HHMM>`. The
//! teacher dashboard produces it from a session's fields and the student
//! dashboard parses it back; no image is ever generated or decoded.

use crate::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Separator between the three token segments.
pub const SEPARATOR: char = '_';

/// Build the token for a class session.
///
/// Dashes are stripped from the date and colons/whitespace from the time, so
/// `("CS101", "2024-01-15", "09:00")` becomes `CS101_20240115_0900`.
pub fn encode(class_name: &str, date: &str, time: &str) -> String {
    let date: String = date.chars().filter(|c| *c != '-').collect();
    let time: String = time
        .chars()
        .filter(|c| *c != ':' && !c.is_whitespace())
        .collect();
    format!("{class_name}{SEPARATOR}{date}{SEPARATOR}{time}")
}

/// A parsed token. Date and time keep their compact encoding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QrPayload {
    pub class_name: String,
    pub date: String,
    pub time: String,
}

impl QrPayload {
    /// Parse scanner input.
    ///
    /// Surrounding whitespace is ignored. Blank input is a validation error;
    /// anything that does not split into exactly three `_` segments is a bad
    /// request. Segment contents are not checked.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(AppError::validation(
                "Please enter a QR code to scan",
                Default::default(),
            ));
        }

        let parts: Vec<&str> = raw.split(SEPARATOR).collect();
        match parts.as_slice() {
            [class_name, date, time] => Ok(Self {
                class_name: class_name.to_string(),
                date: date.to_string(),
                time: time.to_string(),
            }),
            _ => Err(AppError::bad_request("The QR code format is not valid")),
        }
    }

    /// `YYYYMMDD` rendered as `YYYY-MM-DD`.
    pub fn display_date(&self) -> String {
        format!(
            "{}-{}-{}",
            char_slice(&self.date, 0, 4),
            char_slice(&self.date, 4, 6),
            char_slice(&self.date, 6, 8)
        )
    }

    /// `HHMM` rendered as `HH:MM`.
    pub fn display_time(&self) -> String {
        format!(
            "{}:{}",
            char_slice(&self.time, 0, 2),
            char_slice(&self.time, 2, 4)
        )
    }

    /// True when `display_date` denotes this payload's date once its dashes
    /// are removed.
    pub fn same_date(&self, display_date: &str) -> bool {
        display_date.chars().filter(|c| *c != '-').eq(self.date.chars())
    }
}

impl FromStr for QrPayload {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for QrPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{SEPARATOR}{}{SEPARATOR}{}",
            self.class_name, self.date, self.time
        )
    }
}

/// Characters `start..end` of `s`, clamped to its length.
fn char_slice(s: &str, start: usize, end: usize) -> String {
    s.chars().skip(start).take(end.saturating_sub(start)).collect()
}
