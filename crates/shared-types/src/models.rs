use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account role controlling which dashboard a user may open.
///
/// - `Admin` manages teacher and student accounts.
/// - `Teacher` generates QR codes for class sessions.
/// - `Student` scans QR codes to mark attendance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Teacher,
    Student,
}

impl Role {
    /// All roles in the order the login picker lists them.
    pub const ALL: [Role; 3] = [Role::Admin, Role::Teacher, Role::Student];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Teacher => "teacher",
            Role::Student => "student",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Teacher => "Teacher",
            Role::Student => "Student",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Role::Admin => "Manage users, classes, and system settings",
            Role::Teacher => "Generate QR codes and manage class attendance",
            Role::Student => "Scan QR codes to mark attendance",
        }
    }
}

/// The signed-in identity. Lives only as long as the session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub email: String,
    pub role: Role,
    pub name: String,
}

impl User {
    /// Build a session user, deriving the display name from the email.
    pub fn new(email: impl Into<String>, role: Role) -> Self {
        let email = email.into();
        let name = display_name_from_email(&email);
        Self { email, role, name }
    }
}

/// The local part of an email address (everything before the first `@`).
/// An address without `@` is returned whole.
pub fn display_name_from_email(email: &str) -> String {
    email.split('@').next().unwrap_or_default().to_string()
}

/// Identifier built from the wall-clock time in Unix milliseconds, stepping
/// forward one millisecond at a time until the id is not already taken.
pub fn unique_timestamp_id<'a>(
    now: DateTime<Utc>,
    taken: impl Iterator<Item = &'a str> + Clone,
) -> String {
    let mut millis = now.timestamp_millis();
    loop {
        let candidate = millis.to_string();
        if !taken.clone().any(|id| id == candidate) {
            return candidate;
        }
        millis += 1;
    }
}
