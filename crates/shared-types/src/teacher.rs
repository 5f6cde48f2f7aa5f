use crate::{qr, unique_timestamp_id, AppError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Class size assumed for new sessions when no configuration says otherwise.
pub const DEFAULT_CLASS_SIZE: u32 = 30;

/// One class meeting with its attendance token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClassSession {
    pub id: String,
    pub class_name: String,
    pub subject: String,
    pub time: String,
    pub date: String,
    pub qr_code: String,
    pub students_present: u32,
    pub total_students: u32,
}

/// "Generate QR Code" form state. Date is `YYYY-MM-DD`, time `HH:MM`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Validate)]
pub struct SessionForm {
    #[validate(length(min = 1, message = "Class name is required"))]
    pub class_name: String,
    #[validate(length(min = 1, message = "Subject is required"))]
    pub subject: String,
    #[validate(length(min = 1, message = "Date is required"))]
    pub date: String,
    #[validate(length(min = 1, message = "Time is required"))]
    pub time: String,
}

/// Totals shown above the session list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardStats {
    pub sessions: usize,
    pub students_present: u32,
    pub total_students: u32,
}

/// Teacher-local session list plus the code currently shown to students.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassBoard {
    sessions: Vec<ClassSession>,
    active_qr: Option<String>,
    class_size: u32,
}

impl Default for ClassBoard {
    fn default() -> Self {
        Self::new(DEFAULT_CLASS_SIZE)
    }
}

impl ClassBoard {
    pub fn new(class_size: u32) -> Self {
        Self {
            sessions: Vec::new(),
            active_qr: None,
            class_size,
        }
    }

    /// Board pre-filled with one finished demo session.
    pub fn seeded(class_size: u32) -> Self {
        let mut board = Self::new(class_size);
        board.sessions.push(ClassSession {
            id: "1".into(),
            class_name: "CS101".into(),
            subject: "Introduction to Programming".into(),
            time: "09:00 AM".into(),
            date: "2024-01-15".into(),
            qr_code: "CS101_20240115_0900".into(),
            students_present: 28,
            total_students: 30,
        });
        board
    }

    pub fn sessions(&self) -> &[ClassSession] {
        &self.sessions
    }

    pub fn active_qr(&self) -> Option<&str> {
        self.active_qr.as_deref()
    }

    pub fn is_active(&self, qr_code: &str) -> bool {
        self.active_qr.as_deref() == Some(qr_code)
    }

    /// The session whose code is currently active.
    pub fn active_session(&self) -> Option<&ClassSession> {
        let code = self.active_qr.as_deref()?;
        self.sessions.iter().find(|s| s.qr_code == code)
    }

    /// Validate the form, append a session with a derived QR code and make
    /// that code active.
    pub fn generate_qr_code(&mut self, form: &SessionForm, now: DateTime<Utc>) -> Result<ClassSession, AppError> {
        form.validate()
            .map_err(|e| AppError::from_validation("Please fill in all fields", e))?;

        let session = ClassSession {
            id: unique_timestamp_id(now, self.sessions.iter().map(|s| s.id.as_str())),
            class_name: form.class_name.clone(),
            subject: form.subject.clone(),
            time: form.time.clone(),
            date: form.date.clone(),
            qr_code: qr::encode(&form.class_name, &form.date, &form.time),
            students_present: 0,
            total_students: self.class_size,
        };
        self.active_qr = Some(session.qr_code.clone());
        self.sessions.push(session.clone());
        Ok(session)
    }

    /// Show an existing session's code to students.
    ///
    /// Returns `Ok(false)` when the code was already active.
    pub fn activate_qr(&mut self, qr_code: &str) -> Result<bool, AppError> {
        if !self.sessions.iter().any(|s| s.qr_code == qr_code) {
            return Err(AppError::not_found(format!(
                "No class session uses QR code {qr_code}"
            )));
        }
        if self.is_active(qr_code) {
            return Ok(false);
        }
        self.active_qr = Some(qr_code.to_string());
        Ok(true)
    }

    /// Stop showing any code. Returns the code that was active.
    pub fn deactivate_qr(&mut self) -> Option<String> {
        self.active_qr.take()
    }

    pub fn stats(&self) -> BoardStats {
        BoardStats {
            sessions: self.sessions.len(),
            students_present: self.sessions.iter().map(|s| s.students_present).sum(),
            total_students: self.sessions.iter().map(|s| s.total_students).sum(),
        }
    }
}
