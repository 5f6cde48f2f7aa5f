use crate::{unique_timestamp_id, AppError, QrPayload};
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Absent => "absent",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
        }
    }
}

/// One class meeting in a student's history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: String,
    pub class_name: String,
    pub subject: String,
    /// `YYYY-MM-DD`.
    pub date: String,
    pub time: String,
    pub status: AttendanceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marked_at: Option<DateTime<Utc>>,
}

impl AttendanceRecord {
    pub fn is_present(&self) -> bool {
        self.status == AttendanceStatus::Present
    }

    /// Same class and same date, comparing the date without separators.
    fn matches(&self, payload: &QrPayload) -> bool {
        self.class_name == payload.class_name && payload.same_date(&self.date)
    }
}

/// The signed-in student's identity card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    pub name: String,
    pub student_id: String,
    pub email: String,
}

impl Default for StudentProfile {
    fn default() -> Self {
        Self {
            name: "Alice Johnson".into(),
            student_id: "CS2024001".into(),
            email: "alice.j@student.edu".into(),
        }
    }
}

/// Counts for the attendance summary card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AttendanceSummary {
    pub total: usize,
    pub present: usize,
    pub absent: usize,
    pub percentage: u32,
}

/// `round(present / total * 100)`, or 0 when there is nothing to count.
pub fn attendance_percentage(present: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((present as f64 / total as f64) * 100.0).round() as u32
}

/// A student's attendance history, newest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttendanceLog {
    records: Vec<AttendanceRecord>,
}

impl AttendanceLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn from_records(records: Vec<AttendanceRecord>) -> Self {
        Self { records }
    }

    /// History pre-filled with the demo records.
    pub fn seeded() -> Self {
        let marked = |d, h, m| Utc.with_ymd_and_hms(2024, 1, d, h, m, 0).single();
        Self::from_records(vec![
            AttendanceRecord {
                id: "1".into(),
                class_name: "CS101".into(),
                subject: "Introduction to Programming".into(),
                date: "2024-01-15".into(),
                time: "09:00 AM".into(),
                status: AttendanceStatus::Present,
                marked_at: marked(15, 9, 5),
            },
            AttendanceRecord {
                id: "2".into(),
                class_name: "MATH201".into(),
                subject: "Calculus II".into(),
                date: "2024-01-14".into(),
                time: "11:00 AM".into(),
                status: AttendanceStatus::Absent,
                marked_at: None,
            },
            AttendanceRecord {
                id: "3".into(),
                class_name: "CS102".into(),
                subject: "Data Structures".into(),
                date: "2024-01-13".into(),
                time: "02:00 PM".into(),
                status: AttendanceStatus::Present,
                marked_at: marked(13, 14, 2),
            },
        ])
    }

    pub fn records(&self) -> &[AttendanceRecord] {
        &self.records
    }

    /// Mark attendance from scanner input.
    ///
    /// An existing record for the same class and date is flipped to present
    /// (keeping its subject and time); otherwise a new record is put at the
    /// front of the history. Scanning a session already marked present is a
    /// conflict and leaves the log unchanged.
    pub fn scan_qr_code(&mut self, raw: &str, now: DateTime<Utc>) -> Result<AttendanceRecord, AppError> {
        let payload = QrPayload::parse(raw)?;

        if let Some(existing) = self.records.iter_mut().find(|r| r.matches(&payload)) {
            if existing.is_present() {
                return Err(AppError::conflict(
                    "Your attendance for this session has already been recorded",
                ));
            }
            existing.status = AttendanceStatus::Present;
            existing.marked_at = Some(now);
            return Ok(existing.clone());
        }

        let record = AttendanceRecord {
            id: unique_timestamp_id(now, self.records.iter().map(|r| r.id.as_str())),
            subject: format!("Subject for {}", payload.class_name),
            date: payload.display_date(),
            time: payload.display_time(),
            class_name: payload.class_name,
            status: AttendanceStatus::Present,
            marked_at: Some(now),
        };
        self.records.insert(0, record.clone());
        Ok(record)
    }

    pub fn summary(&self) -> AttendanceSummary {
        let total = self.records.len();
        let present = self.records.iter().filter(|r| r.is_present()).count();
        AttendanceSummary {
            total,
            present,
            absent: total - present,
            percentage: attendance_percentage(present, total),
        }
    }
}
