use pretty_assertions::assert_eq;
use shared_types::{attendance_percentage, AppErrorKind, AttendanceLog, AttendanceStatus};

use crate::common;

#[test]
fn test_example_token_marks_present() {
    let mut log = AttendanceLog::new();
    let record = log
        .scan_qr_code("CS101_20240115_0900", common::clock())
        .unwrap();

    assert_eq!(record.class_name, "CS101");
    assert_eq!(record.date, "2024-01-15");
    assert_eq!(record.time, "09:00");
    assert_eq!(record.status, AttendanceStatus::Present);
    assert_eq!(record.marked_at, Some(common::clock()));
}

#[test]
fn test_second_scan_of_same_session_is_rejected() {
    let mut log = AttendanceLog::new();
    log.scan_qr_code("PHY100_20240120_0800", common::clock())
        .unwrap();

    let err = log
        .scan_qr_code("PHY100_20240120_0800", common::later(1))
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Conflict);
    assert_eq!(
        err.message,
        "Your attendance for this session has already been recorded"
    );
    assert_eq!(log.records().len(), 1);
}

#[test]
fn test_inputs_without_three_segments_never_add_records() {
    let mut log = AttendanceLog::seeded();
    for raw in ["badformat", "CS101", "CS101_20240115", "A_B_C_D", "_"] {
        let err = log.scan_qr_code(raw, common::clock()).unwrap_err();
        assert_eq!(err.kind, AppErrorKind::BadRequest, "input {raw:?}");
    }
    assert_eq!(log, AttendanceLog::seeded());
}

#[test]
fn test_catching_up_on_an_absence_updates_summary() {
    let mut log = AttendanceLog::seeded();
    assert_eq!(log.summary().percentage, 67);

    let record = log
        .scan_qr_code(" MATH201_20240114_1100 ", common::clock())
        .unwrap();
    assert_eq!(record.subject, "Calculus II");

    let summary = log.summary();
    assert_eq!(summary.present, 3);
    assert_eq!(summary.absent, 0);
    assert_eq!(summary.percentage, 100);
}

#[test]
fn test_new_scans_go_to_the_front_of_history() {
    let mut log = AttendanceLog::seeded();
    log.scan_qr_code("ENG105_20240117_1300", common::clock())
        .unwrap();
    log.scan_qr_code("ART120_20240118_1500", common::later(1))
        .unwrap();

    let classes: Vec<&str> = log.records().iter().map(|r| r.class_name.as_str()).collect();
    assert_eq!(classes, vec!["ART120", "ENG105", "CS101", "MATH201", "CS102"]);
    assert_eq!(log.summary().percentage, attendance_percentage(4, 5));
}

#[test]
fn test_percentage_matches_rounded_ratio() {
    for (present, total) in [(0, 0), (0, 4), (1, 3), (2, 3), (7, 9), (10, 10)] {
        let expected = if total == 0 {
            0
        } else {
            (100.0 * present as f64 / total as f64).round() as u32
        };
        assert_eq!(attendance_percentage(present, total), expected);
    }
}
