use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, AttendanceLog, ClassBoard, DEFAULT_CLASS_SIZE};

use crate::common;

#[test]
fn test_generated_code_is_active_and_scannable() {
    let mut board = ClassBoard::seeded(DEFAULT_CLASS_SIZE);
    let session = board
        .generate_qr_code(
            &common::session_form("CS201", "Algorithms", "2024-02-01", "10:30 AM"),
            common::clock(),
        )
        .unwrap();

    assert_eq!(session.qr_code, "CS201_20240201_1030AM");
    assert_eq!(board.active_qr(), Some("CS201_20240201_1030AM"));

    let mut log = AttendanceLog::new();
    let record = log.scan_qr_code(&session.qr_code, common::later(5)).unwrap();
    assert_eq!(record.class_name, "CS201");
    assert_eq!(record.date, "2024-02-01");
    assert_eq!(record.time, "10:30");
}

#[test]
fn test_time_input_value_encodes_without_colon() {
    let mut board = ClassBoard::default();
    let session = board
        .generate_qr_code(
            &common::session_form("BIO110", "Biology", "2024-03-09", "14:45"),
            common::clock(),
        )
        .unwrap();
    assert_eq!(session.qr_code, "BIO110_20240309_1445");
}

#[test]
fn test_switching_between_sessions() {
    let mut board = ClassBoard::seeded(DEFAULT_CLASS_SIZE);
    board
        .generate_qr_code(
            &common::session_form("CS201", "Algorithms", "2024-02-01", "10:30"),
            common::clock(),
        )
        .unwrap();

    assert_eq!(board.activate_qr("CS101_20240115_0900"), Ok(true));
    assert_eq!(
        board.active_session().map(|s| s.subject.as_str()),
        Some("Introduction to Programming")
    );
    assert_eq!(board.deactivate_qr().as_deref(), Some("CS101_20240115_0900"));
    assert_eq!(board.deactivate_qr(), None);

    let err = board.activate_qr("MISSING_20240101_0000").unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
}

#[test]
fn test_two_sessions_in_one_millisecond_get_distinct_ids() {
    let mut board = ClassBoard::default();
    let form = common::session_form("CS201", "Algorithms", "2024-02-01", "10:30");
    let first = board.generate_qr_code(&form, common::clock()).unwrap();
    let second = board.generate_qr_code(&form, common::clock()).unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(board.stats().sessions, 2);
    assert_eq!(board.stats().total_students, 2 * DEFAULT_CLASS_SIZE);
}
