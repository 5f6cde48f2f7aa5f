use pretty_assertions::assert_eq;
use shared_types::{AccountType, AppErrorKind, DirectoryStats, NewUserForm, UserDirectory, UserKind};

use crate::common;

fn new_user(name: &str, email: &str, account_type: AccountType) -> NewUserForm {
    NewUserForm {
        name: name.to_string(),
        email: email.to_string(),
        account_type,
        ..Default::default()
    }
}

#[test]
fn test_add_and_delete_keep_stats_in_sync() {
    let mut dir = UserDirectory::seeded();

    let mut teacher = new_user("Grace Hopper", "grace@school.edu", AccountType::Teacher);
    teacher.department = "Mathematics".to_string();
    let grace = dir.add_user(&teacher, common::clock()).unwrap();

    let student = new_user("Dan Brown", "dan@student.edu", AccountType::Student);
    let dan = dir.add_user(&student, common::later(1)).unwrap();

    assert_eq!(
        dir.stats(),
        DirectoryStats {
            total: 5,
            teachers: 2,
            students: 3
        }
    );
    assert_eq!(dir.teachers().last().map(|u| u.id.as_str()), Some(grace.id.as_str()));
    assert_eq!(dan.kind, UserKind::Student { student_id: None });

    dir.delete_user(&grace.id).unwrap();
    dir.delete_user("1").unwrap();
    assert_eq!(dir.stats().teachers, 0);
    assert_eq!(dir.stats().total, 3);
}

#[test]
fn test_teacher_without_department_is_stored_as_teacher() {
    let mut dir = UserDirectory::new();
    let user = dir
        .add_user(
            &new_user("Ada", "ada@school.edu", AccountType::Teacher),
            common::clock(),
        )
        .unwrap();

    assert!(user.is_teacher());
    assert_eq!(user.kind.detail(), None);
    assert_eq!(user.id, common::clock().timestamp_millis().to_string());
}

#[test]
fn test_rejected_add_reports_missing_fields() {
    let mut dir = UserDirectory::seeded();
    let err = dir
        .add_user(&NewUserForm::default(), common::clock())
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert_eq!(err.message, "Please fill in all required fields");
    assert!(err.has_field_error("name"));
    assert!(err.has_field_error("email"));
    assert_eq!(dir, UserDirectory::seeded());
}

#[test]
fn test_deleting_twice_is_harmless() {
    let mut dir = UserDirectory::seeded();
    assert!(dir.delete_user("3").is_some());
    let after_first = dir.clone();
    assert!(dir.delete_user("3").is_none());
    assert_eq!(dir, after_first);
}

#[test]
fn test_directory_serializes_in_ui_shape() {
    let dir = UserDirectory::seeded();
    let json = serde_json::to_value(dir.users()).unwrap();
    assert_eq!(json[0]["type"], "teacher");
    assert_eq!(json[0]["department"], "Computer Science");
    assert_eq!(json[2]["studentId"], "CS2024002");
}
