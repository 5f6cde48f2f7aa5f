use pretty_assertions::assert_eq;
use shared_types::{gate, login, AppErrorKind, AppState, Gate, Role, View};

use crate::common;

#[test]
fn test_unauthenticated_teacher_request_lands_on_login() {
    let mut state = AppState::new();
    assert_eq!(state.navigate(View::Teacher), View::Login);
    assert_eq!(state.gate(), Gate::Render);
}

#[test]
fn test_login_then_logout_round_trip() {
    let mut state = AppState::new();
    state.navigate(View::Teacher);

    let user = login(&common::login_form(
        Some(Role::Teacher),
        "john.smith@school.edu",
        "pw",
    ))
    .unwrap();
    assert_eq!(user.name, "john.smith");
    assert_eq!(state.complete_login(user), View::Teacher);
    assert!(state.is_authenticated());

    let previous = state.logout().unwrap();
    assert_eq!(previous.email, "john.smith@school.edu");
    assert_eq!(state.view(), View::Home);
    assert!(state.user().is_none());

    assert_eq!(state.navigate(View::Teacher), View::Login);
}

#[test]
fn test_each_role_lands_on_its_dashboard() {
    for (role, view) in [
        (Role::Admin, View::Admin),
        (Role::Teacher, View::Teacher),
        (Role::Student, View::Student),
    ] {
        let (state, _) = common::signed_in(role, "someone@school.edu");
        assert_eq!(state.view(), view);
        assert!(state.gate().is_render());
    }
}

#[test]
fn test_student_browsing_other_dashboards_is_denied_inline() {
    let (mut state, user) = common::signed_in(Role::Student, "alice.j@student.edu");

    for view in [View::Admin, View::Teacher] {
        assert_eq!(state.navigate(view), view);
        let decision = state.gate();
        assert_eq!(
            decision,
            Gate::AccessDenied {
                required: view.required_role().unwrap(),
                actual: Role::Student
            }
        );
        assert_eq!(decision.check().unwrap_err().kind, AppErrorKind::Forbidden);
    }

    assert_eq!(state.navigate(View::Student), View::Student);
    assert_eq!(gate(View::Student, Some(&user)), Gate::Render);
}

#[test]
fn test_rejected_login_leaves_state_untouched() {
    let mut state = AppState::new();
    state.navigate(View::Login);
    let before = state.clone();

    let err = login(&common::login_form(None, "a@b.c", "pw")).unwrap_err();
    assert_eq!(err.message, "Please select your role");

    let err = login(&common::login_form(Some(Role::Admin), "a@b.c", "")).unwrap_err();
    assert_eq!(err.message, "Please enter your email and password");
    assert_eq!(err.kind, AppErrorKind::ValidationError);

    assert_eq!(state, before);
}

#[test]
fn test_header_navigation_covers_public_and_role_views() {
    let labels: Vec<&str> = View::NAV.iter().map(|v| v.label()).collect();
    assert_eq!(labels, vec!["Home", "Admin", "Teacher", "Student"]);
}
