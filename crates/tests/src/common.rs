use chrono::{DateTime, Duration, TimeZone, Utc};
use shared_types::{login, AppState, LoginForm, Role, SessionForm, User};

/// Fixed clock for deterministic ids and timestamps.
pub fn clock() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 16, 9, 0, 0).unwrap()
}

/// `clock()` advanced by `minutes`.
pub fn later(minutes: i64) -> DateTime<Utc> {
    clock() + Duration::minutes(minutes)
}

pub fn login_form(role: Option<Role>, email: &str, password: &str) -> LoginForm {
    LoginForm {
        role,
        email: email.to_string(),
        password: password.to_string(),
    }
}

/// Run the mock login and feed the result to a fresh controller state,
/// the way the login screen does after its delay.
pub fn signed_in(role: Role, email: &str) -> (AppState, User) {
    let user = login(&login_form(Some(role), email, "secret")).unwrap();
    let mut state = AppState::new();
    state.complete_login(user.clone());
    (state, user)
}

pub fn session_form(class_name: &str, subject: &str, date: &str, time: &str) -> SessionForm {
    SessionForm {
        class_name: class_name.to_string(),
        subject: subject.to_string(),
        date: date.to_string(),
        time: time.to_string(),
    }
}
