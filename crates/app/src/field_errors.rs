use std::collections::HashMap;

/// Per-field validation messages keyed by form field name.
pub type FieldErrors = HashMap<String, String>;

/// Message to show under `field`, or an empty string when it passed.
pub fn field_error(errors: &FieldErrors, field: &str) -> String {
    errors.get(field).cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::{login, AccountType, LoginForm, NewUserForm, Role, SessionForm, UserDirectory};

    #[test]
    fn rejected_login_reports_each_empty_field() {
        let form = LoginForm {
            role: Some(Role::Teacher),
            email: String::new(),
            password: String::new(),
        };
        let errors = login(&form).unwrap_err().field_errors;
        assert_eq!(field_error(&errors, "email"), "Email is required");
        assert_eq!(field_error(&errors, "password"), "Password is required");
        assert_eq!(field_error(&errors, "role"), "");
    }

    #[test]
    fn missing_role_is_shown_on_the_role_picker() {
        let errors = login(&LoginForm::default()).unwrap_err().field_errors;
        assert_eq!(field_error(&errors, "role"), "Please select your role");
    }

    #[test]
    fn rejected_new_user_marks_only_the_blank_field() {
        let form = NewUserForm {
            name: "Dr. Ada Byron".into(),
            email: String::new(),
            account_type: AccountType::Teacher,
            ..Default::default()
        };
        let errors = UserDirectory::new()
            .add_user(&form, chrono::Utc::now())
            .unwrap_err()
            .field_errors;
        assert_eq!(field_error(&errors, "email"), "Email is required");
        assert_eq!(field_error(&errors, "name"), "");
    }

    #[test]
    fn rejected_session_form_names_missing_fields() {
        let form = SessionForm {
            class_name: "CS101".into(),
            ..Default::default()
        };
        let errors = shared_types::ClassBoard::new(30)
            .generate_qr_code(&form, chrono::Utc::now())
            .unwrap_err()
            .field_errors;
        assert_eq!(field_error(&errors, "class_name"), "");
        assert_eq!(field_error(&errors, "subject"), "Subject is required");
        assert_eq!(field_error(&errors, "date"), "Date is required");
        assert_eq!(field_error(&errors, "time"), "Time is required");
    }

    #[test]
    fn empty_map_yields_empty_messages() {
        assert_eq!(field_error(&FieldErrors::new(), "email"), "");
    }
}
