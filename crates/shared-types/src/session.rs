use crate::{AppError, Role, User};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Login form state. Any non-empty email/password pair is accepted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Validate)]
pub struct LoginForm {
    #[validate(required(message = "Please select your role"))]
    pub role: Option<Role>,
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Mock authentication.
///
/// Fails when no role is selected or either credential is empty; otherwise
/// returns a user whose name is the email's local part. The password is
/// never checked.
pub fn login(form: &LoginForm) -> Result<User, AppError> {
    if let Err(errors) = form.validate() {
        let message = if form.role.is_none() {
            "Please select your role"
        } else {
            "Please enter your email and password"
        };
        return Err(AppError::from_validation(message, errors));
    }

    match form.role {
        Some(role) => Ok(User::new(form.email.clone(), role)),
        None => Err(AppError::validation(
            "Please select your role",
            Default::default(),
        )),
    }
}
