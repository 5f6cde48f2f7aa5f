use crate::{AppError, Role, User};
use serde::{Deserialize, Serialize};

/// Screen selected by the top-level controller.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Home,
    Login,
    Admin,
    Teacher,
    Student,
}

impl View {
    /// Views offered in the header navigation, in display order.
    pub const NAV: [View; 4] = [View::Home, View::Admin, View::Teacher, View::Student];

    pub fn as_str(&self) -> &'static str {
        match self {
            View::Home => "home",
            View::Login => "login",
            View::Admin => "admin",
            View::Teacher => "teacher",
            View::Student => "student",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Login => "Login",
            View::Admin => "Admin",
            View::Teacher => "Teacher",
            View::Student => "Student",
        }
    }

    /// Role a user must hold to see this view. `None` for public views.
    pub fn required_role(&self) -> Option<Role> {
        match self {
            View::Home | View::Login => None,
            View::Admin => Some(Role::Admin),
            View::Teacher => Some(Role::Teacher),
            View::Student => Some(Role::Student),
        }
    }

    /// The dashboard a freshly signed-in user lands on.
    pub fn home_for(role: Role) -> Self {
        match role {
            Role::Admin => View::Admin,
            Role::Teacher => View::Teacher,
            Role::Student => View::Student,
        }
    }
}

/// Render-time decision for a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Render,
    /// A protected view was reached without a session.
    LoginRequired,
    /// The session role does not match the view's role.
    AccessDenied { required: Role, actual: Role },
}

impl Gate {
    pub fn is_render(&self) -> bool {
        matches!(self, Gate::Render)
    }

    /// Express the decision as an error for callers that only care about
    /// the deny message.
    pub fn check(self) -> Result<(), AppError> {
        match self {
            Gate::Render => Ok(()),
            Gate::LoginRequired => Err(AppError::unauthorized("Please sign in to continue")),
            Gate::AccessDenied { required, .. } => Err(AppError::forbidden(format!(
                "You need {} access to view this page",
                required.title()
            ))),
        }
    }
}

/// Decide whether `view` may render for the given session.
pub fn gate(view: View, user: Option<&User>) -> Gate {
    match (view.required_role(), user) {
        (None, _) => Gate::Render,
        (Some(_), None) => Gate::LoginRequired,
        (Some(required), Some(user)) if user.role == required => Gate::Render,
        (Some(required), Some(user)) => Gate::AccessDenied {
            required,
            actual: user.role,
        },
    }
}

/// Session and current view, owned by the single top-level controller.
///
/// Screens read projections of this state and request changes through
/// [`AppState::navigate`], [`AppState::complete_login`] and
/// [`AppState::logout`]; they never hold a mutable reference to it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    user: Option<User>,
    view: View,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Handle a navigation request and return the view actually entered.
    ///
    /// Without a session every view except `Home` lands on `Login`. With a
    /// session the requested view is entered as-is (role mismatches are
    /// handled by [`AppState::gate`] at render time), except `Login`, which
    /// redirects to the user's own dashboard.
    pub fn navigate(&mut self, requested: View) -> View {
        self.view = match (&self.user, requested) {
            (None, View::Home) => View::Home,
            (None, _) => View::Login,
            (Some(user), View::Login) => View::home_for(user.role),
            (Some(_), view) => view,
        };
        self.view
    }

    /// Store the signed-in user and switch to their dashboard.
    pub fn complete_login(&mut self, user: User) -> View {
        self.view = View::home_for(user.role);
        self.user = Some(user);
        self.view
    }

    /// Drop the session and return to `Home`. Returns the user that was
    /// signed in, if any.
    pub fn logout(&mut self) -> Option<User> {
        self.view = View::Home;
        self.user.take()
    }

    /// Gate decision for the current view.
    pub fn gate(&self) -> Gate {
        gate(self.view, self.user.as_ref())
    }
}
