use dioxus::prelude::*;
use shared_types::{AppState, Gate, User, View};

/// Session and current view, provided once by `App`.
///
/// Screens read the projections below and request changes through the
/// intent methods; the underlying [`AppState`] is never handed out mutably.
#[derive(Clone, Copy)]
pub struct Controller {
    state: Signal<AppState>,
}

impl Controller {
    pub fn new() -> Self {
        Self {
            state: Signal::new(AppState::new()),
        }
    }

    pub fn view(&self) -> View {
        self.state.read().view()
    }

    pub fn current_user(&self) -> Option<User> {
        self.state.read().user().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().is_authenticated()
    }

    pub fn gate(&self) -> Gate {
        self.state.read().gate()
    }

    pub fn navigate(&mut self, requested: View) {
        let entered = self.state.write().navigate(requested);
        if entered == requested {
            tracing::debug!(view = entered.as_str(), "navigated");
        } else {
            tracing::info!(
                requested = requested.as_str(),
                entered = entered.as_str(),
                "navigation redirected"
            );
        }
    }

    pub fn complete_login(&mut self, user: User) {
        let role = user.role;
        let email = user.email.clone();
        let view = self.state.write().complete_login(user);
        tracing::info!(%email, role = role.as_str(), view = view.as_str(), "signed in");
    }

    pub fn logout(&mut self) {
        match self.state.write().logout() {
            Some(user) => tracing::info!(email = %user.email, "signed out"),
            None => tracing::debug!("logout without a session"),
        }
    }
}

pub fn use_controller() -> Controller {
    use_context::<Controller>()
}
