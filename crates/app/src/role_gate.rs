use crate::controller::use_controller;
use dioxus::prelude::*;
use shared_types::{Gate, View};
use shared_ui::{Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle};

/// Render `children` only when the current view's role matches the session.
///
/// A missing session shows a sign-in prompt; a wrong role shows
/// "Access Denied" in place of the screen.
#[component]
pub fn RoleGate(children: Element) -> Element {
    let mut controller = use_controller();
    let gate = controller.gate();

    let (title, target, action) = match gate {
        Gate::Render => return rsx! { {children} },
        Gate::LoginRequired => ("Sign In Required", View::Login, "Sign In"),
        Gate::AccessDenied { required, actual } => {
            tracing::warn!(
                view = controller.view().as_str(),
                required = required.as_str(),
                actual = actual.as_str(),
                "access denied"
            );
            ("Access Denied", View::Home, "Back to Home")
        }
    };
    let detail = gate.check().err().map(|e| e.message).unwrap_or_default();

    rsx! {
        div { class: "access-denied",
            Card {
                CardHeader {
                    CardTitle { "{title}" }
                    CardDescription { "{detail}" }
                }
                CardContent {
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_: MouseEvent| controller.navigate(target),
                        "{action}"
                    }
                }
            }
        }
    }
}
