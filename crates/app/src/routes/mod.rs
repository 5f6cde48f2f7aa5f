use crate::controller::use_controller;
use crate::role_gate::RoleGate;
use dioxus::prelude::*;
use shared_types::{Role, View};
use shared_ui::{Badge, BadgeVariant, Button, ButtonSize, ButtonVariant};

mod admin;
mod home;
mod login;
mod student;
mod teacher;

/// Header plus whichever screen the controller has selected.
#[component]
pub fn Shell() -> Element {
    let controller = use_controller();

    let screen = match controller.view() {
        View::Home => rsx! { home::Home {} },
        View::Login => rsx! { login::Login {} },
        View::Admin => rsx! { RoleGate { admin::AdminDashboard {} } },
        View::Teacher => rsx! { RoleGate { teacher::TeacherDashboard {} } },
        View::Student => rsx! { RoleGate { student::StudentDashboard {} } },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./shell.css") }
        div { class: "app-shell",
            AppHeader {}
            main { class: "app-main", {screen} }
        }
    }
}

fn role_badge_variant(role: Role) -> BadgeVariant {
    match role {
        Role::Admin => BadgeVariant::Danger,
        Role::Teacher => BadgeVariant::Info,
        Role::Student => BadgeVariant::Success,
    }
}

fn nav_variant(view: View, current: View) -> ButtonVariant {
    if view == current {
        ButtonVariant::Primary
    } else {
        ButtonVariant::Ghost
    }
}

#[component]
fn AppHeader() -> Element {
    let mut controller = use_controller();
    let current = controller.view();
    let user = controller.current_user();

    rsx! {
        header { class: "app-header",
            div { class: "app-header-inner",
                button {
                    class: "app-brand",
                    r#type: "button",
                    onclick: move |_: MouseEvent| controller.navigate(View::Home),
                    span { class: "app-brand-mark", "QR" }
                    span { class: "app-brand-name", "QR Attendance" }
                }

                nav { class: "app-nav",
                    for view in View::NAV {
                        Button {
                            key: "{view.as_str()}",
                            variant: nav_variant(view, current),
                            size: ButtonSize::Small,
                            onclick: move |_: MouseEvent| controller.navigate(view),
                            "{view.label()}"
                        }
                    }
                }

                div { class: "app-session",
                    if let Some(user) = user {
                        span { class: "app-session-name", "{user.name}" }
                        Badge { variant: role_badge_variant(user.role), "{user.role.title()}" }
                        Button {
                            variant: ButtonVariant::Outline,
                            size: ButtonSize::Small,
                            onclick: move |_: MouseEvent| controller.logout(),
                            "Logout"
                        }
                    } else {
                        Button {
                            size: ButtonSize::Small,
                            onclick: move |_: MouseEvent| controller.navigate(View::Login),
                            "Login"
                        }
                    }
                }
            }
        }
    }
}
