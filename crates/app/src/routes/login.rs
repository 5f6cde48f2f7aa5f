use crate::config;
use crate::controller::use_controller;
use crate::delay::sleep_ms;
use crate::field_errors::{field_error, FieldErrors};
use dioxus::prelude::*;
use shared_types::{login, LoginForm, Role};
use shared_ui::{
    described, use_toast, Button, Card, CardContent, CardDescription, CardHeader, CardTitle,
    Input,
};

/// Role picker plus mock credential form.
#[component]
pub fn Login() -> Element {
    let mut controller = use_controller();
    let toast = use_toast();
    let mut role = use_signal(|| Option::<Role>::None);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut loading = use_signal(|| false);
    let mut field_errors = use_signal(FieldErrors::new);

    let handle_login = move |evt: FormEvent| async move {
        evt.prevent_default();
        if loading() {
            return;
        }

        let form = LoginForm {
            role: role(),
            email: email(),
            password: password(),
        };
        let user = match login(&form) {
            Ok(user) => user,
            Err(e) => {
                tracing::debug!(error = %e, "login rejected");
                toast.error("Error".to_string(), described(e.message));
                field_errors.set(e.field_errors);
                return;
            }
        };
        field_errors.set(FieldErrors::new());

        loading.set(true);
        sleep_ms(config::get().login.delay_ms).await;
        loading.set(false);

        toast.success(
            "Login Successful".to_string(),
            described(format!("Welcome back, {}!", user.name)),
        );
        controller.complete_login(user);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "login-page",
            div { class: "login-intro",
                h1 { "Welcome to QR Attendance" }
                p { "Please select your role and sign in to continue" }
            }

            div { class: "login-grid",
                Card {
                    CardHeader {
                        CardTitle { "Select Your Role" }
                        CardDescription { "Choose the role that best describes you" }
                    }
                    CardContent {
                        div { class: "role-options", role: "radiogroup",
                            for option in Role::ALL {
                                button {
                                    key: "{option.as_str()}",
                                    class: "role-option",
                                    r#type: "button",
                                    role: "radio",
                                    "data-role": option.as_str(),
                                    "aria-checked": role() == Some(option),
                                    onclick: move |_: MouseEvent| role.set(Some(option)),
                                    span { class: "role-option-title", "{option.title()}" }
                                    span { class: "role-option-description", "{option.description()}" }
                                }
                            }
                        }
                        if let Some(err) = field_errors().get("role") {
                            p { class: "login-field-error", "{err}" }
                        }
                    }
                }

                Card {
                    CardHeader {
                        CardTitle { "Sign In" }
                        CardDescription { "Enter your credentials to access the system" }
                    }
                    CardContent {
                        form { class: "login-form", onsubmit: handle_login,
                            Input {
                                id: "email",
                                label: "Email",
                                input_type: "email",
                                placeholder: "Enter your email",
                                value: email(),
                                error: field_error(&field_errors.read(), "email"),
                                on_input: move |e: FormEvent| email.set(e.value()),
                            }
                            Input {
                                id: "password",
                                label: "Password",
                                input_type: "password",
                                placeholder: "Enter your password",
                                value: password(),
                                error: field_error(&field_errors.read(), "password"),
                                on_input: move |e: FormEvent| password.set(e.value()),
                            }

                            if let Some(selected) = role() {
                                div { class: "login-role-hint",
                                    "Signing in as: "
                                    strong { "{selected.title()}" }
                                }
                            }

                            Button {
                                button_type: "submit",
                                full_width: true,
                                disabled: loading(),
                                if loading() { "Signing In..." } else { "Sign In" }
                            }
                            p { class: "login-demo-note", "Demo credentials: Use any email and password" }
                        }
                    }
                }
            }
        }
    }
}
