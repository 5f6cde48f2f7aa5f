use crate::config;
use crate::field_errors::{field_error, FieldErrors};
use crate::format_helpers::format_date_human;
use dioxus::prelude::*;
use shared_types::{ClassBoard, ClassSession, SessionForm};
use shared_ui::{
    described, use_toast, Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, CardContent,
    CardDescription, CardHeader, CardTitle, Input, PageHeader, StatTile,
};

/// Generate and activate class-session QR codes.
#[component]
pub fn TeacherDashboard() -> Element {
    let toast = use_toast();
    let mut board = use_signal(|| ClassBoard::seeded(config::get().teacher.default_class_size));
    let mut form = use_signal(SessionForm::default);
    let mut field_errors = use_signal(FieldErrors::new);

    let stats = board.read().stats();
    let sessions: Vec<ClassSession> = board.read().sessions().to_vec();
    let active_qr = board.read().active_qr().map(str::to_string);
    let active_session = board.read().active_session().cloned();
    let active_label = if active_qr.is_some() { "Live" } else { "None" };

    let handle_generate = move |evt: FormEvent| {
        evt.prevent_default();
        let submitted = form();
        match board.write().generate_qr_code(&submitted, chrono::Utc::now()) {
            Ok(session) => {
                tracing::info!(qr = %session.qr_code, class = %session.class_name, "QR code generated");
                toast.success(
                    "Success".to_string(),
                    described("QR Code generated successfully for class session"),
                );
                form.set(SessionForm::default());
                field_errors.set(FieldErrors::new());
            }
            Err(e) => {
                tracing::debug!(error = %e, "session form rejected");
                toast.error("Error".to_string(), described(e.message));
                field_errors.set(e.field_errors);
            }
        }
    };

    let handle_activate = move |qr_code: String| {
        let result = board.write().activate_qr(&qr_code);
        match result {
            Ok(true) => {
                tracing::info!(qr = %qr_code, "QR code activated");
                toast.success(
                    "QR Code Activated".to_string(),
                    described("Students can now scan the QR code to mark attendance"),
                );
            }
            Ok(false) => {}
            Err(e) => {
                tracing::warn!(error = %e, "activation failed");
                toast.error("Error".to_string(), described(e.message));
            }
        }
    };

    let handle_deactivate = move |_: MouseEvent| {
        if let Some(qr_code) = board.write().deactivate_qr() {
            tracing::info!(qr = %qr_code, "QR code deactivated");
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard",
            PageHeader {
                title: "Teacher Dashboard",
                subtitle: "Generate QR codes and manage class attendance",
            }

            div { class: "stat-row",
                StatTile { label: "Class Sessions", value: stats.sessions.to_string() }
                StatTile {
                    label: "Students Present",
                    value: stats.students_present.to_string(),
                    hint: format!("of {} enrolled", stats.total_students),
                }
                StatTile {
                    label: "Active QR Code",
                    value: active_label,
                }
            }

            div { class: "dashboard-grid",
                Card {
                    CardHeader {
                        CardTitle { "Generate QR Code" }
                        CardDescription { "Create a new QR code for class attendance" }
                    }
                    CardContent {
                        form { class: "dashboard-form", onsubmit: handle_generate,
                            Input {
                                id: "className",
                                label: "Class Name",
                                placeholder: "e.g., CS101, MATH201",
                                value: form.read().class_name.clone(),
                                error: field_error(&field_errors.read(), "class_name"),
                                on_input: move |e: FormEvent| form.write().class_name = e.value(),
                            }
                            Input {
                                id: "subject",
                                label: "Subject",
                                placeholder: "e.g., Introduction to Programming",
                                value: form.read().subject.clone(),
                                error: field_error(&field_errors.read(), "subject"),
                                on_input: move |e: FormEvent| form.write().subject = e.value(),
                            }
                            div { class: "dashboard-form-pair",
                                Input {
                                    id: "date",
                                    label: "Date",
                                    input_type: "date",
                                    value: form.read().date.clone(),
                                error: field_error(&field_errors.read(), "date"),
                                    on_input: move |e: FormEvent| form.write().date = e.value(),
                                }
                                Input {
                                    id: "time",
                                    label: "Time",
                                    input_type: "time",
                                    value: form.read().time.clone(),
                                error: field_error(&field_errors.read(), "time"),
                                    on_input: move |e: FormEvent| form.write().time = e.value(),
                                }
                            }
                            Button { button_type: "submit", full_width: true, "Generate QR Code" }
                        }
                    }
                }

                if let Some(code) = active_qr.clone() {
                    Card { class: "active-qr",
                        CardHeader {
                            CardTitle { "Active QR Code" }
                            CardDescription { "Students can scan this QR code to mark attendance" }
                        }
                        CardContent {
                            div { class: "active-qr-frame",
                                p { class: "active-qr-code", "{code}" }
                            }
                            if let Some(session) = active_session {
                                p { class: "active-qr-session",
                                    "{session.class_name} · {session.subject}"
                                }
                            }
                            p { class: "dashboard-hint", "Show this QR code to students for attendance" }
                            Button {
                                variant: ButtonVariant::Outline,
                                onclick: handle_deactivate,
                                "Deactivate QR Code"
                            }
                        }
                    }
                }
            }

            Card { class: "dashboard-section",
                CardHeader {
                    CardTitle { "Class Sessions" }
                    CardDescription { "View and manage your class sessions" }
                }
                CardContent {
                    ul { class: "dashboard-list",
                        for session in sessions {
                            SessionRow {
                                key: "{session.id}",
                                active: active_qr.as_deref() == Some(session.qr_code.as_str()),
                                session: session.clone(),
                                on_activate: handle_activate,
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SessionRow(session: ClassSession, active: bool, on_activate: EventHandler<String>) -> Element {
    let qr_code = session.qr_code.clone();

    rsx! {
        li { class: "dashboard-row",
            div { class: "dashboard-row-main",
                div {
                    h3 { class: "dashboard-row-title", "{session.class_name}" }
                    p { class: "dashboard-row-sub", "{session.subject}" }
                }
                div { class: "dashboard-row-meta-group",
                    span { class: "dashboard-row-meta", "{format_date_human(&session.date)}" }
                    span { class: "dashboard-row-meta", "{session.time}" }
                    span { class: "dashboard-row-meta",
                        "{session.students_present}/{session.total_students}"
                    }
                }
            }
            div { class: "dashboard-row-actions",
                if active {
                    Badge { variant: BadgeVariant::Success, "Live" }
                }
                Button {
                    variant: ButtonVariant::Outline,
                    size: ButtonSize::Small,
                    disabled: active,
                    onclick: move |_: MouseEvent| on_activate.call(qr_code.clone()),
                    if active { "Active" } else { "Activate QR" }
                }
            }
        }
    }
}
