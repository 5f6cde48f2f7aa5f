use crate::format_helpers::{format_date_human, format_marked_at};
use dioxus::prelude::*;
use shared_types::{AppErrorKind, AttendanceLog, AttendanceRecord, AttendanceStatus, StudentProfile};
use shared_ui::{
    described, use_toast, Badge, BadgeVariant, Button, Card, CardContent, CardDescription, CardHeader,
    CardTitle, Input, PageHeader, Progress,
};

/// Toast title for a rejected scan.
fn scan_error_title(kind: AppErrorKind) -> &'static str {
    match kind {
        AppErrorKind::BadRequest => "Invalid QR Code",
        AppErrorKind::Conflict => "Already Marked",
        _ => "Error",
    }
}

fn status_variant(status: AttendanceStatus) -> BadgeVariant {
    match status {
        AttendanceStatus::Present => BadgeVariant::Success,
        AttendanceStatus::Absent => BadgeVariant::Danger,
    }
}

/// Scan QR codes and review attendance.
#[component]
pub fn StudentDashboard() -> Element {
    let toast = use_toast();
    let profile = use_hook(StudentProfile::default);
    let mut log = use_signal(AttendanceLog::seeded);
    let mut qr_input = use_signal(String::new);

    let summary = log.read().summary();
    let records: Vec<AttendanceRecord> = log.read().records().to_vec();

    let handle_scan = move |evt: FormEvent| {
        evt.prevent_default();
        let raw = qr_input();
        let result = log.write().scan_qr_code(&raw, chrono::Utc::now());
        match result {
            Ok(record) => {
                tracing::info!(class = %record.class_name, date = %record.date, "attendance marked");
                toast.success(
                    "Attendance Marked".to_string(),
                    described(format!("Successfully marked present for {}", record.class_name)),
                );
                qr_input.set(String::new());
            }
            Err(e) => {
                tracing::info!(input = %raw.trim(), error = %e, "scan rejected");
                toast.error(scan_error_title(e.kind).to_string(), described(e.message));
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard",
            PageHeader {
                title: "Student Dashboard",
                subtitle: "Scan QR codes to mark attendance",
            }

            div { class: "dashboard-grid dashboard-grid-3",
                Card {
                    CardHeader {
                        CardTitle { "Profile" }
                    }
                    CardContent {
                        dl { class: "profile-list",
                            dt { "Name" }
                            dd { "{profile.name}" }
                            dt { "Student ID" }
                            dd { "{profile.student_id}" }
                            dt { "Email" }
                            dd { "{profile.email}" }
                        }
                    }
                }

                Card {
                    CardHeader {
                        CardTitle { "Scan QR Code" }
                        CardDescription { "Enter or scan QR code to mark attendance" }
                    }
                    CardContent {
                        form { class: "dashboard-form", onsubmit: handle_scan,
                            Input {
                                id: "qrInput",
                                label: "QR Code",
                                placeholder: "Enter QR code (e.g., CS101_20240115_0900)",
                                value: qr_input(),
                                on_input: move |e: FormEvent| qr_input.set(e.value()),
                            }
                            Button { button_type: "submit", full_width: true, "Mark Attendance" }
                            p { class: "dashboard-hint",
                                "Or use your camera to scan QR code displayed by teacher"
                            }
                        }
                    }
                }

                Card {
                    CardHeader {
                        CardTitle { "Attendance Summary" }
                    }
                    CardContent {
                        div { class: "summary",
                            p { class: "summary-label", "Overall Attendance" }
                            p { class: "summary-percentage", "{summary.percentage}%" }
                            Progress {
                                value: f64::from(summary.percentage),
                                label: "Overall attendance",
                            }
                            div { class: "summary-split",
                                div {
                                    p { class: "summary-label", "Present" }
                                    p { class: "summary-count summary-present", "{summary.present}" }
                                }
                                div {
                                    p { class: "summary-label", "Absent" }
                                    p { class: "summary-count summary-absent", "{summary.absent}" }
                                }
                            }
                        }
                    }
                }
            }

            Card { class: "dashboard-section",
                CardHeader {
                    CardTitle { "Attendance History" }
                    CardDescription { "Your recent attendance records" }
                }
                CardContent {
                    if records.is_empty() {
                        p { class: "dashboard-empty", "No attendance records yet" }
                    }
                    ul { class: "dashboard-list",
                        for record in records.iter() {
                            RecordRow { key: "{record.id}", record: record.clone() }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn RecordRow(record: AttendanceRecord) -> Element {
    let marked = record.marked_at.as_ref().map(format_marked_at);

    rsx! {
        li { class: "dashboard-row",
            div { class: "dashboard-row-main",
                span {
                    class: "status-dot",
                    "data-status": record.status.as_str(),
                }
                div {
                    h3 { class: "dashboard-row-title", "{record.class_name}" }
                    p { class: "dashboard-row-sub", "{record.subject}" }
                    div { class: "dashboard-row-meta-group",
                        span { class: "dashboard-row-meta", "{format_date_human(&record.date)}" }
                        span { class: "dashboard-row-meta", "{record.time}" }
                    }
                }
            }
            div { class: "dashboard-row-status",
                Badge { variant: status_variant(record.status), "{record.status.label()}" }
                if let Some(marked) = marked {
                    p { class: "dashboard-row-meta", "Marked: {marked}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_error_titles() {
        assert_eq!(scan_error_title(AppErrorKind::BadRequest), "Invalid QR Code");
        assert_eq!(scan_error_title(AppErrorKind::Conflict), "Already Marked");
        assert_eq!(scan_error_title(AppErrorKind::ValidationError), "Error");
    }

    #[test]
    fn status_badges() {
        assert_eq!(status_variant(AttendanceStatus::Present), BadgeVariant::Success);
        assert_eq!(status_variant(AttendanceStatus::Absent), BadgeVariant::Danger);
    }
}
