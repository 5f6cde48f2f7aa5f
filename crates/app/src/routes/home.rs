use crate::controller::use_controller;
use dioxus::prelude::*;
use shared_types::View;
use shared_ui::{Button, Card, CardContent, CardDescription, CardHeader, CardTitle};

const HIGHLIGHTS: [(&str, &str); 3] = [
    ("99.9%", "Accuracy Rate"),
    ("85%", "Time Saved"),
    ("100%", "Digital"),
];

const FEATURES: [(&str, &str); 4] = [
    (
        "Time Efficient",
        "Quick QR code scanning reduces attendance time from minutes to seconds",
    ),
    (
        "Highly Secure",
        "Unique QR codes prevent proxy attendance and ensure data integrity",
    ),
    (
        "Real-time Analytics",
        "Instant attendance data with comprehensive reporting and insights",
    ),
    (
        "Multi-user Support",
        "Separate interfaces for admins, teachers, and students",
    ),
];

const STEPS: [(&str, &str); 3] = [
    (
        "Generate QR Code",
        "Teacher generates unique QR code for each class session",
    ),
    (
        "Students Scan",
        "Students scan QR code using their mobile devices",
    ),
    (
        "Instant Recording",
        "Attendance is automatically recorded in real-time",
    ),
];

/// Public landing page.
#[component]
pub fn Home() -> Element {
    let mut controller = use_controller();
    let cta = if controller.is_authenticated() {
        "Open Dashboard"
    } else {
        "Get Started"
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./home.css") }
        div { class: "home",
            section { class: "home-hero",
                div { class: "home-hero-mark", "QR" }
                h1 { class: "home-title",
                    "QR Code Based"
                    span { class: "home-title-accent", "Attendance System" }
                }
                p { class: "home-lead",
                    "Modern, efficient, and secure attendance tracking system using QR codes. "
                    "Eliminate manual processes and embrace digital transformation in education."
                }
                div { class: "home-highlights",
                    for (value, label) in HIGHLIGHTS {
                        div { key: "{label}", class: "home-highlight",
                            span { class: "home-highlight-value", "{value}" }
                            span { class: "home-highlight-label", "{label}" }
                        }
                    }
                }
                Button {
                    class: "home-cta",
                    onclick: move |_: MouseEvent| controller.navigate(View::Login),
                    "{cta}"
                }
            }

            section { class: "home-section",
                h2 { class: "home-section-title", "System Features" }
                p { class: "home-section-lead",
                    "Comprehensive attendance management with modern technology"
                }
                div { class: "home-features",
                    for (title, description) in FEATURES {
                        Card { key: "{title}", class: "home-feature",
                            CardHeader {
                                CardTitle { "{title}" }
                            }
                            CardContent {
                                CardDescription { "{description}" }
                            }
                        }
                    }
                }
            }

            section { class: "home-section",
                h2 { class: "home-section-title", "How It Works" }
                p { class: "home-section-lead", "Simple three-step process" }
                ol { class: "home-steps",
                    for (index, (title, description)) in STEPS.into_iter().enumerate() {
                        li { key: "{title}", class: "home-step",
                            span { class: "home-step-number", "{index + 1}" }
                            h3 { "{title}" }
                            p { "{description}" }
                        }
                    }
                }
            }
        }
    }
}
