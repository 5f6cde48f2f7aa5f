use dioxus::prelude::*;

/// A single headline number with its caption, used in dashboard stat rows.
#[component]
pub fn StatTile(
    label: String,
    value: String,
    #[props(default)] hint: String,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "stat-tile",
            span { class: "stat-tile-label", "{label}" }
            span { class: "stat-tile-value", "{value}" }
            if !hint.is_empty() {
                span { class: "stat-tile-hint", "{hint}" }
            }
        }
    }
}
