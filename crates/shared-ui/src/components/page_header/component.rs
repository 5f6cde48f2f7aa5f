use dioxus::prelude::*;

/// Dashboard heading: title, optional subtitle, and right-aligned actions.
#[component]
pub fn PageHeader(
    title: String,
    #[props(default)] subtitle: String,
    actions: Option<Element>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "page-header",
            div { class: "page-header-text",
                h2 { class: "page-title", "{title}" }
                if !subtitle.is_empty() {
                    p { class: "page-subtitle", "{subtitle}" }
                }
            }
            if let Some(actions) = actions {
                div { class: "page-actions", {actions} }
            }
        }
    }
}
