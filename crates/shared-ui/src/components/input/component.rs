use dioxus::prelude::*;

/// Single-line text input with an optional label and inline error.
///
/// `id` ties the `<label>` to the `<input>`; pass one whenever `label` is set.
#[component]
pub fn Input(
    #[props(default)] id: String,
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default = "text".to_string())] input_type: String,
    /// Inline validation message; empty when the field is valid.
    #[props(default)]
    error: String,
    #[props(default = false)] disabled: bool,
) -> Element {
    let invalid = !error.is_empty();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "input-field",
            if !label.is_empty() {
                label { class: "input-label", r#for: "{id}", "{label}" }
            }
            input {
                class: "input",
                id: "{id}",
                r#type: "{input_type}",
                value: value,
                placeholder: placeholder,
                disabled: disabled,
                "aria-invalid": invalid,
                oninput: move |evt| on_input.call(evt),
            }
            if invalid {
                span { class: "input-error", "{error}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn error_message_renders_under_the_field() {
        let html = render(|| rsx! { Input { id: "email", label: "Email", error: "Email is required" } });
        assert!(html.contains("Email is required"), "{html}");
        assert!(html.contains(r#"aria-invalid="true""#), "{html}");
    }

    #[test]
    fn valid_field_has_no_error_text() {
        let html = render(|| rsx! { Input { id: "email", label: "Email" } });
        assert!(!html.contains("input-error"), "{html}");
    }
}
