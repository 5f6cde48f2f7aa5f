use dioxus::prelude::*;

/// Clamp a percentage into `0..=100`.
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 100.0)
}

/// Horizontal bar filled to `value` percent.
#[component]
pub fn Progress(
    value: f64,
    #[props(default)] label: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let pct = clamp_percent(value);
    let base = vec![Attribute::new("class", "progress", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            role: "progressbar",
            "aria-valuemin": "0",
            "aria-valuemax": "100",
            "aria-valuenow": "{pct}",
            "aria-label": "{label}",
            ..merged,
            div { class: "progress-indicator", style: "width: {pct}%;" }
        }
    }
}
