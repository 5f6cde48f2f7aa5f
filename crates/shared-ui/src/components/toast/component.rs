use std::time::Duration;

use dioxus::prelude::*;
use dioxus_primitives::toast as prim;

pub use dioxus_primitives::toast::{use_toast, ToastOptions};

/// Toasts kept on screen at once; older ones are dropped first.
pub const MAX_VISIBLE: usize = 3;

/// How long a toast stays up before dismissing itself.
pub const DISMISS_AFTER: Duration = Duration::from_secs(4);

/// Options for a toast carrying a second line of detail.
pub fn described(description: impl Into<String>) -> ToastOptions {
    ToastOptions::new().description(description.into())
}

/// Hosts the toast stack; wrap the whole app in it once.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::ToastProvider {
            default_duration: Some(DISMISS_AFTER),
            max_toasts: MAX_VISIBLE,
            render_toast: move |props: prim::ToastProps| rsx! { Toast { ..props } },
            {children}
        }
    }
}

#[component]
pub fn Toast(mut props: prim::ToastProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "toast", None, false));

    rsx! {
        prim::Toast { ..props }
    }
}
