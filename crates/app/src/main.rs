use dioxus::prelude::*;

mod config;
mod controller;
mod delay;
mod field_errors;
mod format_helpers;
mod role_gate;
mod routes;

use controller::Controller;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    config::init();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(Controller::new);

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        shared_ui::ToastProvider {
            routes::Shell {}
        }
    }
}
