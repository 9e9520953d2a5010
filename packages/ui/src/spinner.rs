use dioxus::prelude::*;

/// Full-screen spinner shown while a request is in flight. It covers the page, so the
/// control that started the request can not be pressed again.
#[component]
pub fn LoadingSpinner(#[props(default)] message: Option<String>) -> Element {
    rsx! {
        div {
            class: "spinner-overlay",
            div { class: "spinner" }
            if let Some(message) = message {
                p { class: "spinner-message", "{message}" }
            }
        }
    }
}
