use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::warn!("No route for {path}");

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "card auth-card center",
                h1 { "404" }
                p { class: "muted", "Oops! Page not found" }
                p { class: "small muted", "{path}" }
                Link { class: "btn btn-primary", to: Route::Landing {}, "Return to Home" }
            }
        }
    }
}
