//! Assistant panel on the dashboard home: start a new search or reopen a past one.

use api::{leads, Backend, Notice, Notify};
use dioxus::prelude::*;

use crate::icons::{FaRobot, FaXmark};
use crate::notices::use_notices;
use crate::repo::{use_backend, use_lead_cache};
use crate::spinner::LoadingSpinner;
use crate::Icon;

#[component]
pub fn Chatbot(on_close: EventHandler<()>) -> Element {
    let backend = use_backend();
    let cache = use_lead_cache();
    let mut notices = use_notices();
    let nav = use_navigator();
    let mut suggestions = use_signal(|| Option::<Vec<String>>::None);
    let mut busy = use_signal(|| false);

    let find_more = {
        let backend = backend.clone();
        move |_| {
            let backend = backend.clone();
            spawn(async move {
                busy.set(true);
                match backend.existing_queries().await {
                    Ok(list) => suggestions.set(Some(list)),
                    Err(e) => {
                        tracing::error!("Error fetching suggestions: {e}");
                        notices.notify(Notice::error("Error", "Failed to fetch suggestions"));
                    }
                }
                busy.set(false);
            });
        }
    };

    let pick = use_callback(move |value: String| {
        let backend = backend.clone();
        let cache = cache.clone();
        spawn(async move {
            busy.set(true);
            match leads::load_existing_query(&backend, &cache, &value).await {
                Ok(_) => {
                    nav.push("/dashboard/lead-management");
                }
                Err(e) => {
                    tracing::error!("Error fetching leads: {e}");
                    notices.notify(Notice::error("Error", "Failed to fetch leads for this category"));
                }
            }
            busy.set(false);
        });
    });

    rsx! {
        div {
            class: "card chatbot",
            div {
                class: "chatbot-head",
                Icon { icon: FaRobot, width: 16, height: 16 }
                h3 { "AI Assistant" }
                button {
                    class: "btn btn-ghost btn-sm",
                    onclick: move |_| on_close.call(()),
                    Icon { icon: FaXmark, width: 12, height: 12 }
                }
            }
            p { class: "small muted", "Hello! I'm here to help you find leads and grow your business. What would you like to do?" }

            if busy() {
                LoadingSpinner {}
            }

            {match suggestions() {
                None => rsx! {
                    div {
                        class: "chatbot-actions",
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| {
                                nav.push("/dashboard/lead-generation");
                            },
                            "New Lead"
                        }
                        button {
                            class: "btn btn-outline",
                            onclick: find_more,
                            "Find More Clients"
                        }
                    }
                },
                Some(list) => rsx! {
                    p { class: "small muted", "Select a category to find existing leads:" }
                    div {
                        class: "chatbot-suggestions",
                        if list.is_empty() {
                            p { class: "small muted", "No previous searches yet." }
                        }
                        for suggestion in list {
                            button {
                                key: "{suggestion}",
                                class: "btn btn-outline btn-block",
                                onclick: {
                                    let suggestion = suggestion.clone();
                                    move |_| pick.call(suggestion.clone())
                                },
                                "{suggestion}"
                            }
                        }
                    }
                    button {
                        class: "btn btn-ghost btn-sm",
                        onclick: move |_| suggestions.set(None),
                        "Back to main menu"
                    }
                },
            }}
        }
    }
}
