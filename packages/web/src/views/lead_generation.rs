//! Describe a target market and generate leads for it.

use api::{credits, leads, Notice, Notify};
use dioxus::prelude::*;
use ui::icons::FaMagnifyingGlass;
use ui::{use_backend, use_credits, use_lead_cache, use_notices, Icon, LoadingSpinner};

use crate::Route;

const SUGGESTIONS: [&str; 6] = [
    "AI tool for financial data analysis in US banks",
    "CRM software for healthcare institutions",
    "HR management system for tech companies",
    "Marketing automation platform for e-commerce",
    "Project management tool for consulting firms",
    "Customer support software for SaaS companies",
];

#[component]
pub fn LeadGeneration() -> Element {
    let backend = use_backend();
    let cache = use_lead_cache();
    let mut credit_state = use_credits();
    let mut notices = use_notices();
    let nav = use_navigator();
    let mut content = use_signal(String::new);
    let mut loading = use_signal(|| false);

    let generate = move |_| {
        let text = content();
        if text.trim().is_empty() {
            notices.notify(Notice::error("Error", "Please describe your target market"));
            return;
        }
        if *loading.peek() {
            return;
        }
        loading.set(true);
        let backend = backend.clone();
        let cache = cache.clone();
        spawn(async move {
            if !credits::ensure_credits(&backend, &mut credit_state, &mut notices).await {
                loading.set(false);
                return;
            }
            let result = leads::generate_leads(&backend, &cache, &text).await;
            loading.set(false);
            match result {
                Ok(batch) => {
                    notices.notify(Notice::success(
                        "Success!",
                        format!("Generated {} high-quality leads", batch.len()),
                    ));
                    nav.push(Route::LeadManagement {});
                }
                Err(e) => {
                    tracing::error!("Lead generation failed: {e}");
                    notices.notify(Notice::error("Error", e.to_string()));
                }
            }
        });
    };

    if loading() {
        return rsx! { LoadingSpinner { message: "Finding perfect leads for you..." } };
    }

    let locked = credit_state().has_insufficient_credits();

    rsx! {
        div {
            class: "page page-narrow",
            div {
                class: "page-hero",
                Icon { icon: FaMagnifyingGlass, width: 20, height: 20 }
                h1 { "AI Lead Generation" }
                p { class: "muted", "Describe your ideal customer or product, and our AI will find companies that perfectly match your criteria." }
            }

            div {
                class: "card",
                label {
                    class: "field",
                    span { "What product or service are you selling?" }
                    textarea {
                        rows: 4,
                        placeholder: "e.g., AI tool for financial data analysis in US banks",
                        value: "{content}",
                        oninput: move |evt| content.set(evt.value()),
                    }
                }
                button {
                    class: "btn btn-primary btn-block",
                    disabled: locked,
                    onclick: generate,
                    "Generate Leads"
                }
            }

            div {
                class: "card",
                h3 { "Need inspiration?" }
                p { class: "muted small", "Click on any suggestion to get started quickly" }
                div {
                    class: "suggestion-grid",
                    for suggestion in SUGGESTIONS {
                        button {
                            key: "{suggestion}",
                            class: "btn btn-outline suggestion",
                            onclick: move |_| content.set(suggestion.to_string()),
                            "{suggestion}"
                        }
                    }
                }
            }
        }
    }
}
