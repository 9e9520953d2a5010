//! Dashboard home: balance, feature shortcuts and the assistant.

use dioxus::prelude::*;
use ui::icons::{FaArrowRight, FaBolt, FaCoins, FaRobot};
use ui::{use_auth, use_credits, Chatbot, Icon};

use crate::Route;

const SHORTCUTS: [(&str, &str, Route); 5] = [
    (
        "Generate New Leads",
        "Find your next customers with AI-powered lead generation",
        Route::LeadGeneration {},
    ),
    (
        "Manage Leads",
        "View and organize your existing lead database",
        Route::LeadManagement {},
    ),
    (
        "Enrich Data",
        "Enhance your leads with detailed contact information",
        Route::LeadEnrichment {},
    ),
    (
        "Analyze Competition",
        "Get insights into your competitors' strategies",
        Route::CompetitorAnalysis {},
    ),
    (
        "Bulk Leads",
        "Browse and export the full lead database",
        Route::BulkLeads {},
    ),
];

#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let credits = use_credits();
    let mut show_chatbot = use_signal(|| false);

    let name = auth()
        .user
        .map(|u| u.display_name().to_string())
        .unwrap_or_default();
    let balance = match credits().balance {
        Some(b) => b.to_string(),
        None => "--".to_string(),
    };

    rsx! {
        div {
            class: "page",
            div {
                class: "page-hero",
                Icon { icon: FaBolt, width: 20, height: 20 }
                h1 { "AI-Powered Lead Generation Dashboard" }
                p { class: "muted", "Welcome back, {name}. Transform your business with intelligent lead discovery, enrichment, and management tools." }
            }

            div {
                class: "card stat",
                Icon { icon: FaCoins, width: 18, height: 18 }
                div {
                    p { class: "stat-value", "{balance}" }
                    p { class: "muted small", "Available credits" }
                }
            }

            div {
                class: "shortcut-grid",
                for (title, description, route) in SHORTCUTS.iter() {
                    Link {
                        key: "{title}",
                        class: "card shortcut",
                        to: route.clone(),
                        div {
                            h3 { "{title}" Icon { icon: FaArrowRight, width: 12, height: 12 } }
                            p { class: "muted small", "{description}" }
                        }
                    }
                }
            }

            if show_chatbot() {
                Chatbot { on_close: move |_| show_chatbot.set(false) }
            } else {
                button {
                    class: "btn btn-primary chatbot-toggle",
                    onclick: move |_| show_chatbot.set(true),
                    Icon { icon: FaRobot, width: 16, height: 16 }
                    " Ask the assistant"
                }
            }
        }
    }
}
