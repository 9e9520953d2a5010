//! Public marketing page.

use dioxus::prelude::*;
use ui::icons::{FaArrowRight, FaBolt};
use ui::{use_auth, Icon};

use crate::Route;

const FEATURES: [(&str, &str); 6] = [
    (
        "AI Marketing Intelligence",
        "Leverage advanced AI to discover high-intent prospects and uncover market opportunities with precision",
    ),
    (
        "Smart Contact Enrichment",
        "Automatically enrich contact profiles with comprehensive business intelligence and verified information",
    ),
    (
        "Competitive Intelligence",
        "Monitor competitors, analyze market positioning, and identify strategic opportunities in real-time",
    ),
    (
        "Advanced Analytics Dashboard",
        "Make data-driven decisions with comprehensive performance metrics and predictive insights",
    ),
    (
        "Automated Lead Nurturing",
        "Scale your outreach with intelligent automation and personalized engagement sequences",
    ),
    (
        "Enterprise Security",
        "Bank-level security with GDPR compliance and SOC 2 Type II certification for data protection",
    ),
];

#[component]
pub fn Landing() -> Element {
    let auth = use_auth();
    let signed_in = auth().user.is_some();
    let start = if signed_in {
        Route::Dashboard {}
    } else {
        Route::Register {}
    };

    rsx! {
        div {
            class: "landing",
            header {
                class: "landing-nav",
                span { class: "brand strong", "MarkAssist by TaskForge" }
                div {
                    class: "toolbar",
                    if signed_in {
                        Link { class: "btn btn-primary", to: Route::Dashboard {}, "Open Dashboard" }
                    } else {
                        Link { class: "btn btn-ghost", to: Route::Login {}, "Sign In" }
                        Link { class: "btn btn-primary", to: Route::Register {}, "Get Started" }
                    }
                }
            }

            section {
                class: "landing-hero",
                Icon { icon: FaBolt, width: 28, height: 28 }
                h1 { "AI-Powered Marketing Intelligence Platform" }
                p { class: "muted", "Generate, enrich and reach the right leads in minutes instead of weeks." }
                Link {
                    class: "btn btn-primary",
                    to: start,
                    "Start Generating Leads "
                    Icon { icon: FaArrowRight, width: 12, height: 12 }
                }
            }

            section {
                class: "feature-grid",
                for (title, description) in FEATURES {
                    div {
                        key: "{title}",
                        class: "card",
                        h3 { "{title}" }
                        p { class: "muted small", "{description}" }
                    }
                }
            }

            footer {
                class: "landing-footer small muted",
                "© 2024 MarkAssist. All rights reserved."
            }
        }
    }
}
