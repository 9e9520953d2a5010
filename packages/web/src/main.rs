use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use api::{ClientConfig, HttpBackend};
use ui::{AppContext, AuthProvider, CreditProvider, DashboardShell, ProtectedRoute, PublicRoute, Toaster};
use views::{
    BulkLeads, CompetitorAnalysis, Dashboard, Landing, LeadEnrichment, LeadGeneration,
    LeadManagement, Login, NotFound, OAuthSuccess, Register, SlotScheduler,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Landing {},

    #[layout(PublicLayout)]
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
    #[end_layout]

    #[layout(DashboardLayout)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/dashboard/lead-generation")]
        LeadGeneration {},
        #[route("/dashboard/lead-management")]
        LeadManagement {},
        #[route("/dashboard/lead-enrichment")]
        LeadEnrichment {},
        #[route("/dashboard/competitor-analysis")]
        CompetitorAnalysis {},
        #[route("/dashboard/bulk-leads")]
        BulkLeads {},
    #[end_layout]

    #[route("/dashboard/slot?:id", SlotScheduler)]
    SlotByQuery { id: String },
    #[route("/dashboard/slot/:id", SlotScheduler)]
    SlotByPath { id: String },

    #[route("/oauth-success?:..query")]
    OAuthSuccess { query: String },

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const CONFIG_SOURCE: &str = include_str!("../markassist.toml");

fn main() {
    dioxus::logger::init(Level::INFO).ok();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| ClientConfig::load(CONFIG_SOURCE, option_env!("MARKASSIST_API_BASE")));
    let backend = use_hook(|| HttpBackend::new(&config.backend).map_err(|e| e.to_string()));

    let backend = match backend {
        Ok(backend) => backend,
        Err(e) => {
            tracing::error!("Backend client unavailable: {e}");
            return rsx! {
                document::Link { rel: "stylesheet", href: MAIN_CSS }
                div {
                    class: "fatal",
                    h1 { "MarkAssist is misconfigured" }
                    p { class: "muted", "{e}" }
                }
            };
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AppContext {
            config,
            backend,
            Toaster {
                AuthProvider {
                    Router::<Route> {}
                }
            }
        }
    }
}

/// Login and registration: only for signed-out visitors.
#[component]
fn PublicLayout() -> Element {
    rsx! {
        PublicRoute {
            Outlet::<Route> {}
        }
    }
}

/// Every `/dashboard` page: signed-in users, credits loaded, shell around the page.
#[component]
fn DashboardLayout() -> Element {
    rsx! {
        ProtectedRoute {
            CreditProvider {
                DashboardShell {
                    Outlet::<Route> {}
                }
            }
        }
    }
}
