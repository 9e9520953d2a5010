//! This crate contains all shared UI for the dashboard: providers, guards and the
//! components several pages reuse.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod repo;
pub use repo::{make_lead_cache, use_backend, use_client_config, use_lead_cache, AppCache, AppContext};

pub mod browser;

mod notices;
pub use notices::{use_notices, Toaster};

mod auth;
pub use auth::{use_auth, AuthProvider, LogoutButton};

mod credits;
pub use credits::{use_credits, CreditProvider};

mod guard;
pub use guard::{ProtectedRoute, PublicRoute};

mod spinner;
pub use spinner::LoadingSpinner;

mod credit_overlay;
pub use credit_overlay::CreditLockOverlay;

mod dashboard_shell;
pub use dashboard_shell::DashboardShell;

mod lead_table;
pub use lead_table::{LeadCards, LeadTable};

mod contact_sidebar;
pub use contact_sidebar::ContactInfoSidebar;

mod chatbot;
pub use chatbot::Chatbot;

mod mail_sender;
pub use mail_sender::MailSenderForm;
