//! Route guards driven by the session state.

use api::session::{self, AuthState, GuardDecision};
use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::spinner::LoadingSpinner;

fn guarded(decide: fn(&AuthState) -> GuardDecision, children: Element) -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    use_effect(move || {
        if let GuardDecision::Redirect(path) = decide(&auth()) {
            tracing::info!("Redirecting to {path}");
            nav.replace(path);
        }
    });

    match decide(&auth()) {
        GuardDecision::Loading => rsx! {
            LoadingSpinner {}
        },
        GuardDecision::Redirect(_) => rsx! {},
        GuardDecision::Render => rsx! {
            {children}
        },
    }
}

/// Renders `children` only for a signed-in user; otherwise sends them to login.
#[component]
pub fn ProtectedRoute(children: Element) -> Element {
    guarded(session::protected, children)
}

/// Renders `children` only when nobody is signed in; otherwise goes to the dashboard.
#[component]
pub fn PublicRoute(children: Element) -> Element {
    guarded(session::public_only, children)
}
