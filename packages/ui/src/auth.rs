//! Authentication context and hooks for the UI.

use api::session::{self, AuthState};
use api::{Notice, Notify};
use dioxus::prelude::*;

use crate::notices::use_notices;
use crate::repo::{use_backend, use_lead_cache};

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_context_provider(|| Signal::new(AuthState::default()));
    let backend = use_backend();

    // Verify the session cookie once on mount
    let _ = use_resource(move || {
        let backend = backend.clone();
        async move {
            auth_state.set(session::verify_auth(&backend).await);
        }
    });

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth_state = use_auth();
    let mut notices = use_notices();
    let backend = use_backend();
    let cache = use_lead_cache();
    let nav = use_navigator();

    let onclick = move |_| {
        let backend = backend.clone();
        let cache = cache.clone();
        async move {
            let outcome = session::logout(&backend, &cache).await;
            auth_state.set(outcome.state);
            match outcome.result {
                Ok(()) => notices.notify(Notice::success("Logged out", "See you soon")),
                Err(e) => notices.notify(Notice::error("Logout failed", e.to_string())),
            }
            nav.replace(session::LOGIN_PATH);
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
