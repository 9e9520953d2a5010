//! Credit balance context for the dashboard.

use api::credits::{self, CreditState};
use dioxus::prelude::*;

use crate::notices::use_notices;
use crate::repo::use_backend;

pub fn use_credits() -> Signal<CreditState> {
    use_context::<Signal<CreditState>>()
}

/// Holds the credit balance for everything under the dashboard and fetches it on
/// mount.
#[component]
pub fn CreditProvider(children: Element) -> Element {
    let mut state = use_context_provider(|| Signal::new(CreditState::default()));
    let mut notices = use_notices();
    let backend = use_backend();

    use_hook(move || {
        spawn(async move {
            credits::fetch_credits(&backend, &mut state, &mut notices).await;
        });
    });

    rsx! {
        {children}
    }
}
