//! Landing point of the Gmail OAuth flow.

use api::oauth::{self, OAuthCallback};
use api::Notify;
use dioxus::prelude::*;
use ui::icons::{FaCircleCheck, FaCircleExclamation, FaEnvelope};
use ui::{use_lead_cache, use_notices, Icon};

#[component]
pub fn OAuthSuccess(query: String) -> Element {
    let cache = use_lead_cache();
    let mut notices = use_notices();
    let nav = use_navigator();

    let callback = use_hook({
        let cache = cache.clone();
        move || {
            let callback = oauth::parse_callback(&query);
            notices.notify(oauth::complete_callback(&cache, &callback));
            callback
        }
    });

    let proceed = move |_| {
        let target = oauth::continue_target(&cache);
        nav.push(target);
    };

    let connected = match &callback {
        OAuthCallback::Connected { email } => Some(email.clone()),
        OAuthCallback::Failed => None,
    };

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "card auth-card center",
                if let Some(email) = connected {
                    Icon { icon: FaCircleCheck, width: 40, height: 40, class: "ok" }
                    h1 { "Connection Successful!" }
                    p { class: "muted", "Your Gmail account has been connected successfully." }
                    div {
                        class: "badge ok",
                        Icon { icon: FaEnvelope, width: 12, height: 12 }
                        " {email}"
                    }
                } else {
                    Icon { icon: FaCircleExclamation, width: 40, height: 40, class: "error" }
                    h1 { "Connection Failed" }
                    p { class: "muted", "There was an issue connecting your Gmail account." }
                }
                button {
                    class: "btn btn-primary btn-block",
                    onclick: proceed,
                    "Continue to Dashboard"
                }
            }
        }
    }
}
