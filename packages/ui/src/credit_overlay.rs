use dioxus::prelude::*;

use crate::icons::{FaCoins, FaLock};
use crate::Icon;

/// Full-viewport lock shown over the dashboard while the account has no credits.
/// Unlike a modal it can not be dismissed; recharging is the only way out.
#[component]
pub fn CreditLockOverlay(credits: Option<i64>, on_recharge: EventHandler<()>) -> Element {
    let reason = if credits == Some(0) {
        "no credits"
    } else {
        "insufficient credits"
    };
    let shown = credits.map(|c| c.to_string()).unwrap_or_else(|| "--".to_string());

    rsx! {
        div {
            class: "lock-overlay",
            div {
                class: "card lock-card",
                div { class: "lock-icon", Icon { icon: FaLock, width: 32, height: 32 } }
                h2 { class: "lock-title", "Access Locked" }
                p { class: "muted", "Your account has {reason} remaining" }
                div {
                    class: "lock-balance",
                    Icon { icon: FaCoins, width: 16, height: 16 }
                    span { "Current Credits" }
                    strong { "{shown}" }
                }
                p { "All dashboard functionality has been disabled." }
                p { "Please recharge your account to continue using MarkAssist." }
                button {
                    class: "btn btn-primary btn-block",
                    onclick: move |_| on_recharge.call(()),
                    "Recharge Credits"
                }
                p { class: "muted small", "Contact support if you need assistance" }
            }
        }
    }
}
