//! Header, navigation and credit lock around every dashboard page.

use std::time::Duration;

use api::credits;
use dioxus::prelude::*;

use crate::auth::{use_auth, LogoutButton};
use crate::browser::{open_in_new_tab, sleep};
use crate::credit_overlay::CreditLockOverlay;
use crate::credits::use_credits;
use crate::icons::{FaBolt, FaChartLine, FaCoins, FaDatabase, FaEnvelope, FaGauge, FaUsers};
use crate::notices::use_notices;
use crate::repo::{use_backend, use_client_config};
use crate::Icon;

#[component]
pub fn DashboardShell(children: Element) -> Element {
    let auth = use_auth();
    let mut credit_state = use_credits();
    let mut notices = use_notices();
    let backend = use_backend();
    let billing = use_client_config().billing;

    let on_recharge = move |_| {
        open_in_new_tab(&billing.recharge_url);
        let backend = backend.clone();
        let delay = Duration::from_millis(u64::from(billing.refresh_delay_ms));
        spawn(async move {
            sleep(delay).await;
            credits::fetch_credits(&backend, &mut credit_state, &mut notices).await;
        });
    };

    let state = credit_state();
    let user = auth().user;
    let balance = state
        .balance
        .or_else(|| user.as_ref().map(|u| u.credits));
    let locked = state.has_insufficient_credits();
    let credit_label = match balance {
        Some(b) => format!("{b} Credits"),
        None => "-- Credits".to_string(),
    };

    rsx! {
        div {
            class: "dashboard",
            nav {
                class: "dashboard-sidebar",
                div {
                    class: "brand",
                    h2 { "MarkAssist" }
                    p { class: "muted small", "AI Platform" }
                }
                NavItem { to: "/dashboard", label: "Dashboard", icon: rsx! { Icon { icon: FaGauge, width: 14, height: 14 } } }
                NavItem { to: "/dashboard/lead-generation", label: "Lead Generation", icon: rsx! { Icon { icon: FaBolt, width: 14, height: 14 } } }
                NavItem { to: "/dashboard/lead-management", label: "Lead Management", icon: rsx! { Icon { icon: FaUsers, width: 14, height: 14 } } }
                NavItem { to: "/dashboard/lead-enrichment", label: "Lead Enrichment", icon: rsx! { Icon { icon: FaEnvelope, width: 14, height: 14 } } }
                NavItem { to: "/dashboard/competitor-analysis", label: "Competitor Analysis", icon: rsx! { Icon { icon: FaChartLine, width: 14, height: 14 } } }
                NavItem { to: "/dashboard/bulk-leads", label: "Bulk Leads", icon: rsx! { Icon { icon: FaDatabase, width: 14, height: 14 } } }
            }

            div {
                class: "dashboard-main",
                header {
                    class: "dashboard-header",
                    div {
                        h1 { "MarkAssist" }
                        p { class: "muted small", "AI-Powered Lead Generation Platform" }
                    }
                    if let Some(user) = user {
                        div {
                            class: "header-actions",
                            span {
                                class: if locked { "credit-badge credit-badge--locked" } else { "credit-badge" },
                                Icon { icon: FaCoins, width: 14, height: 14 }
                                "{credit_label}"
                                if locked {
                                    " - Please Recharge"
                                }
                            }
                            span { class: "user-chip", "{user.display_name()}" }
                            LogoutButton { class: "btn btn-ghost" }
                        }
                    }
                }
                main {
                    class: "dashboard-content",
                    {children}
                }
            }

            if locked {
                CreditLockOverlay {
                    credits: state.balance,
                    on_recharge: on_recharge,
                }
            }
        }
    }
}

#[component]
fn NavItem(to: String, label: String, icon: Element) -> Element {
    rsx! {
        Link {
            class: "nav-item",
            active_class: "nav-item--active",
            to: to,
            {icon}
            span { "{label}" }
        }
    }
}
