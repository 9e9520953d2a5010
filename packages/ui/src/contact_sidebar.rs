use dioxus::prelude::*;
use store::LeadRecord;

use crate::icons::FaXmark;
use crate::Icon;

/// Side panel listing everything known about one lead's contacts.
#[component]
pub fn ContactInfoSidebar(lead: LeadRecord, on_close: EventHandler<()>) -> Element {
    let enriched = lead.is_enriched();
    let emails = lead.emails.clone().unwrap_or_default();
    let phones = lead.phones.clone().unwrap_or_default();

    rsx! {
        aside {
            class: "contact-sidebar",
            div {
                class: "contact-sidebar-head",
                h2 { "Contact Information" }
                button {
                    class: "btn btn-ghost btn-sm",
                    aria_label: "Close contact sidebar",
                    onclick: move |_| on_close.call(()),
                    Icon { icon: FaXmark, width: 12, height: 12 }
                }
            }

            section {
                class: "card",
                h3 { "{lead.company_name}" }
                span {
                    class: if enriched { "badge" } else { "badge badge-muted" },
                    if enriched { "Enriched" } else { "Basic" }
                }
                if !lead.url.is_empty() {
                    a { href: "{lead.url}", target: "_blank", rel: "noopener noreferrer", class: "block small", "{lead.url}" }
                }
                p { class: "score", "Score: {lead.score_label()}" }
                p { class: "small", "{lead.revenue}" }
                p { class: "small", "{lead.company_size}" }
            }

            section {
                h4 { "Target Personas" }
                for persona in lead.target_persona.iter() {
                    span { class: "badge badge-outline", "{persona}" }
                }
            }

            section {
                h4 { "LinkedIn Profiles" }
                for (role, url) in lead.linkedin_profiles.iter() {
                    div {
                        class: "profile-row",
                        span { "{role}" }
                        if !url.trim().is_empty() {
                            a { href: "{url}", target: "_blank", rel: "noopener noreferrer", class: "small", "Open" }
                        }
                    }
                }
            }

            if enriched {
                if !emails.is_empty() {
                    section {
                        h4 { class: "ok", "Email Contacts ({emails.len()})" }
                        for email in emails.iter() {
                            div {
                                class: "card contact-card",
                                p { class: "strong", "{email.email}" }
                                span { class: "badge badge-outline", "{email.email_type}" }
                                span { class: "badge badge-outline", "{email.email_confidence}" }
                                p { class: "small muted", "Updated: {email.update_date}" }
                            }
                        }
                    }
                }
                if !phones.is_empty() {
                    section {
                        h4 { class: "info", "Phone Contacts ({phones.len()})" }
                        for phone in phones.iter() {
                            div {
                                class: "card contact-card",
                                p { class: "strong", "{phone.number}" }
                                span { class: "badge badge-outline", "{phone.phone_type}" }
                                span {
                                    class: if phone.do_not_call { "badge badge-danger" } else { "badge" },
                                    if phone.do_not_call { "Do Not Call" } else { "Can Call" }
                                }
                                p { class: "small muted", "Updated: {phone.update_date}" }
                            }
                        }
                    }
                }
            }

            section {
                h4 { "Why This Company Fits" }
                p { class: "small muted", "{lead.why_company_fit}" }
            }
        }
    }
}
