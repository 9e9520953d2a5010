//! Enriched leads with contact details, outreach and export.

use api::export::{self, ExportFormat, ExportKind};
use api::leads::{self, ContactTotals, Selection, StatusFilter};
use api::{credits, mail, oauth, Notice, Notify};
use dioxus::prelude::*;
use store::LeadRecord;
use ui::browser::{download, redirect_to};
use ui::icons::{FaDownload, FaEnvelope, FaEye, FaGrip, FaList, FaLink, FaMagnifyingGlass, FaXmark};
use ui::{
    use_backend, use_credits, use_lead_cache, use_notices, ContactInfoSidebar, Icon, LeadCards,
    LeadTable, LoadingSpinner, MailSenderForm,
};

#[component]
pub fn LeadEnrichment() -> Element {
    let backend = use_backend();
    let cache = use_lead_cache();
    let mut credit_state = use_credits();
    let mut notices = use_notices();

    let (handed_over, gmail) = use_hook({
        let cache = cache.clone();
        move || cache.take_enrichment_handoff()
    });

    let enriched = use_signal(move || handed_over.unwrap_or_default());
    let mut preview = use_signal(|| Option::<Vec<LeadRecord>>::None);
    let mut selection = use_signal(Selection::new);
    let mut search = use_signal(String::new);
    let mut show_search = use_signal(|| false);
    let mut cards = use_signal(|| false);
    let mut contact = use_signal(|| Option::<LeadRecord>::None);
    let mut mailers = use_signal(|| Option::<Vec<String>>::None);
    let mut loading = use_signal(|| Option::<&'static str>::None);

    let visible: Vec<LeadRecord> = {
        let source = match preview.read().as_ref() {
            Some(all) => all.clone(),
            None => enriched.read().clone(),
        };
        leads::filter_leads(&source, &search(), StatusFilter::All)
            .into_iter()
            .cloned()
            .collect()
    };
    let refs: Vec<&LeadRecord> = visible.iter().collect();
    let totals = ContactTotals::of(&refs);
    let fully_enriched = visible
        .iter()
        .filter(|l| l.email_count() > 0 && l.phone_count() > 0)
        .count();
    let average = if visible.is_empty() {
        0
    } else {
        (visible.iter().map(|l| l.score).sum::<f64>() / visible.len() as f64).round() as i64
    };
    let picked: Vec<LeadRecord> = selection.read().pick(&refs).into_iter().cloned().collect();
    let picked_refs: Vec<&LeadRecord> = picked.iter().collect();
    let recipients = mail::recipient_emails(&picked_refs);
    let selected_count = selection.read().len();

    let connect_gmail = {
        let backend = backend.clone();
        move |_| {
            let backend = backend.clone();
            let cache = cache.clone();
            spawn(async move {
                match oauth::begin_gmail_connect(&backend, &cache).await {
                    Ok(url) => redirect_to(&url),
                    Err(e) => {
                        tracing::error!("Gmail connect failed: {e}");
                        notices.notify(Notice::error("Error", e.to_string()));
                    }
                }
            });
        }
    };

    let open_mail_sender = {
        let backend = backend.clone();
        move |_| {
            let backend = backend.clone();
            spawn(async move {
                loading.set(Some("Checking connected accounts..."));
                let result = mail::available_mailers(&backend, selected_count).await;
                loading.set(None);
                match result {
                    Ok(list) => mailers.set(Some(list)),
                    Err(e) if e.is_validation() => {
                        let title = if selected_count == 0 {
                            "No Leads Selected"
                        } else {
                            "Account Connection Required"
                        };
                        notices.notify(Notice::error(title, e.to_string()));
                    }
                    Err(e) => {
                        tracing::error!("Error fetching authenticated mailers: {e}");
                        notices.notify(Notice::error("Error", "Failed to check authenticated mailers"));
                    }
                }
            });
        }
    };

    let load_preview = move |_| {
        if loading.peek().is_some() {
            return;
        }
        loading.set(Some("Loading enrichment preview..."));
        let backend = backend.clone();
        spawn(async move {
            if !credits::ensure_credits(&backend, &mut credit_state, &mut notices).await {
                loading.set(None);
                return;
            }
            let result = leads::load_enrichment_preview(&backend).await;
            loading.set(None);
            match result {
                Ok(all) => {
                    notices.notify(Notice::success(
                        "Preview Loaded",
                        format!("Displaying {} enriched leads", all.len()),
                    ));
                    selection.write().clear();
                    preview.set(Some(all));
                }
                Err(e) => {
                    tracing::error!("Enrichment preview failed: {e}");
                    notices.notify(Notice::error("Error", e.to_string()));
                }
            }
        });
    };

    let export_as = {
        let visible = visible.clone();
        move |format: ExportFormat| {
            let refs: Vec<&LeadRecord> = visible.iter().collect();
            let targets = selection.read().export_targets(&refs);
            if let Some(file) = export::export_leads(&targets, ExportKind::Enriched, format, &mut notices) {
                download(&file);
            }
        }
    };
    let export = use_callback(export_as);

    if let Some(message) = loading() {
        return rsx! { LoadingSpinner { message: message.to_string() } };
    }

    let select_all_source = visible.clone();

    rsx! {
        div {
            class: "page",
            div {
                class: "page-head",
                div {
                    h1 { "Lead Enrichment" }
                    p { class: "muted", "Contact details for your enriched leads." }
                    if let Some(email) = gmail {
                        p { class: "small ok", "Gmail connected: {email}" }
                    }
                }
                div {
                    class: "toolbar",
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| show_search.toggle(),
                        Icon { icon: FaMagnifyingGlass, width: 12, height: 12 }
                        " Search"
                    }
                    button {
                        class: "btn btn-outline",
                        onclick: connect_gmail,
                        Icon { icon: FaLink, width: 12, height: 12 }
                        " Connect Gmail"
                    }
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| {
                            notices.notify(Notice::info("Coming Soon", "Outlook connector will be available soon"));
                        },
                        " Connect Outlook"
                    }
                    button {
                        class: "btn btn-primary",
                        title: if selected_count == 0 { "Select lead to enable MailSender" } else { "" },
                        onclick: open_mail_sender,
                        Icon { icon: FaEnvelope, width: 12, height: 12 }
                        " MailSender"
                    }
                    button {
                        class: "btn btn-primary",
                        disabled: credit_state().has_insufficient_credits(),
                        onclick: load_preview,
                        Icon { icon: FaEye, width: 12, height: 12 }
                        " Enrichment Preview"
                    }
                }
            }

            if show_search() {
                div {
                    class: "search-bar",
                    input {
                        r#type: "text",
                        placeholder: "Search enriched leads by company name...",
                        value: "{search}",
                        oninput: move |evt| search.set(evt.value()),
                    }
                    if !search().is_empty() {
                        button {
                            class: "btn btn-ghost btn-sm",
                            onclick: move |_| search.set(String::new()),
                            Icon { icon: FaXmark, width: 10, height: 10 }
                        }
                    }
                }
            }

            div {
                class: "stat-grid",
                div { class: "card stat", p { class: "stat-value", "{visible.len()}" } p { class: "muted small", "Enriched Leads" } }
                div { class: "card stat", p { class: "stat-value", "{totals.emails}" } p { class: "muted small", "Email Contacts" } }
                div { class: "card stat", p { class: "stat-value", "{totals.phones}" } p { class: "muted small", "Phone Contacts" } }
                div { class: "card stat", p { class: "stat-value", "{fully_enriched}" } p { class: "muted small", "Fully Enriched" } }
                div { class: "card stat", p { class: "stat-value", "{average}" } p { class: "muted small", "Avg Score" } }
            }

            div {
                class: "toolbar",
                button {
                    class: "btn btn-outline btn-sm",
                    onclick: move |_| cards.toggle(),
                    if cards() {
                        Icon { icon: FaList, width: 12, height: 12 }
                        " Table"
                    } else {
                        Icon { icon: FaGrip, width: 12, height: 12 }
                        " Cards"
                    }
                }
                button {
                    class: "btn btn-outline btn-sm",
                    onclick: move |_| selection.write().clear(),
                    "Deselect All"
                }
                button {
                    class: "btn btn-outline btn-sm",
                    disabled: visible.is_empty(),
                    onclick: move |_| selection.write().set_all(select_all_source.iter(), true),
                    "Select All"
                }
                if preview.read().is_some() {
                    button {
                        class: "btn btn-outline btn-sm",
                        onclick: move |_| {
                            selection.write().clear();
                            preview.set(None);
                        },
                        "Show Recent"
                    }
                }
                button {
                    class: "btn btn-outline btn-sm",
                    onclick: move |_| export.call(ExportFormat::Csv),
                    Icon { icon: FaDownload, width: 12, height: 12 }
                    " CSV"
                }
                button {
                    class: "btn btn-outline btn-sm",
                    onclick: move |_| export.call(ExportFormat::Excel),
                    Icon { icon: FaDownload, width: 12, height: 12 }
                    " Excel"
                }
            }

            if visible.is_empty() {
                div {
                    class: "card empty",
                    h3 { "No Enriched Leads Found" }
                    p { class: "muted", "Enrich leads from the management page, or load the enrichment preview." }
                }
            } else if cards() {
                LeadCards {
                    leads: visible.clone(),
                    selection: selection(),
                    on_toggle: move |name: String| selection.write().toggle(&name),
                    on_view_contacts: move |lead| contact.set(Some(lead)),
                }
            } else {
                LeadTable {
                    leads: visible.clone(),
                    selection: selection(),
                    on_toggle: move |name: String| selection.write().toggle(&name),
                    on_select_all: {
                        let visible = visible.clone();
                        move |on: bool| selection.write().set_all(visible.iter(), on)
                    },
                    on_view_contacts: move |lead| contact.set(Some(lead)),
                }
            }

            if let Some(lead) = contact() {
                ContactInfoSidebar { lead, on_close: move |_| contact.set(None) }
            }

            if let Some(list) = mailers() {
                div {
                    class: "modal-backdrop",
                    MailSenderForm {
                        mailers: list,
                        recipients: recipients.clone(),
                        selected: selected_count,
                        on_close: move |_| mailers.set(None),
                    }
                }
            }
        }
    }
}
