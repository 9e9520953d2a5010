//! The freshly generated batch: search, select, enrich and export.

use api::export::{self, ExportFormat, ExportKind};
use api::leads::{self, Selection, StatusFilter};
use api::{credits, Notice, Notify};
use dioxus::prelude::*;
use store::LeadRecord;
use ui::browser::download;
use ui::icons::{FaDownload, FaGrip, FaList, FaMagnifyingGlass, FaUsers, FaXmark};
use ui::{
    use_backend, use_credits, use_lead_cache, use_notices, ContactInfoSidebar, Icon, LeadCards,
    LeadTable, LoadingSpinner,
};

use crate::Route;

#[component]
pub fn LeadManagement() -> Element {
    let backend = use_backend();
    let cache = use_lead_cache();
    let mut credit_state = use_credits();
    let mut notices = use_notices();
    let nav = use_navigator();

    let leads = use_signal({
        let cache = cache.clone();
        move || cache.load_generated().unwrap_or_default()
    });
    let mut selection = use_signal(Selection::new);
    let mut search = use_signal(String::new);
    let mut show_search = use_signal(|| false);
    let mut cards = use_signal(|| true);
    let mut contact = use_signal(|| Option::<LeadRecord>::None);
    let mut loading = use_signal(|| false);

    let visible: Vec<LeadRecord> = {
        let all = leads.read();
        leads::filter_leads(&all, &search(), StatusFilter::All)
            .into_iter()
            .cloned()
            .collect()
    };
    let enriched = visible.iter().filter(|l| l.is_enriched()).count();
    let average = if visible.is_empty() {
        0
    } else {
        (visible.iter().map(|l| l.score).sum::<f64>() / visible.len() as f64).round() as i64
    };

    let run_enrichment = use_callback(move |picked: Vec<LeadRecord>| {
        if picked.is_empty() {
            notices.notify(Notice::error("No leads selected", "Please select at least one lead to enrich"));
            return;
        }
        if *loading.peek() {
            return;
        }
        loading.set(true);
        let backend = backend.clone();
        let cache = cache.clone();
        spawn(async move {
            if !credits::ensure_credits(&backend, &mut credit_state, &mut notices).await {
                loading.set(false);
                return;
            }
            let targets: Vec<&LeadRecord> = picked.iter().collect();
            let result = leads::enrich_selected(&backend, &cache, &targets).await;
            loading.set(false);
            match result {
                Ok(enriched) => {
                    notices.notify(Notice::success(
                        "Success!",
                        format!("Enriched {} leads with detailed contact information", enriched.len()),
                    ));
                    nav.push(Route::LeadEnrichment {});
                }
                Err(e) => {
                    tracing::error!("Enrichment failed: {e}");
                    notices.notify(Notice::error("Enrichment Failed", e.to_string()));
                }
            }
        });
    });

    let enrich_selected = {
        let visible = visible.clone();
        move |_| {
            let refs: Vec<&LeadRecord> = visible.iter().collect();
            let picked = selection.read().pick(&refs).into_iter().cloned().collect();
            run_enrichment.call(picked);
        }
    };

    let export_csv = {
        let visible = visible.clone();
        move |_| {
            let refs: Vec<&LeadRecord> = visible.iter().collect();
            let targets = selection.read().export_targets(&refs);
            if let Some(file) = export::export_leads(&targets, ExportKind::Generated, ExportFormat::Csv, &mut notices) {
                download(&file);
            }
        }
    };

    if loading() {
        return rsx! { LoadingSpinner { message: "Enriching your leads..." } };
    }

    let select_all_source = visible.clone();

    rsx! {
        div {
            class: "page",
            div {
                class: "page-head",
                div {
                    h1 { "Lead Management" }
                    p { class: "muted", "Review, select and enrich the leads you generated." }
                }
                button {
                    class: "btn btn-outline",
                    onclick: move |_| show_search.toggle(),
                    Icon { icon: FaMagnifyingGlass, width: 12, height: 12 }
                    " Search"
                }
            }

            if show_search() {
                div {
                    class: "search-bar",
                    input {
                        r#type: "text",
                        placeholder: "Search leads by company name...",
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
                div { class: "card stat", p { class: "stat-value", "{visible.len()}" } p { class: "muted small", "Total Leads" } }
                div { class: "card stat", p { class: "stat-value", "{selection.read().len()}" } p { class: "muted small", "Selected" } }
                div { class: "card stat", p { class: "stat-value", "{enriched}" } p { class: "muted small", "Enriched" } }
                div { class: "card stat", p { class: "stat-value", "{average}" } p { class: "muted small", "Avg Score" } }
            }

            div {
                class: "toolbar",
                button {
                    class: "btn btn-outline btn-sm",
                    onclick: move |_| cards.toggle(),
                    if cards() {
                        Icon { icon: FaList, width: 12, height: 12 }
                        " View (Table)"
                    } else {
                        Icon { icon: FaGrip, width: 12, height: 12 }
                        " View (Cards)"
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
                button {
                    class: "btn btn-primary btn-sm",
                    disabled: credit_state().has_insufficient_credits(),
                    onclick: enrich_selected,
                    "Enrich Selected ({selection.read().len()})"
                }
                button {
                    class: "btn btn-outline btn-sm",
                    onclick: export_csv,
                    Icon { icon: FaDownload, width: 12, height: 12 }
                    " Export CSV"
                }
            }

            if visible.is_empty() {
                div {
                    class: "card empty",
                    Icon { icon: FaUsers, width: 32, height: 32 }
                    h3 { "No leads found" }
                    p { class: "muted", "Generate some leads to get started." }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| {
                            nav.push(Route::LeadGeneration {});
                        },
                        "Generate Leads"
                    }
                }
            } else if cards() {
                LeadCards {
                    leads: visible.clone(),
                    selection: selection(),
                    show_enrich: true,
                    on_toggle: move |name: String| selection.write().toggle(&name),
                    on_view_contacts: move |lead| contact.set(Some(lead)),
                    on_enrich: move |lead: LeadRecord| run_enrichment.call(vec![lead]),
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
                    show_enrich: true,
                    on_enrich: move |lead: LeadRecord| run_enrichment.call(vec![lead]),
                }
            }

            if let Some(lead) = contact() {
                ContactInfoSidebar { lead, on_close: move |_| contact.set(None) }
            }
        }
    }
}
