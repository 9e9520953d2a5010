//! The full lead database: status filter, search and export.

use api::export::{self, ExportFormat, ExportKind};
use api::leads::{self, ContactTotals, Selection, StatusFilter};
use api::{credits, Notice, Notify};
use dioxus::prelude::*;
use store::LeadRecord;
use ui::browser::download;
use ui::icons::{FaArrowsRotate, FaDatabase, FaDownload, FaMagnifyingGlass, FaXmark};
use ui::{
    use_backend, use_credits, use_notices, ContactInfoSidebar, Icon, LeadTable, LoadingSpinner,
};

const FILTERS: [StatusFilter; 3] = [StatusFilter::All, StatusFilter::Enriched, StatusFilter::Basic];

#[component]
pub fn BulkLeads() -> Element {
    let backend = use_backend();
    let mut credit_state = use_credits();
    let mut notices = use_notices();
    let mut all_leads = use_signal(Vec::<LeadRecord>::new);
    let mut selection = use_signal(Selection::new);
    let mut search = use_signal(String::new);
    let mut show_search = use_signal(|| false);
    let mut status = use_signal(StatusFilter::default);
    let mut contact = use_signal(|| Option::<LeadRecord>::None);
    let mut loading = use_signal(|| false);

    let load = use_callback(move |()| {
        if *loading.peek() {
            return;
        }
        loading.set(true);
        let backend = backend.clone();
        spawn(async move {
            if !credits::ensure_credits(&backend, &mut credit_state, &mut notices).await {
                loading.set(false);
                return;
            }
            let result = leads::load_bulk_leads(&backend).await;
            loading.set(false);
            match result {
                Ok(list) => {
                    notices.notify(Notice::success("Success!", format!("Loaded {} bulk leads", list.len())));
                    selection.write().clear();
                    all_leads.set(list);
                }
                Err(e) => {
                    tracing::error!("Bulk load failed: {e}");
                    notices.notify(Notice::error("Load Failed", e.to_string()));
                }
            }
        });
    });

    // Load once on mount
    use_effect(move || load.call(()));

    let visible: Vec<LeadRecord> = {
        let all = all_leads.read();
        leads::filter_leads(&all, &search(), status())
            .into_iter()
            .cloned()
            .collect()
    };
    let refs: Vec<&LeadRecord> = visible.iter().collect();
    let totals = ContactTotals::of(&refs);
    let average = if visible.is_empty() {
        0
    } else {
        (visible.iter().map(|l| l.score).sum::<f64>() / visible.len() as f64).round() as i64
    };

    let export = use_callback({
        let visible = visible.clone();
        move |format: ExportFormat| {
            let refs: Vec<&LeadRecord> = visible.iter().collect();
            let targets = selection.read().export_targets(&refs);
            let kind = ExportKind::Bulk {
                date: chrono::Utc::now().date_naive(),
            };
            if let Some(file) = export::export_leads(&targets, kind, format, &mut notices) {
                download(&file);
            }
        }
    });

    if loading() {
        return rsx! { LoadingSpinner { message: "Loading bulk leads..." } };
    }

    let select_all_source = visible.clone();

    rsx! {
        div {
            class: "page",
            div {
                class: "page-head",
                div {
                    h1 { "Bulk Leads" }
                    p { class: "muted", "Browse every lead in the database and export what you need." }
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
                        class: "btn btn-primary",
                        disabled: credit_state().has_insufficient_credits(),
                        onclick: move |_| load.call(()),
                        Icon { icon: FaArrowsRotate, width: 12, height: 12 }
                        " Refresh"
                    }
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
                class: "toolbar",
                for filter in FILTERS {
                    button {
                        key: "{filter.label()}",
                        class: if status() == filter { "btn btn-primary btn-sm" } else { "btn btn-outline btn-sm" },
                        onclick: move |_| status.set(filter),
                        "{filter.label()}"
                    }
                }
            }

            div {
                class: "stat-grid",
                div { class: "card stat", p { class: "stat-value", "{visible.len()}" } p { class: "muted small", "Total Leads" } }
                div { class: "card stat", p { class: "stat-value", "{selection.read().len()}" } p { class: "muted small", "Selected" } }
                div { class: "card stat", p { class: "stat-value", "{totals.emails}" } p { class: "muted small", "Email Contacts" } }
                div { class: "card stat", p { class: "stat-value", "{totals.phones}" } p { class: "muted small", "Phone Contacts" } }
                div { class: "card stat", p { class: "stat-value", "{average}" } p { class: "muted small", "Avg Score" } }
            }

            div {
                class: "toolbar",
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
                    Icon { icon: FaDatabase, width: 32, height: 32 }
                    h3 { "No bulk leads" }
                    p { class: "muted", "Nothing matches the current filter." }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| load.call(()),
                        "Load Bulk Data"
                    }
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
        }
    }
}
