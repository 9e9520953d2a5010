//! Table and card views of a lead list.

use api::leads::{LeadRow, RowAction, Selection};
use dioxus::prelude::*;
use store::LeadRecord;

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

#[component]
pub fn LeadTable(
    leads: Vec<LeadRecord>,
    selection: Selection,
    #[props(default = true)] show_selection: bool,
    #[props(default)] show_enrich: bool,
    on_toggle: EventHandler<String>,
    on_select_all: EventHandler<bool>,
    on_view_contacts: EventHandler<LeadRecord>,
    #[props(default)] on_enrich: Option<EventHandler<LeadRecord>>,
) -> Element {
    let all_selected = !leads.is_empty() && leads.iter().all(|l| selection.contains(&l.company_name));

    rsx! {
        div {
            class: "card table-wrap",
            table {
                class: "lead-table",
                thead {
                    tr {
                        if show_selection {
                            th {
                                input {
                                    r#type: "checkbox",
                                    checked: all_selected,
                                    onchange: move |evt: FormEvent| on_select_all.call(evt.checked()),
                                }
                            }
                        }
                        th { "Company" }
                        th { "Score" }
                        th { "Revenue" }
                        th { "Size" }
                        th { "Target Personas" }
                        th { "LinkedIn" }
                        th { "Status" }
                        th { "Contact Info" }
                        th { "Actions" }
                        if show_enrich {
                            th { "Enrich" }
                        }
                    }
                }
                tbody {
                    for (i, lead) in leads.iter().enumerate() {
                        LeadTableRow {
                            key: "{i}",
                            row: LeadRow::new(lead, &selection),
                            lead: lead.clone(),
                            show_selection,
                            show_enrich,
                            on_toggle,
                            on_view_contacts,
                            on_enrich,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn LeadTableRow(
    row: LeadRow,
    lead: LeadRecord,
    show_selection: bool,
    show_enrich: bool,
    on_toggle: EventHandler<String>,
    on_view_contacts: EventHandler<LeadRecord>,
    on_enrich: Option<EventHandler<LeadRecord>>,
) -> Element {
    let enriched = row.action == RowAction::ViewContacts;
    let name = row.company_name.clone();
    let view_lead = lead.clone();
    let enrich_lead = lead.clone();

    rsx! {
        tr {
            class: if row.selected { "selected" } else { "" },
            if show_selection {
                td {
                    input {
                        r#type: "checkbox",
                        checked: row.selected,
                        onchange: move |_| on_toggle.call(name.clone()),
                    }
                }
            }
            td {
                div { class: "strong", "{row.company_name}" }
                if !row.url.is_empty() {
                    a { href: "{row.url}", target: "_blank", rel: "noopener noreferrer", class: "small", "Visit Website" }
                }
            }
            td { class: "score", "{row.score}" }
            td { "{row.revenue}" }
            td { "{row.company_size}" }
            td {
                for persona in lead.target_persona.iter() {
                    span { class: "badge badge-outline", "{persona}" }
                }
            }
            td {
                for (role, url) in lead.linkedin_profiles.iter() {
                    a { class: "block small", href: "{url}", target: "_blank", rel: "noopener noreferrer", "{role}" }
                }
            }
            td {
                span {
                    class: if enriched { "badge" } else { "badge badge-muted" },
                    if enriched { "Enriched" } else { "Basic" }
                }
            }
            td {
                if enriched {
                    if lead.email_count() > 0 {
                        div { class: "small ok", {plural(lead.email_count(), "email")} }
                    }
                    if lead.phone_count() > 0 {
                        div { class: "small info", {plural(lead.phone_count(), "phone")} }
                    }
                } else {
                    span { class: "small muted", "Not available" }
                }
            }
            td {
                if enriched {
                    button {
                        class: "btn btn-primary btn-sm",
                        onclick: move |_| on_view_contacts.call(view_lead.clone()),
                        "View"
                    }
                } else {
                    span { class: "small muted", "Not available" }
                }
            }
            if show_enrich {
                td {
                    if let (false, Some(on_enrich)) = (enriched, on_enrich) {
                        button {
                            class: "btn btn-outline btn-sm",
                            onclick: move |_| on_enrich.call(enrich_lead.clone()),
                            "Enrich"
                        }
                    }
                }
            }
        }
    }
}

/// Card grid alternative to [`LeadTable`].
#[component]
pub fn LeadCards(
    leads: Vec<LeadRecord>,
    selection: Selection,
    #[props(default)] show_enrich: bool,
    on_toggle: EventHandler<String>,
    on_view_contacts: EventHandler<LeadRecord>,
    #[props(default)] on_enrich: Option<EventHandler<LeadRecord>>,
) -> Element {
    rsx! {
        div {
            class: "lead-cards",
            for (i, lead) in leads.iter().enumerate() {
                LeadCard {
                    key: "{i}",
                    row: LeadRow::new(lead, &selection),
                    lead: lead.clone(),
                    show_enrich,
                    on_toggle,
                    on_view_contacts,
                    on_enrich,
                }
            }
        }
    }
}

#[component]
fn LeadCard(
    row: LeadRow,
    lead: LeadRecord,
    show_enrich: bool,
    on_toggle: EventHandler<String>,
    on_view_contacts: EventHandler<LeadRecord>,
    on_enrich: Option<EventHandler<LeadRecord>>,
) -> Element {
    let name = row.company_name.clone();
    let view_lead = lead.clone();
    let enrich_lead = lead.clone();
    let enrich = on_enrich.filter(|_| show_enrich && row.action == RowAction::Enrich);

    rsx! {
        div {
            class: if row.selected { "card lead-card selected" } else { "card lead-card" },
            div {
                class: "lead-card-head",
                input {
                    r#type: "checkbox",
                    checked: row.selected,
                    onchange: move |_| on_toggle.call(name.clone()),
                }
                h3 { "{row.company_name}" }
                span { class: "score", "{row.score}" }
            }
            if !row.url.is_empty() {
                a { href: "{row.url}", target: "_blank", rel: "noopener noreferrer", class: "small", "{row.url}" }
            }
            p { class: "small muted", "{row.company_size} · {row.revenue}" }
            p { class: "small", "{lead.why_company_fit}" }
            if !row.personas.is_empty() {
                p { class: "small", strong { "Personas: " } "{row.personas}" }
            }
            if row.action == RowAction::ViewContacts {
                button {
                    class: "btn btn-primary btn-sm",
                    onclick: move |_| on_view_contacts.call(view_lead.clone()),
                    "View Contacts"
                }
            }
            if let Some(on_enrich) = enrich {
                button {
                    class: "btn btn-outline btn-sm",
                    onclick: move |_| on_enrich.call(enrich_lead.clone()),
                    "Enrich"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = dioxus::dioxus_core::VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus::ssr::render(&dom)
    }

    fn acme(flag: &str) -> LeadRecord {
        LeadRecord {
            company_name: "Acme".to_string(),
            score: 80.0,
            enrichment_flag: flag.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_cards_offer_enrich_for_basic_lead() {
        fn app() -> Element {
            rsx! {
                LeadCards {
                    leads: vec![acme("false")],
                    selection: Selection::new(),
                    show_enrich: true,
                    on_toggle: move |_: String| {},
                    on_view_contacts: move |_: LeadRecord| {},
                    on_enrich: move |_: LeadRecord| {},
                }
            }
        }
        let html = render(app);
        assert_eq!(html.matches("lead-card-head").count(), 1);
        assert!(html.contains(">80<"));
        assert!(html.contains(">Enrich<"));
    }

    #[test]
    fn test_cards_hide_enrich_when_not_offered() {
        fn enriched() -> Element {
            rsx! {
                LeadCards {
                    leads: vec![acme("true")],
                    selection: Selection::new(),
                    show_enrich: true,
                    on_toggle: move |_: String| {},
                    on_view_contacts: move |_: LeadRecord| {},
                    on_enrich: move |_: LeadRecord| {},
                }
            }
        }
        fn read_only() -> Element {
            rsx! {
                LeadCards {
                    leads: vec![acme("false")],
                    selection: Selection::new(),
                    on_toggle: move |_: String| {},
                    on_view_contacts: move |_: LeadRecord| {},
                }
            }
        }
        assert!(!render(enriched).contains(">Enrich<"));
        assert!(!render(read_only).contains(">Enrich<"));
    }

    #[test]
    fn test_table_offers_enrich_for_basic_lead() {
        fn app() -> Element {
            rsx! {
                LeadTable {
                    leads: vec![acme("false")],
                    selection: Selection::new(),
                    show_enrich: true,
                    on_toggle: move |_: String| {},
                    on_select_all: move |_: bool| {},
                    on_view_contacts: move |_: LeadRecord| {},
                    on_enrich: move |_: LeadRecord| {},
                }
            }
        }
        let html = render(app);
        assert!(html.contains(">80<"));
        assert!(html.contains(">Enrich</button>"));
    }
}
