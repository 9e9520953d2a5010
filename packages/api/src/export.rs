//! CSV export of lead tables.
//!
//! Every cell is double-quoted with embedded quotes doubled. Commas in the fit
//! reasoning become `;` so the text also survives naive splitting. The "Excel"
//! export is the same CSV under an `.xlsx` name.

use chrono::NaiveDate;
use store::LeadRecord;

use crate::notice::{Notice, Notify};

pub const CSV_MIME: &str = "text/csv;charset=utf-8;";

const BASIC_HEADERS: [&str; 7] = [
    "Company Name",
    "URL",
    "Revenue",
    "Company Size",
    "Score",
    "Target Personas",
    "Why Company Fit",
];
const CONTACT_HEADERS: [&str; 3] = ["Emails", "Phones", "LinkedIn Profiles"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Excel,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Excel => "xlsx",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Csv => "CSV",
            Self::Excel => "EXCEL",
        }
    }
}

/// Which table is being exported. Decides the columns and the file name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportKind {
    Generated,
    Enriched,
    Bulk { date: NaiveDate },
}

impl ExportKind {
    fn with_contacts(self) -> bool {
        !matches!(self, Self::Generated)
    }

    fn base_name(self) -> String {
        match self {
            Self::Generated => "leads_export".to_string(),
            Self::Enriched => "enriched_leads_export".to_string(),
            Self::Bulk { date } => format!("bulk_leads_export_{}", date.format("%Y-%m-%d")),
        }
    }

    fn noun(self) -> &'static str {
        match self {
            Self::Generated => "leads",
            Self::Enriched => "enriched leads",
            Self::Bulk { .. } => "bulk leads",
        }
    }

    fn empty_description(self) -> &'static str {
        match self {
            Self::Generated => "Please select leads or generate some leads first",
            Self::Enriched => "No enriched leads available for export",
            Self::Bulk { .. } => "No bulk leads available for export",
        }
    }
}

/// A file ready to hand to the browser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: String,
    pub contents: String,
    pub rows: usize,
}

fn quote(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}

fn lead_cells(lead: &LeadRecord, with_contacts: bool) -> Vec<String> {
    let mut cells = vec![
        lead.company_name.clone(),
        lead.url.clone(),
        lead.revenue.clone(),
        lead.company_size.clone(),
        lead.score_label(),
        lead.target_persona.join("; "),
        lead.why_company_fit.replace(',', ";"),
    ];
    if with_contacts {
        cells.push(
            lead.emails
                .iter()
                .flatten()
                .map(|e| format!("{} ({})", e.email, or_unknown(&e.email_type)))
                .collect::<Vec<_>>()
                .join("; "),
        );
        cells.push(
            lead.phones
                .iter()
                .flatten()
                .map(|p| format!("{} ({})", p.number, or_unknown(&p.phone_type)))
                .collect::<Vec<_>>()
                .join("; "),
        );
        cells.push(
            lead.linkedin_profiles
                .iter()
                .map(|(role, url)| format!("{role}: {url}"))
                .collect::<Vec<_>>()
                .join("; "),
        );
    }
    cells
}

fn or_unknown(kind: &str) -> &str {
    if kind.is_empty() {
        "unknown"
    } else {
        kind
    }
}

fn csv_line<I, S>(cells: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    cells
        .into_iter()
        .map(|c| quote(c.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}

/// Render `leads` as CSV, or notify and return `None` when there is nothing to
/// export.
pub fn export_leads<N: Notify>(
    leads: &[&LeadRecord],
    kind: ExportKind,
    format: ExportFormat,
    notify: &mut N,
) -> Option<ExportFile> {
    if leads.is_empty() {
        notify.notify(Notice::error("No data to export", kind.empty_description()));
        return None;
    }

    let with_contacts = kind.with_contacts();
    let mut lines = Vec::with_capacity(leads.len() + 1);
    if with_contacts {
        lines.push(csv_line(BASIC_HEADERS.iter().chain(CONTACT_HEADERS.iter())));
    } else {
        lines.push(csv_line(BASIC_HEADERS));
    }
    lines.extend(leads.iter().map(|lead| csv_line(lead_cells(lead, with_contacts))));

    let file = ExportFile {
        file_name: format!("{}.{}", kind.base_name(), format.extension()),
        contents: lines.join("\n"),
        rows: leads.len(),
    };
    notify.notify(Notice::success(
        "Export Successful",
        format!("Downloaded {} {} as {}", file.rows, kind.noun(), format.label()),
    ));
    Some(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::lead;
    use store::{EmailContact, PhoneContact};

    #[test]
    fn test_empty_export_notifies_and_writes_nothing() {
        let mut notices: Vec<Notice> = Vec::new();
        let file = export_leads(&[], ExportKind::Generated, ExportFormat::Csv, &mut notices);
        assert!(file.is_none());
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].title, "No data to export");
        assert!(notices[0].is_error());
    }

    #[test]
    fn test_basic_layout() {
        let mut acme = lead("Acme", 80.0);
        acme.why_company_fit = "Big, \"growing\" team".to_string();
        acme.target_persona = vec!["CFO".into(), "CTO".into()];
        let mut notices: Vec<Notice> = Vec::new();

        let file = export_leads(&[&acme], ExportKind::Generated, ExportFormat::Csv, &mut notices).unwrap();

        assert_eq!(file.file_name, "leads_export.csv");
        let mut lines = file.contents.lines();
        assert_eq!(
            lines.next().unwrap(),
            r#""Company Name","URL","Revenue","Company Size","Score","Target Personas","Why Company Fit""#
        );
        assert_eq!(
            lines.next().unwrap(),
            r#""Acme","","","","80","CFO; CTO","Big; ""growing"" team""#
        );
        assert_eq!(notices[0].description, "Downloaded 1 leads as CSV");
    }

    #[test]
    fn test_contact_layout_and_bulk_name() {
        let mut acme = lead("Acme", 72.5);
        acme.emails = Some(vec![EmailContact {
            email: "cfo@acme.io".into(),
            email_type: "work".into(),
            ..Default::default()
        }]);
        acme.phones = Some(vec![PhoneContact {
            number: "+1 555".into(),
            ..Default::default()
        }]);
        acme.linkedin_profiles.insert("CFO".into(), "https://in/cfo".into());
        let date = NaiveDate::from_ymd_opt(2025, 6, 5).unwrap();
        let mut notices: Vec<Notice> = Vec::new();

        let file =
            export_leads(&[&acme], ExportKind::Bulk { date }, ExportFormat::Excel, &mut notices).unwrap();

        assert_eq!(file.file_name, "bulk_leads_export_2025-06-05.xlsx");
        let row = file.contents.lines().nth(1).unwrap();
        assert!(row.ends_with(r#""72.5","","","cfo@acme.io (work)","+1 555 (unknown)","CFO: https://in/cfo""#));
        assert_eq!(notices[0].description, "Downloaded 1 bulk leads as EXCEL");
    }
}
