//! # Lead workflows
//!
//! Everything the generation, management, enrichment and bulk pages do with a list of
//! leads that is not rendering:
//!
//! - decoding the two response shapes lead endpoints use ([`LeadsPayload`]);
//! - the per-page [`Selection`] of company names and search/status filtering;
//! - the row view model that decides whether a lead offers "Enrich" or "Contacts";
//! - the network workflows that produce a batch and hand it to the next page through
//!   the [`LeadCache`].
//!
//! Selection is keyed on `company_name`. Two rows sharing a name are selected,
//! deselected, enriched and exported together.

use std::collections::BTreeSet;

use serde::Deserialize;
use store::{KeyValueStore, LeadBatch, LeadCache, LeadRecord};

use crate::client::Backend;
use crate::error::ApiError;
use crate::models::{EnrichmentRequest, ProfileUpdate};

const DEFAULT_QUERY_ID: &str = "default_query";
const BULK_NOT_FOUND: &str = "Bulk data endpoint not found. Please check if the server is running.";
const ENRICH_NOT_FOUND: &str = "Enrichment service endpoint not found. Please check if the server is running.";

/// The response shapes lead endpoints are known to return.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum LeadsPayload {
    Bare(Vec<LeadRecord>),
    Wrapped { leads: Vec<LeadRecord> },
}

impl LeadsPayload {
    pub fn into_leads(self) -> Vec<LeadRecord> {
        match self {
            Self::Bare(leads) | Self::Wrapped { leads } => leads,
        }
    }
}

/// Decode a lead list in either accepted shape.
///
/// # Errors
///
/// [`ApiError::Decode`] for a body that is not JSON, [`ApiError::UnexpectedShape`] for
/// JSON that is neither an array of leads nor an object with a `leads` array.
pub fn decode_leads(body: &[u8]) -> Result<Vec<LeadRecord>, ApiError> {
    let value: serde_json::Value = serde_json::from_slice(body)?;
    LeadsPayload::deserialize(value)
        .map(LeadsPayload::into_leads)
        .map_err(|e| ApiError::UnexpectedShape(e.to_string()))
}

/// Decode the chatbot's suggestion list. Anything but an array means "no suggestions".
pub fn decode_suggestions(body: &[u8]) -> Result<Vec<String>, ApiError> {
    let value: serde_json::Value = serde_json::from_slice(body)?;
    Ok(match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                serde_json::Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

/// Company names the user has checked on the current page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Selection {
    names: BTreeSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, company_name: &str, selected: bool) {
        if selected {
            self.names.insert(company_name.to_string());
        } else {
            self.names.remove(company_name);
        }
    }

    pub fn toggle(&mut self, company_name: &str) {
        let selected = !self.contains(company_name);
        self.set(company_name, selected);
    }

    /// Select every visible lead, or clear the selection.
    pub fn set_all<'a>(&mut self, visible: impl IntoIterator<Item = &'a LeadRecord>, selected: bool) {
        self.names.clear();
        if selected {
            self.names
                .extend(visible.into_iter().map(|lead| lead.company_name.clone()));
        }
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }

    pub fn contains(&self, company_name: &str) -> bool {
        self.names.contains(company_name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The leads among `leads` whose name is selected, in list order.
    pub fn pick<'a>(&self, leads: &[&'a LeadRecord]) -> Vec<&'a LeadRecord> {
        leads
            .iter()
            .copied()
            .filter(|lead| self.contains(&lead.company_name))
            .collect()
    }

    /// What an export acts on: the selected leads, or every visible lead when nothing
    /// is selected.
    pub fn export_targets<'a>(&self, visible: &[&'a LeadRecord]) -> Vec<&'a LeadRecord> {
        if self.is_empty() {
            visible.to_vec()
        } else {
            self.pick(visible)
        }
    }
}

/// Bulk page filter on the enrichment flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Enriched,
    Basic,
}

impl StatusFilter {
    pub fn matches(self, lead: &LeadRecord) -> bool {
        match self {
            Self::All => true,
            Self::Enriched => lead.is_enriched(),
            Self::Basic => !lead.is_enriched(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Enriched => "Enriched",
            Self::Basic => "Basic",
        }
    }
}

/// Leads whose company name contains `search` (case-insensitive) and pass `status`.
pub fn filter_leads<'a>(leads: &'a [LeadRecord], search: &str, status: StatusFilter) -> Vec<&'a LeadRecord> {
    let needle = search.trim().to_lowercase();
    leads
        .iter()
        .filter(|lead| lead.company_name.to_lowercase().contains(&needle))
        .filter(|lead| status.matches(lead))
        .collect()
}

/// Email and phone counts across a set of leads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ContactTotals {
    pub emails: usize,
    pub phones: usize,
}

impl ContactTotals {
    pub fn of(leads: &[&LeadRecord]) -> Self {
        leads.iter().fold(Self::default(), |acc, lead| Self {
            emails: acc.emails + lead.email_count(),
            phones: acc.phones + lead.phone_count(),
        })
    }
}

/// The affordance a lead row offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowAction {
    Enrich,
    ViewContacts,
}

/// What one row of a lead table shows.
#[derive(Clone, Debug, PartialEq)]
pub struct LeadRow {
    pub company_name: String,
    pub url: String,
    pub company_size: String,
    pub revenue: String,
    pub score: String,
    pub personas: String,
    pub selected: bool,
    pub action: RowAction,
}

impl LeadRow {
    pub fn new(lead: &LeadRecord, selection: &Selection) -> Self {
        Self {
            company_name: lead.company_name.clone(),
            url: lead.url.clone(),
            company_size: lead.company_size.clone(),
            revenue: lead.revenue.clone(),
            score: lead.score_label(),
            personas: lead.target_persona.join(", "),
            selected: selection.contains(&lead.company_name),
            action: if lead.is_enriched() {
                RowAction::ViewContacts
            } else {
                RowAction::Enrich
            },
        }
    }
}

pub fn rows(leads: &[&LeadRecord], selection: &Selection) -> Vec<LeadRow> {
    leads.iter().map(|lead| LeadRow::new(lead, selection)).collect()
}

/// LinkedIn enrichment updates for the given leads.
pub fn profile_updates(leads: &[&LeadRecord]) -> Vec<ProfileUpdate> {
    leads
        .iter()
        .map(|lead| ProfileUpdate {
            company_name: lead.company_name.clone(),
            linkedin_profiles: lead.profile_urls(),
        })
        .collect()
}

/// Generate leads for a target-market description and persist them for the
/// management page.
pub async fn generate_leads<B, S>(
    backend: &B,
    cache: &LeadCache<S>,
    content: &str,
) -> Result<LeadBatch, ApiError>
where
    B: Backend,
    S: KeyValueStore,
{
    let content = content.trim();
    if content.is_empty() {
        return Err(ApiError::validation("Please describe your target market"));
    }
    let response = backend.generate_leads(content).await?;
    let batch = LeadBatch::new(response.leads, response.query_id);
    cache.store_generated(&batch);
    tracing::info!("Generated {} leads", batch.len());
    Ok(batch)
}

/// Enrich the selected leads' LinkedIn profiles and persist the result for the
/// enrichment page.
pub async fn enrich_selected<B, S>(
    backend: &B,
    cache: &LeadCache<S>,
    selected: &[&LeadRecord],
) -> Result<Vec<LeadRecord>, ApiError>
where
    B: Backend,
    S: KeyValueStore,
{
    if selected.is_empty() {
        return Err(ApiError::validation("Please select at least one lead to enrich"));
    }
    let request = EnrichmentRequest {
        query_id: cache
            .query_id()
            .unwrap_or_else(|| DEFAULT_QUERY_ID.to_string()),
        updates: profile_updates(selected),
    };
    let leads = backend
        .enrich_profiles(&request)
        .await
        .map_err(|e| explain_not_found(e, ENRICH_NOT_FOUND))?;
    cache.store_enriched(&leads);
    tracing::info!("Enriched {} leads", leads.len());
    Ok(leads)
}

/// A missing endpoint usually means the backend is down; say so instead of "Not Found".
fn explain_not_found(e: ApiError, message: &str) -> ApiError {
    if e.is_not_found() {
        ApiError::Status {
            status: 404,
            body: message.to_string(),
        }
    } else {
        e
    }
}

/// Fetch the leads of a previous query and persist them as the generated batch.
pub async fn load_existing_query<B, S>(
    backend: &B,
    cache: &LeadCache<S>,
    value: &str,
) -> Result<Vec<LeadRecord>, ApiError>
where
    B: Backend,
    S: KeyValueStore,
{
    let leads = backend.existing_query_leads(value).await?;
    cache.store_generated(&LeadBatch::new(leads.clone(), None));
    Ok(leads)
}

/// Fetch the account's bulk lead store.
pub async fn load_bulk_leads<B: Backend>(backend: &B) -> Result<Vec<LeadRecord>, ApiError> {
    let leads = backend
        .bulk_leads()
        .await
        .map_err(|e| explain_not_found(e, BULK_NOT_FOUND))?;
    tracing::info!("Loaded {} bulk leads", leads.len());
    Ok(leads)
}

/// Every lead the account has enriched so far.
pub async fn load_enrichment_preview<B: Backend>(backend: &B) -> Result<Vec<LeadRecord>, ApiError> {
    backend.enrichment_preview().await
}
