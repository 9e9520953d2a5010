//! # Local lead cache
//!
//! [`LeadCache`] is the typed face of the browser-local key-value area that pages use
//! to hand lead data to each other across a navigation. It is a depth-one slot per
//! key: every write replaces the previous value, nothing is merged.
//!
//! ## Keys
//!
//! | Key | Written by | Read by |
//! |-----|-----------|---------|
//! | [`GENERATED_LEADS_KEY`] | lead generation, chatbot | lead management |
//! | [`QUERY_ID_KEY`] | lead generation | lead management (enrichment request) |
//! | [`ENRICHED_LEADS_KEY`] | lead management | lead enrichment |
//! | [`RETURN_URL_KEY`] | Gmail connect | OAuth success page (consumed once) |
//! | [`GMAIL_CONNECTED_KEY`] / [`GMAIL_EMAIL_KEY`] | OAuth success page | lead enrichment |
//!
//! ## Invalidation
//!
//! - [`LeadCache::clear_session_data`] runs on every login, registration and logout.
//!   It removes the fixed lead keys plus any key whose name mentions a lead, a query
//!   or a session, so data never leaks from one account to the next.
//! - [`LeadCache::clear_all`] wipes the whole area; the enrichment page calls it on
//!   mount.
//!
//! ## Malformed data
//!
//! A lead key that is absent, holds the sentinels `"undefined"` / `"null"`, or does
//! not parse as a JSON array of leads reads as `None`. Anything present but unusable
//! is deleted on the spot rather than retried on the next mount.

use crate::kv::KeyValueStore;
use crate::models::{LeadBatch, LeadRecord};

pub const GENERATED_LEADS_KEY: &str = "generatedLeads";
pub const ENRICHED_LEADS_KEY: &str = "enrichedLeads";
pub const QUERY_ID_KEY: &str = "queryId";
pub const RETURN_URL_KEY: &str = "returnUrl";
pub const GMAIL_CONNECTED_KEY: &str = "gmailConnected";
pub const GMAIL_EMAIL_KEY: &str = "gmailEmail";

const SESSION_KEY_MARKERS: [&str; 3] = ["lead", "query", "session"];
const SENTINELS: [&str; 3] = ["", "undefined", "null"];

/// Typed access to the persisted lead hand-off.
#[derive(Clone, Debug, Default)]
pub struct LeadCache<S> {
    store: S,
}

impl<S: KeyValueStore> LeadCache<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying key-value area.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Replace the generated batch. The query id is only overwritten when the batch
    /// carries one.
    pub fn store_generated(&self, batch: &LeadBatch) {
        self.write_leads(GENERATED_LEADS_KEY, &batch.leads);
        if let Some(query_id) = &batch.query_id {
            self.store.set(QUERY_ID_KEY, query_id);
        }
    }

    pub fn load_generated(&self) -> Option<Vec<LeadRecord>> {
        self.read_leads(GENERATED_LEADS_KEY)
    }

    pub fn store_enriched(&self, leads: &[LeadRecord]) {
        self.write_leads(ENRICHED_LEADS_KEY, leads);
    }

    pub fn load_enriched(&self) -> Option<Vec<LeadRecord>> {
        self.read_leads(ENRICHED_LEADS_KEY)
    }

    pub fn query_id(&self) -> Option<String> {
        self.store
            .get(QUERY_ID_KEY)
            .filter(|id| !SENTINELS.contains(&id.as_str()))
    }

    pub fn set_return_url(&self, path: &str) {
        self.store.set(RETURN_URL_KEY, path);
    }

    /// Read and delete the stored return path.
    pub fn take_return_url(&self) -> Option<String> {
        let url = self.store.get(RETURN_URL_KEY);
        self.store.remove(RETURN_URL_KEY);
        url.filter(|u| !SENTINELS.contains(&u.as_str()))
    }

    pub fn record_gmail_connection(&self, email: &str) {
        self.store.set(GMAIL_CONNECTED_KEY, "true");
        self.store.set(GMAIL_EMAIL_KEY, email);
    }

    /// The connected Gmail address, if a successful OAuth callback recorded one.
    pub fn gmail_connection(&self) -> Option<String> {
        if self.store.get(GMAIL_CONNECTED_KEY).as_deref() != Some("true") {
            return None;
        }
        self.store.get(GMAIL_EMAIL_KEY)
    }

    /// Remove every lead-related key. Runs on login, registration and logout.
    pub fn clear_session_data(&self) {
        for key in [GENERATED_LEADS_KEY, ENRICHED_LEADS_KEY, QUERY_ID_KEY] {
            self.store.remove(key);
        }
        for key in self.store.keys() {
            if SESSION_KEY_MARKERS.iter().any(|m| key.contains(m)) {
                self.store.remove(&key);
            }
        }
    }

    /// Wipe the whole area.
    pub fn clear_all(&self) {
        self.store.clear();
    }

    /// Runs when the enrichment page mounts: hands back the enriched batch and the
    /// connected Gmail address, then wipes the whole area.
    pub fn take_enrichment_handoff(&self) -> (Option<Vec<LeadRecord>>, Option<String>) {
        let leads = self.load_enriched();
        let gmail = self.gmail_connection();
        self.clear_all();
        (leads, gmail)
    }

    fn write_leads(&self, key: &str, leads: &[LeadRecord]) {
        match serde_json::to_string(leads) {
            Ok(json) => self.store.set(key, &json),
            Err(e) => tracing::error!("Failed to serialise leads for {key}: {e}"),
        }
    }

    fn read_leads(&self, key: &str) -> Option<Vec<LeadRecord>> {
        let raw = self.store.get(key)?;
        if SENTINELS.contains(&raw.trim()) {
            self.store.remove(key);
            return None;
        }
        match serde_json::from_str::<Vec<LeadRecord>>(&raw) {
            Ok(leads) => Some(leads),
            Err(e) => {
                tracing::warn!("Discarding malformed {key}: {e}");
                self.store.remove(key);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;

    fn lead(name: &str, score: f64) -> LeadRecord {
        LeadRecord {
            company_name: name.to_string(),
            score,
            enrichment_flag: "false".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_generated_batch_roundtrip() {
        let cache = LeadCache::new(MemoryStore::new());
        assert!(cache.load_generated().is_none());

        let batch = LeadBatch::new(vec![lead("Acme", 80.0)], Some("q-42".to_string()));
        cache.store_generated(&batch);

        let leads = cache.load_generated().unwrap();
        assert_eq!(leads.len(), 1);
        assert_eq!(leads[0].company_name, "Acme");
        assert_eq!(cache.query_id().as_deref(), Some("q-42"));
    }

    #[test]
    fn test_write_replaces_prior_batch() {
        let cache = LeadCache::new(MemoryStore::new());
        cache.store_generated(&LeadBatch::new(
            vec![lead("Acme", 80.0), lead("Globex", 60.0)],
            Some("q-1".to_string()),
        ));
        cache.store_generated(&LeadBatch::new(vec![lead("Initech", 70.0)], None));

        let leads = cache.load_generated().unwrap();
        assert_eq!(leads.len(), 1);
        assert_eq!(leads[0].company_name, "Initech");
        // A batch without an id leaves the previous one in place.
        assert_eq!(cache.query_id().as_deref(), Some("q-1"));
    }

    #[test]
    fn test_sentinel_values_are_deleted() {
        let store = MemoryStore::new();
        let cache = LeadCache::new(store.clone());

        for sentinel in ["undefined", "null"] {
            store.set(GENERATED_LEADS_KEY, sentinel);
            assert!(cache.load_generated().is_none());
            assert!(store.get(GENERATED_LEADS_KEY).is_none());
        }
    }

    #[test]
    fn test_malformed_json_is_deleted() {
        let store = MemoryStore::new();
        let cache = LeadCache::new(store.clone());

        store.set(ENRICHED_LEADS_KEY, "{not json");
        assert!(cache.load_enriched().is_none());
        assert!(store.get(ENRICHED_LEADS_KEY).is_none());

        // Valid JSON that is not an array of leads is just as unusable.
        store.set(ENRICHED_LEADS_KEY, r#"{"leads": []}"#);
        assert!(cache.load_enriched().is_none());
        assert!(store.get(ENRICHED_LEADS_KEY).is_none());
    }

    #[test]
    fn test_clear_session_data_removes_lead_keys_only() {
        let store = MemoryStore::new();
        let cache = LeadCache::new(store.clone());

        cache.store_generated(&LeadBatch::new(vec![lead("Acme", 80.0)], Some("q".into())));
        cache.store_enriched(&[lead("Acme", 80.0)]);
        store.set("bulk_lead_filter", "enriched");
        store.set("session_hint", "x");
        store.set("last_query_text", "banks");
        store.set("theme", "dark");

        cache.clear_session_data();

        assert_eq!(store.keys(), vec!["theme".to_string()]);
    }

    #[test]
    fn test_clear_all_wipes_everything() {
        let store = MemoryStore::new();
        let cache = LeadCache::new(store.clone());
        store.set("theme", "dark");
        cache.store_enriched(&[lead("Acme", 80.0)]);

        cache.clear_all();

        assert!(store.keys().is_empty());
        assert!(cache.load_enriched().is_none());
    }

    #[test]
    fn test_enrichment_handoff_then_wipe() {
        let store = MemoryStore::new();
        let cache = LeadCache::new(store.clone());
        cache.store_generated(&LeadBatch::new(vec![lead("Globex", 60.0)], Some("q-7".into())));
        cache.store_enriched(&[lead("Acme", 80.0)]);
        cache.record_gmail_connection("me@example.com");
        cache.set_return_url("/dashboard/lead-enrichment");

        let (leads, gmail) = cache.take_enrichment_handoff();

        assert_eq!(leads.unwrap()[0].company_name, "Acme");
        assert_eq!(gmail.as_deref(), Some("me@example.com"));
        assert!(store.keys().is_empty());
        assert!(cache.take_return_url().is_none());
        assert!(cache.gmail_connection().is_none());

        // A reload finds nothing to hand over.
        assert_eq!(cache.take_enrichment_handoff(), (None, None));
    }

    #[test]
    fn test_return_url_is_consumed_once() {
        let cache = LeadCache::new(MemoryStore::new());
        cache.set_return_url("/dashboard/lead-enrichment");

        assert_eq!(
            cache.take_return_url().as_deref(),
            Some("/dashboard/lead-enrichment")
        );
        assert!(cache.take_return_url().is_none());
    }

    #[test]
    fn test_gmail_connection_requires_flag() {
        let store = MemoryStore::new();
        let cache = LeadCache::new(store.clone());

        store.set(GMAIL_EMAIL_KEY, "me@example.com");
        assert!(cache.gmail_connection().is_none());

        cache.record_gmail_connection("me@example.com");
        assert_eq!(cache.gmail_connection().as_deref(), Some("me@example.com"));
    }
}
