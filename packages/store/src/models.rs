//! # Lead models
//!
//! The records the backend returns for generated, enriched and bulk leads. They are
//! `Serialize + Deserialize` so the same type crosses the network boundary and the
//! browser-local hand-off between pages.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`LeadRecord`] | One company that matches the user's target market, with fit reasoning, a score, LinkedIn profiles keyed by role and, once enriched, contact details. |
//! | [`EmailContact`] | An email address found during enrichment. |
//! | [`PhoneContact`] | A phone number found during enrichment. |
//! | [`LeadBatch`] | The ordered leads of one generation run plus the backend's query identifier. |
//!
//! ## Tolerant decoding
//!
//! Bulk rows are frequently sparse: strings arrive as `null`, personas as a single
//! string, profile URLs as `null`. Every field therefore decodes to its default
//! instead of failing the whole batch. The wire spelling `enrichemnt` is kept.
//!
//! `company_name` is the identity key for selection and matching. Two leads with the
//! same name in one batch are indistinguishable to everything keyed on it.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// A company returned by lead generation or enrichment.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LeadRecord {
    #[serde(default, deserialize_with = "nullable_string")]
    pub company_name: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub url: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub revenue: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub company_size: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub why_company_fit: String,
    #[serde(default, deserialize_with = "persona_list")]
    pub target_persona: Vec<String>,
    #[serde(default, deserialize_with = "nullable_score")]
    pub score: f64,
    /// `"true"` once the backend has enriched this lead.
    #[serde(rename = "enrichemnt", default, deserialize_with = "flag_string")]
    pub enrichment_flag: String,
    /// Role → profile URL.
    #[serde(default, deserialize_with = "profile_map")]
    pub linkedin_profiles: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emails: Option<Vec<EmailContact>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phones: Option<Vec<PhoneContact>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EmailContact {
    #[serde(default, deserialize_with = "nullable_string")]
    pub email: String,
    #[serde(rename = "emailType", default, deserialize_with = "nullable_string")]
    pub email_type: String,
    #[serde(rename = "updateDate", default, deserialize_with = "nullable_string")]
    pub update_date: String,
    #[serde(rename = "emailConfidence", default, deserialize_with = "nullable_string")]
    pub email_confidence: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PhoneContact {
    #[serde(default, deserialize_with = "nullable_string")]
    pub number: String,
    #[serde(rename = "phoneType", default, deserialize_with = "nullable_string")]
    pub phone_type: String,
    #[serde(rename = "doNotCall", default)]
    pub do_not_call: bool,
    #[serde(rename = "updateDate", default, deserialize_with = "nullable_string")]
    pub update_date: String,
}

/// The leads of one generation run, handed from the generation page to management.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LeadBatch {
    pub leads: Vec<LeadRecord>,
    pub query_id: Option<String>,
}

impl LeadRecord {
    /// Whether the backend has already enriched this lead.
    pub fn is_enriched(&self) -> bool {
        self.enrichment_flag == "true"
    }

    pub fn email_count(&self) -> usize {
        self.emails.as_ref().map_or(0, Vec::len)
    }

    pub fn phone_count(&self) -> usize {
        self.phones.as_ref().map_or(0, Vec::len)
    }

    /// Non-blank LinkedIn profile URLs, in role order.
    pub fn profile_urls(&self) -> Vec<String> {
        self.linkedin_profiles
            .values()
            .map(|url| url.trim())
            .filter(|url| !url.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Score for display: whole numbers without a fractional part.
    pub fn score_label(&self) -> String {
        if self.score.fract() == 0.0 {
            format!("{:.0}", self.score)
        } else {
            format!("{:.1}", self.score)
        }
    }
}

impl LeadBatch {
    pub fn new(leads: Vec<LeadRecord>, query_id: Option<String>) -> Self {
        Self { leads, query_id }
    }

    pub fn len(&self) -> usize {
        self.leads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }
}

fn nullable_string<'de, D: Deserializer<'de>>(de: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(de)?.unwrap_or_default())
}

fn nullable_score<'de, D: Deserializer<'de>>(de: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(de)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<Option<String>>),
}

fn persona_list<'de, D: Deserializer<'de>>(de: D) -> Result<Vec<String>, D::Error> {
    Ok(match Option::<OneOrMany>::deserialize(de)? {
        Some(OneOrMany::One(s)) if s.is_empty() => Vec::new(),
        Some(OneOrMany::One(s)) => vec![s],
        Some(OneOrMany::Many(items)) => items.into_iter().flatten().collect(),
        None => Vec::new(),
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Flag {
    Text(String),
    Bool(bool),
}

fn flag_string<'de, D: Deserializer<'de>>(de: D) -> Result<String, D::Error> {
    Ok(match Option::<Flag>::deserialize(de)? {
        Some(Flag::Text(s)) => s,
        Some(Flag::Bool(b)) => b.to_string(),
        None => String::new(),
    })
}

fn profile_map<'de, D: Deserializer<'de>>(de: D) -> Result<BTreeMap<String, String>, D::Error> {
    let raw = Option::<BTreeMap<String, Option<String>>>::deserialize(de)?.unwrap_or_default();
    Ok(raw
        .into_iter()
        .filter_map(|(role, url)| url.map(|url| (role, url)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_lead() {
        let json = r#"{
            "company_name": "Acme",
            "url": "https://acme.test",
            "revenue": "$10M",
            "company_size": "51-200",
            "why_company_fit": "Uses spreadsheets, wants AI",
            "target_persona": ["CFO", "Head of Data"],
            "score": 80,
            "enrichemnt": "false",
            "linkedin_profiles": {"CFO": "https://linkedin.com/in/cfo", "CTO": ""},
            "emails": [{"email": "cfo@acme.test", "emailType": "work", "updateDate": "2025-01-01", "emailConfidence": "A"}]
        }"#;
        let lead: LeadRecord = serde_json::from_str(json).unwrap();
        assert_eq!(lead.company_name, "Acme");
        assert_eq!(lead.score_label(), "80");
        assert!(!lead.is_enriched());
        assert_eq!(lead.email_count(), 1);
        assert_eq!(lead.phone_count(), 0);
        assert_eq!(lead.profile_urls(), vec!["https://linkedin.com/in/cfo".to_string()]);
        assert_eq!(lead.emails.unwrap()[0].email_type, "work");
    }

    #[test]
    fn test_decode_sparse_bulk_row() {
        let json = r#"{
            "company_name": "Sparse Co",
            "url": null,
            "target_persona": "Founder",
            "score": null,
            "enrichemnt": true,
            "linkedin_profiles": {"Founder": null}
        }"#;
        let lead: LeadRecord = serde_json::from_str(json).unwrap();
        assert_eq!(lead.url, "");
        assert_eq!(lead.target_persona, vec!["Founder".to_string()]);
        assert_eq!(lead.score, 0.0);
        assert!(lead.is_enriched());
        assert!(lead.linkedin_profiles.is_empty());
    }

    #[test]
    fn test_enrichment_flag_keeps_wire_spelling() {
        let lead = LeadRecord {
            company_name: "Acme".to_string(),
            enrichment_flag: "true".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&lead).unwrap();
        assert_eq!(value["enrichemnt"], "true");
        assert!(value.get("emails").is_none());
    }

    #[test]
    fn test_fractional_score_label() {
        let lead = LeadRecord {
            score: 72.5,
            ..Default::default()
        };
        assert_eq!(lead.score_label(), "72.5");
    }
}
