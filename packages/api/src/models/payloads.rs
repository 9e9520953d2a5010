//! Request and response bodies of the backend endpoints.

use serde::{Deserialize, Serialize};
use store::LeadRecord;

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
    pub email: &'a str,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub credits: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreditResponse {
    pub credit: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct LeadGenRequest<'a> {
    pub content: &'a str,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LeadGenResponse {
    pub leads: Vec<LeadRecord>,
    #[serde(default)]
    pub query_id: Option<String>,
}

/// LinkedIn profiles to enrich for one company.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileUpdate {
    pub company_name: String,
    pub linkedin_profiles: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichmentRequest {
    pub query_id: String,
    pub updates: Vec<ProfileUpdate>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BulkRequest<'a> {
    pub session_id: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct QueryValueRequest<'a> {
    pub value: &'a str,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthInitiateResponse {
    pub auth_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MailerResponse {
    #[serde(default)]
    pub mailer: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TemplateRequest<'a> {
    pub content: &'a str,
}
