//! Scripted [`Backend`] and fixtures for unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use store::LeadRecord;

use crate::calendar::{DaySlots, MeetingRequest, ScheduledMeeting};
use crate::client::Backend;
use crate::error::ApiError;
use crate::mail::{MailTemplate, OutgoingMail};
use crate::models::{EnrichmentRequest, LeadGenResponse, RegisterResponse, UserInfo};

pub fn lead(company_name: &str, score: f64) -> LeadRecord {
    LeadRecord {
        company_name: company_name.to_string(),
        score,
        enrichment_flag: "false".to_string(),
        ..Default::default()
    }
}

pub fn user(username: &str) -> UserInfo {
    UserInfo {
        username: username.to_string(),
        email: format!("{username}@example.com"),
        credits: 10,
        user_id: "u-1".to_string(),
    }
}


#[derive(Default)]
struct Script {
    calls: Vec<String>,
    user: Option<UserInfo>,
    login_fails: bool,
    logout_fails: bool,
    register_credits: Option<i64>,
    credits: VecDeque<Result<i64, ApiError>>,
    generated: Option<LeadGenResponse>,
    enriched: Option<Vec<LeadRecord>>,
    last_enrichment: Option<EnrichmentRequest>,
    preview: Option<Vec<LeadRecord>>,
    bulk: Option<Vec<LeadRecord>>,
    queries: Vec<String>,
    query_leads: Option<Vec<LeadRecord>>,
    auth_url: Option<String>,
    mailers: Vec<String>,
    sent: Vec<OutgoingMail>,
    template: Option<MailTemplate>,
    slots: Option<Vec<DaySlots>>,
    last_meeting: Option<MeetingRequest>,
    failure_status: Option<u16>,
}

/// A backend whose answers are set up front. Anything not scripted fails with a 500,
/// or with the status given to [`MockBackend::fail_with_status`].
#[derive(Default)]
pub struct MockBackend {
    script: Mutex<Script>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn with<T>(&self, f: impl FnOnce(&mut Script) -> T) -> T {
        let mut script = self.script.lock().unwrap();
        f(&mut script)
    }

    fn record(&self, call: impl Into<String>) {
        let call = call.into();
        self.with(|s| s.calls.push(call));
    }

    fn unavailable(&self) -> ApiError {
        match self.with(|s| s.failure_status) {
            Some(404) => ApiError::Status {
                status: 404,
                body: "Not Found".to_string(),
            },
            Some(status) => ApiError::Status {
                status,
                body: "Request failed".to_string(),
            },
            None => ApiError::Status {
                status: 500,
                body: "Internal Server Error".to_string(),
            },
        }
    }

    pub fn fail_with_status(&self, status: u16) {
        self.with(|s| s.failure_status = Some(status));
    }

    pub fn calls(&self) -> Vec<String> {
        self.with(|s| s.calls.clone())
    }

    pub fn set_user(&self, user: UserInfo) {
        self.with(|s| s.user = Some(user));
    }

    pub fn fail_login(&self) {
        self.with(|s| s.login_fails = true);
    }

    pub fn fail_logout(&self) {
        self.with(|s| s.logout_fails = true);
    }

    pub fn set_register_credits(&self, credits: i64) {
        self.with(|s| s.register_credits = Some(credits));
    }

    pub fn push_credit(&self, result: Result<i64, ApiError>) {
        self.with(|s| s.credits.push_back(result));
    }

    pub fn set_generated(&self, leads: Vec<LeadRecord>, query_id: Option<&str>) {
        let response = LeadGenResponse {
            leads,
            query_id: query_id.map(str::to_string),
        };
        self.with(|s| s.generated = Some(response));
    }

    pub fn set_enriched(&self, leads: Vec<LeadRecord>) {
        self.with(|s| s.enriched = Some(leads));
    }

    pub fn last_enrichment(&self) -> Option<EnrichmentRequest> {
        self.with(|s| s.last_enrichment.clone())
    }

    pub fn set_preview(&self, leads: Vec<LeadRecord>) {
        self.with(|s| s.preview = Some(leads));
    }

    pub fn set_bulk(&self, leads: Vec<LeadRecord>) {
        self.with(|s| s.bulk = Some(leads));
    }

    pub fn set_queries(&self, queries: Vec<String>) {
        self.with(|s| s.queries = queries);
    }

    pub fn set_query_leads(&self, leads: Vec<LeadRecord>) {
        self.with(|s| s.query_leads = Some(leads));
    }

    pub fn set_auth_url(&self, url: &str) {
        let url = url.to_string();
        self.with(|s| s.auth_url = Some(url));
    }

    pub fn set_mailers(&self, mailers: Vec<String>) {
        self.with(|s| s.mailers = mailers);
    }

    pub fn sent(&self) -> Vec<OutgoingMail> {
        self.with(|s| s.sent.clone())
    }

    pub fn set_template(&self, template: MailTemplate) {
        self.with(|s| s.template = Some(template));
    }

    pub fn set_slots(&self, slots: Vec<DaySlots>) {
        self.with(|s| s.slots = Some(slots));
    }

    pub fn last_meeting(&self) -> Option<MeetingRequest> {
        self.with(|s| s.last_meeting.clone())
    }
}

impl Backend for MockBackend {
    async fn verify_auth(&self) -> Result<UserInfo, ApiError> {
        self.record("verify_auth");
        self.with(|s| s.user.clone()).ok_or(ApiError::Status {
            status: 401,
            body: "Not authenticated".to_string(),
        })
    }

    async fn login(&self, username: &str, _password: &str) -> Result<(), ApiError> {
        self.record(format!("login:{username}"));
        if self.with(|s| s.login_fails) {
            return Err(ApiError::Status {
                status: 401,
                body: "Invalid credentials".to_string(),
            });
        }
        Ok(())
    }

    async fn register(
        &self,
        username: &str,
        _password: &str,
        _email: &str,
    ) -> Result<RegisterResponse, ApiError> {
        self.record(format!("register:{username}"));
        self.with(|s| s.register_credits)
            .map(|credits| RegisterResponse { credits })
            .ok_or_else(|| self.unavailable())
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.record("logout");
        if self.with(|s| s.logout_fails) {
            return Err(self.unavailable());
        }
        Ok(())
    }

    async fn find_credit(&self) -> Result<i64, ApiError> {
        self.record("find_credit");
        self.with(|s| s.credits.pop_front())
            .unwrap_or_else(|| Err(self.unavailable()))
    }

    async fn generate_leads(&self, content: &str) -> Result<LeadGenResponse, ApiError> {
        self.record(format!("lead_gen:{content}"));
        self.with(|s| s.generated.clone()).ok_or_else(|| self.unavailable())
    }

    async fn enrich_profiles(&self, request: &EnrichmentRequest) -> Result<Vec<LeadRecord>, ApiError> {
        self.record("enrich_profiles");
        let request = request.clone();
        self.with(|s| {
            s.last_enrichment = Some(request);
            s.enriched.clone()
        })
        .ok_or_else(|| self.unavailable())
    }

    async fn enrichment_preview(&self) -> Result<Vec<LeadRecord>, ApiError> {
        self.record("enrichment_preview");
        self.with(|s| s.preview.clone()).ok_or_else(|| self.unavailable())
    }

    async fn bulk_leads(&self) -> Result<Vec<LeadRecord>, ApiError> {
        self.record("bulk_leads");
        self.with(|s| s.bulk.clone()).ok_or_else(|| self.unavailable())
    }

    async fn existing_queries(&self) -> Result<Vec<String>, ApiError> {
        self.record("existing_queries");
        Ok(self.with(|s| s.queries.clone()))
    }

    async fn existing_query_leads(&self, value: &str) -> Result<Vec<LeadRecord>, ApiError> {
        self.record(format!("existing_query_leads:{value}"));
        self.with(|s| s.query_leads.clone()).ok_or_else(|| self.unavailable())
    }

    async fn initiate_mail_auth(&self) -> Result<String, ApiError> {
        self.record("initiate_mail_auth");
        self.with(|s| s.auth_url.clone()).ok_or_else(|| self.unavailable())
    }

    async fn authenticated_mailers(&self) -> Result<Vec<String>, ApiError> {
        self.record("authenticated_mailers");
        Ok(self.with(|s| s.mailers.clone()))
    }

    async fn send_mail(&self, mail: &OutgoingMail) -> Result<(), ApiError> {
        self.record("send_mail");
        let mail = mail.clone();
        self.with(|s| s.sent.push(mail));
        Ok(())
    }

    async fn generate_mail_template(&self, content: &str) -> Result<MailTemplate, ApiError> {
        self.record(format!("mail_template:{content}"));
        self.with(|s| s.template.clone()).ok_or_else(|| self.unavailable())
    }

    async fn free_slots(&self, id: &str) -> Result<Vec<DaySlots>, ApiError> {
        self.record(format!("free_slots:{id}"));
        self.with(|s| s.slots.clone()).ok_or_else(|| self.unavailable())
    }

    async fn schedule_meeting(&self, request: &MeetingRequest) -> Result<ScheduledMeeting, ApiError> {
        self.record(format!("schedule_meeting:{}", request.id));
        let meeting = ScheduledMeeting {
            id: "evt-1".to_string(),
            summary: request.title.clone(),
            start: serde_json::Value::String(request.start_time.clone()),
            end: serde_json::Value::String(request.end_time.clone()),
            html_link: "https://calendar.example/evt-1".to_string(),
        };
        let request = request.clone();
        self.with(|s| s.last_meeting = Some(request));
        Ok(meeting)
    }
}
