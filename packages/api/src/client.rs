//! # Backend client
//!
//! [`Backend`] is the seam between the dashboard and the remote MarkAssist service:
//! one method per endpoint the client consumes. Session, credit and lead logic is
//! written against the trait so it can be exercised with a scripted backend in tests.
//!
//! [`HttpBackend`] is the production implementation. It owns transport details only:
//! URL building against the configured origin, credentials, status mapping and JSON
//! decoding into the crate's models.
//!
//! ## Credentials
//!
//! Authentication is a session cookie set by `/login`. In the browser every request
//! is sent with `credentials: "include"`; on native targets the client keeps its own
//! cookie jar and applies the configured request timeout.

use std::future::Future;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use store::LeadRecord;
use url::Url;

use crate::calendar::{DaySlots, MeetingRequest, ScheduledMeeting};
use crate::config::BackendConfig;
use crate::error::ApiError;
use crate::leads::{decode_leads, decode_suggestions};
use crate::mail::{MailTemplate, OutgoingMail};
use crate::models::{
    AuthInitiateResponse, BulkRequest, CreditResponse, EnrichmentRequest, LeadGenRequest,
    LeadGenResponse, LoginRequest, MailerResponse, QueryValueRequest, RegisterRequest,
    RegisterResponse, TemplateRequest, UserInfo,
};

const BULK_SESSION_ID: &str = "default_session";

/// Every backend endpoint the dashboard calls.
pub trait Backend {
    /// `GET /auth/verify`
    fn verify_auth(&self) -> impl Future<Output = Result<UserInfo, ApiError>>;
    /// `POST /login`
    fn login(&self, username: &str, password: &str) -> impl Future<Output = Result<(), ApiError>>;
    /// `POST /register`
    fn register(
        &self,
        username: &str,
        password: &str,
        email: &str,
    ) -> impl Future<Output = Result<RegisterResponse, ApiError>>;
    /// `POST /logout`
    fn logout(&self) -> impl Future<Output = Result<(), ApiError>>;
    /// `POST /find_credit`
    fn find_credit(&self) -> impl Future<Output = Result<i64, ApiError>>;
    /// `POST /lead_gen`
    fn generate_leads(&self, content: &str)
        -> impl Future<Output = Result<LeadGenResponse, ApiError>>;
    /// `POST /update_linkedin_profiles_with_lusha_bulk`
    fn enrich_profiles(
        &self,
        request: &EnrichmentRequest,
    ) -> impl Future<Output = Result<Vec<LeadRecord>, ApiError>>;
    /// `POST /find_all_enrichemnt_value`
    fn enrichment_preview(&self) -> impl Future<Output = Result<Vec<LeadRecord>, ApiError>>;
    /// `POST /find_bulk_data`
    fn bulk_leads(&self) -> impl Future<Output = Result<Vec<LeadRecord>, ApiError>>;
    /// `GET /find_existing_query/`
    fn existing_queries(&self) -> impl Future<Output = Result<Vec<String>, ApiError>>;
    /// `POST /find_existing_query_value`
    fn existing_query_leads(
        &self,
        value: &str,
    ) -> impl Future<Output = Result<Vec<LeadRecord>, ApiError>>;
    /// `GET /auth/initiate`, returning the provider's consent URL.
    fn initiate_mail_auth(&self) -> impl Future<Output = Result<String, ApiError>>;
    /// `GET /fetch_authenticate_mailer`
    fn authenticated_mailers(&self) -> impl Future<Output = Result<Vec<String>, ApiError>>;
    /// `POST /send-mail` (multipart)
    fn send_mail(&self, mail: &OutgoingMail) -> impl Future<Output = Result<(), ApiError>>;
    /// `POST /mail-template-gen`
    fn generate_mail_template(
        &self,
        content: &str,
    ) -> impl Future<Output = Result<MailTemplate, ApiError>>;
    /// `GET /calendar/free-slots?id=`
    fn free_slots(&self, id: &str) -> impl Future<Output = Result<Vec<DaySlots>, ApiError>>;
    /// `POST /calendar/schedule-meeting?id=`
    fn schedule_meeting(
        &self,
        request: &MeetingRequest,
    ) -> impl Future<Output = Result<ScheduledMeeting, ApiError>>;
}

/// Reqwest-backed [`Backend`] talking to one fixed origin.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: Client,
    base: Url,
}

/// Two clients for the same origin are interchangeable.
impl PartialEq for HttpBackend {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base
    }
}

impl HttpBackend {
    /// Build a client for the configured origin.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] when the base URL does not parse or the HTTP
    /// client cannot be constructed.
    pub fn new(config: &BackendConfig) -> Result<Self, ApiError> {
        let base = Url::parse(&config.base_url)?;
        if base.cannot_be_a_base() {
            return Err(ApiError::Config(format!(
                "{} cannot be used as a base URL",
                config.base_url
            )));
        }
        Ok(Self {
            client: build_client(config)?,
            base,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let builder = self.client.request(method, self.base.join(path)?);
        #[cfg(target_arch = "wasm32")]
        let builder = builder.fetch_credentials_include();
        Ok(builder)
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Vec<u8>, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        let url = response.url().path().to_string();
        let body = response.bytes().await?;
        if !status.is_success() {
            let text = String::from_utf8_lossy(&body).trim().to_string();
            tracing::error!("{url} failed with {status}: {text}");
            let body = if text.is_empty() {
                status.canonical_reason().unwrap_or("Request failed").to_string()
            } else {
                text
            };
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body.to_vec())
    }

    async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let body = self.send(builder).await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_client(config: &BackendConfig) -> Result<Client, ApiError> {
    let mut builder = Client::builder().cookie_store(true);
    if let Some(timeout) = config.request_timeout() {
        builder = builder.timeout(timeout);
    }
    builder.build().map_err(|e| ApiError::Config(e.to_string()))
}

#[cfg(target_arch = "wasm32")]
fn build_client(_config: &BackendConfig) -> Result<Client, ApiError> {
    Client::builder()
        .build()
        .map_err(|e| ApiError::Config(e.to_string()))
}

fn mail_form(mail: &OutgoingMail) -> Result<Form, ApiError> {
    let mut form = Form::new()
        .text("mailer", mail.mailer.clone())
        .text("to_email", mail.to.join(","))
        .text("subject", mail.subject.clone())
        .text("message", mail.message.clone());
    for attachment in &mail.attachments {
        let mut part = Part::bytes(attachment.bytes.clone()).file_name(attachment.file_name.clone());
        if let Some(content_type) = &attachment.content_type {
            part = part
                .mime_str(content_type)
                .map_err(|e| ApiError::validation(format!("{}: {e}", attachment.file_name)))?;
        }
        form = form.part("attachments", part);
    }
    Ok(form)
}

impl Backend for HttpBackend {
    async fn verify_auth(&self) -> Result<UserInfo, ApiError> {
        self.send_json(self.request(Method::GET, "/auth/verify")?).await
    }

    async fn login(&self, username: &str, password: &str) -> Result<(), ApiError> {
        let body = LoginRequest { username, password };
        self.send(self.request(Method::POST, "/login")?.json(&body))
            .await
            .map(|_| ())
    }

    async fn register(
        &self,
        username: &str,
        password: &str,
        email: &str,
    ) -> Result<RegisterResponse, ApiError> {
        let body = RegisterRequest {
            username,
            password,
            email,
        };
        self.send_json(self.request(Method::POST, "/register")?.json(&body))
            .await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.send(self.request(Method::POST, "/logout")?)
            .await
            .map(|_| ())
    }

    async fn find_credit(&self) -> Result<i64, ApiError> {
        let response: CreditResponse = self
            .send_json(self.request(Method::POST, "/find_credit")?)
            .await?;
        Ok(response.credit)
    }

    async fn generate_leads(&self, content: &str) -> Result<LeadGenResponse, ApiError> {
        let body = LeadGenRequest { content };
        self.send_json(self.request(Method::POST, "/lead_gen")?.json(&body))
            .await
    }

    async fn enrich_profiles(&self, request: &EnrichmentRequest) -> Result<Vec<LeadRecord>, ApiError> {
        let builder = self
            .request(Method::POST, "/update_linkedin_profiles_with_lusha_bulk")?
            .json(request);
        decode_leads(&self.send(builder).await?)
    }

    async fn enrichment_preview(&self) -> Result<Vec<LeadRecord>, ApiError> {
        let builder = self.request(Method::POST, "/find_all_enrichemnt_value")?;
        decode_leads(&self.send(builder).await?)
    }

    async fn bulk_leads(&self) -> Result<Vec<LeadRecord>, ApiError> {
        let body = BulkRequest {
            session_id: BULK_SESSION_ID,
        };
        let builder = self.request(Method::POST, "/find_bulk_data")?.json(&body);
        decode_leads(&self.send(builder).await?)
    }

    async fn existing_queries(&self) -> Result<Vec<String>, ApiError> {
        let builder = self.request(Method::GET, "/find_existing_query/")?;
        decode_suggestions(&self.send(builder).await?)
    }

    async fn existing_query_leads(&self, value: &str) -> Result<Vec<LeadRecord>, ApiError> {
        let body = QueryValueRequest { value };
        let builder = self
            .request(Method::POST, "/find_existing_query_value")?
            .json(&body);
        decode_leads(&self.send(builder).await?)
    }

    async fn initiate_mail_auth(&self) -> Result<String, ApiError> {
        let response: AuthInitiateResponse = self
            .send_json(self.request(Method::GET, "/auth/initiate")?)
            .await?;
        Ok(response.auth_url)
    }

    async fn authenticated_mailers(&self) -> Result<Vec<String>, ApiError> {
        let response: MailerResponse = self
            .send_json(self.request(Method::GET, "/fetch_authenticate_mailer")?)
            .await?;
        Ok(response.mailer)
    }

    async fn send_mail(&self, mail: &OutgoingMail) -> Result<(), ApiError> {
        let builder = self
            .request(Method::POST, "/send-mail")?
            .multipart(mail_form(mail)?);
        self.send(builder).await.map(|_| ())
    }

    async fn generate_mail_template(&self, content: &str) -> Result<MailTemplate, ApiError> {
        let body = TemplateRequest { content };
        self.send_json(self.request(Method::POST, "/mail-template-gen")?.json(&body))
            .await
    }

    async fn free_slots(&self, id: &str) -> Result<Vec<DaySlots>, ApiError> {
        let builder = self
            .request(Method::GET, "/calendar/free-slots")?
            .query(&[("id", id)]);
        self.send_json(builder).await
    }

    async fn schedule_meeting(&self, request: &MeetingRequest) -> Result<ScheduledMeeting, ApiError> {
        let builder = self
            .request(Method::POST, "/calendar/schedule-meeting")?
            .query(&[("id", request.id.as_str())])
            .json(request);
        self.send_json(builder).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_unusable_base_url() {
        let config = BackendConfig {
            base_url: "not a url".to_string(),
            ..Default::default()
        };
        assert!(matches!(HttpBackend::new(&config), Err(ApiError::Config(_))));

        let config = BackendConfig {
            base_url: "mailto:ops@example.com".to_string(),
            ..Default::default()
        };
        assert!(matches!(HttpBackend::new(&config), Err(ApiError::Config(_))));
    }

    #[test]
    fn test_paths_resolve_against_origin() {
        let backend = HttpBackend::new(&BackendConfig {
            base_url: "https://api.markassist.test".to_string(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(
            backend.base_url().join("/find_existing_query/").unwrap().as_str(),
            "https://api.markassist.test/find_existing_query/"
        );
    }

    #[test]
    fn test_mail_form_rejects_bad_content_type() {
        let mail = OutgoingMail {
            mailer: "me@x.io".into(),
            to: vec!["a@b.io".into()],
            subject: "Hi".into(),
            message: "Hello".into(),
            attachments: vec![crate::mail::Attachment {
                file_name: "deck.pdf".into(),
                content_type: Some("not a mime".into()),
                bytes: vec![1, 2, 3],
            }],
        };
        assert!(matches!(mail_form(&mail), Err(ApiError::Validation(_))));
    }
}
