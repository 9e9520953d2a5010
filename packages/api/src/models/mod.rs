//! Data models for the application.

mod payloads;
mod user;

pub use payloads::{
    AuthInitiateResponse, BulkRequest, CreditResponse, EnrichmentRequest,
    LeadGenRequest, LeadGenResponse, LoginRequest, MailerResponse, ProfileUpdate,
    QueryValueRequest, RegisterRequest, RegisterResponse, TemplateRequest,
};
pub use user::UserInfo;
