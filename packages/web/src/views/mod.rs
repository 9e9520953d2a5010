mod landing;
pub use landing::Landing;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod dashboard;
pub use dashboard::Dashboard;

mod lead_generation;
pub use lead_generation::LeadGeneration;

mod lead_management;
pub use lead_management::LeadManagement;

mod lead_enrichment;
pub use lead_enrichment::LeadEnrichment;

mod competitor_analysis;
pub use competitor_analysis::CompetitorAnalysis;

mod bulk_leads;
pub use bulk_leads::BulkLeads;

mod slot_scheduler;
pub use slot_scheduler::SlotScheduler;

mod oauth_success;
pub use oauth_success::OAuthSuccess;

mod not_found;
pub use not_found::NotFound;
