//! # API crate: the MarkAssist client core
//!
//! Everything the dashboard does that is not rendering: talking to the backend,
//! tracking the session and credit balance, and the per-page lead workflows. The UI
//! crates hold signals and call into this crate; the logic here is written against
//! the [`Backend`] trait and the `store` crate's [`LeadCache`](store::LeadCache) so it
//! runs unchanged in unit tests.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | The [`Backend`] trait (one method per endpoint) and the reqwest-backed [`HttpBackend`] |
//! | [`config`] | `markassist.toml`: backend origin, request timeout, billing hand-off |
//! | [`error`] | [`ApiError`], the transport / status / decode / validation taxonomy |
//! | [`models`] | Request and response bodies, [`UserInfo`] |
//! | [`session`] | Auth state machine: verify, login, register, logout, route guard decisions |
//! | [`credits`] | Credit balance, fetch, and the refresh-then-act gate |
//! | [`leads`] | Response decoding, selection, filtering, row view model, generation and enrichment |
//! | [`export`] | CSV / "Excel" export of lead tables |
//! | [`mail`] | AI mail templates, recipients, multipart send |
//! | [`calendar`] | Free slots, meeting windows, booking |
//! | [`oauth`] | Gmail connect hand-off and callback parsing |
//! | [`notice`] | User-visible notices and the [`Notify`] sink |

pub mod calendar;
pub mod client;
pub mod config;
pub mod credits;
pub mod error;
pub mod export;
pub mod leads;
pub mod mail;
pub mod models;
pub mod notice;
pub mod oauth;
pub mod session;

#[cfg(test)]
mod testing;

pub use client::{Backend, HttpBackend};
pub use config::ClientConfig;
pub use credits::{CreditCell, CreditState, GateOutcome};
pub use error::ApiError;
pub use models::UserInfo;
pub use notice::{Notice, NoticeLevel, NoticeQueue, Notify};
pub use session::{AuthState, GuardDecision};
