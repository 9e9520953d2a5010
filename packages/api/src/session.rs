//! # Session state and route guards
//!
//! The authenticated user is determined once by `GET /auth/verify` and then moves
//! through three phases:
//!
//! | Phase | `AuthState` | Entered by |
//! |-------|------------|-----------|
//! | Unknown | `loading: true` | app start |
//! | Authenticated | `user: Some(_)` | successful verification, login |
//! | Anonymous | `user: None` | failed verification, logout |
//!
//! Login, registration and logout all clear the persisted lead data so nothing
//! carries over from one account to the next. Login and registration clear before
//! the network call, so a failed attempt still leaves a clean cache.

use store::{KeyValueStore, LeadCache};

use crate::client::Backend;
use crate::error::ApiError;
use crate::models::{RegisterResponse, UserInfo};

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Authentication state shared by every page.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthPhase {
    Unknown,
    Authenticated,
    Anonymous,
}

impl AuthState {
    pub fn authenticated(user: UserInfo) -> Self {
        Self {
            user: Some(user),
            loading: false,
        }
    }

    pub fn anonymous() -> Self {
        Self {
            user: None,
            loading: false,
        }
    }

    pub fn phase(&self) -> AuthPhase {
        match (self.loading, &self.user) {
            (true, _) => AuthPhase::Unknown,
            (false, Some(_)) => AuthPhase::Authenticated,
            (false, None) => AuthPhase::Anonymous,
        }
    }
}

/// Ask the backend who the session cookie belongs to. Never fails: any error is
/// an anonymous session.
pub async fn verify_auth<B: Backend>(backend: &B) -> AuthState {
    match backend.verify_auth().await {
        Ok(user) => {
            tracing::info!("Session verified for {}", user.display_name());
            AuthState::authenticated(user)
        }
        Err(e) => {
            tracing::debug!("No active session: {e}");
            AuthState::anonymous()
        }
    }
}

fn require(fields: &[&str]) -> Result<(), ApiError> {
    if fields.iter().any(|f| f.trim().is_empty()) {
        return Err(ApiError::validation("Please fill in all fields"));
    }
    Ok(())
}

/// Log in and return the verified session.
pub async fn login<B, S>(
    backend: &B,
    cache: &LeadCache<S>,
    username: &str,
    password: &str,
) -> Result<AuthState, ApiError>
where
    B: Backend,
    S: KeyValueStore,
{
    require(&[username, password])?;
    cache.clear_session_data();
    backend.login(username, password).await?;
    Ok(verify_auth(backend).await)
}

/// Create an account. Does not log in.
pub async fn register<B, S>(
    backend: &B,
    cache: &LeadCache<S>,
    username: &str,
    password: &str,
    email: &str,
) -> Result<RegisterResponse, ApiError>
where
    B: Backend,
    S: KeyValueStore,
{
    require(&[username, password, email])?;
    cache.clear_session_data();
    backend.register(username, password, email).await
}

/// The state after a logout attempt and what the backend said about it.
#[derive(Debug)]
pub struct LogoutOutcome {
    pub state: AuthState,
    pub result: Result<(), ApiError>,
}

/// End the session. Local state is cleared whatever the backend answers.
pub async fn logout<B, S>(backend: &B, cache: &LeadCache<S>) -> LogoutOutcome
where
    B: Backend,
    S: KeyValueStore,
{
    let result = backend.logout().await;
    if let Err(e) = &result {
        tracing::error!("Logout failed: {e}");
    }
    cache.clear_session_data();
    LogoutOutcome {
        state: AuthState::anonymous(),
        result,
    }
}

/// What a guarded route should do for the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Loading,
    Redirect(&'static str),
    Render,
}

/// Dashboard pages: signed-in users only.
pub fn protected(state: &AuthState) -> GuardDecision {
    match state.phase() {
        AuthPhase::Unknown => GuardDecision::Loading,
        AuthPhase::Anonymous => GuardDecision::Redirect(LOGIN_PATH),
        AuthPhase::Authenticated => GuardDecision::Render,
    }
}

/// Login and registration: signed-out users only.
pub fn public_only(state: &AuthState) -> GuardDecision {
    match state.phase() {
        AuthPhase::Unknown => GuardDecision::Loading,
        AuthPhase::Authenticated => GuardDecision::Redirect(DASHBOARD_PATH),
        AuthPhase::Anonymous => GuardDecision::Render,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{lead, user, MockBackend};
    use store::cache::{GENERATED_LEADS_KEY, QUERY_ID_KEY};
    use store::{LeadBatch, MemoryStore};

    fn seeded_cache() -> LeadCache<MemoryStore> {
        let cache = LeadCache::new(MemoryStore::new());
        cache.store_generated(&LeadBatch::new(vec![lead("Acme", 80.0)], Some("q1".into())));
        cache.store_enriched(&[lead("Acme", 80.0)]);
        cache.store().set("last_session_tab", "bulk");
        cache.store().set("theme", "dark");
        cache
    }

    #[test]
    fn test_phases_and_guards() {
        let unknown = AuthState::default();
        assert_eq!(unknown.phase(), AuthPhase::Unknown);
        assert_eq!(protected(&unknown), GuardDecision::Loading);
        assert_eq!(public_only(&unknown), GuardDecision::Loading);

        let anon = AuthState::anonymous();
        assert_eq!(protected(&anon), GuardDecision::Redirect("/login"));
        assert_eq!(public_only(&anon), GuardDecision::Render);

        let signed_in = AuthState::authenticated(user("ana"));
        assert_eq!(protected(&signed_in), GuardDecision::Render);
        assert_eq!(public_only(&signed_in), GuardDecision::Redirect("/dashboard"));
    }

    #[tokio::test]
    async fn test_verify_failure_is_anonymous() {
        let backend = MockBackend::new();
        let state = verify_auth(&backend).await;
        assert_eq!(state.phase(), AuthPhase::Anonymous);
    }

    #[tokio::test]
    async fn test_failed_login_still_clears_cache_first() {
        let backend = MockBackend::new();
        backend.fail_login();
        let cache = seeded_cache();

        assert!(login(&backend, &cache, "ana", "pw").await.is_err());

        assert!(cache.load_generated().is_none());
        assert!(cache.load_enriched().is_none());
        assert!(cache.store().get(QUERY_ID_KEY).is_none());
        assert!(cache.store().get("last_session_tab").is_none());
        assert_eq!(cache.store().get("theme").as_deref(), Some("dark"));
        assert_eq!(backend.calls(), vec!["login:ana".to_string()]);
    }

    #[tokio::test]
    async fn test_login_verifies_session() {
        let backend = MockBackend::new();
        backend.set_user(user("ana"));
        let cache = seeded_cache();

        let state = login(&backend, &cache, "ana", "pw").await.unwrap();

        assert_eq!(state.phase(), AuthPhase::Authenticated);
        assert_eq!(backend.calls(), vec!["login:ana".to_string(), "verify_auth".to_string()]);
    }

    #[tokio::test]
    async fn test_blank_login_never_reaches_backend() {
        let backend = MockBackend::new();
        let cache = seeded_cache();
        assert!(login(&backend, &cache, "ana", " ").await.unwrap_err().is_validation());
        assert!(backend.calls().is_empty());
        assert!(cache.store().get(GENERATED_LEADS_KEY).is_some());
    }

    #[tokio::test]
    async fn test_register_clears_before_call() {
        let backend = MockBackend::new();
        let cache = seeded_cache();

        assert!(register(&backend, &cache, "bo", "pw", "bo@x.io").await.is_err());
        assert!(cache.store().get(GENERATED_LEADS_KEY).is_none());

        backend.set_register_credits(10);
        let response = register(&backend, &cache, "bo", "pw", "bo@x.io").await.unwrap();
        assert_eq!(response.credits, 10);
    }

    #[tokio::test]
    async fn test_logout_clears_even_when_backend_fails() {
        let backend = MockBackend::new();
        backend.fail_logout();
        let cache = seeded_cache();

        let outcome = logout(&backend, &cache).await;

        assert!(outcome.result.is_err());
        assert_eq!(outcome.state, AuthState::anonymous());
        assert!(cache.load_generated().is_none());
        assert!(cache.query_id().is_none());
    }
}
