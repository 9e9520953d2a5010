//! Gmail connection through the backend's OAuth flow.
//!
//! Connecting is a plain hand-off: remember where to come back to, ask the backend
//! for the provider's consent URL and navigate there. The provider eventually lands
//! the browser on `/oauth-success?auth=true&email=...`, which [`parse_callback`]
//! turns into an [`OAuthCallback`].

use store::{KeyValueStore, LeadCache};

use crate::client::Backend;
use crate::error::ApiError;
use crate::notice::Notice;

pub const DEFAULT_RETURN_PATH: &str = "/dashboard/lead-enrichment";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OAuthCallback {
    Connected { email: String },
    Failed,
}

/// Read the callback query string, with or without its leading `?`.
pub fn parse_callback(query: &str) -> OAuthCallback {
    let mut auth = None;
    let mut email = None;
    for (key, value) in url::form_urlencoded::parse(query.trim_start_matches('?').as_bytes()) {
        match &*key {
            "auth" => auth = Some(value.into_owned()),
            "email" => email = Some(value.into_owned()),
            _ => {}
        }
    }
    match (auth.as_deref(), email) {
        (Some("true"), Some(email)) if !email.is_empty() => OAuthCallback::Connected { email },
        _ => OAuthCallback::Failed,
    }
}

/// Record a successful connection and describe the outcome.
pub fn complete_callback<S: KeyValueStore>(cache: &LeadCache<S>, callback: &OAuthCallback) -> Notice {
    match callback {
        OAuthCallback::Connected { email } => {
            cache.record_gmail_connection(email);
            tracing::info!("Gmail connected for {email}");
            Notice::success(
                "Connected Successfully!",
                format!("Gmail account {email} has been connected successfully."),
            )
        }
        OAuthCallback::Failed => Notice::error(
            "Connection Failed",
            "Failed to connect Gmail account. Please try again.",
        ),
    }
}

/// Where "continue" goes after the callback. Consumes the stored return path.
pub fn continue_target<S: KeyValueStore>(cache: &LeadCache<S>) -> String {
    cache
        .take_return_url()
        .unwrap_or_else(|| DEFAULT_RETURN_PATH.to_string())
}

/// Remember the return path and fetch the consent URL to navigate to.
pub async fn begin_gmail_connect<B, S>(backend: &B, cache: &LeadCache<S>) -> Result<String, ApiError>
where
    B: Backend,
    S: KeyValueStore,
{
    let auth_url = backend.initiate_mail_auth().await?;
    if auth_url.trim().is_empty() {
        return Err(ApiError::UnexpectedShape("No auth URL received".to_string()));
    }
    cache.set_return_url(DEFAULT_RETURN_PATH);
    Ok(auth_url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockBackend;
    use store::cache::{GMAIL_CONNECTED_KEY, RETURN_URL_KEY};
    use store::MemoryStore;

    #[test]
    fn test_parse_callback() {
        assert_eq!(
            parse_callback("?auth=true&email=ana%40acme.io"),
            OAuthCallback::Connected {
                email: "ana@acme.io".to_string()
            }
        );
        assert_eq!(parse_callback("auth=true"), OAuthCallback::Failed);
        assert_eq!(parse_callback("auth=true&email="), OAuthCallback::Failed);
        assert_eq!(parse_callback(""), OAuthCallback::Failed);
    }

    #[test]
    fn test_failed_callback_writes_nothing() {
        let cache = LeadCache::new(MemoryStore::new());
        let notice = complete_callback(&cache, &parse_callback("auth=false"));

        assert!(notice.is_error());
        assert!(cache.store().get(GMAIL_CONNECTED_KEY).is_none());
        assert!(cache.gmail_connection().is_none());
    }

    #[test]
    fn test_connected_callback_records_email() {
        let cache = LeadCache::new(MemoryStore::new());
        let notice = complete_callback(&cache, &parse_callback("auth=true&email=ana@acme.io"));

        assert!(!notice.is_error());
        assert_eq!(cache.gmail_connection().as_deref(), Some("ana@acme.io"));
    }

    #[tokio::test]
    async fn test_connect_stores_return_path_once() {
        let backend = MockBackend::new();
        backend.set_auth_url("https://accounts.example/consent");
        let cache = LeadCache::new(MemoryStore::new());

        let url = begin_gmail_connect(&backend, &cache).await.unwrap();

        assert_eq!(url, "https://accounts.example/consent");
        assert_eq!(
            cache.store().get(RETURN_URL_KEY).as_deref(),
            Some("/dashboard/lead-enrichment")
        );
        assert_eq!(continue_target(&cache), "/dashboard/lead-enrichment");
        assert!(cache.store().get(RETURN_URL_KEY).is_none());

        cache.set_return_url("/dashboard/bulk-leads");
        assert_eq!(continue_target(&cache), "/dashboard/bulk-leads");
    }

    #[tokio::test]
    async fn test_failed_connect_leaves_no_return_path() {
        let backend = MockBackend::new();
        let cache = LeadCache::new(MemoryStore::new());

        assert!(begin_gmail_connect(&backend, &cache).await.is_err());
        assert!(cache.store().get(RETURN_URL_KEY).is_none());

        backend.set_auth_url("  ");
        assert!(begin_gmail_connect(&backend, &cache).await.is_err());
        assert!(cache.store().get(RETURN_URL_KEY).is_none());
    }
}
