//! Shared lead cache constructor and the app-wide handles pages pull from context.
//!
//! The cache is backed by the appropriate [`store::KeyValueStore`]:
//! - **Web** (WASM + `web` feature): browser `localStorage` via [`store::LocalStorageStore`]
//! - **Everything else**: an in-process [`store::MemoryStore`]

use api::{ClientConfig, HttpBackend};
use dioxus::prelude::*;
use store::LeadCache;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStorageStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = store::MemoryStore;

pub type AppCache = LeadCache<PlatformStore>;

/// Create the platform-appropriate lead cache.
pub fn make_lead_cache() -> AppCache {
    LeadCache::new(PlatformStore::default())
}

/// Makes config, backend client and lead cache available to every descendant.
#[component]
pub fn AppContext(config: ClientConfig, backend: HttpBackend, children: Element) -> Element {
    use_context_provider(|| config);
    use_context_provider(|| backend);
    use_context_provider(make_lead_cache);
    rsx! {
        {children}
    }
}

pub fn use_backend() -> HttpBackend {
    use_context::<HttpBackend>()
}

pub fn use_lead_cache() -> AppCache {
    use_context::<AppCache>()
}

pub fn use_client_config() -> ClientConfig {
    use_context::<ClientConfig>()
}
