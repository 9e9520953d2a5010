pub mod cache;
pub mod models;

mod kv;
pub use kv::KeyValueStore;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorageStore;

pub use cache::LeadCache;
pub use models::{EmailContact, LeadBatch, LeadRecord, PhoneContact};
