//! Persistence module
//!
//! Key-value stores, the snapshot codec and storage key derivation.

pub mod key;
pub mod snapshot;
pub mod store;

// Re-export main types
pub use key::storage_key;
pub use snapshot::PersistedSnapshot;
pub use store::{FileStore, KeyValueStore, MemoryStore};
