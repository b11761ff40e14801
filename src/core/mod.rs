//! Core module - the entity store, query engine, and supporting types

pub mod codec;
pub mod config;
pub mod document;
pub mod identity;
pub mod query;
pub mod storage;
pub mod store;
pub mod validate;

pub use codec::CodecError;
pub use config::Config;
pub use document::{Collection, Document};
pub use identity::IdPrefix;
pub use storage::{FileBackend, MemoryBackend, StorageBackend, StorageError};
pub use store::{Store, StoreError};
pub use validate::ValidationError;
