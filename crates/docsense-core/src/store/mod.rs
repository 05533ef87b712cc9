//! Storage abstraction for DocSense.
//!
//! The document collection is persisted through a plain key-value
//! capability: the whole collection is serialized to JSON and written
//! under a single key whenever it changes. The [`KeyValueStore`] trait is
//! injected into the [`Session`](crate::session::Session), enabling
//! pluggable backends (SQLite, in-memory).
//!
//! Implementations must be `Send + Sync` to work with async runtimes.

pub mod memory;

use anyhow::Result;
use async_trait::async_trait;

/// Key under which the document collection is stored by default.
pub const DOCUMENTS_KEY: &str = "documents";

/// Abstract key-value backend.
///
/// All operations are async (via `async-trait`) so that database-backed
/// stores can be used from tokio. In-memory implementations return
/// immediately-ready futures.
///
/// | Method | Purpose |
/// |--------|---------|
/// | [`get`](KeyValueStore::get) | Read the serialized value for a key |
/// | [`set`](KeyValueStore::set) | Insert or replace the value for a key |
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, or `None` if it was never set.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Insert or replace the value stored under `key`.
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}
