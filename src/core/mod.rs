//! In-memory collections backing the inventory.

/// Recency stack of most recently added ids.
pub mod recency;
/// Newest-first record store.
pub mod store;
/// Transient oldest-first traversal queue.
pub mod traversal;
