//! Board state ownership and change notification.
//!
//! # Responsibility
//! - Hold the one authoritative project collection per application run.
//! - Fan out ordered snapshots to registered listeners after mutations.
//!
//! # Invariants
//! - Only the store mutates the collection.
//! - Every listener observes every successful mutation exactly once, in
//!   registration order.

pub mod project_store;
