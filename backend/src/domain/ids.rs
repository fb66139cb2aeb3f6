//! Unique id generation for clients and visits.
//!
//! The reference behavior minted ids from wall-clock milliseconds, which
//! collides when two records are created in the same millisecond. Ids are
//! generated through an injected `IdGenerator` instead, with UUID v4 as
//! the production implementation.

use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Source of unique ids, injected into the services that create records.
pub trait IdGenerator: Send + Sync {
    /// Generate a globally unique client id
    fn client_id(&self) -> String;

    /// Generate a visit id, unique within any client
    fn visit_id(&self) -> String;
}

/// Production generator backed by UUID v4.
#[derive(Debug, Default, Clone)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn client_id(&self) -> String {
        format!("client::{}", Uuid::new_v4())
    }

    fn visit_id(&self) -> String {
        format!("visit::{}", Uuid::new_v4())
    }
}

/// Deterministic generator for tests: "client::1", "visit::2", ...
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    counter: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    fn next(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::SeqCst) + 1
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn client_id(&self) -> String {
        format!("client::{}", self.next())
    }

    fn visit_id(&self) -> String {
        format!("visit::{}", self.next())
    }
}
