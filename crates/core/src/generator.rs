//! Pluggable identifier-generation strategies.

use core::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

use crate::id::EntityId;

/// Identifier-generation strategy.
///
/// Implementations must yield a non-empty identifier on every call, and
/// independent calls must yield independent values. A generator may be shared
/// process-wide, hence the `Send + Sync` bound.
pub trait IdGenerator: Send + Sync {
    /// Produce a fresh identifier.
    fn generate(&self) -> EntityId;
}

/// Default strategy: UUIDv7 (time-ordered).
///
/// Prefer injecting a [`SequenceGenerator`] in tests when assertions need
/// deterministic identifiers.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> EntityId {
        let uuid = Uuid::now_v7();
        tracing::trace!(%uuid, "generated entity id");
        EntityId::from(uuid)
    }
}

/// Deterministic strategy: `{prefix}-{counter}`.
///
/// The counter is atomic so a single generator can be shared across threads
/// without handing out duplicates.
#[derive(Debug)]
pub struct SequenceGenerator {
    prefix: String,
    next: AtomicU64,
}

impl SequenceGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(0),
        }
    }
}

impl IdGenerator for SequenceGenerator {
    fn generate(&self) -> EntityId {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        // The separator keeps the rendered id non-empty for any prefix.
        EntityId::new_unchecked(format!("{}-{}", self.prefix, n))
    }
}
