//! Builder for the base entity shape.

use chrono::{DateTime, Utc};

use crate::entity::EntityCore;
use crate::generator::{IdGenerator, UuidGenerator};
use crate::id::EntityId;

/// Builds an [`EntityCore`], resolving the identifier on `build`.
///
/// An explicitly set identifier is used verbatim; otherwise the configured
/// generator produces a fresh one. Each default build consults the generator
/// independently, and builders share no state with each other.
pub struct EntityCoreBuilder {
    id: Option<EntityId>,
    created_at: Option<DateTime<Utc>>,
    generator: Box<dyn IdGenerator>,
}

impl EntityCoreBuilder {
    pub fn new() -> Self {
        Self {
            id: None,
            created_at: None,
            generator: Box::new(UuidGenerator),
        }
    }

    /// Use `id` verbatim: no normalization, no regeneration.
    pub fn id(mut self, id: EntityId) -> Self {
        self.id = Some(id);
        self
    }

    /// Replace the default UUIDv7 strategy.
    pub fn generator(mut self, generator: impl IdGenerator + 'static) -> Self {
        self.generator = Box::new(generator);
        self
    }

    /// Stamp a known creation time instead of `Utc::now()`.
    pub fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = Some(at);
        self
    }

    pub fn build(self) -> EntityCore {
        let id = match self.id {
            Some(id) => id,
            None => self.generator.generate(),
        };
        let created_at = self.created_at.unwrap_or_else(Utc::now);
        EntityCore::from_parts(id, created_at)
    }
}

impl Default for EntityCoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}
