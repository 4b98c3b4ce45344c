//! Entity trait and the base shape concrete kinds embed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::builder::EntityCoreBuilder;
use crate::id::EntityId;

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// Base shape shared by all entity kinds.
///
/// Concrete kinds embed this by composition rather than inheritance. The
/// identifier is resolved once, at build time, and is immutable afterwards;
/// `created_at` is stamped at the same moment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityCore {
    id: EntityId,
    created_at: DateTime<Utc>,
}

impl EntityCore {
    pub(crate) fn from_parts(id: EntityId, created_at: DateTime<Utc>) -> Self {
        Self { id, created_at }
    }

    /// Start building an `EntityCore` with the default UUIDv7 generator.
    pub fn builder() -> EntityCoreBuilder {
        EntityCoreBuilder::new()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Entity for EntityCore {
    type Id = EntityId;

    fn id(&self) -> &EntityId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    /// A concrete kind the way downstream crates would define one.
    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Device {
        core: EntityCore,
        label: String,
    }

    impl Entity for Device {
        type Id = EntityId;

        fn id(&self) -> &EntityId {
            self.core.id()
        }
    }

    fn test_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn concrete_kind_delegates_identity_to_core() {
        let core = EntityCore::builder()
            .id(EntityId::new("device-7").unwrap())
            .created_at(test_time())
            .build();
        let device = Device {
            core,
            label: "Press #2".to_string(),
        };

        assert_eq!(device.id().as_str(), "device-7");
        assert_eq!(device.core.created_at(), test_time());
    }

    #[test]
    fn serde_round_trips_the_base_shape() {
        let core = EntityCore::builder()
            .id(EntityId::new("BASE_UUID").unwrap())
            .created_at(test_time())
            .build();

        let json = serde_json::to_string(&core).unwrap();
        let back: EntityCore = serde_json::from_str(&json).unwrap();
        assert_eq!(back, core);
    }
}
