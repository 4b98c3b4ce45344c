//! `basis-core` — base entity building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure
//! concerns): a string entity identifier, pluggable identifier generation,
//! and the base shape concrete entity kinds embed by composition.

pub mod builder;
pub mod entity;
pub mod error;
pub mod generator;
pub mod id;

pub use builder::EntityCoreBuilder;
pub use entity::{Entity, EntityCore};
pub use error::{DomainError, DomainResult};
pub use generator::{IdGenerator, SequenceGenerator, UuidGenerator};
pub use id::EntityId;
