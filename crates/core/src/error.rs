//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// The only failures this layer produces concern entity identifiers: absent
/// or empty, or malformed for kinds that parse structured identifiers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An identifier was absent or empty.
    #[error("identifier missing or empty")]
    MissingId,

    /// An identifier was malformed (e.g. parse failure in a typed wrapper).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn missing_id() -> Self {
        Self::MissingId
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_are_stable() {
        assert_eq!(
            DomainError::missing_id().to_string(),
            "identifier missing or empty"
        );
        assert_eq!(
            DomainError::invalid_id("DeviceId: bad segment").to_string(),
            "invalid identifier: DeviceId: bad segment"
        );
    }
}
