//! Unified error types for the domain layer
//!
//! The value model itself never fails; errors only arise from application-level
//! operations such as marking a team correct or evaluating a player's choice.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Entity not found (e.g., a team index past the end of the list)
    #[error("Entity not found: {entity_type} at index {index}")]
    NotFound {
        entity_type: &'static str,
        index: usize,
    },

    /// Business rule violation
    #[error("Constraint violation: {0}")]
    Constraint(String),
}

impl DomainError {
    /// Create a not found error for an indexed entity
    pub fn not_found(entity_type: &'static str, index: usize) -> Self {
        Self::NotFound { entity_type, index }
    }

    /// Create a constraint violation error
    pub fn constraint(msg: impl Into<String>) -> Self {
        Self::Constraint(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let err = DomainError::not_found("Team", 4);
        assert!(matches!(err, DomainError::NotFound { .. }));
        assert_eq!(err.to_string(), "Entity not found: Team at index 4");
    }

    #[test]
    fn test_constraint_error() {
        let err = DomainError::constraint("selected team is the correct team");
        assert!(matches!(err, DomainError::Constraint(_)));
        assert_eq!(
            err.to_string(),
            "Constraint violation: selected team is the correct team"
        );
    }
}
