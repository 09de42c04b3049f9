//! Unified error types for the domain layer
//!
//! Almost nothing in the trainer card domain fails: malformed numeric input is
//! coerced and malformed documents fall back to defaults. The few helpers that
//! can reject input (slot lookups, stat names, arithmetic expressions) report
//! through this type so callers have one error to match on.

use thiserror::Error;

use crate::value_objects::ExpressionError;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Entity not found
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Slot index outside a storage box
    #[error("Slot {slot} is outside the box (0..{capacity})")]
    SlotOutOfRange { slot: u32, capacity: u32 },
}

impl DomainError {
    /// Creates a validation error for rejected edits.
    ///
    /// # Example
    /// ```ignore
    /// if name.trim().is_empty() {
    ///     return Err(DomainError::validation("Talent name cannot be empty"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations when the input string
    /// doesn't match any known variant or format.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a slot out of range error
    pub fn slot_out_of_range(slot: u32, capacity: u32) -> Self {
        Self::SlotOutOfRange { slot, capacity }
    }
}

impl From<ExpressionError> for DomainError {
    fn from(err: ExpressionError) -> Self {
        Self::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("name cannot be empty");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(err.to_string(), "Validation failed: name cannot be empty");
    }

    #[test]
    fn test_not_found_error() {
        let err = DomainError::not_found("Skill", "Acrobacia");
        assert!(matches!(err, DomainError::NotFound { .. }));
        assert!(err.to_string().contains("Skill"));
        assert!(err.to_string().contains("Acrobacia"));
    }

    #[test]
    fn test_from_expression_error() {
        let domain_err: DomainError = ExpressionError::UnexpectedEnd.into();
        assert!(matches!(domain_err, DomainError::Parse(_)));
        assert!(domain_err.to_string().contains("Unexpected end"));
    }

    #[test]
    fn test_slot_out_of_range_error() {
        let err = DomainError::slot_out_of_range(31, 30);
        assert_eq!(err.to_string(), "Slot 31 is outside the box (0..30)");
    }
}
