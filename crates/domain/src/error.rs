//! Unified error type for the domain layer
//!
//! Every academic or resource-management rule violation surfaces as a
//! [`DomainError`] kind; nothing is caught or retried inside the core.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Malformed input (blank strings, out-of-range grade)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Academic-rule violation (unknown curriculum, subject not taught/required)
    #[error("Enrollment rule violated: {0}")]
    Enrollment(String),

    /// Resource-availability violation (duplicate entity, exhausted stock)
    #[error("Resource unavailable: {0}")]
    Resource(String),

    /// Invalid state transition (classroom already occupied, exam already held)
    #[error("Invalid state transition: {0}")]
    State(String),

    /// A handle that no longer resolves against the aggregate's collections
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
}

impl DomainError {
    /// Creates a validation error for malformed input.
    ///
    /// Use this when a value fails its local checks:
    /// - Required names are empty after trimming
    /// - A grade is outside the allowed range
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an enrollment error for academic-rule violations
    pub fn enrollment(msg: impl Into<String>) -> Self {
        Self::Enrollment(msg.into())
    }

    /// Create a resource error for availability violations
    pub fn resource(msg: impl Into<String>) -> Self {
        Self::Resource(msg.into())
    }

    /// Create a state error for invalid transitions
    pub fn state(msg: impl Into<String>) -> Self {
        Self::State(msg.into())
    }

    /// Create a not found error for a dangling handle
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("subject name cannot be empty");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(
            err.to_string(),
            "Validation failed: subject name cannot be empty"
        );
    }

    #[test]
    fn test_enrollment_error() {
        let err = DomainError::enrollment("curriculum 'IT' does not exist");
        assert!(matches!(err, DomainError::Enrollment(_)));
        assert!(err.to_string().contains("curriculum 'IT'"));
    }

    #[test]
    fn test_resource_error() {
        let err = DomainError::resource("all copies of '1984' are on loan");
        assert!(matches!(err, DomainError::Resource(_)));
        assert_eq!(
            err.to_string(),
            "Resource unavailable: all copies of '1984' are on loan"
        );
    }

    #[test]
    fn test_state_error() {
        let err = DomainError::state("classroom 101 is already occupied");
        assert!(matches!(err, DomainError::State(_)));
        assert!(err.to_string().starts_with("Invalid state transition"));
    }

    #[test]
    fn test_not_found_error() {
        let err = DomainError::not_found("Student", "123e4567-e89b-12d3-a456-426614174000");
        assert!(matches!(err, DomainError::NotFound { .. }));
        assert!(err.to_string().contains("Student"));
        assert!(err.to_string().contains("123e4567"));
    }
}
