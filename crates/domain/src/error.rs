//! Unified error types for the domain layer
//!
//! The derivation path itself never fails. Errors only exist at the edges,
//! where free-form text is parsed into one of the closed vocabularies.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Parse error (for closed vocabularies such as ability keys)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_wraps_message() {
        assert_eq!(
            DomainError::parse("unknown ability 'luck'").to_string(),
            "Parse error: unknown ability 'luck'"
        );
    }
}
