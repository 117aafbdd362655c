//! Unified error types for the domain layer
//!
//! Provides a common error type that can be used across all domain operations,
//! enabling consistent error handling without forcing callers to use String or anyhow.

use thiserror::Error;

/// Why an ability score write was refused.
///
/// The creation form discards these (the field keeps its previous value), but
/// the kinds are kept distinct so a caller can surface them if it wants to.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AbilityScoreError {
    /// Input text is not an integer
    #[error("Ability score is not a number: {0:?}")]
    NotANumber(String),
    /// Integer outside the point-buy range
    #[error("Ability score {0} is outside the point-buy range 8-15")]
    OutOfRange(i32),
}

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for business rule violations.
    ///
    /// Use this when a value is outside the range a rule allows.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations when the input string
    /// doesn't match any known variant or format.
    ///
    /// # Example
    /// ```ignore
    /// impl FromStr for DraftField {
    ///     type Err = DomainError;
    ///     fn from_str(s: &str) -> Result<Self, Self::Err> {
    ///         match s {
    ///             "name" => Ok(Self::Name),
    ///             _ => Err(DomainError::parse(format!("Unknown draft field: {}", s))),
    ///         }
    ///     }
    /// }
    /// ```
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

impl From<AbilityScoreError> for DomainError {
    fn from(err: AbilityScoreError) -> Self {
        Self::validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("strength must be 8-15");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(err.to_string(), "Validation failed: strength must be 8-15");
    }

    #[test]
    fn test_parse_error() {
        let err = DomainError::parse("Unknown ability: LUCK");
        assert!(matches!(err, DomainError::Parse(_)));
        assert_eq!(err.to_string(), "Parse error: Unknown ability: LUCK");
    }

    #[test]
    fn test_from_ability_score_error() {
        let domain_err: DomainError = AbilityScoreError::OutOfRange(16).into();
        assert!(matches!(domain_err, DomainError::Validation(_)));
        assert!(domain_err.to_string().contains("16"));
        assert!(domain_err.to_string().contains("8-15"));
    }

    #[test]
    fn test_not_a_number_message() {
        let err = AbilityScoreError::NotANumber("abc".to_string());
        assert_eq!(err.to_string(), "Ability score is not a number: \"abc\"");
    }
}
