// ============================================================================
// Numeric Errors
// Error types for decimal parsing and digit-string rounding
// ============================================================================

use std::fmt;

/// Errors that can occur while constructing or rounding a decimal number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Input is not a valid decimal number: empty input, a non-digit
    /// character, a misplaced sign, a non-finite float, or a digit window
    /// that does not fit the supplied digit string.
    InvalidInput(String),
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidInput(detail) => {
                write!(f, "invalid input: {}", detail)
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
