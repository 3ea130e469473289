// ============================================================================
// Currency Errors
// Error types for currency identity resolution and catalog queries
// ============================================================================

use std::fmt;

/// Errors that can occur while querying a currency catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CurrencyError {
    /// The currency is not present in the catalog under the requested key.
    UnknownCurrency(String),
    /// The requested lookup key is not part of the record schema.
    UnknownLookupKey(String),
    /// The backing data source is missing or unreadable. Fatal: the failure
    /// is cached at first use and never retried.
    CatalogLoadFailure(String),
}

impl fmt::Display for CurrencyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurrencyError::UnknownCurrency(currency) => {
                write!(f, "cannot find ISO currency {}", currency)
            },
            CurrencyError::UnknownLookupKey(key) => {
                write!(f, "cannot find key in the currency record: {}", key)
            },
            CurrencyError::CatalogLoadFailure(detail) => {
                write!(f, "failed to load currency ISO codes: {}", detail)
            },
        }
    }
}

impl std::error::Error for CurrencyError {}

/// Result type alias for currency operations
pub type CurrencyResult<T> = Result<T, CurrencyError>;
