// ============================================================================
// Money Decimal Library
// Exact decimal numbers and ISO 4217 currency data for monetary amounts
// ============================================================================

//! # Money Decimal
//!
//! An exact, non-floating-point decimal representation for monetary amounts,
//! with the rounding machinery needed to move an amount between precisions
//! (e.g. from a ledger's precision to a currency's minor-unit precision).
//!
//! ## Features
//!
//! - **Digit-string values**: numbers are normalized digit strings, so no
//!   binary-float representation error ever enters a value
//! - **Classification predicates** (`is_half`, `is_current_even`, ...) for
//!   implementing rounding-mode policies such as half-up and half-even
//! - **Carry-propagating rounding** over raw digit sequences, growing the
//!   sequence by one digit when a carry ripples past the leftmost position
//! - **ISO 4217 catalog**: an embedded table of currency records with
//!   immutable per-key indexes, queryable by alphabetic or numeric code
//!
//! ## Example
//!
//! ```rust
//! use money_decimal::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Parse a ledger amount and inspect it
//! let amount: DecimalNumber = "7.50".parse()?;
//! assert_eq!(amount.to_string(), "7.5");
//! assert!(amount.is_half());
//!
//! // Resolve a currency's minor-unit precision
//! let currencies = IsoCurrencies::new();
//! let target = currencies.minor_unit_digits(&Currency::from_code("USD"))?;
//! assert_eq!(target, 2);
//!
//! // Round raw digits half-up to that precision (1.995 -> 2.00)
//! let rounded = round_half_up("1995", target as usize, 3)?;
//! assert_eq!(rounded, "2000");
//! # Ok(())
//! # }
//! ```

pub mod currency;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::currency::{
        Currencies, Currency, CurrencyError, CurrencyRecord, CurrencyResult, IsoCurrencies,
    };
    pub use crate::numeric::{round_half_up, DecimalNumber, NumericError, NumericResult};
}
