// ============================================================================
// Numeric Module
// String-backed exact decimals for monetary amounts
// ============================================================================
//
// This module provides:
// - DecimalNumber: immutable signed decimal held as normalized digit strings
// - round_half_up: carry-propagating rounding over raw digit strings
// - NumericError: error types for parsing and rounding
//
// Design principles:
// - Values never pass through binary floating point (digit strings only)
// - All fallible operations return Result (no panics)
// - Rounding is unsigned-magnitude; sign and policy belong to callers

mod decimal_number;
mod errors;
mod rounding;

pub use decimal_number::{DecimalNumber, FLOAT_SIGNIFICANT_DIGITS};
pub use errors::{NumericError, NumericResult};
pub use rounding::round_half_up;
