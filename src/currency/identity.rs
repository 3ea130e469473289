// ============================================================================
// Currency Identity
// Value object identifying a currency by exactly one ISO 4217 identifier
// ============================================================================

use super::errors::CurrencyResult;
use super::Currencies;
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::fmt;

/// Identifies a currency by exactly one of its ISO 4217 identifiers.
///
/// The two identifier forms are variants of a sum type, so "exactly one
/// identifier present" is enforced by construction rather than by
/// convention. Equality is same-variant value equality; a code identity
/// never equals a numeric-code identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Currency {
    /// Three-letter alphabetic code, e.g. `USD`.
    Code(String),
    /// Three-digit numeric code, e.g. `840`.
    NumericCode(u16),
}

impl Currency {
    /// Identity from an alphabetic code.
    pub fn from_code(code: impl Into<String>) -> Self {
        Currency::Code(code.into())
    }

    /// Identity from a numeric code.
    pub fn from_numeric_code(numeric_code: u16) -> Self {
        Currency::NumericCode(numeric_code)
    }

    /// The alphabetic code, if this identity carries one.
    pub fn alphabetic_code(&self) -> Option<&str> {
        match self {
            Currency::Code(code) => Some(code),
            Currency::NumericCode(_) => None,
        }
    }

    /// The numeric code, if this identity carries one.
    pub fn numeric_code(&self) -> Option<u16> {
        match self {
            Currency::Code(_) => None,
            Currency::NumericCode(numeric_code) => Some(*numeric_code),
        }
    }

    /// Check whether this currency is part of the passed set.
    ///
    /// # Errors
    /// Propagates `CatalogLoadFailure` from the underlying set.
    pub fn is_available_within<C: Currencies + ?Sized>(
        &self,
        currencies: &C,
    ) -> CurrencyResult<bool> {
        currencies.contains(self)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Currency::Code(code) => f.write_str(code),
            Currency::NumericCode(numeric_code) => write!(f, "{}", numeric_code),
        }
    }
}

// ============================================================================
// Serde (single-string contract)
// ============================================================================
//
// An identity always serializes as one JSON string: the alphabetic code, or
// the numeric code rendered as a string ("356"). Deserialization mirrors
// this, reading an all-digit string as a numeric code.

impl Serialize for Currency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Currency::Code(code) => serializer.serialize_str(code),
            Currency::NumericCode(numeric_code) => serializer.collect_str(numeric_code),
        }
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
            let numeric_code = text.parse().map_err(de::Error::custom)?;
            Ok(Currency::NumericCode(numeric_code))
        } else {
            Ok(Currency::Code(text))
        }
    }
}
