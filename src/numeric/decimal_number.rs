// ============================================================================
// Decimal Number
// Exact string-backed decimal value with classification predicates
// ============================================================================

use super::errors::{NumericError, NumericResult};
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Significant digits retained when converting from a float.
pub const FLOAT_SIGNIFICANT_DIGITS: usize = 8;

/// An exact signed decimal number, held as separated integer and fractional
/// digit strings.
///
/// The integer part carries an optional single leading `-` and no leading
/// zeros other than the literal `"0"`; `"-0"` is retained as a
/// sign-preserving zero so that values like `-0.5` keep their sign. The
/// fractional part carries no trailing zeros; an empty fractional part means
/// the value is an integer.
///
/// Values are immutable: construction either yields a normalized number or
/// fails with [`NumericError::InvalidInput`], and no method mutates an
/// existing value. The classification predicates exist so callers can
/// implement rounding-mode policies (half-up, half-even, ...) on top of
/// [`round_half_up`](super::round_half_up).
///
/// # Example
/// ```ignore
/// use money_decimal::numeric::DecimalNumber;
///
/// let number: DecimalNumber = "007.50".parse()?;
/// assert_eq!(number.to_string(), "7.5");
/// assert!(number.is_half());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DecimalNumber {
    integer_part: String,
    fractional_part: String,
}

impl DecimalNumber {
    /// Create from raw integer-part and fractional-part inputs.
    ///
    /// The integer input is normalized (`""`/`"0"` to `"0"`, a lone `-` to
    /// `"-0"`, leading zeros stripped) and validated. The fractional input is
    /// validated as a pure digit run; stripping its trailing zeros is the
    /// parse path's job, not the constructor's.
    ///
    /// # Errors
    /// Returns `InvalidInput` if both inputs are empty, or if either contains
    /// a character other than an ASCII digit (a single leading `-` is
    /// permitted on the integer input).
    pub fn new(integer_part: &str, fractional_part: &str) -> NumericResult<Self> {
        if integer_part.is_empty() && fractional_part.is_empty() {
            return Err(NumericError::InvalidInput("empty number".to_string()));
        }

        Ok(Self {
            integer_part: Self::parse_integer_part(integer_part)?,
            fractional_part: Self::parse_fractional_part(fractional_part)?,
        })
    }

    /// Create from a float, retaining [`FLOAT_SIGNIFICANT_DIGITS`]
    /// significant digits.
    ///
    /// The float is formatted to a plain decimal expansion before parsing, so
    /// the result is exact only up to that formatting precision, not to full
    /// IEEE-754 exactness: `from_f64(0.1)` equals `"0.1".parse()`, not the
    /// binary fraction 0.1000000000000000055...
    ///
    /// # Errors
    /// Returns `InvalidInput` for NaN or infinite input.
    pub fn from_f64(value: f64) -> NumericResult<Self> {
        if !value.is_finite() {
            return Err(NumericError::InvalidInput(format!(
                "finite floating point expected, got {}",
                value
            )));
        }

        format_significant(value, FLOAT_SIGNIFICANT_DIGITS).parse()
    }

    /// Convert from `rust_decimal::Decimal`.
    ///
    /// This is intended for API boundaries only; the value goes through its
    /// normalized (trailing-zero-free) decimal string.
    pub fn from_decimal(value: rust_decimal::Decimal) -> NumericResult<Self> {
        value.normalize().to_string().parse()
    }

    /// Convert to `rust_decimal::Decimal`.
    ///
    /// # Errors
    /// Returns `InvalidInput` if the value does not fit `Decimal`'s 96-bit
    /// mantissa.
    pub fn to_decimal(&self) -> NumericResult<rust_decimal::Decimal> {
        rust_decimal::Decimal::from_str(&self.to_string())
            .map_err(|e| NumericError::InvalidInput(format!("value does not fit a Decimal: {}", e)))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The normalized integer part, including any leading `-`.
    #[inline]
    pub fn integer_part(&self) -> &str {
        &self.integer_part
    }

    /// The fractional digits, with no trailing zeros; empty for integers.
    #[inline]
    pub fn fractional_part(&self) -> &str {
        &self.fractional_part
    }

    // ========================================================================
    // Classification Predicates
    // ========================================================================

    /// True if the value has fractional digits.
    #[inline]
    pub fn is_decimal(&self) -> bool {
        !self.fractional_part.is_empty()
    }

    /// True if the value has no fractional digits.
    #[inline]
    pub fn is_integer(&self) -> bool {
        self.fractional_part.is_empty()
    }

    /// True if the fractional part is exactly one half.
    ///
    /// Half-even callers use this to detect the midpoint case.
    #[inline]
    pub fn is_half(&self) -> bool {
        self.fractional_part == "5"
    }

    /// Parity of the last integer-part digit.
    ///
    /// Half-even callers round toward the even neighbour when the discarded
    /// remainder is exactly half.
    #[inline]
    pub fn is_current_even(&self) -> bool {
        let last = self.integer_part.as_bytes()[self.integer_part.len() - 1];
        (last - b'0') % 2 == 0
    }

    /// True if the first fractional digit is 5 or more, the half-up decision
    /// on the first discarded digit.
    #[inline]
    pub fn is_closer_to_next(&self) -> bool {
        if self.fractional_part.is_empty() {
            return false;
        }
        self.fractional_part.as_bytes()[0] >= b'5'
    }

    /// True if the value carries a minus sign (including `-0.x` values).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.integer_part.starts_with('-')
    }

    /// Sign factor for callers that add or subtract a rounding increment:
    /// `-1` for negative values, `1` otherwise.
    #[inline]
    pub fn integer_rounding_multiplier(&self) -> i64 {
        if self.is_negative() {
            -1
        } else {
            1
        }
    }

    // ========================================================================
    // Normalization
    // ========================================================================

    fn parse_integer_part(number: &str) -> NumericResult<String> {
        if number.is_empty() || number == "0" {
            return Ok("0".to_string());
        }

        // A lone minus means "negative, integer part zero": the sign arrived
        // with only a fractional part.
        if number == "-" {
            return Ok("-0".to_string());
        }

        let number = number.trim_start_matches('0');
        if number.is_empty() {
            return Err(NumericError::InvalidInput(
                "integer part has no digits left after removing leading zeros".to_string(),
            ));
        }

        for (position, ch) in number.char_indices() {
            if !ch.is_ascii_digit() && !(position == 0 && ch == '-') {
                return Err(NumericError::InvalidInput(format!(
                    "invalid digit {} in integer part {}",
                    ch, number
                )));
            }
        }

        Ok(number.to_string())
    }

    fn parse_fractional_part(number: &str) -> NumericResult<String> {
        for ch in number.chars() {
            if !ch.is_ascii_digit() {
                return Err(NumericError::InvalidInput(format!(
                    "invalid digit {} in fractional part {}",
                    ch, number
                )));
            }
        }

        Ok(number.to_string())
    }
}

// ============================================================================
// Parsing and Display
// ============================================================================

impl FromStr for DecimalNumber {
    type Err = NumericError;

    /// Parse a decimal string, splitting on the first `.`.
    ///
    /// Trailing zeros of the fractional half are stripped before
    /// construction, so `"007.50"` and `"7.5"` parse to the same value. A
    /// second separator lands in the fractional half and fails validation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('.') {
            None => Self::new(s, ""),
            Some((integer, fraction)) => Self::new(integer, fraction.trim_end_matches('0')),
        }
    }
}

impl fmt::Display for DecimalNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.fractional_part.is_empty() {
            f.write_str(&self.integer_part)
        } else {
            write!(f, "{}.{}", self.integer_part, self.fractional_part)
        }
    }
}

// ============================================================================
// Serde (canonical string form)
// ============================================================================

impl Serialize for DecimalNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DecimalNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}

// ============================================================================
// Float Formatting
// ============================================================================

/// Format a finite float to `digits` significant digits as a plain decimal
/// expansion (never exponent notation).
fn format_significant(value: f64, digits: usize) -> String {
    let formatted = format!("{:.*e}", digits.saturating_sub(1), value);
    let Some((mantissa, exponent)) = formatted.split_once('e') else {
        return formatted;
    };
    let exponent: i32 = match exponent.parse() {
        Ok(exponent) => exponent,
        Err(_) => return formatted,
    };

    let negative = mantissa.starts_with('-');
    let mantissa = mantissa.trim_start_matches('-');
    let significant: String = mantissa.chars().filter(|c| *c != '.').collect();

    // Digits that sit before the decimal point.
    let point = exponent + 1;

    let mut out = String::with_capacity(significant.len() + 4);
    if negative {
        out.push('-');
    }
    if point <= 0 {
        out.push_str("0.");
        for _ in 0..-point {
            out.push('0');
        }
        out.push_str(&significant);
    } else if point as usize >= significant.len() {
        out.push_str(&significant);
        for _ in 0..point as usize - significant.len() {
            out.push('0');
        }
    } else {
        out.push_str(&significant[..point as usize]);
        out.push('.');
        out.push_str(&significant[point as usize..]);
    }

    out
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_rejects_empty() {
        assert!(DecimalNumber::new("", "").is_err());
    }

    #[test]
    fn test_new_normalizes_parts() {
        let n = DecimalNumber::new("007", "5").unwrap();
        assert_eq!(n.integer_part(), "7");
        assert_eq!(n.fractional_part(), "5");

        let n = DecimalNumber::new("", "25").unwrap();
        assert_eq!(n.integer_part(), "0");
        assert_eq!(n.to_string(), "0.25");

        let n = DecimalNumber::new("-", "5").unwrap();
        assert_eq!(n.integer_part(), "-0");
        assert_eq!(n.to_string(), "-0.5");
        assert!(n.is_negative());
    }

    #[test]
    fn test_new_rejects_all_zero_integer_input() {
        // Stripping "000" leaves nothing: neither "" nor "0", so invalid.
        assert!(DecimalNumber::new("000", "").is_err());
    }

    #[test]
    fn test_new_rejects_invalid_digits() {
        assert!(DecimalNumber::new("12a", "").is_err());
        assert!(DecimalNumber::new("1-2", "").is_err());
        assert!(DecimalNumber::new("--1", "").is_err());
        assert!(DecimalNumber::new("1", "5a").is_err());
        assert!(DecimalNumber::new("1", "-5").is_err());
    }

    #[test]
    fn test_parse_round_trip() {
        let n: DecimalNumber = "007.50".parse().unwrap();
        assert_eq!(n.integer_part(), "7");
        assert_eq!(n.fractional_part(), "5");
        assert_eq!(n.to_string(), "7.5");

        let n: DecimalNumber = "42".parse().unwrap();
        assert!(n.is_integer());
        assert_eq!(n.to_string(), "42");

        let n: DecimalNumber = "-0.5".parse().unwrap();
        assert_eq!(n.to_string(), "-0.5");

        let n: DecimalNumber = "1.000".parse().unwrap();
        assert_eq!(n.to_string(), "1");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!("".parse::<DecimalNumber>().is_err());
        assert!("1.2.3".parse::<DecimalNumber>().is_err());
        assert!("abc".parse::<DecimalNumber>().is_err());
        assert!("1,5".parse::<DecimalNumber>().is_err());
    }

    #[test]
    fn test_from_f64_precision_bound() {
        let n = DecimalNumber::from_f64(0.1).unwrap();
        assert_eq!(n, "0.1".parse().unwrap());

        let n = DecimalNumber::from_f64(1.0 / 3.0).unwrap();
        assert_eq!(n.to_string(), "0.33333333");

        let n = DecimalNumber::from_f64(-2.5).unwrap();
        assert_eq!(n.to_string(), "-2.5");
        assert!(n.is_negative());

        let n = DecimalNumber::from_f64(0.0).unwrap();
        assert_eq!(n.to_string(), "0");
    }

    #[test]
    fn test_from_f64_rejects_non_finite() {
        assert!(DecimalNumber::from_f64(f64::NAN).is_err());
        assert!(DecimalNumber::from_f64(f64::INFINITY).is_err());
        assert!(DecimalNumber::from_f64(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_is_half() {
        assert!("2.5".parse::<DecimalNumber>().unwrap().is_half());
        assert!(!"2.55".parse::<DecimalNumber>().unwrap().is_half());
        assert!(!"2".parse::<DecimalNumber>().unwrap().is_half());
    }

    #[test]
    fn test_is_current_even() {
        assert!("12.5".parse::<DecimalNumber>().unwrap().is_current_even());
        assert!(!"13.5".parse::<DecimalNumber>().unwrap().is_current_even());
        assert!("-0.5".parse::<DecimalNumber>().unwrap().is_current_even());
    }

    #[test]
    fn test_is_closer_to_next() {
        assert!("1.5".parse::<DecimalNumber>().unwrap().is_closer_to_next());
        assert!("1.61".parse::<DecimalNumber>().unwrap().is_closer_to_next());
        assert!(!"1.49".parse::<DecimalNumber>().unwrap().is_closer_to_next());
        assert!(!"1".parse::<DecimalNumber>().unwrap().is_closer_to_next());
    }

    #[test]
    fn test_integer_rounding_multiplier() {
        let positive: DecimalNumber = "1.5".parse().unwrap();
        assert_eq!(positive.integer_rounding_multiplier(), 1);

        let negative: DecimalNumber = "-1.5".parse().unwrap();
        assert_eq!(negative.integer_rounding_multiplier(), -1);

        let negative_zero: DecimalNumber = "-0.5".parse().unwrap();
        assert_eq!(negative_zero.integer_rounding_multiplier(), -1);
    }

    #[test]
    fn test_decimal_boundary_conversions() {
        use rust_decimal::Decimal;

        let n = DecimalNumber::from_decimal(Decimal::new(12345, 2)).unwrap();
        assert_eq!(n.to_string(), "123.45");

        // Normalization strips trailing zeros before parsing.
        let n = DecimalNumber::from_decimal(Decimal::new(1500, 3)).unwrap();
        assert_eq!(n.to_string(), "1.5");

        let n: DecimalNumber = "-7.25".parse().unwrap();
        assert_eq!(n.to_decimal().unwrap(), Decimal::new(-725, 2));
    }

    #[test]
    fn test_serde_string_form() {
        let n: DecimalNumber = "7.5".parse().unwrap();
        assert_eq!(serde_json::to_string(&n).unwrap(), "\"7.5\"");

        let back: DecimalNumber = serde_json::from_str("\"007.50\"").unwrap();
        assert_eq!(back, n);

        assert!(serde_json::from_str::<DecimalNumber>("\"1.2.3\"").is_err());
    }

    proptest! {
        #[test]
        fn prop_canonical_round_trip(
            s in "(-)?(0|[1-9][0-9]{0,11})(\\.[0-9]{0,10}[1-9])?"
        ) {
            let parsed: DecimalNumber = s.parse().unwrap();
            prop_assert_eq!(parsed.to_string(), s);
        }

        #[test]
        fn prop_display_reparses_to_same_value(
            integer in "-?[0-9]{1,12}",
            fraction in "[0-9]{0,10}",
        ) {
            // Skip inputs the constructor rejects (e.g. all-zero integer runs).
            if let Ok(parsed) = DecimalNumber::new(&integer, fraction.trim_end_matches('0')) {
                let reparsed: DecimalNumber = parsed.to_string().parse().unwrap();
                prop_assert_eq!(reparsed, parsed);
            }
        }
    }
}
