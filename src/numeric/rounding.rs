// ============================================================================
// Digit-String Rounding
// Half-up rounding with carry propagation over raw decimal digit strings
// ============================================================================

use super::errors::{NumericError, NumericResult};
use smallvec::SmallVec;

/// Digit buffer sized so typical money values stay on the stack.
type DigitBuf = SmallVec<[u8; 32]>;

/// Round an unsigned digit string to a smaller number of fractional digits,
/// half-up on the first discarded digit.
///
/// `digits` is a sign-stripped run of ASCII digits whose last `having_digits`
/// characters are fractional. When the first discarded digit is 5 or more,
/// the last kept digit is incremented and carries ripple leftward; a carry
/// past the leftmost digit prepends a `1`, growing the string by one.
///
/// Only the kept-digit region is mutated; a cutoff that keeps no digits at
/// all leaves the string untouched. Truncating the discarded suffix and
/// re-applying sign and separator are the caller's responsibility, as is any
/// policy decision (half-even etc.) made before calling.
///
/// # Errors
/// Returns `InvalidInput` if `digits` contains a non-digit byte, or if more
/// fractional digits would be dropped than the string holds.
///
/// # Example
/// ```ignore
/// use money_decimal::numeric::round_half_up;
///
/// // 1.995 to two fractional digits: carry ripples through both nines
/// assert_eq!(round_half_up("1995", 2, 3)?, "2000");
/// ```
pub fn round_half_up(
    digits: &str,
    target_digits: usize,
    having_digits: usize,
) -> NumericResult<String> {
    if let Some(bad) = digits.bytes().find(|b| !b.is_ascii_digit()) {
        return Err(NumericError::InvalidInput(format!(
            "invalid digit {} in digit string {}",
            bad as char, digits
        )));
    }

    // Nothing is discarded, nothing to round.
    if target_digits >= having_digits {
        return Ok(digits.to_string());
    }

    let cutoff = (digits.len() + target_digits)
        .checked_sub(having_digits)
        .ok_or_else(|| {
            NumericError::InvalidInput(format!(
                "cannot drop {} fractional digits from {} digits",
                having_digits - target_digits,
                digits.len()
            ))
        })?;

    // A cutoff at position 0 keeps no digits at all, so there is nothing to
    // carry into; the caller truncates the whole string either way.
    if cutoff == 0 || digits.as_bytes()[cutoff] < b'5' {
        return Ok(digits.to_string());
    }

    let mut buf: DigitBuf = SmallVec::from_slice(digits.as_bytes());
    let mut position = cutoff;
    loop {
        if position == 0 {
            buf.insert(0, b'1');
            break;
        }
        if buf[position - 1] == b'9' {
            buf[position - 1] = b'0';
            position -= 1;
        } else {
            buf[position - 1] += 1;
            break;
        }
    }

    Ok(buf.iter().map(|&b| b as char).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_noop_when_target_equals_having() {
        assert_eq!(round_half_up("1995", 3, 3).unwrap(), "1995");
        assert_eq!(round_half_up("0", 0, 0).unwrap(), "0");
    }

    #[test]
    fn test_noop_when_target_exceeds_having() {
        assert_eq!(round_half_up("1995", 5, 3).unwrap(), "1995");
    }

    #[test]
    fn test_rounds_down_leaves_digits_untouched() {
        // Cutoff digit 4 < 5: the kept prefix is not modified, the discarded
        // suffix is left for the caller to truncate.
        assert_eq!(round_half_up("1994", 2, 3).unwrap(), "1994");
        assert_eq!(round_half_up("12049", 1, 3).unwrap(), "12049");
    }

    #[test]
    fn test_rounds_up_without_carry() {
        assert_eq!(round_half_up("1235", 2, 3).unwrap(), "1245");
        assert_eq!(round_half_up("25", 0, 1).unwrap(), "35");
    }

    #[test]
    fn test_carry_propagates_through_nines() {
        // 1.995 -> 2.00 at two fractional digits
        assert_eq!(round_half_up("1995", 2, 3).unwrap(), "2000");
    }

    #[test]
    fn test_carry_past_leftmost_digit_grows_string() {
        assert_eq!(round_half_up("999", 1, 2).unwrap(), "1000");
        assert_eq!(round_half_up("95", 0, 1).unwrap(), "105");
    }

    #[test]
    fn test_round_to_whole_number() {
        assert_eq!(round_half_up("1995", 0, 3).unwrap(), "2995");
        assert_eq!(round_half_up("1495", 0, 3).unwrap(), "1495");
    }

    #[test]
    fn test_no_kept_digits_leaves_string_untouched() {
        // Dropping every digit leaves no kept region to carry into.
        assert_eq!(round_half_up("995", 0, 3).unwrap(), "995");
    }

    #[test]
    fn test_rejects_non_digit_input() {
        assert!(round_half_up("19-5", 2, 3).is_err());
        assert!(round_half_up("1.95", 2, 3).is_err());
    }

    #[test]
    fn test_rejects_window_wider_than_string() {
        assert!(round_half_up("5", 0, 3).is_err());
    }

    proptest! {
        #[test]
        fn prop_identity_when_nothing_discarded(
            digits in "[0-9]{1,20}",
            having in 0usize..6,
            extra in 0usize..6,
        ) {
            let rounded = round_half_up(&digits, having + extra, having).unwrap();
            prop_assert_eq!(rounded, digits);
        }

        #[test]
        fn prop_length_grows_by_at_most_one(digits in "[0-9]{1,20}", drop in 1usize..5) {
            prop_assume!(drop <= digits.len());
            let rounded = round_half_up(&digits, 0, drop).unwrap();
            prop_assert!(
                rounded.len() == digits.len() || rounded.len() == digits.len() + 1
            );
        }

        #[test]
        fn prop_kept_prefix_unchanged_when_rounding_down(
            digits in "[0-9]{1,20}",
            drop in 1usize..5,
        ) {
            prop_assume!(drop <= digits.len());
            let cutoff = digits.len() - drop;
            prop_assume!(digits.as_bytes()[cutoff] < b'5');
            let rounded = round_half_up(&digits, 0, drop).unwrap();
            prop_assert_eq!(rounded, digits);
        }
    }
}
