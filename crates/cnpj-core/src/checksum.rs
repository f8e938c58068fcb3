//! # Check-Digit Core
//!
//! The weighted modulo-11 algorithm behind every CNPJ validation and
//! generation path. [`check_digit`] computes a single digit over an
//! arbitrary-length digit sequence; [`check_digit_pair`] runs the two-stage
//! derivation that produces both verification digits of a full identifier.
//!
//! ## Weight Sequence
//!
//! Walking the digits from the rightmost position leftward, weights run
//! 2, 3, 4, 5, 6, 7, 8, 9 and then wrap back to 2. For the 12-digit base
//! number this yields the row 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2 (left to
//! right); appending the first check digit shifts the row to
//! 6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2.

use crate::error::ValidationError;

/// Compute the modulo-11 check digit for a sequence of decimal digits.
///
/// The digit at 0-based index `i` of an `n`-digit sequence is weighted by
/// `((n - 1 - i) % 8) + 2`. The weighted sum reduced modulo 11 maps to the
/// check digit: remainders 0 and 1 produce 0, everything else produces
/// `11 - remainder`.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyDigitSequence`] if `digits` is empty —
/// the weight cycle has no defined starting position for zero digits.
pub fn check_digit(digits: &[u8]) -> Result<u8, ValidationError> {
    if digits.is_empty() {
        return Err(ValidationError::EmptyDigitSequence);
    }

    let n = digits.len();
    let total: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &digit)| u32::from(digit) * (((n - 1 - i) % 8) as u32 + 2))
        .sum();

    let remainder = total % 11;
    if remainder < 2 {
        Ok(0)
    } else {
        Ok((11 - remainder) as u8)
    }
}

/// Derive both check digits for a base number.
///
/// Two-stage derivation: the first digit is computed over `base`, the second
/// over `base` with the first digit appended. Validation and generation both
/// flow through this single path, so an identifier synthesized here always
/// verifies.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyDigitSequence`] if `base` is empty.
pub fn check_digit_pair(base: &[u8]) -> Result<(u8, u8), ValidationError> {
    let first = check_digit(base)?;

    let mut extended = Vec::with_capacity(base.len() + 1);
    extended.extend_from_slice(base);
    extended.push(first);
    let second = check_digit(&extended)?;

    Ok((first, second))
}
