//! # CNPJ Domain Primitive
//!
//! The [`Cnpj`] newtype wraps a canonical 14-digit identifier validated at
//! construction time — 12-digit base number plus the two-digit modulo-11
//! checksum suffix. Punctuated and bare textual forms are accepted as input;
//! the canonical digit string is what gets stored.
//!
//! ## Accepted Input Shapes
//!
//! - `"22.643.564/0001-85"` (punctuated, exact pattern)
//! - `"22643564000185"` (bare 14 digits)
//!
//! Anything else — partial punctuation, wrong length, letters — is rejected
//! before the checksum is even consulted, matching the behavior of the
//! boolean [`validate`] predicate.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::checksum;
use crate::error::ValidationError;
use crate::format;

/// Branch suffix assigned to a company's headquarters registration.
pub const HEADQUARTERS_BRANCH: &str = "0001";

/// A Brazilian CNPJ company tax-registration identifier.
///
/// Stored in canonical form: 14 digits, no punctuation. The first 8 digits
/// identify the registrant, the next 4 the branch, and the final 2 are the
/// check digits derived from everything before them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cnpj(String);

impl Cnpj {
    /// Create a CNPJ from a string value, validating shape and check digits.
    ///
    /// Accepts both `"22.643.564/0001-85"` and `"22643564000185"` forms.
    /// Stores the canonical 14-digit form (punctuation stripped).
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCnpjFormat`] if the input is in
    /// neither accepted shape, and [`ValidationError::InvalidCnpjCheckDigits`]
    /// if the shape is fine but the trailing pair does not match the pair
    /// derived from the base number.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();

        let bare = raw.len() == 14 && raw.bytes().all(|b| b.is_ascii_digit());
        if !bare && !format::validate_format(&raw) {
            return Err(ValidationError::InvalidCnpjFormat(raw));
        }

        let digits = format::clean_up(&raw);
        let values = digit_values(&digits);
        let (first, second) =
            checksum::check_digit_pair(&values[..12]).expect("12-digit base is non-empty");

        if values[12] != first || values[13] != second {
            return Err(ValidationError::InvalidCnpjCheckDigits {
                value: raw,
                expected: [first, second],
            });
        }

        Ok(Self(digits))
    }

    /// Synthesize a random valid CNPJ.
    ///
    /// Draws a uniform 8-digit registrant number in `[10000000, 99999999]`,
    /// appends the headquarters branch suffix, and derives both check digits.
    /// The generator is injected so tests can pass a seeded source; the draw
    /// has no cryptographic requirement.
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let registrant: u32 = rng.gen_range(10_000_000..=99_999_999);
        let base = format!("{registrant}{HEADQUARTERS_BRANCH}");

        let values = digit_values(&base);
        let (first, second) =
            checksum::check_digit_pair(&values).expect("12-digit base is non-empty");

        Self(format!("{base}{first}{second}"))
    }

    /// Access the CNPJ in canonical 14-digit form (no punctuation).
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Return the CNPJ in punctuated form: `NN.NNN.NNN/NNNN-NN`.
    pub fn formatted(&self) -> String {
        format::format(&self.0).expect("canonical form has 14 digits")
    }

    /// The 8-digit registrant number (company identity).
    pub fn registrant(&self) -> &str {
        &self.0[..8]
    }

    /// The 4-digit branch number (`0001` for a headquarters).
    pub fn branch(&self) -> &str {
        &self.0[8..12]
    }

    /// The two-digit checksum suffix.
    pub fn check_digits(&self) -> &str {
        &self.0[12..]
    }
}

impl std::fmt::Display for Cnpj {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

/// Check validity of a CNPJ in text form.
///
/// True iff the input is in one of the two accepted shapes (punctuated
/// canonical or bare 14 digits) and its trailing check-digit pair matches
/// the two-stage modulo-11 derivation. Total over all text input — malformed
/// strings are an ordinary `false`, never an error.
///
/// ```
/// assert!(cnpj_core::validate("22.643.564/0001-85"));
/// assert!(cnpj_core::validate("22643564000185"));
/// assert!(!cnpj_core::validate("22.743.564/0001-85"));
/// ```
pub fn validate(value: &str) -> bool {
    Cnpj::new(value).is_ok()
}

/// Generate a random valid CNPJ in punctuated form.
///
/// Convenience wrapper over [`Cnpj::generate`] with the thread-local
/// generator. The output always passes [`validate`].
pub fn generate() -> String {
    Cnpj::generate(&mut rand::thread_rng()).formatted()
}

fn digit_values(digits: &str) -> Vec<u8> {
    digits.bytes().map(|b| b - b'0').collect()
}
