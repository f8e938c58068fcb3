//! # Error Hierarchy
//!
//! Structured error types for CNPJ handling, built with `thiserror`.
//! No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! Errors are reserved for construction-time validation of the [`Cnpj`]
//! newtype and for the one argument error of the check-digit core. The
//! boolean/option surface (`validate`, `validate_format`, `format`) models
//! malformed input as ordinary `false`/`None` outcomes and never raises.
//!
//! [`Cnpj`]: crate::Cnpj

use thiserror::Error;

/// Validation errors for the CNPJ domain primitive.
///
/// Each variant carries the invalid input and the expected format so that
/// callers can diagnose bad data without guesswork.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Input is neither in the punctuated form `NN.NNN.NNN/NNNN-NN` nor a
    /// bare 14-digit string. Partial punctuation is rejected even when the
    /// digits themselves would check out.
    #[error("invalid CNPJ format: \"{0}\" (expected NN.NNN.NNN/NNNN-NN or 14 digits)")]
    InvalidCnpjFormat(String),

    /// Input has an accepted shape but its trailing check-digit pair does
    /// not match the pair derived from the 12-digit base number.
    #[error("invalid CNPJ check digits: \"{value}\" (expected {expected:?})")]
    InvalidCnpjCheckDigits {
        /// The input that failed verification.
        value: String,
        /// The check-digit pair derived from the input's base number.
        expected: [u8; 2],
    },

    /// The check-digit algorithm was invoked on an empty digit sequence.
    /// The weight cycle is undefined for zero positions.
    #[error("check digit requires a non-empty digit sequence")]
    EmptyDigitSequence,
}
