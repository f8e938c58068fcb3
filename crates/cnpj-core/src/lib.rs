#![deny(missing_docs)]

//! # cnpj-core — Brazilian CNPJ Validation, Formatting & Generation
//!
//! This crate validates, formats, cleans, and generates Brazilian CNPJ
//! company tax-registration identifiers. Everything revolves around the
//! weighted modulo-11 check-digit algorithm in [`checksum`] — validation
//! re-derives the two-digit suffix, generation synthesizes it.
//!
//! ## Design Principles
//!
//! 1. **Newtype wrapper for the domain primitive.** [`Cnpj`] is validated at
//!    construction and stores the canonical 14-digit form. Punctuated and
//!    bare textual representations are views over it.
//!
//! 2. **One check-digit path.** Validation and generation both flow through
//!    [`checksum::check_digit_pair`], so a synthesized identifier always
//!    verifies and the two operations can never drift apart.
//!
//! 3. **Malformed input is not an error.** [`validate`] and
//!    [`validate_format`] return `false`, [`format`] returns `None`. The
//!    structured [`ValidationError`] hierarchy is reserved for the [`Cnpj`]
//!    constructor and the empty-sequence argument error of the core.
//!
//! 4. **Injectable randomness.** [`Cnpj::generate`] takes any [`rand::Rng`]
//!    so tests can seed it; the [`generate`] convenience wrapper uses the
//!    thread-local generator.
//!
//! ## Example
//!
//! ```
//! use cnpj_core::Cnpj;
//!
//! let cnpj = Cnpj::new("22.643.564/0001-85")?;
//! assert_eq!(cnpj.as_str(), "22643564000185");
//! assert_eq!(cnpj.branch(), "0001");
//!
//! assert!(cnpj_core::validate(cnpj.as_str()));
//! assert!(!cnpj_core::validate("22.743.564/0001-85"));
//! # Ok::<(), cnpj_core::ValidationError>(())
//! ```

pub mod checksum;
pub mod cnpj;
pub mod error;
pub mod format;

// Re-export the public surface at the crate root for ergonomic imports.
pub use checksum::{check_digit, check_digit_pair};
pub use cnpj::{generate, validate, Cnpj, HEADQUARTERS_BRANCH};
pub use error::ValidationError;
pub use format::{clean_up, format, validate_format};
