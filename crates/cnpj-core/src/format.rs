//! # Textual Views
//!
//! Pure string operations over CNPJ text: anchored matching of the
//! punctuated form, digit stripping, and punctuation insertion. None of
//! these functions look at check digits — they are the normalization layer
//! the validation and generation paths build on.

/// Length of the punctuated form `NN.NNN.NNN/NNNN-NN`.
const FORMATTED_LEN: usize = 18;

/// Number of digits in a canonical CNPJ.
const CANONICAL_LEN: usize = 14;

/// Check whether `value` matches the punctuated form `NN.NNN.NNN/NNNN-NN`
/// exactly, anchored at both ends.
///
/// Partial or misplaced punctuation fails the match even when the digits
/// themselves are plausible.
pub fn validate_format(value: &str) -> bool {
    if value.len() != FORMATTED_LEN {
        return false;
    }
    value.bytes().enumerate().all(|(i, byte)| match i {
        2 | 6 => byte == b'.',
        10 => byte == b'/',
        15 => byte == b'-',
        _ => byte.is_ascii_digit(),
    })
}

/// Remove every character that is not a decimal digit, preserving the order
/// of the remaining digits. Idempotent.
///
/// ```
/// let digits = cnpj_core::clean_up("36.865.382/0001-63");
/// assert_eq!(digits, "36865382000163");
/// ```
pub fn clean_up(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Punctuate a CNPJ as `NN.NNN.NNN/NNNN-NN`.
///
/// The input is sanitized first, so punctuation and garbage characters are
/// tolerated. Fewer than 14 remaining digits means there is nothing to
/// format and `None` is returned; digits beyond the first 14 are discarded.
///
/// ```
/// assert_eq!(
///     cnpj_core::format("36865382000163").as_deref(),
///     Some("36.865.382/0001-63")
/// );
/// assert_eq!(
///     cnpj_core::format("289 asasa88a   43w2sassa7.56as002").as_deref(),
///     Some("28.988.432/7560-02")
/// );
/// assert_eq!(cnpj_core::format("368.653"), None);
/// ```
pub fn format(value: &str) -> Option<String> {
    let digits = clean_up(value);
    if digits.len() < CANONICAL_LEN {
        return None;
    }

    let d = &digits[..CANONICAL_LEN];
    Some(format!(
        "{}.{}.{}/{}-{}",
        &d[..2],
        &d[2..5],
        &d[5..8],
        &d[8..12],
        &d[12..14]
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_format_accepts_canonical_punctuation() {
        assert!(validate_format("00.000.000/0001-00"));
        assert!(validate_format("99.999.999/9999-99"));
    }

    #[test]
    fn validate_format_rejects_partial_punctuation() {
        assert!(!validate_format("12.312.3000-00"));
        assert!(!validate_format("00.000.000.0001.05"));
        assert!(!validate_format("00-000-000-0000-05"));
        assert!(!validate_format("000-000.000-05"));
        assert!(!validate_format("000.000/0000-00"));
    }

    #[test]
    fn validate_format_rejects_letters_and_bare_digits() {
        assert!(!validate_format("aa.aaa.aaa/aaaa-aa"));
        assert!(!validate_format("aaaaaaaaaaaaaa"));
        assert!(!validate_format("aa.aaa.000/0001-00"));
        assert!(!validate_format("11111111111111"));
        assert!(!validate_format("999999999"));
    }

    #[test]
    fn validate_format_rejects_multibyte_input() {
        // Non-ASCII characters can never satisfy the byte-wise pattern.
        assert!(!validate_format("Ⅰ2.343.567/0001-23"));
    }

    #[test]
    fn clean_up_strips_punctuation() {
        assert_eq!(clean_up("27.103.239/0001-56"), "27103239000156");
        assert_eq!(clean_up("649.98136054123"), "64998136054123");
        assert_eq!(clean_up("65-280-961-0001-43"), "65280961000143");
        assert_eq!(clean_up("289 asasa88a  43w2sassa7.56as002"), "28988432756002");
    }

    #[test]
    fn clean_up_is_idempotent() {
        let once = clean_up("65-280-961-0001-43");
        assert_eq!(clean_up(&once), once);
    }

    #[test]
    fn clean_up_of_digit_free_input_is_empty() {
        assert_eq!(clean_up("aaaa"), "");
        assert_eq!(clean_up(""), "");
    }

    #[test]
    fn format_known_vectors() {
        assert_eq!(format("27303239456634").as_deref(), Some("27.303.239/4566-34"));
        assert_eq!(format("649.98136054354").as_deref(), Some("64.998.136/0543-54"));
        assert_eq!(format("65-280-961-0001-43").as_deref(), Some("65.280.961/0001-43"));
    }

    #[test]
    fn format_requires_fourteen_digits() {
        assert_eq!(format("999999"), None);
        assert_eq!(format("aaaa"), None);
        assert_eq!(format("2384729834"), None);
        assert_eq!(format("23.472.983/0001-4"), None);
        assert_eq!(format("99.999.999"), None);
        assert_eq!(format("aaa.a"), None);
    }

    #[test]
    fn format_discards_digits_beyond_fourteen() {
        assert_eq!(format("6767856387465721").as_deref(), Some("67.678.563/8746-57"));
        assert_eq!(format("652-809-610-433-123").as_deref(), Some("65.280.961/0433-12"));
    }

    #[test]
    fn format_output_always_matches_canonical_pattern() {
        for input in ["27303239456634", "649.98136054354", "6767856387465721"] {
            let formatted = format(input).unwrap();
            assert!(validate_format(&formatted));
        }
    }
}
