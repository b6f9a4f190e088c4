//! Code classification policy.
//!
//! Decides which table a code-shaped query may search: North American area
//! codes are three digits, US ZIP codes are five. The rule is digit count
//! over the exact string form, so a numeric code that lost its leading
//! zeros does not classify.

/// Returns `true` when `code` has the shape of a three-digit area code.
pub fn is_area_code(code: &str) -> bool {
    has_digits(code, 3)
}

/// Returns `true` when `code` has the shape of a five-digit ZIP code.
pub fn is_zip_code(code: &str) -> bool {
    has_digits(code, 5)
}

fn has_digits(code: &str, len: usize) -> bool {
    code.len() == len && code.bytes().all(|b| b.is_ascii_digit())
}
