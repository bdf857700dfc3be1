use super::format::int_to_roman;
use super::parse::roman_to_int;
use crate::settings::{ValidationMode, ValidationSettings};

/// Returns true if `text` parses as Roman numerals.
///
/// This is as permissive as [`roman_to_int`]: "IIII" and "VX" are valid,
/// the empty string is not.
pub fn is_valid_roman(text: &str) -> bool {
    roman_to_int(text).is_ok()
}

/// Returns true if `text` parses and is exactly what [`int_to_roman`]
/// renders for its value, ignoring ASCII case.
pub fn is_round_trip(text: &str) -> bool {
    match roman_to_int(text) {
        Ok(value) => int_to_roman(value).eq_ignore_ascii_case(text),
        Err(_) => false,
    }
}

/// Validate according to the configured mode.
pub fn is_valid_with(text: &str, settings: &ValidationSettings) -> bool {
    match settings.mode {
        ValidationMode::Permissive => is_valid_roman(text),
        ValidationMode::RoundTrip => is_round_trip(text),
    }
}
