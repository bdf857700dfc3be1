//! Roman numeral parsing and formatting.
//!
//! ```
//! assert_eq!(romans::roman_to_int("xiv"), Ok(14));
//! assert_eq!(romans::int_to_roman(2045), "MMVL");
//! assert!(!romans::is_valid_roman(""));
//! ```

pub mod numeral;
pub mod settings;
pub mod trace_init;

pub use numeral::{
    int_to_roman, int_to_roman_with, is_round_trip, is_valid_roman, is_valid_with, roman_to_int,
    NumeralEntry, NumeralTable, RomanError,
};
