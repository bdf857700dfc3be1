//! Roman numeral conversion.
//!
//! Parses strings of I, V, X, L, C, D and M (in either case) into integers,
//! renders integers back as numerals, and answers whether a string parses.
//! Parsing is permissive: any sequence of known symbols is accepted, so
//! "IIII" and "VX" are valid. Use [`is_round_trip`] for a stricter check.

mod format;
mod parse;
mod table;
mod validate;


pub use format::{int_to_roman, int_to_roman_with};
pub use parse::roman_to_int;
pub use table::{NumeralEntry, NumeralTable};
pub use validate::{is_round_trip, is_valid_roman, is_valid_with};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RomanError {
    #[error("empty string when parsing roman numerals")]
    EmptyInput,
    #[error("unable to parse '{input}' as roman numerals, because of character '{symbol}' at position {position}")]
    InvalidSymbol {
        symbol: char,
        position: usize,
        input: String,
    },
    #[error("{value} exceeds the configured maximum of {max}")]
    OutOfRange { value: u64, max: u64 },
}
