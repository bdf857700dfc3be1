use tracing::{debug, debug_span};

use super::table::NumeralTable;
use super::RomanError;

/// Parse a Roman numeral string into its value.
///
/// Symbols are summed left to right; a symbol larger than its predecessor
/// turns the predecessor into a subtraction. Ordering rules are not
/// enforced, so "IIII" parses as 4 and "VX" as 5.
pub fn roman_to_int(text: &str) -> Result<u64, RomanError> {
    let _span = debug_span!("roman_to_int", len = text.len()).entered();

    if text.is_empty() {
        return Err(RomanError::EmptyInput);
    }

    let table = NumeralTable::global();
    let mut sum: u64 = 0;
    let mut last: u64 = 0;

    for (position, ch) in text.chars().enumerate() {
        let Some(entry) = table.lookup(ch) else {
            debug!(symbol = %ch, position = position, "unknown symbol");
            return Err(RomanError::InvalidSymbol {
                symbol: ch,
                position,
                input: text.to_string(),
            });
        };
        let value = entry.value;
        if value > last && last > 0 {
            // `last` was already added; take it back twice. Each rising step
            // in the table is at least x2, so value >= 2 * last and the sum
            // never drops below its previous value.
            sum = sum + value - 2 * last;
        } else {
            sum += value;
        }
        last = value;
    }

    debug!(sum = sum, "parsed");
    Ok(sum)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_symbols() {
        assert_eq!(roman_to_int("I"), Ok(1));
        assert_eq!(roman_to_int("V"), Ok(5));
        assert_eq!(roman_to_int("X"), Ok(10));
        assert_eq!(roman_to_int("L"), Ok(50));
        assert_eq!(roman_to_int("C"), Ok(100));
        assert_eq!(roman_to_int("D"), Ok(500));
        assert_eq!(roman_to_int("M"), Ok(1000));
    }

    #[test]
    fn test_subtractive_pairs() {
        assert_eq!(roman_to_int("IV"), Ok(4));
        assert_eq!(roman_to_int("IX"), Ok(9));
        assert_eq!(roman_to_int("XL"), Ok(40));
        assert_eq!(roman_to_int("XC"), Ok(90));
        assert_eq!(roman_to_int("CD"), Ok(400));
        assert_eq!(roman_to_int("CM"), Ok(900));
        assert_eq!(roman_to_int("MCMXCIV"), Ok(1994));
    }

    #[test]
    fn test_permissive_sequences() {
        assert_eq!(roman_to_int("IIII"), Ok(4));
        assert_eq!(roman_to_int("VX"), Ok(5));
        assert_eq!(roman_to_int("IM"), Ok(999));
        // Only the immediately preceding symbol is corrected
        assert_eq!(roman_to_int("IIV"), Ok(5));
    }

    #[test]
    fn test_consecutive_rising_steps() {
        // "IV" then "X": the correction applies against V, not the whole sum
        assert_eq!(roman_to_int("IVX"), Ok(4));
        assert_eq!(roman_to_int("ivx"), Ok(4));
        assert_eq!(roman_to_int("IVXLCDM"), Ok(334));
        assert_eq!(roman_to_int("IXC"), Ok(89));
    }

    #[test]
    fn test_mixed_case() {
        assert_eq!(roman_to_int("xiv"), Ok(14));
        assert_eq!(roman_to_int("XIV"), Ok(14));
        assert_eq!(roman_to_int("mCmXcIv"), Ok(1994));
    }

    #[test]
    fn test_empty() {
        assert_eq!(roman_to_int(""), Err(RomanError::EmptyInput));
    }

    #[test]
    fn test_invalid_symbol() {
        let err = roman_to_int("XZI").unwrap_err();
        assert_eq!(
            err,
            RomanError::InvalidSymbol {
                symbol: 'Z',
                position: 1,
                input: "XZI".into(),
            }
        );
        let msg = err.to_string();
        assert!(msg.contains("'Z'"), "{msg}");
        assert!(msg.contains("XZI"), "{msg}");
    }

    #[test]
    fn test_invalid_symbol_position_counts_chars() {
        let err = roman_to_int("Xé").unwrap_err();
        assert!(matches!(
            err,
            RomanError::InvalidSymbol {
                symbol: 'é',
                position: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_whitespace_rejected() {
        assert!(matches!(
            roman_to_int(" X"),
            Err(RomanError::InvalidSymbol { symbol: ' ', .. })
        ));
        assert!(matches!(
            roman_to_int("X\n"),
            Err(RomanError::InvalidSymbol { symbol: '\n', .. })
        ));
    }
}
