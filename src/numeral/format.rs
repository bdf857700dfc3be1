use tracing::{debug, debug_span};

use super::table::NumeralTable;
use super::RomanError;
use crate::settings::FormatSettings;

/// Render a value as Roman numerals. Zero renders as an empty string.
///
/// Each pass walks the table from M down and applies the first rule that
/// fires for some symbol (`major`):
/// 1. the remainder equals `major` exactly;
/// 2. the remainder equals `major - minor` for a smaller `minor` that is not
///    exactly half of `major`, emitted as the pair "minor major";
/// 3. the remainder exceeds `major`, emitted as `major` repeated.
///
/// Pairs only fire on an exact residual, so 999 renders as "IM" and 49 as
/// "IL". Every output parses back to its input.
///
/// There is no upper bound: above 3999 the output grows by one 'M' per
/// thousand, so very large values exhaust memory. Use
/// [`int_to_roman_with`] to enforce a `max_value` ceiling.
pub fn int_to_roman(value: u64) -> String {
    let _span = debug_span!("int_to_roman", value).entered();

    let entries = NumeralTable::global().entries();
    let mut out = String::new();
    let mut remaining = value;

    'pass: while remaining > 0 {
        for (i, major) in entries.iter().enumerate() {
            if remaining == major.value {
                out.push(major.symbol);
                remaining -= major.value;
                continue 'pass;
            }

            for minor in &entries[i + 1..] {
                if major.value == 2 * minor.value {
                    continue;
                }
                if remaining == major.value - minor.value {
                    out.push(minor.symbol);
                    out.push(major.symbol);
                    remaining -= major.value - minor.value;
                    continue 'pass;
                }
            }

            if remaining > major.value {
                let count = remaining / major.value;
                out.extend(std::iter::repeat(major.symbol).take(count as usize));
                remaining -= major.value * count;
                continue 'pass;
            }
        }
    }

    debug!(len = out.len());
    out
}

/// [`int_to_roman`] with the ceiling and letter case from `settings`.
pub fn int_to_roman_with(value: u64, settings: &FormatSettings) -> Result<String, RomanError> {
    if value > settings.max_value {
        return Err(RomanError::OutOfRange {
            value,
            max: settings.max_value,
        });
    }
    let out = int_to_roman(value);
    if settings.lowercase {
        Ok(out.to_ascii_lowercase())
    } else {
        Ok(out)
    }
}
