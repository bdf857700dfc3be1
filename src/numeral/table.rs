use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Serialize;

/// A single Roman numeral symbol and the value it stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NumeralEntry {
    pub symbol: char,
    pub value: u64,
}

const ENTRIES: [NumeralEntry; 7] = [
    NumeralEntry { symbol: 'M', value: 1000 },
    NumeralEntry { symbol: 'D', value: 500 },
    NumeralEntry { symbol: 'C', value: 100 },
    NumeralEntry { symbol: 'L', value: 50 },
    NumeralEntry { symbol: 'X', value: 10 },
    NumeralEntry { symbol: 'V', value: 5 },
    NumeralEntry { symbol: 'I', value: 1 },
];

/// The seven numeral symbols, ordered by descending value, with a
/// case-insensitive symbol index.
pub struct NumeralTable {
    entries: &'static [NumeralEntry],
    by_symbol: HashMap<char, NumeralEntry>,
}

impl NumeralTable {
    /// Get or initialize the global singleton.
    pub fn global() -> &'static NumeralTable {
        static INSTANCE: OnceLock<NumeralTable> = OnceLock::new();
        INSTANCE.get_or_init(NumeralTable::build)
    }

    fn build() -> NumeralTable {
        let by_symbol = ENTRIES.iter().map(|e| (e.symbol, *e)).collect();
        NumeralTable {
            entries: &ENTRIES,
            by_symbol,
        }
    }

    /// Entries in descending value order.
    pub fn entries(&self) -> &[NumeralEntry] {
        self.entries
    }

    /// Look up a symbol, ignoring ASCII case.
    pub fn lookup(&self, symbol: char) -> Option<NumeralEntry> {
        self.by_symbol.get(&symbol.to_ascii_uppercase()).copied()
    }
}
