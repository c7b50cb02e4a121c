// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! The ordered symbol set that acts as the digits of every key.
//!
//! # Lookup tables
//!
//! Symbols are single ASCII bytes, so successor and rank lookups are flat
//! 256-entry tables indexed by the byte itself. A lookup is one array read
//! regardless of alphabet size; the cost is two fixed tables per alphabet.
//! Bytes outside the alphabet map to `lowest` as successor and to `None` as
//! rank.
//!
//! Complexity:
//! - build: O(n log n) in the number of input symbols
//! - successor / predecessor / index_of: O(1)

use crate::error::ConstructionError;

/// An ordered, deduplicated set of ASCII symbols.
#[derive(Clone, PartialEq, Eq)]
pub struct Alphabet {
    /// Unique symbols in ascending byte order.
    symbols: Vec<u8>,
    /// successor[c] is the next symbol after c, wrapping highest -> lowest.
    successor: [u8; 256],
    /// index[c] is the rank of c, or None when c is not a member.
    index: [Option<u8>; 256],
}

impl Alphabet {
    /// Build an alphabet from symbols in any order, duplicates allowed.
    pub fn new(symbols: impl AsRef<[u8]>) -> Result<Alphabet, ConstructionError> {
        let mut seen = [false; 256];
        let mut unique = Vec::with_capacity(symbols.as_ref().len());
        for &symbol in symbols.as_ref() {
            if !symbol.is_ascii() {
                return Err(ConstructionError::NonAsciiSymbol { symbol });
            }
            if !seen[symbol as usize] {
                seen[symbol as usize] = true;
                unique.push(symbol);
            }
        }

        if unique.len() < 2 {
            return Err(ConstructionError::InsufficientSymbols { found: unique.len() });
        }
        unique.sort_unstable();

        let lowest = unique[0];
        let mut successor = [lowest; 256];
        let mut index = [None; 256];
        for (rank, &symbol) in unique.iter().enumerate() {
            successor[symbol as usize] = match unique.get(rank + 1) {
                Some(&next) => next,
                None => lowest,
            };
            // At most 128 ascii symbols, so the rank fits.
            index[symbol as usize] = Some(rank as u8);
        }

        return Ok(Alphabet {
            symbols: unique,
            successor,
            index,
        });
    }

    /// The symbols in ascending order.
    pub fn symbols(&self) -> &[u8] {
        return &self.symbols;
    }

    /// Number of symbols, the numeral base.
    #[inline]
    pub fn radix(&self) -> usize {
        return self.symbols.len();
    }

    /// The smallest symbol, the digit zero.
    #[inline]
    pub fn lowest(&self) -> u8 {
        return self.symbols[0];
    }

    /// The largest symbol.
    #[inline]
    pub fn highest(&self) -> u8 {
        return self.symbols[self.symbols.len() - 1];
    }

    /// The symbol at rank `radix / 2`. Never the lowest symbol.
    #[inline]
    pub fn middle(&self) -> u8 {
        return self.symbols[self.symbols.len() / 2];
    }

    /// The smallest symbol that is not `lowest`, the digit one.
    #[inline]
    pub fn second(&self) -> u8 {
        return self.symbols[1];
    }

    /// The next symbol, wrapping `highest` to `lowest`.
    ///
    /// Bytes outside the alphabet also map to `lowest`, so an increment
    /// carries through them.
    #[inline]
    pub fn successor(&self, symbol: u8) -> u8 {
        return self.successor[symbol as usize];
    }

    /// The previous symbol, or None when `symbol` is `lowest` or foreign.
    #[inline]
    pub fn predecessor(&self, symbol: u8) -> Option<u8> {
        let rank = self.index_of(symbol)?;
        if rank == 0 {
            return None;
        }
        return Some(self.symbols[rank - 1]);
    }

    /// The 0-based rank of `symbol`, or None when it is not a member.
    #[inline]
    pub fn index_of(&self, symbol: u8) -> Option<usize> {
        return self.index[symbol as usize].map(|rank| rank as usize);
    }

    /// True if `symbol` belongs to the alphabet.
    #[inline]
    pub fn contains(&self, symbol: u8) -> bool {
        return self.index[symbol as usize].is_some();
    }
}

impl std::fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return write!(f, "Alphabet({:?})", String::from_utf8_lossy(&self.symbols));
    }
}
