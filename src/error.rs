// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Error types for generator construction and key operations.

use thiserror::Error;

/// Errors raised while building a generator.
///
/// These are startup-time misconfigurations. Per-key operations never
/// return them.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConstructionError {
    /// Fewer than two unique symbols were supplied.
    #[error("alphabet needs at least two unique symbols, found {found}")]
    InsufficientSymbols {
        /// Number of unique symbols after deduplication.
        found: usize,
    },

    /// The step can never fit inside a single block.
    #[error("step size {step_size} does not fit in one block of {capacity} values")]
    StepTooLarge {
        /// The configured step size.
        step_size: usize,
        /// Number of distinct values one block can hold (radix^block_size).
        capacity: u128,
    },

    /// Symbols must be single-byte ASCII so that every key is valid UTF-8.
    #[error("symbol 0x{symbol:02x} is not ascii")]
    NonAsciiSymbol {
        /// The offending byte.
        symbol: u8,
    },

    /// The interpolation spread threshold must be a finite positive number.
    #[error("spread threshold {spread} must be finite and positive")]
    InvalidSpread {
        /// The rejected threshold.
        spread: f64,
    },
}

/// Errors returned by per-key operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// `before` does not sort strictly after `prev`.
    #[error("incorrect before value: '{before}' is less than or equal to '{prev}'")]
    Ordering {
        /// Lower bound supplied by the caller.
        prev: String,
        /// Upper bound supplied by the caller.
        before: String,
    },

    /// The interpolated candidate fell outside the open interval.
    ///
    /// Signals a bug rather than an expected runtime condition.
    #[error("unable to create key between '{prev}' and '{before}'; result '{candidate}'")]
    InsertionImpossible {
        /// Lower bound supplied by the caller.
        prev: String,
        /// Upper bound supplied by the caller.
        before: String,
        /// The candidate that failed the final check.
        candidate: String,
    },

    /// The key contains a symbol outside the alphabet.
    #[error("key '{key}' has symbol {symbol:?} at {position} outside the alphabet")]
    InvalidSymbol {
        /// The rejected key.
        key: String,
        /// The foreign symbol.
        symbol: char,
        /// Byte offset of the symbol.
        position: usize,
    },

    /// No key of representable length sorts below the input.
    #[error("no key sorts below '{key}'")]
    Exhausted {
        /// The key that could not be decremented.
        key: String,
    },

    /// The key is empty or its length is not a multiple of the block size.
    #[error("key '{key}' is not aligned to blocks of {block_size}")]
    Misaligned {
        /// The rejected key.
        key: String,
        /// The configured block size.
        block_size: usize,
    },

    /// The key ends in the lowest symbol, which is indistinguishable from padding.
    #[error("key '{key}' ends in the lowest symbol")]
    TrailingLowest {
        /// The rejected key.
        key: String,
    },
}
