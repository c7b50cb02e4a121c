// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! The key generator.
//!
//! # Operations
//!
//! - `next`: the key after a key, `step_size` units on
//! - `prev`: the key before a key, `step_size` units back
//! - `next_before`: a key strictly between two keys
//! - `middle`: a starting key with room on both sides
//!
//! A generator holds only its alphabet and configuration. Every operation
//! takes `&self` and returns a fresh key, so one generator can be shared
//! freely across threads. Tracking the last issued key is up to the caller.

mod codec;
mod decrement;
mod increment;
mod interpolate;

use crate::alphabet::Alphabet;
use crate::config::Config;
use crate::error::ConstructionError;
use crate::error::KeyError;
use crate::iter::Ascending;
use crate::iter::Descending;

/// Generates lexicographically sortable keys.
#[derive(Clone, Debug)]
pub struct Generator {
    alphabet: Alphabet,
    config: Config,
}

impl Generator {
    /// Build a generator with the step limit enabled.
    pub fn new(
        symbols: impl AsRef<[u8]>,
        block_size: usize,
        step_size: usize,
    ) -> Result<Generator, ConstructionError> {
        let config = Config::new()
            .with_block_size(block_size)
            .with_step_size(step_size);
        return Generator::with_config(symbols, config);
    }

    /// Build a generator, panicking on a bad configuration.
    ///
    /// # Panics
    ///
    /// If `Generator::new` would return an error.
    pub fn new_or_panic(symbols: impl AsRef<[u8]>, block_size: usize, step_size: usize) -> Generator {
        return match Generator::new(symbols, block_size, step_size) {
            Ok(generator) => generator,
            Err(err) => panic!("invalid generator configuration: {err}"),
        };
    }

    /// Build a generator from a full configuration.
    pub fn with_config(symbols: impl AsRef<[u8]>, config: Config) -> Result<Generator, ConstructionError> {
        let alphabet = Alphabet::new(symbols)?;
        config.validate(&alphabet)?;
        return Ok(Generator { alphabet, config });
    }

    /// The sorted, deduplicated alphabet.
    pub fn alphabet(&self) -> &Alphabet {
        return &self.alphabet;
    }

    /// The configuration after clamping.
    pub fn config(&self) -> &Config {
        return &self.config;
    }

    /// The key `step_size` units after `prev`.
    ///
    /// An empty `prev` yields the first key. A `prev` whose length is not
    /// a multiple of the block size is padded to the next boundary instead.
    pub fn next(&self, prev: &str) -> String {
        let buf = increment::increment(
            &self.alphabet,
            self.config.block_size(),
            prev.as_bytes(),
            self.config.step_size(),
        );
        return codec::into_key(&buf);
    }

    /// The key `step_size` units before `next`.
    ///
    /// An empty `next` yields the last key of one block, a seed for walking
    /// down. Fails with `InvalidSymbol` for foreign symbols and `Exhausted`
    /// when nothing representable sorts below.
    pub fn prev(&self, next: &str) -> Result<String, KeyError> {
        let buf = decrement::decrement(
            &self.alphabet,
            self.config.block_size(),
            next,
            self.config.step_size(),
        )?;
        return Ok(codec::into_key(&buf));
    }

    /// A key strictly between `prev` and `before`.
    ///
    /// `prev` may be empty to insert before the first key.
    pub fn next_before(&self, prev: &str, before: &str) -> Result<String, KeyError> {
        return interpolate::interpolate(&self.alphabet, &self.config, prev, before);
    }

    /// A one-block key of the middle symbol.
    pub fn middle(&self) -> String {
        return interpolate::middle(&self.alphabet, self.config.block_size());
    }

    /// The first key, same as `next("")`.
    pub fn first(&self) -> String {
        return self.next("");
    }

    /// The last one-block key, same as `prev("")`.
    pub fn last(&self) -> String {
        return codec::into_key(&codec::filled(self.alphabet.highest(), self.config.block_size()));
    }

    /// `count` increasing keys strictly between `prev` and `before`.
    pub fn fill_between(&self, prev: &str, before: &str, count: usize) -> Result<Vec<String>, KeyError> {
        let mut keys: Vec<String> = Vec::with_capacity(count);
        for _ in 0..count {
            let low = keys.last().map_or(prev, |k| k.as_str());
            let key = self.next_before(low, before)?;
            keys.push(key);
        }
        return Ok(keys);
    }

    /// Check that `key` is a well-formed key for this generator.
    pub fn validate(&self, key: &str) -> Result<(), KeyError> {
        let block_size = self.config.block_size();
        if key.is_empty() {
            return Err(KeyError::Misaligned { key: String::new(), block_size });
        }
        for (position, symbol) in key.char_indices() {
            if !symbol.is_ascii() || !self.alphabet.contains(symbol as u8) {
                return Err(KeyError::InvalidSymbol {
                    key: key.to_string(),
                    symbol,
                    position,
                });
            }
        }
        if key.len() % block_size != 0 {
            return Err(KeyError::Misaligned { key: key.to_string(), block_size });
        }
        if key.as_bytes().last() == Some(&self.alphabet.lowest()) {
            return Err(KeyError::TrailingLowest { key: key.to_string() });
        }
        return Ok(());
    }

    /// Keys after `from`, each the `next` of the one before.
    pub fn ascending(&self, from: &str) -> Ascending<'_> {
        return Ascending::new(self, from);
    }

    /// Keys before `from`, each the `prev` of the one before, until `prev` fails.
    ///
    /// A `from` with a symbol outside the alphabet yields nothing. Call
    /// `prev` directly to tell that apart from an exhausted walk.
    pub fn descending(&self, from: &str) -> Descending<'_> {
        return Descending::new(self, from);
    }
}
