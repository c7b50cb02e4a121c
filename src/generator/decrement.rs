// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Retreat a key by whole units, borrowing right to left.
//!
//! A borrow that survives the most significant digit means the working
//! value was all `lowest`, the floor for its length. Nothing shorter sorts
//! below it, so a single-block key is exhausted there, and a longer key
//! stops at the floor. A result ending in `lowest` gets one extra block of
//! `highest` appended, which keeps it below the input and lets a caller keep
//! walking down.

use tracing::debug;

use super::codec;
use super::codec::KeyBuf;
use crate::alphabet::Alphabet;
use crate::error::KeyError;

/// Subtract `units` from `next`.
///
/// An empty input yields the all-`highest` key of one block.
pub fn decrement(
    alphabet: &Alphabet,
    block_size: usize,
    next: &str,
    units: usize,
) -> Result<KeyBuf, KeyError> {
    if next.is_empty() {
        return Ok(codec::filled(alphabet.highest(), block_size));
    }

    for (position, symbol) in next.char_indices() {
        if !symbol.is_ascii() || !alphabet.contains(symbol as u8) {
            debug!(key = next, position, "decrement input has a foreign symbol");
            return Err(KeyError::InvalidSymbol {
                key: next.to_string(),
                symbol,
                position,
            });
        }
    }

    let mut buf = KeyBuf::from_slice(next.as_bytes());
    for unit in 0..units {
        if sub_one(alphabet, &mut buf) {
            continue;
        }
        if unit == 0 || buf.len() <= block_size {
            debug!(key = next, units, "decrement exhausted");
            return Err(KeyError::Exhausted { key: next.to_string() });
        }
        // Back to the floor and stop there.
        buf.fill(alphabet.lowest());
        debug!(key = next, unit, "decrement stopped at the floor");
        break;
    }

    if codec::misalignment(buf.len(), block_size) != 0 {
        codec::align(alphabet, &mut buf, block_size);
    } else if buf.last() == Some(&alphabet.lowest()) {
        buf.extend(std::iter::repeat_n(alphabet.highest(), block_size));
    }
    return Ok(buf);
}

/// Subtract one unit in place. Returns false if the borrow ran off the top.
fn sub_one(alphabet: &Alphabet, buf: &mut [u8]) -> bool {
    for digit in buf.iter_mut().rev() {
        match alphabet.predecessor(*digit) {
            Some(lower) => {
                *digit = lower;
                return true;
            }
            None => *digit = alphabet.highest(),
        }
    }
    return false;
}
