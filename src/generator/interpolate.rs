// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Produce a key strictly between two keys.
//!
//! # Approach
//!
//! Both bounds are block-aligned and brought to the same length, then read
//! as base-`radix` integers to get an approximate distance. If the
//! configured step is small relative to that distance (halving it until
//! `step / distance <= spread`), the lower bound is stepped forward by it,
//! which keeps repeated insertions spaced out instead of piling up against
//! one bound. Otherwise, or if the stepped key overshoots, a fresh block
//! starting with the middle symbol is appended to the lower bound.
//!
//! Whatever the path, the candidate is checked against both bounds before
//! it is returned.

use tracing::debug;

use super::codec;
use super::codec::KeyBuf;
use super::increment::increment;
use crate::alphabet::Alphabet;
use crate::config::Config;
use crate::error::KeyError;

/// A key strictly between `prev` and `before`.
pub fn interpolate(
    alphabet: &Alphabet,
    config: &Config,
    prev: &str,
    before: &str,
) -> Result<String, KeyError> {
    if before <= prev {
        return Err(KeyError::Ordering {
            prev: prev.to_string(),
            before: before.to_string(),
        });
    }
    let block_size = config.block_size();

    let mut low = KeyBuf::from_slice(prev.as_bytes());
    let mut high = KeyBuf::from_slice(before.as_bytes());
    codec::align(alphabet, &mut low, block_size);
    codec::align(alphabet, &mut high, block_size);

    // `before` is `prev` plus the smallest possible tail: widen `low` so
    // there is room beneath `before`.
    if let Some(tail) = before.as_bytes().strip_prefix(prev.as_bytes()) {
        if codec::is_minimal(alphabet, tail) {
            let width = high.len();
            codec::pad(alphabet, &mut low, width);
            if low == high {
                low = codec::minimal(alphabet, width + block_size);
            }
        }
    }

    if low.len() > high.len() {
        let missing = low.len() - high.len();
        codec::pad(alphabet, &mut high, missing);
    } else {
        let missing = high.len() - low.len();
        codec::pad(alphabet, &mut low, missing);
    }

    let distance = approx_distance(alphabet, &low, &high);
    let mut candidate = None;
    if distance > 0 {
        let mut step = config.step_size();
        while step as f64 / distance as f64 > config.spread() {
            step /= 2;
        }
        if step > 0 {
            let stepped = increment(alphabet, block_size, &low, step);
            if &stepped[..] < before.as_bytes() {
                candidate = Some(stepped);
            } else {
                debug!(prev, before, step, "stepped key overshoots, appending a tail");
            }
        }
    }
    let candidate = match candidate {
        Some(stepped) => stepped,
        None => add_tail(alphabet, block_size, &low),
    };

    let candidate = codec::into_key(&candidate);
    if prev < candidate.as_str() && candidate.as_str() < before {
        return Ok(candidate);
    }
    debug!(prev, before, candidate = %candidate, "interpolated key is out of bounds");
    return Err(KeyError::InsertionImpossible {
        prev: prev.to_string(),
        before: before.to_string(),
        candidate,
    });
}

/// Distance from `low` to `high` over their common length, in units of the
/// last compared digit. Digits past the common length are ignored, and the
/// sum saturates instead of overflowing.
pub fn approx_distance(alphabet: &Alphabet, low: &[u8], high: &[u8]) -> i128 {
    let radix = alphabet.radix() as i128;
    let rank = |c: u8| alphabet.index_of(c).map_or(-1, |i| i as i128);

    let mut distance: i128 = 0;
    for (&a, &b) in low.iter().zip(high.iter()) {
        distance = distance.saturating_mul(radix).saturating_add(rank(b) - rank(a));
    }
    return distance;
}

/// `low` followed by the middle symbol, padded out to a whole block.
fn add_tail(alphabet: &Alphabet, block_size: usize, low: &[u8]) -> KeyBuf {
    let mut buf = KeyBuf::from_slice(low);
    buf.push(alphabet.middle());
    codec::pad(alphabet, &mut buf, block_size - 1);
    return buf;
}

/// The one-block key made entirely of the middle symbol.
pub fn middle(alphabet: &Alphabet, block_size: usize) -> String {
    return codec::into_key(&codec::filled(alphabet.middle(), block_size));
}
