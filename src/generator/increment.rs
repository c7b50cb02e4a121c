// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Advance a key by whole units, carrying right to left.
//!
//! A key is a big-endian numeral over the alphabet. Adding a unit replaces
//! digits with their successors from the right until one does not wrap.
//! When every digit would wrap, the key is full: it grows by one padded
//! block instead, which is the smallest value above it at the new length.
//!
//! Complexity: O(units * len) worst case, O(units) for typical keys.

use tracing::trace;

use super::codec;
use super::codec::KeyBuf;
use crate::alphabet::Alphabet;

/// Add `units` to `prev`.
///
/// An empty input yields the first key of one block. A misaligned input is
/// padded to the next block boundary and returned without stepping.
pub fn increment(alphabet: &Alphabet, block_size: usize, prev: &[u8], units: usize) -> KeyBuf {
    if prev.is_empty() {
        return codec::minimal(alphabet, block_size);
    }

    let mut buf = KeyBuf::from_slice(prev);
    if codec::misalignment(buf.len(), block_size) != 0 {
        codec::align(alphabet, &mut buf, block_size);
        return buf;
    }

    for _ in 0..units {
        if is_full(alphabet, &buf) {
            // The unit is spent on growth.
            codec::pad(alphabet, &mut buf, block_size);
            trace!(len = buf.len(), "key grew by one block");
        } else {
            add_one(alphabet, &mut buf);
        }
    }
    return buf;
}

/// True when a carry would run past the most significant digit.
fn is_full(alphabet: &Alphabet, buf: &[u8]) -> bool {
    return buf.iter().all(|&c| alphabet.successor(c) == alphabet.lowest());
}

/// Add one unit to a key that is not full.
fn add_one(alphabet: &Alphabet, buf: &mut [u8]) {
    let last = buf.len() - 1;
    for i in (0..buf.len()).rev() {
        let digit = alphabet.successor(buf[i]);
        if digit != alphabet.lowest() {
            buf[i] = digit;
            return;
        }
        // Wrapped: carry on. The last digit skips zero.
        buf[i] = if i == last { alphabet.second() } else { alphabet.lowest() };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset;

    fn step(block_size: usize, prev: &str, units: usize) -> String {
        let alphabet = Alphabet::new(charset::ALPHANUMERIC_LOWER).unwrap();
        return codec::into_key(&increment(&alphabet, block_size, prev.as_bytes(), units));
    }

    #[test]
    fn empty_yields_first_key() {
        assert_eq!(step(3, "", 1), "001");
        assert_eq!(step(3, "", 50), "001");
        assert_eq!(step(1, "", 1), "1");
    }

    #[test]
    fn misaligned_pads_only() {
        assert_eq!(step(3, "c", 1), "c01");
        assert_eq!(step(3, "c", 7), "c01");
        assert_eq!(step(3, "c0", 1), "c01");
    }

    #[test]
    fn single_units() {
        assert_eq!(step(3, "001", 1), "002");
        assert_eq!(step(3, "009", 1), "00a");
        assert_eq!(step(3, "a0z", 1), "a11");
        assert_eq!(step(3, "0zz", 1), "101");
    }

    #[test]
    fn multiple_units() {
        assert_eq!(step(3, "001", 2), "003");
        assert_eq!(step(3, "003", 2), "005");
        assert_eq!(step(3, "00y", 3), "012");
    }

    #[test]
    fn full_key_grows() {
        assert_eq!(step(3, "zzz", 1), "zzz001");
        assert_eq!(step(3, "zzz", 2), "zzz002");
        assert_eq!(step(1, "z", 1), "z1");
        assert_eq!(step(3, "zzy", 2), "zzz001");
    }

    #[test]
    fn foreign_symbols_carry() {
        assert_eq!(step(3, "aZZ", 1), "b01");
        assert_eq!(step(3, "ZZZ", 1), "ZZZ001");
    }

    #[test]
    fn never_ends_in_lowest() {
        let mut key = String::new();
        for _ in 0..5000 {
            let next = step(2, &key, 7);
            assert!(next > key, "{next} <= {key}");
            assert!(!next.ends_with('0'), "{next}");
            key = next;
        }
    }
}
