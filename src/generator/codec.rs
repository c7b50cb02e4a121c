// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Block alignment and minimal-value filling shared by every engine.
//!
//! Padding by `n` appends `n - 1` lowest symbols and then the second
//! symbol. The result sorts after the input and never ends in `lowest`.

use smallvec::SmallVec;

use crate::alphabet::Alphabet;

/// Working buffer for a key under construction.
pub type KeyBuf = SmallVec<[u8; 32]>;

/// Append the minimal non-zero filler of length `n`.
pub fn pad(alphabet: &Alphabet, buf: &mut KeyBuf, n: usize) {
    if n == 0 {
        return;
    }
    buf.extend(std::iter::repeat_n(alphabet.lowest(), n - 1));
    buf.push(alphabet.second());
}

/// How many symbols bring `len` up to the next block boundary.
#[inline]
pub fn misalignment(len: usize, block_size: usize) -> usize {
    return (block_size - len % block_size) % block_size;
}

/// Pad `buf` up to the next block boundary.
pub fn align(alphabet: &Alphabet, buf: &mut KeyBuf, block_size: usize) {
    let missing = misalignment(buf.len(), block_size);
    pad(alphabet, buf, missing);
}

/// The minimal non-zero value of length `n`.
pub fn minimal(alphabet: &Alphabet, n: usize) -> KeyBuf {
    let mut buf = KeyBuf::new();
    pad(alphabet, &mut buf, n);
    return buf;
}

/// True if `tail` equals the minimal filler of its own length.
pub fn is_minimal(alphabet: &Alphabet, tail: &[u8]) -> bool {
    return match tail.split_last() {
        None => true,
        Some((&last, rest)) => {
            last == alphabet.second() && rest.iter().all(|&c| c == alphabet.lowest())
        }
    };
}

/// `n` copies of `symbol`.
pub fn filled(symbol: u8, n: usize) -> KeyBuf {
    return std::iter::repeat_n(symbol, n).collect();
}

/// Finish a working buffer as a key.
///
/// Engines only write ascii symbols and replace foreign multi-byte
/// characters whole, so the bytes stay valid utf-8.
pub fn into_key(buf: &[u8]) -> String {
    return String::from_utf8(buf.to_vec()).expect("key bytes are utf-8");
}
