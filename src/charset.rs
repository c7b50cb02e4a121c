// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Predefined symbol sets.
//!
//! Order within a set does not matter; the alphabet sorts and deduplicates
//! its input.

/// Every visible ASCII character.
pub const ALL: &str = "!\"#$%&'()*+,-./0123456789:;<=>?@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_`abcdefghijklmnopqrstuvwxyz{|}~";

/// Visible ASCII without the characters JSON strings must escape (`"` and `\`).
pub const ALL_NO_ESCAPE: &str = "!#$%&'()*+,-./0123456789:;<=>?@ABCDEFGHIJKLMNOPQRSTUVWXYZ[]^_`abcdefghijklmnopqrstuvwxyz{|}~";

/// Upper and lower case letters plus digits.
pub const ALPHANUMERIC: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Lower case letters plus digits.
pub const ALPHANUMERIC_LOWER: &str = "0123456789abcdefghijklmnopqrstuvwxyz";

/// The URL-safe base64 symbols.
pub const BASE64_URL: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// The base58 symbols (no `0`, `O`, `I`, `l`).
pub const BASE58: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Look up a predefined set by its short name.
pub fn by_name(name: &str) -> Option<&'static str> {
    let set = match name {
        "all" => ALL,
        "all-no-escape" => ALL_NO_ESCAPE,
        "alphanumeric" => ALPHANUMERIC,
        "alphanumeric-lower" => ALPHANUMERIC_LOWER,
        "base64" => BASE64_URL,
        "base58" => BASE58,
        _ => return None,
    };
    return Some(set);
}
