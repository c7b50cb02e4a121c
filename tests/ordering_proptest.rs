// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Property-based tests for key ordering.

use proptest::prelude::*;

use ordkey::charset;
use ordkey::Generator;

// =============================================================================
// Test helpers
// =============================================================================

const SYMBOLS: &str = charset::ALPHANUMERIC_LOWER;

fn generator(block_size: usize, step_size: usize) -> Generator {
    return Generator::new_or_panic(SYMBOLS, block_size, step_size);
}

/// Any string over the alphabet, well-formed or not.
fn arbitrary_key() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(SYMBOLS.as_bytes().to_vec()), 1..16)
        .prop_map(|bytes| String::from_utf8(bytes).unwrap())
}

/// A block-aligned key that does not end in the lowest symbol.
fn well_formed_key(block_size: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(SYMBOLS.as_bytes().to_vec()), block_size..=block_size * 4)
        .prop_map(move |mut bytes| {
            bytes.truncate(bytes.len() - bytes.len() % block_size);
            if let Some(last) = bytes.last_mut() {
                if *last == b'0' {
                    *last = b'1';
                }
            }
            String::from_utf8(bytes).unwrap()
        })
}

fn block_and_key() -> impl Strategy<Value = (usize, usize, String)> {
    return (1..=4usize, 1..=35usize).prop_flat_map(|(block_size, step_size)| {
        (Just(block_size), Just(step_size), well_formed_key(block_size))
    });
}

fn block_and_pair() -> impl Strategy<Value = (usize, usize, String, String)> {
    return (1..=4usize, 1..=35usize).prop_flat_map(|(block_size, step_size)| {
        (Just(block_size), Just(step_size), well_formed_key(block_size), well_formed_key(block_size))
    });
}

// =============================================================================
// next / prev
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// next always moves strictly up and never ends in the lowest symbol
    #[test]
    fn next_is_strictly_greater(
        block_size in 1..=4usize,
        step_size in 1..=35usize,
        key in arbitrary_key(),
    ) {
        let next = generator(block_size, step_size).next(&key);
        prop_assert!(next > key, "{} <= {}", next, key);
        prop_assert!(!next.ends_with('0'));
    }

    /// prev, when defined, moves strictly down and never ends in the lowest symbol
    #[test]
    fn prev_is_strictly_less(
        block_size in 1..=4usize,
        step_size in 1..=35usize,
        key in arbitrary_key(),
    ) {
        if let Ok(prev) = generator(block_size, step_size).prev(&key) {
            prop_assert!(prev < key, "{} >= {}", prev, key);
            prop_assert!(!prev.ends_with('0'));
        }
    }

    /// next keeps well-formed keys well-formed
    #[test]
    fn next_preserves_well_formedness((block_size, step_size, key) in block_and_key()) {
        let generator = generator(block_size, step_size);
        let next = generator.next(&key);
        prop_assert_eq!(generator.validate(&next), Ok(()));
    }
}

// =============================================================================
// next_before
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// a key between two distinct well-formed keys always exists
    #[test]
    fn next_before_is_between((block_size, step_size, a, b) in block_and_pair()) {
        prop_assume!(a != b);
        let (prev, before) = if a < b { (a, b) } else { (b, a) };
        let generator = generator(block_size, step_size);

        let key = generator.next_before(&prev, &before).unwrap();
        prop_assert!(prev < key && key < before, "{} < {} < {}", prev, key, before);
        prop_assert_eq!(generator.validate(&key), Ok(()));
    }

    /// inserting before the first key works from an empty lower bound
    #[test]
    fn next_before_from_empty((block_size, step_size, before) in block_and_key()) {
        let generator = generator(block_size, step_size);
        let key = generator.next_before("", &before).unwrap();
        prop_assert!(!key.is_empty() && key < before);
    }

    /// reversed or equal bounds are an ordering error
    #[test]
    fn misordered_bounds_are_rejected((block_size, step_size, a, b) in block_and_pair()) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let result = generator(block_size, step_size).next_before(&high, &low);
        let is_ordering_error = matches!(result, Err(ordkey::KeyError::Ordering { .. }));
        prop_assert!(is_ordering_error);
    }
}

// =============================================================================
// Alphabet construction
// =============================================================================

proptest! {
    /// permuted and duplicated symbols build the same generator
    #[test]
    fn construction_is_order_independent(
        shuffled in Just(SYMBOLS.as_bytes().to_vec()).prop_shuffle(),
        extra in prop::collection::vec(prop::sample::select(SYMBOLS.as_bytes().to_vec()), 0..10),
        key in arbitrary_key(),
    ) {
        let mut symbols = shuffled;
        symbols.extend(extra);
        let permuted = Generator::new_or_panic(&symbols, 3, 5);
        let sorted = generator(3, 5);

        prop_assert_eq!(permuted.alphabet(), sorted.alphabet());
        prop_assert_eq!(permuted.next(&key), sorted.next(&key));
        prop_assert_eq!(permuted.prev(&key), sorted.prev(&key));
        prop_assert_eq!(permuted.middle(), sorted.middle());
    }
}
