// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Ordkey - lexicographically sortable keys for ordered lists.
//!
//! Keys are strings over a configurable alphabet. Plain string comparison
//! orders them, and a new key can always be made strictly between two
//! existing keys, so inserting into a list never renames a neighbour.
//!
//! # Quick Start
//!
//! ```
//! use ordkey::charset;
//! use ordkey::Generator;
//!
//! let keys = Generator::new(charset::ALPHANUMERIC_LOWER, 3, 1).unwrap();
//!
//! let first = keys.next("");
//! let second = keys.next(&first);
//! assert_eq!(first, "001");
//! assert_eq!(second, "002");
//!
//! // Insert between two neighbours.
//! let between = keys.next_before(&first, &second).unwrap();
//! assert!(first < between && between < second);
//! ```

pub mod alphabet;
pub mod charset;
pub mod config;
pub mod error;
pub mod generator;
pub mod iter;

pub use alphabet::Alphabet;
pub use config::Config;
pub use error::ConstructionError;
pub use error::KeyError;
pub use generator::Generator;
