//! wordup core - codec between memorable word sequences and integers.
//!
//! This library provides the building blocks for "correct horse battery
//! staple" passphrases:
//! - Sorted wordlists with binary-search lookup
//! - Packing word sequences into integers and back
//! - An optional per-word checksum bit validated on decode
//! - Entropy budgeting and uniform random word selection
//! - Hex, base-64 and base-85 renderings of encoded integers
//!
//! # Constraints
//!
//! This library intentionally does NOT:
//! - Access the network
//! - Persist anything (wordlists are read, never written)
//! - Keep global state (diagnostics go to a per-codec hook)
//! - Make security claims beyond uniform selection from the OS CSPRNG
//!
//! # Example: Generate, Encode, Expand
//!
//! ```
//! use wordup_core::{Encoding, WordCodec, WordList};
//!
//! let list = WordList::english();
//!
//! // 1. Size and draw a passphrase with at least 64 bits of entropy
//! let words = list.randomize(list.words_for_bits(64).unwrap());
//! assert_eq!(words.len(), 6);
//!
//! // 2. Encode it with a checksum bit per word
//! let codec = WordCodec::checksummed(list.clone()).unwrap();
//! let number = codec.encode(&words).unwrap();
//! let text = Encoding::Base85.encode(&number);
//!
//! // 3. Expand it back
//! let decoded = codec.decode(&Encoding::Base85.decode(&text).unwrap()).unwrap();
//! assert_eq!(decoded, words);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod checksum;
pub mod codec;
pub mod diagnostics;
pub mod error;
pub mod radix;
pub mod wordlist;

// Re-export main types at crate root
pub use checksum::{Checksum, LengthParity};
pub use codec::{CodecBuilder, WordCodec};
pub use diagnostics::{DiagnosticHook, Event, Silent};
pub use error::{Error, Result};
pub use radix::{format_table, Encoding, Rendering};
pub use wordlist::WordList;

/// Re-exported so callers can name encoded integers without a direct
/// dependency.
pub use num_bigint::BigUint;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
