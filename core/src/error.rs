//! Error types for wordup-core.
//!
//! Every failure is raised at the point of detection and never retried
//! internally. Encoding and decoding either succeed completely or return
//! one of these errors; no partial word sequence or integer escapes.
//!
//! # Error Categories
//!
//! - **Construction errors**: `Configuration`, `WordlistRead`
//! - **Lookup errors**: `UnknownWord`
//! - **Decode errors**: `ChecksumMismatch`, `IndexOutOfRange`
//! - **Text encoding errors**: `UnknownEncoding`, `InvalidText`

use std::path::PathBuf;

/// Result type alias for wordup-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during wordup-core operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    // ==================== Construction Errors ====================
    /// The wordlist or codec cannot be built.
    ///
    /// Raised for an empty list, a checksum that is zero for the first
    /// word, or a list too small to carry any information.
    #[error("invalid configuration: {reason}")]
    Configuration {
        /// What is wrong with the configuration.
        reason: String,
    },

    /// A wordlist file could not be read.
    #[error("cannot read wordlist {}: {reason}", .path.display())]
    WordlistRead {
        /// The file that was requested.
        path: PathBuf,
        /// The underlying I/O failure.
        reason: String,
    },

    // ==================== Lookup Errors ====================
    /// A word is not present in the wordlist.
    ///
    /// This is the primary validation surface for user-supplied passphrases.
    #[error("word not in list: '{word}'")]
    UnknownWord {
        /// The word that was looked up.
        word: String,
    },

    // ==================== Decode Errors ====================
    /// A decoded word does not match the checksum bit stored beside it.
    #[error("checksum failed on '{word}' at position {position}")]
    ChecksumMismatch {
        /// The word the index field pointed at.
        word: String,
        /// Zero-based position of the word in the decoded sequence.
        position: usize,
    },

    /// A decoded index field points past the end of the wordlist.
    ///
    /// Only possible when the list length is not a power of two.
    #[error("index {index} out of range for wordlist of {len} words")]
    IndexOutOfRange {
        /// The extracted index.
        index: u64,
        /// Number of words in the list.
        len: usize,
    },

    // ==================== Text Encoding Errors ====================
    /// The requested numeric text encoding does not exist.
    #[error("unknown encoding '{name}' (expected hex, base64 or base85)")]
    UnknownEncoding {
        /// The name that was requested.
        name: String,
    },

    /// Text could not be parsed in the requested encoding.
    #[error("invalid {encoding} text: {reason}")]
    InvalidText {
        /// Name of the encoding.
        encoding: &'static str,
        /// Description of what's wrong.
        reason: String,
    },
}

impl Error {
    pub(crate) fn configuration(reason: impl Into<String>) -> Self {
        Error::Configuration {
            reason: reason.into(),
        }
    }
}
