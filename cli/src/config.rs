//! Configuration for the wordup command.
//!
//! Values come from environment variables (a `.env` file is honoured) and
//! are overridden by command-line flags. Nothing here is secret, but the
//! generated passphrases never pass through configuration or logs.

use std::path::PathBuf;

use wordup_core::WordList;

/// Default entropy budget for `gen`, in bits.
pub const DEFAULT_BITS: u32 = 64;

/// Default separator between generated words.
pub const DEFAULT_SEPARATOR: &str = " ";

/// Command configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Wordlist file; `None` selects the bundled BIP-0039 English list
    pub wordlist: Option<PathBuf>,

    /// Entropy budget for generated passphrases (default: 64 bits)
    pub bits: u32,

    /// Separator printed between generated words (default: one space)
    pub separator: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            wordlist: std::env::var("WORDUP_WORDLIST")
                .ok()
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
            bits: std::env::var("WORDUP_BITS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_BITS),
            separator: std::env::var("WORDUP_SEPARATOR")
                .unwrap_or_else(|_| DEFAULT_SEPARATOR.to_string()),
        }
    }

    /// Load the configured wordlist
    pub fn load_wordlist(&self) -> wordup_core::Result<WordList> {
        match &self.wordlist {
            Some(path) => WordList::from_file(path),
            None => Ok(WordList::english()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wordlist: None,
            bits: DEFAULT_BITS,
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.bits, 64);
        assert_eq!(config.separator, " ");
        assert!(config.wordlist.is_none());
    }

    #[test]
    fn default_wordlist_is_english() {
        let list = Config::default().load_wordlist().unwrap();
        assert_eq!(list.len(), 2048);
    }

    #[test]
    fn missing_wordlist_file_is_an_error() {
        let config = Config {
            wordlist: Some(PathBuf::from("/no/such/wordlist.txt")),
            ..Config::default()
        };
        assert!(matches!(
            config.load_wordlist(),
            Err(wordup_core::Error::WordlistRead { .. })
        ));
    }
}
