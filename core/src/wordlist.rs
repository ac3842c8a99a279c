//! Ordered wordlists used as the codec's lookup table.
//!
//! A list is an ordered sequence of distinct words, sorted ascending in the
//! same order as its source file. Lookups binary-search that order, so the
//! list is never sorted or deduplicated here: feeding an unsorted list is a
//! caller error that silently corrupts lookups.
//!
//! The bundled list is the 2048-word BIP-0039 English list (11 bits per word).

use std::fmt;
use std::fs;
use std::path::Path;

use rand::rngs::OsRng;
use rand::Rng;
use ring::digest::{digest, SHA512};

use crate::error::{Error, Result};

/// The BIP-0039 English list, one word per line.
const ENGLISH: &str = include_str!("../wordlists/english.txt");

/// Smallest `L` such that `2^L >= n`, found by repeated doubling.
///
/// Returns 0 for `n <= 1`.
pub fn index_width(n: usize) -> u32 {
    let mut width = 0;
    while (1u128 << width) < n as u128 {
        width += 1;
    }
    width
}

/// An immutable, sorted sequence of unique words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    values: Vec<String>,
    word_length: u32,
    word_mask: u64,
}

impl WordList {
    /// Build a list from words that are already sorted and unique.
    ///
    /// # Errors
    ///
    /// `Error::Configuration` if `words` is empty.
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = words.into_iter().map(Into::into).collect();
        if values.is_empty() {
            return Err(Error::configuration("wordlist is empty"));
        }
        Ok(Self::from_values(values))
    }

    /// Parse a list from text holding one word per line.
    ///
    /// Surrounding whitespace is trimmed and blank lines are skipped.
    pub fn parse(text: &str) -> Result<Self> {
        Self::new(text.lines().map(str::trim).filter(|line| !line.is_empty()))
    }

    /// Load a list from a file holding one sorted word per line.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| Error::WordlistRead {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::parse(&text)
    }

    /// The bundled BIP-0039 English list.
    pub fn english() -> Self {
        Self::from_values(ENGLISH.lines().map(str::to_owned).collect())
    }

    fn from_values(values: Vec<String>) -> Self {
        let word_length = index_width(values.len());
        let word_mask = match word_length {
            64.. => u64::MAX,
            bits => (1u64 << bits) - 1,
        };
        Self {
            values,
            word_length,
            word_mask,
        }
    }

    /// Number of words in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false: construction rejects empty lists.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The words, in lookup order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Bits needed to index the list.
    #[inline]
    pub fn word_length(&self) -> u32 {
        self.word_length
    }

    /// `2^word_length - 1`, masking one index field.
    #[inline]
    pub fn word_mask(&self) -> u64 {
        self.word_mask
    }

    /// The word at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    /// Whether `word` is in the list.
    pub fn contains(&self, word: &str) -> bool {
        self.lookup(word).is_ok()
    }

    /// Binary-search `word` and return its index.
    ///
    /// # Errors
    ///
    /// `Error::UnknownWord` when the word is absent.
    pub fn lookup(&self, word: &str) -> Result<usize> {
        self.values
            .binary_search_by(|probe| probe.as_str().cmp(word))
            .map_err(|_| Error::UnknownWord {
                word: word.to_owned(),
            })
    }

    /// Minimum number of words whose combinations cover `nbits` bits.
    ///
    /// Computed as `ceil(nbits / log2(len))`, ignoring checksum overhead.
    ///
    /// # Errors
    ///
    /// `Error::Configuration` when a single-word list is asked for any
    /// entropy at all.
    pub fn words_for_bits(&self, nbits: u32) -> Result<usize> {
        if nbits == 0 {
            return Ok(0);
        }
        if self.len() < 2 {
            return Err(Error::configuration(
                "a single-word list carries no entropy",
            ));
        }
        let per_word = (self.len() as f64).log2();
        Ok((f64::from(nbits) / per_word).ceil() as usize)
    }

    /// Draw `length` words uniformly at random, with replacement.
    ///
    /// Words come from the operating system's CSPRNG. The draw is
    /// deliberately not seedable.
    pub fn randomize(&self, length: usize) -> Vec<&str> {
        let mut rng = OsRng;
        (0..length)
            .map(|_| self.values[rng.gen_range(0..self.values.len())].as_str())
            .collect()
    }

    /// SHA-512 of the words joined by single spaces, as lowercase hex.
    pub fn fingerprint(&self) -> String {
        hex::encode(digest(&SHA512, self.values.join(" ").as_bytes()))
    }
}

impl fmt::Display for WordList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fingerprint = self.fingerprint();
        write!(
            f,
            "Wordlist {} <{}>",
            self.len(),
            &fingerprint[fingerprint.len() - 8..]
        )
    }
}
