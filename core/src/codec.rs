//! Word sequence <-> integer codec.
//!
//! Words are packed most-significant first: each word contributes one
//! fixed-width field, and the first word of the sequence ends up in the
//! highest bits. A field is the word's index in the list, optionally with a
//! checksum bit directly above the index bits.
//!
//! # Field Layout
//!
//! ```text
//! plain:        | index (word_length bits) |
//! checksummed:  | c | index (word_length bits) |
//! ```
//!
//! # Zero Collapse
//!
//! Without a checksum, the first word of the list has an all-zero field.
//! Leading occurrences of it are indistinguishable from "no more words":
//! `["abandon"]`, `["abandon", "abandon"]` and `[]` all encode to 0, and 0
//! decodes to an empty sequence. Requiring the first word's checksum bit to
//! be 1 is what makes the checksummed variant invertible.
//!
//! # Example
//!
//! ```
//! use wordup_core::{WordCodec, WordList};
//!
//! let codec = WordCodec::checksummed(WordList::english()).unwrap();
//! let n = codec.encode_phrase("correct horse butter stamp").unwrap();
//! assert_eq!(codec.decode(&n).unwrap(), ["correct", "horse", "butter", "stamp"]);
//! ```

use std::fmt;

use num_bigint::BigUint;
use num_traits::Zero;

use crate::checksum::{Checksum, LengthParity};
use crate::diagnostics::{DiagnosticHook, Event, Silent};
use crate::error::{Error, Result};
use crate::radix::{Encoding, Rendering};
use crate::wordlist::WordList;

/// Mask of the low `width` bits.
#[inline]
fn low_mask(width: u32) -> u64 {
    if width >= 64 {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}

/// Builder for [`WordCodec`].
pub struct CodecBuilder {
    list: WordList,
    checksum: Option<Box<dyn Checksum>>,
    hook: Box<dyn DiagnosticHook>,
}

impl CodecBuilder {
    /// Carry a checksum bit per word, computed by `checksum`.
    pub fn checksum(mut self, checksum: impl Checksum + 'static) -> Self {
        self.checksum = Some(Box::new(checksum));
        self
    }

    /// Report codec events to `hook`.
    pub fn diagnostics(mut self, hook: impl DiagnosticHook + 'static) -> Self {
        self.hook = Box::new(hook);
        self
    }

    /// Validate the configuration and build the codec.
    ///
    /// # Errors
    ///
    /// `Error::Configuration` if the checksum of the first word is 0, or if
    /// a plain codec would have zero-width fields (single-word list).
    pub fn build(self) -> Result<WordCodec> {
        let word_length = self.list.word_length();
        let field_width = match &self.checksum {
            Some(checksum) => {
                let first = &self.list.values()[0];
                if !checksum.bit(first) {
                    return Err(Error::configuration(format!(
                        "improper checksum: first word '{}' must have checksum 1",
                        first
                    )));
                }
                word_length + 1
            }
            None => word_length,
        };
        if field_width == 0 {
            return Err(Error::configuration(
                "a single-word list cannot be encoded without a checksum",
            ));
        }

        let codec = WordCodec {
            list: self.list,
            checksum: self.checksum,
            field_width,
            hook: self.hook,
        };
        codec.hook.event(&Event::CodecReady {
            words: codec.list.len(),
            word_length,
            field_width,
            checksummed: codec.is_checksummed(),
        });
        Ok(codec)
    }
}

/// Bidirectional codec between word sequences and integers.
pub struct WordCodec {
    list: WordList,
    checksum: Option<Box<dyn Checksum>>,
    field_width: u32,
    hook: Box<dyn DiagnosticHook>,
}

impl WordCodec {
    /// Start building a codec over `list`. Plain and silent by default.
    pub fn builder(list: WordList) -> CodecBuilder {
        CodecBuilder {
            list,
            checksum: None,
            hook: Box::new(Silent),
        }
    }

    /// Codec without checksum bits.
    pub fn plain(list: WordList) -> Result<Self> {
        Self::builder(list).build()
    }

    /// Codec with the default length-parity checksum.
    pub fn checksummed(list: WordList) -> Result<Self> {
        Self::builder(list).checksum(LengthParity).build()
    }

    /// The underlying wordlist.
    pub fn list(&self) -> &WordList {
        &self.list
    }

    /// Bits per word, including the checksum bit if any.
    #[inline]
    pub fn field_width(&self) -> u32 {
        self.field_width
    }

    /// Whether each field carries a checksum bit.
    #[inline]
    pub fn is_checksummed(&self) -> bool {
        self.checksum.is_some()
    }

    /// The full field for `word` found at `index`.
    fn field(&self, word: &str, index: usize) -> u64 {
        let mut field = index as u64;
        if let Some(checksum) = &self.checksum {
            if checksum.bit(word) {
                field |= 1 << self.list.word_length();
            }
        }
        field
    }

    /// Pack `words` into an integer, first word most significant.
    ///
    /// # Errors
    ///
    /// `Error::UnknownWord` on the first word missing from the list.
    pub fn encode<S: AsRef<str>>(&self, words: &[S]) -> Result<BigUint> {
        self.encode_with_prefix(words, BigUint::zero())
    }

    /// Pack `words` below an existing encoding.
    ///
    /// `encode_with_prefix(b, encode(a))` equals `encode(a ++ b)` whenever
    /// `a` does not start with a zero field.
    pub fn encode_with_prefix<S: AsRef<str>>(&self, words: &[S], prefix: BigUint) -> Result<BigUint> {
        let mut acc = prefix;
        for word in words {
            let word = word.as_ref();
            let index = self.list.lookup(word)?;
            acc <<= self.field_width;
            acc |= BigUint::from(self.field(word, index));
        }
        self.hook.event(&Event::Encoded {
            words: words.len(),
            bits: acc.bits(),
        });
        Ok(acc)
    }

    /// Pack a whitespace-separated phrase.
    pub fn encode_phrase(&self, phrase: &str) -> Result<BigUint> {
        let words: Vec<&str> = phrase.split_whitespace().collect();
        self.encode(&words)
    }

    /// Unpack an integer into words, first word first.
    ///
    /// Fields are peeled from the low end until nothing is left, then the
    /// collected words are reversed.
    ///
    /// # Errors
    ///
    /// - `Error::ChecksumMismatch` when a stored checksum bit disagrees with
    ///   the word its index points at.
    /// - `Error::IndexOutOfRange` when an index points past the list.
    pub fn decode(&self, number: &BigUint) -> Result<Vec<&str>> {
        let width = u64::from(self.field_width);
        let fields = number.bits().div_ceil(width) as usize;
        let field_mask = low_mask(self.field_width);
        let word_length = self.list.word_length();

        let mut rest = number.clone();
        let mut reversed = Vec::with_capacity(fields);
        while !rest.is_zero() {
            let field = rest.iter_u64_digits().next().unwrap_or(0) & field_mask;
            let index = field & self.list.word_mask();
            let word = self
                .list
                .get(index as usize)
                .ok_or(Error::IndexOutOfRange {
                    index,
                    len: self.list.len(),
                })?;

            if let Some(checksum) = &self.checksum {
                let stored = (field >> word_length) & 1 == 1;
                if checksum.bit(word) != stored {
                    let position = fields - 1 - reversed.len();
                    self.hook.event(&Event::ChecksumRejected { word, position });
                    return Err(Error::ChecksumMismatch {
                        word: word.to_owned(),
                        position,
                    });
                }
            }

            reversed.push(word);
            rest >>= self.field_width;
        }

        reversed.reverse();
        self.hook.event(&Event::Decoded {
            words: reversed.len(),
        });
        Ok(reversed)
    }

    /// See [`WordList::words_for_bits`].
    pub fn words_for_bits(&self, nbits: u32) -> Result<usize> {
        self.list.words_for_bits(nbits)
    }

    /// See [`WordList::randomize`].
    pub fn randomize(&self, length: usize) -> Vec<&str> {
        self.list.randomize(length)
    }

    /// Random passphrase carrying at least `nbits` bits of entropy.
    pub fn generate(&self, nbits: u32) -> Result<Vec<&str>> {
        Ok(self.randomize(self.words_for_bits(nbits)?))
    }

    /// Encode `words` once and render the integer in each encoding.
    pub fn show<S: AsRef<str>>(&self, words: &[S], encodings: &[Encoding]) -> Result<Vec<Rendering>> {
        let number = self.encode(words)?;
        Ok(encodings
            .iter()
            .map(|&encoding| Rendering {
                encoding,
                text: encoding.encode(&number),
            })
            .collect())
    }
}

impl fmt::Debug for WordCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordCodec")
            .field("words", &self.list.len())
            .field("field_width", &self.field_width)
            .field("checksummed", &self.is_checksummed())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn checked() -> WordCodec {
        WordCodec::checksummed(WordList::english()).unwrap()
    }

    fn plain() -> WordCodec {
        WordCodec::plain(WordList::english()).unwrap()
    }

    fn n(value: u64) -> BigUint {
        BigUint::from(value)
    }

    #[test]
    fn field_widths() {
        assert_eq!(plain().field_width(), 11);
        assert_eq!(checked().field_width(), 12);
        assert!(!plain().is_checksummed());
        assert!(checked().is_checksummed());
    }

    #[test]
    fn known_vectors_encode() {
        let codec = checked();
        assert_eq!(codec.encode(&["correct"]).unwrap(), n((1 << 11) | 388));
        assert_eq!(codec.encode(&["horse"]).unwrap(), n((1 << 11) | 878));
        assert_eq!(codec.encode(&["butter"]).unwrap(), n(250));
        assert_eq!(codec.encode(&["stamp"]).unwrap(), n((1 << 11) | 1699));
    }

    #[test]
    fn known_vectors_decode() {
        let codec = checked();
        assert_eq!(codec.decode(&n((1 << 11) | 388)).unwrap(), ["correct"]);
        assert_eq!(codec.decode(&n((1 << 11) | 878)).unwrap(), ["horse"]);
        assert_eq!(codec.decode(&n(250)).unwrap(), ["butter"]);
        assert_eq!(codec.decode(&n((1 << 11) | 1699)).unwrap(), ["stamp"]);
    }

    #[test]
    fn phrase_roundtrip() {
        let codec = checked();
        let number = codec.encode_phrase("correct horse butter stamp").unwrap();
        let expected = (((((1u64 << 11) | 388) << 12 | ((1 << 11) | 878)) << 12 | 250) << 12)
            | ((1 << 11) | 1699);
        assert_eq!(number, n(expected));
        assert_eq!(
            codec.decode(&number).unwrap().join(" "),
            "correct horse butter stamp"
        );
    }

    #[test]
    fn first_word_most_significant() {
        let codec = plain();
        let number = codec.encode(&["horse", "correct"]).unwrap();
        assert_eq!(number, n((878 << 11) | 388));
        assert_eq!(codec.decode(&number).unwrap(), ["horse", "correct"]);
    }

    #[test]
    fn plain_zero_collapse() {
        let codec = plain();
        assert_eq!(codec.encode(&["abandon"]).unwrap(), n(0));
        assert_eq!(codec.encode(&["abandon", "abandon"]).unwrap(), n(0));
        assert!(codec.decode(&n(0)).unwrap().is_empty());

        let number = codec.encode(&["abandon", "zoo"]).unwrap();
        assert_eq!(codec.decode(&number).unwrap(), ["zoo"]);
    }

    #[test]
    fn plain_interior_zero_survives() {
        let codec = plain();
        let words = ["zoo", "abandon", "abandon", "horse"];
        let number = codec.encode(&words).unwrap();
        assert_eq!(codec.decode(&number).unwrap(), words);
    }

    #[test]
    fn checksummed_first_word_survives() {
        let codec = checked();
        let words = ["abandon", "abandon", "zoo"];
        let number = codec.encode(&words).unwrap();
        assert_eq!(codec.decode(&number).unwrap(), words);
        assert_eq!(codec.encode(&["abandon"]).unwrap(), n(1 << 11));
    }

    #[test]
    fn empty_sequence() {
        assert_eq!(checked().encode::<&str>(&[]).unwrap(), n(0));
        assert!(checked().decode(&n(0)).unwrap().is_empty());
    }

    #[test]
    fn unknown_word_fails_without_partial_result() {
        let codec = checked();
        let result = codec.encode(&["correct", "unicorn", "stamp"]);
        assert_eq!(
            result,
            Err(Error::UnknownWord {
                word: "unicorn".into()
            })
        );
    }

    #[test]
    fn flipped_checksum_bit_detected() {
        let codec = checked();
        let words = ["correct", "horse", "butter", "stamp"];
        let number = codec.encode(&words).unwrap();

        for position in 0..words.len() {
            let bit = (words.len() - 1 - position) as u64 * 12 + 11;
            let mut corrupted = number.clone();
            corrupted.set_bit(bit, !number.bit(bit));

            assert_eq!(
                codec.decode(&corrupted),
                Err(Error::ChecksumMismatch {
                    word: words[position].into(),
                    position,
                })
            );
        }
    }

    #[test]
    fn flipped_index_bit_never_returns_original() {
        let codec = checked();
        let words = ["correct", "horse", "butter", "stamp"];
        let number = codec.encode(&words).unwrap();

        for bit in 0..number.bits() {
            let mut corrupted = number.clone();
            corrupted.set_bit(bit, !number.bit(bit));
            if let Ok(decoded) = codec.decode(&corrupted) {
                assert_ne!(decoded, words);
            }
        }
    }

    #[test]
    fn plain_cannot_read_checksummed() {
        let number = checked().encode(&["correct", "horse"]).unwrap();
        assert_ne!(plain().decode(&number).unwrap(), ["correct", "horse"]);
    }

    #[test]
    fn prefix_composes() {
        let codec = checked();
        let head = codec.encode(&["correct", "horse"]).unwrap();
        let joined = codec.encode_with_prefix(&["butter", "stamp"], head).unwrap();
        assert_eq!(
            joined,
            codec.encode(&["correct", "horse", "butter", "stamp"]).unwrap()
        );
    }

    #[test]
    fn index_out_of_range() {
        let codec = WordCodec::plain(WordList::new(["ant", "bee", "cat"]).unwrap()).unwrap();
        assert_eq!(codec.field_width(), 2);
        assert_eq!(
            codec.decode(&n(0b11)),
            Err(Error::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(codec.decode(&n(0b1001)).unwrap(), ["cat", "bee"]);
    }

    #[test]
    fn improper_checksum_rejected() {
        // "abandon" has odd length, so an even-length parity is zero for it.
        let result = WordCodec::builder(WordList::english())
            .checksum(|w: &str| w.len() % 2 == 0)
            .build();
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }

    #[test]
    fn custom_checksum() {
        let list = WordList::new(["apple", "berry", "grape", "melon"]).unwrap();
        let codec = WordCodec::builder(list)
            .checksum(|w: &str| w.contains(['a', 'e']) && !w.starts_with('m'))
            .build()
            .unwrap();
        assert_eq!(codec.field_width(), 3);
        assert_eq!(codec.encode(&["melon"]).unwrap(), n(3));
        assert_eq!(codec.encode(&["grape"]).unwrap(), n(0b110));
        assert_eq!(codec.decode(&n(0b110_011)).unwrap(), ["grape", "melon"]);
        assert!(matches!(
            codec.decode(&n(0b111)),
            Err(Error::ChecksumMismatch { position: 0, .. })
        ));
    }

    #[test]
    fn single_word_list() {
        let list = WordList::new(["a"]).unwrap();
        assert!(matches!(
            WordCodec::plain(list.clone()),
            Err(Error::Configuration { .. })
        ));

        let codec = WordCodec::checksummed(list).unwrap();
        assert_eq!(codec.field_width(), 1);
        let number = codec.encode(&["a", "a", "a"]).unwrap();
        assert_eq!(number, n(0b111));
        assert_eq!(codec.decode(&number).unwrap(), ["a", "a", "a"]);
    }

    #[test]
    fn generate_sizes_passphrase() {
        let codec = plain();
        let words = codec.generate(64).unwrap();
        assert_eq!(words.len(), 6);
        assert!(words.iter().all(|w| codec.list().contains(w)));
        assert_eq!(codec.randomize(3).len(), 3);
        assert_eq!(codec.words_for_bits(128), Ok(12));
    }

    #[test]
    fn show_renders_each_encoding() {
        let codec = checked();
        let rows = codec.show(&["correct"], &Encoding::ALL).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].encoding, Encoding::Hex);
        assert_eq!(rows[0].text, "0984");
        assert_eq!(rows[1].text, "CYQ=");
        assert_eq!(rows[2].text, "34{");
        for row in rows {
            assert_eq!(row.encoding.decode(&row.text).unwrap(), n(0x984));
        }
    }

    #[test]
    fn show_propagates_unknown_word() {
        let result = checked().show(&["nope"], &[Encoding::Hex]);
        assert!(matches!(result, Err(Error::UnknownWord { .. })));
    }

    #[test]
    fn diagnostics_receive_events() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let codec = WordCodec::builder(WordList::english())
            .checksum(LengthParity)
            .diagnostics(move |event: &Event<'_>| sink.borrow_mut().push(format!("{:?}", event)))
            .build()
            .unwrap();

        let number = codec.encode(&["correct", "horse"]).unwrap();
        codec.decode(&number).unwrap();
        let mut corrupted = number.clone();
        corrupted.set_bit(11, false);
        assert!(codec.decode(&corrupted).is_err());

        let seen = seen.borrow();
        assert_eq!(seen.len(), 4);
        assert!(seen[0].starts_with("CodecReady"));
        assert!(seen[1].contains("Encoded { words: 2, bits: 24 }"));
        assert!(seen[2].contains("Decoded { words: 2 }"));
        assert!(seen[3].contains("ChecksumRejected { word: \"horse\", position: 1 }"));
    }

    #[test]
    fn debug_output() {
        let shown = format!("{:?}", checked());
        assert!(shown.contains("field_width: 12"));
        assert!(shown.contains("checksummed: true"));
    }
}
