//! Per-word checksum strategies.
//!
//! A checksum maps a word to a single bit that is stored directly above the
//! word's index field. The first word of a list must have checksum 1,
//! otherwise that word would encode to an all-zero field and vanish.

/// A function from a word to one checksum bit.
///
/// Implemented for every `Fn(&str) -> bool`, so closures and plain
/// functions can be passed where a checksum is expected.
pub trait Checksum {
    /// The checksum bit for `word`.
    fn bit(&self, word: &str) -> bool;
}

impl<F> Checksum for F
where
    F: Fn(&str) -> bool,
{
    fn bit(&self, word: &str) -> bool {
        self(word)
    }
}

/// Default checksum: the word's length mod 2.
///
/// Length is counted in bytes, which equals characters for ASCII lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LengthParity;

impl Checksum for LengthParity {
    #[inline]
    fn bit(&self, word: &str) -> bool {
        word.len() % 2 == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_parity() {
        assert!(LengthParity.bit("correct"));
        assert!(LengthParity.bit("horse"));
        assert!(LengthParity.bit("stamp"));
        assert!(!LengthParity.bit("butter"));
        assert!(!LengthParity.bit(""));
    }

    #[test]
    fn closures_are_checksums() {
        let starts_with_vowel = |w: &str| w.starts_with(['a', 'e', 'i', 'o', 'u']);
        assert!(starts_with_vowel.bit("abandon"));
        assert!(!starts_with_vowel.bit("zoo"));
    }

    #[test]
    fn usable_as_trait_object() {
        let boxed: Box<dyn Checksum> = Box::new(LengthParity);
        assert!(boxed.bit("abandon"));
    }
}
