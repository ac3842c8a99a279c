//! Numeric text encodings for encoded integers.
//!
//! An integer is rendered through its minimal big-endian byte string, so the
//! three encodings describe the same bytes:
//!
//! | Name | Alphabet |
//! |------|----------|
//! | `hex` | lowercase hexadecimal |
//! | `base64` | RFC 4648 standard, padded |
//! | `base85` | RFC 1924 (the `b85encode` alphabet) |
//!
//! # Example
//!
//! ```
//! use num_bigint::BigUint;
//! use wordup_core::radix::Encoding;
//!
//! let n = BigUint::from(0x0abcu32);
//! let text = Encoding::Base64.encode(&n);
//! assert_eq!(Encoding::Base64.decode(&text).unwrap(), n);
//! assert_eq!("HEX".parse::<Encoding>().unwrap(), Encoding::Hex);
//! ```

use std::fmt;
use std::str::FromStr;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use num_bigint::BigUint;
use serde::Serialize;

use crate::error::{Error, Result};

/// RFC 1924 base-85 alphabet.
const BASE85_ALPHABET: &[u8; 85] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz!#$%&()*+-;<=>?@^_`{|}~";

/// Width of the label column in [`format_table`].
pub const LABEL_WIDTH: usize = 6;

/// A numeric text encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// Hexadecimal.
    Hex,
    /// Base-64.
    Base64,
    /// Base-85.
    Base85,
}

impl Encoding {
    /// Every encoding, in display order.
    pub const ALL: [Encoding; 3] = [Encoding::Hex, Encoding::Base64, Encoding::Base85];

    /// The lowercase name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Encoding::Hex => "hex",
            Encoding::Base64 => "base64",
            Encoding::Base85 => "base85",
        }
    }

    /// Render `number` as text.
    pub fn encode(self, number: &BigUint) -> String {
        let bytes = number.to_bytes_be();
        match self {
            Encoding::Hex => hex::encode(bytes),
            Encoding::Base64 => BASE64.encode(bytes),
            Encoding::Base85 => base85_encode(&bytes),
        }
    }

    /// Parse text back into an integer.
    ///
    /// Hex accepts an optional `0x` prefix and an odd number of digits.
    pub fn decode(self, text: &str) -> Result<BigUint> {
        let text = text.trim();
        let bytes = match self {
            Encoding::Hex => {
                let digits = text
                    .strip_prefix("0x")
                    .or_else(|| text.strip_prefix("0X"))
                    .unwrap_or(text);
                let decoded = if digits.len() % 2 == 1 {
                    hex::decode(format!("0{}", digits))
                } else {
                    hex::decode(digits)
                };
                decoded.map_err(|e| self.invalid(e))?
            }
            Encoding::Base64 => BASE64.decode(text).map_err(|e| self.invalid(e))?,
            Encoding::Base85 => base85_decode(text).map_err(|reason| self.invalid(reason))?,
        };
        if bytes.is_empty() {
            return Err(self.invalid("no digits"));
        }
        Ok(BigUint::from_bytes_be(&bytes))
    }

    fn invalid(self, reason: impl fmt::Display) -> Error {
        Error::InvalidText {
            encoding: self.name(),
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Encoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "hex" => Ok(Encoding::Hex),
            "base64" => Ok(Encoding::Base64),
            "base85" => Ok(Encoding::Base85),
            _ => Err(Error::UnknownEncoding { name: s.to_owned() }),
        }
    }
}

/// One integer rendered in one encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rendering {
    /// The encoding used.
    pub encoding: Encoding,
    /// The rendered text.
    pub text: String,
}

/// Lay renderings out one per line.
///
/// Labels are left-justified to [`LABEL_WIDTH`] and every rendering is
/// right-aligned to the width of the widest one.
pub fn format_table(renderings: &[Rendering]) -> String {
    let width = renderings.iter().map(|r| r.text.len()).max().unwrap_or(0);
    renderings
        .iter()
        .map(|r| {
            format!(
                "{:<label$} {:>width$}\n",
                r.encoding.name(),
                r.text,
                label = LABEL_WIDTH,
                width = width
            )
        })
        .collect()
}

/// Encode bytes with the RFC 1924 alphabet.
///
/// Input is processed in big-endian 4-byte chunks; a short final chunk is
/// zero-filled and its output truncated to `len + 1` characters.
fn base85_encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len().div_ceil(4) * 5);
    for chunk in bytes.chunks(4) {
        let mut word = [0u8; 4];
        word[..chunk.len()].copy_from_slice(chunk);
        let mut value = u32::from_be_bytes(word);

        let mut digits = [0u8; 5];
        for digit in digits.iter_mut().rev() {
            *digit = BASE85_ALPHABET[(value % 85) as usize];
            value /= 85;
        }
        for &digit in &digits[..chunk.len() + 1] {
            out.push(char::from(digit));
        }
    }
    out
}

fn base85_digit(c: u8) -> Option<u32> {
    BASE85_ALPHABET
        .iter()
        .position(|&a| a == c)
        .map(|p| p as u32)
}

/// Inverse of [`base85_encode`].
fn base85_decode(text: &str) -> std::result::Result<Vec<u8>, String> {
    let input = text.as_bytes();
    if input.len() % 5 == 1 {
        return Err(format!("length {} leaves a dangling character", input.len()));
    }

    let mut out = Vec::with_capacity(input.len() / 5 * 4 + 4);
    for chunk in input.chunks(5) {
        let mut value: u64 = 0;
        for i in 0..5 {
            let digit = match chunk.get(i) {
                Some(&c) => base85_digit(c)
                    .ok_or_else(|| format!("bad character '{}'", char::from(c)))?,
                None => 84,
            };
            value = value * 85 + u64::from(digit);
        }
        let value = u32::try_from(value).map_err(|_| "chunk overflows 32 bits".to_string())?;
        out.extend_from_slice(&value.to_be_bytes()[..chunk.len() - 1]);
    }
    Ok(out)
}
