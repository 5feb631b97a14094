//! Cipher alphabet for zero-width embedding.
//!
//! The alphabet is an ordered triple `(zero, one, terminator)` of mutually
//! distinct characters. `zero` and `one` carry the binary digits of each
//! payload codepoint, `terminator` closes one payload character.
//!
//! ## Collisions
//!
//! The codec never escapes anything. If the carrier text already contains
//! one of the three alphabet characters, the decoder will read it as part of
//! the hidden stream. Pick an alphabet that does not occur in your carriers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// U+200B ZERO WIDTH SPACE.
pub const ZERO_WIDTH_SPACE: char = '\u{200B}';

/// U+200C ZERO WIDTH NON-JOINER.
pub const ZERO_WIDTH_NON_JOINER: char = '\u{200C}';

/// U+200D ZERO WIDTH JOINER.
pub const ZERO_WIDTH_JOINER: char = '\u{200D}';

/// Errors that can occur when building or parsing a cipher alphabet.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    #[error("Cipher symbols must be distinct: {0} is used more than once")]
    DuplicateSymbol(String),

    #[error("Invalid codepoint notation: '{0}' (expected U+XXXX or a single character)")]
    InvalidCodepoint(String),

    #[error("Cipher alphabet needs exactly 3 symbols, got {0}")]
    WrongSymbolCount(usize),
}

/// Classification of a single character against an alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// Binary digit 0.
    Zero,
    /// Binary digit 1.
    One,
    /// End of one payload character.
    Terminator,
    /// Ordinary carrier character.
    Visible(char),
}

/// Three distinct characters used as bit-0, bit-1 and terminator markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawAlphabet", into = "RawAlphabet")]
pub struct CipherAlphabet {
    zero: char,
    one: char,
    terminator: char,
}

impl CipherAlphabet {
    /// Creates an alphabet, rejecting any repeated symbol.
    pub fn new(zero: char, one: char, terminator: char) -> Result<Self, CipherError> {
        if zero == one || zero == terminator {
            return Err(CipherError::DuplicateSymbol(format_codepoint(zero)));
        }
        if one == terminator {
            return Err(CipherError::DuplicateSymbol(format_codepoint(one)));
        }

        Ok(Self {
            zero,
            one,
            terminator,
        })
    }

    /// Symbol for binary digit 0.
    pub fn zero(&self) -> char {
        self.zero
    }

    /// Symbol for binary digit 1.
    pub fn one(&self) -> char {
        self.one
    }

    /// Symbol closing one payload character.
    pub fn terminator(&self) -> char {
        self.terminator
    }

    /// Returns the symbol that encodes `bit`.
    pub fn bit(&self, bit: bool) -> char {
        if bit {
            self.one
        } else {
            self.zero
        }
    }

    /// Classifies a character of a composite text.
    pub fn classify(&self, c: char) -> Symbol {
        if c == self.zero {
            Symbol::Zero
        } else if c == self.one {
            Symbol::One
        } else if c == self.terminator {
            Symbol::Terminator
        } else {
            Symbol::Visible(c)
        }
    }

    /// Returns true if `c` is one of the three alphabet symbols.
    pub fn contains(&self, c: char) -> bool {
        !matches!(self.classify(c), Symbol::Visible(_))
    }

    /// Counts the characters of `text` that belong to the alphabet.
    pub fn count_in(&self, text: &str) -> usize {
        text.chars().filter(|&c| self.contains(c)).count()
    }
}

impl Default for CipherAlphabet {
    /// Zero-width space, zero-width non-joiner, zero-width joiner.
    fn default() -> Self {
        Self {
            zero: ZERO_WIDTH_SPACE,
            one: ZERO_WIDTH_NON_JOINER,
            terminator: ZERO_WIDTH_JOINER,
        }
    }
}

impl fmt::Display for CipherAlphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{}",
            format_codepoint(self.zero),
            format_codepoint(self.one),
            format_codepoint(self.terminator)
        )
    }
}

impl FromStr for CipherAlphabet {
    type Err = CipherError;

    /// Parses `"U+200B,U+200C,U+200D"` (zero, one, terminator).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(|p| p.trim()).collect();
        if parts.len() != 3 {
            return Err(CipherError::WrongSymbolCount(parts.len()));
        }

        Self::new(
            parse_codepoint(parts[0])?,
            parse_codepoint(parts[1])?,
            parse_codepoint(parts[2])?,
        )
    }
}

/// On-disk form of the alphabet: codepoints in `U+XXXX` notation.
#[derive(Serialize, Deserialize)]
struct RawAlphabet {
    zero: String,
    one: String,
    terminator: String,
}

impl TryFrom<RawAlphabet> for CipherAlphabet {
    type Error = CipherError;

    fn try_from(raw: RawAlphabet) -> Result<Self, Self::Error> {
        Self::new(
            parse_codepoint(&raw.zero)?,
            parse_codepoint(&raw.one)?,
            parse_codepoint(&raw.terminator)?,
        )
    }
}

impl From<CipherAlphabet> for RawAlphabet {
    fn from(alphabet: CipherAlphabet) -> Self {
        Self {
            zero: format_codepoint(alphabet.zero),
            one: format_codepoint(alphabet.one),
            terminator: format_codepoint(alphabet.terminator),
        }
    }
}

/// Formats a character as `U+XXXX` (at least four hex digits).
pub fn format_codepoint(c: char) -> String {
    format!("U+{:04X}", c as u32)
}

/// Parses `U+XXXX` / `u+xxxx` notation, or accepts a single literal character.
pub fn parse_codepoint(s: &str) -> Result<char, CipherError> {
    let invalid = || CipherError::InvalidCodepoint(s.to_string());

    if let Some(hex) = s.strip_prefix("U+").or_else(|| s.strip_prefix("u+")) {
        // from_str_radix would take a leading sign
        if !hex.starts_with(|c: char| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let value = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
        return char::from_u32(value).ok_or_else(invalid);
    }

    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(invalid()),
    }
}
