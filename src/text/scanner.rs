//! Single-pass scanner that splits a composite text.
//!
//! Every character is classified against the alphabet:
//! - `zero` / `one` shift a binary digit into the pending codepoint
//! - `terminator` turns the pending digits into one payload character
//! - anything else is carrier text
//!
//! A well-formed composite ends with no pending digits. The scanner owns all
//! of its accumulators, so independent scans never share state.

use crate::cipher::{CipherAlphabet, Symbol};
use crate::decoder::{DecodedText, DecoderError};

/// Incremental state machine over the characters of a composite text.
#[derive(Debug, Clone)]
pub struct Scanner {
    cipher: CipherAlphabet,
    visible: String,
    payload: String,
    /// Pending codepoint value, saturating once it leaves the Unicode range.
    value: u32,
    /// Digits accumulated since the last terminator.
    pending: usize,
    position: usize,
}

impl Scanner {
    /// Creates an empty scanner for the given alphabet.
    pub fn new(cipher: CipherAlphabet) -> Self {
        Self {
            cipher,
            visible: String::new(),
            payload: String::new(),
            value: 0,
            pending: 0,
            position: 0,
        }
    }

    /// Creates a scanner with buffers sized for a composite of `len` bytes.
    pub fn with_capacity(cipher: CipherAlphabet, len: usize) -> Self {
        Self {
            visible: String::with_capacity(len),
            ..Self::new(cipher)
        }
    }

    /// Consumes one character.
    pub fn feed(&mut self, c: char) -> Result<(), DecoderError> {
        match self.cipher.classify(c) {
            Symbol::Zero => self.push_bit(0),
            Symbol::One => self.push_bit(1),
            Symbol::Terminator => self.close_char()?,
            Symbol::Visible(c) => self.visible.push(c),
        }
        self.position += 1;
        Ok(())
    }

    /// Number of digits waiting for a terminator.
    pub fn pending_bits(&self) -> usize {
        self.pending
    }

    /// Ends the scan. Fails if the last payload character was never terminated.
    pub fn finish(self) -> Result<DecodedText, DecoderError> {
        if self.pending > 0 {
            return Err(DecoderError::MalformedStream {
                pending_bits: self.pending,
            });
        }

        Ok(DecodedText {
            carrier: self.visible,
            payload: self.payload,
        })
    }

    fn push_bit(&mut self, bit: u32) {
        self.value = self.value.saturating_mul(2).saturating_add(bit);
        self.pending += 1;
    }

    fn close_char(&mut self) -> Result<(), DecoderError> {
        if self.pending == 0 {
            return Err(DecoderError::EmptyCharacter {
                position: self.position,
            });
        }

        let c = char::from_u32(self.value).ok_or(DecoderError::InvalidCodepoint {
            value: self.value,
            position: self.position,
        })?;

        self.payload.push(c);
        self.value = 0;
        self.pending = 0;
        Ok(())
    }
}

/// Scans a whole composite text in one pass.
pub fn scan(composite: &str, cipher: &CipherAlphabet) -> Result<DecodedText, DecoderError> {
    let mut scanner = Scanner::with_capacity(*cipher, composite.len());
    for c in composite.chars() {
        scanner.feed(c)?;
    }
    scanner.finish()
}
