//! Recovering the carrier and payload from a composite text.
//!
//! Decoding is all-or-nothing: a stream that ends mid-character, a
//! terminator with no digits before it, or digits that do not form a Unicode
//! scalar value all fail the whole call, and no partial output is returned.

use thiserror::Error;

use crate::cipher::CipherAlphabet;
use crate::text::scanner::Scanner;

/// Errors that can occur during decoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecoderError {
    #[error("Malformed stream: input ends with {pending_bits} unterminated bit(s)")]
    MalformedStream { pending_bits: usize },

    #[error("Malformed stream: terminator at position {position} has no bits before it")]
    EmptyCharacter { position: usize },

    #[error("Malformed stream: value {value:#X} at position {position} is not a Unicode scalar value")]
    InvalidCodepoint { value: u32, position: usize },
}

/// Result of decoding a composite text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DecodedText {
    /// The visible text with every cipher symbol removed.
    pub carrier: String,
    /// The hidden message.
    pub payload: String,
}

/// Configuration for the decoder.
#[derive(Debug, Clone, Default)]
pub struct DecoderConfig {
    /// Alphabet the composite was encoded with.
    pub cipher: CipherAlphabet,
    /// Whether to output verbose information.
    pub verbose: bool,
}

/// Splits a composite text into `(carrier, payload)`.
pub fn decode(composite: &str, cipher: &CipherAlphabet) -> Result<DecodedText, DecoderError> {
    let config = DecoderConfig {
        cipher: *cipher,
        verbose: false,
    };
    decode_with_config(composite, &config)
}

/// Decodes with custom configuration.
pub fn decode_with_config(
    composite: &str,
    config: &DecoderConfig,
) -> Result<DecodedText, DecoderError> {
    let mut scanner = Scanner::with_capacity(config.cipher, composite.len());
    let mut hidden = 0usize;

    for c in composite.chars() {
        if config.cipher.contains(c) {
            hidden += 1;
        }
        if let Err(e) = scanner.feed(c) {
            if config.verbose {
                eprintln!("Scan failed after {} hidden symbols: {}", hidden, e);
            }
            return Err(e);
        }
    }

    if config.verbose {
        eprintln!("Read {} hidden symbols", hidden);
        if scanner.pending_bits() > 0 {
            eprintln!("{} bits left without a terminator", scanner.pending_bits());
        }
    }

    let decoded = scanner.finish()?;

    if config.verbose {
        eprintln!(
            "Recovered {} carrier characters and {} payload characters",
            decoded.carrier.chars().count(),
            decoded.payload.chars().count()
        );
    }

    Ok(decoded)
}
