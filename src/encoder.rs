//! Hiding a payload inside a carrier text.
//!
//! This module orchestrates the encoding process:
//! 1. Check the carrier has at least one gap (2+ characters)
//! 2. Frame the payload into cipher symbols
//! 3. Distribute the symbols over the `N - 1` gaps
//! 4. Interleave: carrier char, fragment, carrier char, fragment, ...
//!
//! The composite text renders like the carrier as long as the alphabet is
//! invisible. Its length in characters is always
//! `len(carrier) + framed_len(payload)`.

use thiserror::Error;

use crate::cipher::CipherAlphabet;
use crate::text::distribute::{distribute, fragment_size, gap_count, DistributeError};
use crate::text::framing::frame;

/// Errors that can occur during encoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncoderError {
    #[error("Carrier too short: {len} character(s), need at least 2 to hide anything")]
    CarrierTooShort { len: usize },
}

impl From<DistributeError> for EncoderError {
    fn from(e: DistributeError) -> Self {
        match e {
            DistributeError::InsufficientCarrier { len } => Self::CarrierTooShort { len },
        }
    }
}

/// Result of encoding, with the numbers behind the layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedText {
    /// The composite text (carrier with the hidden stream interleaved).
    pub text: String,
    /// Number of cipher symbols inserted.
    pub stream_len: usize,
    /// Number of gaps in the carrier (`len - 1`).
    pub gaps: usize,
    /// Symbols per fragment (`ceil(stream_len / gaps)`).
    pub fragment_size: usize,
    /// Carrier characters that already belong to the alphabet.
    /// Anything above zero means the result will not decode cleanly.
    pub collisions: usize,
}

/// Configuration for the encoder.
#[derive(Debug, Clone, Default)]
pub struct EncoderConfig {
    /// Alphabet used for the hidden stream.
    pub cipher: CipherAlphabet,
    /// Whether to output verbose information.
    pub verbose: bool,
}

/// Hides `payload` inside `carrier` and returns the composite text.
///
/// # Errors
/// `EncoderError::CarrierTooShort` if the carrier has fewer than 2 characters.
pub fn encode(carrier: &str, payload: &str, cipher: &CipherAlphabet) -> Result<String, EncoderError> {
    let config = EncoderConfig {
        cipher: *cipher,
        verbose: false,
    };
    encode_with_config(carrier, payload, &config).map(|encoded| encoded.text)
}

/// Encodes with custom configuration.
pub fn encode_with_config(
    carrier: &str,
    payload: &str,
    config: &EncoderConfig,
) -> Result<EncodedText, EncoderError> {
    let carrier_len = carrier.chars().count();
    let gaps = gap_count(carrier_len)?;

    let collisions = config.cipher.count_in(carrier);
    if config.verbose {
        eprintln!("Carrier has {} characters", carrier_len);
        if collisions > 0 {
            eprintln!(
                "Warning: carrier contains {} cipher character(s); decoding will misread them",
                collisions
            );
        }
    }

    let stream = frame(payload, &config.cipher);
    let stream_len = stream.chars().count();

    let fragments = distribute(&stream, carrier_len)?;
    let size = fragment_size(stream_len, gaps);

    if config.verbose {
        eprintln!(
            "Framed {} payload characters into {} symbols",
            payload.chars().count(),
            stream_len
        );
        let used = fragments.iter().filter(|f| !f.is_empty()).count();
        eprintln!(
            "Distributed over {} of {} gaps ({} symbols per gap)",
            used, gaps, size
        );
    }

    let mut text = String::with_capacity(carrier.len() + stream.len());
    for (i, c) in carrier.chars().enumerate() {
        text.push(c);
        if let Some(fragment) = fragments.get(i) {
            text.push_str(fragment);
        }
    }

    Ok(EncodedText {
        text,
        stream_len,
        gaps,
        fragment_size: size,
        collisions,
    })
}
