//! # zwhide - Hide text inside text
//!
//! zwhide embeds a payload string inside an unrelated carrier text using only
//! invisible Unicode characters. The composite text displays like the
//! carrier, and splits back losslessly into (carrier, payload).
//!
//! ## Overview
//!
//! - Each payload character is rendered as the binary digits of its
//!   codepoint, written with two invisible symbols and closed by a third
//! - The resulting stream is cut into `N - 1` fragments for a carrier of `N`
//!   characters, and fragment `i` is inserted right after carrier character `i`
//! - Decoding is a single pass that sorts every character into carrier text
//!   or hidden stream
//!
//! ## Limitations
//!
//! - This is obfuscation, not security: stripping zero-width characters
//!   destroys the payload, and anyone who knows the scheme can read it
//! - Carrier text must not already contain the alphabet characters; they are
//!   never escaped
//!
//! ## Example Usage
//!
//! ```rust
//! use zwhide::{decode, encode, CipherAlphabet};
//!
//! let cipher = CipherAlphabet::default();
//! let carrier = "hide some text in this sentence but invisible!";
//!
//! let composite = encode(carrier, "Hello world!", &cipher).unwrap();
//! assert_ne!(composite, carrier);
//!
//! let decoded = decode(&composite, &cipher).unwrap();
//! assert_eq!(decoded.carrier, carrier);
//! assert_eq!(decoded.payload, "Hello world!");
//! ```
//!
//! ## Modules
//!
//! - [`cipher`]: The three-symbol alphabet and codepoint notation
//! - [`text`]: Bit framing, distribution over gaps, stream scanning
//! - [`encoder`]: Building composite text
//! - [`decoder`]: Splitting composite text (all-or-nothing)
//! - [`settings`]: Persistent settings in `~/.zwhide/config.toml`

pub mod cipher;
pub mod decoder;
pub mod encoder;
pub mod settings;
pub mod text;

// Re-export commonly used types at the crate root
pub use cipher::{CipherAlphabet, CipherError, Symbol};
pub use decoder::{decode, decode_with_config, DecodedText, DecoderConfig, DecoderError};
pub use encoder::{encode, encode_with_config, EncodedText, EncoderConfig, EncoderError};
pub use settings::{Settings, SettingsError};
pub use text::DistributeError;
