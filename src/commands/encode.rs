//! Encode command - hide a message inside carrier text.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use zwhide::{encode_with_config, CipherAlphabet};

use super::{effective_settings, read_text, write_text, CommandExecutor};

/// Hide a message inside carrier text using zero-width characters.
///
/// The output looks exactly like the carrier. The carrier needs at least
/// two characters.
#[derive(Args, Debug)]
pub struct EncodeCommand {
    /// Carrier text (mutually exclusive with --carrier-file)
    #[arg(short, long, conflicts_with = "carrier_file", required_unless_present = "carrier_file")]
    pub carrier: Option<String>,

    /// Read the carrier text from a file
    #[arg(long)]
    pub carrier_file: Option<PathBuf>,

    /// Message to hide (reads from stdin if neither --message nor --file is given)
    #[arg(short, long, conflicts_with = "file")]
    pub message: Option<String>,

    /// Read the message to hide from a file
    #[arg(short, long, conflicts_with = "message")]
    pub file: Option<PathBuf>,

    /// Write the composite text to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Cipher alphabet as zero,one,terminator (e.g. U+200B,U+200C,U+200D)
    #[arg(long)]
    pub cipher: Option<CipherAlphabet>,

    /// Verbose output (shows framing and distribution)
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommandExecutor for EncodeCommand {
    fn execute(&self) -> Result<()> {
        let settings = effective_settings(self.cipher, self.verbose)?;

        let carrier = read_text(self.carrier.as_ref(), self.carrier_file.as_ref(), "carrier")?;
        let message = read_text(self.message.as_ref(), self.file.as_ref(), "message")?;

        if settings.verbose {
            eprintln!("Using cipher alphabet {}", settings.cipher);
        }

        let encoded = encode_with_config(&carrier, &message, &settings.encoder_config())
            .context("Failed to encode message")?;

        if encoded.collisions > 0 && !settings.verbose {
            eprintln!(
                "Warning: carrier contains {} cipher character(s); the result will not decode cleanly",
                encoded.collisions
            );
        }

        write_text(&encoded.text, self.output.as_ref())?;

        if let Some(path) = &self.output {
            eprintln!(
                "Hid {} symbols in {} ({} characters total)",
                encoded.stream_len,
                path.display(),
                encoded.text.chars().count()
            );
        }

        Ok(())
    }
}
