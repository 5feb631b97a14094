//! Decode command - recover a hidden message from composite text.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use zwhide::{decode_with_config, CipherAlphabet};

use super::{effective_settings, read_text, write_text, CommandExecutor};

/// Recover the hidden message (and optionally the carrier) from composite text.
///
/// Fails without output if the hidden stream is truncated or corrupted.
#[derive(Args, Debug)]
pub struct DecodeCommand {
    /// Composite text (reads from stdin if neither --input nor --input-file is given)
    #[arg(short, long, conflicts_with = "input_file")]
    pub input: Option<String>,

    /// Read the composite text from a file
    #[arg(long, conflicts_with = "input")]
    pub input_file: Option<PathBuf>,

    /// Write the recovered message to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also print the recovered carrier text (on stderr)
    #[arg(long)]
    pub show_carrier: bool,

    /// Cipher alphabet as zero,one,terminator (e.g. U+200B,U+200C,U+200D)
    #[arg(long)]
    pub cipher: Option<CipherAlphabet>,

    /// Verbose output (shows scan progress)
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommandExecutor for DecodeCommand {
    fn execute(&self) -> Result<()> {
        let settings = effective_settings(self.cipher, self.verbose)?;
        let composite = read_text(self.input.as_ref(), self.input_file.as_ref(), "composite text")?;

        let decoded = decode_with_config(&composite, &settings.decoder_config())
            .context("Failed to decode hidden message")?;

        if decoded.payload.is_empty() {
            eprintln!("No hidden message found");
        }

        if self.show_carrier {
            eprintln!("Carrier: {}", decoded.carrier);
        }

        write_text(&decoded.payload, self.output.as_ref())?;

        if let Some(path) = &self.output {
            eprintln!(
                "Recovered {} characters to {}",
                decoded.payload.chars().count(),
                path.display()
            );
        }

        Ok(())
    }
}
