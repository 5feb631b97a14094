//! Inspect command - look for a hidden stream without extracting it.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use zwhide::{decode, CipherAlphabet, Symbol};

use super::{effective_settings, read_text, CommandExecutor};

/// Report how many hidden symbols a text carries and whether they decode.
#[derive(Args, Debug)]
pub struct InspectCommand {
    /// Text to inspect (reads from stdin if neither --input nor --input-file is given)
    #[arg(short, long, conflicts_with = "input_file")]
    pub input: Option<String>,

    /// Read the text from a file
    #[arg(long, conflicts_with = "input")]
    pub input_file: Option<PathBuf>,

    /// Print the text with hidden symbols shown as 0, 1 and |
    #[arg(short, long)]
    pub reveal: bool,

    /// Cipher alphabet as zero,one,terminator (e.g. U+200B,U+200C,U+200D)
    #[arg(long)]
    pub cipher: Option<CipherAlphabet>,
}

/// Per-class character counts of a text.
#[derive(Debug, Default, PartialEq, Eq)]
struct SymbolCounts {
    visible: usize,
    zeros: usize,
    ones: usize,
    terminators: usize,
}

impl SymbolCounts {
    fn of(text: &str, cipher: &CipherAlphabet) -> Self {
        let mut counts = Self::default();
        for c in text.chars() {
            match cipher.classify(c) {
                Symbol::Zero => counts.zeros += 1,
                Symbol::One => counts.ones += 1,
                Symbol::Terminator => counts.terminators += 1,
                Symbol::Visible(_) => counts.visible += 1,
            }
        }
        counts
    }

    fn hidden(&self) -> usize {
        self.zeros + self.ones + self.terminators
    }
}

/// Replaces every alphabet symbol with a printable marker.
fn reveal(text: &str, cipher: &CipherAlphabet) -> String {
    text.chars()
        .map(|c| match cipher.classify(c) {
            Symbol::Zero => '0',
            Symbol::One => '1',
            Symbol::Terminator => '|',
            Symbol::Visible(c) => c,
        })
        .collect()
}

impl CommandExecutor for InspectCommand {
    fn execute(&self) -> Result<()> {
        let settings = effective_settings(self.cipher, false)?;
        let text = read_text(self.input.as_ref(), self.input_file.as_ref(), "text")?;
        let counts = SymbolCounts::of(&text, &settings.cipher);

        println!("Cipher:        {}", settings.cipher);
        println!("Visible chars: {}", counts.visible);
        println!(
            "Hidden:        {} ({} zero, {} one, {} terminator)",
            counts.hidden(),
            counts.zeros,
            counts.ones,
            counts.terminators
        );

        if counts.hidden() == 0 {
            println!("Status:        no hidden stream");
        } else {
            match decode(&text, &settings.cipher) {
                Ok(decoded) => println!(
                    "Status:        well-formed, {} hidden character(s)",
                    decoded.payload.chars().count()
                ),
                Err(e) => println!("Status:        {}", e),
            }
        }

        if self.reveal {
            println!();
            println!("{}", reveal(&text, &settings.cipher));
        }

        Ok(())
    }
}
