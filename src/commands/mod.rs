//! Command module - Strategy pattern for CLI commands.
//!
//! Each command is a separate module implementing the `CommandExecutor` trait.

mod config;
mod decode;
mod encode;
mod inspect;

pub use config::ConfigCommand;
pub use decode::DecodeCommand;
pub use encode::EncodeCommand;
pub use inspect::InspectCommand;

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};

use zwhide::{CipherAlphabet, Settings};

/// Trait for command execution - Strategy pattern.
///
/// Each command struct holds its parsed arguments and implements
/// this trait to define its execution logic.
pub trait CommandExecutor {
    /// Executes the command with its parsed arguments.
    fn execute(&self) -> Result<()>;
}

/// Loads the settings file and applies command-line overrides.
fn effective_settings(cipher: Option<CipherAlphabet>, verbose: bool) -> Result<Settings> {
    let settings = Settings::load().context("Failed to load settings")?;
    Ok(apply_overrides(settings, cipher, verbose))
}

/// `--cipher` replaces the stored alphabet; `--verbose` can only turn it on.
fn apply_overrides(
    mut settings: Settings,
    cipher: Option<CipherAlphabet>,
    verbose: bool,
) -> Settings {
    if let Some(cipher) = cipher {
        settings.cipher = cipher;
    }
    settings.verbose |= verbose;
    settings
}

/// Resolves text from an inline value, a file, or stdin (in that order).
fn read_text(inline: Option<&String>, file: Option<&PathBuf>, what: &str) -> Result<String> {
    if let Some(text) = inline {
        return Ok(text.clone());
    }

    if let Some(path) = file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {} from {}", what, path.display()));
    }

    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .with_context(|| format!("Failed to read {} from stdin", what))?;
    Ok(text)
}

/// Writes text to a file verbatim, or prints it to stdout.
fn write_text(text: &str, output: Option<&PathBuf>) -> Result<()> {
    match output {
        Some(path) => std::fs::write(path, text)
            .with_context(|| format!("Failed to write to {}", path.display())),
        None => {
            println!("{}", text);
            Ok(())
        }
    }
}
