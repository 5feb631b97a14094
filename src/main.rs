//! zwhide - Hide text inside text
//!
//! A CLI tool that hides a message inside ordinary text with zero-width
//! Unicode characters. The result reads exactly like the carrier.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CommandExecutor, ConfigCommand, DecodeCommand, EncodeCommand, InspectCommand};

/// zwhide - Hide text inside text
///
/// Hides a message between the characters of a carrier text using invisible
/// zero-width characters. This is obfuscation, not encryption.
#[derive(Parser)]
#[command(name = "zwhide")]
#[command(version)]
#[command(about = "Hide text inside text with zero-width characters")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hide a message inside carrier text
    Encode(EncodeCommand),

    /// Recover a hidden message from composite text
    Decode(DecodeCommand),

    /// Count hidden symbols and check whether they decode
    Inspect(InspectCommand),

    /// Show or create the settings file
    Config(ConfigCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode(cmd) => cmd.execute(),
        Commands::Decode(cmd) => cmd.execute(),
        Commands::Inspect(cmd) => cmd.execute(),
        Commands::Config(cmd) => cmd.execute(),
    }
}
