//! Config command - show or create the settings file.

use anyhow::{bail, Context, Result};
use clap::Args;

use zwhide::Settings;

use super::CommandExecutor;

/// Show the effective settings, or write a default settings file.
#[derive(Args, Debug)]
pub struct ConfigCommand {
    /// Write the default settings to ~/.zwhide/config.toml
    #[arg(long)]
    pub init: bool,

    /// Overwrite an existing settings file (with --init)
    #[arg(long, requires = "init")]
    pub force: bool,

    /// Print the effective settings and their file path (the default)
    #[arg(long, conflicts_with = "init")]
    pub show: bool,
}

impl CommandExecutor for ConfigCommand {
    fn execute(&self) -> Result<()> {
        let path = Settings::config_path()?;

        if self.init {
            if path.exists() && !self.force {
                bail!(
                    "Settings file already exists at {} (use --force to overwrite)",
                    path.display()
                );
            }

            let path = Settings::default()
                .save()
                .context("Failed to write settings file")?;
            println!("Wrote default settings to {}", path.display());
            return Ok(());
        }

        // --show, or no flag at all
        let settings = Settings::load().context("Failed to load settings")?;
        let source = if path.exists() { "file" } else { "defaults" };

        println!("Settings file: {} ({})", path.display(), source);
        println!("Cipher:        {}", settings.cipher);
        println!("  zero:        {}", zwhide::cipher::format_codepoint(settings.cipher.zero()));
        println!("  one:         {}", zwhide::cipher::format_codepoint(settings.cipher.one()));
        println!(
            "  terminator:  {}",
            zwhide::cipher::format_codepoint(settings.cipher.terminator())
        );
        println!("Verbose:       {}", settings.verbose);

        Ok(())
    }
}
