//! Persistent settings for zwhide.
//!
//! Settings live in `~/.zwhide/config.toml`:
//!
//! ```toml
//! verbose = false
//!
//! [cipher]
//! zero = "U+200B"
//! one = "U+200C"
//! terminator = "U+200D"
//! ```
//!
//! A missing file means defaults. The alphabet is validated while parsing,
//! so a file that repeats a symbol fails to load.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::cipher::CipherAlphabet;
use crate::decoder::DecoderConfig;
use crate::encoder::EncoderConfig;

/// Errors that can occur when loading or saving settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Config directory not found. Unable to determine home directory.")]
    NoConfigDir,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),
}

/// User settings stored in TOML format.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Print progress on stderr.
    pub verbose: bool,

    /// Alphabet used when no `--cipher` flag is given.
    pub cipher: CipherAlphabet,
}

impl Settings {
    /// Load the settings from the default location.
    ///
    /// Returns defaults if the file doesn't exist.
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load the settings from a specific file.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;
        Ok(settings)
    }

    /// Save the settings to the default location.
    pub fn save(&self) -> Result<PathBuf, SettingsError> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save the settings to a specific file.
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;

        // Set restrictive permissions on config file (Unix only)
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(path)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(path, perms)?;
        }

        Ok(())
    }

    /// Get the path to the settings file.
    pub fn config_path() -> Result<PathBuf, SettingsError> {
        Ok(get_config_dir()?.join("config.toml"))
    }

    /// Encoder configuration derived from these settings.
    pub fn encoder_config(&self) -> EncoderConfig {
        EncoderConfig {
            cipher: self.cipher,
            verbose: self.verbose,
        }
    }

    /// Decoder configuration derived from these settings.
    pub fn decoder_config(&self) -> DecoderConfig {
        DecoderConfig {
            cipher: self.cipher,
            verbose: self.verbose,
        }
    }
}

/// Get the zwhide config directory (`~/.zwhide`).
pub fn get_config_dir() -> Result<PathBuf, SettingsError> {
    dirs::home_dir()
        .map(|home| home.join(".zwhide"))
        .ok_or(SettingsError::NoConfigDir)
}
