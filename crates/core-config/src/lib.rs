//! Settings file for the input control.
//!
//! Parses `ox-input.toml` (or an override path provided by the binary) and
//! extracts the `[input]` table. Unknown fields are ignored and missing ones
//! take defaults. `load_from` is lenient: a missing, malformed, or invalid
//! file yields the default config with a log entry under the `config` target.
//! `load_from_str` is strict and reports the failure instead.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::PathBuf};
use thiserror::Error;
use tracing::{info, warn};

pub const FILE_NAME: &str = "ox-input.toml";

/// Semantic validation failures for an otherwise well-formed settings file.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("mask must be exactly one character, got {0} characters")]
    MaskLength(usize),

    #[error("mask character must occupy one terminal column, got width {0}")]
    MaskWidth(u16),

    #[error("max_len must be greater than zero")]
    ZeroMaxLen,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MaxLenUnit {
    #[default]
    Bytes,
    CodePoints,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct InputSettings {
    #[serde(default)]
    pub placeholder: String,
    #[serde(default)]
    pub password: bool,
    #[serde(default = "InputSettings::default_mask")]
    pub mask: String,
    #[serde(default)]
    pub multiline: bool,
    #[serde(default = "InputSettings::default_insert")] // typing inserts; false overwrites
    pub insert: bool,
    #[serde(default)]
    pub max_len: Option<usize>,
    #[serde(default)]
    pub max_len_unit: MaxLenUnit,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            placeholder: String::new(),
            password: false,
            mask: Self::default_mask(),
            multiline: false,
            insert: Self::default_insert(),
            max_len: None,
            max_len_unit: MaxLenUnit::Bytes,
        }
    }
}

impl InputSettings {
    fn default_mask() -> String {
        "*".to_string()
    }

    const fn default_insert() -> bool {
        true
    }

    /// The mask as a single character. Only meaningful after `validate`.
    pub fn mask_char(&self) -> char {
        self.mask.chars().next().unwrap_or('*')
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let count = self.mask.chars().count();
        if count != 1 {
            return Err(SettingsError::MaskLength(count));
        }
        check_mask(self.mask_char())?;
        if self.max_len == Some(0) {
            return Err(SettingsError::ZeroMaxLen);
        }
        Ok(())
    }
}

/// A password mask must occupy exactly one terminal column so the masked
/// text keeps one cell per code point.
pub fn check_mask(mask: char) -> Result<(), SettingsError> {
    let width = core_text::width_of(mask);
    if width != 1 {
        return Err(SettingsError::MaskWidth(width));
    }
    Ok(())
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    #[serde(default)]
    pub input: InputSettings,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub raw: Option<String>, // original file string (optional)
    pub source: Option<PathBuf>,
    pub file: ConfigFile,
}

/// Best-effort config path following platform conventions (XDG / AppData Roaming).
pub fn discover() -> PathBuf {
    let local = PathBuf::from(FILE_NAME);
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("ox-input").join(FILE_NAME);
    }
    PathBuf::from(FILE_NAME)
}

/// Parse and validate settings text.
pub fn load_from_str(content: &str) -> Result<Config> {
    let file: ConfigFile = toml::from_str(content).context("parsing settings")?;
    file.input.validate().context("validating [input]")?;
    Ok(Config {
        raw: Some(content.to_string()),
        source: None,
        file,
    })
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) => {
            info!(target: "config", path = %path.display(), error = %e, "config_missing_using_defaults");
            return Ok(Config::default());
        }
    };
    match load_from_str(&content) {
        Ok(mut cfg) => {
            info!(target: "config", path = %path.display(), "config_loaded");
            cfg.source = Some(path);
            Ok(cfg)
        }
        Err(e) => {
            warn!(target: "config", path = %path.display(), error = %format!("{e:#}"), "config_invalid_using_defaults");
            Ok(Config::default())
        }
    }
}
