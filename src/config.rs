//! Configuration
//!
//! Loaded from a JSON file, then overridden from the environment:
//!
//! - `VOXCTL_SCREEN`: screen bounds as `<width>x<height>`
//! - `VOXCTL_WAKE_WORD`: word that precedes spoken commands

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::interpreter::{RuleSpec, ScreenSize};
use crate::utils::{Error, Result};

pub const ENV_SCREEN: &str = "VOXCTL_SCREEN";
pub const ENV_WAKE_WORD: &str = "VOXCTL_WAKE_WORD";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Screen bounds for coordinate validation; unchecked when absent
    pub screen: Option<ScreenSize>,
    pub wake_word: String,
    /// Words dropped from a spoken command after the wake word
    pub filler_words: Vec<String>,
    /// Rules appended after the built-in rules of their intent
    pub extra_rules: Vec<RuleSpec>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen: None,
            wake_word: "assistant".to_string(),
            filler_words: ["euh", "alors", "donc", "voilà", "bon"]
                .iter()
                .map(|w| w.to_string())
                .collect(),
            extra_rules: Vec::new(),
        }
    }
}

impl Config {
    /// Read a JSON configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| Error::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Apply overrides from the process environment
    pub fn apply_env(self) -> Result<Self> {
        self.apply_overrides(|name| std::env::var(name).ok())
    }

    /// Apply overrides from any variable lookup
    pub fn apply_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(value) = lookup(ENV_SCREEN) {
            self.screen = Some(parse_screen(&value)?);
        }
        if let Some(value) = lookup(ENV_WAKE_WORD) {
            let word = value.trim();
            if word.is_empty() {
                return Err(Error::Config(format!("{} is empty", ENV_WAKE_WORD)));
            }
            self.wake_word = word.to_string();
        }
        Ok(self)
    }
}

/// Parse `<width>x<height>`
pub fn parse_screen(value: &str) -> Result<ScreenSize> {
    let invalid = || Error::Config(format!("invalid screen size '{}', expected <width>x<height>", value));

    let (width, height) = value.trim().split_once(['x', 'X']).ok_or_else(invalid)?;
    let width: u32 = width.trim().parse().map_err(|_| invalid())?;
    let height: u32 = height.trim().parse().map_err(|_| invalid())?;
    if width == 0 || height == 0 {
        return Err(invalid());
    }
    Ok(ScreenSize::new(width, height))
}
