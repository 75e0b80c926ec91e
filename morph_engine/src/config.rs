//! Engine settings.
//!
//! Settings come from `engine.toml` in the data directory. Every field is optional;
//! a missing or unreadable file falls back to the built-in defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};

/// Paragraph length (in characters) after which aggregated narration inserts a blank line.
pub const PARAGRAPH_WRAP: usize = 240;
/// Share of components a species needs to be named without the "-morph" suffix.
pub const MORPH_THRESHOLD: f64 = 0.75;

/// Tunables for narration and default appearances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub paragraph_wrap: usize,
    pub morph_threshold: f64,
    pub template_species: String,
    pub default_pronouns: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            paragraph_wrap: PARAGRAPH_WRAP,
            morph_threshold: MORPH_THRESHOLD,
            template_species: "template".to_string(),
            default_pronouns: "neutral".to_string(),
        }
    }
}

impl EngineConfig {
    /// Parse settings from TOML text.
    ///
    /// # Errors
    /// - if the text isn't valid TOML for these settings
    pub fn from_toml(text: &str) -> Result<EngineConfig> {
        toml::from_str(text).context("while parsing engine settings")
    }
}

/// Load engine settings, falling back to defaults if the file is missing or invalid.
pub fn load_config(path: &Path) -> EngineConfig {
    let loaded = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))
        .and_then(|text| EngineConfig::from_toml(&text));
    match loaded {
        Ok(config) => {
            info!("engine settings loaded from {}", path.display());
            config
        },
        Err(e) => {
            warn!("using default engine settings: {e:#}");
            EngineConfig::default()
        },
    }
}
