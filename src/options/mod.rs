//! Centralized engine options with TOML preset support.
//!
//! All tweakable settings (structural dimensions, explosion distances,
//! playback timing) are consolidated here. Options serialize to/from TOML
//! for presets stored wherever the host application keeps them.

mod assembly;
mod playback;

use std::path::Path;

pub use assembly::AssemblyOptions;
pub use playback::PlaybackOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::FenestraError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[playback]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Structural parameters of the window unit.
    pub assembly: AssemblyOptions,
    /// Timeline playback parameters.
    pub playback: PlaybackOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`FenestraError::Io`] if the file cannot be read, or
    /// [`FenestraError::OptionsParse`] if it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, FenestraError> {
        let content =
            std::fs::read_to_string(path).map_err(FenestraError::Io)?;
        toml::from_str(&content)
            .map_err(|e| FenestraError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`FenestraError::OptionsParse`] if serialization fails, or
    /// [`FenestraError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), FenestraError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| FenestraError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(FenestraError::Io)?;
        }
        std::fs::write(path, content).map_err(FenestraError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
