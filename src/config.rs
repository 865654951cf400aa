//! Plugin configuration read from the book's `pluginsConfig` section.

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::project::Book;

/// Configuration key holding the list of scripts to stage.
pub const SCRIPTS_FILES_KEY: &str = "pluginsConfig.scripts.files";

/// Recognised options of the scripts plugin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScriptsConfig {
    /// Script paths, relative to the book root, in the order they should be staged.
    pub files: Vec<String>,
}

impl ScriptsConfig {
    /// Read the configured script list from the host, defaulting to no scripts.
    pub fn from_book<B: Book + ?Sized>(book: &B) -> Result<Self> {
        let Some(value) = book.config_value(SCRIPTS_FILES_KEY) else {
            return Ok(Self::default());
        };
        if value.is_null() {
            return Ok(Self::default());
        }

        let files: Vec<String> = serde_json::from_value(value)
            .with_context(|| format!("`{SCRIPTS_FILES_KEY}` must be a list of paths"))?;
        let config = Self { files };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if let Some(index) = self.files.iter().position(|file| file.trim().is_empty()) {
            bail!("`{SCRIPTS_FILES_KEY}` entry {index} is an empty path");
        }
        Ok(())
    }
}
