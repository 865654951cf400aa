//! Data structures shared between the stager and the host hook.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A configured script paired with the name it receives in the staging directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedFile {
    /// Absolute source path as resolved by the host.
    pub source: PathBuf,
    /// Generated `<digest>-<basename>` file name.
    pub file_name: String,
}

/// Outcome of staging every configured script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagingResult {
    /// Temporary directory holding the staged copies.
    pub assets_dir: PathBuf,
    /// Generated file names in configuration order.
    pub files: Vec<String>,
}

/// Descriptor handed back to the host site generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebsiteAssets {
    /// Directory the host should copy assets from.
    #[serde(alias = "assetsDir")]
    pub assets: PathBuf,
    /// Script file names, relative to `assets`.
    pub js: Vec<String>,
}

impl From<StagingResult> for WebsiteAssets {
    fn from(result: StagingResult) -> Self {
        Self {
            assets: result.assets_dir,
            js: result.files,
        }
    }
}
