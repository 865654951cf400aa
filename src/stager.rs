//! Copies configured scripts into a temporary asset directory exactly once.

use std::fs;
use std::path::Path;
use std::sync::{Mutex, PoisonError};

use anyhow::{Context, Result};

use crate::asset_paths::plan_staged_files;
use crate::config::ScriptsConfig;
use crate::models::{StagedFile, StagingResult};
use crate::project::Book;

const STAGING_DIR_PREFIX: &str = "scripts-";

/// Stages scripts on first use and hands out copies of the cached result afterwards.
///
/// The lock is held for the whole first computation, so concurrent callers wait for the
/// in-flight staging instead of creating a second directory. A failed attempt leaves the
/// cache empty.
#[derive(Debug, Default)]
pub struct AssetStager {
    staged: Mutex<Option<StagingResult>>,
}

impl AssetStager {
    /// Create a stager with nothing staged yet.
    pub const fn new() -> Self {
        Self {
            staged: Mutex::new(None),
        }
    }

    /// Return the staged scripts, copying them into a new temporary directory on first call.
    pub fn stage<B: Book + ?Sized>(&self, book: &B) -> Result<StagingResult> {
        let mut staged = self.staged.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(result) = staged.as_ref() {
            tracing::debug!(assets_dir = %result.assets_dir.display(), "reusing staged scripts");
            return Ok(result.clone());
        }

        let result = stage_scripts(book)?;
        *staged = Some(result.clone());
        Ok(result)
    }

    /// Whether a staging result has been cached.
    pub fn is_staged(&self) -> bool {
        self.staged
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}

fn stage_scripts<B: Book + ?Sized>(book: &B) -> Result<StagingResult> {
    let config = ScriptsConfig::from_book(book)?;
    let plan = plan_staged_files(book, &config)?;

    let assets_dir = tempfile::Builder::new()
        .prefix(STAGING_DIR_PREFIX)
        .tempdir()
        .context("failed to create staging directory")?
        .keep();

    let mut files = Vec::with_capacity(plan.len());
    for entry in plan {
        book.debug(&format!("copying script {}", entry.source.display()));
        copy_staged_file(&entry, &assets_dir)?;
        files.push(entry.file_name);
    }

    tracing::info!(
        assets_dir = %assets_dir.display(),
        count = files.len(),
        "staged book scripts"
    );

    Ok(StagingResult { assets_dir, files })
}

fn copy_staged_file(entry: &StagedFile, assets_dir: &Path) -> Result<()> {
    let content = fs::read(&entry.source)
        .with_context(|| format!("failed to read {}", entry.source.display()))?;
    let destination = assets_dir.join(&entry.file_name);
    fs::write(&destination, content)
        .with_context(|| format!("failed to write {}", destination.display()))?;
    Ok(())
}
