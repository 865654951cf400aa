//! Host-side view of the book being generated.

use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde_json::Value;

const DEFAULT_CONFIG_FILE: &str = "book.json";

/// Services the host site generator exposes to the staging hook.
pub trait Book {
    /// Look up a configuration value by dotted key, e.g. `pluginsConfig.scripts.files`.
    fn config_value(&self, key: &str) -> Option<Value>;

    /// Resolve a configured path to an absolute path relative to the book root.
    fn resolve(&self, path: &str) -> PathBuf;

    /// Debug-level logging sink.
    fn debug(&self, message: &str) {
        tracing::debug!(target: "book_script_assets", "{message}");
    }
}

/// A book rooted at a directory with its configuration loaded from JSON.
#[derive(Debug, Clone)]
pub struct BookContext {
    root: PathBuf,
    config: Value,
}

impl BookContext {
    /// Create a context from an already parsed configuration document.
    pub fn new(root: impl Into<PathBuf>, config: Value) -> Self {
        Self {
            root: normalize_lexically(&absolute_root(root.into())),
            config,
        }
    }

    /// Load `book.json` from the book root.
    ///
    /// A missing file yields an empty configuration; a file that exists but cannot be read
    /// or parsed is an error.
    pub fn discover(root: &Path) -> Result<Self> {
        let candidate = root.join(DEFAULT_CONFIG_FILE);
        match fs::read_to_string(&candidate) {
            Ok(content) => Self::parse(root, &candidate, &content),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                Ok(Self::new(root, Value::Object(Default::default())))
            }
            Err(err) => {
                Err(err).with_context(|| format!("failed to read {}", candidate.display()))
            }
        }
    }

    /// Load the configuration from an explicit JSON file.
    pub fn from_path(root: &Path, config_path: &Path) -> Result<Self> {
        let content = fs::read_to_string(config_path)
            .with_context(|| format!("failed to read {}", config_path.display()))?;
        Self::parse(root, config_path, &content)
    }

    fn parse(root: &Path, config_path: &Path, content: &str) -> Result<Self> {
        let config: Value = serde_json::from_str(content)
            .with_context(|| format!("failed to parse {}", config_path.display()))?;
        if !config.is_object() {
            bail!("{} must contain a JSON object", config_path.display());
        }
        Ok(Self::new(root, config))
    }

    /// Absolute book root.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Book for BookContext {
    fn config_value(&self, key: &str) -> Option<Value> {
        key.split('.')
            .try_fold(&self.config, |value, segment| value.get(segment))
            .cloned()
    }

    fn resolve(&self, path: &str) -> PathBuf {
        normalize_lexically(&self.root.join(path))
    }
}

fn absolute_root(root: PathBuf) -> PathBuf {
    if root.is_absolute() {
        return root;
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(root),
        Err(_) => root,
    }
}

/// Collapse `.` and `..` components without consulting the filesystem.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !result.pop() {
                    result.push(component);
                }
            }
            other => result.push(other),
        }
    }
    result
}
