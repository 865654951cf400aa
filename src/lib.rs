#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod asset_paths;
pub mod config;
pub mod hooks;
pub mod models;
pub mod project;
pub mod stager;

pub use config::ScriptsConfig;
pub use hooks::website;
pub use models::{StagedFile, StagingResult, WebsiteAssets};
pub use project::{Book, BookContext};
pub use stager::AssetStager;
