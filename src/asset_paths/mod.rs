//! Helpers for naming staged script assets.
//!
//! Digest computation and file planning live in separate submodules so the naming scheme
//! can be tested without touching the filesystem.

mod digest;
mod naming;

pub use digest::path_digest;
pub use naming::{plan_staged_files, staged_file_name};
