//! Lifecycle hooks invoked by the host site generator.

use anyhow::Result;

use crate::models::WebsiteAssets;
use crate::project::Book;
use crate::stager::AssetStager;

static STAGER: AssetStager = AssetStager::new();

/// `website` hook: stage the configured scripts once per process and describe them.
///
/// Older hosts call this hook several times per build; every call after the first
/// returns a fresh copy of the cached descriptor.
pub fn website<B: Book + ?Sized>(book: &B) -> Result<WebsiteAssets> {
    STAGER.stage(book).map(WebsiteAssets::from)
}
