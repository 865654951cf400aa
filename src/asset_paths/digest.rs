use std::path::Path;

use xxhash_rust::xxh3::xxh3_128;

/// Hex digest of a path string, used to keep same-named scripts apart.
///
/// The digest covers the UTF-8 rendering of the path, not the file contents, and is always
/// 32 lowercase hexadecimal characters.
pub fn path_digest(path: &Path) -> String {
    let rendered = path.to_string_lossy();
    format!("{:032x}", xxh3_128(rendered.as_bytes()))
}
