//! Manifest version extraction
//!
//! Pulls `package.version` out of a Cargo.toml, from the working tree or
//! from a historical snapshot. Absence is the normal answer for an artifact
//! that has never been released or whose manifest is malformed, so nothing
//! here returns an error: file-not-found, a parse failure, and a missing
//! field all resolve to `None`.

use std::path::Path;

/// Extract the declared version from a manifest on disk
pub fn version_from_path(path: &Path) -> Option<String> {
  let content = std::fs::read_to_string(path).ok()?;
  version_from_str(&content)
}

/// Extract the declared version from manifest text
pub fn version_from_str(content: &str) -> Option<String> {
  let doc: toml_edit::DocumentMut = content.parse().ok()?;

  doc
    .get("package")?
    .as_table_like()?
    .get("version")?
    .as_str()
    .map(|v| v.to_string())
}
