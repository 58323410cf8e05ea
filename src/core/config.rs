//! Configuration for release-gate
//!
//! The artifact table is static: it is loaded once at startup and never
//! mutated. Searched in order: gate.toml, .gate.toml.

use crate::core::error::{ConfigError, GateError, GateResult, ResultExt};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_CANDIDATES: &[&str] = &["gate.toml", ".gate.toml"];

/// Configuration for release-gate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateConfig {
  #[serde(default)]
  pub artifacts: Vec<ArtifactConfig>,
}

/// One independently released artifact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactConfig {
  /// Stable release identifier (used as the output key prefix)
  pub name: String,

  /// Manifest location, relative to the repository root
  #[serde(rename = "manifest")]
  pub manifest_path: PathBuf,
}

impl GateConfig {
  /// Load configuration from the repository root
  pub fn load(root: &Path) -> GateResult<Self> {
    let Some(path) = Self::find(root) else {
      return Err(GateError::Config(ConfigError::NotFound {
        root: root.to_path_buf(),
      }));
    };

    let content =
      fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))?;
    let config: GateConfig = toml_edit::de::from_str(&content)
      .with_context(|| format!("Failed to parse {}", path.display()))?;

    config.validate()?;
    Ok(config)
  }

  /// Locate the config file under `root`, if any
  pub fn find(root: &Path) -> Option<PathBuf> {
    CONFIG_CANDIDATES.iter().map(|name| root.join(name)).find(|p| p.is_file())
  }

  /// Validate the artifact table
  ///
  /// Misconfiguration is the one fatal category: an empty table, duplicate
  /// release names, or a manifest path pointing outside the repository all
  /// abort the run before any decision is made.
  pub fn validate(&self) -> GateResult<()> {
    if self.artifacts.is_empty() {
      return Err(GateError::Config(ConfigError::NoArtifacts));
    }

    let mut seen = std::collections::HashSet::new();
    for artifact in &self.artifacts {
      if !seen.insert(artifact.name.as_str()) {
        return Err(GateError::Config(ConfigError::DuplicateName {
          name: artifact.name.clone(),
        }));
      }

      let path = &artifact.manifest_path;
      let escapes = path.is_absolute()
        || path.components().any(|c| matches!(c, std::path::Component::ParentDir));
      if escapes {
        return Err(GateError::Config(ConfigError::InvalidManifestPath {
          name: artifact.name.clone(),
          path: path.clone(),
        }));
      }
    }

    Ok(())
  }

  /// Template written by `release-gate init`
  pub fn scaffold() -> &'static str {
    r#"# release-gate configuration
#
# Each [[artifacts]] entry is one independently released unit. `name` is the
# stable release identifier used as the output key prefix; `manifest` points
# at the Cargo.toml that declares its version, relative to the repo root.

[[artifacts]]
name = "server"
manifest = "crates/server/Cargo.toml"

[[artifacts]]
name = "client"
manifest = "crates/client/Cargo.toml"
"#
  }
}
