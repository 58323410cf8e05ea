//! System git backend - zero dependencies
//!
//! Shells out to git plumbing with a sanitized subprocess environment.
//! Every query is best-effort: a failed subprocess, a bad reference, or a
//! path that never existed all come back as `None`. Stderr is captured and
//! discarded so a single artifact's failed lookup cannot pollute CI logs or
//! abort the run.

use super::HistoryFetcher;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Git backend using system git (zero crate dependencies)
pub struct SystemGit {
  /// Repository working directory
  repo_path: PathBuf,
}

impl SystemGit {
  /// Wrap a repository working directory
  ///
  /// No validation probe is issued here: if `path` turns out not to be a
  /// git repository (or git is not installed), every subsequent query
  /// simply yields `None`, which downstream treats as "no prior release".
  pub fn new(path: &Path) -> Self {
    Self {
      repo_path: path.to_path_buf(),
    }
  }

  /// Create a safe git command with isolated environment
  ///
  /// - Sets working directory to repo path
  /// - Clears environment variables
  /// - Whitelists only PATH and HOME
  /// - Adds safe configuration overrides
  fn git_cmd(&self) -> Command {
    let mut cmd = Command::new("git");

    cmd.arg("-C").arg(&self.repo_path);

    // Isolated environment (don't trust global config)
    cmd.env_clear();
    if let Ok(path) = std::env::var("PATH") {
      cmd.env("PATH", path);
    }
    if let Ok(home) = std::env::var("HOME") {
      cmd.env("HOME", home);
    }

    // Force safe behavior (override user config)
    cmd.arg("-c").arg("advice.detachedHead=false");
    cmd.arg("-c").arg("core.quotePath=false");

    cmd
  }
}

impl HistoryFetcher for SystemGit {
  fn file_at_commit(&self, commit: &str, path: &Path) -> Option<String> {
    let spec = format!("{}:{}", commit, path.display());

    let output = self.git_cmd().args(["show", &spec]).output().ok()?;

    if !output.status.success() {
      // Unknown commit or path absent at that commit
      return None;
    }

    String::from_utf8(output.stdout).ok()
  }

  fn parent_of_head(&self) -> Option<String> {
    let output = self.git_cmd().args(["rev-parse", "HEAD^"]).output().ok()?;

    if !output.status.success() {
      // First commit, shallow clone, or not a repository
      return None;
    }

    let sha = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if sha.is_empty() { None } else { Some(sha) }
  }
}
