//! Release decision engine
//!
//! For each configured artifact: read the working-tree manifest, fetch the
//! manifest snapshot at the base commit, classify the version transition,
//! and record the decision. Every anticipated failure along the way resolves
//! to an absent value consumed by the classification rule, so the loop has
//! no fatal path — one artifact's broken history never blocks another's
//! decision.

use crate::core::config::GateConfig;
use crate::core::vcs::{HistoryFetcher, NULL_SHA, content_at_base};
use crate::manifest;
use crate::release::version::{Transition, Version};
use serde::Serialize;
use std::path::Path;

/// Per-artifact outcome of a detection run
#[derive(Debug, Clone, Serialize)]
pub struct ReleaseRecord {
  /// Stable release identifier from gate.toml
  pub name: String,

  /// Version at the base commit, if the manifest existed and parsed
  pub previous: Option<Version>,

  /// Version in the working tree, if the manifest exists and parses
  pub current: Option<Version>,

  pub transition: Transition,

  /// True iff the transition is a first release or a bump
  pub release_needed: bool,
}

impl ReleaseRecord {
  /// The version this run resolved, when one exists
  pub fn resolved_version(&self) -> Option<&Version> {
    self.current.as_ref()
  }
}

/// Aggregate report for one detection run
#[derive(Debug, Clone, Serialize)]
pub struct DetectReport {
  pub base: String,
  pub records: Vec<ReleaseRecord>,
}

impl DetectReport {
  /// Records whose current version resolved (the ones that emit output keys)
  pub fn resolved(&self) -> impl Iterator<Item = &ReleaseRecord> {
    self.records.iter().filter(|r| r.current.is_some())
  }
}

/// Resolve the base commit to compare against
///
/// An explicitly supplied reference wins; otherwise the parent of HEAD;
/// otherwise the null sentinel (first commit, shallow history, no repo).
pub fn resolve_base(explicit: Option<String>, fetcher: &dyn HistoryFetcher) -> String {
  explicit
    .filter(|sha| !sha.is_empty())
    .or_else(|| fetcher.parent_of_head())
    .unwrap_or_else(|| NULL_SHA.to_string())
}

/// Run the detection loop over all configured artifacts
///
/// Artifacts are processed sequentially in configured order. The report is
/// a pure function of the repository state: re-running with identical
/// inputs yields identical records.
pub fn detect(root: &Path, config: &GateConfig, fetcher: &dyn HistoryFetcher, base: &str) -> DetectReport {
  let mut records = Vec::with_capacity(config.artifacts.len());

  for artifact in &config.artifacts {
    let current = manifest::version_from_path(&root.join(&artifact.manifest_path))
      .map(|v| Version::parse(&v));

    let previous = content_at_base(fetcher, base, &artifact.manifest_path)
      .and_then(|content| manifest::version_from_str(&content))
      .map(|v| Version::parse(&v));

    let transition = Transition::classify(previous.as_ref(), current.as_ref());

    records.push(ReleaseRecord {
      name: artifact.name.clone(),
      previous,
      current,
      release_needed: transition.needs_release(),
      transition,
    });
  }

  DetectReport {
    base: base.to_string(),
    records,
  }
}
