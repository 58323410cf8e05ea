//! Version ordering and transition classification
//!
//! Versions are compared on their numeric dot-separated components only:
//! `"1.2.0"` becomes `[1, 2, 0]`, `"1.2.0-beta"` becomes `[1, 2, 0]` (the
//! pre-release tag is dropped, not rejected). Component vectors compare
//! lexicographically, and a strict prefix compares smaller, so `"1.2"` is
//! less than `"1.2.0"` rather than equal to it.
//!
//! When *neither* side yields a numeric component, ordering degrades to
//! string inequality: any difference counts as a bump. That is a deliberate
//! policy, not a parse error — it keeps completely non-numeric schemes
//! release-eligible instead of silently freezing them.

use serde::{Serialize, Serializer};
use std::fmt;

/// A declared version: the raw manifest string plus its numeric components
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
  raw: String,
  components: Vec<u64>,
}

impl Version {
  /// Parse a version string, dropping non-numeric components
  ///
  /// Never fails: an entirely non-numeric string parses to zero components
  /// and participates in the string-inequality fallback.
  pub fn parse(raw: &str) -> Self {
    let components = raw
      .split('.')
      .filter(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()))
      .filter_map(|part| part.parse().ok())
      .collect();

    Self {
      raw: raw.to_string(),
      components,
    }
  }

  /// The version string as declared in the manifest
  pub fn as_str(&self) -> &str {
    &self.raw
  }
}

impl fmt::Display for Version {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.raw)
  }
}

impl Serialize for Version {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&self.raw)
  }
}

/// How an artifact's version changed between the base commit and now
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Transition {
  /// No previous version, current present
  FirstRelease,
  /// Both present, current strictly greater
  Bump,
  /// Both present, current less than or equal to previous
  NoChange,
  /// Current version could not be determined
  Indeterminate,
}

impl Transition {
  /// Classify the transition between two optional versions
  pub fn classify(previous: Option<&Version>, current: Option<&Version>) -> Self {
    match (previous, current) {
      (_, None) => Transition::Indeterminate,
      (None, Some(_)) => Transition::FirstRelease,
      (Some(prev), Some(curr)) => compare(prev, curr),
    }
  }

  /// True for the transitions that gate a release
  pub fn needs_release(self) -> bool {
    matches!(self, Transition::FirstRelease | Transition::Bump)
  }
}

/// Order two present versions
///
/// `Vec<u64>` ordering is exactly the rule we want: position-by-position,
/// with a strict prefix comparing smaller than the longer sequence.
fn compare(previous: &Version, current: &Version) -> Transition {
  if previous.components.is_empty() && current.components.is_empty() {
    // String-inequality fallback for fully non-numeric schemes
    return if current.raw != previous.raw {
      Transition::Bump
    } else {
      Transition::NoChange
    };
  }

  if current.components > previous.components {
    Transition::Bump
  } else {
    Transition::NoChange
  }
}
