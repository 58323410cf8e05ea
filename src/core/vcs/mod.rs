//! Version-control access behind a capability interface
//!
//! The decision engine only ever asks two questions of history: "what did
//! this file contain at that commit?" and "what is the parent of HEAD?".
//! Both are fallible lookups whose failures mean "no information", so the
//! trait answers with `Option` rather than `Result`. Production uses
//! [`SystemGit`]; tests substitute an in-memory adapter.

pub mod system_git;

pub use system_git::SystemGit;

use std::path::Path;

/// The "no prior commit" sentinel: forty zeros
///
/// CI pipelines pass this as the before-SHA for the first push to a branch.
pub const NULL_SHA: &str = "0000000000000000000000000000000000000000";

/// Read-only access to repository history
pub trait HistoryFetcher {
  /// Content of `path` as it existed at `commit`
  ///
  /// `None` covers every failure mode: unknown commit, path absent at that
  /// commit, or the VCS being unavailable entirely.
  fn file_at_commit(&self, commit: &str, path: &Path) -> Option<String>;

  /// SHA of the parent of the current HEAD, if resolvable
  fn parent_of_head(&self) -> Option<String>;
}

/// Fetch the manifest snapshot at the base commit
///
/// The null sentinel short-circuits before any lookup is issued, so a run
/// against "no prior commit" never touches the VCS.
pub fn content_at_base(fetcher: &dyn HistoryFetcher, base: &str, path: &Path) -> Option<String> {
  if base == NULL_SHA {
    return None;
  }
  fetcher.file_at_commit(base, path)
}
