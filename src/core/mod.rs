//! Core building blocks for release-gate
//!
//! - **config**: Gate configuration (gate.toml) parsing and validation
//! - **error**: Error types with contextual help messages and exit codes
//! - **vcs**: Git history access abstraction (HistoryFetcher / SystemGit)

pub mod config;
pub mod error;
pub mod vcs;
