//! CLI commands for release-gate
//!
//! - **detect**: Decide, per configured artifact, whether a release is needed
//! - **init**: Write a gate.toml scaffold

pub mod detect;
pub mod init;

pub use detect::run_detect;
pub use init::run_init;
