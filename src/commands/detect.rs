//! Detect command implementation
//!
//! Wires the environment to the decision engine: resolves the base commit
//! (flag, then `BEFORE_SHA`, then derived), runs the detection loop, prints
//! the console report, and appends key=value results to the output file
//! (flag, then `GITHUB_OUTPUT`). With no output destination at all, results
//! go to console only — that is a normal run, not an error.

use crate::core::config::GateConfig;
use crate::core::error::GateResult;
use crate::core::vcs::SystemGit;
use crate::release::detect::{detect, resolve_base};
use crate::release::output::{append_outputs, print_report};
use std::env;
use std::path::PathBuf;

/// Run the detect command
pub fn run_detect(before: Option<String>, output: Option<PathBuf>, json: bool) -> GateResult<()> {
  let root = env::current_dir()?;
  let config = GateConfig::load(&root)?;

  let git = SystemGit::new(&root);

  let before = before.or_else(|| env::var("BEFORE_SHA").ok());
  let base = resolve_base(before, &git);

  let report = detect(&root, &config, &git, &base);

  if json {
    println!("{}", serde_json::to_string_pretty(&report)?);
  } else {
    print_report(&report);
  }

  let output = output.or_else(|| {
    env::var("GITHUB_OUTPUT")
      .ok()
      .filter(|path| !path.is_empty())
      .map(PathBuf::from)
  });
  if let Some(path) = output {
    append_outputs(&report, &path)?;
  }

  Ok(())
}
