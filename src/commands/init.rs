//! Init command: scaffold a gate.toml

use crate::core::config::GateConfig;
use crate::core::error::{GateError, GateResult};
use std::env;

/// Run the init command
pub fn run_init(force: bool) -> GateResult<()> {
  let root = env::current_dir()?;

  if let Some(existing) = GateConfig::find(&root) {
    if !force {
      return Err(GateError::with_help(
        format!("Configuration already exists: {}", existing.display()),
        "Pass --force to overwrite it.",
      ));
    }
  }

  let path = root.join("gate.toml");
  std::fs::write(&path, GateConfig::scaffold())?;

  println!("📦 Wrote {}", path.display());
  println!();
  println!("Next steps:");
  println!("  1. Edit the [[artifacts]] entries to match your crates");
  println!("  2. Run `release-gate detect` to see the current decisions");

  Ok(())
}
