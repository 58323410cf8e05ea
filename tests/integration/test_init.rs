//! Integration tests for `release-gate init`

use crate::helpers::{TestWorkspace, run_release_gate, run_release_gate_ok};
use anyhow::Result;

#[test]
fn test_init_writes_scaffold() -> Result<()> {
  let ws = TestWorkspace::new()?;

  run_release_gate_ok(&ws.path, &["init"], &[])?;

  let content = std::fs::read_to_string(ws.path.join("gate.toml"))?;
  assert!(content.contains("[[artifacts]]"));
  assert!(content.contains("manifest ="));
  Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
  let ws = TestWorkspace::new()?;
  std::fs::write(ws.path.join("gate.toml"), "# existing\n")?;

  let output = run_release_gate(&ws.path, &["init"], &[])?;

  assert_eq!(output.status.code(), Some(1));
  assert_eq!(std::fs::read_to_string(ws.path.join("gate.toml"))?, "# existing\n");
  Ok(())
}

#[test]
fn test_init_force_overwrites() -> Result<()> {
  let ws = TestWorkspace::new()?;
  std::fs::write(ws.path.join("gate.toml"), "# existing\n")?;

  run_release_gate_ok(&ws.path, &["init", "--force"], &[])?;

  let content = std::fs::read_to_string(ws.path.join("gate.toml"))?;
  assert!(content.contains("[[artifacts]]"));
  Ok(())
}
