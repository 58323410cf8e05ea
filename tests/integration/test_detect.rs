//! End-to-end tests for `release-gate detect`

use crate::helpers::{TestWorkspace, run_release_gate, run_release_gate_ok};
use anyhow::Result;

const NULL_SHA: &str = "0000000000000000000000000000000000000000";

#[test]
fn test_version_bump_gates_release() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_config(&[("server", "crates/server/Cargo.toml")])?;
  ws.write_manifest("crates/server/Cargo.toml", "server", "1.1.9")?;
  ws.commit("Add server at 1.1.9")?;

  ws.write_manifest("crates/server/Cargo.toml", "server", "1.2.0")?;
  ws.commit("Bump server to 1.2.0")?;

  let out_file = ws.path.join("gate-output.txt");
  let output = run_release_gate_ok(
    &ws.path,
    &["detect", "--output", out_file.to_str().unwrap()],
    &[],
  )?;

  let stdout = String::from_utf8_lossy(&output.stdout);
  assert!(stdout.contains("server: 1.1.9 -> 1.2.0"), "stdout: {}", stdout);
  assert!(stdout.contains("version bumped"), "stdout: {}", stdout);

  let written = std::fs::read_to_string(&out_file)?;
  assert!(written.contains("server_release_needed=true"));
  assert!(written.contains("server_version=1.2.0"));
  Ok(())
}

#[test]
fn test_first_release_when_manifest_new() -> Result<()> {
  let ws = TestWorkspace::new()?;

  // Base commit predates the client manifest entirely
  ws.write_config(&[("client", "crates/client/Cargo.toml")])?;
  ws.commit("Add configuration")?;
  ws.write_manifest("crates/client/Cargo.toml", "client", "2.0.0")?;
  ws.commit("Add client at 2.0.0")?;

  let out_file = ws.path.join("gate-output.txt");
  let output = run_release_gate_ok(
    &ws.path,
    &["detect", "--output", out_file.to_str().unwrap()],
    &[],
  )?;

  let stdout = String::from_utf8_lossy(&output.stdout);
  assert!(stdout.contains("client: none -> 2.0.0"), "stdout: {}", stdout);
  assert!(stdout.contains("first release"), "stdout: {}", stdout);

  let written = std::fs::read_to_string(&out_file)?;
  assert!(written.contains("client_release_needed=true"));
  assert!(written.contains("client_version=2.0.0"));
  Ok(())
}

#[test]
fn test_unchanged_version_emits_false_with_version() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_config(&[("server", "crates/server/Cargo.toml")])?;
  ws.write_manifest("crates/server/Cargo.toml", "server", "1.0.0")?;
  ws.commit("Add server at 1.0.0")?;

  // Unrelated change so HEAD^ exists but the version is untouched
  std::fs::write(ws.path.join("README.md"), "# readme\n")?;
  ws.commit("Add readme")?;

  let out_file = ws.path.join("gate-output.txt");
  let output = run_release_gate_ok(
    &ws.path,
    &["detect", "--output", out_file.to_str().unwrap()],
    &[],
  )?;

  let stdout = String::from_utf8_lossy(&output.stdout);
  assert!(stdout.contains("server: 1.0.0 -> 1.0.0"), "stdout: {}", stdout);
  assert!(stdout.contains("Release needed for server: false"), "stdout: {}", stdout);

  let written = std::fs::read_to_string(&out_file)?;
  assert!(written.contains("server_release_needed=false"));
  assert!(written.contains("server_version=1.0.0"));
  Ok(())
}

#[test]
fn test_missing_manifest_skips_keys_but_not_run() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_config(&[
    ("ghost", "crates/ghost/Cargo.toml"),
    ("server", "crates/server/Cargo.toml"),
  ])?;
  ws.write_manifest("crates/server/Cargo.toml", "server", "1.2.0")?;
  ws.commit("Add server")?;

  let out_file = ws.path.join("gate-output.txt");
  let output = run_release_gate_ok(
    &ws.path,
    &["detect", "--output", out_file.to_str().unwrap()],
    &[],
  )?;

  let stdout = String::from_utf8_lossy(&output.stdout);
  assert!(stdout.contains("Could not determine version for ghost"), "stdout: {}", stdout);

  let written = std::fs::read_to_string(&out_file)?;
  assert!(!written.contains("ghost_release_needed"));
  assert!(!written.contains("ghost_version"));
  // The broken artifact does not block the healthy one
  assert!(written.contains("server_release_needed=true"));
  Ok(())
}

#[test]
fn test_malformed_versions_fall_back_to_string_comparison() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_config(&[("server", "crates/server/Cargo.toml")])?;
  ws.write_manifest("crates/server/Cargo.toml", "server", "abc")?;
  ws.commit("Add server with opaque version")?;

  // Same opaque string: no release
  ws.write_manifest("crates/server/Cargo.toml", "server", "abc")?;
  std::fs::write(ws.path.join("README.md"), "# readme\n")?;
  ws.commit("Unrelated change")?;

  let out_file = ws.path.join("equal.txt");
  run_release_gate_ok(&ws.path, &["detect", "--output", out_file.to_str().unwrap()], &[])?;
  let written = std::fs::read_to_string(&out_file)?;
  assert!(written.contains("server_release_needed=false"));

  // Different opaque string: any difference counts as a bump
  ws.write_manifest("crates/server/Cargo.toml", "server", "xyz")?;
  ws.commit("Change opaque version")?;

  let out_file = ws.path.join("unequal.txt");
  run_release_gate_ok(&ws.path, &["detect", "--output", out_file.to_str().unwrap()], &[])?;
  let written = std::fs::read_to_string(&out_file)?;
  assert!(written.contains("server_release_needed=true"));
  assert!(written.contains("server_version=xyz"));
  Ok(())
}

#[test]
fn test_null_before_sha_means_first_release() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_config(&[("server", "crates/server/Cargo.toml")])?;
  ws.write_manifest("crates/server/Cargo.toml", "server", "1.1.9")?;
  ws.commit("Add server at 1.1.9")?;
  ws.write_manifest("crates/server/Cargo.toml", "server", "1.2.0")?;
  ws.commit("Bump server")?;

  // Null sentinel wins over the real parent commit
  let output = run_release_gate_ok(&ws.path, &["detect"], &[("BEFORE_SHA", NULL_SHA)])?;

  let stdout = String::from_utf8_lossy(&output.stdout);
  assert!(stdout.contains("server: none -> 1.2.0"), "stdout: {}", stdout);
  assert!(stdout.contains("first release"), "stdout: {}", stdout);
  Ok(())
}

#[test]
fn test_explicit_before_flag_wins() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_config(&[("server", "crates/server/Cargo.toml")])?;
  ws.write_manifest("crates/server/Cargo.toml", "server", "1.0.0")?;
  ws.commit("Add server at 1.0.0")?;
  let base = ws.rev_parse("HEAD")?;

  ws.write_manifest("crates/server/Cargo.toml", "server", "1.1.0")?;
  ws.commit("Bump to 1.1.0")?;
  ws.write_manifest("crates/server/Cargo.toml", "server", "1.2.0")?;
  ws.commit("Bump to 1.2.0")?;

  let output = run_release_gate_ok(&ws.path, &["detect", "--before", &base], &[])?;

  let stdout = String::from_utf8_lossy(&output.stdout);
  assert!(stdout.contains("server: 1.0.0 -> 1.2.0"), "stdout: {}", stdout);
  Ok(())
}

#[test]
fn test_github_output_env_is_honored() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_config(&[("server", "crates/server/Cargo.toml")])?;
  ws.write_manifest("crates/server/Cargo.toml", "server", "1.0.0")?;
  ws.commit("Add server")?;

  let out_file = ws.path.join("env-output.txt");
  // Pre-existing content must survive the append
  std::fs::write(&out_file, "earlier_step=done\n")?;

  run_release_gate_ok(
    &ws.path,
    &["detect"],
    &[("GITHUB_OUTPUT", out_file.to_str().unwrap())],
  )?;

  let written = std::fs::read_to_string(&out_file)?;
  assert!(written.starts_with("earlier_step=done\n"));
  assert!(written.contains("server_release_needed=true"));
  Ok(())
}

#[test]
fn test_json_output() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_config(&[("server", "crates/server/Cargo.toml")])?;
  ws.write_manifest("crates/server/Cargo.toml", "server", "1.2.0")?;
  ws.commit("Add server")?;

  let output = run_release_gate_ok(&ws.path, &["detect", "--json"], &[])?;

  let stdout = String::from_utf8_lossy(&output.stdout);
  let report: serde_json::Value = serde_json::from_str(&stdout)?;

  let record = &report["records"][0];
  assert_eq!(record["name"], "server");
  assert_eq!(record["release_needed"], true);
  assert_eq!(record["current"], "1.2.0");
  assert_eq!(record["transition"], "first_release");
  Ok(())
}

#[test]
fn test_missing_config_is_fatal() -> Result<()> {
  let ws = TestWorkspace::new()?;

  let output = run_release_gate(&ws.path, &["detect"], &[])?;

  assert_eq!(output.status.code(), Some(1));
  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(stderr.contains("No release-gate configuration found"), "stderr: {}", stderr);
  Ok(())
}

#[test]
fn test_no_release_needed_exits_zero() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_config(&[("server", "crates/server/Cargo.toml")])?;
  ws.write_manifest("crates/server/Cargo.toml", "server", "1.0.0")?;
  ws.commit("Add server")?;
  std::fs::write(ws.path.join("README.md"), "# readme\n")?;
  ws.commit("Add readme")?;

  // Absence of a release is a normal, successful outcome
  let output = run_release_gate_ok(&ws.path, &["detect"], &[])?;
  let stdout = String::from_utf8_lossy(&output.stdout);
  assert!(stdout.contains("Release needed for server: false"), "stdout: {}", stdout);
  Ok(())
}
