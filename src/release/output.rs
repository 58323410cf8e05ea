//! Result emission: console report and key=value output file
//!
//! The output file uses the append-mode key=value convention consumed by CI
//! pipelines (one `key=value` per line, no surrounding whitespace). Appends
//! never truncate earlier content from the same pipeline run, and a version
//! key is omitted entirely when no version resolved — never written with an
//! empty value.

use crate::core::error::{GateResult, ResultExt};
use crate::release::detect::{DetectReport, ReleaseRecord};
use crate::release::version::Transition;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Print per-artifact progress lines and the final flag summary
pub fn print_report(report: &DetectReport) {
  for record in &report.records {
    println!("{}: {} -> {}", record.name, render(&record.previous), render(&record.current));

    match record.transition {
      Transition::FirstRelease => {
        println!("  ✓ Release needed for {}: first release", record.name);
      }
      Transition::Bump => {
        println!("  ✓ Release needed for {}: version bumped", record.name);
      }
      Transition::NoChange => {}
      Transition::Indeterminate => {
        println!("  ✗ Could not determine version for {}", record.name);
      }
    }
  }

  println!();
  for record in &report.records {
    println!("Release needed for {}: {}", record.name, record.release_needed);
  }
}

fn render(version: &Option<crate::release::version::Version>) -> &str {
  version.as_ref().map(|v| v.as_str()).unwrap_or("none")
}

/// Append the resolved decisions to the output file
///
/// Only artifacts whose current version resolved contribute keys. An
/// unwritable destination is fatal: writing the decision is the entire
/// purpose of a run.
pub fn append_outputs(report: &DetectReport, path: &Path) -> GateResult<()> {
  let mut file = OpenOptions::new()
    .create(true)
    .append(true)
    .open(path)
    .with_context(|| format!("Failed to open output file {}", path.display()))?;

  for record in report.resolved() {
    write_record(&mut file, record)
      .with_context(|| format!("Failed to write output file {}", path.display()))?;
  }

  Ok(())
}

fn write_record(out: &mut impl Write, record: &ReleaseRecord) -> std::io::Result<()> {
  writeln!(out, "{}_release_needed={}", record.name, record.release_needed)?;
  if let Some(version) = record.resolved_version() {
    writeln!(out, "{}_version={}", record.name, version)?;
  }
  Ok(())
}
