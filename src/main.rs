mod commands;
mod core;
mod manifest;
mod release;

use clap::{Parser, Subcommand};
use crate::core::error::{GateError, print_error};
use std::path::PathBuf;

/// Release gate: decide which artifacts need a release
#[derive(Parser)]
#[command(name = "release-gate")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(styles = get_styles())]
struct Cli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Compare manifest versions against a base commit and emit decisions
  Detect {
    /// Base commit to compare against (default: $BEFORE_SHA, then HEAD^)
    #[arg(long)]
    before: Option<String>,
    /// Append key=value decisions to this file (default: $GITHUB_OUTPUT)
    #[arg(long)]
    output: Option<PathBuf>,
    /// Output decisions in JSON format (useful for CI/automation)
    #[arg(long)]
    json: bool,
  },

  /// Initialize release-gate configuration for a repository
  Init {
    /// Overwrite an existing gate.toml
    #[arg(short, long)]
    force: bool,
  },
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .invalid(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

fn main() {
  let cli = Cli::parse();

  let result = match cli.command {
    Commands::Detect { before, output, json } => commands::run_detect(before, output, json),
    Commands::Init { force } => commands::run_init(force),
  };

  if let Err(err) = result {
    handle_error(err);
  }
}

fn handle_error(err: GateError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code().as_i32());
}
