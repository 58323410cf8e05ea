//! Error types for release-gate with contextual messages and exit codes
//!
//! Per-artifact failures (missing manifest, bad history lookup) never become
//! errors: they resolve to absent values inside the decision engine. The
//! types here cover the few conditions that are allowed to abort a run.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Exit codes for release-gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// User error (config, invalid args)
  User = 1,
  /// System error (I/O, unwritable output)
  System = 2,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for release-gate
#[derive(Debug)]
pub enum GateError {
  /// Configuration errors
  Config(ConfigError),

  /// I/O errors
  Io(io::Error),

  /// Generic error with message and optional context
  Message {
    message: String,
    context: Option<String>,
    help: Option<String>,
  },
}

impl GateError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    GateError::Message {
      message: msg.into(),
      context: None,
      help: None,
    }
  }

  /// Create an error with help text
  pub fn with_help(msg: impl Into<String>, help: impl Into<String>) -> Self {
    GateError::Message {
      message: msg.into(),
      context: None,
      help: Some(help.into()),
    }
  }

  /// Add context to an existing error
  pub fn context(self, ctx: impl Into<String>) -> Self {
    let ctx_str = ctx.into();
    match self {
      GateError::Message { message, context, help } => GateError::Message {
        message,
        context: Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str)),
        help,
      },
      _ => self,
    }
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      GateError::Config(_) => ExitCode::User,
      GateError::Io(_) => ExitCode::System,
      GateError::Message { .. } => ExitCode::User,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      GateError::Config(e) => e.help_message(),
      GateError::Message { help, .. } => help.clone(),
      _ => None,
    }
  }
}

impl fmt::Display for GateError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      GateError::Config(e) => write!(f, "{}", e),
      GateError::Io(e) => write!(f, "I/O error: {}", e),
      GateError::Message { message, context, .. } => {
        write!(f, "{}", message)?;
        if let Some(ctx) = context {
          write!(f, "\n{}", ctx)?;
        }
        Ok(())
      }
    }
  }
}

impl std::error::Error for GateError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      GateError::Io(e) => Some(e),
      _ => None,
    }
  }
}

impl From<io::Error> for GateError {
  fn from(err: io::Error) -> Self {
    GateError::Io(err)
  }
}

impl From<String> for GateError {
  fn from(msg: String) -> Self {
    GateError::message(msg)
  }
}

impl From<&str> for GateError {
  fn from(msg: &str) -> Self {
    GateError::message(msg)
  }
}

impl From<toml_edit::de::Error> for GateError {
  fn from(err: toml_edit::de::Error) -> Self {
    GateError::message(format!("TOML deserialization error: {}", err))
  }
}

impl From<serde_json::Error> for GateError {
  fn from(err: serde_json::Error) -> Self {
    GateError::message(format!("JSON error: {}", err))
  }
}

/// Configuration-related errors
#[derive(Debug)]
pub enum ConfigError {
  /// gate.toml not found
  NotFound { root: PathBuf },

  /// No artifacts configured
  NoArtifacts,

  /// Two artifacts share the same release name
  DuplicateName { name: String },

  /// Manifest path escapes the project layout
  InvalidManifestPath { name: String, path: PathBuf },
}

impl ConfigError {
  fn help_message(&self) -> Option<String> {
    match self {
      ConfigError::NotFound { .. } => Some("Run `release-gate init` to create a configuration file.".to_string()),
      ConfigError::NoArtifacts => Some(
        "Add at least one [[artifacts]] entry with `name` and `manifest` fields to gate.toml.".to_string(),
      ),
      ConfigError::InvalidManifestPath { .. } => {
        Some("Manifest paths must be relative to the repository root, e.g. `crates/server/Cargo.toml`.".to_string())
      }
      _ => None,
    }
  }
}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ConfigError::NotFound { root } => {
        write!(
          f,
          "No release-gate configuration found.\nExpected file: {}/gate.toml",
          root.display()
        )
      }
      ConfigError::NoArtifacts => {
        write!(f, "gate.toml defines no artifacts")
      }
      ConfigError::DuplicateName { name } => {
        write!(f, "Artifact name '{}' is configured more than once", name)
      }
      ConfigError::InvalidManifestPath { name, path } => {
        write!(f, "Artifact '{}' has an invalid manifest path: {}", name, path.display())
      }
    }
  }
}

/// Result type alias for release-gate
pub type GateResult<T> = Result<T, GateError>;

/// Helper trait to add context to Results
pub trait ResultExt<T> {
  /// Add context to an error result
  fn context(self, ctx: impl Into<String>) -> GateResult<T>;

  /// Add context using a closure (lazy evaluation)
  fn with_context<F>(self, f: F) -> GateResult<T>
  where
    F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
  E: Into<GateError>,
{
  fn context(self, ctx: impl Into<String>) -> GateResult<T> {
    self.map_err(|e| e.into().context(ctx))
  }

  fn with_context<F>(self, f: F) -> GateResult<T>
  where
    F: FnOnce() -> String,
  {
    self.map_err(|e| e.into().context(f()))
  }
}

/// Pretty-print an error to stderr with help text
pub fn print_error(error: &GateError) {
  eprintln!("\n❌ {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("💡 Help: {}\n", help);
  }
}
