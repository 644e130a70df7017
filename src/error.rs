//! Error types and handling for rpkg
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

use crate::engine::EngineError;

/// Main error type for rpkg operations
#[derive(Error, Diagnostic, Debug)]
pub enum RpkgError {
    // Dispatch errors
    #[error("Nothing to do.")]
    #[diagnostic(
        code(rpkg::dispatch::nothing_to_do),
        help("File paths, @groups and form-qualified specs cannot be mixed this way")
    )]
    NothingToDo,

    #[error("Unable to find a match: {}", list_targets(.pkg_specs, .filenames))]
    #[diagnostic(
        code(rpkg::dispatch::unmatched_targets),
        help("Check the spelling of the listed specs, or rerun without strict mode")
    )]
    UnmatchedTargets {
        pkg_specs: Vec<String>,
        filenames: Vec<String>,
    },

    #[error("{message}")]
    #[diagnostic(code(rpkg::dispatch::group_resolution))]
    GroupResolution { message: String },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Engine(#[from] EngineError),

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(rpkg::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(rpkg::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(code(rpkg::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Repository index directory not found: {path}")]
    #[diagnostic(
        code(rpkg::config::repodir_missing),
        help("Point `repodir` in rpkg.yaml at a directory holding *.json package indexes")
    )]
    RepodirMissing { path: String },

    // Hand-off errors
    #[error("Failed to write transaction file: {path}")]
    #[diagnostic(code(rpkg::transaction::write_failed))]
    TransactionWriteFailed { path: String, reason: String },

    #[error("Operation aborted.")]
    #[diagnostic(code(rpkg::transaction::aborted))]
    Aborted,

    #[error("IO error: {message}")]
    #[diagnostic(code(rpkg::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for RpkgError {
    fn from(err: std::io::Error) -> Self {
        RpkgError::IoError {
            message: err.to_string(),
        }
    }
}

fn list_targets(pkg_specs: &[String], filenames: &[String]) -> String {
    pkg_specs
        .iter()
        .chain(filenames.iter())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Result type alias using miette for error handling
pub type Result<T, E = RpkgError> = miette::Result<T, E>;
