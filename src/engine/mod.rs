//! Resolution engine seam
//!
//! The dispatcher talks to the package resolution and transaction machinery
//! through the [`Engine`] trait. The repo-backed implementation in this
//! module works over local metadata; dependency solving and transaction
//! execution stay on the other side of the seam.

pub mod comps;
pub mod modules;
pub mod repo;
pub mod rpmfile;
pub mod sack;
pub mod transaction;

pub use comps::{Comps, Group, GroupPackageType};
pub use modules::ModuleIndex;
pub use repo::RepoEngine;
pub use sack::{Package, Sack};
pub use transaction::{StagedInstall, Transaction};

use miette::Diagnostic;
use thiserror::Error;

use crate::nevra::NevraForm;

/// Errors surfaced by engine operations.
#[derive(Error, Diagnostic, Debug)]
pub enum EngineError {
    /// A package spec matched nothing. Recoverable, collected by the caller.
    #[error("No match for argument: {spec}")]
    #[diagnostic(code(rpkg::engine::no_match))]
    NoMatch { spec: String },

    /// A group could not be satisfied.
    #[error("{message}")]
    #[diagnostic(code(rpkg::engine::group))]
    Group { message: String },

    /// Broken or unreadable metadata. Always fatal.
    #[error("Failed to read metadata: {path}: {reason}")]
    #[diagnostic(code(rpkg::engine::metadata))]
    Metadata { path: String, reason: String },
}

/// Outcome of one local rpm intake target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// The target resolved and was staged.
    Staged { nevra: String },
    /// The target did not resolve into an installable package.
    Unmatched { target: String },
}

/// Operations the dispatcher needs from the resolution engine.
pub trait Engine {
    /// Pre-filter the package index. Idempotent, invoked once per dispatch.
    fn apply_security_filter(&mut self);

    /// Best-effort module resolution. Returns the specs that were not
    /// satisfiable as modules and fall through to classic group install.
    fn resolve_modules(
        &mut self,
        grp_specs: &[String],
        assume_yes: bool,
    ) -> Result<Vec<String>, EngineError>;

    /// Stage local rpm files. One outcome per path, in order, consumed once.
    fn install_files(&mut self, paths: &[String], strict: bool) -> Vec<FileOutcome>;

    /// Stage comps groups, pulling in the member lists of the given types.
    fn install_groups(
        &mut self,
        grp_specs: &[String],
        types: &[GroupPackageType],
        strict: bool,
    ) -> Result<(), EngineError>;

    /// Stage the best candidate for one package spec.
    fn install_package(
        &mut self,
        spec: &str,
        strict: bool,
        forms: &[NevraForm],
    ) -> Result<(), EngineError>;

    /// Case-insensitive spelling hint for an unmatched spec. Never fails.
    fn suggest_case_insensitive(&self, spec: &str) -> Option<String>;
}
