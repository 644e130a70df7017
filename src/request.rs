//! Install request model
//!
//! The CLI layer classifies raw positional tokens into package specs, group
//! specs and local rpm file paths. The resulting request is immutable and
//! consumed by exactly one dispatch.

use crate::engine::GroupPackageType;
use crate::nevra::NevraForm;

/// Which alias of the install command was invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Install,
    LocalInstall,
    InstallName,
    InstallNameArch,
    InstallNevra,
}

impl CommandKind {
    /// NEVRA forms implied by the alias. Empty means auto-detect.
    pub fn nevra_forms(self) -> Vec<NevraForm> {
        match self {
            CommandKind::InstallName => vec![NevraForm::Name],
            CommandKind::InstallNameArch => vec![NevraForm::NameArch],
            CommandKind::InstallNevra => vec![NevraForm::Nevra],
            CommandKind::Install | CommandKind::LocalInstall => Vec::new(),
        }
    }

    /// Whether this is the local-file-install alias.
    pub fn is_local(self) -> bool {
        matches!(self, CommandKind::LocalInstall)
    }
}

/// Request policy threaded explicitly through every dispatch phase.
#[derive(Debug, Clone)]
pub struct Policy {
    /// Abort the whole operation when any target stays unresolved.
    pub strict: bool,
    /// Skip interactive confirmation; also auto-confirms module enablement.
    pub assume_yes: bool,
    /// Which comps package lists a group install pulls in.
    pub group_package_types: Vec<GroupPackageType>,
}

/// A classified installation request. Built once, dispatched once.
#[derive(Debug, Clone)]
pub struct InstallRequest {
    pub command: CommandKind,
    pub pkg_specs: Vec<String>,
    pub grp_specs: Vec<String>,
    pub filenames: Vec<String>,
    pub policy: Policy,
}

impl InstallRequest {
    /// Build a request from raw positional tokens.
    ///
    /// Tokens ending in `.rpm` are file paths, tokens starting with `@` are
    /// group specs (prefix stripped), everything else is a package spec.
    pub fn from_tokens(command: CommandKind, tokens: &[String], policy: Policy) -> Self {
        let mut pkg_specs = Vec::new();
        let mut grp_specs = Vec::new();
        let mut filenames = Vec::new();
        for token in tokens {
            if token.ends_with(".rpm") {
                filenames.push(token.clone());
            } else if let Some(group) = token.strip_prefix('@') {
                grp_specs.push(group.to_string());
            } else {
                pkg_specs.push(token.clone());
            }
        }
        Self {
            command,
            pkg_specs,
            grp_specs,
            filenames,
            policy,
        }
    }

    /// NEVRA forms implied by the invoked alias.
    pub fn nevra_forms(&self) -> Vec<NevraForm> {
        self.command.nevra_forms()
    }
}
