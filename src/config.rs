//! Configuration file handling for rpkg
//!
//! `rpkg.yaml` carries the request policy defaults and tells the engine
//! where its metadata lives. Search order: explicit `--config` path, the
//! working directory, then the user configuration directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::engine::GroupPackageType;
use crate::error::{Result, RpkgError};

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = "rpkg.yaml";

/// Runtime configuration (rpkg.yaml)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Abort when any requested target cannot be resolved
    pub strict: bool,

    /// Skip interactive confirmation
    pub assume_yes: bool,

    /// Comps package lists pulled in by a group install
    pub group_package_types: Vec<GroupPackageType>,

    /// Restrict the package index to packages carrying security advisories
    pub security_only: bool,

    /// Directory holding `*.json` package indexes
    pub repodir: PathBuf,

    /// Comps group metadata file
    pub groups_file: PathBuf,

    /// Module stream metadata file
    pub modules_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strict: true,
            assume_yes: false,
            group_package_types: vec![GroupPackageType::Mandatory, GroupPackageType::Default],
            security_only: false,
            repodir: PathBuf::from("repo"),
            groups_file: PathBuf::from("groups.yaml"),
            modules_file: PathBuf::from("modules.yaml"),
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist. Otherwise the working directory wins
    /// over the user configuration directory, falling back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(RpkgError::ConfigNotFound {
                    path: path.display().to_string(),
                });
            }
            return Self::from_file(path);
        }

        let cwd_config = PathBuf::from(CONFIG_FILE_NAME);
        if cwd_config.exists() {
            return Self::from_file(&cwd_config);
        }

        if let Some(dir) = dirs::config_dir() {
            let user_config = dir.join("rpkg").join(CONFIG_FILE_NAME);
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        Ok(Self::default())
    }

    /// Parse one configuration file. Relative metadata paths are resolved
    /// against the file's directory.
    fn from_file(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path).map_err(|e| RpkgError::ConfigReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let mut config: Self =
            serde_yaml::from_str(&data).map_err(|e| RpkgError::ConfigParseFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        if let Some(base) = path.parent() {
            config.repodir = resolve_relative(base, &config.repodir);
            config.groups_file = resolve_relative(base, &config.groups_file);
            config.modules_file = resolve_relative(base, &config.modules_file);
        }
        Ok(config)
    }
}

fn resolve_relative(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
