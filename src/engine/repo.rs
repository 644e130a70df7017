//! Repo-backed resolution engine
//!
//! Implements the engine seam over local metadata: JSON package indexes,
//! YAML comps groups and YAML module streams. Every operation stages work
//! into the pending transaction; executing it is not this engine's job.

use indicatif::{ProgressBar, ProgressStyle};

use crate::config::Config;
use crate::engine::comps::{Comps, GroupPackageType};
use crate::engine::modules::ModuleIndex;
use crate::engine::rpmfile;
use crate::engine::sack::Sack;
use crate::engine::transaction::{StagedInstall, Transaction};
use crate::engine::{Engine, EngineError, FileOutcome};
use crate::error::{Result, RpkgError};
use crate::nevra::NevraForm;
use crate::output;

/// Resolution engine over locally available metadata.
pub struct RepoEngine {
    sack: Sack,
    comps: Comps,
    modules: ModuleIndex,
    transaction: Transaction,
    security_only: bool,
}

impl RepoEngine {
    /// Open the engine from the configured metadata locations.
    pub fn open(config: &Config) -> Result<Self> {
        if !config.repodir.is_dir() {
            return Err(RpkgError::RepodirMissing {
                path: config.repodir.display().to_string(),
            });
        }
        let sack = Sack::load(&config.repodir)?;
        let comps = Comps::load(&config.groups_file)?;
        let modules = ModuleIndex::load(&config.modules_file)?;
        Ok(Self {
            sack,
            comps,
            modules,
            transaction: Transaction::default(),
            security_only: config.security_only,
        })
    }

    /// The pending transaction accumulated so far.
    pub fn transaction(&self) -> &Transaction {
        &self.transaction
    }
}

impl Engine for RepoEngine {
    fn apply_security_filter(&mut self) {
        if self.security_only {
            self.sack.apply_security_filter();
        }
    }

    fn resolve_modules(
        &mut self,
        grp_specs: &[String],
        assume_yes: bool,
    ) -> Result<Vec<String>, EngineError> {
        let mut skipped = Vec::new();
        for spec in grp_specs {
            let Some(module) = self.modules.find(spec) else {
                skipped.push(spec.clone());
                continue;
            };
            if !module.default && !assume_yes {
                output::warning(format!(
                    "Stream '{}' of module '{}' is not the default and was not confirmed.",
                    module.stream, module.name
                ));
                skipped.push(spec.clone());
                continue;
            }
            let name = module.name.clone();
            let stream = module.stream.clone();
            let member_names = module.packages.clone();
            let mut packages = Vec::new();
            for pkg_name in &member_names {
                match self.sack.best_candidate(pkg_name, &[NevraForm::Name]) {
                    Some(pkg) => packages.push(pkg.nevra()),
                    // Listed but not indexed; the executor resolves it by name.
                    None => packages.push(pkg_name.clone()),
                }
            }
            self.transaction.stage(StagedInstall::Module {
                name,
                stream,
                packages,
            });
        }
        Ok(skipped)
    }

    fn install_files(&mut self, paths: &[String], _strict: bool) -> Vec<FileOutcome> {
        let progress = intake_progress(paths.len() as u64);
        let mut outcomes = Vec::new();
        for path in paths {
            progress.set_message(path.clone());
            match rpmfile::resolve(path) {
                Some(local) => {
                    let nevra = local.nevra.to_string();
                    self.transaction.stage(StagedInstall::LocalPackage {
                        nevra: nevra.clone(),
                        path: local.path,
                        checksum: local.checksum,
                    });
                    outcomes.push(FileOutcome::Staged { nevra });
                }
                None => outcomes.push(FileOutcome::Unmatched {
                    target: path.clone(),
                }),
            }
            progress.inc(1);
        }
        progress.finish_and_clear();
        outcomes
    }

    fn install_groups(
        &mut self,
        grp_specs: &[String],
        types: &[GroupPackageType],
        strict: bool,
    ) -> Result<(), EngineError> {
        for spec in grp_specs {
            let Some(group) = self.comps.find(spec) else {
                return Err(EngineError::Group {
                    message: format!("No group '{}' available.", spec),
                });
            };
            let id = group.id.clone();
            let member_names: Vec<String> = group
                .packages_of_types(types)
                .iter()
                .map(|name| (*name).to_string())
                .collect();
            let mut packages = Vec::new();
            for name in &member_names {
                match self.sack.best_candidate(name, &[NevraForm::Name]) {
                    Some(pkg) => packages.push(pkg.nevra()),
                    None if strict => {
                        return Err(EngineError::Group {
                            message: format!(
                                "No package '{}' from group '{}' available.",
                                name, spec
                            ),
                        });
                    }
                    None => {
                        output::warning(format!(
                            "Package '{}' from group '{}' is not available.",
                            name, spec
                        ));
                    }
                }
            }
            self.transaction.stage(StagedInstall::Group { id, packages });
        }
        Ok(())
    }

    fn install_package(
        &mut self,
        spec: &str,
        _strict: bool,
        forms: &[NevraForm],
    ) -> Result<(), EngineError> {
        let nevra = match self.sack.best_candidate(spec, forms) {
            Some(pkg) => pkg.nevra(),
            None => {
                return Err(EngineError::NoMatch {
                    spec: spec.to_string(),
                });
            }
        };
        self.transaction.stage(StagedInstall::Package { nevra });
        Ok(())
    }

    fn suggest_case_insensitive(&self, spec: &str) -> Option<String> {
        self.sack.icase_hint(spec)
    }
}

fn intake_progress(total: u64) -> ProgressBar {
    let progress = ProgressBar::new(total);
    if let Ok(style) = ProgressStyle::default_bar().template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
    {
        progress.set_style(style.progress_chars("#>-"));
    }
    progress
}
