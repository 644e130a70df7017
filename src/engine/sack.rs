//! In-memory package index
//!
//! Loads `*.json` indexes from the configured repo directory and answers
//! spec queries under the NEVRA forms. Name matching supports glob patterns.

use std::path::Path;

use serde::{Deserialize, Serialize};
use walkdir::WalkDir;
use wax::{CandidatePath, Glob, Pattern};

use crate::engine::EngineError;
use crate::nevra::{self, Nevra, NevraForm};

/// One available package as listed in a repo index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    pub name: String,
    #[serde(default)]
    pub epoch: u32,
    pub version: String,
    pub release: String,
    pub arch: String,
    /// Security advisories that ship this package, if any.
    #[serde(default)]
    pub advisories: Vec<String>,
    /// Repo-relative payload location.
    #[serde(default)]
    pub location: Option<String>,
}

impl Package {
    /// Full `name-[epoch:]version-release.arch` identity. Epoch 0 is omitted.
    pub fn nevra(&self) -> String {
        if self.epoch == 0 {
            format!(
                "{}-{}-{}.{}",
                self.name, self.version, self.release, self.arch
            )
        } else {
            format!(
                "{}-{}:{}-{}.{}",
                self.name, self.epoch, self.version, self.release, self.arch
            )
        }
    }

    fn evr(&self) -> (u32, &str, &str) {
        (self.epoch, self.version.as_str(), self.release.as_str())
    }
}

/// The loaded package index with an optional security pre-filter.
#[derive(Debug, Default)]
pub struct Sack {
    packages: Vec<Package>,
    security_filtered: bool,
}

impl Sack {
    /// Load every `*.json` index under `repodir`.
    pub fn load(repodir: &Path) -> Result<Self, EngineError> {
        let mut packages = Vec::new();
        for entry in WalkDir::new(repodir)
            .into_iter()
            .filter_map(std::result::Result::ok)
        {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let data = std::fs::read_to_string(path).map_err(|e| EngineError::Metadata {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
            let mut listed: Vec<Package> =
                serde_json::from_str(&data).map_err(|e| EngineError::Metadata {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                })?;
            packages.append(&mut listed);
        }
        Ok(Self {
            packages,
            security_filtered: false,
        })
    }

    #[cfg(test)]
    pub(crate) fn from_packages(packages: Vec<Package>) -> Self {
        Self {
            packages,
            security_filtered: false,
        }
    }

    /// Restrict visible packages to those carrying security advisories.
    /// Applying the filter twice is the same as applying it once.
    pub fn apply_security_filter(&mut self) {
        self.security_filtered = true;
    }

    fn visible(&self) -> impl Iterator<Item = &Package> {
        let filtered = self.security_filtered;
        self.packages
            .iter()
            .filter(move |p| !filtered || !p.advisories.is_empty())
    }

    /// All packages matching `spec` under the given forms.
    ///
    /// With no explicit form the most specific parse wins: full NEVRA, then
    /// `name.arch`, then plain name.
    pub fn query(&self, spec: &str, forms: &[NevraForm]) -> Vec<&Package> {
        if forms.is_empty() {
            for form in [NevraForm::Nevra, NevraForm::NameArch, NevraForm::Name] {
                let matches = self.query_form(spec, form);
                if !matches.is_empty() {
                    return matches;
                }
            }
            return Vec::new();
        }
        let mut out: Vec<&Package> = Vec::new();
        for &form in forms {
            for pkg in self.query_form(spec, form) {
                if !out.iter().any(|p| std::ptr::eq(*p, pkg)) {
                    out.push(pkg);
                }
            }
        }
        out
    }

    fn query_form(&self, spec: &str, form: NevraForm) -> Vec<&Package> {
        match form {
            NevraForm::Name => self
                .visible()
                .filter(|p| name_matches(&p.name, spec))
                .collect(),
            NevraForm::NameArch => match nevra::split_name_arch(spec) {
                Some((name, arch)) => self
                    .visible()
                    .filter(|p| p.arch == arch && name_matches(&p.name, name))
                    .collect(),
                None => Vec::new(),
            },
            NevraForm::Nevra => match Nevra::parse(spec) {
                Some(want) => self
                    .visible()
                    .filter(|p| {
                        p.arch == want.arch
                            && p.epoch == want.epoch
                            && p.version == want.version
                            && p.release == want.release
                            && name_matches(&p.name, &want.name)
                    })
                    .collect(),
                None => Vec::new(),
            },
        }
    }

    /// The best-versioned candidate for a spec, if anything matches.
    pub fn best_candidate(&self, spec: &str, forms: &[NevraForm]) -> Option<&Package> {
        self.query(spec, forms)
            .into_iter()
            .max_by(|a, b| nevra::compare_evr(a.evr(), b.evr()))
    }

    /// A differently-cased package name equal to `spec`, for diagnostics.
    pub fn icase_hint(&self, spec: &str) -> Option<String> {
        self.visible()
            .find(|p| p.name != spec && p.name.eq_ignore_ascii_case(spec))
            .map(|p| p.name.clone())
    }
}

/// Match a package name against a spec, treating the spec as a glob when it
/// contains wildcard characters.
fn name_matches(name: &str, spec: &str) -> bool {
    if spec.contains(['*', '?', '[']) {
        let candidate = CandidatePath::from(name);
        match Glob::new(spec) {
            Ok(glob) => glob.matched(&candidate).is_some(),
            Err(_) => name == spec,
        }
    } else {
        name == spec
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn package(name: &str, epoch: u32, version: &str, release: &str, arch: &str) -> Package {
        Package {
            name: name.to_string(),
            epoch,
            version: version.to_string(),
            release: release.to_string(),
            arch: arch.to_string(),
            advisories: Vec::new(),
            location: None,
        }
    }

    fn sample_sack() -> Sack {
        let mut secure = package("emacs", 0, "29.3", "2", "x86_64");
        secure.advisories = vec!["SA-2026-0101".to_string()];
        Sack::from_packages(vec![
            package("vim", 0, "9.1.0", "1.fc40", "x86_64"),
            package("vim", 0, "8.2.0", "3.fc40", "x86_64"),
            package("vim", 0, "9.1.0", "1.fc40", "aarch64"),
            package("bash", 0, "5.2.26", "1.fc40", "x86_64"),
            secure,
        ])
    }

    #[test]
    fn test_query_by_name() {
        let sack = sample_sack();
        assert_eq!(sack.query("vim", &[NevraForm::Name]).len(), 3);
        assert!(sack.query("nope", &[NevraForm::Name]).is_empty());
    }

    #[test]
    fn test_query_by_name_arch() {
        let sack = sample_sack();
        let matches = sack.query("vim.aarch64", &[NevraForm::NameArch]);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].arch, "aarch64");
        assert!(sack.query("vim", &[NevraForm::NameArch]).is_empty());
    }

    #[test]
    fn test_query_by_full_nevra() {
        let sack = sample_sack();
        let matches = sack.query("vim-8.2.0-3.fc40.x86_64", &[NevraForm::Nevra]);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].version, "8.2.0");
    }

    #[test]
    fn test_query_auto_detect_prefers_specific_form() {
        let sack = sample_sack();
        let matches = sack.query("vim-9.1.0-1.fc40.x86_64", &[]);
        assert_eq!(matches.len(), 1);
        let by_name = sack.query("vim", &[]);
        assert_eq!(by_name.len(), 3);
    }

    #[test]
    fn test_query_glob() {
        let sack = sample_sack();
        assert_eq!(sack.query("v*", &[NevraForm::Name]).len(), 3);
        assert_eq!(sack.query("ba?h", &[NevraForm::Name]).len(), 1);
    }

    #[test]
    fn test_best_candidate_prefers_highest_evr() {
        let sack = sample_sack();
        let best = sack.best_candidate("vim.x86_64", &[NevraForm::NameArch]).unwrap();
        assert_eq!(best.version, "9.1.0");
    }

    #[test]
    fn test_security_filter_is_idempotent() {
        let mut sack = sample_sack();
        sack.apply_security_filter();
        let once: Vec<String> = sack.visible().map(|p| p.nevra()).collect();
        sack.apply_security_filter();
        let twice: Vec<String> = sack.visible().map(|p| p.nevra()).collect();
        assert_eq!(once, twice);
        assert_eq!(once.len(), 1);
        assert_eq!(sack.query("vim", &[NevraForm::Name]).len(), 0);
    }

    #[test]
    fn test_icase_hint() {
        let sack = sample_sack();
        assert_eq!(sack.icase_hint("VIM"), Some("vim".to_string()));
        assert_eq!(sack.icase_hint("vim"), None);
        assert_eq!(sack.icase_hint("nope"), None);
    }
}
