//! Comps group metadata
//!
//! Classic package groups loaded from a YAML file. A group lists its member
//! packages by type; which types an install pulls in is request policy.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::engine::EngineError;

/// Which comps package list a group install pulls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupPackageType {
    Mandatory,
    Default,
    Optional,
}

/// One comps group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub mandatory: Vec<String>,
    #[serde(default)]
    pub default: Vec<String>,
    #[serde(default)]
    pub optional: Vec<String>,
}

impl Group {
    /// Member package names for the requested types, in listing order.
    pub fn packages_of_types(&self, types: &[GroupPackageType]) -> Vec<&str> {
        let mut out = Vec::new();
        for ty in types {
            let list = match ty {
                GroupPackageType::Mandatory => &self.mandatory,
                GroupPackageType::Default => &self.default,
                GroupPackageType::Optional => &self.optional,
            };
            out.extend(list.iter().map(String::as_str));
        }
        out
    }
}

/// Loaded comps metadata.
#[derive(Debug, Default)]
pub struct Comps {
    groups: Vec<Group>,
}

impl Comps {
    /// Load groups from a YAML file. A missing file is empty metadata.
    pub fn load(path: &Path) -> Result<Self, EngineError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(path).map_err(|e| EngineError::Metadata {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let groups: Vec<Group> = serde_yaml::from_str(&data).map_err(|e| EngineError::Metadata {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { groups })
    }

    /// Find a group by id or name, exact match first.
    pub fn find(&self, spec: &str) -> Option<&Group> {
        self.groups
            .iter()
            .find(|g| g.id == spec || g.name == spec)
            .or_else(|| {
                self.groups
                    .iter()
                    .find(|g| g.id.eq_ignore_ascii_case(spec) || g.name.eq_ignore_ascii_case(spec))
            })
    }
}
