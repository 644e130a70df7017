//! Module stream metadata
//!
//! Modules shadow classic groups: a group spec is tried against the module
//! index first and only falls through to comps when no module satisfies it.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::engine::EngineError;

/// One module stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Module {
    pub name: String,
    pub stream: String,
    /// Whether this stream may be enabled without confirmation.
    #[serde(default = "default_stream")]
    pub default: bool,
    #[serde(default)]
    pub packages: Vec<String>,
}

fn default_stream() -> bool {
    true
}

/// Loaded module metadata.
#[derive(Debug, Default)]
pub struct ModuleIndex {
    modules: Vec<Module>,
}

impl ModuleIndex {
    /// Load modules from a YAML file. A missing file is empty metadata.
    pub fn load(path: &Path) -> Result<Self, EngineError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(path).map_err(|e| EngineError::Metadata {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let modules: Vec<Module> =
            serde_yaml::from_str(&data).map_err(|e| EngineError::Metadata {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self { modules })
    }

    /// Find a module by `name` or `name:stream`.
    ///
    /// A bare name prefers the default stream.
    pub fn find(&self, spec: &str) -> Option<&Module> {
        match spec.split_once(':') {
            Some((name, stream)) => self
                .modules
                .iter()
                .find(|m| m.name == name && m.stream == stream),
            None => self
                .modules
                .iter()
                .find(|m| m.name == spec && m.default)
                .or_else(|| self.modules.iter().find(|m| m.name == spec)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ModuleIndex {
        let yaml = r#"
- name: nodejs
  stream: "20"
  packages: [nodejs, npm]
- name: nodejs
  stream: "22"
  default: false
  packages: [nodejs, npm]
- name: postgresql
  stream: "16"
  packages: [postgresql-server]
"#;
        ModuleIndex {
            modules: serde_yaml::from_str(yaml).unwrap(),
        }
    }

    #[test]
    fn test_find_bare_name_prefers_default_stream() {
        let index = sample();
        let module = index.find("nodejs").unwrap();
        assert_eq!(module.stream, "20");
        assert!(module.default);
    }

    #[test]
    fn test_find_name_stream() {
        let index = sample();
        let module = index.find("nodejs:22").unwrap();
        assert_eq!(module.stream, "22");
        assert!(!module.default);
        assert!(index.find("nodejs:18").is_none());
    }

    #[test]
    fn test_find_unknown_name() {
        assert!(sample().find("ruby").is_none());
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let index = ModuleIndex::load(Path::new("/nonexistent/modules.yaml")).unwrap();
        assert!(index.find("nodejs").is_none());
    }
}
