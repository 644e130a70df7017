//! Common test fixtures for rpkg integration tests

use std::path::PathBuf;

use tempfile::TempDir;

/// A disposable root holding configuration, metadata and rpm files
#[allow(dead_code)]
pub struct TestRoot {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to the root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestRoot {
    /// Create a new test root with an empty repo directory
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        std::fs::create_dir_all(path.join("repo")).expect("Failed to create repo directory");
        Self { temp, path }
    }

    /// Write the configuration file pointing at this root's metadata
    pub fn write_config(&self, strict: bool) {
        let config = format!(
            "strict: {strict}\nrepodir: repo\ngroups_file: groups.yaml\nmodules_file: modules.yaml\n"
        );
        self.write_file("rpkg.yaml", &config);
    }

    /// Write a file under the root
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the root
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Drop a dummy rpm payload with a NEVRA file name
    pub fn write_rpm(&self, name: &str) -> PathBuf {
        let file_path = self.path.join(name);
        std::fs::write(&file_path, b"not a real rpm payload").expect("Failed to write rpm file");
        file_path
    }

    /// A small index with a few well-known packages
    pub fn write_base_index(&self) {
        self.write_file(
            "repo/base.json",
            r#"[
  {"name": "vim", "version": "9.1.0", "release": "1", "arch": "x86_64"},
  {"name": "vim", "version": "8.2.0", "release": "3", "arch": "x86_64"},
  {"name": "bash", "version": "5.2.26", "release": "1", "arch": "x86_64"},
  {"name": "emacs", "version": "29.3", "release": "2", "arch": "x86_64",
   "advisories": ["SA-2026-0101"]}
]"#,
        );
    }
}
