#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the stampli binary.
#[macro_export]
macro_rules! stampli {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("stampli"))
    };
}

/// A temporary working directory for one invocation.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, relative_path: &str) -> PathBuf {
        self.dir.path().join(relative_path)
    }

    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Writes `stampli.json` in the fixture root.
    pub fn create_config(&self, content: &str) {
        self.create_file("stampli.json", content);
    }

    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.join(relative_path)).expect("Failed to read file")
    }

    /// A stampli command running inside the fixture directory.
    pub fn cmd(&self) -> assert_cmd::Command {
        let mut cmd = crate::stampli!();
        cmd.current_dir(self.path()).env("NO_COLOR", "1");
        cmd
    }
}
