//! Common helpers for bugtrack integration tests

use std::fs;
use std::path::Path;
use std::time::Duration;

use assert_cmd::Command;

pub struct Tmp {
    pub dir: tempfile::TempDir,
}

impl Tmp {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, rel: &str, data: &str) {
        let p = self.path().join(rel);
        if let Some(parent) = p.parent() {
            fs::create_dir_all(parent).ok();
        }
        fs::write(p, data).unwrap();
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.path().join(rel)).unwrap()
    }
}

/// `bugtrack` running inside `cwd` with a clean environment for its settings.
pub fn bugtrack(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("bugtrack").unwrap();
    cmd.current_dir(cwd)
        .env_remove("BUGTRACK_DIR")
        .env_remove("BUGTRACK_CONFIG")
        .env_remove("RUST_LOG")
        .timeout(Duration::from_secs(10));
    cmd
}

/// Script for menu option 1 followed by the answers to every prompt.
pub fn file_bug_script(
    name: &str,
    source: &str,
    user: &str,
    bug_type: &str,
    priority: &str,
    description: &str,
    status: &str,
) -> String {
    format!("1\n{name}\n{source}\n{user}\n{bug_type}\n{priority}\n{description}\n{status}\n")
}
