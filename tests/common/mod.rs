#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_fs::prelude::*;

const FAKE_SCANNER: &str = r#"#!/bin/sh
: > "$FAKE_SCANNER_LOG"
for arg in "$@"; do
    printf '%s\n' "$arg" >> "$FAKE_SCANNER_LOG"
done
exit "${FAKE_SCANNER_EXIT:-0}"
"#;

const INHERITED_VARS: [&str; 8] = [
    "INPUT_PATH",
    "INPUT_REPO",
    "INPUT_IMAGE",
    "INPUT_FORCE",
    "INPUT_FORMAT",
    "VERITENSOR_ACTION_TOOL",
    "VERITENSOR_ACTION_CONFIG",
    "VERITENSOR_ACTION_LOG",
];

/// A temp workspace holding a fake scanner that records its argv.
pub struct Sandbox {
    pub temp: assert_fs::TempDir,
    pub scanner: PathBuf,
    pub log: PathBuf,
}

impl Sandbox {
    pub fn new() -> Self {
        let temp = assert_fs::TempDir::new().unwrap();
        let script = temp.child("bin/fake-scanner");
        script.write_str(FAKE_SCANNER).unwrap();
        fs::set_permissions(script.path(), fs::Permissions::from_mode(0o755)).unwrap();
        let log = temp.child("argv.log").path().to_path_buf();
        Self { scanner: script.path().to_path_buf(), log, temp }
    }

    /// The binary under test, isolated from the caller's environment.
    pub fn bare_command(&self) -> Command {
        let mut cmd = Command::cargo_bin("veritensor-action").expect("binary exists");
        for var in INHERITED_VARS {
            cmd.env_remove(var);
        }
        cmd.current_dir(self.temp.path())
            .env("XDG_CONFIG_HOME", self.temp.child("config").path())
            .env("FAKE_SCANNER_LOG", &self.log);
        cmd
    }

    /// Same as [`Sandbox::bare_command`], pointed at the fake scanner.
    pub fn command(&self) -> Command {
        let mut cmd = self.bare_command();
        cmd.arg("--tool").arg(&self.scanner);
        cmd
    }

    /// Arguments the fake scanner received, one entry per argv slot.
    pub fn recorded_args(&self) -> Vec<String> {
        fs::read_to_string(&self.log).unwrap().lines().map(str::to_string).collect()
    }

    pub fn scanner_ran(&self) -> bool {
        self.log.exists()
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }
}
