// tests/common/fixtures.rs
use std::{
    fs,
    path::{Path, PathBuf},
};

use assert_cmd::Command;
use tempfile::TempDir;

pub const SCENARIO_METADATA: &str = "alice\nmain\nabc123\n2024-01-01\n42\n";
pub const SCENARIO_TEMPLATE: &str = "Build $REVISION$ by $BUILDER$ on $BRANCH$ ($HASH$, $DATE$)";
pub const SCENARIO_OUTPUT: &str = "Build 42 by alice on main (abc123, 2024-01-01)";

/// A scratch directory holding the metadata, template and output of one run.
pub struct StampFixture {
    dir: TempDir,
}

impl StampFixture {
    pub fn new() -> Self {
        Self { dir: tempfile::tempdir().expect("create temp dir") }
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    pub fn write(&self, rel: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.path(rel);
        fs::write(&path, contents).expect("write fixture");
        path
    }

    pub fn read(&self, rel: &str) -> Vec<u8> {
        fs::read(self.path(rel)).expect("read output")
    }

    pub fn read_string(&self, rel: &str) -> String {
        String::from_utf8(self.read(rel)).expect("utf-8 output")
    }
}

pub fn stamp(metadata: &Path, template: &Path, output: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_stamp"));
    cmd.arg(metadata).arg(template).arg(output);
    cmd
}
