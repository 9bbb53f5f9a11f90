//! Test support utilities for secrets-to-env integration tests.
//!
//! Provides an isolated runner environment and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment standing in for one job on a runner.
///
/// Each test gets its own workspace dir plus empty `GITHUB_ENV` and
/// `GITHUB_STATE` command files. No process-global state is mutated; child
/// processes use `.current_dir()` and explicit env vars so tests can run in
/// parallel.
pub struct Test {
    /// Working directory of the step
    pub dir: TempDir,
    /// Directory holding the runner command files
    pub runner: TempDir,
}

impl Test {
    /// Create a new job environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let runner = TempDir::new().expect("failed to create runner dir");

        let t = Self { dir, runner };
        fs::write(t.env_file(), "").expect("failed to create GITHUB_ENV");
        fs::write(t.state_file(), "").expect("failed to create GITHUB_STATE");
        t
    }

    /// Path of the `GITHUB_ENV` command file.
    pub fn env_file(&self) -> PathBuf {
        self.runner.path().join("github_env")
    }

    /// Path of the `GITHUB_STATE` command file.
    pub fn state_file(&self) -> PathBuf {
        self.runner.path().join("github_state")
    }

    /// Path of a file relative to the working directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Contents of a file in the working directory.
    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.path(name)).expect("failed to read file")
    }

    /// Variables exported through `GITHUB_ENV`, in order.
    pub fn exported(&self) -> Vec<(String, String)> {
        parse_command_file(&fs::read_to_string(self.env_file()).unwrap_or_default())
    }

    /// State saved through `GITHUB_STATE`; later saves win.
    pub fn state(&self) -> HashMap<String, String> {
        parse_command_file(&fs::read_to_string(self.state_file()).unwrap_or_default())
            .into_iter()
            .collect()
    }
}

/// Parse `NAME<<DELIMITER` heredoc blocks from a command file.
pub fn parse_command_file(content: &str) -> Vec<(String, String)> {
    let mut entries = Vec::new();
    let mut lines = content.lines();

    while let Some(line) = lines.next() {
        let Some((name, delimiter)) = line.split_once("<<") else {
            continue;
        };

        let mut value = Vec::new();
        for line in lines.by_ref() {
            if line == delimiter {
                break;
            }
            value.push(line);
        }
        entries.push((name.to_string(), value.join("\n")));
    }

    entries
}
