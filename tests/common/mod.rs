//! Common test utilities and helpers
//!
//! Every command runs inside its own temporary working directory so that the
//! directories created from the configuration never land in the source tree.

#![allow(dead_code)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test command builder for the cxkitty-notify CLI
pub struct TestCommand {
    cmd: Command,
}

impl TestCommand {
    /// Create a new test command running in `dir`
    pub fn new(dir: &Path) -> Self {
        let mut cmd = Command::cargo_bin("cxkitty-notify").expect("Failed to find cxkitty-notify binary");
        cmd.current_dir(dir).env_remove("CXKITTY_CONFIG").env_remove("RUST_LOG");
        Self { cmd }
    }

    /// Add arguments to the command
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for arg in args {
            self.cmd.arg(arg.as_ref());
        }
        self
    }

    /// Add a single argument to the command
    pub fn arg<S: AsRef<str>>(mut self, arg: S) -> Self {
        self.cmd.arg(arg.as_ref());
        self
    }

    /// Execute and expect success
    pub fn expect_success(mut self) -> TestAssertion {
        let assert = self.cmd.assert().success();
        TestAssertion { assert }
    }

    /// Execute and expect failure
    pub fn expect_failure(mut self) -> TestAssertion {
        let assert = self.cmd.assert().failure();
        TestAssertion { assert }
    }
}

/// Test assertion wrapper with convenient methods
pub struct TestAssertion {
    assert: assert_cmd::assert::Assert,
}

impl TestAssertion {
    /// Assert stdout contains text
    pub fn stdout_contains<S: AsRef<str>>(self, text: S) -> Self {
        let assert = self.assert.stdout(predicate::str::contains(text.as_ref()));
        Self { assert }
    }

    /// Assert stderr contains text
    pub fn stderr_contains<S: AsRef<str>>(self, text: S) -> Self {
        let assert = self.assert.stderr(predicate::str::contains(text.as_ref()));
        Self { assert }
    }

    /// Assert multiple stdout patterns
    pub fn stdout_contains_all<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for pattern in patterns {
            self.assert = self.assert.stdout(predicate::str::contains(pattern.as_ref()));
        }
        Self { assert: self.assert }
    }
}

/// Test environment setup helper
pub struct TestEnvironment {
    pub temp_dir: TempDir,
}

impl TestEnvironment {
    /// Create a new test environment with temporary directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        Self { temp_dir }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `config.yml` into the working directory
    pub fn write_config(&self, content: &str) -> PathBuf {
        let path = self.path().join("config.yml");
        std::fs::write(&path, content).expect("Failed to write config.yml");
        path
    }

    /// Write `config.ini` into the working directory
    pub fn write_ini(&self, content: &str) -> PathBuf {
        let path = self.path().join("config.ini");
        std::fs::write(&path, content).expect("Failed to write config.ini");
        path
    }

    /// Create a command running in this environment
    pub fn command(&self) -> TestCommand {
        TestCommand::new(self.path())
    }
}

impl Default for TestEnvironment {
    fn default() -> Self {
        Self::new()
    }
}
