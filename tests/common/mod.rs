// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared fixtures for integration tests.
//!
//! - [`ScriptedRunner`]: an in-memory runner that normalizes values the way
//!   `git config` does for `--bool`, `--int` and `--path`.
//! - [`GitSandbox`]: a throwaway HOME and repository for tests that run the
//!   real `git` executable. Environment and working directory are set on the
//!   child process only.

#![allow(dead_code)]

use gitcfg::adapters::GitCommand;
use gitcfg::domain::{GitConfigError, Query, RawValues, Result, Source, TypeHint};
use gitcfg::ports::ConfigRunner;
use gitcfg::GitConfig;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::{Mutex, OnceLock};
use tempfile::TempDir;

/// Home directory used by [`ScriptedRunner`] for `~` expansion.
pub const SCRIPTED_HOME: &str = "/home/tester";

/// An in-memory config store keyed by source label and key.
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    values: HashMap<(String, String), Vec<String>>,
    queries: Mutex<Vec<Vec<String>>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a value for `key` under `source`, like `git config --add`.
    pub fn with_value(mut self, source: &Source, key: &str, value: &str) -> Self {
        self.values
            .entry((source.to_string(), key.to_string()))
            .or_default()
            .push(value.to_string());
        self
    }

    /// Appends a value under the default source.
    pub fn with_default(self, key: &str, value: &str) -> Self {
        self.with_value(&Source::default(), key, value)
    }

    /// Argument lists of every query seen so far.
    pub fn queries(&self) -> Vec<Vec<String>> {
        self.queries.lock().unwrap().clone()
    }

    fn normalize(hint: TypeHint, key: &str, value: &str) -> Result<String> {
        let bad_value = |kind: &str| GitConfigError::CommandFailed {
            code: Some(128),
            stderr: format!("fatal: bad {} config value '{}' for '{}'", kind, value, key),
        };

        match hint {
            TypeHint::None => Ok(value.to_string()),
            TypeHint::Bool => match value.to_ascii_lowercase().as_str() {
                "true" | "yes" | "on" | "1" => Ok("true".to_string()),
                "false" | "no" | "off" | "0" | "" => Ok("false".to_string()),
                _ => Err(bad_value("boolean")),
            },
            TypeHint::Int => {
                let (digits, factor) = match value.chars().last().map(|c| c.to_ascii_lowercase()) {
                    Some('k') => (&value[..value.len() - 1], 1024),
                    Some('m') => (&value[..value.len() - 1], 1024 * 1024),
                    Some('g') => (&value[..value.len() - 1], 1024 * 1024 * 1024),
                    _ => (value, 1),
                };
                digits
                    .parse::<i64>()
                    .ok()
                    .and_then(|n| n.checked_mul(factor))
                    .map(|n| n.to_string())
                    .ok_or_else(|| bad_value("numeric"))
            }
            TypeHint::Path => Ok(match value.strip_prefix('~') {
                Some(rest) if rest.is_empty() || rest.starts_with('/') => {
                    format!("{}{}", SCRIPTED_HOME, rest)
                }
                _ => value.to_string(),
            }),
        }
    }
}

impl ConfigRunner for ScriptedRunner {
    fn name(&self) -> &str {
        "scripted"
    }

    fn run(&self, query: &Query<'_>) -> Result<RawValues> {
        self.queries.lock().unwrap().push(query.args());

        let stored = self
            .values
            .get(&(query.source.to_string(), query.key.to_string()))
            .ok_or_else(|| query.key_not_found())?;

        let values = stored
            .iter()
            .map(|v| Self::normalize(query.hint, query.key, v))
            .collect::<Result<Vec<_>>>()?;

        RawValues::new(values).ok_or_else(|| query.key_not_found())
    }
}

/// The store used by most scenarios: global values plus a local override of
/// `user.email`, all visible through the default source.
pub fn scenario_runner() -> ScriptedRunner {
    let global = Source::global();
    let local = Source::local();
    let default = Source::default();

    let mut runner = ScriptedRunner::new();
    for source in [&global, &default] {
        runner = runner
            .with_value(source, "user.email", "global@example.com")
            .with_value(source, "merge.ff", "false")
            .with_value(source, "pull.rebase", "true")
            .with_value(source, "gc.auto", "6700")
            .with_value(source, "ghq.root", "~/dev")
            .with_value(source, "ghq.root", "~/go/src");
    }
    for source in [&local, &default] {
        runner = runner
            .with_value(source, "user.email", "local@example.com")
            .with_value(source, "remote.origin.url", "git@example.com:repo.git");
    }
    runner
}

static GIT_AVAILABLE: OnceLock<bool> = OnceLock::new();

/// Checks if a `git` executable is available. Cached after the first call.
pub fn is_git_available() -> bool {
    *GIT_AVAILABLE.get_or_init(|| {
        Command::new("git")
            .arg("--version")
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false)
    })
}

/// Prints a warning that a test is skipped because git is unavailable.
pub fn print_git_unavailable_warning(test_name: &str) {
    eprintln!("\n⚠️  SKIPPED: {} - git is not available", test_name);
    eprintln!("   To run this test, install git and make sure it is on PATH.\n");
}

/// Returns early from a test when git is unavailable.
#[macro_export]
macro_rules! require_git {
    ($test_name:expr) => {
        if !$crate::common::is_git_available() {
            $crate::common::print_git_unavailable_warning($test_name);
            return;
        }
    };
}

/// A temporary HOME containing a repository with one commit.
pub struct GitSandbox {
    _dir: TempDir,
    home: PathBuf,
    repo: PathBuf,
}

impl GitSandbox {
    /// Creates the sandbox with global and local settings and a committed
    /// `.gitmodules`.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let home = dir.path().to_path_buf();
        let repo = home.join("repo");
        std::fs::create_dir_all(&repo).unwrap();

        let sandbox = Self {
            _dir: dir,
            home,
            repo,
        };

        sandbox.git(&["init", "--quiet"]);
        sandbox.git(&["config", "--global", "user.email", "global@example.com"]);
        sandbox.git(&["config", "--global", "merge.ff", "false"]);
        sandbox.git(&["config", "--global", "pull.rebase", "true"]);
        sandbox.git(&["config", "--global", "gc.auto", "6700"]);
        sandbox.git(&["config", "--global", "--add", "ghq.root", "~/dev"]);
        sandbox.git(&["config", "--global", "--add", "ghq.root", "~/go/src"]);

        sandbox.git(&["config", "--local", "user.email", "local@example.com"]);
        sandbox.git(&[
            "config",
            "--local",
            "remote.origin.url",
            "git@example.com:repo.git",
        ]);

        std::fs::write(
            sandbox.repo.join(".gitmodules"),
            "[submodule \"modules/sub\"]\n\tpath = modules/sub\n\turl = https://git.example.com/sub.git\n",
        )
        .unwrap();

        sandbox.git(&["add", "."]);
        sandbox.git(&[
            "-c",
            "commit.gpgsign=false",
            "commit",
            "--quiet",
            "-m",
            "initial commit",
        ]);
        sandbox
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    pub fn repo(&self) -> &Path {
        &self.repo
    }

    /// Runs git inside the sandbox and panics on failure.
    pub fn git(&self, args: &[&str]) {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.repo)
            .env("HOME", &self.home)
            .env("XDG_CONFIG_HOME", self.home.join(".config"))
            .env("GIT_CONFIG_NOSYSTEM", "1")
            .env("GIT_AUTHOR_NAME", "Test User")
            .env("GIT_COMMITTER_NAME", "Test User")
            .output()
            .unwrap_or_else(|e| panic!("failed to run `git {:?}`: {}", args, e));
        if !output.status.success() {
            panic!(
                "`git {:?}` failed:\n{}",
                args,
                String::from_utf8_lossy(&output.stderr)
            );
        }
    }

    /// An adapter that runs git with the sandbox's HOME and repository.
    pub fn command(&self) -> GitCommand {
        GitCommand::new()
            .current_dir(&self.repo)
            .env("HOME", &self.home)
            .env("XDG_CONFIG_HOME", self.home.join(".config"))
            .env("GIT_CONFIG_NOSYSTEM", "1")
    }

    /// A reader bound to `source` inside the sandbox.
    pub fn reader(&self, source: Source) -> GitConfig {
        GitConfig::with_runner(source, self.command())
    }
}
