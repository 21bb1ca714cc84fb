// SPDX-License-Identifier: MIT OR Apache-2.0

//! `git` executable adapter.
//!
//! This module provides the adapter that answers queries by running
//! `git config --get-all --null ...` and splitting its NUL-delimited output.

use crate::domain::{GitConfigError, Query, RawValues, Result};
use crate::ports::ConfigRunner;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;

/// Exit status of `git config --get` when the key has no value. Git also
/// exits with it for malformed keys and unreadable `--file`/`--blob` sources.
const KEY_NOT_FOUND_STATUS: i32 = 1;

/// Runs queries through the `git` executable.
///
/// The child inherits the environment and working directory of the calling
/// process unless they are overridden on the builder. Overrides apply to the
/// child only.
///
/// # Examples
///
/// ```rust,no_run
/// use gitcfg::adapters::GitCommand;
///
/// let git = GitCommand::new()
///     .current_dir("/srv/repos/project")
///     .env("GIT_CONFIG_NOSYSTEM", "1")
///     .global_arg("-c")
///     .global_arg("core.quotePath=false");
/// ```
#[derive(Clone, Debug)]
pub struct GitCommand {
    /// Executable to run
    program: OsString,
    /// Working directory of the child, if overridden
    current_dir: Option<PathBuf>,
    /// Extra environment of the child
    envs: Vec<(OsString, OsString)>,
    /// Arguments placed before the `config` subcommand
    global_args: Vec<OsString>,
}

impl GitCommand {
    /// Creates an adapter that runs `git` from `PATH`.
    pub fn new() -> Self {
        Self {
            program: OsString::from("git"),
            current_dir: None,
            envs: Vec::new(),
            global_args: Vec::new(),
        }
    }

    /// Sets the executable to run instead of `git`.
    pub fn program(mut self, program: impl Into<OsString>) -> Self {
        self.program = program.into();
        self
    }

    /// Runs git in the given directory, which selects the repository read by
    /// the default and `--local` sources.
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    /// Sets an environment variable for the child process.
    pub fn env(mut self, key: impl Into<OsString>, value: impl Into<OsString>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }

    /// Adds an argument before the `config` subcommand (e.g. `-c key=value`).
    pub fn global_arg(mut self, arg: impl Into<OsString>) -> Self {
        self.global_args.push(arg.into());
        self
    }

    fn command(&self, query: &Query<'_>) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.global_args).args(query.args());
        if let Some(dir) = &self.current_dir {
            cmd.current_dir(dir);
        }
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }
        cmd
    }
}

impl Default for GitCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigRunner for GitCommand {
    fn name(&self) -> &str {
        "git"
    }

    fn run(&self, query: &Query<'_>) -> Result<RawValues> {
        let output = self
            .command(query)
            .output()
            .map_err(|e| GitConfigError::Spawn {
                program: self.program.to_string_lossy().into_owned(),
                source: e,
            })?;

        if !output.status.success() {
            let code = output.status.code();
            if code == Some(KEY_NOT_FOUND_STATUS) {
                return Err(query.key_not_found());
            }
            return Err(GitConfigError::CommandFailed {
                code,
                stderr: String::from_utf8_lossy(&output.stderr)
                    .trim_end_matches('\n')
                    .to_string(),
            });
        }

        let values = split_nul_terminated(&output.stdout)?;
        tracing::trace!(
            "git config returned {} value(s) for '{}'",
            values.len(),
            query.key
        );

        RawValues::new(values).ok_or_else(|| query.key_not_found())
    }
}

/// Splits `--null` output into values.
///
/// Every value is followed by a NUL byte, so the segment after the last NUL is
/// empty and is dropped. Empty output yields no values.
pub fn split_nul_terminated(output: &[u8]) -> Result<Vec<String>> {
    if output.is_empty() {
        return Ok(Vec::new());
    }

    let text = std::str::from_utf8(output).map_err(|e| GitConfigError::MalformedOutput {
        message: format!("output is not valid UTF-8: {}", e),
    })?;

    let Some(body) = text.strip_suffix('\0') else {
        return Err(GitConfigError::MalformedOutput {
            message: "output is not NUL-terminated".to_string(),
        });
    };

    Ok(body.split('\0').map(str::to_string).collect())
}
