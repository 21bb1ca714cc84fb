// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed git config reader.
//!
//! This module provides [`GitConfig`], a handle bound to one [`Source`] that
//! answers typed lookups. Every accessor is a projection of [`GitConfig::query`].

use crate::adapters::GitCommand;
use crate::domain::{Query, RawValues, Result, Source, TypeHint};
use crate::ports::ConfigRunner;
use std::path::Path;

/// Reads values from one git config source.
///
/// A `GitConfig` holds no mutable state. Every lookup runs one query through
/// the runner; nothing is cached.
///
/// # Examples
///
/// ```rust,no_run
/// use gitcfg::GitConfig;
///
/// # fn main() -> gitcfg::domain::Result<()> {
/// let email = GitConfig::default().get_string("user.email")?;
/// let rebase = GitConfig::global().get_bool("pull.rebase")?;
/// let url = GitConfig::file(".gitmodules").get_string("submodule.vendor.url")?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct GitConfig<R = GitCommand> {
    source: Source,
    runner: R,
}

impl GitConfig<GitCommand> {
    /// Reads from the given source through the `git` executable.
    pub fn new(source: Source) -> Self {
        Self::with_runner(source, GitCommand::new())
    }

    /// Reads the global config (e.g. `~/.gitconfig`).
    pub fn global() -> Self {
        Self::new(Source::global())
    }

    /// Reads the repository config (e.g. `.git/config`).
    pub fn local() -> Self {
        Self::new(Source::local())
    }

    /// Reads a file in git config syntax.
    pub fn file(path: impl AsRef<Path>) -> Self {
        Self::new(Source::file(path))
    }

    /// Reads a blob in git config syntax (e.g. `HEAD:.gitmodules`).
    pub fn blob(rev: impl Into<String>) -> Self {
        Self::new(Source::blob(rev))
    }
}

impl Default for GitConfig<GitCommand> {
    /// Reads the merged system, global and local view.
    fn default() -> Self {
        Self::new(Source::default())
    }
}

impl<R: ConfigRunner> GitConfig<R> {
    /// Reads from the given source through a custom runner.
    pub fn with_runner(source: Source, runner: R) -> Self {
        Self { source, runner }
    }

    /// The source this reader is bound to.
    pub fn source(&self) -> &Source {
        &self.source
    }

    /// The runner this reader queries through.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Runs one query and returns all values of `key` in declaration order.
    ///
    /// The key is not validated locally. Git rejects a malformed key with the
    /// same status as an absent one, so it fails as `KeyNotFound`.
    pub fn query(&self, key: &str, hint: TypeHint) -> Result<RawValues> {
        tracing::debug!(
            "Querying '{}' from {} git config via {} (hint={})",
            key,
            self.source,
            self.runner.name(),
            hint
        );
        self.runner.run(&Query::new(key, &self.source, hint))
    }

    /// Obtains one string value; the last declared value wins.
    pub fn get_string(&self, key: &str) -> Result<String> {
        Ok(self.query(key, TypeHint::None)?.into_last())
    }

    /// Obtains all string values in declaration order.
    pub fn get_strings(&self, key: &str) -> Result<Vec<String>> {
        Ok(self.query(key, TypeHint::None)?.into_vec())
    }

    /// Obtains one path value with `~` expanded by git.
    pub fn get_path(&self, key: &str) -> Result<String> {
        Ok(self.query(key, TypeHint::Path)?.into_last())
    }

    /// Obtains all path values with `~` expanded by git.
    pub fn get_paths(&self, key: &str) -> Result<Vec<String>> {
        Ok(self.query(key, TypeHint::Path)?.into_vec())
    }

    /// Obtains one boolean value.
    pub fn get_bool(&self, key: &str) -> Result<bool> {
        Ok(self.query(key, TypeHint::Bool)?.as_bool())
    }

    /// Obtains one integer value, with `k`/`m`/`g` suffixes expanded by git.
    pub fn get_int64(&self, key: &str) -> Result<i64> {
        self.query(key, TypeHint::Int)?.as_i64(key)
    }
}
