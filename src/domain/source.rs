// SPDX-License-Identifier: MIT OR Apache-2.0

//! Git config source selectors.
//!
//! A [`Source`] is the list of `git config` arguments that select which
//! configuration files are read: none for the merged default view, `--global`,
//! `--local`, `--file <path>` or `--blob <rev>`.

use crate::domain::errors::{GitConfigError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Selects the scope that a git config query reads from.
///
/// `Source` is plain immutable data and can be shared freely between readers.
///
/// # Examples
///
/// ```
/// use gitcfg::domain::Source;
///
/// assert!(Source::default().args().is_empty());
/// assert_eq!(Source::global().args(), ["--global"]);
/// assert_eq!(Source::blob("HEAD:.gitmodules").args(), ["--blob", "HEAD:.gitmodules"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Source(Vec<String>);

impl Source {
    /// Reads the global config only (e.g. `~/.gitconfig`).
    pub fn global() -> Self {
        Source(vec!["--global".to_string()])
    }

    /// Reads the repository config only (e.g. `.git/config`).
    pub fn local() -> Self {
        Source(vec!["--local".to_string()])
    }

    /// Reads the given file in git config syntax (e.g. `.gitmodules`).
    ///
    /// The path is converted lossily: non-UTF-8 bytes become U+FFFD, and git
    /// then fails to open the file. Use [`Source::try_file`] to reject such
    /// paths up front.
    pub fn file(path: impl AsRef<Path>) -> Self {
        Source(vec![
            "--file".to_string(),
            path.as_ref().to_string_lossy().into_owned(),
        ])
    }

    /// Like [`Source::file`], but fails with [`GitConfigError::NonUtf8Path`]
    /// when the path is not valid UTF-8.
    pub fn try_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = path.to_str().ok_or_else(|| GitConfigError::NonUtf8Path {
            path: path.to_string_lossy().into_owned(),
        })?;
        Ok(Source(vec!["--file".to_string(), text.to_string()]))
    }

    /// Reads a blob in git config syntax (e.g. `HEAD:.gitmodules`).
    pub fn blob(rev: impl Into<String>) -> Self {
        Source(vec!["--blob".to_string(), rev.into()])
    }

    /// Builds a source from arbitrary selector arguments, such as `--system`
    /// or `--worktree`.
    ///
    /// ```
    /// use gitcfg::domain::Source;
    ///
    /// let system = Source::from_args(["--system"]);
    /// assert_eq!(system.to_string(), "--system");
    /// ```
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Source(args.into_iter().map(Into::into).collect())
    }

    /// The arguments appended to every query made through this source.
    pub fn args(&self) -> &[String] {
        &self.0
    }

    /// Returns true for the default (merged system, global and local) view.
    pub fn is_default(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            write!(f, "default")
        } else {
            write!(f, "{}", self.0.join(" "))
        }
    }
}
