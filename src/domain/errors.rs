// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for git config queries and struct loading.
//!
//! Query failures fall into two families: the key is absent under the selected
//! source ([`GitConfigError::KeyNotFound`]), or the `git config` adapter itself
//! failed (could not run, exited with an unexpected status, or printed output
//! that could not be parsed). Loading a struct aggregates per-field failures
//! into a [`LoadErrors`] value instead of stopping at the first one.

use std::fmt;
use std::num::ParseIntError;
use thiserror::Error;

/// The main error type for git config operations.
///
/// # Examples
///
/// ```
/// use gitcfg::domain::errors::GitConfigError;
///
/// let err = GitConfigError::KeyNotFound {
///     key: "user.email".to_string(),
///     source_desc: "--global".to_string(),
/// };
/// assert!(err.is_key_not_found());
/// assert!(!err.is_adapter_failure());
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GitConfigError {
    /// `git config` exited with status 1.
    ///
    /// This is git's status for a key with no value, but git also uses it for
    /// a malformed key and for a `--file` or `--blob` source it cannot read.
    #[error("Key not found in {source_desc} git config: {key}")]
    KeyNotFound {
        /// The key that was queried
        key: String,
        /// Human readable description of the source that was queried
        source_desc: String,
    },

    /// `git config` exited with a status other than success or "key not found".
    #[error("git config exited with {}: {stderr}", exit_label(.code))]
    CommandFailed {
        /// The exit code, if the process exited normally
        code: Option<i32>,
        /// Standard error of the process, trailing newlines removed
        stderr: String,
    },

    /// The git executable could not be started.
    #[error("Failed to run '{program}': {source}")]
    Spawn {
        /// The program that was executed
        program: String,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The output of `git config` did not follow the NUL-delimited format.
    #[error("Malformed git config output: {message}")]
    MalformedOutput {
        /// What was wrong with the output
        message: String,
    },

    /// An `--int` query returned something that is not a base-10 `i64`.
    #[error("Value '{value}' of key '{key}' is not a valid integer: {source}")]
    InvalidInteger {
        /// The key being queried
        key: String,
        /// The raw value returned by git
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// An integer value does not fit the width of the target field.
    #[error("Value {value} of key '{key}' does not fit in {target_type}")]
    IntegerOverflow {
        /// The key being loaded
        key: String,
        /// The parsed 64-bit value
        value: i64,
        /// The narrower integer type of the field
        target_type: &'static str,
    },

    /// A field is annotated with a key but its type cannot be populated.
    #[error("Cannot populate field '{field}' of type {type_name}")]
    UnsupportedFieldKind {
        /// The field name
        field: String,
        /// The Rust type of the field
        type_name: &'static str,
    },

    /// A `--file` source path cannot be passed to git without loss.
    #[error("Config file path is not valid UTF-8: {path}")]
    NonUtf8Path {
        /// The path, with invalid sequences replaced
        path: String,
    },

    /// The load target is not usable; no field was touched.
    #[error("Cannot load into {target}: {message}")]
    Precondition {
        /// The record type being loaded
        target: &'static str,
        /// Why the target was rejected
        message: String,
    },

    /// One or more fields failed to load.
    #[error("{0}")]
    Load(LoadErrors),
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "signal".to_string(),
    }
}

impl GitConfigError {
    /// Returns true if this error means the key is absent under the queried source.
    ///
    /// Git reports malformed keys and unreadable file or blob sources with the
    /// same exit status, so those are classified as absent too.
    pub fn is_key_not_found(&self) -> bool {
        matches!(self, GitConfigError::KeyNotFound { .. })
    }

    /// Returns true if this error comes from running or parsing `git config`.
    pub fn is_adapter_failure(&self) -> bool {
        matches!(
            self,
            GitConfigError::CommandFailed { .. }
                | GitConfigError::Spawn { .. }
                | GitConfigError::MalformedOutput { .. }
                | GitConfigError::InvalidInteger { .. }
        )
    }

    /// Returns the per-field failures if this is a [`GitConfigError::Load`].
    pub fn as_load_errors(&self) -> Option<&LoadErrors> {
        match self {
            GitConfigError::Load(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Returns true if `err` is a [`GitConfigError::KeyNotFound`].
///
/// See [`GitConfigError::is_key_not_found`] for what git folds into it.
pub fn is_key_not_found(err: &GitConfigError) -> bool {
    err.is_key_not_found()
}

/// Per-field failures collected while loading a struct.
///
/// A `LoadErrors` value always holds at least one entry; a load with no
/// failing field returns `Ok(())` instead. Entries keep field declaration
/// order.
#[derive(Debug)]
pub struct LoadErrors {
    entries: Vec<(String, GitConfigError)>,
}

impl LoadErrors {
    /// Builds the aggregate from collected entries, or `None` when there are none.
    pub(crate) fn from_entries(entries: Vec<(String, GitConfigError)>) -> Option<Self> {
        if entries.is_empty() {
            None
        } else {
            Some(Self { entries })
        }
    }

    /// Returns the error recorded for the given field, if any.
    pub fn of_field(&self, name: &str) -> Option<&GitConfigError> {
        self.entries
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, err)| err)
    }

    /// Iterates over `(field name, error)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &GitConfigError)> {
        self.entries.iter().map(|(field, err)| (field.as_str(), err))
    }

    /// Names of the fields that failed, in declaration order.
    pub fn fields(&self) -> Vec<&str> {
        self.entries.iter().map(|(field, _)| field.as_str()).collect()
    }

    /// Number of failed fields. Never zero.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consumes the aggregate and returns the entries.
    pub fn into_inner(self) -> Vec<(String, GitConfigError)> {
        self.entries
    }
}

impl fmt::Display for LoadErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, err)) in self.entries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "field {:?}: {}", field, err)?;
        }
        Ok(())
    }
}

impl From<LoadErrors> for GitConfigError {
    fn from(errors: LoadErrors) -> Self {
        GitConfigError::Load(errors)
    }
}

/// A specialized Result type for git config operations.
pub type Result<T> = std::result::Result<T, GitConfigError>;
