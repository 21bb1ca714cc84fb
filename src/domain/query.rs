// SPDX-License-Identifier: MIT OR Apache-2.0

//! Queries, type hints and raw query results.
//!
//! A [`Query`] names one key under one [`Source`] plus an optional
//! [`TypeHint`]; it renders to the argument list passed to `git`. The answer is
//! a [`RawValues`], the ordered list of strings that `git config --get-all`
//! prints for the key.

use crate::domain::errors::{GitConfigError, Result};
use crate::domain::source::Source;
use std::fmt;

/// Asks `git config` to normalize values before printing them.
///
/// The conversion rules (truthy spellings, `k`/`m`/`g` suffixes, `~`
/// expansion) belong to git; this crate only forwards the flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TypeHint {
    /// Values are returned verbatim.
    #[default]
    None,
    /// `--bool`: values are printed as `true` or `false`.
    Bool,
    /// `--int`: values are printed as base-10 integers with suffixes expanded.
    Int,
    /// `--path`: a leading `~` is expanded to the home directory.
    Path,
}

impl TypeHint {
    /// The `git config` flag for this hint, if any.
    pub fn flag(&self) -> Option<&'static str> {
        match self {
            TypeHint::None => None,
            TypeHint::Bool => Some("--bool"),
            TypeHint::Int => Some("--int"),
            TypeHint::Path => Some("--path"),
        }
    }
}

impl fmt::Display for TypeHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.flag() {
            Some(flag) => write!(f, "{}", flag),
            None => write!(f, "none"),
        }
    }
}

/// One lookup of a key under a source.
///
/// # Examples
///
/// ```
/// use gitcfg::domain::{Query, Source, TypeHint};
///
/// let source = Source::global();
/// let query = Query::new("gc.auto", &source, TypeHint::Int);
/// assert_eq!(
///     query.args(),
///     ["config", "--get-all", "--null", "--global", "--int", "gc.auto"]
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Query<'a> {
    /// The dotted key, passed to git without validation.
    pub key: &'a str,
    /// The scope to read from.
    pub source: &'a Source,
    /// Normalization requested from git.
    pub hint: TypeHint,
}

impl<'a> Query<'a> {
    /// Creates a query.
    pub fn new(key: &'a str, source: &'a Source, hint: TypeHint) -> Self {
        Self { key, source, hint }
    }

    /// Arguments for `git`, starting with the `config` subcommand.
    ///
    /// The shape is `config --get-all --null [source...] [hint] <key>`.
    pub fn args(&self) -> Vec<String> {
        let mut args = Vec::with_capacity(6 + self.source.args().len());
        args.extend(["config", "--get-all", "--null"].map(String::from));
        args.extend(self.source.args().iter().cloned());
        if let Some(flag) = self.hint.flag() {
            args.push(flag.to_string());
        }
        args.push(self.key.to_string());
        args
    }

    /// The error reported when the key has no value under the source.
    pub fn key_not_found(&self) -> GitConfigError {
        GitConfigError::KeyNotFound {
            key: self.key.to_string(),
            source_desc: self.source.to_string(),
        }
    }
}

/// The values stored for one key, in declaration order.
///
/// Later values override earlier ones, so single-valued string accessors use
/// [`RawValues::last`]. A `RawValues` is never empty: a key with no entries is
/// reported as [`GitConfigError::KeyNotFound`] instead.
///
/// # Examples
///
/// ```
/// use gitcfg::domain::RawValues;
///
/// let values = RawValues::new(vec!["~/dev".into(), "~/go/src".into()]).unwrap();
/// assert_eq!(values.first(), "~/dev");
/// assert_eq!(values.last(), "~/go/src");
/// assert_eq!(values.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawValues(Vec<String>);

impl RawValues {
    /// Wraps a non-empty list of values; an empty list yields `None`.
    pub fn new(values: Vec<String>) -> Option<Self> {
        if values.is_empty() {
            None
        } else {
            Some(RawValues(values))
        }
    }

    /// The first declared value.
    pub fn first(&self) -> &str {
        &self.0[0]
    }

    /// The last declared value, which wins for single-valued settings.
    pub fn last(&self) -> &str {
        &self.0[self.0.len() - 1]
    }

    /// Number of values. Never zero.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All values as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Consumes the wrapper and returns the values.
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }

    /// Takes the last value without cloning.
    pub fn into_last(mut self) -> String {
        // `new` guarantees at least one element
        self.0.pop().unwrap_or_default()
    }

    /// Interprets the first value as a canonical `--bool` result.
    ///
    /// Only the literal `true` is true; git prints nothing else for true values.
    pub fn as_bool(&self) -> bool {
        self.first() == "true"
    }

    /// Parses the first value as a canonical `--int` result.
    pub fn as_i64(&self, key: &str) -> Result<i64> {
        let value = self.first();
        value
            .parse::<i64>()
            .map_err(|e| GitConfigError::InvalidInteger {
                key: key.to_string(),
                value: value.to_string(),
                source: e,
            })
    }
}

impl IntoIterator for RawValues {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl AsRef<[String]> for RawValues {
    fn as_ref(&self) -> &[String] {
        &self.0
    }
}

impl From<RawValues> for Vec<String> {
    fn from(values: RawValues) -> Self {
        values.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(items: &[&str]) -> RawValues {
        RawValues::new(items.iter().map(|s| s.to_string()).collect()).unwrap()
    }

    #[test]
    fn test_empty_is_rejected() {
        assert!(RawValues::new(Vec::new()).is_none());
    }

    #[test]
    fn test_query_args_default_source() {
        let source = Source::default();
        let query = Query::new("user.email", &source, TypeHint::None);
        assert_eq!(
            query.args(),
            ["config", "--get-all", "--null", "user.email"]
        );
    }

    #[test]
    fn test_query_args_file_source_with_path_hint() {
        let source = Source::file(".gitmodules");
        let query = Query::new("submodule.sub.path", &source, TypeHint::Path);
        assert_eq!(
            query.args(),
            [
                "config",
                "--get-all",
                "--null",
                "--file",
                ".gitmodules",
                "--path",
                "submodule.sub.path"
            ]
        );
    }

    #[test]
    fn test_query_key_not_found_names_source() {
        let source = Source::local();
        let err = Query::new("no.such", &source, TypeHint::None).key_not_found();
        assert!(err.is_key_not_found());
        assert_eq!(err.to_string(), "Key not found in --local git config: no.such");
    }

    #[test]
    fn test_first_and_last() {
        let v = values(&["a", "b", "c"]);
        assert_eq!(v.first(), "a");
        assert_eq!(v.last(), "c");
        assert_eq!(v.len(), 3);
        assert!(!v.is_empty());
    }

    #[test]
    fn test_duplicates_preserved() {
        let v = values(&["x", "x", "y"]);
        assert_eq!(v.into_vec(), vec!["x", "x", "y"]);
    }

    #[test]
    fn test_into_last() {
        assert_eq!(values(&["one", "two"]).into_last(), "two");
    }

    #[test]
    fn test_as_bool() {
        assert!(values(&["true"]).as_bool());
        assert!(!values(&["false"]).as_bool());
        // the first value decides, matching git's own --bool output order
        assert!(values(&["true", "false"]).as_bool());
    }

    #[test]
    fn test_as_i64() {
        assert_eq!(values(&["6700"]).as_i64("gc.auto").unwrap(), 6700);
        assert_eq!(values(&["-5", "7"]).as_i64("gc.auto").unwrap(), -5);
    }

    #[test]
    fn test_as_i64_invalid() {
        let err = values(&["1k"]).as_i64("gc.auto").unwrap_err();
        assert!(err.is_adapter_failure());
        assert!(matches!(err, GitConfigError::InvalidInteger { .. }));
    }

    #[test]
    fn test_type_hint_flags() {
        assert_eq!(TypeHint::None.flag(), None);
        assert_eq!(TypeHint::Bool.flag(), Some("--bool"));
        assert_eq!(TypeHint::Int.flag(), Some("--int"));
        assert_eq!(TypeHint::Path.flag(), Some("--path"));
        assert_eq!(TypeHint::default(), TypeHint::None);
        assert_eq!(TypeHint::Path.to_string(), "--path");
    }
}
