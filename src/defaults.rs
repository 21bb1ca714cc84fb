// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shortcuts that read the default source through `git`.
//!
//! Each function is equivalent to calling the same method on
//! `GitConfig::default()`.

use crate::domain::Result;
use crate::service::{GitConfig, GitConfigRecord};
use once_cell::sync::Lazy;

static DEFAULT: Lazy<GitConfig> = Lazy::new(GitConfig::default);

/// The shared reader for the default (merged) source.
pub fn default_config() -> &'static GitConfig {
    &DEFAULT
}

/// Shortcut for `GitConfig::default().get_string(key)`.
pub fn get_string(key: &str) -> Result<String> {
    DEFAULT.get_string(key)
}

/// Shortcut for `GitConfig::default().get_strings(key)`.
pub fn get_strings(key: &str) -> Result<Vec<String>> {
    DEFAULT.get_strings(key)
}

/// Shortcut for `GitConfig::default().get_path(key)`.
pub fn get_path(key: &str) -> Result<String> {
    DEFAULT.get_path(key)
}

/// Shortcut for `GitConfig::default().get_paths(key)`.
pub fn get_paths(key: &str) -> Result<Vec<String>> {
    DEFAULT.get_paths(key)
}

/// Shortcut for `GitConfig::default().get_bool(key)`.
pub fn get_bool(key: &str) -> Result<bool> {
    DEFAULT.get_bool(key)
}

/// Shortcut for `GitConfig::default().get_int64(key)`.
pub fn get_int64(key: &str) -> Result<i64> {
    DEFAULT.get_int64(key)
}

/// Shortcut for `GitConfig::default().load(target)`.
pub fn load<T: GitConfigRecord>(target: &mut T) -> Result<()> {
    DEFAULT.load(target)
}
