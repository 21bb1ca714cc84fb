// SPDX-License-Identifier: MIT OR Apache-2.0

//! Query runner trait definition.
//!
//! This module defines the `ConfigRunner` trait, the port through which the
//! reader talks to the configuration store. The real implementation spawns
//! `git`; tests substitute in-memory runners.

use crate::domain::{Query, RawValues, Result};

/// Executes git config queries.
///
/// Implementations must report an absent key as
/// [`GitConfigError::KeyNotFound`](crate::domain::GitConfigError::KeyNotFound)
/// (see [`Query::key_not_found`]) and every other failure as one of the
/// adapter-failure variants. A successful answer is never empty.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so that one reader can be shared
/// between threads.
///
/// # Examples
///
/// ```rust
/// use gitcfg::domain::{Query, RawValues, Result};
/// use gitcfg::ports::ConfigRunner;
///
/// struct Fixed;
///
/// impl ConfigRunner for Fixed {
///     fn name(&self) -> &str {
///         "fixed"
///     }
///
///     fn run(&self, query: &Query<'_>) -> Result<RawValues> {
///         match query.key {
///             "user.name" => Ok(RawValues::new(vec!["Ada".to_string()]).unwrap()),
///             _ => Err(query.key_not_found()),
///         }
///     }
/// }
/// ```
pub trait ConfigRunner: Send + Sync {
    /// Short name for logs, e.g. `"git"`.
    fn name(&self) -> &str;

    /// Runs one query and returns the values in declaration order.
    fn run(&self, query: &Query<'_>) -> Result<RawValues>;
}

impl<R: ConfigRunner + ?Sized> ConfigRunner for &R {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn run(&self, query: &Query<'_>) -> Result<RawValues> {
        (**self).run(query)
    }
}

impl<R: ConfigRunner + ?Sized> ConfigRunner for Box<R> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn run(&self, query: &Query<'_>) -> Result<RawValues> {
        (**self).run(query)
    }
}
