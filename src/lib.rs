// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed access to `git config`, and declarative loading of git config
//! values into structs.
//!
//! This crate reads settings through the `git` executable, so the store's own
//! file merging, precedence rules, boolean spellings, integer suffixes and `~`
//! expansion apply unchanged.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: `Source`, `Query`, `RawValues`, `TypeHint` and errors
//! - **Ports**: the `ConfigRunner` trait that executes one query
//! - **Adapters**: `GitCommand`, which runs `git config --get-all --null`
//! - **Service**: the typed reader `GitConfig` and the struct loader
//!
//! # Sources
//!
//! | Reader                   | `git config` flags |
//! |--------------------------|--------------------|
//! | `GitConfig::default()`   | (none)             |
//! | `GitConfig::global()`    | `--global`         |
//! | `GitConfig::local()`     | `--local`          |
//! | `GitConfig::file(path)`  | `--file <path>`    |
//! | `GitConfig::blob(rev)`   | `--blob <rev>`     |
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use gitcfg::prelude::*;
//!
//! #[derive(Debug, Default)]
//! struct Settings {
//!     user_email: String,
//!     pull_rebase: bool,
//!     gc_auto: i32,
//! }
//!
//! gitconfig_schema!(Settings {
//!     user_email: "user.email",
//!     pull_rebase: "pull.rebase",
//!     gc_auto: "gc.auto",
//! });
//!
//! # fn main() -> Result<()> {
//! let name = GitConfig::global().get_string("user.name")?;
//!
//! let mut settings = Settings::default();
//! match GitConfig::default().load(&mut settings) {
//!     Ok(()) => {}
//!     Err(GitConfigError::Load(errors)) => {
//!         // missing keys keep their defaults
//!         for (field, err) in errors.iter().filter(|(_, e)| !e.is_key_not_found()) {
//!             eprintln!("{}: {}", field, err);
//!         }
//!     }
//!     Err(err) => return Err(err),
//! }
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

mod macros;

pub mod adapters;
pub mod defaults;
pub mod domain;
pub mod ports;
pub mod service;

pub use domain::{is_key_not_found, GitConfigError, LoadErrors, Source, TypeHint};
pub use service::{FieldRef, GitConfig, GitConfigRecord, Schema};

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::GitCommand;
    pub use crate::domain::{
        is_key_not_found, GitConfigError, LoadErrors, Query, RawValues, Result, Source, TypeHint,
    };
    pub use crate::gitconfig_schema;
    pub use crate::ports::ConfigRunner;
    pub use crate::service::{FieldRef, GitConfig, GitConfigRecord, Schema};
}
