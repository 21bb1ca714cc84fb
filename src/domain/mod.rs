// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing the core value types.
//!
//! Sources, queries and their raw results, and the error taxonomy shared by
//! the reader, the loader and the adapters. Nothing here performs I/O.

pub mod errors;
pub mod query;
pub mod source;

// Re-export commonly used types
pub use errors::{is_key_not_found, GitConfigError, LoadErrors, Result};
pub use query::{Query, RawValues, TypeHint};
pub use source::Source;
