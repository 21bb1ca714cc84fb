// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing query runner implementations.
//!
//! Concrete implementations of the [`ConfigRunner`](crate::ports::ConfigRunner)
//! port.

pub mod git_command;

pub use git_command::{split_nul_terminated, GitCommand};
