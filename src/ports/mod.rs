// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! The reader depends only on [`ConfigRunner`]; adapters in the adapters layer
//! implement it.

pub mod runner;

pub use runner::ConfigRunner;
