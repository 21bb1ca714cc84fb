// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer: the typed reader and the struct loader built on it.

pub mod loader;
pub mod reader;

// Re-export commonly used types
pub use loader::{
    Annotation, FieldAccessor, FieldDescriptor, FieldRef, GitConfigRecord, IntRef, Schema,
};
pub use reader::GitConfig;
