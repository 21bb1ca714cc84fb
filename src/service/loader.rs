// SPDX-License-Identifier: MIT OR Apache-2.0

//! Declarative loading of git config values into structs.
//!
//! A record type describes its fields once, as a [`Schema`]: for every field a
//! name, an optional annotation of the form `key[,option...]`, and an accessor
//! returning a [`FieldRef`] to the field. [`GitConfig::load`] walks the schema
//! in declaration order, fetches each annotated field with the accessor that
//! matches its kind, and collects one error per failing field.
//!
//! ```rust
//! use gitcfg::{gitconfig_schema, GitConfigRecord};
//!
//! #[derive(Debug, Default)]
//! struct Settings {
//!     user_email: String,
//!     gc_auto: i32,
//!     pull_rebase: bool,
//!     ghq_roots: Vec<String>,
//! }
//!
//! gitconfig_schema!(Settings {
//!     user_email: "user.email",
//!     gc_auto: "gc.auto",
//!     pull_rebase: "pull.rebase",
//!     ghq_roots: "ghq.root",
//! });
//!
//! assert_eq!(Settings::schema().fields().len(), 4);
//! ```

use crate::domain::{GitConfigError, LoadErrors, Result};
use crate::ports::ConfigRunner;
use crate::service::reader::GitConfig;
use std::collections::HashSet;
use std::fmt;

/// A struct whose fields can be populated from git config.
pub trait GitConfigRecord: Sized {
    /// Describes the fields of the record in declaration order.
    fn schema() -> Schema<Self>;
}

/// Returns a mutable view of one field of `T`.
pub type FieldAccessor<T> = for<'a> fn(&'a mut T) -> FieldRef<'a>;

/// A mutable reference to a field, classified by kind.
///
/// Build one with `FieldRef::from(&mut record.field)` for supported types, or
/// with [`FieldRef::unsupported`] for any other type. Unsupported fields that
/// carry an annotation fail to load instead of being skipped.
pub enum FieldRef<'a> {
    /// A `String` field, loaded from the last value.
    String(&'a mut String),
    /// A signed integer field, loaded with `--int`.
    Int(IntRef<'a>),
    /// A `bool` field, loaded with `--bool`.
    Bool(&'a mut bool),
    /// A `Vec<String>` field, loaded with all values.
    Strings(&'a mut Vec<String>),
    /// A `[String; N]` field, filled element-wise from all values.
    Array(&'a mut [String]),
    /// Any other type.
    Unsupported {
        /// The Rust type name of the field
        type_name: &'static str,
    },
}

impl<'a> FieldRef<'a> {
    /// Classifies a field whose type cannot be loaded.
    pub fn unsupported<T: ?Sized>(_field: &'a mut T) -> Self {
        FieldRef::Unsupported {
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Short name of the kind, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            FieldRef::String(_) => "string",
            FieldRef::Int(_) => "integer",
            FieldRef::Bool(_) => "bool",
            FieldRef::Strings(_) => "string list",
            FieldRef::Array(_) => "string array",
            FieldRef::Unsupported { .. } => "unsupported",
        }
    }
}

impl fmt::Debug for FieldRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldRef::Unsupported { type_name } => write!(f, "Unsupported({})", type_name),
            other => write!(f, "{}", other.kind()),
        }
    }
}

impl<'a> From<&'a mut String> for FieldRef<'a> {
    fn from(field: &'a mut String) -> Self {
        FieldRef::String(field)
    }
}

impl<'a> From<&'a mut bool> for FieldRef<'a> {
    fn from(field: &'a mut bool) -> Self {
        FieldRef::Bool(field)
    }
}

impl<'a> From<&'a mut Vec<String>> for FieldRef<'a> {
    fn from(field: &'a mut Vec<String>) -> Self {
        FieldRef::Strings(field)
    }
}

impl<'a, const N: usize> From<&'a mut [String; N]> for FieldRef<'a> {
    fn from(field: &'a mut [String; N]) -> Self {
        FieldRef::Array(field)
    }
}

/// A mutable reference to a signed integer field of any width.
#[derive(Debug)]
pub enum IntRef<'a> {
    /// `i8`
    I8(&'a mut i8),
    /// `i16`
    I16(&'a mut i16),
    /// `i32`
    I32(&'a mut i32),
    /// `i64`
    I64(&'a mut i64),
    /// `isize`
    Isize(&'a mut isize),
}

impl IntRef<'_> {
    /// Stores `value`, failing if it does not fit the field's width.
    ///
    /// The field is left untouched on overflow.
    pub fn assign(self, key: &str, value: i64) -> Result<()> {
        fn narrow<T: TryFrom<i64>>(key: &str, value: i64) -> Result<T> {
            T::try_from(value).map_err(|_| GitConfigError::IntegerOverflow {
                key: key.to_string(),
                value,
                target_type: std::any::type_name::<T>(),
            })
        }

        match self {
            IntRef::I8(field) => *field = narrow(key, value)?,
            IntRef::I16(field) => *field = narrow(key, value)?,
            IntRef::I32(field) => *field = narrow(key, value)?,
            IntRef::I64(field) => *field = value,
            IntRef::Isize(field) => *field = narrow(key, value)?,
        }
        Ok(())
    }
}

macro_rules! int_field_ref {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl<'a> From<&'a mut $ty> for FieldRef<'a> {
                fn from(field: &'a mut $ty) -> Self {
                    FieldRef::Int(IntRef::$variant(field))
                }
            }
        )*
    };
}

int_field_ref!(i8 => I8, i16 => I16, i32 => I32, i64 => I64, isize => Isize);

/// A parsed field annotation: `key[,option...]`.
///
/// Only the key is interpreted; options are kept but have no effect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Annotation {
    key: String,
    options: Vec<String>,
}

impl Annotation {
    /// Parses an annotation. An empty annotation or an empty key yields `None`,
    /// which leaves the field unmanaged.
    ///
    /// ```
    /// use gitcfg::service::loader::Annotation;
    ///
    /// let tag = Annotation::parse("user.email,required").unwrap();
    /// assert_eq!(tag.key(), "user.email");
    /// assert_eq!(tag.options(), ["required"]);
    /// assert!(Annotation::parse("").is_none());
    /// ```
    pub fn parse(tag: &str) -> Option<Self> {
        let mut parts = tag.split(',');
        let key = parts.next().unwrap_or_default();
        if key.is_empty() {
            return None;
        }
        Some(Self {
            key: key.to_string(),
            options: parts.map(str::to_string).collect(),
        })
    }

    /// The git config key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Reserved options following the key.
    pub fn options(&self) -> &[String] {
        &self.options
    }
}

/// Metadata for one field of a record.
pub struct FieldDescriptor<T> {
    name: String,
    annotation: Option<Annotation>,
    access: FieldAccessor<T>,
}

impl<T> FieldDescriptor<T> {
    /// The field name used to key load errors.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The parsed annotation, or `None` if the loader skips this field.
    pub fn annotation(&self) -> Option<&Annotation> {
        self.annotation.as_ref()
    }

    /// Returns the classified field of `record`.
    pub fn access<'a>(&self, record: &'a mut T) -> FieldRef<'a> {
        (self.access)(record)
    }
}

impl<T> fmt::Debug for FieldDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("annotation", &self.annotation)
            .finish()
    }
}

/// The field descriptor table of a record type, in declaration order.
///
/// # Examples
///
/// ```rust
/// use gitcfg::{FieldRef, Schema};
///
/// #[derive(Default)]
/// struct Remote {
///     url: String,
///     fetch: Vec<String>,
///     cached: bool,
/// }
///
/// let schema = Schema::<Remote>::new()
///     .field("url", "remote.origin.url", |r| FieldRef::from(&mut r.url))
///     .field("fetch", "remote.origin.fetch", |r| FieldRef::from(&mut r.fetch))
///     .untagged("cached", |r| FieldRef::from(&mut r.cached));
///
/// assert_eq!(schema.fields().len(), 3);
/// assert!(schema.fields()[2].annotation().is_none());
/// ```
pub struct Schema<T> {
    fields: Vec<FieldDescriptor<T>>,
}

impl<T> Schema<T> {
    /// Creates an empty schema.
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Adds a field loaded from the key in `annotation`.
    pub fn field(
        mut self,
        name: impl Into<String>,
        annotation: &str,
        access: FieldAccessor<T>,
    ) -> Self {
        self.fields.push(FieldDescriptor {
            name: name.into(),
            annotation: Annotation::parse(annotation),
            access,
        });
        self
    }

    /// Adds a field the loader leaves alone.
    pub fn untagged(mut self, name: impl Into<String>, access: FieldAccessor<T>) -> Self {
        self.fields.push(FieldDescriptor {
            name: name.into(),
            annotation: None,
            access,
        });
        self
    }

    /// The descriptors in declaration order.
    pub fn fields(&self) -> &[FieldDescriptor<T>] {
        &self.fields
    }

    /// Checks that every field name is unique, since load errors are keyed by it.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for field in &self.fields {
            if !seen.insert(field.name.as_str()) {
                return Err(GitConfigError::Precondition {
                    target: std::any::type_name::<T>(),
                    message: format!("field '{}' is described more than once", field.name),
                });
            }
        }
        Ok(())
    }
}

impl<T> Default for Schema<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Schema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.fields).finish()
    }
}

impl<R: ConfigRunner> GitConfig<R> {
    /// Loads git config values into the annotated fields of `target`.
    ///
    /// Fields are processed in declaration order. A failing field never stops
    /// the fields after it: its error is recorded under the field name and the
    /// field keeps its previous value. Returns `Ok(())` when no field failed,
    /// [`GitConfigError::Load`] otherwise, and [`GitConfigError::Precondition`]
    /// without touching any field when the schema itself is unusable.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use gitcfg::{gitconfig_schema, GitConfig};
    ///
    /// #[derive(Debug, Default)]
    /// struct Settings {
    ///     user_email: String,
    ///     pull_rebase: bool,
    /// }
    ///
    /// gitconfig_schema!(Settings {
    ///     user_email: "user.email",
    ///     pull_rebase: "pull.rebase",
    /// });
    ///
    /// let mut settings = Settings::default();
    /// if let Err(err) = GitConfig::default().load(&mut settings) {
    ///     if let Some(errors) = err.as_load_errors() {
    ///         for (field, error) in errors.iter() {
    ///             eprintln!("{}: {}", field, error);
    ///         }
    ///     }
    /// }
    /// ```
    pub fn load<T: GitConfigRecord>(&self, target: &mut T) -> Result<()> {
        let schema = T::schema();
        schema.validate()?;

        let mut failures = Vec::new();
        let mut loaded = 0usize;
        for field in schema.fields() {
            let Some(annotation) = field.annotation() else {
                tracing::trace!("Skipping field '{}' without annotation", field.name());
                continue;
            };

            match self.populate(field.name(), field.access(target), annotation.key()) {
                Ok(()) => loaded += 1,
                Err(e) => failures.push((field.name().to_string(), e)),
            }
        }

        tracing::debug!(
            "Loaded {} field(s) of {} from {} git config, {} failed",
            loaded,
            std::any::type_name::<T>(),
            self.source(),
            failures.len()
        );

        match LoadErrors::from_entries(failures) {
            None => Ok(()),
            Some(errors) => Err(GitConfigError::Load(errors)),
        }
    }

    fn populate(&self, name: &str, field: FieldRef<'_>, key: &str) -> Result<()> {
        match field {
            FieldRef::String(field) => *field = self.get_string(key)?,
            FieldRef::Int(field) => field.assign(key, self.get_int64(key)?)?,
            FieldRef::Bool(field) => *field = self.get_bool(key)?,
            FieldRef::Strings(field) => *field = self.get_strings(key)?,
            FieldRef::Array(slots) => {
                let values = self.get_strings(key)?;
                if values.len() != slots.len() {
                    tracing::debug!(
                        "Key '{}' has {} value(s) for {} slot(s) of field '{}'",
                        key,
                        values.len(),
                        slots.len(),
                        name
                    );
                }
                for (slot, value) in slots.iter_mut().zip(values) {
                    *slot = value;
                }
            }
            FieldRef::Unsupported { type_name } => {
                return Err(GitConfigError::UnsupportedFieldKind {
                    field: name.to_string(),
                    type_name,
                })
            }
        }
        Ok(())
    }
}
