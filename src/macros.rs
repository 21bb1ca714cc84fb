// SPDX-License-Identifier: MIT OR Apache-2.0

//! Declarative schema macro.

/// Implements [`GitConfigRecord`](crate::GitConfigRecord) for a struct by
/// listing its annotated fields.
///
/// Each entry is `field: "annotation"`, where the annotation has the form
/// `key[,option...]`. Fields that are not listed are not managed by the
/// loader. Every listed field must have a supported type (`String`, a signed
/// integer, `bool`, `Vec<String>` or `[String; N]`); describe other fields by
/// hand with [`FieldRef::unsupported`](crate::FieldRef::unsupported).
///
/// # Examples
///
/// ```rust
/// use gitcfg::{gitconfig_schema, GitConfigRecord};
///
/// #[derive(Default)]
/// struct Submodule {
///     path: String,
///     url: String,
///     shallow: bool,
/// }
///
/// gitconfig_schema!(Submodule {
///     path: "submodule.vendor.path",
///     url: "submodule.vendor.url",
///     shallow: "submodule.vendor.shallow",
/// });
///
/// let schema = Submodule::schema();
/// assert_eq!(schema.fields()[1].name(), "url");
/// assert_eq!(schema.fields()[1].annotation().unwrap().key(), "submodule.vendor.url");
/// ```
#[macro_export]
macro_rules! gitconfig_schema {
    ($record:ty { $($field:ident : $tag:literal),* $(,)? }) => {
        impl $crate::GitConfigRecord for $record {
            fn schema() -> $crate::Schema<Self> {
                $crate::Schema::<Self>::new()
                    $(
                        .field(stringify!($field), $tag, |record| {
                            $crate::FieldRef::from(&mut record.$field)
                        })
                    )*
            }
        }
    };
}
