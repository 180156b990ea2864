use core::any::TypeId;

use crate::info::{TypeInfo, Typed};

/// A named field of a reflected struct.
///
/// Besides the name and type, a field carries its string tags
/// (`#[reflect(tag(key = "value"))]`), whether it is an embedded
/// struct whose fields are promoted into the parent, and whether it
/// is publicly visible.
///
/// ```
/// use vc_reflect::info::NamedField;
///
/// let field = NamedField::new::<String>("name")
///     .with_tags(&[("copier", "must")])
///     .with_public(true);
///
/// assert_eq!(field.name(), "name");
/// assert_eq!(field.tag("copier"), Some("must"));
/// assert_eq!(field.tag("json"), None);
/// assert!(field.type_info().type_is::<String>());
/// ```
#[derive(Debug, Clone)]
pub struct NamedField {
    name: &'static str,
    ty_id: TypeId,
    type_info: fn() -> &'static TypeInfo,
    tags: &'static [(&'static str, &'static str)],
    embedded: bool,
    public: bool,
}

impl NamedField {
    /// Create a new [`NamedField`] of type `T`.
    #[inline]
    pub fn new<T: Typed>(name: &'static str) -> Self {
        Self {
            name,
            ty_id: TypeId::of::<T>(),
            type_info: T::type_info,
            tags: &[],
            embedded: false,
            public: false,
        }
    }

    /// Replaces the tags of the field.
    #[inline]
    pub fn with_tags(self, tags: &'static [(&'static str, &'static str)]) -> Self {
        Self { tags, ..self }
    }

    /// Marks the field as embedded.
    #[inline]
    pub fn with_embedded(self, embedded: bool) -> Self {
        Self { embedded, ..self }
    }

    /// Marks the field as publicly visible.
    #[inline]
    pub fn with_public(self, public: bool) -> Self {
        Self { public, ..self }
    }

    /// Returns the field name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the [`TypeId`] of the field type.
    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    /// Returns the [`TypeInfo`] of the field type.
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }

    /// Returns all tags of the field.
    #[inline]
    pub const fn tags(&self) -> &'static [(&'static str, &'static str)] {
        self.tags
    }

    /// Returns the value of the tag `key`, if present.
    pub fn tag(&self, key: &str) -> Option<&'static str> {
        self.tags.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
    }

    /// Returns `true` if the field is embedded.
    #[inline]
    pub const fn is_embedded(&self) -> bool {
        self.embedded
    }

    /// Returns `true` if the field is publicly visible.
    #[inline]
    pub const fn is_public(&self) -> bool {
        self.public
    }
}
