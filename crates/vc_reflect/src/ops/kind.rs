use crate::Reflect;
use crate::info::ReflectKind;
use crate::ops::{Dynamic, List, Map, Pointer, Struct};

// -----------------------------------------------------------------------------
// ReflectRef

/// An immutable enumeration of "kinds" of a reflected type.
///
/// Obtained through [`Reflect::reflect_ref`].
#[derive(Clone, Copy)]
pub enum ReflectRef<'a> {
    Opaque(&'a dyn Reflect),
    Pointer(&'a dyn Pointer),
    List(&'a dyn List),
    Map(&'a dyn Map),
    Struct(&'a dyn Struct),
    Dynamic(&'a Dynamic),
}

// -----------------------------------------------------------------------------
// ReflectMut

/// A mutable enumeration of "kinds" of a reflected type.
///
/// Obtained through [`Reflect::reflect_mut`].
pub enum ReflectMut<'a> {
    Opaque(&'a mut dyn Reflect),
    Pointer(&'a mut dyn Pointer),
    List(&'a mut dyn List),
    Map(&'a mut dyn Map),
    Struct(&'a mut dyn Struct),
    Dynamic(&'a mut Dynamic),
}

macro_rules! impl_kind_fn {
    () => {
        /// Returns the [`ReflectKind`] of the view.
        pub const fn kind(&self) -> ReflectKind {
            match self {
                Self::Opaque(_) => ReflectKind::Opaque,
                Self::Pointer(_) => ReflectKind::Pointer,
                Self::List(_) => ReflectKind::List,
                Self::Map(_) => ReflectKind::Map,
                Self::Struct(_) => ReflectKind::Struct,
                Self::Dynamic(_) => ReflectKind::Dynamic,
            }
        }
    };
}

macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $ret:ty) => {
        /// Converts the view into the specific kind, if it matches.
        #[inline]
        pub fn $name(self) -> Option<$ret> {
            match self {
                Self::$kind(value) => Some(value),
                _ => None,
            }
        }
    };
}

impl<'a> ReflectRef<'a> {
    impl_kind_fn!();

    impl_cast_method!(into_pointer: Pointer => &'a dyn Pointer);
    impl_cast_method!(into_list: List => &'a dyn List);
    impl_cast_method!(into_map: Map => &'a dyn Map);
    impl_cast_method!(into_struct: Struct => &'a dyn Struct);
    impl_cast_method!(into_dynamic: Dynamic => &'a Dynamic);

    /// Drops the kind information, returning the underlying value.
    pub fn into_reflect(self) -> &'a dyn Reflect {
        match self {
            Self::Opaque(value) => value,
            Self::Pointer(value) => value,
            Self::List(value) => value,
            Self::Map(value) => value,
            Self::Struct(value) => value,
            Self::Dynamic(value) => value,
        }
    }
}

impl<'a> ReflectMut<'a> {
    impl_kind_fn!();

    impl_cast_method!(into_pointer: Pointer => &'a mut dyn Pointer);
    impl_cast_method!(into_list: List => &'a mut dyn List);
    impl_cast_method!(into_map: Map => &'a mut dyn Map);
    impl_cast_method!(into_struct: Struct => &'a mut dyn Struct);
    impl_cast_method!(into_dynamic: Dynamic => &'a mut Dynamic);

    /// Drops the kind information, returning the underlying value.
    pub fn into_reflect(self) -> &'a mut dyn Reflect {
        match self {
            Self::Opaque(value) => value,
            Self::Pointer(value) => value,
            Self::List(value) => value,
            Self::Map(value) => value,
            Self::Struct(value) => value,
            Self::Dynamic(value) => value,
        }
    }
}
