use alloc::boxed::Box;
use core::{error, fmt};

use crate::Reflect;
use crate::info::{DynamicInfo, ListInfo, MapInfo};
use crate::info::{OpaqueInfo, PointerInfo, StructInfo, Type};

// -----------------------------------------------------------------------------
// ReflectKind

/// An enumeration of the "kinds" of a reflected type.
///
/// Each kind corresponds to a specific view in [`ReflectRef`] and
/// [`ReflectMut`].
///
/// [`ReflectRef`]: crate::ops::ReflectRef
/// [`ReflectMut`]: crate::ops::ReflectMut
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    Opaque,
    Pointer,
    List,
    Map,
    Struct,
    Dynamic,
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Opaque => f.pad("Opaque"),
            Self::Pointer => f.pad("Pointer"),
            Self::List => f.pad("List"),
            Self::Map => f.pad("Map"),
            Self::Struct => f.pad("Struct"),
            Self::Dynamic => f.pad("Dynamic"),
        }
    }
}

/// Error returned when a `TypeInfo` value is not the expected `ReflectKind`.
#[derive(Debug)]
pub struct ReflectKindError {
    pub expected: ReflectKind,
    pub received: ReflectKind,
}

impl fmt::Display for ReflectKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "reflect kind mismatch: expected {}, received {}",
            self.expected, self.received
        )
    }
}

impl error::Error for ReflectKindError {}

// -----------------------------------------------------------------------------
// TypeInfo

/// Compile-time shape information of a reflected type.
///
/// Obtained through [`Typed::type_info`] when the type is known statically,
/// or [`DynamicTyped::reflect_type_info`] from a `dyn Reflect`.
///
/// Every variant can build a fresh default value of its type through
/// [`TypeInfo::new_default`], which is how containers grow and how nil
/// pointers are allocated.
///
/// [`Typed::type_info`]: crate::info::Typed::type_info
/// [`DynamicTyped::reflect_type_info`]: crate::info::DynamicTyped::reflect_type_info
#[derive(Debug)]
pub enum TypeInfo {
    Opaque(OpaqueInfo),
    Pointer(PointerInfo),
    List(ListInfo),
    Map(MapInfo),
    Struct(StructInfo),
    Dynamic(DynamicInfo),
}

// Helper macro that implements type-safe accessor methods like `as_struct`.
macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $info:ident) => {
        /// Convert [`TypeInfo`] to specific type information.
        pub const fn $name(&self) -> Result<&$info, ReflectKindError> {
            match self {
                Self::$kind(info) => Ok(info),
                _ => Err(ReflectKindError {
                    expected: ReflectKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

macro_rules! impl_is_method {
    ($name:ident : $kind:ident) => {
        /// Check infomation kind, can be used in const function.
        #[inline]
        pub const fn $name(&self) -> bool {
            matches!(self, Self::$kind(..))
        }
    };
}

impl TypeInfo {
    impl_cast_method!(as_opaque: Opaque => OpaqueInfo);
    impl_cast_method!(as_pointer: Pointer => PointerInfo);
    impl_cast_method!(as_list: List => ListInfo);
    impl_cast_method!(as_map: Map => MapInfo);
    impl_cast_method!(as_struct: Struct => StructInfo);
    impl_cast_method!(as_dynamic: Dynamic => DynamicInfo);

    impl_is_method!(is_opaque: Opaque);
    impl_is_method!(is_pointer: Pointer);
    impl_is_method!(is_list: List);
    impl_is_method!(is_map: Map);
    impl_is_method!(is_struct: Struct);
    impl_is_method!(is_dynamic: Dynamic);

    /// Returns the underlying [`Type`] metadata for this `TypeInfo`.
    pub const fn ty(&self) -> &Type {
        match self {
            Self::Opaque(info) => info.ty(),
            Self::Pointer(info) => info.ty(),
            Self::List(info) => info.ty(),
            Self::Map(info) => info.ty(),
            Self::Struct(info) => info.ty(),
            Self::Dynamic(info) => info.ty(),
        }
    }

    crate::info::impl_type_fn!();

    /// Returns the [`ReflectKind`] for this `TypeInfo`.
    ///
    /// # Examples
    ///
    /// ```
    /// use vc_reflect::info::{Typed, ReflectKind};
    ///
    /// assert_eq!(i32::type_info().kind(), ReflectKind::Opaque);
    /// assert_eq!(<Option<i32>>::type_info().kind(), ReflectKind::Pointer);
    /// ```
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

    /// Creates the default value of this type.
    ///
    /// ```
    /// use vc_reflect::info::Typed;
    ///
    /// let v = <Vec<u8>>::type_info().new_default();
    /// assert_eq!(v.downcast_ref::<Vec<u8>>(), Some(&Vec::new()));
    /// ```
    pub fn new_default(&self) -> Box<dyn Reflect> {
        match self {
            Self::Opaque(info) => info.new_default(),
            Self::Pointer(info) => info.new_default(),
            Self::List(info) => info.new_default(),
            Self::Map(info) => info.new_default(),
            Self::Struct(info) => info.new_default(),
            Self::Dynamic(info) => info.new_default(),
        }
    }

    /// Follows pointer types down to the first non-pointer type.
    ///
    /// ```
    /// use vc_reflect::info::Typed;
    ///
    /// let info = <Option<Box<u8>>>::type_info().base();
    /// assert!(info.type_is::<u8>());
    /// ```
    pub fn base(&'static self) -> &'static TypeInfo {
        let mut info = self;
        while let Self::Pointer(pointer) = info {
            info = pointer.pointee();
        }
        info
    }
}

/// Implement `new_default` for an info struct holding a `default` constructor.
macro_rules! impl_default_fn {
    ($field:ident) => {
        /// Creates the default value of this type.
        #[inline]
        pub fn new_default(&self) -> ::alloc::boxed::Box<dyn $crate::Reflect> {
            (self.$field)()
        }
    };
}

pub(crate) use impl_default_fn;
