use alloc::boxed::Box;

use crate::Reflect;
use crate::info::{Type, default_boxed, impl_default_fn, impl_type_fn};

// -----------------------------------------------------------------------------
// ScalarKind

/// Classifies leaf values by how they may be converted into each other.
///
/// Numbers of any width and signedness convert between each other with
/// `as`-cast semantics. `Bool`, `Char` and `Str` only accept themselves,
/// and `Other` (user opaque types) never converts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Bool,
    Signed,
    Unsigned,
    Float,
    Char,
    Str,
    Other,
}

impl ScalarKind {
    /// Returns `true` for integer and floating-point kinds.
    #[inline]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Signed | Self::Unsigned | Self::Float)
    }

    /// Returns `true` if a value of this kind can be converted to `other`.
    ///
    /// ```
    /// use vc_reflect::info::ScalarKind;
    ///
    /// assert!(ScalarKind::Signed.converts_to(ScalarKind::Float));
    /// assert!(ScalarKind::Str.converts_to(ScalarKind::Str));
    /// assert!(!ScalarKind::Bool.converts_to(ScalarKind::Unsigned));
    /// assert!(!ScalarKind::Other.converts_to(ScalarKind::Other));
    /// ```
    pub const fn converts_to(self, other: ScalarKind) -> bool {
        match (self, other) {
            (Self::Other, _) | (_, Self::Other) => false,
            (Self::Bool, Self::Bool) | (Self::Char, Self::Char) | (Self::Str, Self::Str) => true,
            _ => self.is_numeric() && other.is_numeric(),
        }
    }
}

// -----------------------------------------------------------------------------
// OpaqueInfo

/// Metadata for types whose internals are opaque to the reflection system.
///
/// Primitive types like `u64`, `String`, and user types marked
/// `#[reflect(opaque)]` are opaque.
#[derive(Debug)]
pub struct OpaqueInfo {
    ty: Type,
    scalar: ScalarKind,
    default: fn() -> Box<dyn Reflect>,
}

impl OpaqueInfo {
    impl_type_fn!(ty);
    impl_default_fn!(default);

    /// Create a new [`OpaqueInfo`].
    #[inline]
    pub fn new<T: Reflect + Default>(scalar: ScalarKind) -> Self {
        Self {
            ty: Type::of::<T>(),
            scalar,
            default: default_boxed::<T>,
        }
    }

    /// Returns the [`ScalarKind`] of the type.
    #[inline]
    pub const fn scalar(&self) -> ScalarKind {
        self.scalar
    }
}
