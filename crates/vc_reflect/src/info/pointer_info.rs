use alloc::boxed::Box;

use crate::Reflect;
use crate::info::{Type, TypeInfo, Typed, default_boxed, impl_default_fn, impl_type_fn};

/// Metadata for indirections like `Option<T>`, `Box<T>` and `Arc<T>`.
///
/// The pointee info is resolved lazily, so self-referential types
/// (e.g. `struct Node { next: Option<Box<Node>> }`) are supported.
#[derive(Debug)]
pub struct PointerInfo {
    ty: Type,
    pointee: fn() -> &'static TypeInfo,
    nullable: bool,
    default: fn() -> Box<dyn Reflect>,
}

impl PointerInfo {
    impl_type_fn!(ty);
    impl_default_fn!(default);

    /// Create a new [`PointerInfo`] for `T` pointing at `P`.
    ///
    /// `nullable` is `true` for pointers whose default is null (`Option`).
    #[inline]
    pub fn new<T: Reflect + Default, P: Typed>(nullable: bool) -> Self {
        Self {
            ty: Type::of::<T>(),
            pointee: P::type_info,
            nullable,
            default: default_boxed::<T>,
        }
    }

    /// Returns the [`TypeInfo`] of the pointee.
    #[inline]
    pub fn pointee(&self) -> &'static TypeInfo {
        (self.pointee)()
    }

    /// Returns `true` if the pointer can be null.
    #[inline]
    pub const fn is_nullable(&self) -> bool {
        self.nullable
    }
}
