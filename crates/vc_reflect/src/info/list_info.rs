use alloc::boxed::Box;

use crate::Reflect;
use crate::info::{Type, TypeInfo, Typed, default_boxed, impl_default_fn, impl_type_fn};

/// Metadata for list-like types such as `Vec<T>`.
#[derive(Debug)]
pub struct ListInfo {
    ty: Type,
    item: fn() -> &'static TypeInfo,
    default: fn() -> Box<dyn Reflect>,
}

impl ListInfo {
    impl_type_fn!(ty);
    impl_default_fn!(default);

    /// Create a new [`ListInfo`] for `T` with items of type `I`.
    #[inline]
    pub fn new<T: Reflect + Default, I: Typed>() -> Self {
        Self {
            ty: Type::of::<T>(),
            item: I::type_info,
            default: default_boxed::<T>,
        }
    }

    /// Returns the [`TypeInfo`] of the items.
    #[inline]
    pub fn item(&self) -> &'static TypeInfo {
        (self.item)()
    }
}
