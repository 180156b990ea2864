use alloc::boxed::Box;

use crate::Reflect;
use crate::info::{Type, default_boxed, impl_default_fn, impl_type_fn};

/// Metadata for a slot that may hold a value of any type.
///
/// The default value is the empty slot.
#[derive(Debug)]
pub struct DynamicInfo {
    ty: Type,
    default: fn() -> Box<dyn Reflect>,
}

impl DynamicInfo {
    impl_type_fn!(ty);
    impl_default_fn!(default);

    /// Create a new [`DynamicInfo`].
    #[inline]
    pub fn new<T: Reflect + Default>() -> Self {
        Self {
            ty: Type::of::<T>(),
            default: default_boxed::<T>,
        }
    }
}
