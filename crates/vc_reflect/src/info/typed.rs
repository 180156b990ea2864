use alloc::boxed::Box;

use crate::Reflect;
use crate::info::TypeInfo;

/// A static accessor to compile-time type information.
///
/// Automatically implemented by [the derive macro] and for the types
/// supported out of the box.
///
/// [the derive macro]: crate::derive::Reflect
pub trait Typed: Reflect + Sized {
    /// Returns the compile-time [info] for the underlying type.
    ///
    /// [info]: TypeInfo
    fn type_info() -> &'static TypeInfo;
}

/// Dynamic dispatch for [`Typed`].
///
/// Blanket-implemented for every `Typed` type, do not implement it manually.
pub trait DynamicTyped {
    /// See [`Typed::type_info`].
    fn reflect_type_info(&self) -> &'static TypeInfo;
}

impl<T: Typed> DynamicTyped for T {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        T::type_info()
    }
}

/// Creates a boxed default value of `T`.
///
/// Used as the `default` constructor stored in each [`TypeInfo`].
#[inline]
pub fn default_boxed<T: Reflect + Default>() -> Box<dyn Reflect> {
    Box::new(T::default())
}
