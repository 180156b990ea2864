use alloc::boxed::Box;

use crate::Reflect;
use crate::info::{Type, TypeInfo, Typed, default_boxed, impl_default_fn, impl_type_fn};

/// Metadata for map-like types such as `HashMap<K, V>` and `BTreeMap<K, V>`.
#[derive(Debug)]
pub struct MapInfo {
    ty: Type,
    key: fn() -> &'static TypeInfo,
    value: fn() -> &'static TypeInfo,
    default: fn() -> Box<dyn Reflect>,
}

impl MapInfo {
    impl_type_fn!(ty);
    impl_default_fn!(default);

    /// Create a new [`MapInfo`] for `T` with keys `K` and values `V`.
    #[inline]
    pub fn new<T: Reflect + Default, K: Typed, V: Typed>() -> Self {
        Self {
            ty: Type::of::<T>(),
            key: K::type_info,
            value: V::type_info,
            default: default_boxed::<T>,
        }
    }

    /// Returns the [`TypeInfo`] of the keys.
    #[inline]
    pub fn key(&self) -> &'static TypeInfo {
        (self.key)()
    }

    /// Returns the [`TypeInfo`] of the values.
    #[inline]
    pub fn value(&self) -> &'static TypeInfo {
        (self.value)()
    }
}
