use alloc::boxed::Box;
use alloc::sync::Arc;
use core::fmt;

use crate::Reflect;
use crate::info::{GenericTypeInfoCell, PointerInfo, TypeInfo, Typed};
use crate::ops::Pointer;
use crate::reflection::impl_reflect_cast_fn;

macro_rules! impl_typed_pointer {
    ($ty:ty, $nullable:literal) => {
        impl<T: Typed + Clone + Default> Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| {
                    TypeInfo::Pointer(PointerInfo::new::<Self, T>($nullable))
                })
            }
        }
    };
}

/// Implement the `Reflect` methods shared by pointers, using `Pointer::pointee`.
macro_rules! impl_reflect_pointer {
    () => {
        impl_reflect_cast_fn!(Pointer);

        fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
            *self = value.take::<Self>()?;
            Ok(())
        }

        #[inline]
        fn reflect_clone(&self) -> Box<dyn Reflect> {
            Box::new(self.clone())
        }

        fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match Pointer::pointee(self) {
                Some(value) => f.debug_tuple("Some").field(&value).finish(),
                None => f.write_str("None"),
            }
        }
    };
}

// -----------------------------------------------------------------------------
// Option

impl_typed_pointer!(Option<T>, true);

impl<T: Typed + Clone + Default> Reflect for Option<T> {
    impl_reflect_pointer!();

    #[inline]
    fn is_zero(&self) -> bool {
        self.is_none()
    }
}

impl<T: Typed + Clone + Default> Pointer for Option<T> {
    #[inline]
    fn pointee(&self) -> Option<&dyn Reflect> {
        self.as_ref().map(|value| value as &dyn Reflect)
    }

    #[inline]
    fn pointee_mut(&mut self) -> Option<&mut dyn Reflect> {
        self.as_mut().map(|value| value as &mut dyn Reflect)
    }

    #[inline]
    fn reset(&mut self) {
        *self = None;
    }

    #[inline]
    fn alloc(&mut self) -> &mut dyn Reflect {
        self.get_or_insert_with(T::default)
    }
}

// -----------------------------------------------------------------------------
// Box

impl_typed_pointer!(Box<T>, false);

impl<T: Typed + Clone + Default> Reflect for Box<T> {
    impl_reflect_pointer!();

    // An owning pointer is never null.
    #[inline]
    fn is_zero(&self) -> bool {
        false
    }
}

impl<T: Typed + Clone + Default> Pointer for Box<T> {
    #[inline]
    fn pointee(&self) -> Option<&dyn Reflect> {
        Some(&**self as &dyn Reflect)
    }

    #[inline]
    fn pointee_mut(&mut self) -> Option<&mut dyn Reflect> {
        Some(&mut **self as &mut dyn Reflect)
    }

    #[inline]
    fn reset(&mut self) {
        **self = T::default();
    }

    #[inline]
    fn alloc(&mut self) -> &mut dyn Reflect {
        &mut **self
    }
}

// -----------------------------------------------------------------------------
// Arc

impl_typed_pointer!(Arc<T>, false);

impl<T: Typed + Clone + Default> Reflect for Arc<T> {
    impl_reflect_pointer!();

    #[inline]
    fn is_zero(&self) -> bool {
        false
    }
}

impl<T: Typed + Clone + Default> Pointer for Arc<T> {
    #[inline]
    fn pointee(&self) -> Option<&dyn Reflect> {
        Some(&**self as &dyn Reflect)
    }

    #[inline]
    fn pointee_mut(&mut self) -> Option<&mut dyn Reflect> {
        Some(Arc::make_mut(self) as &mut dyn Reflect)
    }

    #[inline]
    fn reset(&mut self) {
        *self = Arc::new(T::default());
    }

    #[inline]
    fn alloc(&mut self) -> &mut dyn Reflect {
        let value: &mut T = Arc::make_mut(self);
        value
    }
}

#[cfg(test)]
mod tests {
    use alloc::sync::Arc;

    use crate::Reflect;
    use crate::info::Typed;
    use crate::ops::Pointer;

    #[test]
    fn option_alloc_and_reset() {
        let mut ptr: Option<String> = None;
        assert!(ptr.is_zero());
        assert!(ptr.pointee_mut().is_none());

        ptr.alloc().set(Box::new(String::from("a"))).unwrap();
        assert_eq!(ptr.as_deref(), Some("a"));
        assert!(!ptr.is_null());

        ptr.reset();
        assert!(ptr.is_null());
    }

    #[test]
    fn arc_detaches_on_write() {
        let shared = Arc::new(5_u32);
        let mut other = shared.clone();

        other.alloc().set(Box::new(6_u32)).unwrap();
        assert_eq!(*shared, 5);
        assert_eq!(*other, 6);
    }

    #[test]
    fn pointer_info() {
        let info = <Option<Box<u8>>>::type_info().as_pointer().unwrap();
        assert!(info.is_nullable());
        let inner = info.pointee().as_pointer().unwrap();
        assert!(!inner.is_nullable());
        assert!(inner.pointee().type_is::<u8>());
    }
}
