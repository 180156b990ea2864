use alloc::boxed::Box;
use core::fmt;

use crate::Reflect;
use crate::info::{DynamicInfo, NonGenericTypeInfoCell, TypeInfo, Typed};
use crate::reflection::impl_reflect_cast_fn;

/// A slot holding a value of any reflected type, or nothing.
///
/// Assigning a value of any type through [`Reflect::set`] stores it,
/// while assigning another `Dynamic` replaces the slot.
///
/// # Examples
///
/// ```
/// use vc_reflect::{Reflect, ops::Dynamic};
///
/// let mut slot = Dynamic::default();
/// assert!(slot.is_nil());
/// assert!(slot.is_zero());
///
/// slot.set(Box::new(3_i64)).unwrap();
/// assert_eq!(slot.get().and_then(|v| v.downcast_ref::<i64>()), Some(&3));
/// ```
#[derive(Default)]
pub struct Dynamic(Option<Box<dyn Reflect>>);

impl Dynamic {
    /// Creates a slot holding `value`.
    #[inline]
    pub fn new(value: impl Reflect) -> Self {
        Self(Some(Box::new(value)))
    }

    /// Creates a slot holding a boxed value.
    #[inline]
    pub fn from_boxed(value: Box<dyn Reflect>) -> Self {
        Self(Some(value))
    }

    /// Returns `true` if the slot is empty.
    #[inline]
    pub fn is_nil(&self) -> bool {
        self.0.is_none()
    }

    /// Returns the held value.
    #[inline]
    pub fn get(&self) -> Option<&dyn Reflect> {
        self.0.as_deref()
    }

    /// Returns the held value mutably.
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut dyn Reflect> {
        self.0.as_deref_mut()
    }

    /// Stores `value`, returning the previous one.
    #[inline]
    pub fn replace(&mut self, value: Box<dyn Reflect>) -> Option<Box<dyn Reflect>> {
        self.0.replace(value)
    }

    /// Takes the held value out, leaving the slot empty.
    #[inline]
    pub fn take(&mut self) -> Option<Box<dyn Reflect>> {
        self.0.take()
    }
}

impl Clone for Dynamic {
    fn clone(&self) -> Self {
        Self(self.0.as_ref().map(|value| value.reflect_clone()))
    }
}

impl fmt::Debug for Dynamic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => f.debug_tuple("Dynamic").field(value).finish(),
            None => f.write_str("Dynamic(nil)"),
        }
    }
}

impl Typed for Dynamic {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Dynamic(DynamicInfo::new::<Self>()))
    }
}

impl Reflect for Dynamic {
    impl_reflect_cast_fn!(Dynamic);

    fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        match value.take::<Dynamic>() {
            Ok(other) => *self = other,
            Err(value) => self.0 = Some(value),
        }
        Ok(())
    }

    #[inline]
    fn reflect_clone(&self) -> Box<dyn Reflect> {
        Box::new(self.clone())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0.is_none()
    }

    #[inline]
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::Dynamic;
    use crate::Reflect;

    #[test]
    fn set_replaces_slot() {
        let mut slot = Dynamic::new(1_u8);
        slot.set(Box::new(Dynamic::default())).unwrap();
        assert!(slot.is_nil());

        slot.set(Box::new(String::from("x"))).unwrap();
        let cloned = slot.clone();
        assert_eq!(
            cloned.get().and_then(|v| v.downcast_ref::<String>()),
            Some(&String::from("x"))
        );
        assert!(!cloned.is_zero());
    }
}
