use crate::Reflect;

/// A trait used to power indirection via reflection.
///
/// Implemented for `Option<T>`, `Box<T>` and `Arc<T>`. Only `Option` can be
/// null, owning pointers always have a pointee.
///
/// # Examples
///
/// ```
/// use vc_reflect::{Reflect, ops::Pointer};
///
/// let mut ptr: Option<u32> = None;
/// assert!(ptr.is_null());
///
/// ptr.alloc().set(Box::new(5_u32)).unwrap();
/// assert_eq!(ptr, Some(5));
///
/// ptr.reset();
/// assert_eq!(ptr, None);
/// ```
pub trait Pointer: Reflect {
    /// Returns the pointee, or `None` if the pointer is null.
    fn pointee(&self) -> Option<&dyn Reflect>;

    /// Returns the pointee mutably, or `None` if the pointer is null.
    ///
    /// For shared pointers this detaches the value from other owners.
    fn pointee_mut(&mut self) -> Option<&mut dyn Reflect>;

    /// Sets the pointer to its zero value.
    fn reset(&mut self);

    /// Returns the pointee mutably, allocating a default one if null.
    fn alloc(&mut self) -> &mut dyn Reflect;

    /// Returns `true` if the pointer is null.
    #[inline]
    fn is_null(&self) -> bool {
        self.pointee().is_none()
    }
}
