use core::iter::FusedIterator;

use crate::Reflect;

/// A trait used to power [struct-like] operations via reflection.
///
/// Implemented by [the derive macro] for structs with named fields.
///
/// # Examples
///
/// ```
/// use vc_reflect::{derive::Reflect, ops::Struct};
///
/// #[derive(Reflect, Clone, Default)]
/// struct Foo {
///     a: i32,
///     b: bool,
/// }
///
/// let mut foo = Foo { a: 1, b: true };
///
/// assert_eq!(foo.field_len(), 2);
/// assert_eq!(foo.name_at(1), Some("b"));
/// assert!(foo.field("c").is_none());
///
/// *foo.field_mut("a").unwrap().downcast_mut::<i32>().unwrap() = 42;
/// assert_eq!(foo.a, 42);
/// ```
///
/// [struct-like]: https://doc.rust-lang.org/book/ch05-01-defining-structs.html
/// [the derive macro]: crate::derive::Reflect
pub trait Struct: Reflect {
    /// Returns the field named `name`, if present.
    fn field(&self, name: &str) -> Option<&dyn Reflect>;

    /// Returns the field named `name` mutably, if present.
    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Reflect>;

    /// Returns the field at `index` in declaration order, if present.
    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the field at `index` mutably, if present.
    fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Returns the name of the field at `index`, if present.
    fn name_at(&self, index: usize) -> Option<&str>;

    /// Returns the number of fields.
    fn field_len(&self) -> usize;
}

impl dyn Struct {
    /// Returns an iterator over `(name, value)` pairs in declaration order.
    #[inline]
    pub fn iter_fields(&self) -> StructFieldIter<'_> {
        StructFieldIter {
            target: self,
            index: 0,
        }
    }
}

/// An iterator over the fields of a [`Struct`].
pub struct StructFieldIter<'a> {
    target: &'a dyn Struct,
    index: usize,
}

impl<'a> Iterator for StructFieldIter<'a> {
    type Item = (&'a str, &'a dyn Reflect);

    fn next(&mut self) -> Option<Self::Item> {
        let name = self.target.name_at(self.index)?;
        let value = self.target.field_at(self.index)?;
        self.index += 1;
        Some((name, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.target.field_len().saturating_sub(self.index);
        (len, Some(len))
    }
}

impl ExactSizeIterator for StructFieldIter<'_> {}
impl FusedIterator for StructFieldIter<'_> {}
