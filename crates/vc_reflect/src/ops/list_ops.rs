use alloc::boxed::Box;
use core::iter::FusedIterator;

use crate::Reflect;

/// A trait used to power [list-like] operations via reflection.
///
/// Implemented for `Vec<T>`.
///
/// # Examples
///
/// ```
/// use vc_reflect::{Reflect, ops::List};
///
/// let mut vec = vec![1_u8, 2];
/// let list: &mut dyn List = &mut vec;
///
/// list.resize_with_default(3);
/// assert!(list.push(Box::new(7_u8)).is_ok());
/// assert!(list.push(Box::new(7_i8)).is_err());
///
/// assert_eq!(vec, [1, 2, 0, 7]);
/// ```
///
/// [list-like]: https://doc.rust-lang.org/book/ch08-01-vectors.html
pub trait List: Reflect {
    /// Returns the element at `index`, or `None` if out of bounds.
    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the element at `index` mutably, or `None` if out of bounds.
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Appends an element, giving it back if its type is not the item type.
    fn push(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;

    /// Resizes the list to `len`, filling new slots with default items.
    fn resize_with_default(&mut self, len: usize);

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the list contains no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl dyn List {
    /// Returns an iterator over the elements.
    #[inline]
    pub fn iter(&self) -> ListItemIter<'_> {
        ListItemIter {
            list: self,
            index: 0,
        }
    }
}

/// An iterator over the elements of a [`List`].
pub struct ListItemIter<'a> {
    list: &'a dyn List,
    index: usize,
}

impl<'a> Iterator for ListItemIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.list.get(self.index)?;
        self.index += 1;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.list.len().saturating_sub(self.index);
        (len, Some(len))
    }
}

impl ExactSizeIterator for ListItemIter<'_> {}
impl FusedIterator for ListItemIter<'_> {}
