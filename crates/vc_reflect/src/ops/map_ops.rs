use alloc::boxed::Box;

use crate::Reflect;

/// A trait used to power [map-like] operations via reflection.
///
/// Implemented for `HashMap<K, V>` and `BTreeMap<K, V>`.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use vc_reflect::{Reflect, ops::Map};
///
/// let mut map = HashMap::<String, i32>::new();
/// let dyn_map: &mut dyn Map = &mut map;
///
/// assert!(dyn_map.insert_boxed(Box::new(String::from("a")), Box::new(1_i32)).is_ok());
/// assert!(dyn_map.insert_boxed(Box::new(2_u8), Box::new(1_i32)).is_err());
///
/// assert_eq!(dyn_map.len(), 1);
/// assert!(dyn_map.get(&String::from("a")).is_some());
/// ```
///
/// [map-like]: https://doc.rust-lang.org/book/ch08-03-hash-maps.html
pub trait Map: Reflect {
    /// Returns the value of `key`, or `None` if absent or of another key type.
    fn get(&self, key: &dyn Reflect) -> Option<&dyn Reflect>;

    /// Returns the value of `key` mutably.
    fn get_mut(&mut self, key: &dyn Reflect) -> Option<&mut dyn Reflect>;

    /// Returns an iterator over the entries.
    fn iter(&self) -> Box<dyn Iterator<Item = (&dyn Reflect, &dyn Reflect)> + '_>;

    /// Inserts an entry, replacing the previous value of the key.
    ///
    /// The key and value are given back if either type does not match.
    fn insert_boxed(
        &mut self,
        key: Box<dyn Reflect>,
        value: Box<dyn Reflect>,
    ) -> Result<(), (Box<dyn Reflect>, Box<dyn Reflect>)>;

    /// Returns the number of entries.
    fn len(&self) -> usize;

    /// Returns `true` if the map contains no entries.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
