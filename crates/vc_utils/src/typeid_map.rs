use core::any::TypeId;
use core::fmt;

use crate::hash::NoOpHashState;
use crate::hash::hashbrown::HashMap;

/// Values keyed by [`TypeId`].
///
/// Type ids are hashed already, the map feeds them through [`NoOpHashState`]
/// instead of hashing them a second time.
///
/// ```
/// use core::any::TypeId;
/// use vc_utils::TypeIdMap;
///
/// let mut names = TypeIdMap::new();
/// names.get_or_insert(TypeId::of::<u8>(), || "byte");
///
/// assert_eq!(names.get(&TypeId::of::<u8>()), Some(&"byte"));
/// assert_eq!(names.len(), 1);
/// ```
pub struct TypeIdMap<V> {
    entries: HashMap<TypeId, V, NoOpHashState>,
}

impl<V> TypeIdMap<V> {
    /// Creates an empty map, usable in `static` initializers.
    #[inline]
    pub const fn new() -> Self {
        Self {
            entries: HashMap::with_hasher(NoOpHashState),
        }
    }

    #[inline]
    pub fn get(&self, id: &TypeId) -> Option<&V> {
        self.entries.get(id)
    }

    /// Returns the value of `id`, inserting `init()` first if it is missing.
    #[inline]
    pub fn get_or_insert(&mut self, id: TypeId, init: impl FnOnce() -> V) -> &mut V {
        self.entries.entry(id).or_insert_with(init)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> Default for TypeIdMap<V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for TypeIdMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use core::any::TypeId;

    use super::TypeIdMap;

    #[test]
    fn first_insert_wins() {
        let mut map = TypeIdMap::new();
        assert_eq!(*map.get_or_insert(TypeId::of::<u8>(), || 1), 1);
        assert_eq!(*map.get_or_insert(TypeId::of::<u8>(), || 2), 1);
        assert!(map.get(&TypeId::of::<u16>()).is_none());
        assert_eq!(map.len(), 1);
    }
}
