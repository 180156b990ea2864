use alloc::collections::BTreeMap;
use core::fmt::Debug;
use core::hash::Hash;

use crate::hash::HashMap;

// -----------------------------------------------------------------------------
// LruMap

struct Slot<V> {
    value: V,
    tick: u64,
}

/// A bounded map that evicts the least recently used entry.
///
/// Every [`get`] and [`insert`] marks the entry as the most recently used.
/// When an insertion grows the map past its capacity, the entry that was
/// used least recently is removed and returned.
///
/// A capacity of `0` disables eviction.
///
/// # Examples
///
/// ```
/// use vc_utils::extra::LruMap;
///
/// let mut map = LruMap::new(2);
/// map.insert("a", 1);
/// map.insert("b", 2);
///
/// // touch "a", so "b" becomes the eviction candidate.
/// assert_eq!(map.get(&"a"), Some(&1));
///
/// let evicted = map.insert("c", 3);
/// assert_eq!(evicted, Some(("b", 2)));
/// assert_eq!(map.len(), 2);
/// ```
///
/// [`get`]: LruMap::get
/// [`insert`]: LruMap::insert
pub struct LruMap<K, V> {
    capacity: usize,
    tick: u64,
    entries: HashMap<K, Slot<V>>,
    // tick -> key, the first entry is the least recently used one.
    order: BTreeMap<u64, K>,
}

impl<K: Hash + Eq + Clone, V> LruMap<K, V> {
    /// Creates an empty map holding at most `capacity` entries.
    #[inline]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            tick: 0,
            entries: HashMap::default(),
            order: BTreeMap::new(),
        }
    }

    /// Returns the maximum number of entries, `0` means unbounded.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map contains no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if the map contains `key`, without touching it.
    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the value of `key` without touching it.
    #[inline]
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.entries.get(key).map(|slot| &slot.value)
    }

    /// Returns the value of `key` and marks it as the most recently used.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let slot = self.entries.get_mut(key)?;
        self.tick += 1;
        if let Some(key) = self.order.remove(&slot.tick) {
            self.order.insert(self.tick, key);
        }
        slot.tick = self.tick;
        Some(&slot.value)
    }

    /// Inserts or replaces the value of `key`, marking it as the most recently used.
    ///
    /// Returns the evicted entry if the map grew past its capacity.
    pub fn insert(&mut self, key: K, value: V) -> Option<(K, V)> {
        self.tick += 1;
        let tick = self.tick;

        if let Some(slot) = self.entries.get_mut(&key) {
            self.order.remove(&slot.tick);
            slot.tick = tick;
            slot.value = value;
            self.order.insert(tick, key);
            return None;
        }

        self.entries.insert(key.clone(), Slot { value, tick });
        self.order.insert(tick, key);

        if self.capacity != 0 && self.entries.len() > self.capacity {
            let (_, oldest) = self.order.pop_first()?;
            let slot = self.entries.remove(&oldest)?;
            return Some((oldest, slot.value));
        }
        None
    }

    /// Removes `key`, returning its value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let slot = self.entries.remove(key)?;
        self.order.remove(&slot.tick);
        Some(slot.value)
    }

    /// Removes all entries.
    #[inline]
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }
}

impl<K: Debug, V: Debug> Debug for LruMap<K, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(k, slot)| (k, &slot.value)))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::LruMap;

    #[test]
    fn evicts_least_recently_used() {
        let mut map = LruMap::new(3);
        assert!(map.insert(1, "one").is_none());
        assert!(map.insert(2, "two").is_none());
        assert!(map.insert(3, "three").is_none());

        assert_eq!(map.get(&1), Some(&"one"));
        assert_eq!(map.insert(4, "four"), Some((2, "two")));
        assert!(!map.contains(&2));

        // replacing touches the entry and never evicts
        assert!(map.insert(3, "THREE").is_none());
        assert_eq!(map.insert(5, "five"), Some((1, "one")));
        assert_eq!(map.peek(&3), Some(&"THREE"));
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn zero_capacity_is_unbounded() {
        let mut map = LruMap::new(0);
        for i in 0..64 {
            assert!(map.insert(i, i * 2).is_none());
        }
        assert_eq!(map.len(), 64);
        assert_eq!(map.remove(&10), Some(20));
        assert_eq!(map.len(), 63);
        map.clear();
        assert!(map.is_empty());
    }
}
