use alloc::rc::Rc;
use alloc::vec::Vec;
use core::any::{Any, TypeId, type_name};
use core::cell::RefCell;
use core::fmt;
use core::hash::{Hash, Hasher};

use vc_reflect::Reflect;
use vc_utils::extra::LruMap;

use crate::error::BoxedError;

// -----------------------------------------------------------------------------
// TypePair

/// A source and destination type, the key of a registered converter.
///
/// Pairs compare by [`TypeId`] only.
#[derive(Clone, Copy)]
pub struct TypePair {
    pub src: TypeId,
    pub dst: TypeId,
    src_name: &'static str,
    dst_name: &'static str,
}

impl TypePair {
    /// Creates the pair for copying `S` into `D`.
    #[inline]
    pub fn of<S: Any, D: Any>() -> Self {
        Self {
            src: TypeId::of::<S>(),
            dst: TypeId::of::<D>(),
            src_name: type_name::<S>(),
            dst_name: type_name::<D>(),
        }
    }

    /// Creates a pair from type ids, keeping the names for diagnostics.
    #[inline]
    pub(crate) fn new(src: (TypeId, &'static str), dst: (TypeId, &'static str)) -> Self {
        Self {
            src: src.0,
            dst: dst.0,
            src_name: src.1,
            dst_name: dst.1,
        }
    }

    #[inline]
    pub const fn src_name(&self) -> &'static str {
        self.src_name
    }

    #[inline]
    pub const fn dst_name(&self) -> &'static str {
        self.dst_name
    }
}

impl PartialEq for TypePair {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.src == other.src && self.dst == other.dst
    }
}

impl Eq for TypePair {}

impl Hash for TypePair {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.src.hash(state);
        self.dst.hash(state);
    }
}

impl fmt::Debug for TypePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.src_name, self.dst_name)
    }
}

// -----------------------------------------------------------------------------
// TypedCopier

/// A user supplied conversion for specific source and destination types.
///
/// # Examples
///
/// ```
/// use vc_copy::{BoxedError, TypePair, TypedCopier};
/// use vc_copy::reflect::Reflect;
///
/// struct SecondsToMillis;
///
/// impl TypedCopier for SecondsToMillis {
///     fn pairs(&self) -> Vec<TypePair> {
///         vec![TypePair::of::<u32, u64>()]
///     }
///
///     fn copy(&self, dst: &mut dyn Reflect, src: &dyn Reflect) -> Result<(), BoxedError> {
///         let secs = src.downcast_ref::<u32>().ok_or("expected u32")?;
///         let millis = dst.downcast_mut::<u64>().ok_or("expected u64")?;
///         *millis = u64::from(*secs) * 1000;
///         Ok(())
///     }
/// }
/// ```
pub trait TypedCopier {
    /// The type pairs this converter handles.
    fn pairs(&self) -> Vec<TypePair>;

    /// Writes `src` into `dst`.
    fn copy(&self, dst: &mut dyn Reflect, src: &dyn Reflect) -> Result<(), BoxedError>;
}

// -----------------------------------------------------------------------------
// ConverterRegistry

/// Converters keyed by [`TypePair`], bounded by a least recently used policy.
///
/// The registry is owned by the caller and lent to a [`Copier`]. It is not
/// `Sync`, sharing one between threads needs external synchronization.
///
/// [`Copier`]: crate::Copier
pub struct ConverterRegistry {
    cache: RefCell<LruMap<TypePair, Rc<dyn TypedCopier>>>,
}

impl ConverterRegistry {
    /// Capacity of a registry created with [`new`](Self::new).
    pub const DEFAULT_CAPACITY: usize = 1000;

    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: RefCell::new(LruMap::new(capacity)),
        }
    }

    /// Registers `copier` for every pair it reports.
    ///
    /// A later registration for the same pair replaces the earlier one.
    pub fn register(&mut self, copier: impl TypedCopier + 'static) {
        let copier: Rc<dyn TypedCopier> = Rc::new(copier);
        let cache = self.cache.get_mut();

        for pair in copier.pairs() {
            log::debug!("register converter {pair:?}");
            if let Some((evicted, _)) = cache.insert(pair, Rc::clone(&copier)) {
                log::debug!("evict converter {evicted:?}");
            }
        }
    }

    /// Returns the converter for `pair`, marking it as recently used.
    pub fn lookup(&self, pair: &TypePair) -> Option<Rc<dyn TypedCopier>> {
        self.cache.borrow_mut().get(pair).cloned()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cache.borrow().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cache.borrow().is_empty()
    }
}

impl Default for ConverterRegistry {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ConverterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConverterRegistry")
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Noop(Vec<TypePair>);

    impl TypedCopier for Noop {
        fn pairs(&self) -> Vec<TypePair> {
            self.0.clone()
        }

        fn copy(&self, _: &mut dyn Reflect, _: &dyn Reflect) -> Result<(), BoxedError> {
            Ok(())
        }
    }

    #[test]
    fn register_and_lookup() {
        let mut registry = ConverterRegistry::new();
        registry.register(Noop(vec![TypePair::of::<u8, u16>(), TypePair::of::<u8, u32>()]));

        assert_eq!(registry.len(), 2);
        assert!(registry.lookup(&TypePair::of::<u8, u16>()).is_some());
        assert!(registry.lookup(&TypePair::of::<u16, u8>()).is_none());
    }

    #[test]
    fn least_recently_used_is_evicted() {
        let mut registry = ConverterRegistry::with_capacity(2);
        registry.register(Noop(vec![TypePair::of::<u8, u8>()]));
        registry.register(Noop(vec![TypePair::of::<u16, u16>()]));

        assert!(registry.lookup(&TypePair::of::<u8, u8>()).is_some());
        registry.register(Noop(vec![TypePair::of::<u32, u32>()]));

        assert_eq!(registry.len(), 2);
        assert!(registry.lookup(&TypePair::of::<u16, u16>()).is_none());
        assert!(registry.lookup(&TypePair::of::<u8, u8>()).is_some());
    }
}
