//! Hash containers with deterministic hashing.
//!
//! Re-exports `hashbrown` and `foldhash`.

mod hasher;

pub use hasher::{FixedHashState, FixedHasher, NoOpHashState, NoOpHasher};

/// A [`hashbrown::HashMap`] using [`FixedHashState`].
pub type HashMap<K, V> = hashbrown::HashMap<K, V, FixedHashState>;

pub use foldhash;
pub use hashbrown;
