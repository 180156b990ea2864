//! Containers with special eviction or storage behavior.

mod lru_map;

pub use lru_map::LruMap;
