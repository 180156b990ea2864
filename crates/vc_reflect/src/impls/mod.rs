//! `Reflect` implementations for foreign types.
//!
//! - numbers, `bool`, `char` and `String` are opaque scalars.
//! - `Option<T>`, `Box<T>` and `Arc<T>` are pointers.
//! - `Vec<T>` is a list.
//! - `HashMap<K, V>` (std and hashbrown) and `BTreeMap<K, V>` are maps.

mod list;
mod map;
mod pointer;
mod scalar;
