//! Provide interfaces for data operation.
//!
//! ## Menu
//!
//! The following are sub-traits of [`Reflect`], providing data access by kind.
//!
//! - [`Struct`]: For named-field structs (e.g. `A{ .. }`).
//! - [`List`]: For list-like (e.g. `Vec<i32>`).
//! - [`Map`]: For map-like (e.g. `HashMap<i32, f32>`).
//! - [`Pointer`]: For nullable or owning indirection (e.g. `Option<T>`, `Box<T>`, `Arc<T>`).
//!
//! [`Dynamic`] is a slot that may hold a value of any reflected type.
//!
//! [`ReflectRef`] and [`ReflectMut`] dispatch a `dyn Reflect` to one of the above.
//!
//! Leaf values expose [`Scalar`] views, and types may opt into the
//! [`Scanner`] and [`Valuer`] capabilities.
//!
//! [`Reflect`]: crate::Reflect

// -----------------------------------------------------------------------------
// Modules

mod bridge;
mod dynamic;
mod kind;
mod list_ops;
mod map_ops;
mod pointer_ops;
mod scalar;
mod struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use bridge::{BridgeError, Scanner, Valuer};
pub use dynamic::Dynamic;
pub use kind::{ReflectMut, ReflectRef};
pub use list_ops::{List, ListItemIter};
pub use map_ops::Map;
pub use pointer_ops::Pointer;
pub use scalar::Scalar;
pub use struct_ops::{Struct, StructFieldIter};
