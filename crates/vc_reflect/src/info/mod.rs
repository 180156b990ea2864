//! Provide compile-time type infomation implementations.
//!
//! ## Menu
//!
//! - [`Type`]: A `TypeId` paired with the type path, the identity of a reflected type.
//!
//! - [`TypeInfo`]: A enum representing the shape of a type, the inner is one of following:
//!     - [`OpaqueInfo`]: For leaf values (numbers, strings, user opaque types), including the [`ScalarKind`].
//!     - [`PointerInfo`]: For nullable or owning indirections (`Option<T>`, `Box<T>`, `Arc<T>`).
//!     - [`ListInfo`]: For list-like (e.g. `Vec<i32>`) infomation, including item type info.
//!     - [`MapInfo`]: For map-like (e.g. `HashMap<K, V>`) infomation, including key and value type info.
//!     - [`StructInfo`]: For named-field structs, including fields, getters and setters.
//!     - [`DynamicInfo`]: For the [`Dynamic`](crate::ops::Dynamic) slot holding any value.
//!
//! - Members:
//!     - [`NamedField`]: A struct field, including name, type info, tags and flags.
//!     - [`Getter`]: A zero-argument method producing a value.
//!     - [`Setter`]: A one-argument method consuming a value.
//!
//! - [`Typed`]: A trait for obtaining `TypeInfo` data.
//!
//! - [`DynamicTyped`]: Provide dynamic dispatch for `Typed`.
//!
//! - [`NonGenericTypeInfoCell`] / [`GenericTypeInfoCell`]: static storage used to implement `Typed`.

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod dynamic_info;
mod field_info;
mod list_info;
mod map_info;
mod method_info;
mod opaque_info;
mod pointer_info;
mod struct_info;
mod type_info;
mod type_path;
mod typed;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use type_info::impl_default_fn;
pub(crate) use type_path::impl_type_fn;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeInfoCell, NonGenericTypeInfoCell};
pub use dynamic_info::DynamicInfo;
pub use field_info::NamedField;
pub use list_info::ListInfo;
pub use map_info::MapInfo;
pub use method_info::{Getter, Setter};
pub use opaque_info::{OpaqueInfo, ScalarKind};
pub use pointer_info::PointerInfo;
pub use struct_info::StructInfo;
pub use type_info::{ReflectKind, ReflectKindError, TypeInfo};
pub use type_path::Type;
pub use typed::{DynamicTyped, Typed, default_boxed};
