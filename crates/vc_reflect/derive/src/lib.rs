//! See [`Reflect`](derive_reflect).
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Reflection Derivation
///
/// `#[derive(Reflect)]` implements `Typed`, `Reflect` and, for structs with
/// named fields, `Struct`.
///
/// The type must implement `Clone` and `Default`.
///
/// ## Field tags
///
/// Fields carry Go-style string tags, read back through `NamedField::tag`:
///
/// ```rust, ignore
/// #[derive(Reflect, Clone, Default)]
/// struct User {
///     #[reflect(tag(copier = "must,nopanic"))]
///     name: String,
/// }
/// ```
///
/// ## Embedded fields
///
/// `#[reflect(embedded)]` marks a field whose own fields are promoted into
/// the parent when matching by name. The field may be a struct or a pointer
/// to one (`Option<Box<Base>>`).
///
/// ## Ignored fields
///
/// `#[reflect(ignore)]` removes a field from type information entirely.
/// Its type does not need to implement `Reflect`.
///
/// ## Opaque types
///
/// `#[reflect(opaque)]` treats the type as a leaf value. Any struct or enum
/// can be opaque, but it must also implement `PartialEq`, which decides
/// whether a value is zero (`== Default::default()`).
///
/// ```rust, ignore
/// #[derive(Reflect, Clone, Default, PartialEq)]
/// #[reflect(opaque)]
/// struct Token(u64);
/// ```
///
/// ## Capabilities
///
/// `#[reflect(scanner)]` and `#[reflect(valuer)]` declare that the type
/// implements `Scanner` or `Valuer`, and expose them through `Reflect`.
///
/// ## Methods
///
/// `#[reflect(getter = method)]` registers `fn method(&self) -> R`, and
/// `#[reflect(setter = method)]` registers `fn method(&mut self, arg: A)`.
/// Methods are registered under their exported-style name (`full_name`
/// becomes `FullName`), use `as "Name"` to pick another one:
///
/// ```rust, ignore
/// #[derive(Reflect, Clone, Default)]
/// #[reflect(getter = full_name, setter = assign_role as "Role")]
/// struct Employee {
///     first: String,
///     last: String,
///     roles: Vec<String>,
/// }
///
/// impl Employee {
///     fn full_name(&self) -> String { format!("{} {}", self.first, self.last) }
///     fn assign_role(&mut self, role: String) { self.roles.push(role) }
/// }
/// ```
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match derive_data::ReflectDerive::from_input(&ast) {
        Ok(derive) => impls::expand(&derive).into(),
        Err(err) => err.into_compile_error().into(),
    }
}
