//! The copy engine.
//!
//! [`Copier`] walks a source value and writes every member it can match
//! into a destination value of a possibly different type:
//!
//! - leaf values are assigned, numbers are converted with `as` semantics;
//! - maps are rebuilt key by key and lists element by element;
//! - structs are matched field by field through their exported names and
//!   `copier` tag aliases, promoted through embedded fields, and fall back
//!   to registered getters and setters.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use vc_reflect::Reflect;
use vc_reflect::info::{NamedField, ReflectKind};

use crate::error::CopyError;
use crate::options::CopyOptions;
use crate::registry::ConverterRegistry;
use crate::shape;

// -----------------------------------------------------------------------------
// Modules

mod copy;
mod set;

#[cfg(test)]
mod tests;

// -----------------------------------------------------------------------------
// Callbacks

/// Decides whether a source field is copied, returning `false` vetoes it.
///
/// Receives the source field value and its descriptor.
pub type FieldHook<'a> = dyn Fn(&dyn Reflect, &NamedField) -> bool + 'a;

/// Writes a destination field from a source field value.
///
/// Returns `Ok(true)` if the field was handled, `Ok(false)` to let the
/// engine copy it as usual.
pub type FieldParser<'a> = dyn Fn(&mut dyn Reflect, &dyn Reflect) -> Result<bool, CopyError> + 'a;

// -----------------------------------------------------------------------------
// Copier

/// A configured copy operation.
///
/// # Examples
///
/// ```
/// use vc_copy::{Copier, CopyOptions};
/// use vc_copy::reflect::derive::Reflect;
///
/// #[derive(Reflect, Clone, Default)]
/// struct User {
///     name: String,
///     age: i32,
///     role: String,
/// }
///
/// #[derive(Reflect, Clone, Default)]
/// struct Employee {
///     name: String,
///     age: i64,
///     #[reflect(tag(copier = "-"))]
///     role: String,
/// }
///
/// let user = User { name: "Ann".into(), age: 30, role: "Admin".into() };
/// let mut employee = Employee { role: "Dev".into(), ..Default::default() };
///
/// Copier::new()
///     .with_options(CopyOptions::new().with_ignore_empty(true))
///     .copy(&mut employee, &user)
///     .unwrap();
///
/// assert_eq!(employee.name, "Ann");
/// assert_eq!(employee.age, 30);
/// assert_eq!(employee.role, "Dev");
/// ```
pub struct Copier<'a> {
    options: CopyOptions,
    registry: Option<&'a ConverterRegistry>,
    hooks: Vec<Box<FieldHook<'a>>>,
    parsers: Vec<Box<FieldParser<'a>>>,
}

impl<'a> Copier<'a> {
    /// Creates a copier with default options and no converters.
    #[inline]
    pub fn new() -> Self {
        Self {
            options: CopyOptions::new(),
            registry: None,
            hooks: Vec::new(),
            parsers: Vec::new(),
        }
    }

    #[inline]
    pub fn with_options(mut self, options: CopyOptions) -> Self {
        self.options = options;
        self
    }

    /// Uses the converters of `registry` for matching type pairs.
    #[inline]
    pub fn with_registry(mut self, registry: &'a ConverterRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Adds a hook consulted before each struct field is copied.
    ///
    /// A field is copied only if every hook returns `true`.
    pub fn with_hook(mut self, hook: impl Fn(&dyn Reflect, &NamedField) -> bool + 'a) -> Self {
        self.hooks.push(Box::new(hook));
        self
    }

    /// Adds a parser tried, in insertion order, before each struct field is set.
    pub fn with_parser(
        mut self,
        parser: impl Fn(&mut dyn Reflect, &dyn Reflect) -> Result<bool, CopyError> + 'a,
    ) -> Self {
        self.parsers.push(Box::new(parser));
        self
    }

    #[inline]
    pub fn options(&self) -> &CopyOptions {
        &self.options
    }

    /// Copies `src` into `dst`.
    ///
    /// # Errors
    ///
    /// - [`CopyError::InvalidSource`] if `src` is a null pointer or nil slot.
    /// - [`CopyError::InvalidDestination`] if `dst` is a null pointer.
    /// - Any error met while copying members, see [`CopyError`].
    ///
    /// # Panics
    ///
    /// If a destination field tagged `must` (without `nopanic`) is not written.
    pub fn copy(&self, dst: &mut dyn Reflect, src: &dyn Reflect) -> Result<(), CopyError> {
        if shape::indirect(src).is_none() {
            return Err(CopyError::InvalidSource);
        }
        if dst.reflect_kind() == ReflectKind::Pointer && shape::is_nil(dst) {
            return Err(CopyError::InvalidDestination);
        }
        self.copy_value(dst, src)
    }
}

impl Default for Copier<'_> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Copier<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Copier")
            .field("options", &self.options)
            .field("registry", &self.registry)
            .field("hooks", &self.hooks.len())
            .field("parsers", &self.parsers.len())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Shortcuts

/// Copies `src` into `dst` with default options.
///
/// ```
/// use std::collections::HashMap;
///
/// let src: HashMap<i32, i32> = HashMap::from([(3, 6), (4, 8)]);
/// let mut dst: HashMap<i32, i8> = HashMap::new();
///
/// vc_copy::copy(&mut dst, &src).unwrap();
/// assert_eq!(dst[&3], 6);
/// assert_eq!(dst[&4], 8);
/// ```
#[inline]
pub fn copy(dst: &mut dyn Reflect, src: &dyn Reflect) -> Result<(), CopyError> {
    Copier::new().copy(dst, src)
}

/// Copies `src` into `dst` with the given options.
#[inline]
pub fn copy_with_options(
    dst: &mut dyn Reflect,
    src: &dyn Reflect,
    options: CopyOptions,
) -> Result<(), CopyError> {
    Copier::new().with_options(options).copy(dst, src)
}
