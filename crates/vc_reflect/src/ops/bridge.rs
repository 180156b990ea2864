use alloc::borrow::Cow;
use alloc::boxed::Box;
use core::{error, fmt};

use crate::Reflect;

/// A type that can populate itself from an arbitrary value.
///
/// Declared on a derived type with `#[reflect(scanner)]`, which forwards
/// [`Reflect::as_scanner`] to this implementation.
///
/// # Examples
///
/// ```
/// use vc_reflect::{Reflect, derive::Reflect, ops::{BridgeError, Scanner}};
///
/// #[derive(Reflect, Clone, Default, PartialEq, Debug)]
/// #[reflect(opaque, scanner)]
/// struct Celsius(f64);
///
/// impl Scanner for Celsius {
///     fn scan(&mut self, src: &dyn Reflect) -> Result<(), BridgeError> {
///         let value = src.as_scalar().and_then(|s| s.as_f64());
///         self.0 = value.ok_or_else(|| BridgeError::new("not a number"))?;
///         Ok(())
///     }
/// }
///
/// let mut c = Celsius::default();
/// c.as_scanner().unwrap().scan(&21_u8).unwrap();
/// assert_eq!(c, Celsius(21.0));
/// ```
pub trait Scanner {
    /// Populates `self` from `src`.
    fn scan(&mut self, src: &dyn Reflect) -> Result<(), BridgeError>;
}

/// A type that can produce a plain value representing itself.
///
/// Declared on a derived type with `#[reflect(valuer)]`. Returning
/// `Ok(None)` means the value is null.
pub trait Valuer {
    /// Produces the representing value.
    fn value(&self) -> Result<Option<Box<dyn Reflect>>, BridgeError>;
}

/// Error reported by a [`Scanner`] or [`Valuer`] implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeError {
    message: Cow<'static, str>,
}

impl BridgeError {
    /// Creates an error with the given message.
    #[inline]
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the error message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl error::Error for BridgeError {}
