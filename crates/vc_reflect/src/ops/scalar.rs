use crate::info::ScalarKind;

/// A borrowed view of a leaf value.
///
/// Integers are widened to 128 bits and floats to `f64`, so any numeric
/// value can be read without knowing its concrete width.
///
/// ```
/// use vc_reflect::{Reflect, ops::Scalar};
///
/// assert_eq!(7_u16.as_scalar(), Some(Scalar::UInt(7)));
/// assert_eq!(Scalar::Float(2.9).as_i128(), Some(2));
///
/// let mut x = 0_i8;
/// assert!(x.set_scalar(Scalar::UInt(300)));
/// assert_eq!(x, 300_u16 as i8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar<'a> {
    Bool(bool),
    Int(i128),
    UInt(u128),
    Float(f64),
    Char(char),
    Str(&'a str),
}

impl Scalar<'_> {
    /// Returns the [`ScalarKind`] of the value.
    pub const fn kind(&self) -> ScalarKind {
        match self {
            Self::Bool(_) => ScalarKind::Bool,
            Self::Int(_) => ScalarKind::Signed,
            Self::UInt(_) => ScalarKind::Unsigned,
            Self::Float(_) => ScalarKind::Float,
            Self::Char(_) => ScalarKind::Char,
            Self::Str(_) => ScalarKind::Str,
        }
    }

    /// Reads a number as `i128` with `as` semantics.
    #[inline]
    pub fn as_i128(&self) -> Option<i128> {
        match *self {
            Self::Int(v) => Some(v),
            Self::UInt(v) => Some(v as i128),
            Self::Float(v) => Some(v as i128),
            _ => None,
        }
    }

    /// Reads a number as `u128` with `as` semantics.
    #[inline]
    pub fn as_u128(&self) -> Option<u128> {
        match *self {
            Self::Int(v) => Some(v as u128),
            Self::UInt(v) => Some(v),
            Self::Float(v) => Some(v as u128),
            _ => None,
        }
    }

    /// Reads a number as `f64` with `as` semantics.
    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Self::Int(v) => Some(v as f64),
            Self::UInt(v) => Some(v as f64),
            Self::Float(v) => Some(v),
            _ => None,
        }
    }
}
