use alloc::borrow::ToOwned;
use alloc::string::String;

use crate::Reflect;
use crate::info::{NonGenericTypeInfoCell, OpaqueInfo, ScalarKind, TypeInfo, Typed};
use crate::ops::Scalar;
use crate::reflection::impl_opaque_reflect;

macro_rules! impl_typed_scalar {
    ($ty:ty, $kind:ident) => {
        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>(ScalarKind::$kind)))
            }
        }
    };
}

macro_rules! impl_reflect_number {
    ($kind:ident, $variant:ident, $read:ident: $($ty:ty),*) => {$(
        impl_typed_scalar!($ty, $kind);

        impl Reflect for $ty {
            impl_opaque_reflect!();

            #[inline]
            fn as_scalar(&self) -> Option<Scalar<'_>> {
                Some(Scalar::$variant(*self as _))
            }

            #[inline]
            fn set_scalar(&mut self, scalar: Scalar<'_>) -> bool {
                match scalar.$read() {
                    Some(value) => {
                        *self = value as $ty;
                        true
                    }
                    None => false,
                }
            }
        }
    )*};
}

impl_reflect_number!(Signed, Int, as_i128: i8, i16, i32, i64, i128, isize);
impl_reflect_number!(Unsigned, UInt, as_u128: u8, u16, u32, u64, u128, usize);
impl_reflect_number!(Float, Float, as_f64: f32, f64);

impl_typed_scalar!(bool, Bool);
impl_typed_scalar!(char, Char);
impl_typed_scalar!(String, Str);

impl Reflect for bool {
    impl_opaque_reflect!();

    #[inline]
    fn as_scalar(&self) -> Option<Scalar<'_>> {
        Some(Scalar::Bool(*self))
    }

    #[inline]
    fn set_scalar(&mut self, scalar: Scalar<'_>) -> bool {
        let Scalar::Bool(value) = scalar else {
            return false;
        };
        *self = value;
        true
    }
}

impl Reflect for char {
    impl_opaque_reflect!();

    #[inline]
    fn as_scalar(&self) -> Option<Scalar<'_>> {
        Some(Scalar::Char(*self))
    }

    #[inline]
    fn set_scalar(&mut self, scalar: Scalar<'_>) -> bool {
        let Scalar::Char(value) = scalar else {
            return false;
        };
        *self = value;
        true
    }
}

impl Reflect for String {
    impl_opaque_reflect!();

    #[inline]
    fn as_scalar(&self) -> Option<Scalar<'_>> {
        Some(Scalar::Str(self.as_str()))
    }

    #[inline]
    fn set_scalar(&mut self, scalar: Scalar<'_>) -> bool {
        let Scalar::Str(value) = scalar else {
            return false;
        };
        value.clone_into(self);
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use crate::info::{ScalarKind, Typed};
    use crate::ops::Scalar;

    #[test]
    fn number_casts() {
        let mut x = 0_u8;
        assert!(x.set_scalar(Scalar::Int(-1)));
        assert_eq!(x, u8::MAX);

        let mut y = 0.0_f32;
        assert!(y.set_scalar(10_i64.as_scalar().unwrap()));
        assert_eq!(y, 10.0);

        assert!(!y.set_scalar(Scalar::Str("1")));
        assert!(!y.set_scalar(Scalar::Bool(true)));
    }

    #[test]
    fn scalar_kinds() {
        let kind = |info: &crate::info::TypeInfo| info.as_opaque().unwrap().scalar();
        assert_eq!(kind(i16::type_info()), ScalarKind::Signed);
        assert_eq!(kind(usize::type_info()), ScalarKind::Unsigned);
        assert_eq!(kind(f64::type_info()), ScalarKind::Float);
        assert_eq!(kind(String::type_info()), ScalarKind::Str);
    }

    #[test]
    fn zero_and_set() {
        let mut s = String::from("a");
        assert!(!s.is_zero());
        assert!(s.set(Box::new(String::new())).is_ok());
        assert!(s.is_zero());
        assert!(s.set(Box::new(1_i32)).is_err());
        assert!(0_i64.is_zero());
        assert!(!'x'.is_zero());
    }
}
