use vc_reflect::Reflect;
use vc_reflect::info::{ReflectKind, TypeInfo};

/// Returns `true` if a value of type `from` can be assigned to `to`,
/// possibly through a numeric conversion.
///
/// Any type converts into a dynamic slot.
pub(crate) fn convertible(from: &TypeInfo, to: &TypeInfo) -> bool {
    if to.is_dynamic() || from.ty_id() == to.ty_id() {
        return true;
    }
    match (from, to) {
        (TypeInfo::Opaque(from), TypeInfo::Opaque(to)) => from.scalar().converts_to(to.scalar()),
        _ => false,
    }
}

/// Assigns `from` to `to`, converting scalars with `as` semantics.
///
/// Returns `false` if the two values are not [`convertible`].
pub(crate) fn convert_assign(to: &mut dyn Reflect, from: &dyn Reflect) -> bool {
    if to.reflect_kind() == ReflectKind::Dynamic || to.ty_id() == from.ty_id() {
        return to.set(from.reflect_clone()).is_ok();
    }
    match from.as_scalar() {
        Some(scalar) => to.set_scalar(scalar),
        None => false,
    }
}

/// Returns `true` if `from` can be stored in `to` as is.
#[inline]
pub(crate) fn assignable(from: &TypeInfo, to: &TypeInfo) -> bool {
    to.is_dynamic() || from.ty_id() == to.ty_id()
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use vc_reflect::info::Typed;
    use vc_reflect::ops::Dynamic;

    use super::*;

    #[test]
    fn numeric_conversion() {
        assert!(convertible(i32::type_info(), i8::type_info()));
        assert!(convertible(f64::type_info(), u16::type_info()));
        assert!(!convertible(String::type_info(), i32::type_info()));
        assert!(!convertible(bool::type_info(), u8::type_info()));

        let mut narrow = 0_i8;
        assert!(convert_assign(&mut narrow, &300_i32));
        assert_eq!(narrow, 300_i32 as i8);
    }

    #[test]
    fn dynamic_accepts_anything() {
        assert!(convertible(<Vec<u8>>::type_info(), Dynamic::type_info()));

        let mut slot = Dynamic::default();
        assert!(convert_assign(&mut slot, &String::from("x")));
        assert_eq!(slot.get().unwrap().downcast_ref::<String>().unwrap(), "x");
    }
}
