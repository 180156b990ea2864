//! Type normalization and promoted field enumeration.

use alloc::string::String;
use alloc::vec::Vec;

use vc_reflect::Reflect;
use vc_reflect::info::{NamedField, StructInfo, TypeInfo};
use vc_reflect::ops::{ReflectMut, ReflectRef};

use crate::names::exported_name;

// -----------------------------------------------------------------------------
// Values

/// Follows pointers and non-nil dynamic slots down to a concrete value.
///
/// Returns `None` if a null pointer or nil slot is met on the way.
pub(crate) fn indirect(value: &dyn Reflect) -> Option<&dyn Reflect> {
    match value.reflect_ref() {
        ReflectRef::Pointer(ptr) => indirect(ptr.pointee()?),
        ReflectRef::Dynamic(slot) => indirect(slot.get()?),
        other => Some(other.into_reflect()),
    }
}

/// Follows pointers down to a non-pointer value, allocating null ones.
///
/// Dynamic slots are returned as is, the engine materializes them itself.
pub(crate) fn indirect_mut(value: &mut dyn Reflect) -> &mut dyn Reflect {
    match value.reflect_mut() {
        ReflectMut::Pointer(ptr) => indirect_mut(ptr.alloc()),
        other => other.into_reflect(),
    }
}

/// Returns `true` for a null pointer or a nil dynamic slot.
pub(crate) fn is_nil(value: &dyn Reflect) -> bool {
    match value.reflect_ref() {
        ReflectRef::Pointer(ptr) => ptr.is_null(),
        ReflectRef::Dynamic(slot) => slot.is_nil(),
        _ => false,
    }
}

// -----------------------------------------------------------------------------
// Types

/// Strips pointer and list layers, `Vec<Option<User>>` becomes `User`.
pub(crate) fn indirect_type(mut info: &'static TypeInfo) -> &'static TypeInfo {
    loop {
        info = match info {
            TypeInfo::Pointer(pointer) => pointer.pointee(),
            TypeInfo::List(list) => list.item(),
            _ => return info,
        };
    }
}

/// Returns the struct info behind pointer and list layers.
#[inline]
pub(crate) fn base_struct(info: &'static TypeInfo) -> Option<&'static StructInfo> {
    indirect_type(info).as_struct().ok()
}

// -----------------------------------------------------------------------------
// Fields

/// A field reachable from a struct, possibly through embedded fields.
#[derive(Debug, Clone)]
pub(crate) struct FlatField {
    pub field: &'static NamedField,
    /// The exported-style name used for matching.
    pub name: String,
    /// Field indices from the outer struct down to this field.
    pub path: Vec<usize>,
}

impl FlatField {
    /// Number of embedded structs crossed to reach the field.
    #[inline]
    pub fn depth(&self) -> usize {
        self.path.len() - 1
    }
}

/// Lists the fields of the struct behind `info`, in declaration order.
///
/// Embedded struct fields are replaced by their own fields, recursively.
pub(crate) fn deep_fields(info: &'static TypeInfo) -> Vec<FlatField> {
    let mut fields = Vec::new();
    if let Some(info) = base_struct(info) {
        collect_fields(info, &mut Vec::new(), &mut fields);
    }
    fields
}

fn collect_fields(info: &'static StructInfo, prefix: &mut Vec<usize>, out: &mut Vec<FlatField>) {
    for (index, field) in info.iter().enumerate() {
        prefix.push(index);
        match field.type_info().base() {
            TypeInfo::Struct(inner) if field.is_embedded() => collect_fields(inner, prefix, out),
            _ => out.push(FlatField {
                field,
                name: exported_name(field.name()),
                path: prefix.clone(),
            }),
        }
        prefix.pop();
    }
}

/// Reads the field at `path`, `None` if a null embedded pointer is in the way.
pub(crate) fn field_at_path<'a>(value: &'a dyn Reflect, path: &[usize]) -> Option<&'a dyn Reflect> {
    let Some((&index, rest)) = path.split_first() else {
        return Some(value);
    };
    let field = indirect(value)?.reflect_ref().into_struct()?.field_at(index)?;
    field_at_path(field, rest)
}

/// Borrows the field at `path` mutably, allocating null embedded pointers.
pub(crate) fn field_at_path_mut<'a>(
    value: &'a mut dyn Reflect,
    path: &[usize],
) -> Option<&'a mut dyn Reflect> {
    let Some((&index, rest)) = path.split_first() else {
        return Some(value);
    };
    let field = indirect_mut(value)
        .reflect_mut()
        .into_struct()?
        .field_at_mut(index)?;
    field_at_path_mut(field, rest)
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;

    use vc_reflect::derive::Reflect;
    use vc_reflect::info::Typed;

    use super::*;

    #[derive(Reflect, Clone, Default)]
    struct Base {
        id: u64,
        created_at: String,
    }

    #[derive(Reflect, Clone, Default)]
    struct Post {
        #[reflect(embedded)]
        base: Option<Box<Base>>,
        title: String,
    }

    #[test]
    fn promoted_fields() {
        let fields = deep_fields(<Vec<Post>>::type_info());
        let names: Vec<_> = fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["Id", "CreatedAt", "Title"]);
        assert_eq!(fields[1].path, [0, 1]);
        assert_eq!(fields[1].depth(), 1);
        assert_eq!(fields[2].depth(), 0);
    }

    #[test]
    fn path_access() {
        let mut post = Post::default();
        assert!(field_at_path(&post, &[0, 0]).is_none());

        let id = field_at_path_mut(&mut post, &[0, 0]).unwrap();
        id.set(Box::new(7_u64)).unwrap();
        assert_eq!(post.base.as_ref().unwrap().id, 7);

        let id = field_at_path(&post, &[0, 0]).unwrap();
        assert_eq!(id.downcast_ref::<u64>(), Some(&7));
    }

    #[test]
    fn normalization() {
        let value: Option<Box<u8>> = Some(Box::new(3));
        assert_eq!(indirect(&value).unwrap().downcast_ref::<u8>(), Some(&3));
        assert!(indirect(&None::<u8>).is_none());
        assert!(is_nil(&None::<u8>));

        let mut slot: Option<Box<u8>> = None;
        indirect_mut(&mut slot).set(Box::new(9_u8)).unwrap();
        assert_eq!(slot.as_deref(), Some(&9));

        assert!(indirect_type(<Vec<Option<Post>>>::type_info()).type_is::<Post>());
    }
}
