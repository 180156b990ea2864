use alloc::boxed::Box;
use alloc::vec::Vec;

use vc_utils::hash::HashMap;

use crate::Reflect;
use crate::info::{Getter, NamedField, Setter, Type};
use crate::info::{default_boxed, impl_default_fn, impl_type_fn};

/// A container for compile-time named struct info.
///
/// Holds the fields in declaration order, plus the getter and setter
/// methods registered on the type.
///
/// # Examples
///
/// ```rust
/// use vc_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect, Clone, Default)]
/// struct A {
///     val: f32,
///     #[reflect(tag(copier = "-"))]
///     skip: u8,
/// }
///
/// let info = <A as Typed>::type_info().as_struct().unwrap();
///
/// assert_eq!(info.field_len(), 2);
/// assert_eq!(info.index_of("skip"), Some(1));
/// assert_eq!(info.field("skip").unwrap().tag("copier"), Some("-"));
/// ```
#[derive(Debug)]
pub struct StructInfo {
    ty: Type,
    fields: Box<[NamedField]>,
    indices: HashMap<&'static str, usize>,
    getters: Box<[Getter]>,
    setters: Box<[Setter]>,
    default: fn() -> Box<dyn Reflect>,
}

impl StructInfo {
    impl_type_fn!(ty);
    impl_default_fn!(default);

    /// Create a new [`StructInfo`].
    ///
    /// The order of internal fields is fixed, depends on the input order.
    pub fn new<T: Reflect + Default>(fields: &[NamedField]) -> Self {
        let indices = fields
            .iter()
            .enumerate()
            .map(|(index, field)| (field.name(), index))
            .collect();

        Self {
            ty: Type::of::<T>(),
            fields: fields.into(),
            indices,
            getters: Box::new([]),
            setters: Box::new([]),
            default: default_boxed::<T>,
        }
    }

    /// Replaces the getter methods.
    pub fn with_getters(self, getters: Vec<Getter>) -> Self {
        Self {
            getters: getters.into_boxed_slice(),
            ..self
        }
    }

    /// Replaces the setter methods.
    pub fn with_setters(self, setters: Vec<Setter>) -> Self {
        Self {
            setters: setters.into_boxed_slice(),
            ..self
        }
    }

    /// Returns the [`NamedField`] for the given `name`, if present.
    pub fn field(&self, name: &str) -> Option<&NamedField> {
        self.fields.get(*self.indices.get(name)?)
    }

    /// Returns the [`NamedField`] at the given index, if present.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&NamedField> {
        self.fields.get(index)
    }

    /// Returns an iterator over the fields in **declaration order**.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &NamedField> {
        self.fields.iter()
    }

    /// Returns the index for the given field `name`, if present.
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.indices.get(name).copied()
    }

    /// Returns the number of fields.
    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }

    /// Returns the getter named `name`, if present.
    pub fn getter(&self, name: &str) -> Option<&Getter> {
        self.getters.iter().find(|g| g.name() == name)
    }

    /// Returns all getters.
    #[inline]
    pub fn getters(&self) -> &[Getter] {
        &self.getters
    }

    /// Returns the setter named `name`, if present.
    pub fn setter(&self, name: &str) -> Option<&Setter> {
        self.setters.iter().find(|s| s.name() == name)
    }

    /// Returns all setters.
    #[inline]
    pub fn setters(&self) -> &[Setter] {
        &self.setters
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use crate::Reflect;
    use crate::derive::Reflect;
    use crate::info::Typed;
    use crate::ops::Struct;

    #[derive(Reflect, Clone, Default)]
    struct Base {
        pub id: u64,
    }

    #[derive(Reflect, Clone, Default)]
    #[reflect(getter = full_name, setter = add_role as "Role")]
    struct Person {
        #[reflect(embedded)]
        base: Option<Box<Base>>,
        #[reflect(tag(copier = "Alias,must"))]
        pub first: String,
        last: String,
        roles: Vec<String>,
        #[reflect(ignore)]
        cache: (u8, u8),
    }

    impl Person {
        fn full_name(&self) -> String {
            alloc::format!("{} {}", self.first, self.last)
        }

        fn add_role(&mut self, role: String) {
            self.roles.push(role);
        }
    }

    #[derive(Reflect, Clone, Default)]
    struct Wrapper<T> {
        inner: T,
    }

    #[test]
    fn derived_fields() {
        let info = Person::type_info().as_struct().unwrap();
        assert_eq!(info.field_len(), 4);
        assert!(info.field("cache").is_none());

        let base = info.field_at(0).unwrap();
        assert!(base.is_embedded());
        assert!(!base.is_public());
        assert!(base.type_info().base().is_struct());

        let first = info.field("first").unwrap();
        assert!(first.is_public());
        assert_eq!(first.tag("copier"), Some("Alias,must"));
    }

    #[test]
    fn derived_methods() {
        let info = Person::type_info().as_struct().unwrap();
        let mut person = Person {
            first: "Ada".into(),
            last: "King".into(),
            ..Default::default()
        };

        let getter = info.getter("FullName").unwrap();
        assert!(getter.output().type_is::<String>());
        let name = getter.call(&person).unwrap();
        assert_eq!(name.downcast_ref::<String>().unwrap(), "Ada King");

        let setter = info.setter("Role").unwrap();
        assert!(setter.accepts(core::any::TypeId::of::<String>()));
        assert!(setter.call(&mut person, Box::new(String::from("dev"))).is_ok());
        assert!(setter.call(&mut person, Box::new(1_u8)).is_err());
        assert_eq!(person.roles, ["dev"]);
    }

    #[test]
    fn derived_access() {
        let mut person = Person::default();
        assert!(person.is_zero());

        person.field_mut("last").unwrap().set(Box::new(String::from("X"))).unwrap();
        assert_eq!(person.last, "X");
        assert!(!person.is_zero());

        let names: Vec<_> = (&person as &dyn Struct).iter_fields().map(|(n, _)| n).collect();
        assert_eq!(names, ["base", "first", "last", "roles"]);
    }

    #[test]
    fn generic_cells() {
        let a = <Wrapper<u8>>::type_info();
        let b = <Wrapper<String>>::type_info();
        assert!(!core::ptr::eq(a, b));
        assert!(a.as_struct().unwrap().field("inner").unwrap().type_info().type_is::<u8>());
        assert!(core::ptr::eq(a, <Wrapper<u8>>::type_info()));
    }
}
