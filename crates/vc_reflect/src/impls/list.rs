use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::Reflect;
use crate::info::{GenericTypeInfoCell, ListInfo, TypeInfo, Typed};
use crate::ops::List;
use crate::reflection::impl_reflect_cast_fn;

impl<T: Typed + Clone + Default> Typed for Vec<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::List(ListInfo::new::<Self, T>()))
    }
}

impl<T: Typed + Clone + Default> Reflect for Vec<T> {
    impl_reflect_cast_fn!(List);

    fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        *self = value.take::<Self>()?;
        Ok(())
    }

    #[inline]
    fn reflect_clone(&self) -> Box<dyn Reflect> {
        Box::new(self.clone())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.iter().map(|item| item as &dyn Reflect))
            .finish()
    }
}

impl<T: Typed + Clone + Default> List for Vec<T> {
    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        <[T]>::get(self, index).map(|item| item as &dyn Reflect)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
        <[T]>::get_mut(self, index).map(|item| item as &mut dyn Reflect)
    }

    fn push(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        Vec::push(self, value.take::<T>()?);
        Ok(())
    }

    #[inline]
    fn resize_with_default(&mut self, len: usize) {
        self.resize_with(len, T::default);
    }

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::Reflect;
    use crate::info::Typed;
    use crate::ops::List;

    #[test]
    fn item_info() {
        let info = <Vec<Option<i32>>>::type_info().as_list().unwrap();
        assert!(info.item().type_is::<Option<i32>>());
        assert!(info.item().is_pointer());
    }

    #[test]
    fn iterate_and_truncate() {
        let mut list = vec![String::from("a"), String::from("b")];
        let dyn_list: &mut dyn List = &mut list;
        dyn_list.resize_with_default(1);

        let dyn_list: &dyn List = &list;
        let items: Vec<_> = dyn_list
            .iter()
            .filter_map(|v| v.downcast_ref::<String>())
            .collect();
        assert_eq!(items, ["a"]);
        assert!(!list.is_zero());
    }
}
