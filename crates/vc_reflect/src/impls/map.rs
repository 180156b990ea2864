use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use std::collections::HashMap;

use vc_utils::hash::hashbrown::HashMap as HashbrownMap;

use crate::Reflect;
use crate::info::{GenericTypeInfoCell, MapInfo, TypeInfo, Typed};
use crate::ops::Map;
use crate::reflection::impl_reflect_cast_fn;

macro_rules! impl_reflect_map {
    ($map:ident <K, V $(, $s:ident)?> where K: $($bound:tt)*) => {
        impl<K, V $(, $s)?> Typed for $map<K, V $(, $s)?>
        where
            K: Typed + Clone + Default + $($bound)*,
            V: Typed + Clone + Default,
            $($s: BuildHasher + Default + Clone + Send + Sync + 'static,)?
        {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| TypeInfo::Map(MapInfo::new::<Self, K, V>()))
            }
        }

        impl<K, V $(, $s)?> Reflect for $map<K, V $(, $s)?>
        where
            K: Typed + Clone + Default + $($bound)*,
            V: Typed + Clone + Default,
            $($s: BuildHasher + Default + Clone + Send + Sync + 'static,)?
        {
            impl_reflect_cast_fn!(Map);

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
                $map::is_empty(self)
            }

            fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_map()
                    .entries(
                        $map::iter(self).map(|(k, v)| (k as &dyn Reflect, v as &dyn Reflect)),
                    )
                    .finish()
            }
        }

        impl<K, V $(, $s)?> Map for $map<K, V $(, $s)?>
        where
            K: Typed + Clone + Default + $($bound)*,
            V: Typed + Clone + Default,
            $($s: BuildHasher + Default + Clone + Send + Sync + 'static,)?
        {
            fn get(&self, key: &dyn Reflect) -> Option<&dyn Reflect> {
                let key = key.downcast_ref::<K>()?;
                $map::get(self, key).map(|value| value as &dyn Reflect)
            }

            fn get_mut(&mut self, key: &dyn Reflect) -> Option<&mut dyn Reflect> {
                let key = key.downcast_ref::<K>()?;
                $map::get_mut(self, key).map(|value| value as &mut dyn Reflect)
            }

            fn iter(&self) -> Box<dyn Iterator<Item = (&dyn Reflect, &dyn Reflect)> + '_> {
                Box::new($map::iter(self).map(|(k, v)| (k as &dyn Reflect, v as &dyn Reflect)))
            }

            fn insert_boxed(
                &mut self,
                key: Box<dyn Reflect>,
                value: Box<dyn Reflect>,
            ) -> Result<(), (Box<dyn Reflect>, Box<dyn Reflect>)> {
                let key = match key.take::<K>() {
                    Ok(key) => key,
                    Err(key) => return Err((key, value)),
                };
                let value = match value.take::<V>() {
                    Ok(value) => value,
                    Err(value) => return Err((Box::new(key) as Box<dyn Reflect>, value)),
                };
                $map::insert(self, key, value);
                Ok(())
            }

            #[inline]
            fn len(&self) -> usize {
                $map::len(self)
            }
        }
    };
}

impl_reflect_map!(HashMap<K, V, S> where K: Eq + Hash);
impl_reflect_map!(HashbrownMap<K, V, S> where K: Eq + Hash);
impl_reflect_map!(BTreeMap<K, V> where K: Ord);

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use std::collections::HashMap;

    use crate::Reflect;
    use crate::info::Typed;
    use crate::ops::Map;

    #[test]
    fn key_value_info() {
        let info = <BTreeMap<String, Vec<u8>>>::type_info().as_map().unwrap();
        assert!(info.key().type_is::<String>());
        assert!(info.value().is_list());
    }

    #[test]
    fn iterate_entries() {
        let map: HashMap<i32, i8> = [(1, 10), (2, 20)].into_iter().collect();
        let dyn_map: &dyn Map = &map;

        let mut sum = 0;
        for (k, v) in dyn_map.iter() {
            sum += *k.downcast_ref::<i32>().unwrap() * i32::from(*v.downcast_ref::<i8>().unwrap());
        }
        assert_eq!(sum, 50);
        assert!(dyn_map.get(&3_i32).is_none());
        assert!(dyn_map.get(&1_i64).is_none());
        assert!(!map.is_zero());
    }
}
