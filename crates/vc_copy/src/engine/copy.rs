use alloc::string::String;
use alloc::vec::Vec;

use vc_reflect::Reflect;
use vc_reflect::info::{MapInfo, ReflectKind, StructInfo, TypeInfo};
use vc_reflect::ops::{Dynamic, List, Map, ReflectMut, ReflectRef};
use vc_utils::hash::HashMap;

use super::Copier;
use super::set::{Transfer, unsupported};
use crate::convert::{convert_assign, convertible};
use crate::error::{CopyError, TagError};
use crate::names::{dest_name_of, source_name_of};
use crate::obligation::ObligationState;
use crate::shape::{self, FlatField};
use crate::tag::Flags;

// -----------------------------------------------------------------------------
// StructPlan

/// Field matching data of one source and destination struct pair.
struct StructPlan {
    src_info: Option<&'static StructInfo>,
    src_fields: Vec<FlatField>,
    dst_fields: Vec<FlatField>,
    /// Destination field index by name, the shallowest field wins.
    dst_index: HashMap<String, usize>,
    flags: Flags,
}

impl StructPlan {
    fn new(src: &'static TypeInfo, dst: &'static TypeInfo) -> Result<Self, TagError> {
        let src_fields = shape::deep_fields(src);
        let dst_fields = shape::deep_fields(dst);
        let flags = Flags::collect(&src_fields, &dst_fields)?;

        let mut dst_index: HashMap<String, usize> = HashMap::default();
        for (index, field) in dst_fields.iter().enumerate() {
            match dst_index.get(&field.name) {
                Some(&prev) if dst_fields[prev].depth() <= field.depth() => {}
                _ => {
                    dst_index.insert(field.name.clone(), index);
                }
            }
        }

        Ok(Self {
            src_info: shape::base_struct(src),
            src_fields,
            dst_fields,
            dst_index,
            flags,
        })
    }

    #[inline]
    fn is_ignored(&self, index: usize) -> bool {
        self.flags.dst_tags.get(index).is_some_and(|tag| tag.ignore)
    }
}

// -----------------------------------------------------------------------------
// Dispatch

impl Copier<'_> {
    /// Copies `src` into `dst` by shape.
    ///
    /// A nil source leaves the destination untouched, null destination
    /// pointers are allocated.
    pub(super) fn copy_value(&self, dst: &mut dyn Reflect, src: &dyn Reflect) -> Result<(), CopyError> {
        let Some(src) = shape::indirect(src) else {
            log::trace!("skip nil source");
            return Ok(());
        };
        let dst = shape::indirect_mut(dst);

        if let ReflectMut::Dynamic(slot) = dst.reflect_mut() {
            return self.copy_into_dynamic(slot, src);
        }

        let src_info = src.reflect_type_info();
        let dst_info = dst.reflect_type_info();
        let src_kind = src.reflect_kind();

        if !matches!(src_kind, ReflectKind::List | ReflectKind::Struct | ReflectKind::Map)
            && convertible(src_info, dst_info)
        {
            log::trace!("assign {} to {}", src_info.type_path(), dst_info.type_path());
            if !convert_assign(dst, src) {
                return Err(unsupported(src, dst));
            }
            return Ok(());
        }

        if let (ReflectRef::Map(from), TypeInfo::Map(to_info)) = (src.reflect_ref(), dst_info) {
            if let ReflectMut::Map(to) = dst.reflect_mut() {
                log::trace!("copy map {} to {}", src_info.type_path(), dst_info.type_path());
                return self.copy_map(to, to_info, from);
            }
        }

        if let (ReflectRef::List(from), ReflectMut::List(to)) = (src.reflect_ref(), dst.reflect_mut()) {
            if convertible(shape::indirect_type(src_info), shape::indirect_type(dst_info)) {
                log::trace!("copy list {} to {}", src_info.type_path(), dst_info.type_path());
                return self.copy_list(to, from);
            }
        }

        if shape::base_struct(src_info).is_some() && shape::base_struct(dst_info).is_some() {
            log::trace!("copy fields {} to {}", src_info.type_path(), dst_info.type_path());
            let plan = StructPlan::new(src_info, dst_info)?;
            return self.copy_structs(dst, src, &plan);
        }

        log::trace!("nothing to copy from {} to {}", src_info.type_path(), dst_info.type_path());
        Ok(())
    }

    /// Builds a fresh value for a dynamic slot and stores it once fully copied.
    ///
    /// The value takes the type currently held by the slot, or the source
    /// type if the slot is nil.
    fn copy_into_dynamic(&self, slot: &mut Dynamic, src: &dyn Reflect) -> Result<(), CopyError> {
        let info = match slot.get() {
            Some(current) => current.reflect_type_info(),
            None => src.reflect_type_info(),
        };
        let mut value = info.new_default();
        self.copy_value(&mut *value, src)?;
        slot.replace(value);
        Ok(())
    }

    fn copy_map(&self, to: &mut dyn Map, to_info: &MapInfo, from: &dyn Map) -> Result<(), CopyError> {
        let from_info = from.reflect_type_info().as_map().map_err(|_| unsupported(from, to))?;
        let (key_info, value_info) = (to_info.key(), to_info.value());

        if !convertible(from_info.key(), key_info) {
            return Err(CopyError::KeyTypeMismatch {
                from: from_info.key().type_path(),
                to: key_info.type_path(),
            });
        }

        for (key, value) in from.iter() {
            let mut new_key = key_info.new_default();
            if self.set(&mut *new_key, key)? == Transfer::Declined {
                return Err(unsupported(key, &*new_key));
            }

            let mut new_value = value_info.new_default();
            if self.set(&mut *new_value, value)? == Transfer::Declined {
                self.copy_value(&mut *new_value, value)?;
            }

            to.insert_boxed(new_key, new_value)
                .map_err(|(key, value)| unsupported(&*key, &*value))?;
        }
        Ok(())
    }

    /// Copies element by element, growing `to` to the length of `from`.
    fn copy_list(&self, to: &mut dyn List, from: &dyn List) -> Result<(), CopyError> {
        if to.len() < from.len() {
            to.resize_with_default(from.len());
        }

        for (index, item) in from.iter().enumerate() {
            let Some(slot) = to.get_mut(index) else {
                break;
            };
            if self.set(slot, item)? == Transfer::Declined {
                self.copy_value(slot, item)?;
            }
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Structs

    /// Copies between structs or lists of structs.
    ///
    /// A list destination receives one new element per source element.
    /// A single struct destination receives every source element in turn.
    fn copy_structs(&self, dst: &mut dyn Reflect, src: &dyn Reflect, plan: &StructPlan) -> Result<(), CopyError> {
        let from_list = src.reflect_ref().into_list();
        let count = from_list.map_or(1, |list| list.len());
        let source_at = |index: usize| match from_list {
            Some(list) => list.get(index).and_then(shape::indirect),
            None => Some(src),
        };

        let item_info = dst.reflect_type_info().as_list().ok().map(|info| info.item());
        match (dst.reflect_mut(), item_info) {
            (ReflectMut::List(to), Some(item_info)) => {
                for index in 0..count {
                    let mut item = item_info.new_default();
                    self.copy_fields(shape::indirect_mut(&mut *item), source_at(index), plan)?;

                    match to.get_mut(index) {
                        Some(slot) => slot.set(item).map_err(|item| unsupported(&*item, &*slot))?,
                        None => to.push(item).map_err(|item| unsupported(&*item, &*to))?,
                    }
                }
            }
            (dst, _) => {
                let dst = dst.into_reflect();
                for index in 0..count {
                    self.copy_fields(dst, source_at(index), plan)?;
                }
            }
        }
        Ok(())
    }

    /// Copies the fields of one source struct into one destination struct,
    /// then checks the `must` obligations of the destination.
    fn copy_fields(&self, dst: &mut dyn Reflect, src: Option<&dyn Reflect>, plan: &StructPlan) -> Result<(), CopyError> {
        let mut state = ObligationState::new(&plan.flags.dst_tags);

        if let Some(src) = src {
            self.copy_named_fields(dst, src, plan, &mut state)?;
            self.copy_from_getters(dst, src, plan, &mut state)?;
        }

        match state.check(&plan.dst_fields) {
            Some(violation) => Err(violation.raise()),
            None => Ok(()),
        }
    }

    fn copy_named_fields(
        &self,
        dst: &mut dyn Reflect,
        src: &dyn Reflect,
        plan: &StructPlan,
        state: &mut ObligationState,
    ) -> Result<(), CopyError> {
        for field in &plan.src_fields {
            let dst_name = dest_name_of(&field.name, &plan.flags);
            let dst_index = plan.dst_index.get(dst_name).copied();

            if dst_index.is_some_and(|index| plan.is_ignored(index)) {
                log::trace!("skip ignored field {dst_name}");
                continue;
            }

            let Some(value) = shape::field_at_path(src, &field.path) else {
                continue;
            };
            if self.options.ignore_empty && value.is_zero() {
                continue;
            }
            if self.options.ignore_private_fields && !is_public(field, dst_index, plan) {
                log::trace!("skip private field {}", field.name);
                continue;
            }
            if !self.hooks.iter().all(|hook| hook(value, field.field)) {
                log::trace!("hook skipped field {}", field.name);
                continue;
            }

            let Some(index) = dst_index else {
                self.call_setter(dst, dst_name, value)?;
                continue;
            };
            let Some(slot) = shape::field_at_path_mut(dst, &plan.dst_fields[index].path) else {
                continue;
            };

            if !self.parse(slot, value)? && self.set(slot, value)? == Transfer::Declined {
                self.copy_value(slot, value)?;
            }
            state.mark_copied(index);
        }
        Ok(())
    }

    /// Fills destination fields that are still unwritten from source getters.
    fn copy_from_getters(
        &self,
        dst: &mut dyn Reflect,
        src: &dyn Reflect,
        plan: &StructPlan,
        state: &mut ObligationState,
    ) -> Result<(), CopyError> {
        let Some(src_info) = plan.src_info else {
            return Ok(());
        };
        if src_info.getters().is_empty() {
            return Ok(());
        }

        for (index, field) in plan.dst_fields.iter().enumerate() {
            if state.is_copied(index) || plan.is_ignored(index) {
                continue;
            }
            let name = source_name_of(&field.name, &plan.flags);
            let Some(value) = src_info.getter(name).and_then(|getter| getter.call(src)) else {
                continue;
            };
            if self.options.ignore_empty && value.is_zero() {
                continue;
            }
            let Some(slot) = shape::field_at_path_mut(dst, &field.path) else {
                continue;
            };

            log::trace!("copy getter {name} to field {}", field.name);
            if self.set(slot, &*value)? == Transfer::Declined {
                self.copy_value(slot, &*value)?;
            }
            state.mark_copied(index);
        }
        Ok(())
    }

    /// Passes a source field without a destination field to a setter.
    fn call_setter(&self, dst: &mut dyn Reflect, name: &str, value: &dyn Reflect) -> Result<(), CopyError> {
        let setter = dst
            .reflect_type_info()
            .as_struct()
            .ok()
            .and_then(|info| info.setter(name))
            .filter(|setter| setter.accepts(value.ty_id()));

        match setter {
            Some(setter) => {
                log::trace!("copy field {name} through setter");
                setter
                    .call(dst, value.reflect_clone())
                    .map_err(|_| CopyError::UnsupportedConversion {
                        from: value.reflect_type_info().type_path(),
                        to: setter.arg().type_path(),
                    })
            }
            None => {
                log::trace!("no destination for field {name}");
                Ok(())
            }
        }
    }

    fn parse(&self, slot: &mut dyn Reflect, value: &dyn Reflect) -> Result<bool, CopyError> {
        for parser in &self.parsers {
            if parser(slot, value)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

/// A field is private if either side of the match is.
fn is_public(field: &FlatField, dst_index: Option<usize>, plan: &StructPlan) -> bool {
    field.field.is_public()
        && dst_index
            .and_then(|index| plan.dst_fields.get(index))
            .is_none_or(|dst| dst.field.is_public())
}
