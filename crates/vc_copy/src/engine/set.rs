use vc_reflect::Reflect;
use vc_reflect::info::ReflectKind;
use vc_reflect::ops::{Pointer, ReflectMut, ReflectRef};

use super::Copier;
use crate::convert::{assignable, convert_assign, convertible};
use crate::error::CopyError;
use crate::registry::TypePair;
use crate::shape;

/// Outcome of a direct assignment attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Transfer {
    /// The destination holds its final value.
    Handled,
    /// The value must be copied member by member.
    Declined,
}

impl Copier<'_> {
    /// Tries to write `from` into `to` as a whole.
    pub(super) fn set(&self, to: &mut dyn Reflect, from: &dyn Reflect) -> Result<Transfer, CopyError> {
        if let Some(registry) = self.registry {
            let pair = TypePair::new(
                (from.ty_id(), from.reflect_type_info().type_path()),
                (to.ty_id(), to.reflect_type_info().type_path()),
            );
            if let Some(converter) = registry.lookup(&pair) {
                log::trace!("converter {pair:?}");
                return match converter.copy(to, from) {
                    Ok(()) => Ok(Transfer::Handled),
                    Err(source) => Err(CopyError::Converter {
                        from: pair.src_name(),
                        to: pair.dst_name(),
                        source,
                    }),
                };
            }
        }

        if let ReflectMut::Pointer(pointer) = to.reflect_mut() {
            return self.set_pointer(pointer, from);
        }

        let mut from = from;
        loop {
            if self.options.deep_copy {
                let kind = match to.reflect_ref() {
                    ReflectRef::Dynamic(slot) if slot.is_nil() => from.reflect_kind(),
                    other => other.kind(),
                };
                if matches!(kind, ReflectKind::Struct | ReflectKind::Map | ReflectKind::List) {
                    return Ok(Transfer::Declined);
                }
            }

            if convertible(from.reflect_type_info(), to.reflect_type_info()) {
                if !convert_assign(to, from) {
                    return Err(unsupported(from, to));
                }
                return Ok(Transfer::Handled);
            }

            if let Some(scanner) = to.as_scanner() {
                if let Some(value) = shape::indirect(from) {
                    scanner.scan(value)?;
                }
                return Ok(Transfer::Handled);
            }

            if let Some(valuer) = from.as_valuer() {
                if let Some(value) = valuer.value()? {
                    if assignable(value.reflect_type_info(), to.reflect_type_info()) {
                        to.set(value).map_err(|value| unsupported(&*value, to))?;
                    }
                }
                return Ok(Transfer::Handled);
            }

            let inner = match from.reflect_ref() {
                ReflectRef::Pointer(pointer) => pointer.pointee(),
                ReflectRef::Dynamic(slot) => slot.get(),
                _ => return Ok(Transfer::Declined),
            };
            match inner {
                Some(inner) => from = inner,
                None => return Ok(Transfer::Handled),
            }
        }
    }

    fn set_pointer(&self, to: &mut dyn Pointer, from: &dyn Reflect) -> Result<Transfer, CopyError> {
        if shape::is_nil(from) {
            to.reset();
            return Ok(Transfer::Handled);
        }

        // Same pointer types share the allocation unless copying deeply.
        if !self.options.deep_copy && to.ty_id() == from.ty_id() {
            to.set(from.reflect_clone())
                .map_err(|value| unsupported(&*value, to))?;
            return Ok(Transfer::Handled);
        }

        if to.is_null() {
            if let Some(valuer) = from.as_valuer() {
                if valuer.value()?.is_none() {
                    return Ok(Transfer::Handled);
                }
            }
        }

        self.set(to.alloc(), from)
    }
}

pub(super) fn unsupported(from: &dyn Reflect, to: &dyn Reflect) -> CopyError {
    CopyError::UnsupportedConversion {
        from: from.reflect_type_info().type_path(),
        to: to.reflect_type_info().type_path(),
    }
}
