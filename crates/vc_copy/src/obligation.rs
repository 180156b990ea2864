use alloc::string::String;
use alloc::vec::Vec;

use bitflags::bitflags;

use crate::error::CopyError;
use crate::shape::FlatField;
use crate::tag::FieldTag;

bitflags! {
    /// Per destination field bookkeeping of one struct copy.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub(crate) struct Obligation: u8 {
        const MUST = 1 << 0;
        const NO_PANIC = 1 << 1;
        const COPIED = 1 << 2;
    }
}

impl From<&FieldTag<'_>> for Obligation {
    fn from(tag: &FieldTag<'_>) -> Self {
        let mut flags = Obligation::empty();
        flags.set(Obligation::MUST, tag.must);
        flags.set(Obligation::NO_PANIC, tag.no_panic);
        flags
    }
}

// -----------------------------------------------------------------------------
// ObligationViolation

/// A `must` field that was left unwritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObligationViolation {
    /// Tagged `must` only, the copy panics.
    Fatal { field: String },
    /// Tagged `must,nopanic`, the copy fails with an error.
    Recoverable { field: String },
}

impl ObligationViolation {
    /// Panics for a fatal violation, converts a recoverable one into an error.
    pub fn raise(self) -> CopyError {
        match self {
            Self::Fatal { field } => panic!("field {field} has must tag but was not copied"),
            Self::Recoverable { field } => {
                log::warn!("field {field} has must tag but was not copied");
                CopyError::ObligationUnmet { field }
            }
        }
    }
}

// -----------------------------------------------------------------------------
// ObligationState

/// Tracks which destination fields were written during one struct copy.
#[derive(Debug)]
pub(crate) struct ObligationState {
    flags: Vec<Obligation>,
}

impl ObligationState {
    pub fn new(tags: &[FieldTag<'_>]) -> Self {
        Self {
            flags: tags.iter().map(Obligation::from).collect(),
        }
    }

    #[inline]
    pub fn mark_copied(&mut self, index: usize) {
        if let Some(flags) = self.flags.get_mut(index) {
            flags.insert(Obligation::COPIED);
        }
    }

    #[inline]
    pub fn is_copied(&self, index: usize) -> bool {
        self.flags
            .get(index)
            .is_some_and(|flags| flags.contains(Obligation::COPIED))
    }

    /// Returns the first unmet obligation in field order.
    pub fn check(&self, fields: &[FlatField]) -> Option<ObligationViolation> {
        let (index, flags) = self.flags.iter().enumerate().find(|(_, flags)| {
            flags.contains(Obligation::MUST) && !flags.contains(Obligation::COPIED)
        })?;

        let field = fields
            .get(index)
            .map_or_else(String::new, |f| f.name.clone());

        Some(if flags.contains(Obligation::NO_PANIC) {
            ObligationViolation::Recoverable { field }
        } else {
            ObligationViolation::Fatal { field }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn must(no_panic: bool) -> FieldTag<'static> {
        FieldTag {
            must: true,
            no_panic,
            ..FieldTag::default()
        }
    }

    #[test]
    fn tracking() {
        let mut state = ObligationState::new(&[FieldTag::default(), must(false)]);
        assert!(!state.is_copied(1));
        assert!(matches!(
            state.check(&[]),
            Some(ObligationViolation::Fatal { .. })
        ));

        state.mark_copied(1);
        assert!(state.is_copied(1));
        assert_eq!(state.check(&[]), None);
    }

    #[test]
    fn recoverable() {
        let state = ObligationState::new(&[must(true)]);
        let violation = state.check(&[]).unwrap();
        assert!(matches!(
            violation.raise(),
            CopyError::ObligationUnmet { .. }
        ));
    }

    #[test]
    #[should_panic(expected = "has must tag but was not copied")]
    fn fatal() {
        let _ = ObligationViolation::Fatal {
            field: String::from("Name"),
        }
        .raise();
    }
}
