#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod convert;
mod engine;
mod error;
mod names;
mod obligation;
mod options;
mod registry;
mod shape;
mod tag;

// -----------------------------------------------------------------------------
// Exports

pub use engine::{Copier, FieldHook, FieldParser, copy, copy_with_options};
pub use error::{BoxedError, CopyError, TagError};
pub use names::exported_name;
pub use obligation::ObligationViolation;
pub use options::CopyOptions;
pub use registry::{ConverterRegistry, TypePair, TypedCopier};
pub use tag::{FieldTag, TAG_KEY, parse_tag};

/// Re-export of the reflection crate, for `#[derive(Reflect)]` in dependents.
pub use vc_reflect as reflect;
