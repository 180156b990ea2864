use alloc::boxed::Box;
use alloc::string::String;
use core::error::Error;

use thiserror::Error;
use vc_reflect::ops::BridgeError;

/// A type-erased error returned by user supplied converters.
pub type BoxedError = Box<dyn Error + Send + Sync>;

// -----------------------------------------------------------------------------
// TagError

/// A malformed `copier` field tag.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TagError {
    #[error("copier field name tag must be start Upper case, found {0:?}")]
    LowercaseAlias(String),
}

// -----------------------------------------------------------------------------
// CopyError

/// Errors returned by a copy operation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CopyError {
    #[error("copy destination must be non-nil and addressable")]
    InvalidDestination,

    #[error("copy source must be non-nil")]
    InvalidSource,

    #[error("map key type mismatch: {from} cannot be converted to {to}")]
    KeyTypeMismatch {
        from: &'static str,
        to: &'static str,
    },

    #[error("conversion from {from} to {to} is not supported")]
    UnsupportedConversion {
        from: &'static str,
        to: &'static str,
    },

    #[error("field {field} has must tag but was not copied")]
    ObligationUnmet { field: String },

    #[error(transparent)]
    Tag(#[from] TagError),

    #[error("field parser failed: {0}")]
    Parser(String),

    #[error("scanner or valuer failed: {0}")]
    Scanner(#[from] BridgeError),

    #[error("converter from {from} to {to} failed: {source}")]
    Converter {
        from: &'static str,
        to: &'static str,
        source: BoxedError,
    },
}
