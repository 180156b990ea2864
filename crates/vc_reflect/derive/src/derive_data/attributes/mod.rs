//! Provide some tools for parsing `#[reflect(..)]` attributes.

// -----------------------------------------------------------------------------
// Modules

mod field_attributes;
mod type_attributes;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use field_attributes::FieldAttributes;
pub(crate) use type_attributes::TypeAttributes;

/// Converts a `snake_case` identifier into its exported-style `UpperCamelCase` name.
pub(crate) fn exported_name(ident: &str) -> String {
    let mut name = String::with_capacity(ident.len());
    let mut upper = true;
    for ch in ident.chars() {
        if ch == '_' {
            upper = true;
        } else if upper {
            name.extend(ch.to_uppercase());
            upper = false;
        } else {
            name.push(ch);
        }
    }
    name
}
