use syn::ext::IdentExt;
use syn::{Attribute, Ident, LitStr, Token};

use crate::REFLECT_ATTRIBUTE_NAME;
use crate::derive_data::attributes::exported_name;

/// A method registered with `getter = ident [as "Name"]` or `setter = ..`.
pub(crate) struct MethodAttribute {
    pub ident: Ident,
    pub name: String,
}

/// Type-level `#[reflect(..)]` attributes.
#[derive(Default)]
pub(crate) struct TypeAttributes {
    pub opaque: bool,
    pub scanner: bool,
    pub valuer: bool,
    pub getters: Vec<MethodAttribute>,
    pub setters: Vec<MethodAttribute>,
}

impl TypeAttributes {
    pub(crate) fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("opaque") {
                    this.opaque = true;
                } else if meta.path.is_ident("scanner") {
                    this.scanner = true;
                } else if meta.path.is_ident("valuer") {
                    this.valuer = true;
                } else if meta.path.is_ident("getter") {
                    this.getters.push(MethodAttribute::parse(meta.value()?)?);
                } else if meta.path.is_ident("setter") {
                    this.setters.push(MethodAttribute::parse(meta.value()?)?);
                } else {
                    return Err(meta.error(
                        "unsupported reflect attribute, expected one of \
                         `opaque`, `scanner`, `valuer`, `getter`, `setter`",
                    ));
                }
                Ok(())
            })?;
        }

        Ok(this)
    }
}

impl MethodAttribute {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let ident = input.call(Ident::parse_any)?;
        let name = if input.peek(Token![as]) {
            input.parse::<Token![as]>()?;
            input.parse::<LitStr>()?.value()
        } else {
            exported_name(&ident.unraw().to_string())
        };
        Ok(Self { ident, name })
    }
}
