use syn::{Attribute, LitStr};

use crate::REFLECT_ATTRIBUTE_NAME;

/// Field-level `#[reflect(..)]` attributes.
#[derive(Default)]
pub(crate) struct FieldAttributes {
    pub ignore: bool,
    pub embedded: bool,
    pub tags: Vec<(String, String)>,
}

impl FieldAttributes {
    pub(crate) fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("ignore") {
                    this.ignore = true;
                } else if meta.path.is_ident("embedded") {
                    this.embedded = true;
                } else if meta.path.is_ident("tag") {
                    meta.parse_nested_meta(|tag| {
                        let Some(key) = tag.path.get_ident() else {
                            return Err(tag.error("tag key must be an identifier"));
                        };
                        let value: LitStr = tag.value()?.parse()?;
                        this.tags.push((key.to_string(), value.value()));
                        Ok(())
                    })?;
                } else {
                    return Err(meta.error(
                        "unsupported reflect attribute, expected one of \
                         `ignore`, `embedded`, `tag(..)`",
                    ));
                }
                Ok(())
            })?;
        }

        Ok(this)
    }
}
