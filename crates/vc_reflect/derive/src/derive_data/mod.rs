//! Parsed form of a `#[derive(Reflect)]` input.

// -----------------------------------------------------------------------------
// Modules

mod attributes;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use attributes::{FieldAttributes, TypeAttributes};

use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, Generics, Ident, Type, Visibility};

/// A named field that takes part in reflection.
pub(crate) struct StructField<'a> {
    pub ident: &'a Ident,
    pub name: String,
    pub ty: &'a Type,
    pub public: bool,
    pub attrs: FieldAttributes,
}

/// The shape the derive expands to.
pub(crate) enum ReflectBody<'a> {
    Opaque,
    Struct(Vec<StructField<'a>>),
}

pub(crate) struct ReflectDerive<'a> {
    pub ident: &'a Ident,
    pub generics: &'a Generics,
    pub attrs: TypeAttributes,
    pub body: ReflectBody<'a>,
    pub vc_reflect: syn::Path,
}

impl<'a> ReflectDerive<'a> {
    pub(crate) fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        let attrs = TypeAttributes::parse_attrs(&input.attrs)?;

        let body = if attrs.opaque {
            ReflectBody::Opaque
        } else {
            match &input.data {
                Data::Struct(data) => match &data.fields {
                    Fields::Named(fields) => {
                        let mut list = Vec::with_capacity(fields.named.len());
                        for field in &fields.named {
                            let field_attrs = FieldAttributes::parse_attrs(&field.attrs)?;
                            if field_attrs.ignore {
                                continue;
                            }
                            // Named fields always carry an ident.
                            let Some(ident) = field.ident.as_ref() else {
                                continue;
                            };
                            list.push(StructField {
                                ident,
                                name: ident.unraw().to_string(),
                                ty: &field.ty,
                                public: matches!(field.vis, Visibility::Public(_)),
                                attrs: field_attrs,
                            });
                        }
                        ReflectBody::Struct(list)
                    }
                    _ => {
                        return Err(syn::Error::new_spanned(
                            &input.ident,
                            "`Reflect` can only be derived for structs with named fields, \
                             add `#[reflect(opaque)]` to treat the type as a leaf value",
                        ));
                    }
                },
                _ => {
                    return Err(syn::Error::new_spanned(
                        &input.ident,
                        "`Reflect` can only be derived for enums with `#[reflect(opaque)]`",
                    ));
                }
            }
        };

        if matches!(body, ReflectBody::Opaque)
            && (!attrs.getters.is_empty() || !attrs.setters.is_empty())
        {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "opaque types cannot register getters or setters",
            ));
        }

        Ok(Self {
            ident: &input.ident,
            generics: &input.generics,
            attrs,
            body,
            vc_reflect: crate::path::vc_reflect(),
        })
    }
}
