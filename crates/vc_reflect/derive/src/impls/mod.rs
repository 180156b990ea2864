//! Code generation for `#[derive(Reflect)]`.

// -----------------------------------------------------------------------------
// Modules

mod struct_kind;
mod trait_reflect;
mod trait_typed;

// -----------------------------------------------------------------------------
// Internal API

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Generics, WhereClause, parse_quote};

use crate::derive_data::{ReflectBody, ReflectDerive};

pub(crate) fn expand(derive: &ReflectDerive) -> TokenStream {
    let typed = trait_typed::impl_typed(derive);
    let reflect = trait_reflect::impl_reflect(derive);
    let kind = match &derive.body {
        ReflectBody::Struct(fields) => struct_kind::impl_struct(derive, fields),
        ReflectBody::Opaque => TokenStream::new(),
    };

    quote! {
        #typed
        #reflect
        #kind
    }
}

/// Returns the where clause of the impls, bounding every type parameter
/// so that it can be reflected as a field.
pub(crate) fn where_clause(derive: &ReflectDerive) -> WhereClause {
    let info_ = crate::path::info_(&derive.vc_reflect);
    let generics: &Generics = derive.generics;

    let mut clause = generics
        .where_clause
        .clone()
        .unwrap_or_else(|| parse_quote!(where));
    for param in generics.type_params() {
        let ident = &param.ident;
        clause.predicates.push(parse_quote! {
            #ident: #info_::Typed + ::core::clone::Clone + ::core::default::Default
        });
    }
    clause
}
