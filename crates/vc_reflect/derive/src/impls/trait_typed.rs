use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::{ReflectBody, ReflectDerive};
use crate::impls::where_clause;

pub(crate) fn impl_typed(derive: &ReflectDerive) -> TokenStream {
    let info_ = crate::path::info_(&derive.vc_reflect);
    let vec_ = crate::path::vec_(&derive.vc_reflect);
    let ident = derive.ident;
    let (impl_generics, ty_generics, _) = derive.generics.split_for_impl();
    let where_clause = where_clause(derive);

    let info = match &derive.body {
        ReflectBody::Opaque => quote! {
            #info_::TypeInfo::Opaque(
                #info_::OpaqueInfo::new::<Self>(#info_::ScalarKind::Other)
            )
        },
        ReflectBody::Struct(fields) => {
            let fields = fields.iter().map(|field| {
                let name = &field.name;
                let ty = field.ty;
                let public = field.public;
                let embedded = field.attrs.embedded;
                let tags = field.attrs.tags.iter().map(|(k, v)| quote!((#k, #v)));
                quote! {
                    #info_::NamedField::new::<#ty>(#name)
                        .with_tags(&[#(#tags),*])
                        .with_embedded(#embedded)
                        .with_public(#public)
                }
            });
            let getters = derive.attrs.getters.iter().map(|method| {
                let name = &method.name;
                let method = &method.ident;
                quote!(#info_::Getter::new::<Self, _>(#name, Self::#method))
            });
            let setters = derive.attrs.setters.iter().map(|method| {
                let name = &method.name;
                let method = &method.ident;
                quote!(#info_::Setter::new::<Self, _>(#name, Self::#method))
            });
            quote! {
                #info_::TypeInfo::Struct(
                    #info_::StructInfo::new::<Self>(&[#(#fields),*])
                        .with_getters(#vec_::from([#(#getters),*]))
                        .with_setters(#vec_::from([#(#setters),*]))
                )
            }
        }
    };

    let cell = if derive.generics.type_params().next().is_some() {
        quote! {
            static CELL: #info_::GenericTypeInfoCell = #info_::GenericTypeInfoCell::new();
            CELL.get_or_insert::<Self>(|| #info)
        }
    } else {
        quote! {
            static CELL: #info_::NonGenericTypeInfoCell = #info_::NonGenericTypeInfoCell::new();
            CELL.get_or_init(|| #info)
        }
    };

    quote! {
        impl #impl_generics #info_::Typed for #ident #ty_generics #where_clause {
            fn type_info() -> &'static #info_::TypeInfo {
                #cell
            }
        }
    }
}
