use proc_macro2::{Literal, TokenStream};
use quote::quote;

use crate::derive_data::{ReflectDerive, StructField};
use crate::impls::where_clause;

pub(crate) fn impl_struct(derive: &ReflectDerive, fields: &[StructField]) -> TokenStream {
    let reflect_ = crate::path::reflect_(&derive.vc_reflect);
    let ops_ = crate::path::ops_(&derive.vc_reflect);
    let ident = derive.ident;
    let (impl_generics, ty_generics, _) = derive.generics.split_for_impl();
    let where_clause = where_clause(derive);

    let members = fields.iter().map(|field| field.ident).collect::<Vec<_>>();
    let names = fields.iter().map(|field| &field.name).collect::<Vec<_>>();
    let indices = (0..fields.len()).map(Literal::usize_unsuffixed).collect::<Vec<_>>();
    let len = fields.len();

    quote! {
        impl #impl_generics #ops_::Struct for #ident #ty_generics #where_clause {
            fn field(&self, name: &str) -> ::core::option::Option<&dyn #reflect_> {
                match name {
                    #(#names => ::core::option::Option::Some(&self.#members as &dyn #reflect_),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn field_mut(&mut self, name: &str) -> ::core::option::Option<&mut dyn #reflect_> {
                match name {
                    #(#names => ::core::option::Option::Some(&mut self.#members as &mut dyn #reflect_),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn field_at(&self, index: usize) -> ::core::option::Option<&dyn #reflect_> {
                match index {
                    #(#indices => ::core::option::Option::Some(&self.#members as &dyn #reflect_),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn field_at_mut(&mut self, index: usize) -> ::core::option::Option<&mut dyn #reflect_> {
                match index {
                    #(#indices => ::core::option::Option::Some(&mut self.#members as &mut dyn #reflect_),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn name_at(&self, index: usize) -> ::core::option::Option<&str> {
                match index {
                    #(#indices => ::core::option::Option::Some(#names),)*
                    _ => ::core::option::Option::None,
                }
            }

            #[inline]
            fn field_len(&self) -> usize {
                #len
            }
        }
    }
}
