use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::{ReflectBody, ReflectDerive};
use crate::impls::where_clause;

pub(crate) fn impl_reflect(derive: &ReflectDerive) -> TokenStream {
    let reflect_ = crate::path::reflect_(&derive.vc_reflect);
    let info_ = crate::path::info_(&derive.vc_reflect);
    let ops_ = crate::path::ops_(&derive.vc_reflect);
    let box_ = crate::path::box_(&derive.vc_reflect);
    let ident = derive.ident;
    let (impl_generics, ty_generics, _) = derive.generics.split_for_impl();
    let where_clause = where_clause(derive);

    let (kind, body) = match &derive.body {
        ReflectBody::Opaque => {
            let body = quote! {
                #[inline]
                fn is_zero(&self) -> bool {
                    *self == <Self as ::core::default::Default>::default()
                }
            };
            (quote!(Opaque), body)
        }
        ReflectBody::Struct(fields) => {
            let members = fields.iter().map(|field| field.ident).collect::<Vec<_>>();
            let names = fields.iter().map(|field| &field.name);
            let type_name = ident.to_string();
            let body = quote! {
                fn is_zero(&self) -> bool {
                    true #(&& #reflect_::is_zero(&self.#members))*
                }

                fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    f.debug_struct(#type_name)
                        #(.field(#names, &(&self.#members as &dyn #reflect_)))*
                        .finish()
                }
            };
            (quote!(Struct), body)
        }
    };

    let scanner = derive.attrs.scanner.then(|| {
        quote! {
            #[inline]
            fn as_scanner(&mut self) -> ::core::option::Option<&mut dyn #ops_::Scanner> {
                ::core::option::Option::Some(self as &mut dyn #ops_::Scanner)
            }
        }
    });
    let valuer = derive.attrs.valuer.then(|| {
        quote! {
            #[inline]
            fn as_valuer(&self) -> ::core::option::Option<&dyn #ops_::Valuer> {
                ::core::option::Option::Some(self as &dyn #ops_::Valuer)
            }
        }
    });

    quote! {
        impl #impl_generics #reflect_ for #ident #ty_generics #where_clause {
            #[inline]
            fn reflect_kind(&self) -> #info_::ReflectKind {
                #info_::ReflectKind::#kind
            }

            #[inline]
            fn reflect_ref(&self) -> #ops_::ReflectRef<'_> {
                #ops_::ReflectRef::#kind(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> #ops_::ReflectMut<'_> {
                #ops_::ReflectMut::#kind(self)
            }

            fn set(
                &mut self,
                value: #box_<dyn #reflect_>,
            ) -> ::core::result::Result<(), #box_<dyn #reflect_>> {
                *self = <dyn #reflect_>::take::<Self>(value)?;
                ::core::result::Result::Ok(())
            }

            #[inline]
            fn reflect_clone(&self) -> #box_<dyn #reflect_> {
                #box_::new(::core::clone::Clone::clone(self))
            }

            #body
            #scanner
            #valuer
        }
    }
}
