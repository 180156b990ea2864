//! Paths to items of `vc_reflect`, as seen from the invoking crate.

use proc_macro2::TokenStream;
use quote::quote;

/// Get the correct access path to the `vc_reflect` crate.
///
/// See [`vc_macro_utils::Manifest`] for the resolution rules.
pub(crate) fn vc_reflect() -> syn::Path {
    vc_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("vc_reflect"))
}

#[inline(always)]
pub(crate) fn reflect_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! { #vc_reflect_path::Reflect }
}

#[inline(always)]
pub(crate) fn info_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! { #vc_reflect_path::info }
}

#[inline(always)]
pub(crate) fn ops_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! { #vc_reflect_path::ops }
}

#[inline(always)]
pub(crate) fn box_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! { #vc_reflect_path::__macro_exports::Box }
}

#[inline(always)]
pub(crate) fn vec_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! { #vc_reflect_path::__macro_exports::Vec }
}
