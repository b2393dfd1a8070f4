use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::NavigateMeta;

/// Implement `Navigate` without any shape: unit structs and `#[navigate(opaque)]` types.
pub(crate) fn impl_opaque(meta: &NavigateMeta) -> TokenStream {
    let navigate_ = crate::path::navigate_(meta.kp_path());
    let ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) = meta.generics().split_for_impl();

    quote! {
        impl #impl_generics #navigate_ for #ident #ty_generics #where_clause {}
    }
}
