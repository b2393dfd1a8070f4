//! Paths of `kp_path` items referenced by generated code.
//!
//! Kept in one place so that the generated code follows the runtime crate
//! when its module structure changes.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `kp_path` crate.
///
/// 1. For crates that depend on `kp_path`, `::kp_path` is returned here.
/// 2. For crates that depend on `keyof`, `::keyof::path` is returned here.
/// 3. For other situations, `::kp_path` is returned here, but this may be incorrect.
///
/// The lookup reads the caller's manifest, so the result is resolved once
/// per derive and passed around.
pub(crate) fn kp_path() -> syn::Path {
    kp_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("kp_path"))
}

// -----------------------------------------------------------------------------
// Items

#[inline(always)]
pub(crate) fn navigate_(kp_path: &syn::Path) -> TokenStream {
    quote! {
        #kp_path::Navigate
    }
}

#[inline(always)]
pub(crate) fn record_(kp_path: &syn::Path) -> TokenStream {
    quote! {
        #kp_path::ops::Record
    }
}

#[inline(always)]
pub(crate) fn sequence_(kp_path: &syn::Path) -> TokenStream {
    quote! {
        #kp_path::ops::Sequence
    }
}

#[inline(always)]
pub(crate) fn option_() -> TokenStream {
    quote! {
        ::core::option::Option
    }
}
