// -----------------------------------------------------------------------------
// Modules

mod enum_kind;
mod opaque_kind;
mod struct_kind;

// -----------------------------------------------------------------------------
// Internal API

use proc_macro::TokenStream;
use quote::quote;
use syn::DeriveInput;

use crate::derive_data::{NavigateDerive, StructField};

/// Provided for `#[derive(Navigate)]`.
pub(crate) fn match_navigate_impls(ast: DeriveInput) -> TokenStream {
    // Parse type kind, attribute and fields infomation.
    let navigate_derive = match NavigateDerive::from_input(&ast) {
        Ok(val) => val,
        Err(err) => return err.into_compile_error().into(),
    };

    let result = match &navigate_derive {
        NavigateDerive::Struct(info) => struct_kind::impl_struct(info, false),
        NavigateDerive::TupleStruct(info) => struct_kind::impl_struct(info, true),
        NavigateDerive::Enum(info) => enum_kind::impl_enum(info),
        NavigateDerive::UnitStruct(meta) | NavigateDerive::Opaque(meta) => {
            Ok(opaque_kind::impl_opaque(meta))
        }
    };

    let navigate_impls = match result {
        Ok(tokens) => tokens,
        Err(err) => return err.into_compile_error().into(),
    };

    TokenStream::from(quote! {
        const _: () = {
            #navigate_impls
        };
    })
}

/// Two fields reachable under the same segment would make one of them unreachable.
fn check_unique_segments<'a, 'b: 'a>(
    fields: impl IntoIterator<Item = &'a StructField<'b>>,
) -> syn::Result<()> {
    let mut seen = std::collections::BTreeSet::new();
    for field in fields {
        let name = field.segment_name();
        if !seen.insert(name.clone()) {
            let span = match &field.attrs.rename {
                Some(lit) => lit.span(),
                None => syn::spanned::Spanned::span(field.data),
            };
            return Err(syn::Error::new(
                span,
                format!("duplicate navigation segment `{name}`"),
            ));
        }
    }
    Ok(())
}
