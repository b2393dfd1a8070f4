use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::{EnumVariant, NavigateEnum, VariantFields};

/// Implement `Navigate`, `Record` and `Sequence` for an enum.
///
/// Each shape is only exposed while a variant of that shape is active.
pub(crate) fn impl_enum(info: &NavigateEnum) -> syn::Result<TokenStream> {
    let meta = &info.meta;
    let kp_path = meta.kp_path();
    let navigate_ = crate::path::navigate_(kp_path);
    let record_ = crate::path::record_(kp_path);
    let sequence_ = crate::path::sequence_(kp_path);
    let option_ = crate::path::option_();

    let ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) = meta.generics().split_for_impl();

    for variant in &info.variants {
        super::check_unique_segments(variant.active_fields())?;
    }

    let record_variants = info
        .variants
        .iter()
        .filter(|variant| !matches!(variant.fields, VariantFields::Unit))
        .collect::<Vec<_>>();
    let tuple_variants = info
        .variants
        .iter()
        .filter(|variant| matches!(variant.fields, VariantFields::Unnamed(_)))
        .collect::<Vec<_>>();

    let as_record_tokens = if record_variants.is_empty() {
        crate::utils::empty()
    } else {
        let patterns = record_variants.iter().map(|variant| wildcard_pattern(variant));
        quote! {
            #[inline]
            fn as_record(&self) -> #option_<&dyn #record_> {
                if ::core::matches!(self, #( #patterns )|*) {
                    #option_::Some(self as &dyn #record_)
                } else {
                    #option_::None
                }
            }
        }
    };

    let as_sequence_tokens = if tuple_variants.is_empty() {
        crate::utils::empty()
    } else {
        let patterns = tuple_variants.iter().map(|variant| wildcard_pattern(variant));
        quote! {
            #[inline]
            fn as_sequence(&self) -> #option_<&dyn #sequence_> {
                if ::core::matches!(self, #( #patterns )|*) {
                    #option_::Some(self as &dyn #sequence_)
                } else {
                    #option_::None
                }
            }
        }
    };

    let field_arms = record_variants.iter().map(|variant| {
        let pattern = binding_pattern(variant);
        let (names, bindings): (Vec<_>, Vec<_>) = variant
            .active_fields()
            .map(|field| (field.segment_name(), field.binding()))
            .unzip();
        quote! {
            #pattern => match name {
                #( #names => #option_::Some(#navigate_::as_navigate(#bindings)), )*
                _ => #option_::None,
            },
        }
    });

    let field_at_arms = record_variants.iter().map(|variant| {
        let pattern = binding_pattern(variant);
        let bindings = variant.active_fields().map(|field| field.binding());
        let indices = 0..variant.active_fields().count();
        quote! {
            #pattern => match index {
                #( #indices => #option_::Some(#navigate_::as_navigate(#bindings)), )*
                _ => #option_::None,
            },
        }
    });

    let name_at_arms = record_variants.iter().map(|variant| {
        let pattern = wildcard_pattern(variant);
        let names = variant.active_fields().map(|field| field.segment_name());
        let indices = 0..variant.active_fields().count();
        quote! {
            #pattern => match index {
                #( #indices => #option_::Some(#names), )*
                _ => #option_::None,
            },
        }
    });

    let len_arms = record_variants
        .iter()
        .map(|variant| {
            let pattern = wildcard_pattern(variant);
            let len = variant.active_fields().count();
            quote!( #pattern => #len, )
        })
        .collect::<Vec<_>>();

    let record_trait_tokens = if record_variants.is_empty() {
        crate::utils::empty()
    } else {
        quote! {
            impl #impl_generics #record_ for #ident #ty_generics #where_clause {
                fn field(&self, name: &str) -> #option_<&dyn #navigate_> {
                    match self {
                        #( #field_arms )*
                        #[allow(unreachable_patterns)]
                        _ => #option_::None,
                    }
                }

                fn field_at(&self, index: usize) -> #option_<&dyn #navigate_> {
                    match self {
                        #( #field_at_arms )*
                        #[allow(unreachable_patterns)]
                        _ => #option_::None,
                    }
                }

                fn name_at(&self, index: usize) -> #option_<&str> {
                    match self {
                        #( #name_at_arms )*
                        #[allow(unreachable_patterns)]
                        _ => #option_::None,
                    }
                }

                fn field_len(&self) -> usize {
                    match self {
                        #( #len_arms )*
                        #[allow(unreachable_patterns)]
                        _ => 0,
                    }
                }
            }
        }
    };

    let sequence_trait_tokens = if tuple_variants.is_empty() {
        crate::utils::empty()
    } else {
        let len_arms = tuple_variants.iter().map(|variant| {
            let pattern = wildcard_pattern(variant);
            let len = variant.active_fields().count();
            quote!( #pattern => #len, )
        });
        quote! {
            impl #impl_generics #sequence_ for #ident #ty_generics #where_clause {
                #[inline]
                fn get(&self, index: usize) -> #option_<&dyn #navigate_> {
                    #record_::field_at(self, index)
                }

                fn len(&self) -> usize {
                    match self {
                        #( #len_arms )*
                        #[allow(unreachable_patterns)]
                        _ => 0,
                    }
                }
            }
        }
    };

    Ok(quote! {
        impl #impl_generics #navigate_ for #ident #ty_generics #where_clause {
            #as_record_tokens

            #as_sequence_tokens
        }

        #record_trait_tokens

        #sequence_trait_tokens
    })
}

/// `Self::Variant { .. }` / `Self::Variant(..)` / `Self::Variant`
fn wildcard_pattern(variant: &EnumVariant) -> TokenStream {
    let ident = &variant.data.ident;
    match &variant.fields {
        VariantFields::Named(_) => quote!(Self::#ident { .. }),
        VariantFields::Unnamed(_) => quote!(Self::#ident(..)),
        VariantFields::Unit => quote!(Self::#ident),
    }
}

/// Destructures the active fields of a variant into `__kp_field_N` bindings.
fn binding_pattern(variant: &EnumVariant) -> TokenStream {
    let ident = &variant.data.ident;
    match &variant.fields {
        VariantFields::Named(_) => {
            let fields = variant.active_fields().map(|field| {
                let name = &field.data.ident;
                let binding = field.binding();
                quote!(#name: #binding)
            });
            quote!(Self::#ident { #( #fields, )* .. })
        }
        VariantFields::Unnamed(fields) => {
            let fields = fields.iter().map(|field| {
                if field.attrs.skip.is_some() {
                    quote!(_)
                } else {
                    let binding = field.binding();
                    quote!(#binding)
                }
            });
            quote!(Self::#ident( #( #fields ),* ))
        }
        VariantFields::Unit => quote!(Self::#ident),
    }
}
