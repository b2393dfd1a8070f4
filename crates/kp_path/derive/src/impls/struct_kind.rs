use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::{NavigateStruct, StructField};

/// Implement `Navigate`, `Record` and, for tuple or positional structs, `Sequence`.
pub(crate) fn impl_struct(info: &NavigateStruct, tuple: bool) -> syn::Result<TokenStream> {
    let meta = &info.meta;
    let kp_path = meta.kp_path();
    let navigate_ = crate::path::navigate_(kp_path);
    let record_ = crate::path::record_(kp_path);
    let sequence_ = crate::path::sequence_(kp_path);
    let option_ = crate::path::option_();

    let ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) = meta.generics().split_for_impl();

    let fields = info.active_fields().collect::<Vec<&StructField>>();
    super::check_unique_segments(fields.iter().copied())?;

    let names = fields.iter().map(|field| field.segment_name()).collect::<Vec<_>>();
    let members = fields.iter().map(|field| field.member()).collect::<Vec<_>>();
    let indices = (0..fields.len()).collect::<Vec<usize>>();
    let field_len = fields.len();

    let positional = tuple || meta.attrs().positional.is_some();

    let as_sequence_tokens = if positional {
        quote! {
            #[inline]
            fn as_sequence(&self) -> #option_<&dyn #sequence_> {
                #option_::Some(self as &dyn #sequence_)
            }
        }
    } else {
        crate::utils::empty()
    };

    let sequence_trait_tokens = if positional {
        quote! {
            impl #impl_generics #sequence_ for #ident #ty_generics #where_clause {
                #[inline]
                fn get(&self, index: usize) -> #option_<&dyn #navigate_> {
                    #record_::field_at(self, index)
                }

                #[inline]
                fn len(&self) -> usize {
                    #field_len
                }
            }
        }
    } else {
        crate::utils::empty()
    };

    Ok(quote! {
        impl #impl_generics #navigate_ for #ident #ty_generics #where_clause {
            #[inline]
            fn as_record(&self) -> #option_<&dyn #record_> {
                #option_::Some(self as &dyn #record_)
            }

            #as_sequence_tokens
        }

        impl #impl_generics #record_ for #ident #ty_generics #where_clause {
            fn field(&self, name: &str) -> #option_<&dyn #navigate_> {
                match name {
                    #( #names => #option_::Some(#navigate_::as_navigate(&self.#members)), )*
                    _ => #option_::None,
                }
            }

            fn field_at(&self, index: usize) -> #option_<&dyn #navigate_> {
                match index {
                    #( #indices => #option_::Some(#navigate_::as_navigate(&self.#members)), )*
                    _ => #option_::None,
                }
            }

            fn name_at(&self, index: usize) -> #option_<&str> {
                match index {
                    #( #indices => #option_::Some(#names), )*
                    _ => #option_::None,
                }
            }

            #[inline]
            fn field_len(&self) -> usize {
                #field_len
            }
        }

        #sequence_trait_tokens
    })
}
