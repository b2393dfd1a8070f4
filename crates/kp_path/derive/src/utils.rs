use proc_macro2::TokenStream;

/// An empty token stream, used where an optional item is not generated.
#[inline(always)]
pub(crate) fn empty() -> TokenStream {
    TokenStream::new()
}
