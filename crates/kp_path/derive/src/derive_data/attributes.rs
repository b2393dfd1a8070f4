use proc_macro2::Span;
use syn::{Attribute, LitStr, spanned::Spanned};

use crate::NAVIGATE_ATTRIBUTE_NAME;

// -----------------------------------------------------------------------------
// Type attributes

/// `#[navigate(...)]` attributes placed on the type itself.
#[derive(Default, Debug)]
pub(crate) struct TypeAttributes {
    /// `#[navigate(opaque)]`
    pub opaque: Option<Span>,
    /// `#[navigate(positional)]`
    pub positional: Option<Span>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(NAVIGATE_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("opaque") {
                    this.opaque = Some(meta.path.span());
                    Ok(())
                } else if meta.path.is_ident("positional") {
                    this.positional = Some(meta.path.span());
                    Ok(())
                } else {
                    Err(meta.error("unknown type attribute, expected `opaque` or `positional`"))
                }
            })?;
        }

        Ok(this)
    }
}

// -----------------------------------------------------------------------------
// Field attributes

/// `#[navigate(...)]` attributes placed on a field or an enum variant.
#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
    /// `#[navigate(skip)]`
    pub skip: Option<Span>,
    /// `#[navigate(rename = "...")]`
    pub rename: Option<LitStr>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(NAVIGATE_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    this.skip = Some(meta.path.span());
                    Ok(())
                } else if meta.path.is_ident("rename") {
                    let lit: LitStr = meta.value()?.parse()?;
                    if lit.value().is_empty() {
                        return Err(syn::Error::new(lit.span(), "segment name cannot be empty"));
                    }
                    this.rename = Some(lit);
                    Ok(())
                } else {
                    Err(meta.error("unknown field attribute, expected `skip` or `rename`"))
                }
            })?;
        }

        Ok(this)
    }
}
