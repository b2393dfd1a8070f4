use proc_macro2::Span;
use quote::format_ident;
use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Field, Fields, Generics, Ident, Member, Variant, parse_quote};

use super::{FieldAttributes, TypeAttributes};

// -----------------------------------------------------------------------------
// Define

/// Type-level information shared by every kind of derive.
pub(crate) struct NavigateMeta<'a> {
    kp_path: syn::Path,
    attrs: TypeAttributes,
    ident: &'a Ident,
    /// Generics of the input, with a `Navigate` bound on every type parameter.
    generics: Generics,
}

/// A field of a struct or of an enum variant.
pub(crate) struct StructField<'a> {
    /// The raw field.
    pub data: &'a Field,
    /// The declaration index of the field, skipped fields included.
    pub declaration_index: usize,
    /// The navigation attributes on the field.
    pub attrs: FieldAttributes,
}

pub(crate) struct NavigateStruct<'a> {
    pub meta: NavigateMeta<'a>,
    pub fields: Vec<StructField<'a>>,
}

/// Represents a variant on an enum.
pub(crate) struct EnumVariant<'a> {
    /// The raw variant.
    pub data: &'a Variant,
    /// The fields within this variant.
    pub fields: VariantFields<'a>,
}

pub(crate) enum VariantFields<'a> {
    Named(Vec<StructField<'a>>),
    Unnamed(Vec<StructField<'a>>),
    Unit,
}

pub(crate) struct NavigateEnum<'a> {
    pub meta: NavigateMeta<'a>,
    pub variants: Vec<EnumVariant<'a>>,
}

pub(crate) enum NavigateDerive<'a> {
    Struct(NavigateStruct<'a>),
    TupleStruct(NavigateStruct<'a>),
    UnitStruct(NavigateMeta<'a>),
    Enum(NavigateEnum<'a>),
    Opaque(NavigateMeta<'a>),
}

// -----------------------------------------------------------------------------
// Parsing

impl<'a> NavigateDerive<'a> {
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        if let Some(lifetime) = input.generics.lifetimes().next() {
            return Err(syn::Error::new(
                lifetime.span(),
                "`Navigate` cannot be derived for types with lifetime parameters",
            ));
        }

        let attrs = TypeAttributes::parse_attrs(&input.attrs)?;
        let opaque = attrs.opaque.is_some();
        let meta = NavigateMeta::new(&input.ident, &input.generics, attrs);

        if opaque {
            return Ok(Self::Opaque(meta));
        }

        match &input.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(fields) => Ok(Self::Struct(NavigateStruct {
                    meta,
                    fields: collect_fields(fields.named.iter())?,
                })),
                Fields::Unnamed(fields) => Ok(Self::TupleStruct(NavigateStruct {
                    meta,
                    fields: collect_fields(fields.unnamed.iter())?,
                })),
                Fields::Unit => Ok(Self::UnitStruct(meta)),
            },
            Data::Enum(data) => {
                let variants = data
                    .variants
                    .iter()
                    .map(EnumVariant::new)
                    .collect::<syn::Result<Vec<_>>>()?;
                Ok(Self::Enum(NavigateEnum { meta, variants }))
            }
            Data::Union(data) => Err(syn::Error::new(
                data.union_token.span(),
                "`Navigate` cannot be derived for unions",
            )),
        }
    }
}

fn collect_fields<'a>(fields: impl Iterator<Item = &'a Field>) -> syn::Result<Vec<StructField<'a>>> {
    fields
        .enumerate()
        .map(|(declaration_index, data)| {
            Ok(StructField {
                data,
                declaration_index,
                attrs: FieldAttributes::parse_attrs(&data.attrs)?,
            })
        })
        .collect()
}

// -----------------------------------------------------------------------------
// NavigateMeta

impl<'a> NavigateMeta<'a> {
    fn new(ident: &'a Ident, generics: &Generics, attrs: TypeAttributes) -> Self {
        let kp_path = crate::path::kp_path();
        let navigate_ = crate::path::navigate_(&kp_path);

        let mut generics = generics.clone();
        let params = generics
            .type_params()
            .map(|param| param.ident.clone())
            .collect::<Vec<_>>();
        let where_clause = generics.make_where_clause();
        for param in params {
            where_clause.predicates.push(parse_quote!(#param: #navigate_));
        }

        Self {
            kp_path,
            attrs,
            ident,
            generics,
        }
    }

    #[inline]
    pub fn kp_path(&self) -> &syn::Path {
        &self.kp_path
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    #[inline]
    pub fn ident(&self) -> &Ident {
        self.ident
    }

    #[inline]
    pub fn generics(&self) -> &Generics {
        &self.generics
    }
}

// -----------------------------------------------------------------------------
// StructField

impl StructField<'_> {
    /// The segment under which the field is reachable.
    pub fn segment_name(&self) -> String {
        if let Some(rename) = &self.attrs.rename {
            return rename.value();
        }
        match &self.data.ident {
            Some(ident) => ident.unraw().to_string(),
            None => self.declaration_index.to_string(),
        }
    }

    /// `self.<member>` accessor for struct fields.
    pub fn member(&self) -> Member {
        match &self.data.ident {
            Some(ident) => Member::Named(ident.clone()),
            None => Member::Unnamed(syn::Index {
                index: self.declaration_index as u32,
                span: self.data.span(),
            }),
        }
    }

    /// Binding used when destructuring an enum variant.
    pub fn binding(&self) -> Ident {
        format_ident!("__kp_field_{}", self.declaration_index, span = Span::call_site())
    }
}

// -----------------------------------------------------------------------------
// NavigateStruct

impl<'a> NavigateStruct<'a> {
    /// Fields which are exposed to navigation.
    pub fn active_fields(&self) -> impl Iterator<Item = &StructField<'a>> {
        self.fields.iter().filter(|field| field.attrs.skip.is_none())
    }
}

// -----------------------------------------------------------------------------
// EnumVariant

impl<'a> EnumVariant<'a> {
    fn new(data: &'a Variant) -> syn::Result<Self> {
        let variant_attrs = FieldAttributes::parse_attrs(&data.attrs)?;
        if let Some(span) = variant_attrs.skip.or(variant_attrs.rename.as_ref().map(|lit| lit.span())) {
            return Err(syn::Error::new(
                span,
                "navigation attributes are not supported on enum variants",
            ));
        }

        let fields = match &data.fields {
            Fields::Named(fields) => VariantFields::Named(collect_fields(fields.named.iter())?),
            Fields::Unnamed(fields) => {
                VariantFields::Unnamed(collect_fields(fields.unnamed.iter())?)
            }
            Fields::Unit => VariantFields::Unit,
        };

        Ok(Self { data, fields })
    }

    /// The complete set of fields in this variant.
    pub fn fields(&self) -> &[StructField<'a>] {
        match &self.fields {
            VariantFields::Named(fields) | VariantFields::Unnamed(fields) => fields,
            VariantFields::Unit => &[],
        }
    }

    /// Fields which are exposed to navigation.
    pub fn active_fields(&self) -> impl Iterator<Item = &StructField<'a>> {
        self.fields()
            .iter()
            .filter(|field| field.attrs.skip.is_none())
    }
}
