//! Provide some tools for parsing the derive input.

// -----------------------------------------------------------------------------
// Modules

mod attributes;
mod navigate_derive;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use attributes::{FieldAttributes, TypeAttributes};
pub(crate) use navigate_derive::{
    EnumVariant, NavigateDerive, NavigateEnum, NavigateMeta, NavigateStruct, StructField,
    VariantFields,
};
