//! See following macros:
//!
//! - [`Navigate`]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static NAVIGATE_ATTRIBUTE_NAME: &str = "navigate";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// # Navigation Derivation
///
/// `#[derive(Navigate)]` implements `Navigate` and the shape traits that match
/// the type's structure, so that a `Path` can be replayed against it.
///
/// - `struct T { ... }`: `Record`, fields are looked up by name.
/// - `struct T(...);`: `Record` (fields named `"0"`, `"1"`, ...) and `Sequence`.
/// - `enum T { ... }`: the shape of the active variant. Struct variants are
///   records, tuple variants are records and sequences, unit variants expose nothing.
/// - `struct T;`: opaque, no shape at all.
///
/// Types with lifetime parameters cannot derive `Navigate`, because navigation
/// is based on [`Any`](core::any::Any). Every type parameter gets a `Navigate` bound.
///
/// ## Type Attributes
///
/// ### Positional access
///
/// Named structs can additionally be indexed by field position, like a named tuple:
///
/// ```rust, ignore
/// #[derive(Navigate)]
/// #[navigate(positional)]
/// struct Coordinate { x: i32, y: i32 }
/// // `x` and `0` both reach the first field.
/// ```
///
/// ### Opaque types
///
/// `#[navigate(opaque)]` keeps the fields private to navigation. The value can
/// still be the end of a path, but no segment resolves on it.
///
/// ```rust, ignore
/// #[derive(Navigate)]
/// #[navigate(opaque)]
/// struct Secret { token: String }
/// ```
///
/// ## Field Attributes
///
/// - `#[navigate(rename = "name")]`: the segment name used to reach the field.
/// - `#[navigate(skip)]`: the field is invisible to navigation.
///
/// ```rust, ignore
/// #[derive(Navigate)]
/// struct User {
///     #[navigate(rename = "userName")]
///     name: String,
///     #[navigate(skip)]
///     password_hash: Vec<u8>,
/// }
/// ```
#[proc_macro_derive(Navigate, attributes(navigate))]
pub fn derive_navigate(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    impls::match_navigate_impls(ast)
}
