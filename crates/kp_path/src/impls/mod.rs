//! [`Navigate`](crate::Navigate) implementations for foreign types.
//!
//! ## Implemented Menu
//!
//! - opaque (end of a path only):
//!     - `bool`, `char`, `()`
//!     - `i8`-`i128`, `u8`-`u128`, `isize`, `usize`, `f32`, `f64`
//!     - `NonZero` integers, `core::time::Duration`
//! - text (indexable by character):
//!     - `&'static str`, `String`, `Box<str>`, `Cow<'static, str>`
//! - nullable and transparent wrappers:
//!     - `Option<T>`
//!     - `Box<T>`, `Arc<T>`
//! - sequences:
//!     - `[T; N]`, `Vec<T>`, `VecDeque<T>`
//!     - `(P0,)`, `(P0, P1, ...)`. the num of P <= 12
//! - mappings, with keys that borrow as `str`:
//!     - `BTreeMap<K, V>`
//!     - `std::collections::HashMap<K, V, S>` ("std" feature)
//!     - `hashbrown::HashMap<K, V, S>`
//! - json: ("json" feature)
//!     - `serde_json::Value`, `serde_json::Map<String, Value>`

// -----------------------------------------------------------------------------
// Modules

mod utils;

mod alloc;
mod core;
mod hashbrown;

#[cfg(feature = "std")]
mod std;

#[cfg(feature = "json")]
mod json;
