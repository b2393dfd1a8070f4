#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Extern Self

// Generated code names this crate through `kp_macro_utils::Manifest`, which
// resolves to `kp_path` inside the crate as well, so `kp_path` must alias `crate`.
extern crate self as kp_path;

// -----------------------------------------------------------------------------
// no_std support

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod macros;
mod navigation;

pub mod access;
pub mod capture;
pub mod impls;
pub mod ops;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use access::Path;
pub use capture::{Nn, Recorder, nn};
pub use navigation::{Navigate, Resolved, short_type_name};

pub use kp_path_derive as derive;
pub use kp_path_derive::Navigate;

/// The most commonly used items.
///
/// ```
/// use kp_path::prelude::*;
///
/// #[derive(Navigate)]
/// struct Point { x: i32, y: i32 }
///
/// let path = keypath!(y).unwrap();
/// assert_eq!(path.resolve_as::<i32>(&Point { x: 1, y: 2 }), Ok(&2));
/// ```
pub mod prelude {
    pub use crate::Navigate;
    pub use crate::access::Path;
    pub use crate::capture::{Nn, PathRecorder, Recorder, nn};
    pub use crate::keypath;
    pub use crate::navigation::Resolved;
}
