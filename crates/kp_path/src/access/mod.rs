//! The [`Path`] value: capture, replay, introspection and rendering.
//!
//! A path is captured from a selector that navigates a [`Recorder`]:
//!
//! ```
//! use kp_path::{Navigate, Path, keypath};
//!
//! #[derive(Navigate)]
//! struct Address { city: String }
//!
//! #[derive(Navigate)]
//! struct User { address: Address }
//!
//! // explicit
//! let a = Path::capture(|u| u.attr("address")?.attr("city")).unwrap();
//! // macro
//! let b = keypath!(address.city).unwrap();
//! assert_eq!(a, b);
//!
//! let user = User { address: Address { city: "London".into() } };
//! assert_eq!(a.get::<String>(&user).unwrap(), "London");
//! ```
//!
//! Once captured, the path never changes. [`Path::parent`] derives a new,
//! shorter path that shares the same segments.
//!
//! [`Recorder`]: crate::capture::Recorder

// -----------------------------------------------------------------------------
// Modules

mod compare;
mod path;
mod render;
mod resolve;
mod segment;
mod template;

#[cfg(feature = "serde")]
mod serde;

// -----------------------------------------------------------------------------
// Exports

pub use compare::IncomparableError;
pub use path::{CaptureError, Iter, Path, StructureError};
pub use resolve::ResolveError;
pub use segment::Segment;
pub use template::FormatError;
