//! Recording of navigation steps.
//!
//! A [`Recorder`] stands in for the value a [`Path`](crate::Path) will later be
//! replayed against. Every step taken on it returns a new recorder with one more
//! segment; the segments of the recorder returned by a selector become the path.
//!
//! [`nn`] and [`Nn`] mark a step through a nullable value. They have no effect
//! on the recorded segments.

// -----------------------------------------------------------------------------
// Modules

mod non_null;
mod recorder;

// -----------------------------------------------------------------------------
// Exports

pub use non_null::{Nn, nn};
pub use recorder::{PathRecorder, RecordError, Recorder};
