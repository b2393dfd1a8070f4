//! Shape interfaces consulted while a path is replayed.
//!
//! - [`Record`]: fields reachable by name, e.g. structs.
//! - [`Sequence`]: elements reachable by index, e.g. `Vec<T>` and tuples.
//! - [`Mapping`]: entries reachable by string key, e.g. `BTreeMap<String, V>`.
//!
//! A value exposes them through the facets of [`Navigate`](crate::Navigate).
//! One value may expose several shapes, e.g. tuple structs are both
//! records and sequences.

// -----------------------------------------------------------------------------
// Modules

mod mapping_ops;
mod record_ops;
mod sequence_ops;

// -----------------------------------------------------------------------------
// Exports

pub use mapping_ops::Mapping;
pub use record_ops::{FieldIter, Record};
pub use sequence_ops::{Sequence, SequenceIter};
