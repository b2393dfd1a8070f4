//! Runtime shape inspection used when a [`Path`](crate::Path) is replayed.

// -----------------------------------------------------------------------------
// Modules

mod navigate;
mod resolved;
mod type_name;

// -----------------------------------------------------------------------------
// Exports

pub use navigate::Navigate;
pub use resolved::Resolved;
pub use type_name::short_type_name;
