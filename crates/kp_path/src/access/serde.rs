//! `Path` serializes as a sequence of its segments.
//!
//! There is no `Deserialize`: paths are only created by capturing them.

use serde_core::{Serialize, Serializer};

use crate::access::{Path, Segment};

impl Serialize for Segment {
    #[inline]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self)
    }
}

impl Serialize for Path {
    #[inline]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.parts())
    }
}
