use crate::Navigate;

/// A value with entries reachable by a string key.
///
/// Keys are matched against the segment text exactly, so a map keyed by
/// `"0"` is reached through the segment `0`.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use kp_path::ops::Mapping;
///
/// let mut map = BTreeMap::new();
/// map.insert(String::from("a"), 1_i32);
///
/// assert!(Mapping::get(&map, "a").is_some());
/// assert!(Mapping::get(&map, "b").is_none());
/// assert_eq!(Mapping::len(&map), 1);
/// ```
pub trait Mapping: Navigate {
    /// Returns the value stored under `key`.
    fn get(&self, key: &str) -> Option<&dyn Navigate>;

    /// Returns the number of entries.
    fn len(&self) -> usize;

    /// Returns `true` if the mapping contains no entries.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
