use alloc::collections::BTreeMap;
use core::borrow::Borrow;

use crate::Navigate;
use crate::ops::Mapping;

impl<K, V> Navigate for BTreeMap<K, V>
where
    K: Borrow<str> + Ord + Send + Sync + 'static,
    V: Navigate,
{
    #[inline]
    fn as_mapping(&self) -> Option<&dyn Mapping> {
        Some(self)
    }
}

impl<K, V> Mapping for BTreeMap<K, V>
where
    K: Borrow<str> + Ord + Send + Sync + 'static,
    V: Navigate,
{
    #[inline]
    fn get(&self, key: &str) -> Option<&dyn Navigate> {
        BTreeMap::get(self, key).map(Navigate::as_navigate)
    }

    #[inline]
    fn len(&self) -> usize {
        BTreeMap::len(self)
    }
}
