// -----------------------------------------------------------------------------
// For hash maps keyed by string-like types

macro_rules! impl_navigate_for_hashmap {
    ($ty:path) => {
        impl<K, V, S> $crate::Navigate for $ty
        where
            K: ::core::borrow::Borrow<str> + Eq + ::core::hash::Hash + Send + Sync + 'static,
            V: $crate::Navigate,
            S: ::core::hash::BuildHasher + Send + Sync + 'static,
        {
            #[inline]
            fn as_mapping(&self) -> ::core::option::Option<&dyn $crate::ops::Mapping> {
                ::core::option::Option::Some(self)
            }
        }

        impl<K, V, S> $crate::ops::Mapping for $ty
        where
            K: ::core::borrow::Borrow<str> + Eq + ::core::hash::Hash + Send + Sync + 'static,
            V: $crate::Navigate,
            S: ::core::hash::BuildHasher + Send + Sync + 'static,
        {
            #[inline]
            fn get(&self, key: &str) -> ::core::option::Option<&dyn $crate::Navigate> {
                Self::get(self, key).map($crate::Navigate::as_navigate)
            }

            #[inline]
            fn len(&self) -> usize {
                Self::len(self)
            }
        }
    };
}

pub(super) use impl_navigate_for_hashmap;
