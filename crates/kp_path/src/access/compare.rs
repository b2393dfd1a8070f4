use alloc::string::String;
use core::any::Any;
use core::cmp::Ordering;
use core::hash::{BuildHasher, Hash, Hasher};

use foldhash::fast::FixedState;
use thiserror::Error;

use crate::access::Path;

/// Seed of [`Path::stable_hash`]. Changing it changes every stable hash.
const STABLE_HASH_SEED: u64 = 0x6b65_795f_6f66_5f70;

/// An ordering comparison between a [`Path`] and a value of another type.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("a key path can only be ordered against another key path")]
pub struct IncomparableError;

// -----------------------------------------------------------------------------
// Path <-> Path

impl PartialEq for Path {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.parts() == other.parts()
    }
}

impl Eq for Path {}

impl Hash for Path {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.parts().hash(state);
    }
}

impl PartialOrd for Path {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Path {
    /// Lexicographic over the segments, a prefix sorts first.
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.parts().cmp(other.parts())
    }
}

// -----------------------------------------------------------------------------
// Path <-> text

impl Path {
    /// Returns `true` if `text` equals the dot rendering, without building it.
    ///
    /// ```
    /// # use kp_path::keypath;
    /// let path = keypath!(address.city).unwrap();
    /// assert!(path.eq_dot("address.city"));
    /// assert!(!path.eq_dot("address"));
    /// assert!(!path.eq_dot("address.city."));
    /// ```
    pub fn eq_dot(&self, text: &str) -> bool {
        let mut rest = text;
        for (index, part) in self.parts().iter().enumerate() {
            if index > 0 {
                match rest.strip_prefix('.') {
                    Some(tail) => rest = tail,
                    None => return false,
                }
            }
            match rest.strip_prefix(part.as_str()) {
                Some(tail) => rest = tail,
                None => return false,
            }
        }
        rest.is_empty()
    }

    /// Equality against a value of unknown type.
    ///
    /// Paths compare by segments, `String` and `&'static str` by the dot
    /// rendering. Every other type is not equal.
    ///
    /// ```
    /// # use kp_path::keypath;
    /// let path = keypath!(a.b).unwrap();
    /// assert!(path.eq_dyn(&keypath!(a.b).unwrap()));
    /// assert!(path.eq_dyn(&"a.b"));
    /// assert!(path.eq_dyn(&String::from("a.b")));
    /// assert!(!path.eq_dyn(&42));
    /// ```
    pub fn eq_dyn(&self, other: &dyn Any) -> bool {
        if let Some(path) = other.downcast_ref::<Path>() {
            self == path
        } else if let Some(text) = other.downcast_ref::<String>() {
            self.eq_dot(text)
        } else if let Some(text) = other.downcast_ref::<&'static str>() {
            self.eq_dot(text)
        } else {
            false
        }
    }

    /// Ordering against a value of unknown type, only other paths are comparable.
    ///
    /// ```
    /// # use core::cmp::Ordering;
    /// # use kp_path::{keypath, access::IncomparableError};
    /// let a = keypath!(a).unwrap();
    /// let ab = keypath!(a.b).unwrap();
    /// assert_eq!(a.try_cmp(&ab), Ok(Ordering::Less));
    /// assert_eq!(a.try_cmp(&"a"), Err(IncomparableError));
    /// ```
    pub fn try_cmp(&self, other: &dyn Any) -> Result<Ordering, IncomparableError> {
        other
            .downcast_ref::<Path>()
            .map(|path| self.cmp(path))
            .ok_or(IncomparableError)
    }

    /// A hash of the segments that is identical across processes and builds.
    ///
    /// `Hash` feeds whatever hasher the container uses. This one is fixed,
    /// suitable for cache keys and persisted indices.
    ///
    /// ```
    /// # use kp_path::keypath;
    /// let a = keypath!(a.b).unwrap();
    /// let b = keypath!(a["b"]).unwrap();
    /// assert_eq!(a.stable_hash(), b.stable_hash());
    /// ```
    pub fn stable_hash(&self) -> u64 {
        FixedState::with_seed(STABLE_HASH_SEED).hash_one(self.parts())
    }
}

impl PartialEq<str> for Path {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.eq_dot(other)
    }
}

impl PartialEq<&str> for Path {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.eq_dot(other)
    }
}

impl PartialEq<String> for Path {
    #[inline]
    fn eq(&self, other: &String) -> bool {
        self.eq_dot(other)
    }
}

impl PartialEq<Path> for str {
    #[inline]
    fn eq(&self, other: &Path) -> bool {
        other.eq_dot(self)
    }
}

impl PartialEq<Path> for &str {
    #[inline]
    fn eq(&self, other: &Path) -> bool {
        other.eq_dot(self)
    }
}

impl PartialEq<Path> for String {
    #[inline]
    fn eq(&self, other: &Path) -> bool {
        other.eq_dot(self)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cmp::Ordering;

    use foldhash::fast::FixedState;
    use hashbrown::HashSet;

    use crate::{Path, keypath};

    #[test]
    fn string_equality_both_ways() {
        let path = keypath!(users[0].name).unwrap();

        assert_eq!(path, "users.0.name");
        assert_eq!("users.0.name", path);
        assert_eq!(path, String::from("users.0.name"));
        assert_eq!(String::from("users.0.name"), path);
        assert_ne!(path, "users.0");
        assert_ne!(path, "users.0.name.x");
        assert!(Path::identity() == "");
    }

    #[test]
    fn equal_paths_hash_equally() {
        let a = keypath!(a.b).unwrap();
        let b = Path::capture(|r| Ok(r.item("a").item("b"))).unwrap();
        let c = keypath!(a.b.c).unwrap().parent().unwrap();

        let mut set = HashSet::with_hasher(FixedState::with_seed(0));
        set.insert(a.clone());
        assert!(set.contains(&b));
        assert!(set.contains(&c));
        assert_eq!(a.stable_hash(), c.stable_hash());
        assert_ne!(a.stable_hash(), keypath!(b.a).unwrap().stable_hash());
    }

    #[test]
    fn sorting_is_lexicographic_over_segments() {
        let mut paths = vec![
            keypath!(b).unwrap(),
            keypath!(a.c).unwrap(),
            keypath!(a).unwrap(),
            keypath!(a.b.z).unwrap(),
            keypath!(a.b).unwrap(),
        ];
        paths.sort();

        let rendered: Vec<_> = paths.iter().map(Path::to_dot).collect();
        assert_eq!(rendered, ["a", "a.b", "a.b.z", "a.c", "b"]);
    }

    #[test]
    fn segment_order_differs_from_text_order() {
        // "a.b" < "a-b" as segments ("a" is a prefix), but not as text.
        let dotted = keypath!(a.b).unwrap();
        let dashed = keypath!(["a-b"]).unwrap();
        assert_eq!(dotted.cmp(&dashed), Ordering::Less);
        assert!(dotted.to_dot() > dashed.to_dot());
    }

    #[test]
    fn dynamic_comparisons() {
        let path = keypath!(x).unwrap();
        assert!(!path.eq_dyn(&1_u8));
        assert!(path.try_cmp(&1_u8).is_err());
        assert_eq!(path.try_cmp(&path.clone()), Ok(Ordering::Equal));
    }
}
