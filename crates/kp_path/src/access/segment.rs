use alloc::boxed::Box;
use alloc::string::String;
use core::borrow::Borrow;
use core::fmt;
use core::ops::Deref;

/// One component of a [`Path`](crate::Path): an attribute name, a mapping
/// key or a sequence index, always stored as text.
///
/// Dereferences to `str` and compares equal to string types.
///
/// ```
/// use kp_path::Path;
///
/// let path = Path::capture(|x| Ok(x.item(7))).unwrap();
/// let segment = &path.parts()[0];
///
/// assert_eq!(segment, "7");
/// assert_eq!(segment.len(), 1);
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Segment(Box<str>);

impl Segment {
    /// Returns the segment text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the segment is a non-negative integer in ASCII digits.
    ///
    /// Only such segments are tried as sequence or text indices.
    #[inline]
    pub fn is_index(&self) -> bool {
        !self.0.is_empty() && self.0.bytes().all(|b| b.is_ascii_digit())
    }
}

impl Deref for Segment {
    type Target = str;

    #[inline]
    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Segment {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Segment {
    #[inline]
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Segment {
    #[inline]
    fn from(value: &str) -> Self {
        Self(value.into())
    }
}

impl From<String> for Segment {
    #[inline]
    fn from(value: String) -> Self {
        Self(value.into_boxed_str())
    }
}

impl fmt::Display for Segment {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Segment {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl PartialEq<str> for Segment {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for Segment {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl PartialEq<String> for Segment {
    #[inline]
    fn eq(&self, other: &String) -> bool {
        *self.0 == **other
    }
}

impl PartialEq<Segment> for str {
    #[inline]
    fn eq(&self, other: &Segment) -> bool {
        self == &*other.0
    }
}

impl PartialEq<Segment> for &str {
    #[inline]
    fn eq(&self, other: &Segment) -> bool {
        *self == &*other.0
    }
}

#[cfg(test)]
mod tests {
    use super::Segment;

    #[test]
    fn index_detection() {
        assert!(Segment::from("0").is_index());
        assert!(Segment::from("0042").is_index());
        assert!(!Segment::from("-1").is_index());
        assert!(!Segment::from("1.5").is_index());
        assert!(!Segment::from("").is_index());
        assert!(!Segment::from("٣").is_index());
    }
}
