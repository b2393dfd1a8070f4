use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::String;
use alloc::sync::Arc;
use core::any::Any;
use core::fmt;
use core::iter::FusedIterator;

use thiserror::Error;

use crate::access::Segment;
use crate::capture::{RecordError, Recorder};

// -----------------------------------------------------------------------------
// Errors

/// An error raised while capturing a [`Path`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaptureError {
    /// The selector returned something other than a [`Recorder`].
    #[error(
        "a path selector must return a navigation chain, not a plain value (returned `{returned}`)"
    )]
    NotAPath {
        /// The short name of the returned type.
        returned: Cow<'static, str>,
    },
    /// A step inside the selector failed.
    #[error(transparent)]
    Record(#[from] RecordError),
}

/// An error raised by a structural query on a [`Path`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructureError {
    /// `root` or `leaf` on the identity path.
    #[error("the identity path has no segments")]
    EmptyPath,
    /// `parent` on a path with fewer than two segments.
    #[error("path `{path}` has no parent (depth={depth})")]
    NoParent {
        /// The dot rendering of the path.
        path: String,
        /// The depth of the path.
        depth: usize,
    },
}

// -----------------------------------------------------------------------------
// Path

/// An immutable sequence of [`Segment`]s leading into a value.
///
/// A path is captured once from a selector, then replayed against any
/// number of values, inspected, and rendered in several notations.
///
/// - capture: [`capture`](Path::capture), or the [`keypath!`](crate::keypath) macro.
/// - replay: [`resolve`](Path::resolve) and its variants.
/// - introspection: [`parts`](Path::parts), [`depth`](Path::depth),
///   [`root`](Path::root), [`leaf`](Path::leaf), [`parent`](Path::parent).
/// - rendering: `to_*` methods and [`format`](Path::format).
///
/// Cloning is cheap, the segments are shared.
///
/// # Examples
///
/// ```
/// use kp_path::{Navigate, Path};
///
/// #[derive(Navigate)]
/// struct Address { city: String }
///
/// #[derive(Navigate)]
/// struct User { name: String, address: Address }
///
/// let city = Path::capture(|u| u.attr("address")?.attr("city")).unwrap();
///
/// let user = User {
///     name: "Alice".into(),
///     address: Address { city: "London".into() },
/// };
///
/// assert_eq!(city.resolve_as::<String>(&user).unwrap(), "London");
/// assert_eq!(city.to_string(), "address.city");
/// assert_eq!(city.to_bracket(), "['address']['city']");
/// assert_eq!(city.to_jsonpath(), "$.address.city");
/// ```
#[derive(Clone)]
pub struct Path {
    segments: Arc<[Segment]>,
    // `parent` shares `segments` and shortens this.
    len: usize,
}

impl Path {
    /// Captures a path from a selector.
    ///
    /// The selector receives the root [`Recorder`] and must return the
    /// recorder at the end of its navigation. Returning any other value fails
    /// with [`CaptureError::NotAPath`].
    ///
    /// # Examples
    ///
    /// ```
    /// use kp_path::{Path, access::CaptureError};
    ///
    /// let path = Path::capture(|u| Ok(u.attr("users")?.item(0).attr("name")?)).unwrap();
    /// assert_eq!(path.to_dot(), "users.0.name");
    ///
    /// let err = Path::capture(|_| Ok("x")).unwrap_err();
    /// assert!(matches!(err, CaptureError::NotAPath { .. }));
    /// ```
    pub fn capture<R, F>(selector: F) -> Result<Self, CaptureError>
    where
        R: Any,
        F: FnOnce(Recorder) -> Result<R, RecordError>,
    {
        let returned = selector(Recorder::root())?;

        let recorder = match (Box::new(returned) as Box<dyn Any>).downcast::<Recorder>() {
            Ok(recorder) => *recorder,
            Err(_) => {
                return Err(CaptureError::NotAPath {
                    returned: crate::short_type_name(core::any::type_name::<R>()),
                });
            }
        };

        let path = Self::from_segments(recorder.into_segments().into());
        log::trace!("captured key path `{path}`");
        Ok(path)
    }

    #[inline]
    fn from_segments(segments: Arc<[Segment]>) -> Self {
        let len = segments.len();
        Self { segments, len }
    }

    /// The empty path, which resolves to its input.
    ///
    /// Same as `Path::capture(|x| Ok(x))`.
    #[inline]
    pub fn identity() -> Self {
        Self::from_segments(Arc::from([]))
    }

    // -------------------------------------------------------------------------
    // Introspection

    /// All segments, in access order.
    #[inline]
    pub fn parts(&self) -> &[Segment] {
        &self.segments[..self.len]
    }

    /// The number of segments, `0` for the identity path.
    #[inline]
    pub fn depth(&self) -> usize {
        self.len
    }

    /// Same as [`depth`](Self::depth).
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` for the identity path.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.len == 0
    }

    /// The first segment.
    ///
    /// ```
    /// # use kp_path::{Path, access::StructureError};
    /// let path = Path::capture(|x| Ok(x.attr("a")?.attr("b")?)).unwrap();
    /// assert_eq!(path.root(), Ok("a"));
    /// assert_eq!(Path::identity().root(), Err(StructureError::EmptyPath));
    /// ```
    #[inline]
    pub fn root(&self) -> Result<&str, StructureError> {
        self.parts()
            .first()
            .map(Segment::as_str)
            .ok_or(StructureError::EmptyPath)
    }

    /// The last segment.
    ///
    /// ```
    /// # use kp_path::{Path, access::StructureError};
    /// let path = Path::capture(|x| Ok(x.attr("a")?.attr("b")?)).unwrap();
    /// assert_eq!(path.leaf(), Ok("b"));
    /// assert_eq!(Path::identity().leaf(), Err(StructureError::EmptyPath));
    /// ```
    #[inline]
    pub fn leaf(&self) -> Result<&str, StructureError> {
        self.parts()
            .last()
            .map(Segment::as_str)
            .ok_or(StructureError::EmptyPath)
    }

    /// The path one level up, sharing this path's segments.
    ///
    /// Fails for paths with fewer than two segments.
    ///
    /// ```
    /// # use kp_path::{Path, access::StructureError};
    /// let path = Path::capture(|x| Ok(x.attr("a")?.attr("b")?.attr("c")?)).unwrap();
    ///
    /// let grandparent = path.parent().unwrap().parent().unwrap();
    /// assert_eq!(grandparent.parts(), ["a"]);
    /// assert!(matches!(grandparent.parent(), Err(StructureError::NoParent { depth: 1, .. })));
    /// ```
    pub fn parent(&self) -> Result<Self, StructureError> {
        if self.len < 2 {
            return Err(StructureError::NoParent {
                path: self.to_dot(),
                depth: self.len,
            });
        }
        Ok(Self {
            segments: Arc::clone(&self.segments),
            len: self.len - 1,
        })
    }

    /// Returns `true` if `segment` is one of the segments.
    ///
    /// ```
    /// # use kp_path::Path;
    /// let path = Path::capture(|x| Ok(x.attr("address")?.attr("city")?)).unwrap();
    /// assert!(path.contains("city"));
    /// assert!(!path.contains("address.city"));
    /// ```
    #[inline]
    pub fn contains(&self, segment: &str) -> bool {
        self.parts().iter().any(|part| part.as_str() == segment)
    }

    /// Returns an iterator over the segments.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.parts().iter(),
        }
    }
}

impl fmt::Display for Path {
    /// Same as [`Path::to_dot`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::access::render::write_joined(f, self.parts(), ".")
    }
}

impl fmt::Debug for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Path({self})")
    }
}

// -----------------------------------------------------------------------------
// Iteration

/// An iterator over the segments of a [`Path`], see [`Path::iter`].
#[derive(Clone)]
pub struct Iter<'a> {
    inner: core::slice::Iter<'a, Segment>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Segment::as_str)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(Segment::as_str)
    }
}

impl ExactSizeIterator for Iter<'_> {}
impl FusedIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::sync::Arc;
    use alloc::vec::Vec;

    use crate::access::{CaptureError, StructureError};
    use crate::capture::RecordError;
    use crate::{Nn, Path, nn};

    fn three() -> Path {
        Path::capture(|r| Ok(r.attr("a")?.attr("b")?.attr("c")?)).unwrap()
    }

    #[test]
    fn parts_follow_access_order() {
        let path = Path::capture(|r| {
            Ok(nn(r.attr("users")?).item(0).attr("address")? | Nn)
        })
        .unwrap();

        assert_eq!(path.parts(), ["users", "0", "address"]);
        assert_eq!(path.depth(), 3);
        assert_eq!(path.len(), 3);
        assert_eq!(path.iter().rev().collect::<Vec<_>>(), ["address", "0", "users"]);
        assert_eq!((&path).into_iter().len(), 3);
    }

    #[test]
    fn literal_selectors_are_rejected() {
        let err = Path::capture(|_| Ok("x")).unwrap_err();
        assert_eq!(err, CaptureError::NotAPath { returned: "&str".into() });

        let err = Path::capture(|r| Ok(r.attr("a")?.depth())).unwrap_err();
        assert_eq!(err, CaptureError::NotAPath { returned: "usize".into() });
        assert!(err.to_string().contains("navigation chain"));
    }

    #[test]
    fn step_errors_propagate() {
        let err = Path::capture(|r| {
            r.set_attr("a", &0)?;
            Ok(r)
        })
        .unwrap_err();
        assert_eq!(err, CaptureError::Record(RecordError::ReadOnly { name: "a".into() }));
    }

    #[test]
    fn parent_chain() {
        let path = three();
        let parent = path.parent().unwrap();
        assert_eq!(parent.parts(), ["a", "b"]);
        assert!(Arc::ptr_eq(&parent.segments, &path.segments));

        let grandparent = parent.parent().unwrap();
        assert_eq!(grandparent.parts(), ["a"]);
        assert_eq!(
            grandparent.parent().unwrap_err(),
            StructureError::NoParent { path: "a".to_string(), depth: 1 }
        );
        assert_eq!(
            grandparent.parent().unwrap_err().to_string(),
            "path `a` has no parent (depth=1)"
        );
    }

    #[test]
    fn identity_boundaries() {
        let identity = Path::capture(Ok).unwrap();
        assert!(identity.is_identity());
        assert_eq!(identity, Path::identity());
        assert_eq!(identity.to_dot(), "");
        assert_eq!(identity.root(), Err(StructureError::EmptyPath));
        assert_eq!(identity.leaf(), Err(StructureError::EmptyPath));
        assert!(identity.parent().is_err());
    }

    #[test]
    fn display_and_debug() {
        let path = three();
        assert_eq!(path.to_string(), "a.b.c");
        assert_eq!(alloc::format!("{path:?}"), "Path(a.b.c)");
        assert_eq!(path.leaf(), Ok("c"));
        assert!(path.contains("b"));
        assert!(!path.contains("d"));
    }
}
