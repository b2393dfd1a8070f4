use alloc::boxed::Box;
use alloc::string::ToString;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use thiserror::Error;

use crate::access::Segment;

// -----------------------------------------------------------------------------
// Error

/// An error raised by a [`Recorder`] step.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// Recorders never accept writes.
    #[error("cannot set `{name}`: a path recorder is read-only")]
    ReadOnly {
        /// The name of the rejected write target.
        name: Box<str>,
    },
    /// Names with double underscores on both sides are reserved.
    #[error("`{name}` is a reserved name and cannot be recorded")]
    ReservedName {
        /// The rejected name.
        name: Box<str>,
    },
}

// -----------------------------------------------------------------------------
// Recorder

/// One recorded segment and the steps before it.
struct Link {
    segment: Segment,
    prev: Option<Arc<Link>>,
}

/// A stand-in value that records every navigation step taken on it.
///
/// Steps never modify a recorder, they return a new one that shares the
/// previous steps, so a recorder can be branched freely.
///
/// A selector passed to [`Path::capture`](crate::Path::capture) receives the
/// empty root recorder.
///
/// # Examples
///
/// ```
/// use kp_path::Path;
///
/// let path = Path::capture(|user| {
///     let address = user.attr("address")?;
///     let _ignored = address.attr("zip")?;
///     Ok(address.attr("city")?)
/// })
/// .unwrap();
///
/// assert_eq!(path.to_dot(), "address.city");
/// ```
#[derive(Clone, Default)]
pub struct Recorder {
    tail: Option<Arc<Link>>,
    depth: usize,
}

impl Recorder {
    /// The root recorder, with no segment.
    #[inline]
    pub(crate) const fn root() -> Self {
        Self {
            tail: None,
            depth: 0,
        }
    }

    /// Returns the number of recorded segments.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    fn push(&self, segment: Segment) -> Self {
        Self {
            tail: Some(Arc::new(Link {
                segment,
                prev: self.tail.clone(),
            })),
            depth: self.depth + 1,
        }
    }

    /// Records an attribute access.
    ///
    /// Fails for reserved names such as `__class__`.
    ///
    /// ```
    /// # use kp_path::{Path, capture::RecordError};
    /// let err = Path::capture(|x| x.attr("__dict__")).unwrap_err();
    /// assert!(matches!(
    ///     err,
    ///     kp_path::access::CaptureError::Record(RecordError::ReservedName { .. }),
    /// ));
    /// ```
    pub fn attr(&self, name: &str) -> Result<Self, RecordError> {
        if is_reserved(name) {
            return Err(RecordError::ReservedName { name: name.into() });
        }
        Ok(self.push(Segment::from(name)))
    }

    /// Records an index or key access.
    ///
    /// The key is recorded as its `Display` rendering, so `item(0)` and
    /// `item("0")` record the same segment.
    pub fn item(&self, key: impl fmt::Display) -> Self {
        self.push(Segment::from(key.to_string()))
    }

    /// Recorders are read-only, this always fails.
    ///
    /// ```
    /// # use kp_path::{Path, capture::RecordError};
    /// let result = Path::capture(|x| {
    ///     x.set_attr("name", &"value")?;
    ///     Ok(x)
    /// });
    /// assert!(result.is_err());
    /// ```
    pub fn set_attr<V: ?Sized>(&self, name: &str, _value: &V) -> Result<(), RecordError> {
        Err(RecordError::ReadOnly { name: name.into() })
    }

    /// Consumes the recorder, returning its segments in access order.
    pub(crate) fn into_segments(self) -> Vec<Segment> {
        let mut segments = Vec::with_capacity(self.depth);
        let mut cursor = self.tail.as_deref();
        while let Some(link) = cursor {
            segments.push(link.segment.clone());
            cursor = link.prev.as_deref();
        }
        segments.reverse();
        segments
    }
}

impl fmt::Debug for Recorder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let segments = self.clone().into_segments();
        f.debug_tuple("Recorder").field(&segments).finish()
    }
}

/// `__name__`
#[inline]
fn is_reserved(name: &str) -> bool {
    name.starts_with("__") && name.ends_with("__")
}

// -----------------------------------------------------------------------------
// PathRecorder

/// The two navigation steps a path can record.
///
/// Implemented by [`Recorder`]. Generic helpers can build on this trait to
/// describe reusable selector fragments.
///
/// ```
/// use kp_path::{Path, capture::{PathRecorder, RecordError}};
///
/// fn first_name<R: PathRecorder>(r: &R) -> Result<R, RecordError> {
///     Ok(r.with_attribute("names")?.with_index(&0))
/// }
///
/// let path = Path::capture(|u| first_name(&u.attr("profile")?)).unwrap();
/// assert_eq!(path.to_dot(), "profile.names.0");
/// ```
pub trait PathRecorder: Sized {
    /// Appends an attribute name.
    fn with_attribute(&self, name: &str) -> Result<Self, RecordError>;

    /// Appends the rendering of an index or key.
    fn with_index(&self, key: &dyn fmt::Display) -> Self;
}

impl PathRecorder for Recorder {
    #[inline]
    fn with_attribute(&self, name: &str) -> Result<Self, RecordError> {
        self.attr(name)
    }

    #[inline]
    fn with_index(&self, key: &dyn fmt::Display) -> Self {
        self.item(key)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::{RecordError, Recorder};

    #[test]
    fn steps_share_and_never_mutate() {
        let root = Recorder::root();
        let users = root.attr("users").unwrap();
        let first = users.item(0);
        let second = users.item(1);

        assert_eq!(root.depth(), 0);
        assert_eq!(users.depth(), 1);
        assert_eq!(first.clone().into_segments(), vec!["users", "0"]);
        assert_eq!(second.into_segments(), vec!["users", "1"]);
        assert_eq!(users.into_segments(), vec!["users"]);
        assert!(root.into_segments().is_empty());
    }

    #[test]
    fn reserved_names_are_rejected() {
        let root = Recorder::root();
        assert_eq!(
            root.attr("__len__").unwrap_err(),
            RecordError::ReservedName { name: "__len__".into() }
        );
        // Only a prefix or a suffix is not reserved.
        assert!(root.attr("__private").is_ok());
        assert!(root.attr("trailing__").is_ok());
        assert!(root.attr("__").is_err());
    }

    #[test]
    fn writes_are_rejected() {
        let root = Recorder::root();
        assert_eq!(
            root.set_attr("name", &1),
            Err(RecordError::ReadOnly { name: "name".into() })
        );
    }

    #[test]
    fn keys_render_through_display() {
        let root = Recorder::root();
        let path = root.item("key").item(-3).item('c').item(2.5);
        assert_eq!(path.into_segments(), vec!["key", "-3", "c", "2.5"]);
    }
}
