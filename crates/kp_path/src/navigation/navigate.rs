use core::any::Any;

use crate::ops::{Mapping, Record, Sequence};

/// A value that a [`Path`](crate::Path) can be replayed against.
///
/// Every method except [`as_navigate`](Navigate::as_navigate) describes one
/// facet of the value's runtime shape. A segment is applied to the facets in
/// a fixed order:
///
/// 1. [`as_record`]: the segment is a field name.
/// 2. [`as_text`] / [`as_sequence`]: the segment is a non-negative integer index.
///    Only consulted when the segment consists of ASCII digits.
/// 3. [`as_mapping`]: the segment is a key.
///
/// Before a segment is applied, [`as_nullable`] layers are peeled off.
/// `Some(None)` marks a null value, on which no segment can be resolved.
///
/// All facets default to `None`, so an empty impl makes a type opaque:
/// it can be the end of a path, but no segment resolves on it.
///
/// Usually this is implemented through [the derive macro](crate::derive::Navigate).
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
/// struct User { address: Option<Address> }
///
/// let user = User { address: Some(Address { city: "London".into() }) };
/// let path = Path::capture(|u| u.attr("address")?.attr("city")).unwrap();
///
/// assert_eq!(path.resolve_as::<String>(&user).unwrap(), "London");
/// ```
///
/// [`as_record`]: Navigate::as_record
/// [`as_text`]: Navigate::as_text
/// [`as_sequence`]: Navigate::as_sequence
/// [`as_mapping`]: Navigate::as_mapping
/// [`as_nullable`]: Navigate::as_nullable
pub trait Navigate: Any + Send + Sync {
    /// Casts this type to a navigable trait object.
    ///
    /// ```
    /// use kp_path::Navigate;
    ///
    /// let x = 32;
    /// let n: &dyn Navigate = x.as_navigate();
    /// assert!(n.is::<i32>());
    /// ```
    #[inline(always)]
    fn as_navigate(&self) -> &dyn Navigate
    where
        Self: Sized,
    {
        self
    }

    /// Field lookup by name.
    #[inline]
    fn as_record(&self) -> Option<&dyn Record> {
        None
    }

    /// Element lookup by index.
    #[inline]
    fn as_sequence(&self) -> Option<&dyn Sequence> {
        None
    }

    /// Entry lookup by string key.
    #[inline]
    fn as_mapping(&self) -> Option<&dyn Mapping> {
        None
    }

    /// Character lookup by index.
    #[inline]
    fn as_text(&self) -> Option<&str> {
        None
    }

    /// A value that wraps at most one inner value.
    ///
    /// - `None`: the value is not a wrapper.
    /// - `Some(None)`: the value is null, e.g. [`Option::None`].
    /// - `Some(Some(inner))`: navigation continues on `inner`.
    #[inline]
    fn as_nullable(&self) -> Option<Option<&dyn Navigate>> {
        None
    }

    /// The full type name of the value, see [`core::any::type_name`].
    ///
    /// Wrappers that are always transparent, such as `Box<T>`, report
    /// their own type.
    #[inline]
    fn type_name(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

impl dyn Navigate {
    /// Returns `true` if the underlying value is of type `T`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        <dyn Any>::is::<T>(self)
    }

    /// Downcasts the value to type `T` by reference.
    ///
    /// If the underlying value is not of type `T`, returns `None`.
    ///
    /// ```
    /// # use kp_path::Navigate;
    /// let x = 10_u8;
    /// let n: &dyn Navigate = &x;
    ///
    /// assert_eq!(n.downcast_ref::<u8>(), Some(&10));
    /// assert_eq!(n.downcast_ref::<i8>(), None);
    /// ```
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    /// Returns `true` if the value is null, see [`Navigate::as_nullable`].
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self.as_nullable(), Some(None))
    }

    /// Peels off nullable layers until a non-wrapper or a null is reached.
    ///
    /// Returns `None` on null.
    pub fn unwrap_nullable(&self) -> Option<&dyn Navigate> {
        let mut current = self;
        loop {
            match current.as_nullable() {
                None => return Some(current),
                Some(None) => return None,
                Some(Some(inner)) => current = inner,
            }
        }
    }
}

impl core::fmt::Debug for dyn Navigate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if let Some(text) = self.as_text() {
            return core::fmt::Debug::fmt(text, f);
        }
        match self.as_nullable() {
            Some(None) => f.write_str("null"),
            Some(Some(inner)) => core::fmt::Debug::fmt(inner, f),
            None => write!(f, "Navigate({})", crate::short_type_name(self.type_name())),
        }
    }
}
