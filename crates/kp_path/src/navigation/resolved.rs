use alloc::borrow::Cow;
use core::any::Any;
use core::fmt;

use crate::Navigate;

/// The value reached by replaying a [`Path`](crate::Path).
///
/// Indexing into text yields a one-character string slice, which is not a
/// standalone `Navigate` value, so it has its own variant.
///
/// # Examples
///
/// ```
/// use kp_path::{Path, Resolved};
///
/// let data = (String::from("abc"), 7_u32);
///
/// let path = Path::capture(|t| Ok(t.item(0).item(1))).unwrap();
/// let resolved = path.resolve(&data).unwrap();
/// assert!(matches!(resolved, Resolved::Text("b")));
///
/// let path = Path::capture(|t| Ok(t.item(1))).unwrap();
/// let resolved = path.resolve(&data).unwrap();
/// assert_eq!(resolved.downcast_ref::<u32>(), Some(&7));
/// ```
#[derive(Clone, Copy)]
pub enum Resolved<'r> {
    /// A value inside the navigated instance.
    Value(&'r dyn Navigate),
    /// A single character of a text value.
    Text(&'r str),
}

impl<'r> Resolved<'r> {
    /// Returns the navigable value, or `None` for a character of text.
    #[inline]
    pub fn value(self) -> Option<&'r dyn Navigate> {
        match self {
            Resolved::Value(value) => Some(value),
            Resolved::Text(_) => None,
        }
    }

    /// Downcasts the value to type `T` by reference.
    ///
    /// A character of text never downcasts, use [`as_str`](Self::as_str) instead.
    #[inline]
    pub fn downcast_ref<T: Any>(self) -> Option<&'r T> {
        self.value()?.downcast_ref::<T>()
    }

    /// Returns the text of the value, if it has any.
    #[inline]
    pub fn as_str(self) -> Option<&'r str> {
        match self {
            Resolved::Value(value) => value.as_text(),
            Resolved::Text(text) => Some(text),
        }
    }

    /// Returns `true` if the value is null.
    #[inline]
    pub fn is_null(self) -> bool {
        match self {
            Resolved::Value(value) => value.is_null(),
            Resolved::Text(_) => false,
        }
    }

    /// The full type name of the resolved value.
    #[inline]
    pub fn type_name(self) -> &'static str {
        match self {
            Resolved::Value(value) => value.type_name(),
            Resolved::Text(_) => "&str",
        }
    }

    /// The type name without module paths, see [`short_type_name`](crate::short_type_name).
    #[inline]
    pub fn short_type_name(self) -> Cow<'static, str> {
        crate::short_type_name(self.type_name())
    }
}

impl fmt::Debug for Resolved<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolved::Value(value) => fmt::Debug::fmt(*value, f),
            Resolved::Text(text) => fmt::Debug::fmt(*text, f),
        }
    }
}

impl<'r> From<&'r dyn Navigate> for Resolved<'r> {
    #[inline]
    fn from(value: &'r dyn Navigate) -> Self {
        Resolved::Value(value)
    }
}
