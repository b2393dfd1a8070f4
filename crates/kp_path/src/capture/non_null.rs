use core::ops::BitOr;

use crate::capture::{RecordError, Recorder};

/// Marks a step through a nullable value, like `!` in TypeScript.
///
/// Recording is unaffected, the argument is returned unchanged. It documents
/// in the selector that the path continues through an optional value, which
/// replay handles by unwrapping `Some` and failing on `None`.
///
/// # Examples
///
/// ```
/// use kp_path::{Path, nn};
///
/// let a = Path::capture(|u| nn(u.attr("address")?).attr("city")).unwrap();
/// let b = Path::capture(|u| u.attr("address")?.attr("city")).unwrap();
/// assert_eq!(a, b);
/// ```
#[inline(always)]
pub fn nn<T>(value: T) -> T {
    value
}

/// The pipe form of [`nn`]: `value | Nn` returns `value`.
///
/// Works on recorders and on the results of fallible steps.
///
/// # Examples
///
/// ```
/// use kp_path::{Nn, Path};
///
/// let path = Path::capture(|u| (u.attr("address") | Nn)?.attr("city")).unwrap();
/// assert_eq!(path.to_dot(), "address.city");
///
/// let path = Path::capture(|u| Ok(u.item("tags") | Nn)).unwrap();
/// assert_eq!(path.to_dot(), "tags");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Nn;

impl BitOr<Nn> for Recorder {
    type Output = Recorder;

    #[inline(always)]
    fn bitor(self, _: Nn) -> Recorder {
        self
    }
}

impl BitOr<Nn> for Result<Recorder, RecordError> {
    type Output = Result<Recorder, RecordError>;

    #[inline(always)]
    fn bitor(self, _: Nn) -> Self::Output {
        self
    }
}
