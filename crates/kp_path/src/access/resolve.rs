use alloc::borrow::Cow;
use alloc::string::String;
use core::any::Any;

use thiserror::Error;

use crate::access::{Path, Segment};
use crate::{Navigate, Resolved};

// -----------------------------------------------------------------------------
// Error

/// An error raised while replaying a [`Path`] against a value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// A null value was reached before the end of the path.
    #[error("cannot resolve `{segment}` on null (reached via `{prefix}` on {type_name})")]
    NullSegment {
        /// The first segment that could not be applied.
        segment: String,
        /// The short type name of the navigated instance.
        type_name: Cow<'static, str>,
        /// The dot rendering of the segments resolved before `segment`.
        prefix: String,
    },
    /// The value supports neither a field, an index nor a key named `segment`.
    #[error("cannot resolve `{segment}` on {type_name} (path: `{prefix}`)")]
    Unresolvable {
        /// The first segment that could not be applied.
        segment: String,
        /// The short type name of the value the segment was applied to.
        type_name: Cow<'static, str>,
        /// The dot rendering of the segments resolved before `segment`.
        prefix: String,
    },
    /// The path resolved, but not to the requested type.
    #[error("expected `{expected}` at the end of the path, found `{found}`")]
    InvalidDowncast {
        /// The short name of the requested type.
        expected: Cow<'static, str>,
        /// The short name of the resolved type.
        found: Cow<'static, str>,
    },
}

/// Why a single segment could not be applied.
enum StepFailure {
    Null,
    Missing(&'static str),
}

// -----------------------------------------------------------------------------
// Single step

/// Applies one segment to a value.
///
/// Nullable layers are peeled off first. Then the segment is tried as a
/// field, as an index (text or sequence, digits only) and as a key.
fn step<'r>(value: &'r dyn Navigate, segment: &Segment) -> Result<Resolved<'r>, StepFailure> {
    let Some(value) = value.unwrap_nullable() else {
        return Err(StepFailure::Null);
    };

    if let Some(record) = value.as_record()
        && let Some(field) = record.field(segment)
    {
        return Ok(Resolved::Value(field));
    }

    if segment.is_index() {
        if let Some(text) = value.as_text() {
            return char_at(text, segment)
                .map(Resolved::Text)
                .ok_or(StepFailure::Missing(value.type_name()));
        }
        if let Some(sequence) = value.as_sequence() {
            return segment
                .parse::<usize>()
                .ok()
                .and_then(|index| sequence.get(index))
                .map(Resolved::Value)
                .ok_or(StepFailure::Missing(value.type_name()));
        }
    }

    if let Some(mapping) = value.as_mapping()
        && let Some(entry) = mapping.get(segment)
    {
        return Ok(Resolved::Value(entry));
    }

    Err(StepFailure::Missing(value.type_name()))
}

/// Applies one segment to a character of text, which only supports index `0`.
fn step_text<'r>(text: &'r str, segment: &Segment) -> Result<Resolved<'r>, StepFailure> {
    if segment.is_index() {
        char_at(text, segment)
            .map(Resolved::Text)
            .ok_or(StepFailure::Missing("&str"))
    } else {
        Err(StepFailure::Missing("&str"))
    }
}

/// The character at a character (not byte) index, as a string slice.
fn char_at<'r>(text: &'r str, segment: &Segment) -> Option<&'r str> {
    let index = segment.parse::<usize>().ok()?;
    let (start, ch) = text.char_indices().nth(index)?;
    Some(&text[start..start + ch.len_utf8()])
}

/// Follows nullable layers until a value of type `T` is found.
fn downcast_resolved<T: Any>(resolved: Resolved<'_>) -> Option<&T> {
    let mut current = resolved.value()?;
    loop {
        if let Some(value) = current.downcast_ref::<T>() {
            return Some(value);
        }
        match current.as_nullable() {
            Some(Some(inner)) => current = inner,
            _ => return None,
        }
    }
}

// -----------------------------------------------------------------------------
// Replay

impl Path {
    /// Replays the path against `instance`.
    ///
    /// The identity path returns `instance` itself. A nullable value at the
    /// end of the path is returned as is, see [`resolve_as`](Self::resolve_as)
    /// for unwrapping.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::NullSegment`] if a null value is reached before
    ///   the last segment was applied.
    /// - [`ResolveError::Unresolvable`] if a segment matches no field, index or key.
    ///
    /// # Examples
    ///
    /// ```
    /// use kp_path::{Navigate, Path, access::ResolveError};
    ///
    /// #[derive(Navigate)]
    /// struct User { name: String }
    ///
    /// #[derive(Navigate)]
    /// struct Team { users: Vec<User> }
    ///
    /// let team = Team { users: vec![User { name: "Alice".into() }] };
    ///
    /// let path = Path::capture(|t| t.attr("users")?.item(0).attr("name")).unwrap();
    /// assert_eq!(path.resolve(&team).unwrap().as_str(), Some("Alice"));
    ///
    /// let path = Path::capture(|t| t.attr("users")?.item(3).attr("name")).unwrap();
    /// assert!(matches!(path.resolve(&team), Err(ResolveError::Unresolvable { .. })));
    /// ```
    pub fn resolve<'r>(&self, instance: &'r dyn Navigate) -> Result<Resolved<'r>, ResolveError> {
        let mut current = Resolved::Value(instance);

        for (index, segment) in self.parts().iter().enumerate() {
            let next = match current {
                Resolved::Value(value) => step(value, segment),
                Resolved::Text(text) => step_text(text, segment),
            };

            current = match next {
                Ok(next) => next,
                Err(StepFailure::Null) => {
                    return Err(ResolveError::NullSegment {
                        segment: String::from(segment.as_str()),
                        type_name: crate::short_type_name(instance.type_name()),
                        prefix: self.prefix(index),
                    });
                }
                Err(StepFailure::Missing(type_name)) => {
                    return Err(ResolveError::Unresolvable {
                        segment: String::from(segment.as_str()),
                        type_name: crate::short_type_name(type_name),
                        prefix: self.prefix(index),
                    });
                }
            };
        }

        Ok(current)
    }

    /// Replays the path against `instance`, substituting `default` on failure.
    ///
    /// Later segments are not evaluated once a step fails.
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
    /// let user = User { address: None };
    /// let path = Path::capture(|u| u.attr("address")?.attr("city")).unwrap();
    ///
    /// assert!(path.resolve(&user).is_err());
    /// assert_eq!(path.resolve_or(&user, &"N/A").as_str(), Some("N/A"));
    /// ```
    pub fn resolve_or<'r>(
        &self,
        instance: &'r dyn Navigate,
        default: &'r dyn Navigate,
    ) -> Resolved<'r> {
        match self.resolve(instance) {
            Ok(resolved) => resolved,
            Err(err) => {
                log::debug!("key path `{self}` fell back to its default: {err}");
                Resolved::Value(default)
            }
        }
    }

    /// Replays the path and downcasts the result to `T`.
    ///
    /// `Some` layers around the result are unwrapped when the result
    /// itself is not a `T`.
    ///
    /// ```
    /// use kp_path::{Path, access::ResolveError};
    ///
    /// let data = (Some(Box::new(5_i32)), "text");
    ///
    /// let path = Path::capture(|d| Ok(d.item(0))).unwrap();
    /// assert_eq!(path.resolve_as::<i32>(&data), Ok(&5));
    /// assert!(path.resolve_as::<Option<Box<i32>>>(&data).is_ok());
    ///
    /// let path = Path::capture(|d| Ok(d.item(1))).unwrap();
    /// assert!(matches!(
    ///     path.resolve_as::<i32>(&data),
    ///     Err(ResolveError::InvalidDowncast { .. }),
    /// ));
    /// ```
    pub fn resolve_as<'r, T: Any>(&self, instance: &'r dyn Navigate) -> Result<&'r T, ResolveError> {
        let resolved = self.resolve(instance)?;
        downcast_resolved::<T>(resolved).ok_or_else(|| ResolveError::InvalidDowncast {
            expected: crate::short_type_name(core::any::type_name::<T>()),
            found: resolved.short_type_name(),
        })
    }

    /// Replays the path and downcasts the result to `T`, substituting
    /// `default` when either step fails.
    ///
    /// ```
    /// use kp_path::Path;
    ///
    /// let scores = vec![10_u32, 20];
    /// let path = Path::capture(|s| Ok(s.item(5))).unwrap();
    ///
    /// assert_eq!(*path.resolve_as_or(&scores, &0), 0);
    /// ```
    pub fn resolve_as_or<'r, T: Any>(&self, instance: &'r dyn Navigate, default: &'r T) -> &'r T {
        match self.resolve_as::<T>(instance) {
            Ok(value) => value,
            Err(err) => {
                log::debug!("key path `{self}` fell back to its default: {err}");
                default
            }
        }
    }

    /// Replays the path and downcasts the result to `T`, `None` on any failure.
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use kp_path::Path;
    ///
    /// let config = BTreeMap::from([("port".to_string(), 8080_u16)]);
    ///
    /// let port = Path::capture(|c| Ok(c.item("port"))).unwrap();
    /// let host = Path::capture(|c| Ok(c.item("host"))).unwrap();
    ///
    /// assert_eq!(port.get::<u16>(&config), Some(&8080));
    /// assert_eq!(host.get::<u16>(&config), None);
    /// ```
    #[inline]
    pub fn get<'r, T: Any>(&self, instance: &'r dyn Navigate) -> Option<&'r T> {
        self.resolve_as::<T>(instance).ok()
    }

    /// The dot rendering of the first `len` segments.
    fn prefix(&self, len: usize) -> String {
        crate::access::render::join(&self.parts()[..len], ".")
    }
}

#[cfg(test)]
mod tests {
    use alloc::borrow::ToOwned;
    use alloc::boxed::Box;
    use alloc::collections::BTreeMap;
    use alloc::string::{String, ToString};
    use alloc::vec;
    use alloc::vec::Vec;

    use super::ResolveError;
    use crate::{Navigate, Path, Resolved, keypath};

    #[derive(Navigate, Debug, PartialEq)]
    struct Address {
        city: String,
        zip: Option<String>,
    }

    #[derive(Navigate)]
    struct User {
        name: String,
        address: Option<Address>,
        tags: Vec<String>,
        extra: BTreeMap<String, i64>,
    }

    fn alice() -> User {
        User {
            name: "Alice".to_owned(),
            address: Some(Address {
                city: "London".to_owned(),
                zip: None,
            }),
            tags: vec!["admin".to_owned(), "ops".to_owned()],
            extra: BTreeMap::from([("age".to_owned(), 30), ("0".to_owned(), -1)]),
        }
    }

    #[test]
    fn nested_fields() {
        let user = alice();
        let path = keypath!(address.city).unwrap();

        assert_eq!(path.resolve_as::<String>(&user).unwrap(), "London");
        assert_eq!(path.resolve(&user).unwrap().as_str(), Some("London"));
    }

    #[test]
    fn identity_returns_the_instance() {
        let user = alice();
        let resolved = Path::identity().resolve(&user).unwrap();
        let back = resolved.downcast_ref::<User>().unwrap();
        assert!(core::ptr::eq(back, &user));
    }

    #[test]
    fn indices_keys_and_characters() {
        let user = alice();

        let tag = keypath!(tags[1]).unwrap();
        assert_eq!(tag.get::<String>(&user).map(String::as_str), Some("ops"));

        let age = keypath!(extra["age"]).unwrap();
        assert_eq!(age.get::<i64>(&user), Some(&30));

        // Digit segments on a mapping are keys.
        let zero = keypath!(extra[0]).unwrap();
        assert_eq!(zero.get::<i64>(&user), Some(&-1));

        let initial = keypath!(name[0]).unwrap();
        assert!(matches!(initial.resolve(&user), Ok(Resolved::Text("A"))));

        let nested = keypath!(tags[0][1][0]).unwrap();
        assert_eq!(nested.resolve(&user).unwrap().as_str(), Some("d"));
    }

    #[test]
    fn missing_segments_report_the_prefix() {
        let user = alice();

        let path = keypath!(address.country).unwrap();
        assert_eq!(
            path.resolve(&user).unwrap_err(),
            ResolveError::Unresolvable {
                segment: "country".to_string(),
                type_name: "Address".into(),
                prefix: "address".to_string(),
            }
        );

        let path = keypath!(tags[9]).unwrap();
        assert!(matches!(
            path.resolve(&user),
            Err(ResolveError::Unresolvable { ref segment, .. }) if segment == "9"
        ));

        // Negative indices are never indices.
        let path = keypath!(tags["-1"]).unwrap();
        assert!(path.resolve(&user).is_err());
    }

    #[test]
    fn null_segments() {
        let user = User {
            address: None,
            ..alice()
        };

        let path = keypath!(address.city).unwrap();
        let err = path.resolve(&user).unwrap_err();
        assert_eq!(
            err,
            ResolveError::NullSegment {
                segment: "city".to_string(),
                type_name: "User".into(),
                prefix: "address".to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            "cannot resolve `city` on null (reached via `address` on User)"
        );

        let fallback = "N/A";
        assert_eq!(path.resolve_or(&user, &fallback).as_str(), Some("N/A"));
        assert_eq!(path.resolve_as_or::<&str>(&user, &fallback), &"N/A");
        assert_eq!(path.get::<String>(&user), None);
    }

    #[test]
    fn null_default_is_distinct_from_no_default() {
        let user = User {
            address: None,
            ..alice()
        };
        let path = keypath!(address.city).unwrap();

        assert!(matches!(
            path.resolve(&user),
            Err(ResolveError::NullSegment { .. })
        ));

        let fallback: Option<String> = None;
        let resolved = path.resolve_or(&user, &fallback);
        assert!(resolved.is_null());
        assert!(core::ptr::eq(
            resolved.downcast_ref::<Option<String>>().unwrap(),
            &fallback
        ));
    }

    #[test]
    fn null_at_the_end_is_returned() {
        let user = alice();
        let path = keypath!(address.zip).unwrap();

        let resolved = path.resolve(&user).unwrap();
        assert!(resolved.is_null());
        assert!(resolved.downcast_ref::<Option<String>>().unwrap().is_none());
        assert_eq!(path.get::<String>(&user), None);
    }

    #[test]
    fn nullable_layers_unwrap_on_downcast() {
        let user = alice();
        let path = keypath!(address).unwrap();

        let address = path.resolve_as::<Address>(&user).unwrap();
        assert_eq!(address.city, "London");
        assert!(path.resolve_as::<Option<Address>>(&user).is_ok());

        let err = path.resolve_as::<u8>(&user).unwrap_err();
        assert_eq!(
            err,
            ResolveError::InvalidDowncast {
                expected: "u8".into(),
                found: "Option<Address>".into(),
            }
        );
    }

    #[test]
    fn boxed_values_are_transparent() {
        let data = Box::new(alice());
        let path = keypath!(address.city).unwrap();
        assert_eq!(path.get::<String>(&data).map(String::as_str), Some("London"));
    }

    #[test]
    fn default_substitution_short_circuits() {
        let data: Vec<Option<Vec<i32>>> = vec![None, Some(vec![4])];

        let hit = keypath!([1][0]).unwrap();
        assert_eq!(hit.resolve_as_or(&data, &0), &4);

        let miss = keypath!([0][0]).unwrap();
        assert_eq!(miss.resolve_as_or(&data, &0), &0);
        assert!(matches!(
            miss.resolve(&data),
            Err(ResolveError::NullSegment { ref prefix, .. }) if prefix == "0"
        ));
    }
}
