//! Textual notations of a path.

use alloc::string::String;
use core::fmt;

use crate::access::{Path, Segment};

/// Writes the segments separated by `sep`.
pub(crate) fn write_joined<W: fmt::Write + ?Sized>(
    out: &mut W,
    parts: &[Segment],
    sep: &str,
) -> fmt::Result {
    let mut iter = parts.iter();
    if let Some(first) = iter.next() {
        out.write_str(first)?;
        for part in iter {
            out.write_str(sep)?;
            out.write_str(part)?;
        }
    }
    Ok(())
}

pub(crate) fn join(parts: &[Segment], sep: &str) -> String {
    let capacity = parts.iter().map(|part| part.len()).sum::<usize>()
        + sep.len() * parts.len().saturating_sub(1);
    let mut out = String::with_capacity(capacity);
    for (index, part) in parts.iter().enumerate() {
        if index > 0 {
            out.push_str(sep);
        }
        out.push_str(part);
    }
    out
}

pub(crate) fn write_bracket<W: fmt::Write + ?Sized>(out: &mut W, parts: &[Segment]) -> fmt::Result {
    for part in parts {
        out.write_str("['")?;
        out.write_str(part)?;
        out.write_str("']")?;
    }
    Ok(())
}

impl Path {
    /// Joins the segments with an arbitrary separator.
    ///
    /// ```
    /// # use kp_path::keypath;
    /// let path = keypath!(a.b.c).unwrap();
    /// assert_eq!(path.join(" > "), "a > b > c");
    /// ```
    #[inline]
    pub fn join(&self, sep: &str) -> String {
        join(self.parts(), sep)
    }

    /// `address.city`, the default rendering.
    #[inline]
    pub fn to_dot(&self) -> String {
        self.join(".")
    }

    /// `address/city`
    #[inline]
    pub fn to_posix(&self) -> String {
        self.join("/")
    }

    /// `address.city`, the field access expression on the root value.
    ///
    /// Index segments are rendered as fields, e.g. `users.0.name`.
    #[inline]
    pub fn to_field_expr(&self) -> String {
        self.to_dot()
    }

    /// `['address']['city']`
    ///
    /// Segments are not escaped.
    pub fn to_bracket(&self) -> String {
        let mut out = String::new();
        // Writing into a `String` never fails.
        let _ = write_bracket(&mut out, self.parts());
        out
    }

    /// `address.city`, JMESPath dot notation.
    #[inline]
    pub fn to_jmespath(&self) -> String {
        self.to_dot()
    }

    /// `$.address.city`
    pub fn to_jsonpath(&self) -> String {
        let mut out = String::from("$.");
        // Writing into a `String` never fails.
        let _ = write_joined(&mut out, self.parts(), ".");
        out
    }

    /// `/address/city`
    pub fn to_xpath(&self) -> String {
        let mut out = String::from("/");
        // Writing into a `String` never fails.
        let _ = write_joined(&mut out, self.parts(), "/");
        out
    }
}

#[cfg(test)]
mod tests {
    use crate::{Path, keypath};

    #[test]
    fn every_notation() {
        let path = keypath!(users[0].name).unwrap();

        assert_eq!(path.to_dot(), "users.0.name");
        assert_eq!(path.to_posix(), "users/0/name");
        assert_eq!(path.to_field_expr(), "users.0.name");
        assert_eq!(path.to_bracket(), "['users']['0']['name']");
        assert_eq!(path.to_jmespath(), "users.0.name");
        assert_eq!(path.to_jsonpath(), "$.users.0.name");
        assert_eq!(path.to_xpath(), "/users/0/name");
        assert_eq!(path.join(""), "users0name");
    }

    #[test]
    fn identity_notations() {
        let path = Path::identity();

        assert_eq!(path.to_dot(), "");
        assert_eq!(path.to_posix(), "");
        assert_eq!(path.to_bracket(), "");
        assert_eq!(path.to_jsonpath(), "$.");
        assert_eq!(path.to_xpath(), "/");
    }

    #[test]
    fn rendering_is_pure() {
        let path = keypath!(a["b c"].d).unwrap();
        assert_eq!(path.to_bracket(), path.to_bracket());
        assert_eq!(path.to_dot(), "a.b c.d");
        assert_eq!(path.to_bracket(), "['a']['b c']['d']");
    }
}
