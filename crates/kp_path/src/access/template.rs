use alloc::borrow::Cow;
use alloc::string::String;
use core::fmt::Write;

use thiserror::Error;

use crate::access::render::{write_bracket, write_joined};
use crate::access::{Path, StructureError};

/// An error raised while rendering a [`Path::format`] template.
///
/// Offsets are byte offsets into the template.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// A placeholder names no known variable.
    #[error("unknown template variable `{name}` at offset {offset}")]
    UnknownVariable {
        /// The placeholder name.
        name: String,
        /// Offset of the opening `{`.
        offset: usize,
    },
    /// A `{` without a closing `}`.
    #[error("unclosed `{{` at offset {offset}")]
    Unclosed {
        /// Offset of the opening `{`.
        offset: usize,
    },
    /// A single `}` outside a placeholder. Write `}}` for a literal brace.
    #[error("unmatched `}}` at offset {offset}")]
    UnmatchedBrace {
        /// Offset of the `}`.
        offset: usize,
    },
    /// A `:spec` on a variable other than `sep`.
    #[error("template variable `{name}` at offset {offset} does not take a format spec")]
    UnexpectedSpec {
        /// The placeholder name.
        name: String,
        /// Offset of the opening `{`.
        offset: usize,
    },
    /// `root` or `leaf` on the identity path.
    #[error("cannot render the placeholder at offset {offset}: {source}")]
    Structure {
        /// Offset of the opening `{`.
        offset: usize,
        /// The failed structural query.
        source: StructureError,
    },
}

/// Finds the end of the placeholder whose body starts at `body_start`.
///
/// Returns the body and the offset just past the closing `}`. In a `sep:`
/// body `}}` is an escaped brace.
fn scan_placeholder(template: &str, body_start: usize) -> Option<(Cow<'_, str>, usize)> {
    let rest = &template[body_start..];
    if !rest.starts_with("sep:") {
        let len = rest.find('}')?;
        return Some((Cow::Borrowed(&rest[..len]), body_start + len + 1));
    }

    let bytes = rest.as_bytes();
    let mut body = String::new();
    let mut literal_start = 0;
    let mut index = 0;
    loop {
        match *bytes.get(index)? {
            b'}' if bytes.get(index + 1) == Some(&b'}') => {
                body.push_str(&rest[literal_start..=index]);
                index += 2;
                literal_start = index;
            }
            b'}' => {
                body.push_str(&rest[literal_start..index]);
                return Some((Cow::Owned(body), body_start + index + 1));
            }
            _ => index += 1,
        }
    }
}

impl Path {
    /// Renders the path through a template.
    ///
    /// Placeholders are written as `{name}`; `{{` and `}}` are literal braces.
    ///
    /// | Variable     | Rendering                                   |
    /// |--------------|---------------------------------------------|
    /// | `parts`      | `['address', 'city']`                       |
    /// | `root`       | `address` (fails on the identity path)      |
    /// | `leaf`       | `city` (fails on the identity path)         |
    /// | `depth`      | `2`                                         |
    /// | `dot`        | `address.city`                              |
    /// | `posix`      | `address/city`                              |
    /// | `bracket`    | `['address']['city']`                       |
    /// | `jsonpath`   | `$.address.city`                            |
    /// | `xpath`      | `/address/city`                             |
    /// | `sep`        | `address.city`                              |
    /// | `sep:SEP`    | the segments joined by `SEP`, e.g. `{sep:::}` gives `address::city` |
    ///
    /// Inside a `sep:` separator `}}` stands for a literal `}`, so
    /// `{sep:}}}` joins with `}`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kp_path::keypath;
    /// let path = keypath!(address.city).unwrap();
    ///
    /// assert_eq!(path.format("{root} > {leaf}").unwrap(), "address > city");
    /// assert_eq!(path.format("{depth} segments: {dot}").unwrap(), "2 segments: address.city");
    /// assert_eq!(path.format("{root}::{sep: -> }").unwrap(), "address::address -> city");
    /// assert_eq!(path.format("{{{xpath}}}").unwrap(), "{/address/city}");
    /// assert!(path.format("{unknown}").is_err());
    /// ```
    pub fn format(&self, template: &str) -> Result<String, FormatError> {
        let bytes = template.as_bytes();
        let mut out = String::with_capacity(template.len());
        let mut literal_start = 0;
        let mut index = 0;

        while index < bytes.len() {
            match bytes[index] {
                b'{' => {
                    out.push_str(&template[literal_start..index]);
                    if bytes.get(index + 1) == Some(&b'{') {
                        out.push('{');
                        index += 2;
                    } else {
                        let Some((body, end)) = scan_placeholder(template, index + 1) else {
                            return Err(FormatError::Unclosed { offset: index });
                        };
                        self.render_placeholder(&mut out, &body, index)?;
                        index = end;
                    }
                    literal_start = index;
                }
                b'}' => {
                    out.push_str(&template[literal_start..index]);
                    if bytes.get(index + 1) != Some(&b'}') {
                        return Err(FormatError::UnmatchedBrace { offset: index });
                    }
                    out.push('}');
                    index += 2;
                    literal_start = index;
                }
                _ => index += 1,
            }
        }
        out.push_str(&template[literal_start..]);

        Ok(out)
    }

    fn render_placeholder(&self, out: &mut String, body: &str, offset: usize) -> Result<(), FormatError> {
        let (name, spec) = match body.split_once(':') {
            Some((name, spec)) => (name, Some(spec)),
            None => (body, None),
        };

        if let Some(sep) = spec {
            if name != "sep" {
                return Err(FormatError::UnexpectedSpec {
                    name: String::from(name),
                    offset,
                });
            }
            // Writing into a `String` never fails.
            let _ = write_joined(out, self.parts(), sep);
            return Ok(());
        }

        let structure = |source: StructureError| FormatError::Structure { offset, source };
        let parts = self.parts();
        // Writing into a `String` never fails.
        let _ = match name {
            "parts" => {
                out.push('[');
                for (index, part) in parts.iter().enumerate() {
                    if index > 0 {
                        out.push_str(", ");
                    }
                    out.push('\'');
                    out.push_str(part);
                    out.push('\'');
                }
                out.push(']');
                Ok(())
            }
            "root" => {
                out.push_str(self.root().map_err(structure)?);
                Ok(())
            }
            "leaf" => {
                out.push_str(self.leaf().map_err(structure)?);
                Ok(())
            }
            "depth" => write!(out, "{}", self.depth()),
            "dot" | "sep" => write_joined(out, parts, "."),
            "posix" => write_joined(out, parts, "/"),
            "bracket" => write_bracket(out, parts),
            "jsonpath" => {
                out.push_str("$.");
                write_joined(out, parts, ".")
            }
            "xpath" => {
                out.push('/');
                write_joined(out, parts, "/")
            }
            _ => {
                return Err(FormatError::UnknownVariable {
                    name: String::from(name),
                    offset,
                });
            }
        };

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::FormatError;
    use crate::access::StructureError;
    use crate::{Path, keypath};

    #[test]
    fn all_variables() {
        let path = keypath!(users[0].name).unwrap();
        let rendered = path
            .format("{parts}|{root}|{leaf}|{depth}|{dot}|{posix}|{bracket}|{jsonpath}|{xpath}|{sep}")
            .unwrap();

        assert_eq!(
            rendered,
            "['users', '0', 'name']|users|name|3|users.0.name|users/0/name\
             |['users']['0']['name']|$.users.0.name|/users/0/name|users.0.name"
        );
    }

    #[test]
    fn custom_separators() {
        let path = keypath!(a.b.c).unwrap();

        assert_eq!(path.format("{sep:::}").unwrap(), "a::b::c");
        assert_eq!(path.format("{sep:}").unwrap(), "abc");
        assert_eq!(path.format("{sep: / }").unwrap(), "a / b / c");
    }

    #[test]
    fn closing_brace_separator() {
        let path = keypath!(a.b).unwrap();

        assert_eq!(path.format("{sep:}}}").unwrap(), "a}b");
        assert_eq!(path.format("{sep:}}{{}}}").unwrap(), "a}{{}b");
        assert_eq!(path.format("{dot}}}").unwrap(), "a.b}");
        assert_eq!(path.format("{sep:}}"), Err(FormatError::Unclosed { offset: 0 }));
    }

    #[test]
    fn escapes_and_literals() {
        let path = keypath!(a).unwrap();

        assert_eq!(path.format("").unwrap(), "");
        assert_eq!(path.format("plain").unwrap(), "plain");
        assert_eq!(path.format("{{}}").unwrap(), "{}");
        assert_eq!(path.format("é{leaf}ü").unwrap(), "éaü");
    }

    #[test]
    fn malformed_templates() {
        let path = keypath!(a).unwrap();

        assert_eq!(
            path.format("x{nope}"),
            Err(FormatError::UnknownVariable { name: "nope".to_string(), offset: 1 })
        );
        assert_eq!(path.format("ab{dot"), Err(FormatError::Unclosed { offset: 2 }));
        assert_eq!(path.format("a}b"), Err(FormatError::UnmatchedBrace { offset: 1 }));
        assert_eq!(
            path.format("{depth:>4}"),
            Err(FormatError::UnexpectedSpec { name: "depth".to_string(), offset: 0 })
        );
    }

    #[test]
    fn identity_path_has_no_root() {
        let identity = Path::identity();

        assert_eq!(identity.format("[{dot}] {depth}").unwrap(), "[] 0");
        assert_eq!(identity.format("{parts}").unwrap(), "[]");
        assert_eq!(
            identity.format("{leaf}"),
            Err(FormatError::Structure { offset: 0, source: StructureError::EmptyPath })
        );
    }
}
