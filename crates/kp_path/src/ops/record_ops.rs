use core::iter::FusedIterator;

use crate::Navigate;

/// A value with named fields.
///
/// Implemented by [`#[derive(Navigate)]`](crate::derive::Navigate) for structs
/// and for enums with struct or tuple variants.
///
/// # Examples
///
/// ```
/// use kp_path::{derive::Navigate, ops::Record};
///
/// #[derive(Navigate)]
/// struct Foo { a: i32, #[navigate(rename = "B")] b: bool }
///
/// let foo = Foo { a: 1, b: true };
///
/// assert!(foo.field("a").is_some());
/// assert!(foo.field("b").is_none());
/// assert_eq!(foo.name_at(1), Some("B"));
/// assert_eq!(foo.field_len(), 2);
/// ```
pub trait Record: Navigate {
    /// Returns the field named `name`.
    fn field(&self, name: &str) -> Option<&dyn Navigate>;

    /// Returns the field at `index`, in declaration order of the visible fields.
    fn field_at(&self, index: usize) -> Option<&dyn Navigate>;

    /// Returns the segment name of the field at `index`.
    fn name_at(&self, index: usize) -> Option<&str>;

    /// Returns the number of visible fields.
    fn field_len(&self) -> usize;
}

impl dyn Record {
    /// Returns an iterator over `(name, value)` pairs.
    ///
    /// ```
    /// use kp_path::{derive::Navigate, Navigate as _};
    ///
    /// #[derive(Navigate)]
    /// struct Foo { a: i32, b: bool }
    ///
    /// let foo = Foo { a: 1, b: true };
    /// let record = foo.as_record().unwrap();
    ///
    /// let names: Vec<_> = record.iter_fields().map(|(name, _)| name).collect();
    /// assert_eq!(names, ["a", "b"]);
    /// ```
    #[inline]
    pub fn iter_fields(&self) -> FieldIter<'_> {
        FieldIter {
            record: self,
            index: 0,
        }
    }
}

/// An iterator over the fields of a [`Record`].
pub struct FieldIter<'a> {
    record: &'a dyn Record,
    index: usize,
}

impl<'a> Iterator for FieldIter<'a> {
    type Item = (&'a str, &'a dyn Navigate);

    fn next(&mut self) -> Option<Self::Item> {
        let name = self.record.name_at(self.index)?;
        let value = self.record.field_at(self.index)?;
        self.index += 1;
        Some((name, value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.record.field_len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FieldIter<'_> {}
impl FusedIterator for FieldIter<'_> {}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::{Navigate, keypath};

    #[derive(Navigate)]
    struct Named {
        id: u32,
        #[navigate(rename = "displayName")]
        display_name: String,
        #[navigate(skip)]
        #[allow(dead_code, reason = "hidden from navigation")]
        secret: u64,
        r#type: bool,
    }

    #[derive(Navigate)]
    #[allow(dead_code, reason = "the skipped field is never read")]
    struct Pair(i32, #[navigate(skip)] (), String);

    #[derive(Navigate)]
    #[navigate(positional)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[derive(Navigate)]
    #[navigate(opaque)]
    #[allow(dead_code, reason = "hidden from navigation")]
    struct Token {
        raw: String,
    }

    #[derive(Navigate)]
    struct Marker;

    #[derive(Navigate)]
    enum Shape {
        Circle { radius: f64 },
        Polygon(Vec<Point>, #[navigate(rename = "closed")] bool),
        Empty,
    }

    #[derive(Navigate)]
    struct Wrapper<T> {
        inner: T,
    }

    fn named() -> Named {
        Named {
            id: 7,
            display_name: String::from("seven"),
            secret: 42,
            r#type: true,
        }
    }

    #[test]
    fn named_struct_fields() {
        let value = named();
        let record = value.as_record().unwrap();

        assert_eq!(record.field_len(), 3);
        assert!(record.field("id").is_some());
        assert!(record.field("displayName").is_some());
        assert!(record.field("display_name").is_none());
        assert!(record.field("secret").is_none());
        assert!(record.field("type").is_some());
        assert!(value.as_sequence().is_none());

        let names: Vec<_> = record.iter_fields().map(|(name, _)| name).collect();
        assert_eq!(names, ["id", "displayName", "type"]);
        assert_eq!(record.iter_fields().len(), 3);
    }

    #[test]
    fn tuple_struct_fields() {
        let value = Pair(1, (), String::from("two"));
        let record = value.as_record().unwrap();

        // Names keep the declaration index, positions skip hidden fields.
        assert_eq!(record.name_at(0), Some("0"));
        assert_eq!(record.name_at(1), Some("2"));
        assert!(record.field("1").is_none());

        let sequence = value.as_sequence().unwrap();
        assert_eq!(sequence.len(), 2);
        assert_eq!(sequence.get(1).unwrap().as_text(), Some("two"));

        // Record lookup comes first: `2` is the field named "2".
        assert_eq!(keypath!([2]).unwrap().get::<String>(&value).map(String::as_str), Some("two"));
        assert_eq!(keypath!([0]).unwrap().get::<i32>(&value), Some(&1));
    }

    #[test]
    fn positional_struct() {
        let point = Point { x: 3, y: 4 };

        assert_eq!(keypath!(y).unwrap().get::<i32>(&point), Some(&4));
        assert_eq!(keypath!([1]).unwrap().get::<i32>(&point), Some(&4));
        assert!(keypath!([2]).unwrap().resolve(&point).is_err());
    }

    #[test]
    fn opaque_and_unit() {
        let token = Token { raw: String::from("x") };
        assert!(token.as_record().is_none());
        assert!(keypath!(raw).unwrap().resolve(&token).is_err());
        assert!(keypath!().unwrap().get::<Token>(&token).is_some());

        assert!(Marker.as_record().is_none());
    }

    #[test]
    fn enum_variants() {
        let circle = Shape::Circle { radius: 1.5 };
        assert_eq!(keypath!(radius).unwrap().get::<f64>(&circle), Some(&1.5));
        assert!(circle.as_sequence().is_none());

        let polygon = Shape::Polygon(vec![Point { x: 0, y: 0 }, Point { x: 1, y: 2 }], true);
        assert_eq!(keypath!([0][1].y).unwrap().get::<i32>(&polygon), Some(&2));
        assert_eq!(keypath!(closed).unwrap().get::<bool>(&polygon), Some(&true));
        assert_eq!(keypath!([1]).unwrap().get::<bool>(&polygon), Some(&true));
        assert_eq!(polygon.as_record().unwrap().field_len(), 2);
        assert!(keypath!(radius).unwrap().resolve(&polygon).is_err());

        let empty = Shape::Empty;
        assert!(empty.as_record().is_none());
        assert!(empty.as_sequence().is_none());
    }

    #[test]
    fn generic_struct() {
        let wrapped = Wrapper { inner: Wrapper { inner: vec![1_u8, 2] } };
        assert_eq!(keypath!(inner.inner[1]).unwrap().get::<u8>(&wrapped), Some(&2));
    }
}
