//! `serde_json` documents are navigated by their runtime variant.
//!
//! - `Null` is null.
//! - `String` is text.
//! - `Array` is a sequence.
//! - `Object` is a mapping.
//! - `Bool` and `Number` are opaque.

use alloc::string::String;

use serde_json::{Map, Value};

use crate::Navigate;
use crate::ops::{Mapping, Sequence};

impl Navigate for Value {
    #[inline]
    fn as_sequence(&self) -> Option<&dyn Sequence> {
        match self {
            Value::Array(array) => Some(array),
            _ => None,
        }
    }

    #[inline]
    fn as_mapping(&self) -> Option<&dyn Mapping> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    #[inline]
    fn as_text(&self) -> Option<&str> {
        self.as_str()
    }

    #[inline]
    fn as_nullable(&self) -> Option<Option<&dyn Navigate>> {
        match self {
            Value::Null => Some(None),
            _ => None,
        }
    }
}

impl Navigate for Map<String, Value> {
    #[inline]
    fn as_mapping(&self) -> Option<&dyn Mapping> {
        Some(self)
    }
}

impl Mapping for Map<String, Value> {
    #[inline]
    fn get(&self, key: &str) -> Option<&dyn Navigate> {
        Map::get(self, key).map(Navigate::as_navigate)
    }

    #[inline]
    fn len(&self) -> usize {
        Map::len(self)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{Navigate, Path};

    #[test]
    fn shapes_follow_the_variant() {
        let value = json!({ "list": [1, 2], "name": "kp", "none": null, "flag": true });

        assert!(value.as_mapping().is_some());
        assert!(value["list"].as_sequence().is_some());
        assert_eq!(value["name"].as_navigate().as_text(), Some("kp"));
        assert!(value["none"].as_navigate().is_null());
        assert!(value["flag"].as_mapping().is_none());
    }

    #[test]
    fn numeric_object_keys_are_keys() {
        let value = json!({ "0": "zero", "items": ["a", "b"] });

        let key = Path::capture(|v| Ok(v.item(0))).unwrap();
        let resolved = key.resolve(&value).unwrap();
        assert_eq!(resolved.as_str(), Some("zero"));

        let index = Path::capture(|v| Ok(v.item("items").item(1))).unwrap();
        let resolved = index.resolve(&value).unwrap();
        assert_eq!(resolved.as_str(), Some("b"));
    }

    #[test]
    fn null_member_stops_replay() {
        let value = json!({ "user": null });

        let path = Path::capture(|v| v.attr("user")?.attr("name")).unwrap();
        assert!(path.resolve(&value).is_err());
        assert_eq!(path.resolve_or(&value, &"N/A").as_str(), Some("N/A"));
    }
}
