use alloc::borrow::Cow;
use alloc::string::String;

/// Strips module paths from a type name.
///
/// Used to keep error messages readable.
///
/// # Examples
///
/// ```
/// use kp_path::short_type_name;
///
/// assert_eq!(short_type_name("i32"), "i32");
/// assert_eq!(short_type_name("alloc::string::String"), "String");
/// assert_eq!(
///     short_type_name("alloc::vec::Vec<core::option::Option<alloc::string::String>>"),
///     "Vec<Option<String>>",
/// );
/// assert_eq!(short_type_name("(i32, my::Type)"), "(i32, Type)");
/// ```
pub fn short_type_name(full: &'static str) -> Cow<'static, str> {
    if !full.contains("::") {
        return Cow::Borrowed(full);
    }

    let mut result = String::with_capacity(full.len());
    let mut segment_start = 0;

    for (index, ch) in full.char_indices() {
        match ch {
            ':' => {
                // `a::b` -> drop `a::`
                if full[index..].starts_with("::") {
                    segment_start = index + 2;
                }
            }
            '<' | '>' | '(' | ')' | '[' | ']' | ',' | ' ' | ';' | '&' | '*' => {
                if segment_start <= index {
                    result.push_str(&full[segment_start..index]);
                }
                result.push(ch);
                segment_start = index + 1;
            }
            _ => {}
        }
    }
    if segment_start < full.len() {
        result.push_str(&full[segment_start..]);
    }

    Cow::Owned(result)
}

#[cfg(test)]
mod tests {
    use super::short_type_name;

    #[test]
    fn strips_nested_paths() {
        assert_eq!(
            short_type_name("hashbrown::map::HashMap<alloc::string::String, i32, foldhash::fast::FixedState>"),
            "HashMap<String, i32, FixedState>"
        );
        assert_eq!(short_type_name("[alloc::string::String; 3]"), "[String; 3]");
        assert_eq!(short_type_name("&str"), "&str");
    }
}
