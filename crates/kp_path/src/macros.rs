/// Captures a [`Path`](crate::Path) from field and index syntax.
///
/// Expands to a [`Path::capture`](crate::Path::capture) call, so the result is a
/// `Result<Path, CaptureError>`.
///
/// - `name` / `.name`: a field, recorded with [`Recorder::attr`](crate::Recorder::attr).
/// - `.0`: a tuple index, recorded with [`Recorder::item`](crate::Recorder::item).
/// - `[expr]`: an index or key, any `Display` value, recorded with `Recorder::item`.
///
/// Nested tuple indices such as `.0.1` are lexed as one float, write `[0][1]` instead.
///
/// # Examples
///
/// ```
/// use kp_path::keypath;
///
/// let path = keypath!(users[0].name).unwrap();
/// assert_eq!(path.to_dot(), "users.0.name");
///
/// let key = "display name";
/// let path = keypath!(profiles[key].pair.1).unwrap();
/// assert_eq!(path.parts(), ["profiles", "display name", "pair", "1"]);
///
/// let path = keypath!([2]["k"]).unwrap();
/// assert_eq!(path.to_bracket(), "['2']['k']");
///
/// assert!(keypath!().unwrap().is_identity());
/// ```
///
/// Reserved names are rejected:
///
/// ```
/// # use kp_path::keypath;
/// assert!(keypath!(__class__).is_err());
/// ```
#[macro_export]
macro_rules! keypath {
    () => {
        $crate::Path::capture(|root: $crate::Recorder| {
            ::core::result::Result::Ok::<_, $crate::capture::RecordError>(root)
        })
    };
    ($($steps:tt)+) => {
        $crate::Path::capture(|root: $crate::Recorder| {
            ::core::result::Result::Ok::<_, $crate::capture::RecordError>(
                $crate::__keypath_step!(root; $($steps)+)
            )
        })
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __keypath_step {
    ($acc:expr;) => {
        $acc
    };
    ($acc:expr; . $name:ident $($rest:tt)*) => {
        $crate::__keypath_step!($acc.attr(::core::stringify!($name))?; $($rest)*)
    };
    ($acc:expr; . $index:literal $($rest:tt)*) => {
        $crate::__keypath_step!($acc.item($index); $($rest)*)
    };
    ($acc:expr; [$key:expr] $($rest:tt)*) => {
        $crate::__keypath_step!($acc.item($key); $($rest)*)
    };
    ($acc:expr; $name:ident $($rest:tt)*) => {
        $crate::__keypath_step!($acc.attr(::core::stringify!($name))?; $($rest)*)
    };
}

#[cfg(test)]
mod tests {
    use crate::Path;

    #[test]
    fn macro_matches_explicit_capture() {
        let explicit = Path::capture(|r| Ok(r.attr("a")?.item(0).item("k").attr("b")?)).unwrap();
        assert_eq!(keypath!(a[0]["k"].b).unwrap(), explicit);
        assert_eq!(keypath!(a.0["k"].b).unwrap(), explicit);
    }

    #[test]
    fn keys_can_be_expressions() {
        let index = 2_usize;
        let path = keypath!(list[index + 1]).unwrap();
        assert_eq!(path, "list.3");
    }
}
