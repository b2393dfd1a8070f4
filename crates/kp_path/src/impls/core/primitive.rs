use crate::Navigate;

macro_rules! impl_navigate_opaque {
    ($($ty:ty),* $(,)?) => {
        $( impl Navigate for $ty {} )*
    };
}

impl_navigate_opaque!(
    bool, char, (),
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64,
);

impl_navigate_opaque!(
    ::core::num::NonZeroI8,
    ::core::num::NonZeroI16,
    ::core::num::NonZeroI32,
    ::core::num::NonZeroI64,
    ::core::num::NonZeroI128,
    ::core::num::NonZeroIsize,
    ::core::num::NonZeroU8,
    ::core::num::NonZeroU16,
    ::core::num::NonZeroU32,
    ::core::num::NonZeroU64,
    ::core::num::NonZeroU128,
    ::core::num::NonZeroUsize,
    ::core::time::Duration,
);

impl Navigate for &'static str {
    #[inline]
    fn as_text(&self) -> Option<&str> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::Navigate;

    #[test]
    fn primitives_are_opaque() {
        let value: &dyn Navigate = &1_u64;
        assert!(value.as_record().is_none());
        assert!(value.as_sequence().is_none());
        assert!(value.as_mapping().is_none());
        assert!(value.as_text().is_none());
        assert!(value.as_nullable().is_none());
        assert_eq!(value.type_name(), "u64");
    }

    #[test]
    fn static_str_is_text() {
        let value: &dyn Navigate = &"hello";
        assert_eq!(value.as_text(), Some("hello"));
        assert!(value.is::<&str>());
    }
}
