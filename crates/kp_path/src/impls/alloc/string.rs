use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::String;

use crate::Navigate;

macro_rules! impl_navigate_text {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Navigate for $ty {
                #[inline]
                fn as_text(&self) -> Option<&str> {
                    Some(self.as_ref())
                }
            }
        )*
    };
}

impl_navigate_text!(String, Box<str>, Cow<'static, str>);
