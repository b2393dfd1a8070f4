//! Smart pointers are transparent: navigation continues on the pointee.

use alloc::boxed::Box;
use alloc::sync::Arc;

use crate::Navigate;

impl<T: Navigate> Navigate for Box<T> {
    #[inline]
    fn as_nullable(&self) -> Option<Option<&dyn Navigate>> {
        Some(Some(T::as_navigate(self)))
    }
}

impl<T: Navigate> Navigate for Arc<T> {
    #[inline]
    fn as_nullable(&self) -> Option<Option<&dyn Navigate>> {
        Some(Some(T::as_navigate(self)))
    }
}
