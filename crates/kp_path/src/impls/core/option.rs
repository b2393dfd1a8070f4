use crate::Navigate;

impl<T: Navigate> Navigate for Option<T> {
    #[inline]
    fn as_nullable(&self) -> Option<Option<&dyn Navigate>> {
        Some(self.as_ref().map(Navigate::as_navigate))
    }
}

#[cfg(test)]
mod tests {
    use crate::Navigate;

    #[test]
    fn none_is_null() {
        let none: Option<i32> = None;
        let value: &dyn Navigate = &none;
        assert!(value.is_null());
        assert!(value.unwrap_nullable().is_none());
    }

    #[test]
    fn nested_some_unwraps() {
        let some = Some(Some(5_i32));
        let value: &dyn Navigate = &some;
        assert!(!value.is_null());

        let inner = value.unwrap_nullable().unwrap();
        assert_eq!(inner.downcast_ref::<i32>(), Some(&5));
    }
}
