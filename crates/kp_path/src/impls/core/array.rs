use crate::Navigate;
use crate::ops::Sequence;

impl<T: Navigate, const N: usize> Navigate for [T; N] {
    #[inline]
    fn as_sequence(&self) -> Option<&dyn Sequence> {
        Some(self)
    }
}

impl<T: Navigate, const N: usize> Sequence for [T; N] {
    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Navigate> {
        <[T]>::get(self, index).map(Navigate::as_navigate)
    }

    #[inline]
    fn len(&self) -> usize {
        N
    }
}
