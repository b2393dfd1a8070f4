use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::Navigate;
use crate::ops::Sequence;

impl<T: Navigate> Navigate for Vec<T> {
    #[inline]
    fn as_sequence(&self) -> Option<&dyn Sequence> {
        Some(self)
    }
}

impl<T: Navigate> Sequence for Vec<T> {
    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Navigate> {
        <[T]>::get(self, index).map(Navigate::as_navigate)
    }

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<T: Navigate> Navigate for VecDeque<T> {
    #[inline]
    fn as_sequence(&self) -> Option<&dyn Sequence> {
        Some(self)
    }
}

impl<T: Navigate> Sequence for VecDeque<T> {
    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Navigate> {
        VecDeque::get(self, index).map(Navigate::as_navigate)
    }

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::VecDeque;
    use alloc::vec;

    use crate::Navigate;

    #[test]
    fn bounds_checked_lookup() {
        let list = vec![10_i32, 20, 30];
        let sequence = list.as_sequence().unwrap();
        assert_eq!(sequence.get(2).unwrap().downcast_ref::<i32>(), Some(&30));
        assert!(sequence.get(3).is_none());

        let deque = VecDeque::from([1_u8, 2]);
        let sequence = deque.as_sequence().unwrap();
        assert_eq!(sequence.len(), 2);
        assert_eq!(sequence.get(1).unwrap().downcast_ref::<u8>(), Some(&2));
    }
}
