use core::iter::FusedIterator;

use crate::Navigate;

/// A value with elements reachable by a non-negative index.
///
/// Implemented for `Vec<T>`, `VecDeque<T>`, arrays, tuples, tuple structs
/// and `#[navigate(positional)]` structs.
///
/// # Examples
///
/// ```
/// use kp_path::ops::Sequence;
///
/// let tuple = (1_u8, "two", 3.0_f32);
///
/// assert_eq!(Sequence::len(&tuple), 3);
/// assert!(Sequence::get(&tuple, 1).unwrap().is::<&str>());
/// assert!(Sequence::get(&tuple, 3).is_none());
/// ```
pub trait Sequence: Navigate {
    /// Returns the element at `index`, `None` if out of bounds.
    fn get(&self, index: usize) -> Option<&dyn Navigate>;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the sequence contains no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl dyn Sequence {
    /// Returns an iterator over the elements.
    #[inline]
    pub fn iter(&self) -> SequenceIter<'_> {
        SequenceIter {
            sequence: self,
            index: 0,
        }
    }
}

/// An iterator over the elements of a [`Sequence`].
pub struct SequenceIter<'a> {
    sequence: &'a dyn Sequence,
    index: usize,
}

impl<'a> Iterator for SequenceIter<'a> {
    type Item = &'a dyn Navigate;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.sequence.get(self.index)?;
        self.index += 1;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.sequence.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SequenceIter<'_> {}
impl FusedIterator for SequenceIter<'_> {}
