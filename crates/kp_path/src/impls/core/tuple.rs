//! Tuples with a field count of 12 or less are sequences.

use crate::Navigate;
use crate::ops::Sequence;

macro_rules! impl_navigate_tuple {
    ($len:literal: [$($index:tt: $name:ident),*]) => {
        impl<$($name: Navigate),*> Navigate for ($($name,)*) {
            #[inline]
            fn as_sequence(&self) -> Option<&dyn Sequence> {
                Some(self)
            }
        }

        impl<$($name: Navigate),*> Sequence for ($($name,)*) {
            fn get(&self, index: usize) -> Option<&dyn Navigate> {
                match index {
                    $( $index => Some(self.$index.as_navigate()), )*
                    _ => None,
                }
            }

            #[inline]
            fn len(&self) -> usize {
                $len
            }
        }
    };
}

impl_navigate_tuple!(1: [0: P0]);
impl_navigate_tuple!(2: [0: P0, 1: P1]);
impl_navigate_tuple!(3: [0: P0, 1: P1, 2: P2]);
impl_navigate_tuple!(4: [0: P0, 1: P1, 2: P2, 3: P3]);
impl_navigate_tuple!(5: [0: P0, 1: P1, 2: P2, 3: P3, 4: P4]);
impl_navigate_tuple!(6: [0: P0, 1: P1, 2: P2, 3: P3, 4: P4, 5: P5]);
impl_navigate_tuple!(7: [0: P0, 1: P1, 2: P2, 3: P3, 4: P4, 5: P5, 6: P6]);
impl_navigate_tuple!(8: [0: P0, 1: P1, 2: P2, 3: P3, 4: P4, 5: P5, 6: P6, 7: P7]);
impl_navigate_tuple!(9: [0: P0, 1: P1, 2: P2, 3: P3, 4: P4, 5: P5, 6: P6, 7: P7, 8: P8]);
impl_navigate_tuple!(10: [0: P0, 1: P1, 2: P2, 3: P3, 4: P4, 5: P5, 6: P6, 7: P7, 8: P8, 9: P9]);
impl_navigate_tuple!(11: [0: P0, 1: P1, 2: P2, 3: P3, 4: P4, 5: P5, 6: P6, 7: P7, 8: P8, 9: P9, 10: P10]);
impl_navigate_tuple!(12: [0: P0, 1: P1, 2: P2, 3: P3, 4: P4, 5: P5, 6: P6, 7: P7, 8: P8, 9: P9, 10: P10, 11: P11]);

#[cfg(test)]
mod tests {
    use crate::Navigate;

    #[test]
    fn tuple_elements_by_index() {
        let tuple = (1_u8, "two", 3_i64);
        let sequence = tuple.as_sequence().unwrap();

        assert_eq!(sequence.len(), 3);
        assert_eq!(sequence.get(0).unwrap().downcast_ref::<u8>(), Some(&1));
        assert_eq!(sequence.get(1).unwrap().as_text(), Some("two"));
        assert!(sequence.get(3).is_none());
        assert_eq!(sequence.iter().count(), 3);
    }
}
