//! Equality between dynamic arrays, slices, arrays and vectors.
//!
//! Only the live elements take part; capacity, stale slots and the growth
//! policy are ignored.

use crate::array::DynArray;

macro_rules! impl_slice_eq {
    ([$($vars:tt)*] $lhs:ty, $rhs:ty) => {
        impl<T, U, $($vars)*> PartialEq<$rhs> for $lhs
        where
            T: PartialEq<U>,
        {
            #[inline]
            fn eq(&self, other: &$rhs) -> bool {
                self[..] == other[..]
            }
        }
    };
}

impl_slice_eq! { [] DynArray<T>, DynArray<U> }
impl_slice_eq! { [] DynArray<T>, [U] }
impl_slice_eq! { [] DynArray<T>, &[U] }
impl_slice_eq! { [] DynArray<T>, &mut [U] }
impl_slice_eq! { [] DynArray<T>, Vec<U> }
impl_slice_eq! { [] [T], DynArray<U> }
impl_slice_eq! { [] &[T], DynArray<U> }
impl_slice_eq! { [] Vec<T>, DynArray<U> }
impl_slice_eq! { [const N: usize] DynArray<T>, [U; N] }
impl_slice_eq! { [const N: usize] DynArray<T>, &[U; N] }

impl<T: Eq> Eq for DynArray<T> {}
