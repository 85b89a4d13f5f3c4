//! Stock relations that make a [`PriorityQueue`] behave like the standard library's
//! [`BinaryHeap`], namely ordering by the [`Ord`] trait and searching by [`PartialEq`].
//!
//! [`PriorityQueue`]: crate::PriorityQueue
//! [`BinaryHeap`]: alloc::collections::BinaryHeap

use crate::Priority;
use core::marker::PhantomData;

macro_rules! ord_priority {
    ($(#[$attrs:meta])* $name:ident, $op:tt) => {
        $(#[$attrs])*
        pub struct $name<T: ?Sized + Ord>(PhantomData<fn(&T)>);

        impl<T: ?Sized + Ord> $name<T> {
            /// Creates the (zero-sized) relation.
            #[must_use]
            pub const fn new() -> Self {
                Self(PhantomData)
            }
        }

        impl<T: ?Sized + Ord> Default for $name<T> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<T: ?Sized + Ord> Clone for $name<T> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<T: ?Sized + Ord> Copy for $name<T> {}

        impl<T: ?Sized + Ord> core::fmt::Debug for $name<T> {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(stringify!($name))
            }
        }

        impl<T: ?Sized + Ord> Priority<T> for $name<T> {
            #[inline]
            fn outranks(&self, this: &T, that: &T) -> bool {
                this $op that
            }
        }
    };
}

ord_priority! {
    /// A zero-sized priority that delegates to `T`'s [`Ord`] implementation, greatest
    /// element first (a max-heap).
    ///
    /// ```
    /// use grove::{default::MaxFirst, PriorityQueue};
    ///
    /// let mut heap = PriorityQueue::from_vec(vec![3, 1, 4, 1, 5], MaxFirst::new());
    /// assert_eq!(heap.dequeue(), 5);
    /// ```
    MaxFirst, >
}

ord_priority! {
    /// A zero-sized priority that delegates to `T`'s [`Ord`] implementation, least
    /// element first (a min-heap).
    ///
    /// ```
    /// use grove::{default::MinFirst, PriorityQueue};
    ///
    /// let mut heap = PriorityQueue::from_vec(vec![3, 1, 4, 1, 5], MinFirst::new());
    /// assert_eq!(heap.dequeue(), 1);
    /// ```
    MinFirst, <
}

/// Inverts another priority: whatever `O` dequeues last, `Reversed<O>` dequeues
/// first.
#[derive(Clone, Copy, Debug, Default)]
pub struct Reversed<O>(pub O);

impl<T: ?Sized, O: Priority<T>> Priority<T> for Reversed<O> {
    #[inline]
    fn outranks(&self, this: &T, that: &T) -> bool {
        self.0.outranks(that, this)
    }
}

/// Equality by [`PartialEq`], suitable for
/// [`PriorityQueue::set_equality_comparer`].
///
/// [`PriorityQueue::set_equality_comparer`]: crate::PriorityQueue::set_equality_comparer
#[inline]
pub fn default_equals<T: ?Sized + PartialEq>(this: &T, that: &T) -> bool {
    this == that
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EqualityFn, Equivalence};

    #[test]
    fn ord_priorities_are_strict() {
        assert!(MaxFirst::new().outranks(&2, &1));
        assert!(!MaxFirst::new().outranks(&1, &1));
        assert!(MinFirst::new().outranks(&1, &2));
        assert!(!MinFirst::new().outranks(&2, &2));
    }

    #[test]
    fn reversed_flips_arguments() {
        let order = Reversed(MinFirst::<str>::new());
        assert!(order.outranks("b", "a"));
        assert!(!order.outranks("a", "a"));
    }

    #[test]
    fn default_equals_coerces_to_equality_fn() {
        let equals: EqualityFn<u8> = default_equals;
        assert!(equals.equals(&4, &4));
        assert!(!equals.equals(&4, &5));
    }
}
