//! The two relations a [`PriorityQueue`] is parameterised by.
//!
//! [`PriorityQueue`]: crate::PriorityQueue

/// A strict priority relation over `T`.
///
/// `outranks(a, b)` answers whether `a` must leave the queue before `b`.  It
/// must behave as a strict weak order: irreflexive (`outranks(a, a)` is
/// `false`), asymmetric and transitive.  It is a logic error for the relation,
/// or the elements it inspects, to change in a way that alters the outcome for
/// elements already held by a queue, except through
/// [`PriorityQueue::for_each_mut`].  The behavior resulting from such a logic
/// error is not specified, but will be encapsulated to the queue that observed
/// it and not result in undefined behavior.
///
/// Every `Fn(&T, &T) -> bool` is a `Priority<T>`:
///
/// ```
/// use grove::Priority;
///
/// let shortest_first = |a: &&str, b: &&str| a.len() < b.len();
/// assert!(shortest_first.outranks(&"ab", &"abc"));
/// assert!(!shortest_first.outranks(&"abc", &"abc"));
/// ```
///
/// [`PriorityQueue::for_each_mut`]: crate::PriorityQueue::for_each_mut
pub trait Priority<T: ?Sized> {
    /// Returns `true` if `this` has strictly higher priority than `that`.
    fn outranks(&self, this: &T, that: &T) -> bool;
}

impl<T: ?Sized, F> Priority<T> for F
where
    F: ?Sized + Fn(&T, &T) -> bool,
{
    #[inline]
    fn outranks(&self, this: &T, that: &T) -> bool {
        self(this, that)
    }
}

/// An equality relation over `T`, used only to locate elements by value.
///
/// It is independent of the queue's [`Priority`]: two elements of equal rank
/// need not be equivalent, nor the other way around.
pub trait Equivalence<T: ?Sized> {
    /// Returns `true` if `this` and `that` denote the same value.
    fn equals(&self, this: &T, that: &T) -> bool;
}

impl<T: ?Sized, F> Equivalence<T> for F
where
    F: ?Sized + Fn(&T, &T) -> bool,
{
    #[inline]
    fn equals(&self, this: &T, that: &T) -> bool {
        self(this, that)
    }
}

/// The equality relation type a [`PriorityQueue`] holds unless told otherwise.
///
/// Plain functions and non-capturing closures coerce to it, so
/// [`PriorityQueue::set_equality_comparer`] accepts them directly.
///
/// [`PriorityQueue`]: crate::PriorityQueue
/// [`PriorityQueue::set_equality_comparer`]: crate::PriorityQueue::set_equality_comparer
pub type EqualityFn<T> = fn(&T, &T) -> bool;

#[cfg(test)]
mod tests {
    use super::*;

    fn rank<O: Priority<i32>>(order: &O, a: i32, b: i32) -> bool {
        order.outranks(&a, &b)
    }

    #[test]
    fn closures_are_priorities() {
        let min = |a: &i32, b: &i32| a < b;
        assert!(rank(&min, 1, 2));
        assert!(!rank(&min, 2, 1));
        assert!(!rank(&min, 2, 2));
    }

    #[test]
    fn fn_pointers_are_equivalences() {
        fn same_parity(a: &i32, b: &i32) -> bool {
            a % 2 == b % 2
        }
        let equals: EqualityFn<i32> = same_parity;
        assert!(equals.equals(&3, &7));
        assert!(!equals.equals(&3, &4));
    }

    #[test]
    fn trait_objects_are_priorities() {
        let max: &dyn Fn(&i32, &i32) -> bool = &|a, b| a > b;
        assert!(max.outranks(&5, &4));
    }
}
