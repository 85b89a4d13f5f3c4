//! A priority queue implemented with a binary heap.
//!
//! Which element leaves first is decided by a [`Priority`] relation supplied at
//! construction, so the same type can serve as a max-heap, a min-heap, or any
//! other order (by deadline, by cost, by a field of a struct...).
//!
//! Insertion and removal of the highest-priority element have *O*(log(*n*)) time
//! complexity.  Checking the highest-priority element is *O*(1).  Building a queue
//! from an existing sequence takes *O*(*n*).  Searching or removing by value uses a
//! separate [`Equivalence`] relation and takes *O*(*n*).
//!
//! # Examples
//!
//! Dijkstra's shortest path over a small directed graph, with the queue ordered by
//! lowest cost first:
//!
//! ```
//! use grove::PriorityQueue;
//!
//! #[derive(Copy, Clone)]
//! struct State {
//!     cost: usize,
//!     position: usize,
//! }
//!
//! struct Edge {
//!     node: usize,
//!     cost: usize,
//! }
//!
//! fn shortest_path(adj_list: &[Vec<Edge>], start: usize, goal: usize) -> Option<usize> {
//!     let mut dist: Vec<_> = (0..adj_list.len()).map(|_| usize::MAX).collect();
//!     let mut frontier = PriorityQueue::new(|a: &State, b: &State| a.cost < b.cost);
//!
//!     dist[start] = 0;
//!     frontier.enqueue(State { cost: 0, position: start });
//!
//!     while let Some(State { cost, position }) = frontier.pop() {
//!         if position == goal {
//!             return Some(cost);
//!         }
//!         if cost > dist[position] {
//!             continue;
//!         }
//!         for edge in &adj_list[position] {
//!             let next = State { cost: cost + edge.cost, position: edge.node };
//!             if next.cost < dist[next.position] {
//!                 frontier.enqueue(next);
//!                 dist[next.position] = next.cost;
//!             }
//!         }
//!     }
//!
//!     None
//! }
//!
//! let graph = vec![
//!     vec![Edge { node: 2, cost: 10 }, Edge { node: 1, cost: 1 }],
//!     vec![Edge { node: 3, cost: 2 }],
//!     vec![Edge { node: 1, cost: 1 }, Edge { node: 3, cost: 3 }, Edge { node: 4, cost: 1 }],
//!     vec![Edge { node: 0, cost: 7 }, Edge { node: 4, cost: 2 }],
//!     vec![],
//! ];
//!
//! assert_eq!(shortest_path(&graph, 0, 1), Some(1));
//! assert_eq!(shortest_path(&graph, 0, 3), Some(3));
//! assert_eq!(shortest_path(&graph, 3, 0), Some(7));
//! assert_eq!(shortest_path(&graph, 0, 4), Some(5));
//! assert_eq!(shortest_path(&graph, 4, 0), None);
//! ```

use core::fmt;
#[cfg(feature = "trusted_len")]
use core::iter::TrustedLen;
use core::iter::{FromIterator, FusedIterator};
use core::mem::swap;

use alloc::slice;
use alloc::vec::{self, Vec};

use crate::collection::{Collection, Container, Queue};
use crate::error::{Operation, QueueError};
use crate::heap;
use crate::order::{EqualityFn, Equivalence, Priority};


/// A priority queue implemented with a binary heap.
///
/// `O` decides priority: [`Priority::outranks`]`(a, b)` means `a` leaves the queue
/// before `b`.  `E` is the optional equality relation used by [`remove`],
/// [`take`] and [`contains`]; it defaults to a plain function pointer and may be
/// installed at any time with [`set_equality_comparer`].
///
/// It is a logic error for an element to be modified in such a way that its
/// priority relative to any other element changes while it is in the queue,
/// except through [`for_each_mut`], which re-establishes heap order afterwards.
/// This is normally only possible through [`Cell`], [`RefCell`], global state,
/// I/O, or unsafe code.  The behavior resulting from such a logic error is not
/// specified, but will be encapsulated to the `PriorityQueue` that observed the
/// logic error and not result in undefined behavior.
///
/// # Examples
///
/// ```
/// use grove::{default::MinFirst, PriorityQueue};
///
/// let mut heap = PriorityQueue::new(MinFirst::new());
///
/// heap.enqueue(5);
/// heap.enqueue(1);
/// heap.enqueue(2);
///
/// // The highest-priority element, here the least one, is at the front.
/// assert_eq!(heap.peek(), &1);
/// assert_eq!(heap.len(), 3);
///
/// // Iteration visits the elements in an arbitrary order.
/// for x in &heap {
///     println!("{x}");
/// }
///
/// // Dequeueing returns them in priority order.
/// assert_eq!(heap.dequeue(), 1);
/// assert_eq!(heap.dequeue(), 2);
/// assert_eq!(heap.dequeue(), 5);
/// assert_eq!(heap.pop(), None);
/// ```
///
/// # Time complexity
///
/// | [enqueue] | [dequeue]     | [peek] | [remove] / [contains] | [heapify] / [for_each_mut] |
/// |-----------|---------------|--------|-----------------------|----------------------------|
/// | *O*(1)~   | *O*(log(*n*)) | *O*(1) | *O*(*n*)              | *O*(*n*)                   |
///
/// The value for `enqueue` is an expected cost; the method documentation gives a
/// more detailed analysis.
///
/// [`remove`]: Self::remove
/// [`take`]: Self::take
/// [`contains`]: Self::contains
/// [`set_equality_comparer`]: Self::set_equality_comparer
/// [`for_each_mut`]: Self::for_each_mut
/// [`Cell`]: core::cell::Cell
/// [`RefCell`]: core::cell::RefCell
/// [enqueue]: Self::enqueue
/// [dequeue]: Self::dequeue
/// [peek]: Self::peek
/// [remove]: Self::remove
/// [contains]: Self::contains
/// [heapify]: Self::heapify
/// [for_each_mut]: Self::for_each_mut
pub struct PriorityQueue<T, O, E = EqualityFn<T>> {
    data: Vec<T>,
    order: O,
    equality: Option<E>,
}

impl<T: Clone, O: Clone, E: Clone> Clone for PriorityQueue<T, O, E> {
    fn clone(&self) -> Self {
        PriorityQueue {
            data: self.data.clone(),
            order: self.order.clone(),
            equality: self.equality.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.data.clone_from(&source.data);
        self.order = source.order.clone();
        self.equality = source.equality.clone();
    }
}

impl<T, O: Default, E> Default for PriorityQueue<T, O, E> {
    /// Creates an empty `PriorityQueue` without an equality comparer.
    #[inline]
    fn default() -> Self {
        PriorityQueue { data: Vec::new(), order: O::default(), equality: None }
    }
}

impl<T: fmt::Debug, O, E> fmt::Debug for PriorityQueue<T, O, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, O> PriorityQueue<T, O> {
    /// Creates an empty `PriorityQueue` ordered by `order`.
    ///
    /// No storage is allocated until the first element is enqueued.
    ///
    /// # Examples
    ///
    /// ```
    /// use grove::PriorityQueue;
    ///
    /// let mut heap = PriorityQueue::new(|a: &i32, b: &i32| a > b);
    /// heap.enqueue(4);
    /// ```
    #[must_use]
    pub fn new(order: O) -> Self {
        PriorityQueue { data: Vec::new(), order, equality: None }
    }

    /// Creates an empty `PriorityQueue` able to hold at least `capacity` elements
    /// without reallocating.
    ///
    /// # Examples
    ///
    /// ```
    /// use grove::{default::MaxFirst, PriorityQueue};
    ///
    /// let mut heap = PriorityQueue::with_capacity(MaxFirst::new(), 10);
    /// assert!(heap.capacity() >= 10);
    /// heap.enqueue(4);
    /// ```
    #[must_use]
    pub fn with_capacity(order: O, capacity: usize) -> Self {
        PriorityQueue { data: Vec::with_capacity(capacity), order, equality: None }
    }
}

impl<T, O: Priority<T>> PriorityQueue<T, O> {
    /// Builds a `PriorityQueue` from a copy of `elements`.
    ///
    /// The slice is cloned into freshly allocated storage of exactly
    /// `elements.len()` slots, which is then put into heap order bottom-up in
    /// *O*(*n*).
    ///
    /// # Examples
    ///
    /// ```
    /// use grove::{default::MinFirst, PriorityQueue};
    ///
    /// let source = [14, 16, 5, 23, 7, 10];
    /// let heap = PriorityQueue::heapify(&source, MinFirst::new());
    ///
    /// assert_eq!(heap.into_sorted_vec(), [5, 7, 10, 14, 16, 23]);
    /// ```
    #[must_use]
    pub fn heapify(elements: &[T], order: O) -> Self
    where
        T: Clone,
    {
        Self::from_vec(elements.to_vec(), order)
    }

    /// Builds a `PriorityQueue` in place from `vec`, in *O*(*n*).
    ///
    /// # Examples
    ///
    /// ```
    /// use grove::{default::MaxFirst, PriorityQueue};
    ///
    /// let mut heap = PriorityQueue::from_vec(vec![1, 5, 2], MaxFirst::new());
    /// assert_eq!(heap.dequeue(), 5);
    /// ```
    #[must_use]
    pub fn from_vec(vec: Vec<T>, order: O) -> Self {
        let mut queue = PriorityQueue { data: vec, order, equality: None };
        heap::rebuild(&mut queue.data, &queue.order);
        queue
    }
}

impl<T, O, E> PriorityQueue<T, O, E> {
    /// Returns the number of elements in the queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use grove::{default::MaxFirst, PriorityQueue};
    ///
    /// let heap = PriorityQueue::from_vec(vec![1, 3], MaxFirst::new());
    /// assert_eq!(heap.len(), 2);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Checks if the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of elements the queue can hold without reallocating.
    ///
    /// This is never less than [`len`](Self::len), and is left untouched by
    /// [`dequeue`](Self::dequeue), [`remove`](Self::remove) and
    /// [`clear`](Self::clear).
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves capacity for at least `additional` elements more than the current
    /// length.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity overflows [`usize`].
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Reserves the minimum capacity for at least `additional` elements more than
    /// the current length, without deliberately over-allocating.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity overflows [`usize`].
    pub fn reserve_exact(&mut self, additional: usize) {
        self.data.reserve_exact(additional);
    }

    /// Discards as much additional capacity as possible.
    ///
    /// # Examples
    ///
    /// ```
    /// use grove::{default::MaxFirst, PriorityQueue};
    ///
    /// let mut heap: PriorityQueue<i32, _> = PriorityQueue::with_capacity(MaxFirst::<i32>::new(), 100);
    /// assert!(heap.capacity() >= 100);
    /// heap.shrink_to_fit();
    /// assert!(heap.capacity() == 0);
    /// ```
    pub fn shrink_to_fit(&mut self) {
        self.data.shrink_to_fit();
    }

    /// Returns the highest-priority element without removing it.
    ///
    /// # Errors
    ///
    /// Returns an error of kind [`Empty`](crate::QueueErrorKind::Empty) if the
    /// queue is empty.
    pub fn try_peek(&self) -> Result<&T, QueueError> {
        self.data.first().ok_or(QueueError::empty(Operation::Peek))
    }

    /// Returns the highest-priority element without removing it.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use grove::{default::MinFirst, PriorityQueue};
    ///
    /// let mut heap = PriorityQueue::new(MinFirst::new());
    /// heap.enqueue(16);
    /// heap.enqueue(14);
    ///
    /// assert_eq!(heap.peek(), &14);
    /// assert_eq!(heap.len(), 2);
    /// ```
    ///
    /// # Time complexity
    ///
    /// Cost is *O*(1) in the worst case.
    #[must_use]
    #[track_caller]
    pub fn peek(&self) -> &T {
        match self.try_peek() {
            Ok(top) => top,
            Err(err) => panic!("{err}"),
        }
    }

    /// Returns an iterator visiting all elements in storage (arbitrary) order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { iter: self.data.iter() }
    }

    /// Consumes the queue and returns its storage, in arbitrary order.
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_vec(self) -> Vec<T> {
        self.into()
    }

    /// Removes every element, returning them in arbitrary order.  The backing
    /// storage is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use grove::{default::MaxFirst, PriorityQueue};
    ///
    /// let mut heap = PriorityQueue::from_vec(vec![1, 3], MaxFirst::new());
    /// let mut drained: Vec<_> = heap.drain().collect();
    /// drained.sort();
    ///
    /// assert_eq!(drained, [1, 3]);
    /// assert!(heap.is_empty());
    /// ```
    #[inline]
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain { iter: self.data.drain(..) }
    }

    /// Empties the queue.
    ///
    /// Only the logical length is reset: the backing storage is kept, so refilling
    /// the queue up to its previous size does not reallocate.  Later enqueues
    /// behave exactly as on a fresh queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use grove::{default::MinFirst, PriorityQueue};
    ///
    /// let mut heap = PriorityQueue::from_vec(vec![16, 14, 23], MinFirst::new());
    /// let capacity = heap.capacity();
    ///
    /// heap.clear();
    /// assert!(heap.is_empty());
    /// assert_eq!(heap.capacity(), capacity);
    /// ```
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Borrows the priority relation.
    pub fn order(&self) -> &O {
        &self.order
    }

    /// Borrows the equality relation, if one has been set.
    pub fn equality_comparer(&self) -> Option<&E> {
        self.equality.as_ref()
    }

    /// Installs the equality relation used by [`remove`](Self::remove),
    /// [`take`](Self::take) and [`contains`](Self::contains), replacing any
    /// previous one.
    ///
    /// # Examples
    ///
    /// ```
    /// use grove::{default::{default_equals, MinFirst}, PriorityQueue};
    ///
    /// let mut heap = PriorityQueue::from_vec(vec![16, 14, 23], MinFirst::new());
    /// assert!(heap.try_contains(&14).is_err());
    ///
    /// heap.set_equality_comparer(default_equals);
    /// assert!(heap.contains(&14));
    /// ```
    pub fn set_equality_comparer(&mut self, equals: E) {
        self.equality = Some(equals);
    }

    /// Removes the equality relation, returning it.
    pub fn clear_equality_comparer(&mut self) -> Option<E> {
        self.equality.take()
    }

    /// Converts the queue into one whose equality relation is `equals`, which may
    /// be of any type (a capturing closure, for instance).
    ///
    /// # Examples
    ///
    /// ```
    /// use grove::{default::MaxFirst, PriorityQueue};
    ///
    /// let tolerance = 2;
    /// let mut heap = PriorityQueue::from_vec(vec![10, 20, 30], MaxFirst::new())
    ///     .with_equality(move |a: &i32, b: &i32| (a - b).abs() <= tolerance);
    ///
    /// assert!(heap.remove(&21));
    /// assert_eq!(heap.into_sorted_vec(), [30, 10]);
    /// ```
    #[must_use]
    pub fn with_equality<F>(self, equals: F) -> PriorityQueue<T, O, F> {
        PriorityQueue { data: self.data, order: self.order, equality: Some(equals) }
    }
}

impl<T, O: Priority<T>, E> PriorityQueue<T, O, E> {
    /// Pushes an element onto the queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use grove::{default::MaxFirst, PriorityQueue};
    ///
    /// let mut heap = PriorityQueue::new(MaxFirst::new());
    /// heap.enqueue(3);
    /// heap.enqueue(5);
    /// heap.enqueue(1);
    ///
    /// assert_eq!(heap.len(), 3);
    /// assert_eq!(heap.peek(), &5);
    /// ```
    ///
    /// # Time complexity
    ///
    /// The expected cost of `enqueue`, averaged over every possible ordering of
    /// the elements being pushed, and over a sufficiently large number of
    /// pushes, is *O*(1).  The time complexity degrades if elements are pushed in
    /// predominantly ascending priority; in the worst case the amortized cost per
    /// push is *O*(log(*n*)).
    ///
    /// The worst case cost of a *single* call is *O*(*n*), when capacity is
    /// exhausted and the storage is reallocated.
    pub fn enqueue(&mut self, element: T) {
        let old_len = self.len();
        self.data.push(element);
        // SAFETY: Since we pushed a new element it means that
        //  old_len = self.len() - 1 < self.len()
        unsafe { heap::sift_up(&mut self.data, 0, old_len, &self.order) };
    }

    /// Enqueues `element`.  Always returns `true`.
    pub fn add(&mut self, element: T) -> bool {
        self.enqueue(element);
        true
    }

    /// Removes the highest-priority element and returns it, or `None` if the queue
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use grove::{default::MaxFirst, PriorityQueue};
    ///
    /// let mut heap = PriorityQueue::from_vec(vec![1, 3], MaxFirst::new());
    ///
    /// assert_eq!(heap.pop(), Some(3));
    /// assert_eq!(heap.pop(), Some(1));
    /// assert_eq!(heap.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        let mut item = self.data.pop()?;
        if !self.is_empty() {
            swap(&mut item, &mut self.data[0]);
            let len = self.len();
            // SAFETY: !self.is_empty() means that self.len() > 0
            unsafe { heap::sift_down_range(&mut self.data, 0, len, &self.order) };
        }
        Some(item)
    }

    /// Removes the highest-priority element and returns it.
    ///
    /// # Errors
    ///
    /// Returns an error of kind [`Empty`](crate::QueueErrorKind::Empty), leaving
    /// the queue untouched, if the queue is empty.
    pub fn try_dequeue(&mut self) -> Result<T, QueueError> {
        self.pop().ok_or(QueueError::empty(Operation::Dequeue))
    }

    /// Removes the highest-priority element and returns it.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty.
    ///
    /// # Time complexity
    ///
    /// The worst case cost of `dequeue` on a queue containing *n* elements is
    /// *O*(log(*n*)).
    #[track_caller]
    pub fn dequeue(&mut self) -> T {
        match self.try_dequeue() {
            Ok(top) => top,
            Err(err) => panic!("{err}"),
        }
    }

    /// Calls `f` on every element, in storage order, then restores heap order.
    ///
    /// This is the one sanctioned way to change the priority of elements already
    /// in the queue.  Heap order is restored even if `f` panics part-way.
    ///
    /// # Examples
    ///
    /// ```
    /// use grove::{default::MinFirst, PriorityQueue};
    ///
    /// let mut heap = PriorityQueue::from_vec(vec![14, 16, 23, 7, 5, 10], MinFirst::new());
    /// heap.for_each_mut(|v| *v = -*v);
    ///
    /// assert_eq!(heap.into_sorted_vec(), [-23, -16, -14, -10, -7, -5]);
    /// ```
    ///
    /// # Time complexity
    ///
    /// *O*(*n*) plus the cost of `n` calls to `f`.
    pub fn for_each_mut<F>(&mut self, f: F)
    where
        F: FnMut(&mut T),
    {
        struct RebuildOnDrop<'a, T, O: Priority<T>> {
            data: &'a mut Vec<T>,
            order: &'a O,
        }

        impl<T, O: Priority<T>> Drop for RebuildOnDrop<'_, T, O> {
            fn drop(&mut self) {
                heap::rebuild(&mut self.data[..], self.order);
            }
        }

        let guard = RebuildOnDrop { data: &mut self.data, order: &self.order };
        guard.data.iter_mut().for_each(f);
    }

    /// Moves all the elements of `other` into `self`, leaving `other` empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use grove::{default::MaxFirst, PriorityQueue};
    ///
    /// let mut a = PriorityQueue::from_vec(vec![-10, 1, 2, 3, 3], MaxFirst::new());
    /// let mut b = PriorityQueue::from_vec(vec![-20, 5, 43], MaxFirst::new());
    ///
    /// a.append(&mut b);
    ///
    /// assert_eq!(a.into_sorted_vec(), [43, 5, 3, 3, 2, 1, -10, -20]);
    /// assert!(b.is_empty());
    /// ```
    pub fn append(&mut self, other: &mut Self) {
        let start = self.data.len();
        self.data.append(&mut other.data);
        heap::rebuild_tail(&mut self.data, start, &self.order);
    }

    /// Consumes the queue and returns its elements in dequeue order, highest
    /// priority first.  Sorting happens in place, in *O*(*n* \* log(*n*)).
    ///
    /// # Examples
    ///
    /// ```
    /// use grove::{default::MaxFirst, PriorityQueue};
    ///
    /// let mut heap = PriorityQueue::from_vec(vec![1, 2, 4, 5, 7], MaxFirst::new());
    /// heap.enqueue(6);
    /// heap.enqueue(3);
    ///
    /// assert_eq!(heap.into_sorted_vec(), [7, 6, 5, 4, 3, 2, 1]);
    /// ```
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut end = self.len();
        while end > 1 {
            end -= 1;
            self.data.swap(0, end);
            // SAFETY: `end` goes from `self.len() - 1` to 1 (both included) so:
            //  0 < 1 <= end <= self.len() - 1 < self.len()
            unsafe { heap::sift_down_range(&mut self.data, 0, end, &self.order) };
        }
        // The loop leaves the lowest priority at the front.
        self.data.reverse();
        self.into_vec()
    }

    /// Returns an iterator that dequeues every element, highest priority first.
    /// Elements the iterator does not reach are dropped with it, in arbitrary
    /// order.
    ///
    /// # Examples
    ///
    /// ```
    /// use grove::{default::MaxFirst, PriorityQueue};
    ///
    /// let mut heap = PriorityQueue::from_vec(vec![1, 2, 3, 4, 5], MaxFirst::new());
    /// assert_eq!(heap.drain_sorted().take(2).collect::<Vec<_>>(), [5, 4]);
    /// assert!(heap.is_empty());
    /// ```
    #[inline]
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T, O, E> {
        DrainSorted { inner: self }
    }

    /// Consumes the queue, returning an iterator that yields its elements highest
    /// priority first.
    ///
    /// # Examples
    ///
    /// ```
    /// use grove::{default::MinFirst, PriorityQueue};
    ///
    /// let heap = PriorityQueue::from_vec(vec![3, 1, 2], MinFirst::new());
    /// assert_eq!(heap.into_iter_sorted().collect::<Vec<_>>(), [1, 2, 3]);
    /// ```
    pub fn into_iter_sorted(self) -> IntoIterSorted<T, O, E> {
        IntoIterSorted { inner: self }
    }

    fn remove_at(&mut self, index: usize) -> T {
        let removed = self.data.swap_remove(index);
        let len = self.len();
        if index < len {
            // SAFETY: index < len
            let pos = unsafe { heap::sift_down_range(&mut self.data, index, len, &self.order) };
            if pos == index {
                // The element brought in from the end may outrank its new parent.
                // SAFETY: index < len
                unsafe { heap::sift_up(&mut self.data, 0, index, &self.order) };
            }
        }
        removed
    }
}

impl<T, O, E: Equivalence<T>> PriorityQueue<T, O, E> {
    fn position(&self, element: &T, operation: Operation) -> Result<Option<usize>, QueueError> {
        let equals = self.equality.as_ref().ok_or(QueueError::equality_not_set(operation))?;
        Ok(self.data.iter().position(|e| equals.equals(e, element)))
    }

    /// Checks whether an element equal to `element` is present.
    ///
    /// # Errors
    ///
    /// Returns an error of kind
    /// [`EqualityNotSet`](crate::QueueErrorKind::EqualityNotSet) if no
    /// equality comparer has been set.
    pub fn try_contains(&self, element: &T) -> Result<bool, QueueError> {
        Ok(self.position(element, Operation::Contains)?.is_some())
    }

    /// Checks whether an element equal to `element` is present, in *O*(*n*).
    ///
    /// # Panics
    ///
    /// Panics if no equality comparer has been set.
    #[must_use]
    #[track_caller]
    pub fn contains(&self, element: &T) -> bool {
        match self.try_contains(element) {
            Ok(found) => found,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T, O: Priority<T>, E: Equivalence<T>> PriorityQueue<T, O, E> {
    /// Removes the first element (in storage order) equal to `element` and returns
    /// it, or `None` if there is none.
    ///
    /// # Errors
    ///
    /// Returns an error of kind
    /// [`EqualityNotSet`](crate::QueueErrorKind::EqualityNotSet) if no
    /// equality comparer has been set.
    pub fn try_take(&mut self, element: &T) -> Result<Option<T>, QueueError> {
        Ok(self.position(element, Operation::Remove)?.map(|index| self.remove_at(index)))
    }

    /// Removes the first element (in storage order) equal to `element` and returns
    /// it, or `None` if there is none.
    ///
    /// # Panics
    ///
    /// Panics if no equality comparer has been set.
    #[track_caller]
    pub fn take(&mut self, element: &T) -> Option<T> {
        match self.try_take(element) {
            Ok(taken) => taken,
            Err(err) => panic!("{err}"),
        }
    }

    /// Removes the first element (in storage order) equal to `element`, returning
    /// whether one was found.
    ///
    /// # Errors
    ///
    /// Returns an error of kind
    /// [`EqualityNotSet`](crate::QueueErrorKind::EqualityNotSet) if no
    /// equality comparer has been set.
    pub fn try_remove(&mut self, element: &T) -> Result<bool, QueueError> {
        Ok(self.try_take(element)?.is_some())
    }

    /// Removes the first element (in storage order) equal to `element`, returning
    /// whether one was found.  Other elements equal to it stay in the queue.
    ///
    /// # Panics
    ///
    /// Panics if no equality comparer has been set.
    ///
    /// # Examples
    ///
    /// ```
    /// use grove::{default::{default_equals, MinFirst}, PriorityQueue};
    ///
    /// let mut heap = PriorityQueue::from_vec(vec![14, 5, 16, 5], MinFirst::new());
    /// heap.set_equality_comparer(default_equals);
    ///
    /// assert!(heap.remove(&5));
    /// assert!(heap.contains(&5));
    /// assert!(heap.remove(&5));
    /// assert!(!heap.contains(&5));
    /// assert!(!heap.remove(&5));
    /// ```
    ///
    /// # Time complexity
    ///
    /// *O*(*n*) to find the element, then *O*(log(*n*)) to restore heap order.
    #[track_caller]
    pub fn remove(&mut self, element: &T) -> bool {
        match self.try_remove(element) {
            Ok(removed) => removed,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T, O: Priority<T>, E: Equivalence<T>> Container<T> for PriorityQueue<T, O, E> {
    fn len(&self) -> usize {
        Self::len(self)
    }

    fn contains(&self, element: &T) -> bool {
        Self::contains(self, element)
    }

    fn clear(&mut self) {
        Self::clear(self)
    }

    fn for_each_mut<F: FnMut(&mut T)>(&mut self, f: F) {
        Self::for_each_mut(self, f)
    }
}

impl<T, O: Priority<T>, E: Equivalence<T>> Collection<T> for PriorityQueue<T, O, E> {
    fn add(&mut self, element: T) -> bool {
        Self::add(self, element)
    }

    fn remove(&mut self, element: &T) -> bool {
        Self::remove(self, element)
    }
}

impl<T, O: Priority<T>, E: Equivalence<T>> Queue<T> for PriorityQueue<T, O, E> {
    type Equality = E;

    fn set_equality_comparer(&mut self, equals: E) {
        Self::set_equality_comparer(self, equals)
    }

    fn enqueue(&mut self, element: T) {
        Self::enqueue(self, element)
    }

    fn dequeue(&mut self) -> T {
        Self::dequeue(self)
    }

    fn peek(&self) -> &T {
        Self::peek(self)
    }
}

/// An iterator over the elements of a `PriorityQueue`, in storage order.
///
/// This `struct` is created by [`PriorityQueue::iter()`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    iter: slice::Iter<'a, T>,
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.iter.as_slice()).finish()
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { iter: self.iter.clone() }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }

    #[inline]
    fn last(self) -> Option<&'a T> {
        self.iter.last()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        self.iter.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    #[cfg(feature = "exact_size_is_empty")]
    fn is_empty(&self) -> bool {
        self.iter.is_empty()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

/// An owning iterator over the elements of a `PriorityQueue`, in storage order.
///
/// This `struct` is created by [`PriorityQueue::into_iter()`] (provided by the
/// [`IntoIterator`] trait).
#[derive(Clone)]
pub struct IntoIter<T> {
    iter: vec::IntoIter<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.iter.as_slice()).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.iter.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    #[cfg(feature = "exact_size_is_empty")]
    fn is_empty(&self) -> bool {
        self.iter.is_empty()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

/// A draining iterator over the elements of a `PriorityQueue`, in storage order.
///
/// This `struct` is created by [`PriorityQueue::drain()`].
#[derive(Debug)]
pub struct Drain<'a, T: 'a> {
    iter: vec::Drain<'a, T>,
}

impl<T> Iterator for Drain<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> DoubleEndedIterator for Drain<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.iter.next_back()
    }
}

impl<T> ExactSizeIterator for Drain<'_, T> {
    #[cfg(feature = "exact_size_is_empty")]
    fn is_empty(&self) -> bool {
        self.iter.is_empty()
    }
}

impl<T> FusedIterator for Drain<'_, T> {}

/// A draining iterator over the elements of a `PriorityQueue`, highest priority
/// first.
///
/// This `struct` is created by [`PriorityQueue::drain_sorted()`].
pub struct DrainSorted<'a, T, O: Priority<T>, E = EqualityFn<T>> {
    inner: &'a mut PriorityQueue<T, O, E>,
}

impl<T: fmt::Debug, O: Priority<T>, E> fmt::Debug for DrainSorted<'_, T, O, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DrainSorted").field(&self.inner).finish()
    }
}

impl<T, O: Priority<T>, E> Drop for DrainSorted<'_, T, O, E> {
    fn drop(&mut self) {
        self.inner.clear();
    }
}

impl<T, O: Priority<T>, E> Iterator for DrainSorted<'_, T, O, E> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.pop()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let exact = self.inner.len();
        (exact, Some(exact))
    }
}

impl<T, O: Priority<T>, E> ExactSizeIterator for DrainSorted<'_, T, O, E> {}

impl<T, O: Priority<T>, E> FusedIterator for DrainSorted<'_, T, O, E> {}

#[cfg(feature = "trusted_len")]
unsafe impl<T, O: Priority<T>, E> TrustedLen for DrainSorted<'_, T, O, E> {}

/// An owning iterator over the elements of a `PriorityQueue`, highest priority
/// first.
///
/// This `struct` is created by [`PriorityQueue::into_iter_sorted()`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone, Debug)]
pub struct IntoIterSorted<T, O, E = EqualityFn<T>> {
    inner: PriorityQueue<T, O, E>,
}

impl<T, O: Priority<T>, E> Iterator for IntoIterSorted<T, O, E> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.pop()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let exact = self.inner.len();
        (exact, Some(exact))
    }
}

impl<T, O: Priority<T>, E> ExactSizeIterator for IntoIterSorted<T, O, E> {}

impl<T, O: Priority<T>, E> FusedIterator for IntoIterSorted<T, O, E> {}

#[cfg(feature = "trusted_len")]
unsafe impl<T, O: Priority<T>, E> TrustedLen for IntoIterSorted<T, O, E> {}

impl<T, O: Priority<T> + Default> From<Vec<T>> for PriorityQueue<T, O> {
    /// Converts a `Vec<T>` into a `PriorityQueue<T, O>` ordered by `O::default()`.
    ///
    /// This conversion happens in place, and has *O*(*n*) time complexity.
    fn from(vec: Vec<T>) -> Self {
        PriorityQueue::from_vec(vec, O::default())
    }
}

impl<T, O: Priority<T> + Default, const N: usize> From<[T; N]> for PriorityQueue<T, O> {
    /// ```
    /// use grove::{default::MaxFirst, PriorityQueue};
    ///
    /// let mut h1: PriorityQueue<_, MaxFirst<_>> = PriorityQueue::from([1, 4, 2, 3]);
    /// let mut h2: PriorityQueue<_, MaxFirst<_>> = [1, 4, 2, 3].into();
    /// while let Some((a, b)) = h1.pop().zip(h2.pop()) {
    ///     assert_eq!(a, b);
    /// }
    /// ```
    fn from(arr: [T; N]) -> Self {
        Self::from_iter(arr)
    }
}

impl<T, O, E> From<PriorityQueue<T, O, E>> for Vec<T> {
    /// Converts a `PriorityQueue` into its storage, in arbitrary order.
    ///
    /// This conversion requires no data movement or allocation, and has constant
    /// time complexity.
    fn from(queue: PriorityQueue<T, O, E>) -> Vec<T> {
        queue.data
    }
}

impl<T, O: Priority<T> + Default> FromIterator<T> for PriorityQueue<T, O> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        PriorityQueue::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T, O, E> IntoIterator for PriorityQueue<T, O, E> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Creates a consuming iterator, that is, one that moves each value out of the
    /// queue in arbitrary order.
    fn into_iter(self) -> IntoIter<T> {
        IntoIter { iter: self.data.into_iter() }
    }
}

impl<'a, T, O, E> IntoIterator for &'a PriorityQueue<T, O, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T, O: Priority<T>, E> Extend<T> for PriorityQueue<T, O, E> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iterator = iter.into_iter();
        let (lower, _) = iterator.size_hint();

        self.reserve(lower);

        iterator.for_each(move |elem| self.enqueue(elem));
    }

    #[inline]
    #[cfg(feature = "extend_one")]
    fn extend_one(&mut self, item: T) {
        self.enqueue(item);
    }

    #[inline]
    #[cfg(feature = "extend_one")]
    fn extend_reserve(&mut self, additional: usize) {
        self.reserve(additional);
    }
}

impl<'a, T: 'a + Copy, O: Priority<T>, E> Extend<&'a T> for PriorityQueue<T, O, E> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }

    #[inline]
    #[cfg(feature = "extend_one")]
    fn extend_one(&mut self, &item: &'a T) {
        self.enqueue(item);
    }

    #[inline]
    #[cfg(feature = "extend_one")]
    fn extend_reserve(&mut self, additional: usize) {
        self.reserve(additional);
    }
}
