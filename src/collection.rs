//! Capability traits shared by the crate's containers.
//!
//! Adapters (stacks, FIFO queues, lists) built on top of, or alongside, a
//! [`PriorityQueue`] can be written against these traits instead of the concrete
//! type.
//!
//! [`PriorityQueue`]: crate::PriorityQueue

/// Operations every container supports.
pub trait Container<T> {
    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if there are no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if an element equal to `element` is present.
    fn contains(&self, element: &T) -> bool;

    /// Removes every element.  What happens to the backing storage is up to the
    /// implementation.
    fn clear(&mut self);

    /// Calls `f` on every element, in an unspecified order.
    fn for_each_mut<F: FnMut(&mut T)>(&mut self, f: F);
}

/// A container that elements may be added to and removed from by value.
pub trait Collection<T>: Container<T> {
    /// Adds `element`, returning `true` if it was added.
    fn add(&mut self, element: T) -> bool;

    /// Removes the first element equal to `element`, returning `true` if one was
    /// found.
    fn remove(&mut self, element: &T) -> bool;
}

/// A container with a distinguished front element.
pub trait Queue<T>: Container<T> {
    /// The equality relation used by [`Container::contains`].
    type Equality;

    /// Installs the equality relation used to search by value.
    fn set_equality_comparer(&mut self, equals: Self::Equality);

    /// Adds `element` to the queue.
    fn enqueue(&mut self, element: T);

    /// Removes and returns the front element.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty.
    fn dequeue(&mut self) -> T;

    /// Returns the front element without removing it.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty.
    fn peek(&self) -> &T;
}
