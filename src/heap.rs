//! Heap-order primitives over a contiguous slice.
//!
//! The slice is read as a complete binary tree in the zero-indexed layout: the
//! children of `i` are `2i + 1` and `2i + 2`, its parent is `(i - 1) / 2`.  A slice
//! is heap-ordered when no child outranks its parent.  These functions are the only
//! code that moves elements in order to restore that invariant.

use core::mem::ManuallyDrop;
use core::ptr;

use crate::Priority;

// Elements are moved by taking one out of the slice (leaving behind a hole),
// shifting the others along and writing the taken element back at the final
// position of the hole.  `Hole` fills itself back in when dropped, so a
// panicking `Priority` can neither lose nor duplicate an element.  Moving
// through a hole costs half as many writes as repeated swaps.

/// Moves the element at `pos` toward the root for as long as it outranks its
/// parent, but never above `start`.  Returns its final position.
///
/// # Safety
///
/// The caller must guarantee that `pos < data.len()`.
pub(crate) unsafe fn sift_up<T, O>(data: &mut [T], start: usize, pos: usize, order: &O) -> usize
where
    O: ?Sized + Priority<T>,
{
    // SAFETY: The caller guarantees that pos < data.len().
    let mut hole = unsafe { Hole::new(data, pos) };

    while hole.pos() > start {
        let parent = (hole.pos() - 1) / 2;

        // SAFETY: hole.pos() > start >= 0, so parent < hole.pos() is a valid
        //  index distinct from the hole.
        if !order.outranks(hole.element(), unsafe { hole.get(parent) }) {
            break;
        }

        // SAFETY: Same as above.
        unsafe { hole.move_to(parent) };
    }

    hole.pos()
}

/// Moves the element at `pos` toward the leaves of the tree formed by
/// `data[..end]`, for as long as the higher-priority of its children outranks it.
/// Returns its final position.
///
/// # Safety
///
/// The caller must guarantee that `pos < end <= data.len()`.
pub(crate) unsafe fn sift_down_range<T, O>(data: &mut [T], pos: usize, end: usize, order: &O) -> usize
where
    O: ?Sized + Priority<T>,
{
    // SAFETY: The caller guarantees that pos < end <= data.len().
    let mut hole = unsafe { Hole::new(data, pos) };
    let mut child = 2 * hole.pos() + 1;

    // Loop invariant: child == 2 * hole.pos() + 1.
    while child <= end.saturating_sub(2) {
        // SAFETY: child < end - 1 and child + 1 < end, both distinct from the
        //  hole since they are its children.
        child += unsafe { order.outranks(hole.get(child + 1), hole.get(child)) } as usize;

        // SAFETY: child is one of the two indices proven valid above.
        if !order.outranks(unsafe { hole.get(child) }, hole.element()) {
            return hole.pos();
        }

        // SAFETY: Same as above.
        unsafe { hole.move_to(child) };
        child = 2 * hole.pos() + 1;
    }

    // A lone left child at the very end of the range.
    // SAFETY: && short circuits, so child == end - 1 < data.len() when it is read.
    if child == end - 1 && order.outranks(unsafe { hole.get(child) }, hole.element()) {
        // SAFETY: child is a valid index distinct from the hole.
        unsafe { hole.move_to(child) };
    }

    hole.pos()
}

/// Restores heap order over the whole slice bottom-up, in *O*(*n*).
pub(crate) fn rebuild<T, O>(data: &mut [T], order: &O)
where
    O: ?Sized + Priority<T>,
{
    let len = data.len();
    let mut n = len / 2;
    while n > 0 {
        n -= 1;
        // SAFETY: n < len / 2 <= len.
        unsafe { sift_down_range(data, n, len, order) };
    }
}

/// Restores heap order over the whole slice, assuming `data[..start]` is already
/// heap-ordered.
pub(crate) fn rebuild_tail<T, O>(data: &mut [T], start: usize, order: &O)
where
    O: ?Sized + Priority<T>,
{
    let len = data.len();
    if start >= len {
        return;
    }

    let tail_len = len - start;

    #[inline(always)]
    fn log2_fast(x: usize) -> usize {
        (usize::BITS - x.leading_zeros() - 1) as usize
    }

    // `rebuild` takes O(len) operations and about 2 * len comparisons in the worst
    // case, while sifting up every tail element takes O(tail_len * log(start))
    // operations and about tail_len * log2(start) comparisons, assuming
    // start >= tail_len.  For larger heaps the crossover point was determined
    // empirically.
    let better_to_rebuild = if start < tail_len {
        true
    } else if len <= 2048 {
        2 * len < tail_len * log2_fast(start)
    } else {
        2 * len < tail_len * 11
    };

    if better_to_rebuild {
        rebuild(data, order);
    } else {
        for i in start..len {
            // SAFETY: i < len.
            unsafe { sift_up(data, 0, i, order) };
        }
    }
}

/// Returns whether no element of `data` outranks its parent.
#[cfg(test)]
pub(crate) fn is_heap<T, O>(data: &[T], order: &O) -> bool
where
    O: ?Sized + Priority<T>,
{
    (1..data.len()).all(|i| !order.outranks(&data[i], &data[(i - 1) / 2]))
}

/// An index of a slice whose value has been moved out (or is duplicated).
/// On drop, the moved-out value is written back at the current position.
struct Hole<'a, T: 'a> {
    data: &'a mut [T],
    elt: ManuallyDrop<T>,
    pos: usize,
}

impl<'a, T> Hole<'a, T> {
    /// Creates a new `Hole` at index `pos`.
    ///
    /// Unsafe because pos must be within the data slice.
    #[inline]
    unsafe fn new(data: &'a mut [T], pos: usize) -> Self {
        debug_assert!(pos < data.len());
        // SAFE: pos should be inside the slice
        let elt = unsafe { ptr::read(data.get_unchecked(pos)) };
        Hole { data, elt: ManuallyDrop::new(elt), pos }
    }

    #[inline]
    fn pos(&self) -> usize {
        self.pos
    }

    /// The element that was taken out.
    #[inline]
    fn element(&self) -> &T {
        &self.elt
    }

    /// Returns a reference to the element at `index`.
    ///
    /// Unsafe because index must be within the data slice and not equal to pos.
    #[inline]
    unsafe fn get(&self, index: usize) -> &T {
        debug_assert!(index != self.pos);
        debug_assert!(index < self.data.len());
        unsafe { self.data.get_unchecked(index) }
    }

    /// Moves the hole to `index`, shifting that element into the old position.
    ///
    /// Unsafe because index must be within the data slice and not equal to pos.
    #[inline]
    unsafe fn move_to(&mut self, index: usize) {
        debug_assert!(index != self.pos);
        debug_assert!(index < self.data.len());
        unsafe {
            let ptr = self.data.as_mut_ptr();
            let index_ptr: *const _ = ptr.add(index);
            let hole_ptr = ptr.add(self.pos);
            ptr::copy_nonoverlapping(index_ptr, hole_ptr, 1);
        }
        self.pos = index;
    }
}

impl<T> Drop for Hole<'_, T> {
    #[inline]
    fn drop(&mut self) {
        // fill the hole again
        unsafe {
            let pos = self.pos;
            ptr::copy_nonoverlapping(&*self.elt, self.data.get_unchecked_mut(pos), 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::default::{MaxFirst, MinFirst};
    use alloc::vec::Vec;

    #[test]
    fn sift_up_stops_below_an_outranking_parent() {
        let mut data = vec![1, 5, 2, 7, 6, 3];
        data.push(4);
        let pos = unsafe { sift_up(&mut data, 0, 6, &MinFirst::new()) };
        assert_eq!(pos, 6);
        assert_eq!(data, [1, 5, 2, 7, 6, 3, 4]);
    }

    #[test]
    fn sift_up_walks_to_the_root() {
        let mut data = vec![2, 5, 3, 7, 6, 4, 1];
        let pos = unsafe { sift_up(&mut data, 0, 6, &MinFirst::new()) };
        assert_eq!(pos, 0);
        assert_eq!(data, [1, 5, 2, 7, 6, 4, 3]);
        assert!(is_heap(&data, &MinFirst::new()));
    }

    #[test]
    fn sift_up_respects_start() {
        let mut data = vec![9, 8, 7, 1];
        let pos = unsafe { sift_up(&mut data, 1, 3, &MinFirst::new()) };
        assert_eq!(pos, 1);
        assert_eq!(data, [9, 1, 7, 8]);
    }

    #[test]
    fn sift_down_prefers_the_outranking_child() {
        let mut data = vec![9, 4, 2, 5, 6, 3];
        let pos = unsafe { sift_down_range(&mut data, 0, 6, &MinFirst::new()) };
        assert_eq!(pos, 5);
        assert_eq!(data, [2, 4, 3, 5, 6, 9]);
        assert!(is_heap(&data, &MinFirst::new()));
    }

    #[test]
    fn sift_down_handles_a_lone_left_child() {
        let mut data = vec![1, 2];
        let pos = unsafe { sift_down_range(&mut data, 0, 2, &MaxFirst::new()) };
        assert_eq!(pos, 1);
        assert_eq!(data, [2, 1]);
    }

    #[test]
    fn sift_down_ignores_elements_past_end() {
        let mut data = vec![5, 6, 7, 0];
        let pos = unsafe { sift_down_range(&mut data, 1, 3, &MinFirst::new()) };
        assert_eq!(pos, 1);
        assert_eq!(data, [5, 6, 7, 0]);
    }

    #[test]
    fn rebuild_heapifies() {
        let mut data = vec![14, 16, 5, 23, 7, 10];
        rebuild(&mut data, &MinFirst::new());
        assert!(is_heap(&data, &MinFirst::new()));
        assert_eq!(data[0], 5);

        let mut empty: Vec<i32> = Vec::new();
        rebuild(&mut empty, &MinFirst::new());
        assert!(empty.is_empty());
    }

    #[test]
    fn rebuild_tail_extends_a_heap() {
        let order = MaxFirst::new();
        for tail in [1, 3, 40] {
            let mut data: Vec<u32> = (0..20).collect();
            rebuild(&mut data, &order);
            data.extend(100..100 + tail);
            rebuild_tail(&mut data, 20, &order);
            assert!(is_heap(&data, &order));
            assert_eq!(data.len(), 20 + tail as usize);
        }
    }
}
