//! Binary min-heap overlaid on a caller-owned buffer.
//!
//! Heap cells are numbered from `1` (the root) and live at offset
//! `len - cell`, so the root is the *last* element of the buffer and the
//! highest-numbered cell is the first. Removing the highest cell therefore
//! shrinks the live region from the front, which is what lets the ordering
//! producer hand each released front cell back as sorted output.
//!
//! Invariant (after `heapify`): for every internal cell, its key compares
//! `<=` to the keys of both children.

use std::cmp::Ordering;
use std::mem;

use crate::key::ValueOrder;

/// Cell number of the root.
pub const ROOT: usize = 1;

#[inline]
fn left(cell: usize) -> usize {
    cell * 2
}

#[inline]
fn right(cell: usize) -> usize {
    cell * 2 + 1
}

/// Offset of `cell` in a heap of `len` cells.
#[inline]
fn offset(len: usize, cell: usize) -> usize {
    len - cell
}

/// Move the value at `cell` down until neither child is smaller.
///
/// When both children are smaller than the sifted value, the swap goes to
/// the smaller child; swapping with the other one would leave that child
/// above its new sibling and break the invariant one level down.
pub fn sift_down<T, O: ValueOrder<T>>(cells: &mut [T], cell: usize, order: &O) {
    let max = cells.len();
    if cell < ROOT || cell > max {
        return;
    }

    let mut sift = cell;
    while left(sift) <= max {
        let mut child = left(sift);
        if right(sift) <= max
            && order.compare(&cells[offset(max, child)], &cells[offset(max, right(sift))])
                == Ordering::Greater
        {
            child = right(sift);
        }

        if order.compare(&cells[offset(max, sift)], &cells[offset(max, child)]) != Ordering::Greater {
            break;
        }

        cells.swap(offset(max, sift), offset(max, child));
        sift = child;
    }
}

/// Arrange `cells` into a min-heap in O(n).
pub fn heapify<T, O: ValueOrder<T>>(cells: &mut [T], order: &O) {
    let max = cells.len();
    for cell in (ROOT..=max / 2).rev() {
        sift_down(cells, cell, order);
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(len = max, "heap built");
}

/// Remove the minimum from the live heap.
///
/// The minimum is swapped into the front cell, the live region shrinks past
/// it, and the value previously in the front cell is sifted down from the
/// root. Returns a reference to the released cell holding the minimum, or
/// `None` when the heap is empty.
pub fn extract_min<'a, T, O: ValueOrder<T>>(heap: &mut &'a mut [T], order: &O) -> Option<&'a T> {
    let cells = mem::take(heap);
    let last = cells.len().checked_sub(1)?;
    // Root cell lives at `last`; the highest cell lives at `0`.
    cells.swap(0, last);

    let (min, rest) = cells.split_first_mut()?;
    *heap = rest;
    if !heap.is_empty() {
        sift_down(heap, ROOT, order);
    }
    Some(min)
}

/// Check the heap invariant for every internal cell.
pub fn is_heap<T, O: ValueOrder<T>>(cells: &[T], order: &O) -> bool {
    let max = cells.len();
    (ROOT..=max / 2).all(|cell| {
        let parent = &cells[offset(max, cell)];
        let not_above = |child: usize| {
            child > max || order.compare(parent, &cells[offset(max, child)]) != Ordering::Greater
        };
        not_above(left(cell)) && not_above(right(cell))
    })
}
