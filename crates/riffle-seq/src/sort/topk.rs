//! Bounded order statistics: the k best elements without a full sort.
//!
//! One forward pass over the source keeps at most k elements in a binary
//! heap ordered by the complement of the caller's `less_than`, so the worst
//! retained element sits at the root and replacement is O(log k). A final
//! O(k log k) sort produces ascending output. Memory stays O(k) regardless
//! of source size, which is the entire reason this exists instead of
//! "sort everything, take a prefix".
//!
//! The heap uses raw index arithmetic (children at `2i+1` / `2i+2`) over a
//! plain vector that lives only for the duration of one traversal.

use std::cmp::Ordering;
use std::sync::Arc;

use crate::node::Sequence;

impl<T: 'static> Sequence<T> {
    /// The `min(k, len)` smallest elements under `less_than`, ascending.
    /// `k <= 0` yields an empty sequence without touching the source.
    /// Hint: `min(parent, k)` when the parent is known, else `Known(k)`.
    pub fn top_k<F>(&self, k: i64, less_than: F) -> Sequence<T>
    where
        F: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        if k <= 0 {
            return Sequence::empty();
        }
        let k = k as usize;
        let parent = self.factory();
        let less_than = Arc::new(less_than);
        let hint = self.hint().cap(k);
        Sequence::from_parts(
            move || {
                let mut pull = parent();
                let less_than = Arc::clone(&less_than);

                // Phase 1: fill with up to k elements, then heapify bottom-up.
                let mut heap: Vec<T> = Vec::with_capacity(k);
                while heap.len() < k {
                    match pull() {
                        Some(value) => heap.push(value),
                        None => break,
                    }
                }
                heapify(&mut heap, less_than.as_ref());

                // Phase 2: a candidate strictly better than the worst
                // retained element evicts it; everything else is discarded.
                while let Some(candidate) = pull() {
                    if less_than(&candidate, &heap[0]) {
                        heap[0] = candidate;
                        sift_down(&mut heap, 0, less_than.as_ref());
                    }
                }

                // Phase 3: the retained elements, fully sorted ascending.
                heap.sort_by(|a, b| ordering_of(less_than.as_ref(), a, b));
                #[cfg(feature = "tracing")]
                tracing::trace!(retained = heap.len(), k, "top_k pass complete");
                let mut iter = heap.into_iter();
                move || iter.next()
            },
            hint,
        )
    }

    /// The `min(k, len)` largest elements under `less_than`, descending.
    /// Obtained by negating the comparator, not by a second algorithm.
    pub fn top_k_descending<F>(&self, k: i64, less_than: F) -> Sequence<T>
    where
        F: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        self.top_k(k, move |a, b| less_than(b, a))
    }
}

/// Bottom-up heap construction, O(k).
fn heapify<T, F>(heap: &mut [T], less_than: &F)
where
    F: Fn(&T, &T) -> bool,
{
    if heap.len() < 2 {
        return;
    }
    for i in (0..heap.len() / 2).rev() {
        sift_down(heap, i, less_than);
    }
}

/// Restore the heap property below `i`. The heap is a max-heap under
/// `less_than`: no parent is less than either child, so the root is the
/// worst element retained.
fn sift_down<T, F>(heap: &mut [T], mut i: usize, less_than: &F)
where
    F: Fn(&T, &T) -> bool,
{
    let len = heap.len();
    loop {
        let left = 2 * i + 1;
        let right = 2 * i + 2;
        let mut largest = i;
        if left < len && less_than(&heap[largest], &heap[left]) {
            largest = left;
        }
        if right < len && less_than(&heap[largest], &heap[right]) {
            largest = right;
        }
        if largest == i {
            return;
        }
        heap.swap(i, largest);
        i = largest;
    }
}

/// Total order induced by a strict `less_than`.
fn ordering_of<T, F>(less_than: &F, a: &T, b: &T) -> Ordering
where
    F: Fn(&T, &T) -> bool,
{
    if less_than(a, b) {
        Ordering::Less
    } else if less_than(b, a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}
