//! Full-materialization reorderers: `order_by`, `order_by_descending`,
//! `reverse`.
//!
//! Materialization happens inside the traversal factory, so construction does
//! no work and every traversal re-sorts against the current leaf contents.
//! Reordering does not change the element count, so the hint is preserved.

use std::cmp::Ordering;
use std::sync::Arc;

use crate::node::Sequence;

impl<T: 'static> Sequence<T> {
    /// Sort ascending under the comparator.
    pub fn order_by<F>(&self, comparator: F) -> Sequence<T>
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        self.sorted(comparator, true)
    }

    /// Sort descending: the same comparator, reversed. Not a separate
    /// algorithm.
    pub fn order_by_descending<F>(&self, comparator: F) -> Sequence<T>
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        self.sorted(comparator, false)
    }

    /// Reverse the element order.
    pub fn reverse(&self) -> Sequence<T> {
        let parent = self.factory();
        let hint = self.hint();
        Sequence::from_parts(
            move || {
                let mut pull = parent();
                let mut buf = Vec::with_capacity(hint.capacity());
                while let Some(value) = pull() {
                    buf.push(value);
                }
                move || buf.pop()
            },
            hint,
        )
    }

    fn sorted<F>(&self, comparator: F, ascending: bool) -> Sequence<T>
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        let parent = self.factory();
        let comparator = Arc::new(comparator);
        let hint = self.hint();
        Sequence::from_parts(
            move || {
                let mut pull = parent();
                let mut buf = Vec::with_capacity(hint.capacity());
                while let Some(value) = pull() {
                    buf.push(value);
                }
                let comparator = Arc::clone(&comparator);
                buf.sort_by(move |a, b| {
                    let ord = comparator(a, b);
                    if ascending {
                        ord
                    } else {
                        ord.reverse()
                    }
                });
                #[cfg(feature = "tracing")]
                tracing::trace!(len = buf.len(), ascending, "order_by materialized");
                let mut iter = buf.into_iter();
                move || iter.next()
            },
            hint,
        )
    }
}
