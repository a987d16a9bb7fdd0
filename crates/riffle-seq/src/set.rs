//! Set operators: `union`, `intersect`, `except`.
//!
//! `union` streams both sides against one seen-set. `intersect`/`except`
//! materialize the right side into a membership set when a traversal starts,
//! then lazily filter the left side, deduplicating what they emit. Output
//! order follows the left side (first-seen order across both, for `union`).

use std::collections::HashSet;
use std::hash::Hash;

use riffle_core::hint::Cardinality;

use crate::node::Sequence;

impl<T: Eq + Hash + Clone + 'static> Sequence<T> {
    /// All unique elements from this sequence, then from `other`, in
    /// first-seen order. Loses the cardinality hint.
    pub fn union(&self, other: &Sequence<T>) -> Sequence<T> {
        let first = self.factory();
        let second = other.factory();
        Sequence::from_parts(
            move || {
                let mut head = first();
                let mut tail = second();
                let mut head_done = false;
                let mut seen: HashSet<T> = HashSet::new();
                move || loop {
                    let value = if head_done {
                        tail()?
                    } else {
                        match head() {
                            Some(value) => value,
                            None => {
                                head_done = true;
                                continue;
                            }
                        }
                    };
                    if seen.insert(value.clone()) {
                        return Some(value);
                    }
                }
            },
            Cardinality::Unknown,
        )
    }

    /// Unique elements of this sequence that are also in `other`, in this
    /// sequence's order. Loses the cardinality hint.
    pub fn intersect(&self, other: &Sequence<T>) -> Sequence<T> {
        self.membership_filter(other, true)
    }

    /// Unique elements of this sequence that are not in `other`, in this
    /// sequence's order. Loses the cardinality hint.
    pub fn except(&self, other: &Sequence<T>) -> Sequence<T> {
        self.membership_filter(other, false)
    }

    fn membership_filter(&self, other: &Sequence<T>, keep_members: bool) -> Sequence<T> {
        let parent = self.factory();
        let other = other.factory();
        Sequence::from_parts(
            move || {
                // The right side is fully materialized per traversal so the
                // left side can stream against it.
                let mut members: HashSet<T> = HashSet::new();
                let mut pull_other = other();
                while let Some(value) = pull_other() {
                    members.insert(value);
                }
                let mut pull = parent();
                let mut emitted: HashSet<T> = HashSet::new();
                move || loop {
                    let value = pull()?;
                    if members.contains(&value) == keep_members && emitted.insert(value.clone()) {
                        return Some(value);
                    }
                }
            },
            Cardinality::Unknown,
        )
    }
}
