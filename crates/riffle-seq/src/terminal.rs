//! Terminal evaluators: obtain a fresh pull function and drive it.
//!
//! The cardinality hint is consumed here, and only as a preallocation size.
//! `count`/`any` always traverse: two hint rules report upper bounds over
//! unknown parents, so shortcutting on the hint would return wrong answers.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

use riffle_core::error::{Error, Result};

use crate::node::Sequence;

impl<T: 'static> Sequence<T> {
    /// Materialize into a vector, preallocated from the hint.
    pub fn to_vec(&self) -> Vec<T> {
        let mut pull = self.traverse();
        let mut out = Vec::with_capacity(self.hint().capacity());
        while let Some(value) = pull() {
            out.push(value);
        }
        out
    }

    /// The first element, if any. Pulls at most once.
    pub fn first(&self) -> Option<T> {
        let mut pull = self.traverse();
        pull()
    }

    /// The last element, if any. Traverses to exhaustion.
    pub fn last(&self) -> Option<T> {
        let mut pull = self.traverse();
        let mut last = None;
        while let Some(value) = pull() {
            last = Some(value);
        }
        last
    }

    /// Number of elements. Always traverses.
    pub fn count(&self) -> usize {
        let mut pull = self.traverse();
        let mut count = 0usize;
        while pull().is_some() {
            count += 1;
        }
        count
    }

    /// Whether the sequence has at least one element. Pulls at most once.
    pub fn any(&self) -> bool {
        self.first().is_some()
    }

    /// Whether any element satisfies the predicate. Stops at the first hit.
    pub fn any_match<P>(&self, predicate: P) -> bool
    where
        P: Fn(&T) -> bool,
    {
        let mut pull = self.traverse();
        while let Some(value) = pull() {
            if predicate(&value) {
                return true;
            }
        }
        false
    }

    /// Whether every element satisfies the predicate. Stops at the first
    /// miss. Vacuously true for an empty sequence.
    pub fn all<P>(&self, predicate: P) -> bool
    where
        P: Fn(&T) -> bool,
    {
        let mut pull = self.traverse();
        while let Some(value) = pull() {
            if !predicate(&value) {
                return false;
            }
        }
        true
    }

    /// Run an action for each element.
    pub fn for_each<A>(&self, mut action: A)
    where
        A: FnMut(T),
    {
        let mut pull = self.traverse();
        while let Some(value) = pull() {
            action(value);
        }
    }

    /// Fold the sequence into an accumulator, starting from `seed`.
    pub fn fold<A, F>(&self, seed: A, folder: F) -> A
    where
        F: Fn(A, T) -> A,
    {
        let mut pull = self.traverse();
        let mut acc = seed;
        while let Some(value) = pull() {
            acc = folder(acc, value);
        }
        acc
    }

    /// The minimum element under the comparator, if any. Ties keep the
    /// earliest element.
    pub fn min_by<F>(&self, comparator: F) -> Option<T>
    where
        F: Fn(&T, &T) -> Ordering,
    {
        let mut pull = self.traverse();
        let mut best: Option<T> = None;
        while let Some(value) = pull() {
            match &best {
                Some(current) if comparator(&value, current) != Ordering::Less => {}
                _ => best = Some(value),
            }
        }
        best
    }

    /// The maximum element under the comparator, if any. Ties keep the
    /// earliest element.
    pub fn max_by<F>(&self, comparator: F) -> Option<T>
    where
        F: Fn(&T, &T) -> Ordering,
    {
        let mut pull = self.traverse();
        let mut best: Option<T> = None;
        while let Some(value) = pull() {
            match &best {
                Some(current) if comparator(&value, current) != Ordering::Greater => {}
                _ => best = Some(value),
            }
        }
        best
    }

    /// Split into chunks of `size`; the last chunk may be short. A
    /// non-positive size is a reported error, distinguishable from the
    /// legitimate zero chunks of an empty source.
    pub fn chunk(&self, size: i64) -> Result<Vec<Vec<T>>> {
        if size <= 0 {
            return Err(Error::InvalidArgument(format!(
                "chunk size must be positive, got {size}"
            )));
        }
        let size = size as usize;
        let mut pull = self.traverse();
        let capacity = self
            .hint()
            .known()
            .map(|n| (n + size - 1) / size)
            .unwrap_or(0);
        let mut chunks: Vec<Vec<T>> = Vec::with_capacity(capacity);
        let mut current: Vec<T> = Vec::new();
        while let Some(value) = pull() {
            current.push(value);
            if current.len() == size {
                chunks.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            chunks.push(current);
        }
        Ok(chunks)
    }

    /// Materialize into a map via key and value selectors. Later elements
    /// overwrite earlier ones on key collision.
    pub fn to_map_by<K, V, KF, VF>(&self, key_fn: KF, value_fn: VF) -> HashMap<K, V>
    where
        K: Eq + Hash,
        KF: Fn(&T) -> K,
        VF: Fn(T) -> V,
    {
        let mut pull = self.traverse();
        let mut out = HashMap::with_capacity(self.hint().capacity());
        while let Some(value) = pull() {
            let key = key_fn(&value);
            out.insert(key, value_fn(value));
        }
        out
    }
}
