//! Duplicate-removing filters: `distinct`, `distinct_by`.
//!
//! The seen-set is created inside the pull closure, so each traversal
//! deduplicates independently. Keys must be `Eq + Hash` at compile time;
//! there is no runtime comparability check to fail.

use std::collections::HashSet;
use std::hash::Hash;
use std::sync::Arc;

use riffle_core::hint::Cardinality;

use crate::node::Sequence;

impl<T: 'static> Sequence<T> {
    /// Remove duplicate elements, keeping first occurrences in order.
    /// Loses the cardinality hint.
    pub fn distinct(&self) -> Sequence<T>
    where
        T: Eq + Hash + Clone,
    {
        self.distinct_by(|value| value.clone())
    }

    /// Remove elements whose derived key was already seen, keeping first
    /// occurrences in order. Loses the cardinality hint.
    pub fn distinct_by<K, F>(&self, key_fn: F) -> Sequence<T>
    where
        K: Eq + Hash + 'static,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        let parent = self.factory();
        let key_fn = Arc::new(key_fn);
        Sequence::from_parts(
            move || {
                let mut pull = parent();
                let key_fn = Arc::clone(&key_fn);
                let mut seen: HashSet<K> = HashSet::new();
                move || loop {
                    let value = pull()?;
                    if seen.insert(key_fn(&value)) {
                        return Some(value);
                    }
                }
            },
            Cardinality::Unknown,
        )
    }
}
