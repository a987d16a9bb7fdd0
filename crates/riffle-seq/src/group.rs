//! `group_by`: full materialization into keyed groups.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

use riffle_core::hint::Cardinality;
use riffle_core::kv::KeyValue;

use crate::node::Sequence;

impl<T: 'static> Sequence<T> {
    /// Group elements by a derived key. The source is fully materialized when
    /// a traversal starts; groups come out in first-occurrence order of their
    /// keys, each keeping its elements in source order.
    ///
    /// The group count is only knowable after materialization, so the hint is
    /// `Unknown`.
    pub fn group_by<K, F>(&self, key_fn: F) -> Sequence<KeyValue<K, Vec<T>>>
    where
        K: Eq + Hash + Clone + 'static,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        let parent = self.factory();
        let key_fn = Arc::new(key_fn);
        Sequence::from_parts(
            move || {
                let mut pull = parent();
                let mut groups: Vec<(K, Vec<T>)> = Vec::new();
                let mut slots: HashMap<K, usize> = HashMap::new();
                while let Some(item) = pull() {
                    let key = key_fn(&item);
                    match slots.get(&key) {
                        Some(&slot) => groups[slot].1.push(item),
                        None => {
                            slots.insert(key.clone(), groups.len());
                            groups.push((key, vec![item]));
                        }
                    }
                }
                #[cfg(feature = "tracing")]
                tracing::trace!(groups = groups.len(), "group_by materialized");
                let mut iter = groups.into_iter();
                move || iter.next().map(|(key, value)| KeyValue::new(key, value))
            },
            Cardinality::Unknown,
        )
    }
}
