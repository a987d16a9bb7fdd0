//! Map-sourced leaves and key-value adapters.
//!
//! Two leaf variants: `from_map_shared` snapshots only the keys (fixing the
//! iteration order) and clones values on demand, one per pull, from the
//! shared map; `from_map` takes a full key+value snapshot at construction.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

use riffle_core::hint::Cardinality;
use riffle_core::kv::KeyValue;

use crate::node::Sequence;

impl<K, V> Sequence<KeyValue<K, V>>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    /// Leaf over a shared map. Keys are copied once at construction to pin
    /// an iteration order; values are read from the map lazily, per pull,
    /// per traversal. A key no longer present is skipped.
    pub fn from_map_shared(map: Arc<HashMap<K, V>>) -> Sequence<KeyValue<K, V>> {
        let keys: Arc<[K]> = map.keys().cloned().collect::<Vec<_>>().into();
        let hint = Cardinality::exact(keys.len());
        Sequence::from_parts(
            move || {
                let keys = Arc::clone(&keys);
                let map = Arc::clone(&map);
                let mut index = 0usize;
                move || {
                    while index < keys.len() {
                        let key = keys[index].clone();
                        index += 1;
                        if let Some(value) = map.get(&key) {
                            return Some(KeyValue::new(key, value.clone()));
                        }
                    }
                    None
                }
            },
            hint,
        )
    }

    /// Defensive-snapshot leaf: copies every pair at construction time,
    /// isolated from the caller's map afterwards.
    pub fn from_map(map: &HashMap<K, V>) -> Sequence<KeyValue<K, V>> {
        let pairs: Vec<KeyValue<K, V>> = map
            .iter()
            .map(|(key, value)| KeyValue::new(key.clone(), value.clone()))
            .collect();
        Sequence::from_vec(pairs)
    }
}

impl<K: 'static, V: 'static> Sequence<KeyValue<K, V>> {
    /// Project out the keys. Preserves the cardinality hint.
    pub fn keys(&self) -> Sequence<K> {
        self.map(|kv| kv.key)
    }

    /// Project out the values. Preserves the cardinality hint.
    pub fn values(&self) -> Sequence<V> {
        self.map(|kv| kv.value)
    }

    /// Materialize back into a map. Later pairs overwrite earlier ones on
    /// key collision.
    pub fn to_map(&self) -> HashMap<K, V>
    where
        K: Eq + Hash,
    {
        let mut pull = self.traverse();
        let mut out = HashMap::with_capacity(self.hint().capacity());
        while let Some(kv) = pull() {
            out.insert(kv.key, kv.value);
        }
        out
    }
}
