//! Key-value pair produced by map-sourced pipelines and `group_by`.

use serde::{Deserialize, Serialize};

/// An ordered (key, value) pair. Keys carry the iteration order of the
/// snapshot taken when the leaf was constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValue<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> KeyValue<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }
}

impl<K, V> From<(K, V)> for KeyValue<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Self { key, value }
    }
}
