//! Projection operators: `map`, `map_with_index`, `flat_map`.

use std::sync::Arc;

use riffle_core::hint::Cardinality;

use crate::node::{PullFn, Sequence};

impl<T: 'static> Sequence<T> {
    /// 1-to-1 transform. Preserves the cardinality hint.
    pub fn map<U, F>(&self, mapper: F) -> Sequence<U>
    where
        U: 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        let parent = self.factory();
        let mapper = Arc::new(mapper);
        let hint = self.hint();
        Sequence::from_parts(
            move || {
                let mut pull = parent();
                let mapper = Arc::clone(&mapper);
                move || pull().map(|value| mapper(value))
            },
            hint,
        )
    }

    /// 1-to-1 transform with the element's position in this traversal.
    /// Preserves the cardinality hint.
    pub fn map_with_index<U, F>(&self, mapper: F) -> Sequence<U>
    where
        U: 'static,
        F: Fn(T, usize) -> U + Send + Sync + 'static,
    {
        let parent = self.factory();
        let mapper = Arc::new(mapper);
        let hint = self.hint();
        Sequence::from_parts(
            move || {
                let mut pull = parent();
                let mapper = Arc::clone(&mapper);
                let mut index = 0usize;
                move || {
                    let value = pull()?;
                    let mapped = mapper(value, index);
                    index += 1;
                    Some(mapped)
                }
            },
            hint,
        )
    }

    /// Map each element to a sub-sequence and flatten the results in order.
    /// Loses the cardinality hint.
    pub fn flat_map<U, F>(&self, mapper: F) -> Sequence<U>
    where
        U: 'static,
        F: Fn(T) -> Sequence<U> + Send + Sync + 'static,
    {
        let parent = self.factory();
        let mapper = Arc::new(mapper);
        Sequence::from_parts(
            move || {
                let mut outer = parent();
                let mapper = Arc::clone(&mapper);
                let mut inner: Option<PullFn<U>> = None;
                move || loop {
                    if let Some(pull) = inner.as_mut() {
                        if let Some(value) = pull() {
                            return Some(value);
                        }
                        inner = None;
                    }
                    match outer() {
                        Some(item) => inner = Some(mapper(item).traverse()),
                        None => return None,
                    }
                }
            },
            Cardinality::Unknown,
        )
    }
}
