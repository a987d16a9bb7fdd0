//! Predicate-driven operators: `filter`, `take_while`, `skip_while`.
//!
//! All three lose the cardinality hint: how many elements satisfy a predicate
//! is unknowable without traversing.

use std::sync::Arc;

use riffle_core::hint::Cardinality;

use crate::node::Sequence;

impl<T: 'static> Sequence<T> {
    /// Keep only elements matching the predicate.
    pub fn filter<P>(&self, predicate: P) -> Sequence<T>
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let parent = self.factory();
        let predicate = Arc::new(predicate);
        Sequence::from_parts(
            move || {
                let mut pull = parent();
                let predicate = Arc::clone(&predicate);
                move || loop {
                    let value = pull()?;
                    if predicate(&value) {
                        return Some(value);
                    }
                }
            },
            Cardinality::Unknown,
        )
    }

    /// Yield elements until the first one failing the predicate, then stop.
    /// The failing element is consumed from the parent but never emitted.
    pub fn take_while<P>(&self, predicate: P) -> Sequence<T>
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let parent = self.factory();
        let predicate = Arc::new(predicate);
        Sequence::from_parts(
            move || {
                let mut pull = parent();
                let predicate = Arc::clone(&predicate);
                let mut done = false;
                move || {
                    if done {
                        return None;
                    }
                    match pull() {
                        Some(value) if predicate(&value) => Some(value),
                        _ => {
                            done = true;
                            None
                        }
                    }
                }
            },
            Cardinality::Unknown,
        )
    }

    /// Drop elements while the predicate holds; from the first failing
    /// element on, yield everything unchanged.
    pub fn skip_while<P>(&self, predicate: P) -> Sequence<T>
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let parent = self.factory();
        let predicate = Arc::new(predicate);
        Sequence::from_parts(
            move || {
                let mut pull = parent();
                let predicate = Arc::clone(&predicate);
                let mut skipping = true;
                move || {
                    if skipping {
                        loop {
                            match pull() {
                                Some(value) => {
                                    if !predicate(&value) {
                                        skipping = false;
                                        return Some(value);
                                    }
                                }
                                None => {
                                    skipping = false;
                                    return None;
                                }
                            }
                        }
                    }
                    pull()
                }
            },
            Cardinality::Unknown,
        )
    }
}
