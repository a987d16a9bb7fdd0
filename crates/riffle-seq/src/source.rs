//! Leaf producers: wrap an in-memory collection (or a generator) into the
//! pull contract with no parent stage.
//!
//! Two slice-backed variants are offered: `from_shared` keeps a handle to the
//! caller's backing storage (no element copies at construction), while
//! `from_slice`/`from_vec` snapshot the data so the pipeline is isolated from
//! the caller afterwards.

use std::sync::Arc;

use riffle_core::hint::Cardinality;

use crate::node::Sequence;

impl<T: Clone + Send + Sync + 'static> Sequence<T> {
    /// Zero-copy leaf over shared backing storage. Elements are cloned out
    /// lazily, one per pull.
    pub fn from_shared(data: Arc<[T]>) -> Sequence<T> {
        let hint = Cardinality::exact(data.len());
        Sequence::from_parts(
            move || {
                let data = Arc::clone(&data);
                let mut index = 0usize;
                move || {
                    if index >= data.len() {
                        return None;
                    }
                    let value = data[index].clone();
                    index += 1;
                    Some(value)
                }
            },
            hint,
        )
    }

    /// Defensive-snapshot leaf: copies the slice at construction time.
    pub fn from_slice(slice: &[T]) -> Sequence<T> {
        Self::from_vec(slice.to_vec())
    }

    /// Snapshot leaf taking ownership of the vector.
    pub fn from_vec(data: Vec<T>) -> Sequence<T> {
        Self::from_shared(Arc::from(data))
    }
}

impl<T: 'static> Sequence<T> {
    /// A sequence with no elements. Hint `Known(0)`.
    pub fn empty() -> Sequence<T> {
        Sequence::from_parts(|| || None, Cardinality::Known(0))
    }

    /// Leaf over an opaque generator, possibly unbounded. `make` is invoked
    /// once per traversal and must return a fresh generator closure. The
    /// generator is fused here even if the closure itself would resurrect.
    ///
    /// Termination is the consumer's responsibility: bound an unbounded
    /// generator with `take`, `take_while`, or `top_k`.
    pub fn generate<G, F>(make: G) -> Sequence<T>
    where
        G: Fn() -> F + Send + Sync + 'static,
        F: FnMut() -> Option<T> + 'static,
    {
        Sequence::from_parts(
            move || {
                let mut inner = make();
                let mut done = false;
                move || {
                    if done {
                        return None;
                    }
                    match inner() {
                        Some(value) => Some(value),
                        None => {
                            done = true;
                            None
                        }
                    }
                }
            },
            Cardinality::Unknown,
        )
    }

}

impl Sequence<i64> {
    /// Integers `start, start+1, ..., start+count-1`. A negative `count`
    /// yields a deterministic empty sequence, not a fault.
    pub fn range(start: i64, count: i64) -> Sequence<i64> {
        let count = if count < 0 { 0 } else { count };
        Sequence::from_parts(
            move || {
                let mut offset = 0i64;
                move || {
                    if offset >= count {
                        return None;
                    }
                    let value = start + offset;
                    offset += 1;
                    Some(value)
                }
            },
            Cardinality::exact(count as usize),
        )
    }
}
