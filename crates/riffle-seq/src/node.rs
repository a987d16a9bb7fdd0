//! The pipeline node: traversal factory + cardinality hint.
//!
//! Invariants:
//! - A `Sequence` holds no mutable iteration state. All counters, flags,
//!   seen-sets, and nested cursors live inside the pull function returned by
//!   `traverse()`, created fresh on every call.
//! - Pull functions are fused: after the first `None` they return `None`
//!   forever. Every constructor in this crate preserves that property.
//! - Operator constructors capture the parent's factory (an `Arc` clone),
//!   never a pull function obtained from it. Capturing a live pull function
//!   would silently corrupt every traversal after the first.

use std::sync::Arc;

use riffle_core::hint::Cardinality;

/// Ephemeral pull cursor. Yields `Some(value)` while elements remain, then
/// `None` forever. Exclusively owned by the call site that obtained it.
pub type PullFn<T> = Box<dyn FnMut() -> Option<T>>;

/// One immutable pipeline stage: a traversal factory plus a cardinality hint.
///
/// Cloning is cheap (an `Arc` clone) and the clone shares the same stage
/// description. A `Sequence` may be shared read-only across threads; each
/// thread calls `traverse()` for its own cursor.
pub struct Sequence<T> {
    factory: Arc<dyn Fn() -> PullFn<T> + Send + Sync>,
    hint: Cardinality,
}

impl<T> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        Self {
            factory: Arc::clone(&self.factory),
            hint: self.hint,
        }
    }
}

impl<T: 'static> Sequence<T> {
    /// Build a stage from a traversal factory. The factory must construct a
    /// *fresh* pull closure per invocation; shared state inside `factory`
    /// itself (beyond immutable captures) breaks re-traversability.
    pub(crate) fn from_parts<F, P>(factory: F, hint: Cardinality) -> Self
    where
        F: Fn() -> P + Send + Sync + 'static,
        P: FnMut() -> Option<T> + 'static,
    {
        Self {
            factory: Arc::new(move || Box::new(factory()) as PullFn<T>),
            hint,
        }
    }

    /// Start a new traversal. Every call returns an independent cursor,
    /// correctly initialized through the whole ancestor chain.
    pub fn traverse(&self) -> PullFn<T> {
        (self.factory)()
    }

    /// The element-count hint for this stage.
    pub fn hint(&self) -> Cardinality {
        self.hint
    }

    /// Shared handle to this stage's traversal factory, for operators that
    /// wrap it. This is the only thing an operator may capture of its parent.
    pub(crate) fn factory(&self) -> Arc<dyn Fn() -> PullFn<T> + Send + Sync> {
        Arc::clone(&self.factory)
    }
}
