//! Cardinality hints: known/unknown element counts flowing through a pipeline.
//!
//! Every pipeline stage carries a `Cardinality` describing how many elements a
//! full traversal of that stage yields. Operators combine their parent's hint
//! with the combinators below. The hint exists purely so terminal evaluators
//! can size their allocations up front; it must never stand in for an actual
//! traversal (two rules — `take` and `cap` — report an upper bound when the
//! parent count is unknown, matching the behavior the library is modeled on).

use serde::{Deserialize, Serialize};

/// Element-count estimate for one pipeline stage.
///
/// Modeled as an explicit tagged value rather than an optional integer so
/// "zero elements" and "no idea" can never be confused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cardinality {
    /// A full traversal yields this many elements (or at most this many, for
    /// the upper-bound rules noted on `take`/`cap`).
    Known(usize),
    /// The count cannot be determined without traversing.
    Unknown,
}

impl Cardinality {
    /// Hint for a leaf whose backing collection length is known.
    pub fn exact(n: usize) -> Self {
        Cardinality::Known(n)
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Cardinality::Known(_))
    }

    /// The known count, if any.
    pub fn known(&self) -> Option<usize> {
        match self {
            Cardinality::Known(n) => Some(*n),
            Cardinality::Unknown => None,
        }
    }

    /// Capacity to preallocate for a materialization of this stage.
    /// Zero when unknown; callers grow organically in that case.
    pub fn capacity(&self) -> usize {
        self.known().unwrap_or(0)
    }

    /// Hint after `take(n)`.
    ///
    /// Negative `n` means an empty result. An unknown parent still yields
    /// `Known(n)`: the stage can never produce more than `n`, and an upper
    /// bound is a safe preallocation size.
    pub fn take(self, n: i64) -> Self {
        if n < 0 {
            return Cardinality::Known(0);
        }
        let n = n as usize;
        match self {
            Cardinality::Known(p) => Cardinality::Known(p.min(n)),
            Cardinality::Unknown => Cardinality::Known(n),
        }
    }

    /// Hint after `skip(n)`. Negative `n` behaves as `skip(0)`.
    pub fn skip(self, n: i64) -> Self {
        let n = if n < 0 { 0 } else { n as usize };
        match self {
            Cardinality::Known(p) => Cardinality::Known(p.saturating_sub(n)),
            Cardinality::Unknown => Cardinality::Unknown,
        }
    }

    /// Hint after concatenation: the sum when both sides are known.
    pub fn sum(self, other: Self) -> Self {
        match (self, other) {
            (Cardinality::Known(a), Cardinality::Known(b)) => Cardinality::Known(a + b),
            _ => Cardinality::Unknown,
        }
    }

    /// Hint after a top-k selection retaining at most `k` elements.
    /// `k` is always a valid upper bound, even over an unknown parent.
    pub fn cap(self, k: usize) -> Self {
        match self {
            Cardinality::Known(p) => Cardinality::Known(p.min(k)),
            Cardinality::Unknown => Cardinality::Known(k),
        }
    }
}
