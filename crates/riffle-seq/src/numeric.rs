//! Natural-order reducers for element types that support them directly.

use std::ops::Add;

use crate::node::Sequence;

impl<T> Sequence<T>
where
    T: Default + Add<Output = T> + 'static,
{
    /// Sum of all elements; the type's default (zero) for an empty sequence.
    pub fn sum(&self) -> T {
        self.fold(T::default(), |acc, value| acc + value)
    }
}

impl<T: Ord + 'static> Sequence<T> {
    /// Minimum by natural order, if any.
    pub fn min(&self) -> Option<T> {
        self.min_by(|a, b| a.cmp(b))
    }

    /// Maximum by natural order, if any.
    pub fn max(&self) -> Option<T> {
        self.max_by(|a, b| a.cmp(b))
    }
}
