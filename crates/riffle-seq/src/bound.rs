//! Count-bounded operators: `take`, `skip`, `concat`.
//!
//! Counts are signed on purpose: a negative `take` yields a deterministic
//! empty sequence and a negative `skip` behaves as `skip(0)`, matching the
//! sentinel policy of the rest of the library (invalid numeric arguments are
//! well-defined results, not faults).

use crate::node::Sequence;

impl<T: 'static> Sequence<T> {
    /// First `n` elements. `n < 0` yields an empty sequence with hint
    /// `Known(0)`. Once satisfied, the parent is never pulled again.
    pub fn take(&self, n: i64) -> Sequence<T> {
        let parent = self.factory();
        let hint = self.hint().take(n);
        Sequence::from_parts(
            move || {
                let mut pull = parent();
                let mut remaining = if n < 0 { 0 } else { n };
                move || {
                    if remaining == 0 {
                        return None;
                    }
                    match pull() {
                        Some(value) => {
                            remaining -= 1;
                            Some(value)
                        }
                        None => {
                            remaining = 0;
                            None
                        }
                    }
                }
            },
            hint,
        )
    }

    /// Drop the first `n` elements. `n < 0` behaves as `skip(0)`: the
    /// sequence is unchanged.
    pub fn skip(&self, n: i64) -> Sequence<T> {
        let parent = self.factory();
        let hint = self.hint().skip(n);
        let to_skip = if n < 0 { 0 } else { n as usize };
        Sequence::from_parts(
            move || {
                let mut pull = parent();
                let mut skipped = 0usize;
                move || {
                    while skipped < to_skip {
                        pull()?;
                        skipped += 1;
                    }
                    pull()
                }
            },
            hint,
        )
    }

    /// This sequence followed by `other`, duplicates preserved. Hint is the
    /// sum when both sides are known.
    pub fn concat(&self, other: &Sequence<T>) -> Sequence<T> {
        let first = self.factory();
        let second = other.factory();
        let hint = self.hint().sum(other.hint());
        Sequence::from_parts(
            move || {
                let mut head = first();
                let mut tail = second();
                let mut head_done = false;
                move || {
                    if !head_done {
                        if let Some(value) = head() {
                            return Some(value);
                        }
                        head_done = true;
                    }
                    tail()
                }
            },
            hint,
        )
    }
}
