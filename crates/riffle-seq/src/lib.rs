#![forbid(unsafe_code)]
//! riffle-seq: lazy sequence pipeline nodes and operators.
//!
//! Design intent:
//! - A [`Sequence`] is an immutable description of a pipeline stage. Building
//!   a pipeline does no work; all traversal state lives in the pull function
//!   a terminal obtains from [`Sequence::traverse`].
//! - Every operator captures its parent's traversal *factory*, never a live
//!   pull function, so a constructed pipeline can be materialized any number
//!   of times with independent results.
//! - Each stage carries a [`Cardinality`] hint used exclusively to size
//!   allocations in terminal evaluators.

pub mod node;

pub mod bound;
pub mod filter;
pub mod map;
pub mod source;

pub mod distinct;
pub mod group;
pub mod kv;
pub mod set;
pub mod sort;

pub mod numeric;
pub mod terminal;

pub use node::{PullFn, Sequence};
pub use riffle_core::prelude::{Cardinality, Error, KeyValue, Result};
