#![forbid(unsafe_code)]
//! riffle-core: value types shared by every riffle crate.
//!
//! This crate holds the pieces that are pure data: the cardinality hint and
//! its propagation rules, the key-value pair produced by map-sourced
//! pipelines, and the canonical error type. No traversal machinery lives
//! here — `riffle-seq` builds the pipeline nodes on top of these types.

pub mod error;
pub mod hint;
pub mod kv;
pub mod prelude;
