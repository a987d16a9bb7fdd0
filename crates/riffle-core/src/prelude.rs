//! Convenient re-exports for downstream crates.

pub use crate::error::{Error, Result};
pub use crate::hint::Cardinality;
pub use crate::kv::KeyValue;
