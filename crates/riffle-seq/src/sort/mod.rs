//! Ordering operators: full sorts (`order_by`, `reverse`) and the bounded
//! top-k selector.

pub mod order;
pub mod topk;
