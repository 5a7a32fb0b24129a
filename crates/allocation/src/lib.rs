//! Stock allocation domain module.
//!
//! Decides which batch of stock an order line is taken from, implemented purely
//! as deterministic domain logic (no IO, no HTTP, no storage).
//!
//! ## Concurrency
//!
//! Every mutating operation takes `&mut Batch`, so the eligibility check and
//! the mutation that follows it cannot interleave with another writer. Callers
//! that share batches between threads must serialize access themselves, e.g.
//! by keeping the batches for a SKU behind a `Mutex` and holding the guard for
//! the whole `allocate` call.

pub mod allocate;
pub mod batch;
pub mod order_line;

pub use allocate::allocate;
pub use batch::{Batch, Eligibility, by_priority};
pub use order_line::OrderLine;
