//! Customers domain module: purchase records and the in-memory query engine.
//!
//! Everything here is deterministic domain logic over caller-owned data
//! (no IO, no storage). `SharedCustomers` adds lock-based sharing for callers
//! that need it.

pub mod customer;
pub mod engine;
pub mod field;
#[cfg(any(test, feature = "fixtures"))]
pub mod fixtures;
pub mod product;
pub mod shared;

pub use customer::Customer;
pub use engine::{CustomerQueryEngine, SpendPolicy};
pub use field::CustomerField;
pub use product::Product;
pub use shared::SharedCustomers;
