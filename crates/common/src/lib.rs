//! Shared identifier types for the coffee shop domain.

pub mod types;

pub use types::{CoffeeId, CustomerId, OrderId};
