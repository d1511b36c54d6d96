//! Domain layer for the coffee shop.
//!
//! This crate provides:
//! - Customer and Coffee entities with validated names
//! - Order, the join entity relating one customer to one coffee at a price
//! - CoffeeShop, the registry that owns every entity and links orders
//! - Borrowed views for traversing the relationship graph

pub mod coffee;
pub mod customer;
pub mod error;
pub mod order;
pub mod shop;
pub mod validation;
pub mod view;

pub use coffee::Coffee;
pub use common::{CoffeeId, CustomerId, OrderId};
pub use customer::Customer;
pub use error::{DomainError, DomainResult};
pub use order::{Order, Price};
pub use shop::CoffeeShop;
pub use validation::{ValidationError, validate_name};
pub use view::{CoffeeSummary, CoffeeView, CustomerSummary, CustomerView, OrderView};
