//! Coffee entity.

use common::{CoffeeId, OrderId};

use crate::error::{DomainError, DomainResult};
use crate::validation::validate_name;

/// A coffee on the menu.
///
/// The name is fixed when the coffee is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coffee {
    id: CoffeeId,
    name: String,
    orders: Vec<OrderId>,
}

impl Coffee {
    /// Shortest allowed coffee name.
    pub const MIN_NAME_LEN: usize = 3;

    /// Longest allowed coffee name.
    pub const MAX_NAME_LEN: usize = 50;

    /// Creates a coffee with a validated name and no orders.
    pub fn new(name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        validate_name(&name, Self::MIN_NAME_LEN, Self::MAX_NAME_LEN)?;

        Ok(Self {
            id: CoffeeId::new(),
            name,
            orders: Vec::new(),
        })
    }

    /// Returns the coffee ID.
    pub fn id(&self) -> CoffeeId {
        self.id
    }

    /// Returns the coffee's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Always fails: a coffee keeps the name it was created with.
    pub fn set_name(&mut self, _name: impl Into<String>) -> DomainResult<()> {
        Err(DomainError::ImmutableField {
            field: "coffee name",
        })
    }

    /// Returns the ids of orders for this coffee, oldest first.
    pub fn order_ids(&self) -> &[OrderId] {
        &self.orders
    }

    pub(crate) fn add_order(&mut self, order_id: OrderId) {
        self.orders.push(order_id);
    }
}

impl std::fmt::Display for Coffee {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Coffee: {}", self.name)
    }
}
