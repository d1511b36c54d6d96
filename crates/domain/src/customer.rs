//! Customer entity.

use common::{CustomerId, OrderId};

use crate::error::DomainResult;
use crate::validation::validate_name;

/// A customer of the shop.
///
/// Owns its name and the ids of the orders it placed, in the order they were
/// placed. Orders are only ever appended by [`crate::CoffeeShop::create_order`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    id: CustomerId,
    name: String,
    orders: Vec<OrderId>,
}

impl Customer {
    /// Shortest allowed customer name.
    pub const MIN_NAME_LEN: usize = 1;

    /// Longest allowed customer name.
    pub const MAX_NAME_LEN: usize = 15;

    /// Creates a customer with a validated name and no orders.
    pub fn new(name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        validate_name(&name, Self::MIN_NAME_LEN, Self::MAX_NAME_LEN)?;

        Ok(Self {
            id: CustomerId::new(),
            name,
            orders: Vec::new(),
        })
    }

    /// Returns the customer ID.
    pub fn id(&self) -> CustomerId {
        self.id
    }

    /// Returns the customer's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the customer.
    ///
    /// The new name is validated; on failure the current name is kept.
    pub fn set_name(&mut self, name: impl Into<String>) -> DomainResult<()> {
        let name = name.into();
        validate_name(&name, Self::MIN_NAME_LEN, Self::MAX_NAME_LEN)?;
        self.name = name;
        Ok(())
    }

    /// Returns the ids of this customer's orders, oldest first.
    pub fn order_ids(&self) -> &[OrderId] {
        &self.orders
    }

    pub(crate) fn add_order(&mut self, order_id: OrderId) {
        self.orders.push(order_id);
    }
}

impl std::fmt::Display for Customer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Customer: {}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DomainError;

    #[test]
    fn test_new_customer_has_no_orders() {
        let customer = Customer::new("John").unwrap();
        assert_eq!(customer.name(), "John");
        assert!(customer.order_ids().is_empty());
    }

    #[test]
    fn test_name_length_bounds() {
        assert!(Customer::new("J").is_ok());
        assert!(Customer::new("a".repeat(15)).is_ok());
        assert!(matches!(
            Customer::new(""),
            Err(DomainError::InvalidName(_))
        ));
        assert!(matches!(
            Customer::new("a".repeat(16)),
            Err(DomainError::InvalidName(_))
        ));
    }

    #[test]
    fn test_set_name_can_be_repeated() {
        let mut customer = Customer::new("John").unwrap();
        customer.set_name("Johnny").unwrap();
        customer.set_name("Jack").unwrap();
        assert_eq!(customer.name(), "Jack");
    }

    #[test]
    fn test_invalid_rename_keeps_old_name() {
        let mut customer = Customer::new("John").unwrap();
        let result = customer.set_name("a much too long customer name");
        assert!(matches!(result, Err(DomainError::InvalidName(_))));
        assert_eq!(customer.name(), "John");
    }

    #[test]
    fn test_display() {
        let customer = Customer::new("John").unwrap();
        assert_eq!(customer.to_string(), "Customer: John");
    }

    #[test]
    fn test_add_order_appends_in_order() {
        let mut customer = Customer::new("John").unwrap();
        let first = OrderId::new();
        let second = OrderId::new();
        customer.add_order(first);
        customer.add_order(second);
        assert_eq!(customer.order_ids(), &[first, second]);
    }
}
