//! Order entity and related types.

mod value_objects;

pub use value_objects::Price;

use chrono::{DateTime, Utc};
use common::{CoffeeId, CustomerId, OrderId};
use serde::Serialize;

/// An order of one coffee by one customer.
///
/// Orders are immutable once placed. They are created only through
/// [`crate::CoffeeShop::create_order`], which validates both references and
/// the price before linking the order to its customer and coffee.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    id: OrderId,
    customer_id: CustomerId,
    coffee_id: CoffeeId,
    price: Price,
    created_at: DateTime<Utc>,
}

impl Order {
    pub(crate) fn new(customer_id: CustomerId, coffee_id: CoffeeId, price: Price) -> Self {
        Self {
            id: OrderId::new(),
            customer_id,
            coffee_id,
            price,
            created_at: Utc::now(),
        }
    }

    /// Returns the order ID.
    pub fn id(&self) -> OrderId {
        self.id
    }

    /// Returns the customer who placed the order.
    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    /// Returns the coffee that was ordered.
    pub fn coffee_id(&self) -> CoffeeId {
        self.coffee_id
    }

    /// Returns the price paid.
    pub fn price(&self) -> Price {
        self.price
    }

    /// Returns when the order was placed.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
