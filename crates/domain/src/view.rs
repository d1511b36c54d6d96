//! Borrowed views for traversing the customer, coffee and order graph.
//!
//! A view pairs an entity with the [`CoffeeShop`] that owns it, so queries
//! such as "which coffees has this customer ordered" can follow links without
//! the entities holding references to each other.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use common::{CoffeeId, CustomerId, OrderId};
use serde::{Deserialize, Serialize};

use crate::coffee::Coffee;
use crate::customer::Customer;
use crate::order::{Order, Price};
use crate::shop::CoffeeShop;

/// Read-only view of a customer.
#[derive(Debug, Clone, Copy)]
pub struct CustomerView<'a> {
    shop: &'a CoffeeShop,
    customer: &'a Customer,
}

impl<'a> CustomerView<'a> {
    pub(crate) fn new(shop: &'a CoffeeShop, customer: &'a Customer) -> Self {
        Self { shop, customer }
    }

    /// Returns the underlying entity.
    pub fn customer(self) -> &'a Customer {
        self.customer
    }

    pub fn id(self) -> CustomerId {
        self.customer.id()
    }

    pub fn name(self) -> &'a str {
        self.customer.name()
    }

    /// Returns this customer's orders, oldest first.
    pub fn orders(self) -> impl Iterator<Item = OrderView<'a>> {
        let shop = self.shop;
        self.customer
            .order_ids()
            .iter()
            .filter_map(move |&order_id| shop.order(order_id))
    }

    /// Returns the number of orders this customer placed.
    pub fn num_orders(self) -> usize {
        self.customer.order_ids().len()
    }

    /// Returns the distinct coffees this customer ordered, in the order they
    /// were first ordered.
    pub fn coffees(self) -> Vec<CoffeeView<'a>> {
        let mut seen = HashSet::new();
        self.orders()
            .map(OrderView::coffee)
            .filter(|coffee| seen.insert(coffee.id()))
            .collect()
    }

    /// Returns a serializable snapshot of this customer.
    pub fn summary(self) -> CustomerSummary {
        CustomerSummary {
            id: self.id(),
            name: self.name().to_string(),
            num_orders: self.num_orders(),
            coffees: self
                .coffees()
                .into_iter()
                .map(|coffee| coffee.name().to_string())
                .collect(),
        }
    }
}

impl std::fmt::Display for CustomerView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self.customer, f)
    }
}

/// Read-only view of a coffee.
#[derive(Debug, Clone, Copy)]
pub struct CoffeeView<'a> {
    shop: &'a CoffeeShop,
    coffee: &'a Coffee,
}

impl<'a> CoffeeView<'a> {
    pub(crate) fn new(shop: &'a CoffeeShop, coffee: &'a Coffee) -> Self {
        Self { shop, coffee }
    }

    /// Returns the underlying entity.
    pub fn coffee(self) -> &'a Coffee {
        self.coffee
    }

    pub fn id(self) -> CoffeeId {
        self.coffee.id()
    }

    pub fn name(self) -> &'a str {
        self.coffee.name()
    }

    /// Returns the orders for this coffee, oldest first.
    pub fn orders(self) -> impl Iterator<Item = OrderView<'a>> {
        let shop = self.shop;
        self.coffee
            .order_ids()
            .iter()
            .filter_map(move |&order_id| shop.order(order_id))
    }

    /// Returns the distinct customers who ordered this coffee, in the order
    /// they first ordered it.
    pub fn customers(self) -> Vec<CustomerView<'a>> {
        let mut seen = HashSet::new();
        self.orders()
            .map(OrderView::customer)
            .filter(|customer| seen.insert(customer.id()))
            .collect()
    }

    /// Returns the number of orders for this coffee.
    pub fn num_orders(self) -> usize {
        self.coffee.order_ids().len()
    }

    /// Returns the mean price paid for this coffee, or `0.0` with no orders.
    pub fn average_price(self) -> f64 {
        let (total, count) = self
            .orders()
            .fold((0.0, 0usize), |(total, count), order| {
                (total + order.price().value(), count + 1)
            });

        if count == 0 {
            0.0
        } else {
            total / count as f64
        }
    }

    /// Returns a serializable snapshot of this coffee.
    pub fn summary(self) -> CoffeeSummary {
        CoffeeSummary {
            id: self.id(),
            name: self.name().to_string(),
            num_orders: self.num_orders(),
            average_price: self.average_price(),
            customers: self
                .customers()
                .into_iter()
                .map(|customer| customer.name().to_string())
                .collect(),
        }
    }
}

impl std::fmt::Display for CoffeeView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self.coffee, f)
    }
}

/// Read-only view of an order with its customer and coffee resolved.
#[derive(Debug, Clone, Copy)]
pub struct OrderView<'a> {
    shop: &'a CoffeeShop,
    order: &'a Order,
    customer: &'a Customer,
    coffee: &'a Coffee,
}

impl<'a> OrderView<'a> {
    pub(crate) fn new(
        shop: &'a CoffeeShop,
        order: &'a Order,
        customer: &'a Customer,
        coffee: &'a Coffee,
    ) -> Self {
        Self {
            shop,
            order,
            customer,
            coffee,
        }
    }

    /// Returns the underlying entity.
    pub fn order(self) -> &'a Order {
        self.order
    }

    pub fn id(self) -> OrderId {
        self.order.id()
    }

    /// Returns the customer who placed the order.
    pub fn customer(self) -> CustomerView<'a> {
        CustomerView::new(self.shop, self.customer)
    }

    /// Returns the coffee that was ordered.
    pub fn coffee(self) -> CoffeeView<'a> {
        CoffeeView::new(self.shop, self.coffee)
    }

    pub fn price(self) -> Price {
        self.order.price()
    }

    pub fn created_at(self) -> DateTime<Utc> {
        self.order.created_at()
    }
}

impl std::fmt::Display for OrderView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Order({}, {}, {})",
            self.customer.name(),
            self.coffee.name(),
            self.order.price()
        )
    }
}

/// Snapshot of a customer and the coffees they ordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerSummary {
    pub id: CustomerId,
    pub name: String,
    pub num_orders: usize,
    /// Names of distinct coffees ordered, first order first.
    pub coffees: Vec<String>,
}

/// Snapshot of a coffee's order statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoffeeSummary {
    pub id: CoffeeId,
    pub name: String,
    pub num_orders: usize,
    pub average_price: f64,
    /// Names of distinct customers, first order first.
    pub customers: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_price_empty_is_zero() {
        let mut shop = CoffeeShop::new();
        let latte = shop.add_coffee("Latte").unwrap();

        assert_eq!(shop.coffee(latte).unwrap().average_price(), 0.0);
    }

    #[test]
    fn test_average_price() {
        let mut shop = CoffeeShop::new();
        let john = shop.add_customer("John").unwrap();
        let latte = shop.add_coffee("Latte").unwrap();
        shop.create_order(john, latte, 3.75).unwrap();
        shop.create_order(john, latte, 3.50).unwrap();

        let latte = shop.coffee(latte).unwrap();
        assert_eq!(latte.num_orders(), 2);
        assert_eq!(latte.average_price(), 3.625);
    }

    #[test]
    fn test_coffees_are_distinct_in_first_order() {
        let mut shop = CoffeeShop::new();
        let john = shop.add_customer("John").unwrap();
        let espresso = shop.add_coffee("Espresso").unwrap();
        let latte = shop.add_coffee("Latte").unwrap();
        shop.create_order(john, espresso, 2.50).unwrap();
        shop.create_order(john, latte, 3.50).unwrap();
        shop.create_order(john, espresso, 2.75).unwrap();

        let ids: Vec<_> = shop
            .customer(john)
            .unwrap()
            .coffees()
            .into_iter()
            .map(CoffeeView::id)
            .collect();
        assert_eq!(ids, [espresso, latte]);
    }

    #[test]
    fn test_customers_deduplicated_by_identity_not_name() {
        let mut shop = CoffeeShop::new();
        let first = shop.add_customer("Sam").unwrap();
        let second = shop.add_customer("Sam").unwrap();
        let mocha = shop.add_coffee("Mocha").unwrap();
        shop.create_order(first, mocha, 4.0).unwrap();
        shop.create_order(second, mocha, 4.0).unwrap();
        shop.create_order(first, mocha, 4.0).unwrap();

        let ids: Vec<_> = shop
            .coffee(mocha)
            .unwrap()
            .customers()
            .into_iter()
            .map(CustomerView::id)
            .collect();
        assert_eq!(ids, [first, second]);
    }

    #[test]
    fn test_order_view_resolves_links() {
        let mut shop = CoffeeShop::new();
        let jane = shop.add_customer("Jane").unwrap();
        let latte = shop.add_coffee("Latte").unwrap();
        let order_id = shop.create_order(jane, latte, 3.75).unwrap();

        let order = shop.order(order_id).unwrap();
        assert_eq!(order.customer().id(), jane);
        assert_eq!(order.coffee().id(), latte);
        assert_eq!(order.to_string(), "Order(Jane, Latte, $3.75)");
    }

    #[test]
    fn test_view_display_matches_entity() {
        let mut shop = CoffeeShop::new();
        let jane = shop.add_customer("Jane").unwrap();
        let latte = shop.add_coffee("Latte").unwrap();

        assert_eq!(shop.customer(jane).unwrap().to_string(), "Customer: Jane");
        assert_eq!(shop.coffee(latte).unwrap().to_string(), "Coffee: Latte");
    }
}
