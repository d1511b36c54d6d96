//! The coffee shop registry, owner of every entity and link.

use std::collections::HashMap;
use std::hash::Hash;

use common::{CoffeeId, CustomerId, OrderId};

use crate::coffee::Coffee;
use crate::customer::Customer;
use crate::error::{DomainError, DomainResult};
use crate::order::{Order, Price};
use crate::view::{CoffeeView, CustomerView, OrderView};

/// Entities of one kind, kept in insertion order and indexed by id.
#[derive(Debug)]
struct Registry<K, V> {
    entries: Vec<V>,
    index: HashMap<K, usize>,
}

impl<K: Copy + Eq + Hash, V> Registry<K, V> {
    fn insert(&mut self, key: K, value: V) {
        self.index.insert(key, self.entries.len());
        self.entries.push(value);
    }

    fn get(&self, key: &K) -> Option<&V> {
        self.index.get(key).map(|&i| &self.entries[i])
    }

    fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.index.get(key).map(|&i| &mut self.entries[i])
    }

    fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    fn iter(&self) -> std::slice::Iter<'_, V> {
        self.entries.iter()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<K, V> Default for Registry<K, V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

/// In-memory coffee shop.
///
/// Owns all customers, coffees and orders. Entities reference each other by
/// id; every order id stored on a customer or coffee resolves to an order in
/// this shop whose `customer_id`/`coffee_id` points back at it.
///
/// Mutations take `&mut self`, so callers sharing a shop across threads must
/// wrap it in a single lock.
#[derive(Debug, Default)]
pub struct CoffeeShop {
    customers: Registry<CustomerId, Customer>,
    coffees: Registry<CoffeeId, Coffee>,
    orders: Registry<OrderId, Order>,
}

impl CoffeeShop {
    /// Creates an empty shop.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new customer.
    #[tracing::instrument(skip(self, name))]
    pub fn add_customer(&mut self, name: impl Into<String>) -> DomainResult<CustomerId> {
        let customer = Customer::new(name)?;
        let customer_id = customer.id();

        tracing::debug!(%customer_id, name = customer.name(), "customer registered");
        self.customers.insert(customer_id, customer);
        Ok(customer_id)
    }

    /// Adds a new coffee to the menu.
    #[tracing::instrument(skip(self, name))]
    pub fn add_coffee(&mut self, name: impl Into<String>) -> DomainResult<CoffeeId> {
        let coffee = Coffee::new(name)?;
        let coffee_id = coffee.id();

        tracing::debug!(%coffee_id, name = coffee.name(), "coffee added");
        self.coffees.insert(coffee_id, coffee);
        Ok(coffee_id)
    }

    /// Renames a customer, re-validating the new name.
    #[tracing::instrument(skip(self, name))]
    pub fn rename_customer(
        &mut self,
        customer_id: CustomerId,
        name: impl Into<String>,
    ) -> DomainResult<()> {
        self.customers
            .get_mut(&customer_id)
            .ok_or(DomainError::UnknownCustomer(customer_id))?
            .set_name(name)
    }

    /// Attempts to rename a coffee, which always fails for a known coffee.
    #[tracing::instrument(skip(self, name))]
    pub fn rename_coffee(
        &mut self,
        coffee_id: CoffeeId,
        name: impl Into<String>,
    ) -> DomainResult<()> {
        self.coffees
            .get_mut(&coffee_id)
            .ok_or(DomainError::UnknownCoffee(coffee_id))?
            .set_name(name)
    }

    /// Places an order of `coffee_id` for `customer_id` at `price`.
    ///
    /// The customer, the coffee and the price are all checked before anything
    /// is stored. On success the order is linked exactly once into both the
    /// customer's and the coffee's order lists.
    #[tracing::instrument(skip(self))]
    pub fn create_order(
        &mut self,
        customer_id: CustomerId,
        coffee_id: CoffeeId,
        price: f64,
    ) -> DomainResult<OrderId> {
        let order = match self.validate_order(customer_id, coffee_id, price) {
            Ok(order) => order,
            Err(e) => {
                metrics::counter!("coffee_shop_orders_rejected").increment(1);
                tracing::warn!(error = %e, "order rejected");
                return Err(e);
            }
        };
        let order_id = order.id();

        if let Some(customer) = self.customers.get_mut(&customer_id) {
            customer.add_order(order_id);
        }
        if let Some(coffee) = self.coffees.get_mut(&coffee_id) {
            coffee.add_order(order_id);
        }
        self.orders.insert(order_id, order);

        metrics::counter!("coffee_shop_orders_created").increment(1);
        tracing::debug!(%order_id, "order created");
        Ok(order_id)
    }

    fn validate_order(
        &self,
        customer_id: CustomerId,
        coffee_id: CoffeeId,
        price: f64,
    ) -> DomainResult<Order> {
        if !self.customers.contains(&customer_id) {
            return Err(DomainError::UnknownCustomer(customer_id));
        }
        if !self.coffees.contains(&coffee_id) {
            return Err(DomainError::UnknownCoffee(coffee_id));
        }
        let price = Price::new(price)?;

        Ok(Order::new(customer_id, coffee_id, price))
    }
}

// Query methods
impl CoffeeShop {
    /// Returns a view of a customer.
    pub fn customer(&self, customer_id: CustomerId) -> Option<CustomerView<'_>> {
        self.customers
            .get(&customer_id)
            .map(|customer| CustomerView::new(self, customer))
    }

    /// Returns a view of a coffee.
    pub fn coffee(&self, coffee_id: CoffeeId) -> Option<CoffeeView<'_>> {
        self.coffees
            .get(&coffee_id)
            .map(|coffee| CoffeeView::new(self, coffee))
    }

    /// Returns a view of an order together with its customer and coffee.
    pub fn order(&self, order_id: OrderId) -> Option<OrderView<'_>> {
        let order = self.orders.get(&order_id)?;
        let customer = self.customers.get(&order.customer_id())?;
        let coffee = self.coffees.get(&order.coffee_id())?;
        Some(OrderView::new(self, order, customer, coffee))
    }

    /// Returns all customers in registration order.
    pub fn customers(&self) -> impl Iterator<Item = CustomerView<'_>> {
        self.customers
            .iter()
            .map(move |customer| CustomerView::new(self, customer))
    }

    /// Returns all coffees in the order they were added.
    pub fn coffees(&self) -> impl Iterator<Item = CoffeeView<'_>> {
        self.coffees
            .iter()
            .map(move |coffee| CoffeeView::new(self, coffee))
    }

    /// Returns the number of registered customers.
    pub fn num_customers(&self) -> usize {
        self.customers.len()
    }

    /// Returns the number of coffees on the menu.
    pub fn num_coffees(&self) -> usize {
        self.coffees.len()
    }

    /// Returns the number of orders placed.
    pub fn num_orders(&self) -> usize {
        self.orders.len()
    }
}
