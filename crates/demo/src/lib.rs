//! Demonstration harness for the coffee shop domain.
//!
//! Builds a small sample shop, exercises the domain API in sequence and
//! writes what it reports, either as text or as a JSON report.

pub mod config;
pub mod error;

use std::io::Write;

use domain::{CoffeeId, CoffeeShop, CoffeeSummary, CustomerId, CustomerSummary, DomainError};
use serde::Serialize;

pub use config::{Config, OutputFormat};
pub use error::DemoError;

/// The sample shop and the handles the demo refers back to.
struct Sample {
    shop: CoffeeShop,
    john: CustomerId,
    espresso: CoffeeId,
    latte: CoffeeId,
}

impl Sample {
    fn build() -> Result<Self, DomainError> {
        let mut shop = CoffeeShop::new();

        let john = shop.add_customer("John")?;
        let jane = shop.add_customer("Jane")?;
        let espresso = shop.add_coffee("Espresso")?;
        let latte = shop.add_coffee("Latte")?;

        shop.create_order(john, espresso, 2.50)?;
        shop.create_order(jane, latte, 3.75)?;
        shop.create_order(john, latte, 3.50)?;

        Ok(Self {
            shop,
            john,
            espresso,
            latte,
        })
    }

    /// Tries to rename Espresso, returning the expected rejection.
    fn try_rename_espresso(&mut self) -> Result<Option<DomainError>, DomainError> {
        match self.shop.rename_coffee(self.espresso, "Espresso Roast") {
            Ok(()) => Ok(None),
            Err(e @ DomainError::ImmutableField { .. }) => Ok(Some(e)),
            Err(e) => Err(e),
        }
    }
}

#[derive(Debug, Serialize)]
struct Report {
    customers: Vec<CustomerSummary>,
    coffees: Vec<CoffeeSummary>,
    rename_error: Option<String>,
}

/// Runs the demo, writing its output to `out`.
pub fn run(config: &Config, out: &mut impl Write) -> Result<(), DemoError> {
    let mut sample = Sample::build()?;
    tracing::info!(
        customers = sample.shop.num_customers(),
        coffees = sample.shop.num_coffees(),
        orders = sample.shop.num_orders(),
        "sample shop built"
    );

    match config.output {
        OutputFormat::Text => write_text(&mut sample, out),
        OutputFormat::Json => write_json(&mut sample, out),
    }
}

fn write_text(sample: &mut Sample, out: &mut impl Write) -> Result<(), DemoError> {
    let shop = &sample.shop;
    let john = shop
        .customer(sample.john)
        .ok_or(DomainError::UnknownCustomer(sample.john))?;
    let espresso = shop
        .coffee(sample.espresso)
        .ok_or(DomainError::UnknownCoffee(sample.espresso))?;
    let latte = shop
        .coffee(sample.latte)
        .ok_or(DomainError::UnknownCoffee(sample.latte))?;

    writeln!(out, "{john}")?;
    writeln!(out, "Orders:")?;
    for order in john.orders() {
        writeln!(out, "  {order}")?;
    }

    writeln!(out, "Coffees ordered by {}:", john.name())?;
    for coffee in john.coffees() {
        writeln!(out, "  {}", coffee.name())?;
    }

    writeln!(out, "{espresso}")?;
    writeln!(out, "Customers who ordered {}:", espresso.name())?;
    for customer in espresso.customers() {
        writeln!(out, "  {}", customer.name())?;
    }

    writeln!(out, "Total orders for {}: {}", latte.name(), latte.num_orders())?;
    writeln!(
        out,
        "Average price for {}: ${:.2}",
        latte.name(),
        latte.average_price()
    )?;

    if let Some(e) = sample.try_rename_espresso()? {
        writeln!(out, "Error: {e}")?;
    }

    sample.shop.rename_customer(sample.john, "Johnny")?;
    if let Some(john) = sample.shop.customer(sample.john) {
        writeln!(out, "Updated customer name: {}", john.name())?;
    }

    Ok(())
}

fn write_json(sample: &mut Sample, out: &mut impl Write) -> Result<(), DemoError> {
    let rename_error = sample.try_rename_espresso()?.map(|e| e.to_string());
    sample.shop.rename_customer(sample.john, "Johnny")?;

    let report = Report {
        customers: sample.shop.customers().map(|c| c.summary()).collect(),
        coffees: sample.shop.coffees().map(|c| c.summary()).collect(),
        rename_error,
    };

    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}
