use criterion::{Criterion, criterion_group, criterion_main};
use domain::{CoffeeId, CoffeeShop, CustomerId};

fn populated_shop(customers: usize, orders_per_customer: usize) -> (CoffeeShop, CoffeeId) {
    let mut shop = CoffeeShop::new();
    let latte = shop.add_coffee("Latte").unwrap();
    let espresso = shop.add_coffee("Espresso").unwrap();

    for i in 0..customers {
        let customer = shop.add_customer(format!("Customer {i}")).unwrap();
        for j in 0..orders_per_customer {
            let coffee = if j % 2 == 0 { latte } else { espresso };
            shop.create_order(customer, coffee, 1.0 + (j % 9) as f64)
                .unwrap();
        }
    }

    (shop, latte)
}

fn bench_create_order(c: &mut Criterion) {
    let mut shop = CoffeeShop::new();
    let customer: CustomerId = shop.add_customer("Bench").unwrap();
    let coffee = shop.add_coffee("Benchmark Roast").unwrap();

    c.bench_function("domain/create_order", |b| {
        b.iter(|| {
            shop.create_order(customer, coffee, 3.5).unwrap();
        });
    });
}

fn bench_average_price(c: &mut Criterion) {
    let (shop, latte) = populated_shop(100, 10);

    c.bench_function("domain/average_price_500_orders", |b| {
        b.iter(|| shop.coffee(latte).unwrap().average_price());
    });
}

fn bench_distinct_customers(c: &mut Criterion) {
    let (shop, latte) = populated_shop(100, 10);

    c.bench_function("domain/distinct_customers_500_orders", |b| {
        b.iter(|| shop.coffee(latte).unwrap().customers().len());
    });
}

criterion_group!(
    benches,
    bench_create_order,
    bench_average_price,
    bench_distinct_customers
);
criterion_main!(benches);
