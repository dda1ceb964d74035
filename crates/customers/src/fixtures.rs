//! Deterministic sample data for tests, benchmarks and the report binary.

use storefront_core::{CustomerId, Price, ProductId};

use crate::customer::Customer;
use crate::product::Product;

/// Product named `"Product: {id}"`.
pub fn product(id: u64, price: u64) -> Product {
    Product::new(ProductId::new(id), format!("Product: {id}"), Price::new(price))
}

/// `count` customers named `"Customer: {i}"` with empty purchase lists.
pub fn customers(count: usize) -> Vec<Customer> {
    (0..count as u64)
        .map(|i| Customer::new(CustomerId::new(i), format!("Customer: {i}")))
        .collect()
}

/// `count` customers where customer `i` bought products `0..i-2` once each.
///
/// The first three customers have no orders and customer 3 has exactly one.
/// Product `j` costs `(j + 1) * 100`.
pub fn test_data(count: usize) -> Vec<Customer> {
    let mut customers = customers(count);
    for (i, customer) in customers.iter_mut().enumerate() {
        for j in 0..i.saturating_sub(2) as u64 {
            customer.add_product(product(j, (j + 1) * 100));
        }
    }
    customers
}
