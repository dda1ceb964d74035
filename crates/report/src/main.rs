use anyhow::{Context, Result};

use storefront_core::{DomainError, Price};
use storefront_customers::{fixtures, CustomerQueryEngine};

const DEFAULT_CUSTOMERS: usize = 10;

fn main() -> Result<()> {
    storefront_observability::init();

    let count = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<usize>()
            .with_context(|| format!("customer count must be a non-negative integer, got {arg:?}"))?,
        None => DEFAULT_CUSTOMERS,
    };

    let mut customers = fixtures::test_data(count);
    tracing::info!("generated {} sample customers", customers.len());

    let engine = CustomerQueryEngine::new(&customers);
    let threshold = Price::try_from_major(5.0)?;
    tracing::info!(
        no_orders = engine.customers_with_no_orders().len(),
        bought_more_than_one = engine.customers_who_bought_more_than(1).len(),
        spent_more_than = engine.customers_who_spent_more_than(threshold).len(),
        %threshold,
        "customer segments"
    );

    match engine.avg_orders(false) {
        Ok(avg) => tracing::info!(avg_with_orders = avg, "average spend"),
        Err(DomainError::NoData(reason)) => tracing::warn!("no average spend: {}", reason),
        Err(e) => return Err(e.into()),
    }

    match engine.most_popular_product() {
        Ok(products) => {
            for product in &products {
                tracing::info!(
                    product = %serde_json::to_string(product)?,
                    buys = engine.count_buys(product),
                    buyers = engine.count_customers_who_bought(product),
                    "most popular product"
                );
            }
        }
        Err(DomainError::NoData(reason)) => tracing::warn!("no popular product: {}", reason),
        Err(e) => return Err(e.into()),
    }

    let promo = fixtures::product(u64::MAX, 0);
    let mut engine = CustomerQueryEngine::new(&mut customers);
    engine.add_product_to_all_customers(&promo);
    tracing::info!(
        promo_buys = engine.count_buys(&promo),
        no_orders = engine.customers_with_no_orders().len(),
        "promo product handed out"
    );

    Ok(())
}
