//! In-memory query engine over a caller-owned customer collection.
//!
//! The engine borrows (or otherwise views) the collection instead of copying
//! it: queries read the caller's records directly and
//! [`CustomerQueryEngine::add_product_to_all_customers`] writes straight into
//! them. The engine holds no other state besides its [`SpendPolicy`].

use std::collections::HashMap;

use storefront_core::{DomainError, DomainResult, Entity, Price, ProductId};

use crate::customer::Customer;
use crate::field::CustomerField;
use crate::product::Product;

/// How a customer's spend is computed for
/// [`CustomerQueryEngine::customers_who_spent_more_than`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SpendPolicy {
    /// Sum of the real prices of every purchase.
    #[default]
    ActualPrices,
    /// Every purchase counts as exactly `threshold`, i.e. spend is
    /// `purchase_count * threshold`. Kept for compatibility with reports built
    /// on the old rule.
    ThresholdPerPurchase,
}

impl SpendPolicy {
    /// Spend in minor units, exact (no saturation).
    pub fn spend(self, customer: &Customer, threshold: Price) -> u128 {
        match self {
            SpendPolicy::ActualPrices => customer.total_spend(),
            SpendPolicy::ThresholdPerPurchase => threshold.times(customer.purchase_count()),
        }
    }
}

/// Query layer over an ordered customer collection.
///
/// `C` is any view of `[Customer]`: `&[Customer]`, `&Vec<Customer>` for read-only
/// use, or `&mut Vec<Customer>` when the mutating operation is needed. Results
/// borrow from the viewed collection and keep its order.
#[derive(Debug)]
pub struct CustomerQueryEngine<C> {
    customers: C,
    spend_policy: SpendPolicy,
}

impl<C> CustomerQueryEngine<C>
where
    C: AsRef<[Customer]>,
{
    pub fn new(customers: C) -> Self {
        Self {
            customers,
            spend_policy: SpendPolicy::default(),
        }
    }

    pub fn with_spend_policy(mut self, spend_policy: SpendPolicy) -> Self {
        self.spend_policy = spend_policy;
        self
    }

    pub fn spend_policy(&self) -> SpendPolicy {
        self.spend_policy
    }

    pub fn customers(&self) -> &[Customer] {
        self.customers.as_ref()
    }

    pub fn len(&self) -> usize {
        self.customers().len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers().is_empty()
    }

    /// Give back the underlying view.
    pub fn into_inner(self) -> C {
        self.customers
    }

    fn select(&self, predicate: impl Fn(&Customer) -> bool) -> Vec<&Customer> {
        self.customers().iter().filter(|&c| predicate(c)).collect()
    }

    /// Customers whose name equals `name` exactly (case-sensitive).
    pub fn find_by_name(&self, name: &str) -> Vec<&Customer> {
        self.select(|c| c.name() == name)
    }

    /// Customers whose selected attribute equals `value`.
    ///
    /// ```ignore
    /// let first = engine.find_by(|c| c.id_typed(), &CustomerId::new(0));
    /// ```
    pub fn find_by<V, F>(&self, selector: F, value: &V) -> Vec<&Customer>
    where
        F: Fn(&Customer) -> V,
        V: PartialEq,
    {
        self.select(|c| selector(c) == *value)
    }

    /// Customers matching one of the known attributes. A value that does not
    /// compare equal is simply a non-match.
    pub fn find_by_field(&self, field: &CustomerField) -> Vec<&Customer> {
        let found = self.select(|c| field.matches(c));
        tracing::debug!(field = field.name(), matches = found.len(), "find_by_field");
        found
    }

    /// Customers with strictly more than `number` purchase-list entries.
    pub fn customers_who_bought_more_than(&self, number: usize) -> Vec<&Customer> {
        self.select(|c| c.purchase_count() > number)
    }

    /// Customers whose spend, per the engine's [`SpendPolicy`], is strictly
    /// greater than `threshold`.
    pub fn customers_who_spent_more_than(&self, threshold: Price) -> Vec<&Customer> {
        let policy = self.spend_policy;
        let limit = u128::from(threshold.amount());
        self.select(|c| policy.spend(c, threshold) > limit)
    }

    pub fn customers_with_no_orders(&self) -> Vec<&Customer> {
        self.select(|c| !c.has_purchases())
    }

    /// Average spend per customer.
    ///
    /// Total spend over every purchase, divided by the number of customers who
    /// bought something, or by all customers when `include_empty` is set.
    /// Fails with [`DomainError::NoData`] when that divisor is zero.
    pub fn avg_orders(&self, include_empty: bool) -> DomainResult<f64> {
        let total: u128 = self.customers().iter().map(Customer::total_spend).sum();
        let divisor = self
            .customers()
            .iter()
            .filter(|c| include_empty || c.has_purchases())
            .count();

        if divisor == 0 {
            tracing::debug!(include_empty, "avg_orders over zero customers");
            return Err(DomainError::no_data(if include_empty {
                "no customers to average over"
            } else {
                "no customers with orders to average over"
            }));
        }

        Ok(total as f64 / divisor as f64)
    }

    pub fn was_product_bought(&self, product: &Product) -> bool {
        self.customers().iter().any(|c| c.bought(product))
    }

    /// Every purchased product with its number of purchase-list entries,
    /// most bought first; equal counts are ordered by ascending product id.
    pub fn product_popularity(&self) -> Vec<(Product, usize)> {
        let mut counts: HashMap<ProductId, (&Product, usize)> = HashMap::new();
        for product in self.customers().iter().flat_map(Customer::bought_products) {
            counts.entry(product.id()).or_insert((product, 0)).1 += 1;
        }

        let mut popularity: Vec<(Product, usize)> = counts
            .into_values()
            .map(|(product, count)| (product.clone(), count))
            .collect();
        popularity.sort_by(|(a, a_count), (b, b_count)| {
            b_count.cmp(a_count).then_with(|| a.id().cmp(&b.id()))
        });
        popularity
    }

    /// The single most bought product, wrapped in a one-element vector.
    ///
    /// Ties go to the lowest product id. Fails with [`DomainError::NoData`]
    /// when nobody bought anything.
    pub fn most_popular_product(&self) -> DomainResult<Vec<Product>> {
        match self.product_popularity().into_iter().next() {
            Some((product, count)) => {
                tracing::debug!(product_id = %product.id(), count, "most popular product");
                Ok(vec![product])
            }
            None => {
                tracing::debug!("most_popular_product over zero purchases");
                Err(DomainError::no_data("no product has been purchased"))
            }
        }
    }

    /// Total purchase-list entries equal to `product`, repeats included.
    pub fn count_buys(&self, product: &Product) -> usize {
        self.customers().iter().map(|c| c.times_bought(product)).sum()
    }

    /// Number of distinct customers who bought `product` at least once.
    pub fn count_customers_who_bought(&self, product: &Product) -> usize {
        self.customers().iter().filter(|c| c.bought(product)).count()
    }
}

impl<C> CustomerQueryEngine<C>
where
    C: AsRef<[Customer]> + AsMut<[Customer]>,
{
    /// Append `product` to every customer's purchase list, in collection order.
    pub fn add_product_to_all_customers(&mut self, product: &Product) {
        let customers = self.customers.as_mut();
        for customer in customers.iter_mut() {
            customer.add_product(product.clone());
        }
        tracing::debug!(
            product_id = %product.id(),
            customers = customers.len(),
            "added product to all customers"
        );
    }
}
