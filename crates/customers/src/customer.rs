use serde::{Deserialize, Serialize};

use storefront_core::{CustomerId, Entity, Price};

use crate::product::Product;

/// A customer and everything they bought, in purchase order.
///
/// The purchase list only grows; repeated purchases of the same product are
/// kept as separate entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
    name: String,
    bought_products: Vec<Product>,
}

impl Customer {
    pub fn new(id: CustomerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            bought_products: Vec::new(),
        }
    }

    pub fn id_typed(&self) -> CustomerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bought_products(&self) -> &[Product] {
        &self.bought_products
    }

    /// Record a purchase at the end of the purchase list.
    pub fn add_product(&mut self, product: Product) {
        self.bought_products.push(product);
    }

    pub fn purchase_count(&self) -> usize {
        self.bought_products.len()
    }

    pub fn has_purchases(&self) -> bool {
        !self.bought_products.is_empty()
    }

    /// Exact sum of the prices of every purchase, in minor units.
    pub fn total_spend(&self) -> u128 {
        Price::total(self.bought_products.iter().map(Product::price))
    }

    pub fn bought(&self, product: &Product) -> bool {
        self.bought_products.contains(product)
    }

    /// Number of purchase-list entries equal to `product`.
    pub fn times_bought(&self, product: &Product) -> usize {
        self.bought_products.iter().filter(|p| *p == product).count()
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl PartialEq for Customer {
    fn eq(&self, other: &Self) -> bool {
        self.same_entity(other)
    }
}

impl Eq for Customer {}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::ProductId;

    fn product(id: u64, price: u64) -> Product {
        Product::new(ProductId::new(id), format!("Product {id}"), Price::new(price))
    }

    #[test]
    fn purchases_keep_order_and_duplicates() {
        let mut customer = Customer::new(CustomerId::new(1), "Ada");
        customer.add_product(product(1, 100));
        customer.add_product(product(2, 50));
        customer.add_product(product(1, 100));

        let ids: Vec<u64> = customer
            .bought_products()
            .iter()
            .map(|p| p.id_typed().get())
            .collect();
        assert_eq!(ids, vec![1, 2, 1]);
        assert_eq!(customer.purchase_count(), 3);
        assert_eq!(customer.times_bought(&product(1, 100)), 2);
        assert_eq!(customer.total_spend(), 250);
    }

    #[test]
    fn new_customer_has_no_purchases() {
        let customer = Customer::new(CustomerId::new(9), "Grace");
        assert!(!customer.has_purchases());
        assert_eq!(customer.total_spend(), 0);
        assert!(!customer.bought(&product(1, 1)));
    }
}
