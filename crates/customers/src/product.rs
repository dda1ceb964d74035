use serde::{Deserialize, Serialize};

use storefront_core::{Entity, Price, ProductId};

/// A purchasable product.
///
/// Immutable once constructed. Equality and hashing use the id only, so two
/// `Product` values with the same id are the same product regardless of name
/// or price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Price,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, price: Price) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.same_entity(other)
    }
}

impl Eq for Product {}

impl core::hash::Hash for Product {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn products_with_same_id_are_equal() {
        let a = Product::new(ProductId::new(1), "Kettle", Price::new(2500));
        let b = Product::new(ProductId::new(1), "Kettle (renamed)", Price::new(1999));
        let c = Product::new(ProductId::new(2), "Kettle", Price::new(2500));

        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<Product> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn serializes_flat_fields() {
        let product = Product::new(ProductId::new(3), "Mug", Price::new(450));
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": 3, "name": "Mug", "price": 450 })
        );
    }
}
