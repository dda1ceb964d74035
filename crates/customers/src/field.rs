//! Typed attribute lookup for customers.

use storefront_core::CustomerId;

use crate::customer::Customer;
use crate::product::Product;

/// A customer attribute together with the value to match it against.
///
/// This is the closed set of attributes `find_by_field` understands. Ad-hoc
/// lookups go through `CustomerQueryEngine::find_by` with a selector instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomerField {
    Id(CustomerId),
    Name(String),
    /// Whole purchase list, compared entry by entry in order.
    BoughtProducts(Vec<Product>),
}

impl CustomerField {
    /// Attribute name, as used in log output.
    pub fn name(&self) -> &'static str {
        match self {
            CustomerField::Id(_) => "id",
            CustomerField::Name(_) => "name",
            CustomerField::BoughtProducts(_) => "bought_products",
        }
    }

    pub fn matches(&self, customer: &Customer) -> bool {
        match self {
            CustomerField::Id(id) => customer.id_typed() == *id,
            CustomerField::Name(name) => customer.name() == name,
            CustomerField::BoughtProducts(products) => {
                customer.bought_products() == products.as_slice()
            }
        }
    }
}
