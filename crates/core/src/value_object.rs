//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**. Two value objects with the same values
//! are equal, and they never change after construction.

/// Marker trait for value objects.
///
/// - **Value Object**: no identity (`Price(250) == Price(250)`)
/// - **Entity**: has identity (two products with the same id are the same product)
///
/// To "modify" a value object, create a new one.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
