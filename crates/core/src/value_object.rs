//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**. They are defined entirely by their
//! attribute values, so two value objects holding the same values are equal and
//! interchangeable.

/// Marker trait for value objects.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: an order line for 5 chairs on order `order-01` is the
///   same order line no matter how many times it is rebuilt.
/// - **Entity**: batch `batch-01` stays `batch-01` while its available quantity
///   changes.
///
/// Value objects are **immutable**: to "modify" one, build a new one. Because
/// equality is structural, a value object that is also `Eq + Hash` can be
/// stored in a set to detect repeats, which is how batches recognise an order
/// line they have already accepted.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// struct Demand {
///     sku: String,
///     units: u32,
/// }
///
/// impl ValueObject for Demand {}
///
/// let a = Demand { sku: "chair".to_string(), units: 5 };
/// let b = Demand { sku: "chair".to_string(), units: 5 };
/// assert_eq!(a, b);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
