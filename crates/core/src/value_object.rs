//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. A
/// product's price or a discount rule is a value object; an order, whose item
/// list grows over time, is an [`Entity`](crate::Entity).
///
/// To "modify" a value object, build a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Rate(f64);
///
/// impl ValueObject for Rate {}
///
/// assert_eq!(Rate(0.1), Rate(0.1));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
