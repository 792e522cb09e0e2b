//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**: two instances with the same attribute
/// values are equal. A storage location is the typical example:
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Location {
///     general: String,
///     specific: String,
/// }
///
/// impl ValueObject for Location {}
/// ```
///
/// To "modify" a value object, build a new one.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
