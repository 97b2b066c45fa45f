//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Menu items are value objects: a large cheese hamburger is interchangeable
/// with any other large cheese hamburger. Once built, a value object never
/// changes; to "modify" one, build a new one.
///
/// The trait requires:
/// - **Clone**: values are cheap to copy
/// - **PartialEq**: values are compared by their attributes
/// - **Debug**: values show up in logs and test failures
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
