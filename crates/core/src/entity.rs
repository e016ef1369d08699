//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// An `Order` is the entity here: its items and behaviors change while its
/// `OrderId` stays fixed.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
