//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// A channel keeps its identity while its weight and stock figures change;
/// anything with that shape implements `Entity`.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
