//! Typed entity identifier.
//!
//! Entities are stored in a plain `Vec` inside the world, so the id doubles
//! as an index.  Keeping it a newtype stops a raw row/column `i32` from ever
//! being passed where an entity is expected.

use std::fmt;

/// Index of a movable entity in the world.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl EntityId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityId({})", self.0)
    }
}

impl From<EntityId> for usize {
    #[inline(always)]
    fn from(id: EntityId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for EntityId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<EntityId, Self::Error> {
        u32::try_from(n).map(EntityId)
    }
}
