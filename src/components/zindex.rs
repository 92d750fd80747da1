//! Z-index component for render ordering.
//!
//! Entities with higher values are drawn on top. The fog of war is painted
//! between [`ZIndex::BUILDINGS`] and [`ZIndex::UNITS`], so fields and
//! buildings sit under the fog while units, shells and particles sit over it.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ZIndex(pub i32);

impl ZIndex {
    pub const FIELDS: ZIndex = ZIndex(0);
    pub const BUILDINGS: ZIndex = ZIndex(1);
    pub const UNITS: ZIndex = ZIndex(3);
    pub const PROJECTILES: ZIndex = ZIndex(4);
    pub const PARTICLES: ZIndex = ZIndex(5);

    /// Whether the sprite is painted before the fog layer.
    pub fn is_under_fog(self) -> bool {
        self < Self::UNITS
    }
}
