//! Movement orders and mobility.

use bevy_ecs::prelude::{Component, Entity};
use raylib::prelude::Vector2;

/// Where a unit is headed and what it is chasing.
///
/// Movement resolves these in priority order: a live `target_entity`
/// with a `target` point, then `formation_target`, then the plain `target`.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct Orders {
    pub target: Option<Vector2>,
    pub target_entity: Option<Entity>,
    pub formation_target: Option<Vector2>,
}

impl Orders {
    pub fn is_idle(&self) -> bool {
        self.target.is_none()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn attack(&mut self, entity: Entity, at: Vector2) {
        self.target_entity = Some(entity);
        self.target = Some(at);
    }
}

/// Marks an entity as able to move, with its speed in world units per tick.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Mobile {
    pub speed: f32,
}
