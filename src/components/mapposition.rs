//! Logical world position of an entity.
//!
//! [`MapPosition`] is the authoritative anchor of a sprite in world space:
//! the point units move toward, weapons measure range from and the debug
//! view marks with a dot. It is independent from the sprite's bounding
//! rectangle, which is described by
//! [`BoxCollider`](crate::components::boxcollider::BoxCollider) relative to
//! this point.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct MapPosition {
    pub pos: Vector2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }

    pub fn from_vec(pos: Vector2) -> Self {
        Self { pos }
    }

    /// Vector pointing from this position to `other`.
    pub fn displacement_to(&self, other: Vector2) -> Vector2 {
        other - self.pos
    }

    pub fn distance_to(&self, other: Vector2) -> f32 {
        self.displacement_to(other).length()
    }
}
