use bevy_ecs::prelude::Component;
use raylib::prelude::{Rectangle, Vector2};

/// Bounding rectangle of a sprite, stored relative to its [`MapPosition`].
///
/// Used for selection, projectile hits, unit separation, building footprints
/// and the debug view outline.
///
/// [`MapPosition`]: crate::components::mapposition::MapPosition
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vector2,
    pub offset: Vector2,
}

impl BoxCollider {
    /// Rectangle whose top-left corner sits on the position.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vector2::new(width, height),
            offset: Vector2::zero(),
        }
    }

    /// Rectangle centred on the position. Every game object uses this shape.
    pub fn centered(size: Vector2) -> Self {
        Self {
            size,
            offset: Vector2::new(-size.x / 2.0, -size.y / 2.0),
        }
    }

    pub fn with_offset(mut self, offset: Vector2) -> Self {
        self.offset = offset;
        self
    }

    /// Returns (min, max) of the rectangle for a given entity position.
    /// Negative sizes are normalised to proper min/max.
    pub fn aabb(&self, position: Vector2) -> (Vector2, Vector2) {
        let p0 = position + self.offset;
        let p1 = p0 + self.size;
        let min = Vector2::new(p0.x.min(p1.x), p0.y.min(p1.y));
        let max = Vector2::new(p0.x.max(p1.x), p0.y.max(p1.y));
        (min, max)
    }

    /// World-space rectangle for a given entity position.
    pub fn rect(&self, position: Vector2) -> Rectangle {
        let (min, max) = self.aabb(position);
        Rectangle::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    pub fn overlaps(&self, position: Vector2, other: &Self, other_position: Vector2) -> bool {
        let (min_a, max_a) = self.aabb(position);
        let (min_b, max_b) = other.aabb(other_position);
        min_a.x < max_b.x && max_a.x > min_b.x && min_a.y < max_b.y && max_a.y > min_b.y
    }

    pub fn contains_point(&self, position: Vector2, point: Vector2) -> bool {
        let (min, max) = self.aabb(position);
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }
}
