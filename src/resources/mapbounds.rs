//! Size of the playable map in world units.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Rectangle, Vector2};

/// Edge length of a map tile. Fog, grass and building placement snap to it.
pub const TILE_SIZE: f32 = 32.0;

#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct MapBounds {
    pub width: f32,
    pub height: f32,
}

impl MapBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn rect(&self) -> Rectangle {
        Rectangle::new(0.0, 0.0, self.width, self.height)
    }

    pub fn center(&self) -> Vector2 {
        Vector2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Number of whole tiles across and down.
    pub fn tiles(&self) -> (usize, usize) {
        (
            (self.width / TILE_SIZE).floor().max(0.0) as usize,
            (self.height / TILE_SIZE).floor().max(0.0) as usize,
        )
    }

    /// Clamp a point into the map.
    pub fn clamp(&self, p: Vector2) -> Vector2 {
        Vector2::new(p.x.clamp(0.0, self.width), p.y.clamp(0.0, self.height))
    }

    /// Shift a rectangle of `size` whose centre is `center` so it lies inside
    /// the map, returning the adjusted centre.
    pub fn clamp_centered(&self, center: Vector2, size: Vector2) -> Vector2 {
        let half = size * 0.5;
        let x = if size.x >= self.width {
            self.width / 2.0
        } else {
            center.x.clamp(half.x, self.width - half.x)
        };
        let y = if size.y >= self.height {
            self.height / 2.0
        } else {
            center.y.clamp(half.y, self.height - half.y)
        };
        Vector2::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_centered_keeps_box_inside() {
        let map = MapBounds::new(100.0, 100.0);
        let c = map.clamp_centered(Vector2::new(2.0, 99.0), Vector2::new(10.0, 20.0));
        assert_eq!(c, Vector2::new(5.0, 90.0));
    }

    #[test]
    fn tiles_floor() {
        assert_eq!(MapBounds::new(1600.0, 800.0).tiles(), (50, 25));
        assert_eq!(MapBounds::new(50.0, 31.0).tiles(), (1, 0));
    }
}
