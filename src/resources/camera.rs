//! Map camera resource.
//!
//! The camera is the rectangle of the map currently shown left of the
//! interface panel. It converts between world coordinates and screen pixels;
//! the map view starts at screen `(0, 0)`.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Rectangle, Vector2};

use crate::resources::mapbounds::MapBounds;

#[derive(Resource, Clone, Copy, Debug)]
pub struct GameCamera {
    /// Visible map area in world units.
    pub view: Rectangle,
}

impl GameCamera {
    pub fn new(view_width: f32, view_height: f32) -> Self {
        Self {
            view: Rectangle::new(0.0, 0.0, view_width, view_height),
        }
    }

    pub fn offset(&self) -> Vector2 {
        Vector2::new(self.view.x, self.view.y)
    }

    pub fn to_screen(&self, world: Vector2) -> Vector2 {
        world - self.offset()
    }

    /// World position under a screen pixel, clamped to the map.
    pub fn to_world(&self, screen: Vector2, map: &MapBounds) -> Vector2 {
        map.clamp(screen + self.offset())
    }

    pub fn rect_to_screen(&self, rect: Rectangle) -> Rectangle {
        Rectangle::new(rect.x - self.view.x, rect.y - self.view.y, rect.width, rect.height)
    }

    /// Keep the view inside the map. A view larger than the map is pinned to
    /// the origin.
    pub fn clamp(&mut self, map: &MapBounds) {
        let max_x = (map.width - self.view.width).max(0.0);
        let max_y = (map.height - self.view.height).max(0.0);
        self.view.x = self.view.x.clamp(0.0, max_x);
        self.view.y = self.view.y.clamp(0.0, max_y);
    }

    pub fn pan(&mut self, delta: Vector2, map: &MapBounds) {
        self.view.x += delta.x;
        self.view.y += delta.y;
        self.clamp(map);
    }

    pub fn center_on(&mut self, point: Vector2, map: &MapBounds) {
        self.view.x = point.x - self.view.width / 2.0;
        self.view.y = point.y - self.view.height / 2.0;
        self.clamp(map);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map() -> MapBounds {
        MapBounds::new(1600.0, 800.0)
    }

    #[test]
    fn screen_world_round_trip_inside_map() {
        let mut cam = GameCamera::new(400.0, 300.0);
        cam.pan(Vector2::new(100.0, 50.0), &map());
        let w = Vector2::new(250.0, 120.0);
        assert_eq!(cam.to_screen(w), Vector2::new(150.0, 70.0));
        assert_eq!(cam.to_world(Vector2::new(150.0, 70.0), &map()), w);
    }

    #[test]
    fn to_world_is_clamped() {
        let cam = GameCamera::new(400.0, 300.0);
        assert_eq!(cam.to_world(Vector2::new(-10.0, 5000.0), &map()), Vector2::new(0.0, 800.0));
    }

    #[test]
    fn centering_respects_map_edges() {
        let mut cam = GameCamera::new(400.0, 300.0);
        cam.center_on(Vector2::new(10.0, 10.0), &map());
        assert_eq!((cam.view.x, cam.view.y), (0.0, 0.0));
        cam.center_on(Vector2::new(1590.0, 790.0), &map());
        assert_eq!((cam.view.x, cam.view.y), (1200.0, 500.0));
        cam.center_on(Vector2::new(800.0, 400.0), &map());
        assert_eq!((cam.view.x, cam.view.y), (600.0, 250.0));
    }

    #[test]
    fn oversized_view_pins_to_origin() {
        let mut cam = GameCamera::new(2000.0, 1000.0);
        cam.pan(Vector2::new(50.0, 50.0), &map());
        assert_eq!((cam.view.x, cam.view.y), (0.0, 0.0));
    }
}
