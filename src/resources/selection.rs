//! Player selection state beyond the per-unit `Selected` marker.

use bevy_ecs::prelude::{Entity, Resource};
use raylib::prelude::{Rectangle, Vector2};

use crate::geometry::rect_from_corners;

#[derive(Resource, Debug, Clone, Default)]
pub struct SelectionState {
    /// Screen position where the current drag box started.
    pub drag_start: Option<Vector2>,
    /// Own building picked for selling.
    pub building: Option<Entity>,
}

impl SelectionState {
    pub fn is_dragging(&self) -> bool {
        self.drag_start.is_some()
    }

    /// Screen rectangle of the drag box with the mouse at `current`.
    pub fn box_rect(&self, current: Vector2) -> Option<Rectangle> {
        self.drag_start.map(|start| rect_from_corners(start, current))
    }
}
