//! Camera control: follow the selection, edge scrolling and arrow keys.
use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::gameobject::Unit;
use crate::components::mapposition::MapPosition;
use crate::components::selected::Selected;
use crate::geometry::mean_position;
use crate::resources::camera::GameCamera;
use crate::resources::input::InputState;
use crate::resources::mapbounds::MapBounds;
use crate::resources::screensize::ScreenSize;

/// Pixels the view moves per frame when scrolling.
pub const SCROLL_SPEED: f32 = 10.0;
/// Width of the band along the view edges that triggers scrolling.
pub const EDGE_MARGIN: f32 = 30.0;

pub fn camera_system(
    input: Res<InputState>,
    screen: Res<ScreenSize>,
    map: Res<MapBounds>,
    mut camera: ResMut<GameCamera>,
    selected: Query<&MapPosition, (With<Selected>, With<Unit>)>,
) {
    let mut keys = Vector2::zero();
    if input.pan_left.active {
        keys.x -= SCROLL_SPEED;
    }
    if input.pan_right.active {
        keys.x += SCROLL_SPEED;
    }
    if input.pan_up.active {
        keys.y -= SCROLL_SPEED;
    }
    if input.pan_down.active {
        keys.y += SCROLL_SPEED;
    }
    if keys != Vector2::zero() {
        camera.pan(keys, &map);
    }

    let mouse = input.mouse;
    let view_w = screen.view_width() as f32;
    let view_h = screen.h as f32;
    if mouse.x >= view_w || mouse.y > view_h {
        return;
    }

    if let Some(center) = mean_position(selected.iter().map(|p| p.pos)) {
        camera.center_on(center, &map);
        return;
    }

    let mut edge = Vector2::zero();
    if mouse.x < EDGE_MARGIN {
        edge.x -= SCROLL_SPEED;
    } else if mouse.x > view_w - EDGE_MARGIN {
        edge.x += SCROLL_SPEED;
    }
    if mouse.y < EDGE_MARGIN {
        edge.y -= SCROLL_SPEED;
    } else if mouse.y > view_h - EDGE_MARGIN {
        edge.y += SCROLL_SPEED;
    }
    camera.pan(edge, &map);
}
