//! Unit separation.
//!
//! Units whose rectangles overlap are pushed apart along the line between
//! their positions, so groups spread out instead of stacking.
use bevy_ecs::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::gameobject::{GameObject, ObjectKind, Unit};
use crate::components::mapposition::MapPosition;

/// Push between two harvesters.
pub const HARVESTER_PUSH: f32 = 0.3;
/// Push between any other pair of units.
pub const UNIT_PUSH: f32 = 0.5;

pub fn separation_system(
    mut query: Query<(&mut MapPosition, &BoxCollider, &GameObject), With<Unit>>,
) {
    let mut combos = query.iter_combinations_mut();
    while let Some([(mut pos_a, collider_a, obj_a), (mut pos_b, collider_b, obj_b)]) =
        combos.fetch_next()
    {
        if !collider_a.overlaps(pos_a.pos, collider_b, pos_b.pos) {
            continue;
        }
        let d = pos_b.pos - pos_a.pos;
        let dist = d.length();
        if dist <= 0.0 {
            continue;
        }
        let push = if obj_a.kind == ObjectKind::Harvester && obj_b.kind == ObjectKind::Harvester {
            HARVESTER_PUSH
        } else {
            UNIT_PUSH
        };
        let shift = d * (push / dist);
        pos_a.pos = pos_a.pos - shift;
        pos_b.pos = pos_b.pos + shift;
    }
}
