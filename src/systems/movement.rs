//! Unit movement.
//!
//! [`target_tracking_system`] keeps armed units aimed at the entity they
//! chase; [`movement_system`] then steps every mobile unit toward its
//! current order at its own speed.
use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::boxcollider::BoxCollider;
use crate::components::health::Health;
use crate::components::mapposition::MapPosition;
use crate::components::orders::{Mobile, Orders};
use crate::components::weapon::Weapon;
use crate::resources::mapbounds::MapBounds;

/// Distance at which a unit counts as arrived.
pub const ARRIVAL_RADIUS: f32 = 5.0;

/// Re-aim chasing units at their target, or let go of it.
///
/// A target that is dead, despawned or beyond the weapon's tracking range is
/// dropped together with the point order that led to it.
pub fn target_tracking_system(
    mut chasers: Query<(&MapPosition, &Weapon, &mut Orders)>,
    targets: Query<(&MapPosition, &Health)>,
) {
    for (position, weapon, mut orders) in chasers.iter_mut() {
        let Some(target) = orders.target_entity else {
            continue;
        };
        match targets.get(target) {
            Ok((target_pos, health)) if health.is_alive() => {
                if weapon.tracking_range <= 0.0 {
                    continue;
                }
                if position.distance_to(target_pos.pos) <= weapon.tracking_range {
                    orders.target = Some(target_pos.pos);
                } else {
                    orders.target = None;
                    orders.target_entity = None;
                }
            }
            _ => orders.target_entity = None,
        }
    }
}

/// Step from `from` toward `to` by `speed`, or stay put when already within
/// the arrival radius.
fn step_toward(from: Vector2, to: Vector2, speed: f32) -> (Vector2, bool) {
    let d = to - from;
    let dist = d.length();
    if dist <= ARRIVAL_RADIUS {
        return (from, true);
    }
    (from + d * (speed / dist), false)
}

/// Move units along their orders.
///
/// Resolution order:
/// 1. a point order on a living target entity: approach until within weapon
///    range, then drop the point;
/// 2. the formation slot;
/// 3. the plain point order.
///
/// Reached formation slots and points are cleared so the unit counts as
/// idle again. Units always stay inside the map.
pub fn movement_system(
    mut movers: Query<(
        &mut MapPosition,
        &mut Orders,
        &Mobile,
        &BoxCollider,
        Option<&Weapon>,
    )>,
    health: Query<&Health>,
    map: Res<MapBounds>,
) {
    for (mut position, mut orders, mobile, collider, weapon) in movers.iter_mut() {
        let chasing_alive = orders
            .target_entity
            .and_then(|e| health.get(e).ok())
            .is_some_and(|h| h.is_alive());

        let start = position.pos;
        match (orders.target, chasing_alive, orders.formation_target) {
            (Some(target), true, _) => {
                let range = weapon.map(|w| w.range).unwrap_or(0.0);
                if (target - position.pos).length() > range {
                    position.pos = step_toward(position.pos, target, mobile.speed).0;
                } else {
                    orders.target = None;
                }
            }
            (_, _, Some(slot)) => {
                let (next, arrived) = step_toward(position.pos, slot, mobile.speed);
                position.pos = next;
                if arrived {
                    orders.formation_target = None;
                    if orders
                        .target
                        .is_some_and(|t| (t - slot).length() <= ARRIVAL_RADIUS)
                    {
                        orders.target = None;
                    }
                }
            }
            (Some(target), false, None) => {
                let (next, arrived) = step_toward(position.pos, target, mobile.speed);
                position.pos = next;
                if arrived {
                    orders.target = None;
                }
            }
            (None, _, None) => continue,
        }
        if position.pos != start {
            position.pos = map.clamp_centered(position.pos, collider.size);
        }
    }
}
