//! Power grid, production queues and building placement.
//!
//! Each team's [`Economy`] runs one queue. The head item counts down while
//! power suffices (at half speed otherwise); finished units roll out next to
//! their producer, finished buildings wait in `pending` until placed by the
//! player's click or by the AI.
use bevy_ecs::prelude::*;
use log::{debug, info};
use raylib::prelude::Vector2;

use crate::components::boxcollider::BoxCollider;
use crate::components::gameobject::{Building, CONSTRUCTION_TIME, GameObject, ObjectKind};
use crate::components::health::Health;
use crate::components::mapposition::MapPosition;
use crate::components::orders::Orders;
use crate::components::team::Team;
use crate::geometry::{Footprint, calculate_formation_positions, is_valid_building_position, snap_to_grid};
use crate::prefabs::{spawn_building, spawn_unit};
use crate::resources::economy::{BASE_POWER, Economies, Economy};
use crate::resources::mapbounds::MapBounds;

/// Gap between a producer's right edge and a new unit.
pub const SPAWN_GAP: f32 = 20.0;

/// A living building, as production sees it.
#[derive(Debug, Clone, Copy)]
pub struct Facility {
    pub team: Team,
    pub kind: ObjectKind,
    pub center: Vector2,
    pub rect_right: f32,
}

/// Living buildings as placement footprints.
pub fn footprints<'a>(
    buildings: impl IntoIterator<Item = (&'a Team, &'a MapPosition, &'a BoxCollider, &'a Health)>,
) -> Vec<Footprint> {
    buildings
        .into_iter()
        .filter(|(_, _, _, health)| health.is_alive())
        .map(|(team, pos, collider, _)| Footprint {
            team: *team,
            center: pos.pos,
            rect: collider.rect(pos.pos),
        })
        .collect()
}

/// Recompute both teams' power output and usage.
pub fn power_system(
    objects: Query<(&Team, &GameObject, &Health)>,
    mut economies: ResMut<Economies>,
) {
    for team in [Team::Gdi, Team::Nod] {
        let mut output = BASE_POWER;
        let mut usage = 0;
        for (_, obj, health) in objects.iter().filter(|(t, _, _)| **t == team) {
            if health.is_alive() {
                output += obj.kind.power_output();
            }
            if obj.kind != ObjectKind::Headquarters {
                usage += obj.kind.power_usage();
            }
        }
        let eco = economies.get_mut(team);
        eco.power_output = output;
        eco.power_usage = usage;
    }
}

/// Where a unit produced by `producer` rolls out.
pub fn spawn_point(producer: &Facility) -> Vector2 {
    Vector2::new(producer.rect_right + SPAWN_GAP, producer.center.y)
}

/// Producer a unit of `kind` should roll out of: the one nearest the team's
/// headquarters, or any when the headquarters is gone.
pub fn pick_producer(kind: ObjectKind, team: Team, facilities: &[Facility]) -> Option<Facility> {
    let producer = kind.producer();
    let hq = facilities
        .iter()
        .find(|f| f.team == team && f.kind == ObjectKind::Headquarters)
        .map(|f| f.center);
    facilities
        .iter()
        .filter(|f| f.team == team && f.kind == producer)
        .min_by(|a, b| match hq {
            Some(hq) => (a.center - hq).length().total_cmp(&(b.center - hq).length()),
            None => std::cmp::Ordering::Equal,
        })
        .copied()
}

/// Advance one team's queue by a tick. Returns the unit to spawn and where,
/// if one finished.
pub fn advance_queue(
    eco: &mut Economy,
    team: Team,
    facilities: &[Facility],
) -> Option<(ObjectKind, Vector2)> {
    let head = *eco.queue.first()?;
    if head.is_building() && eco.pending.is_some() {
        return None;
    }
    let producer = if head.is_unit() {
        // Unit production pauses while no producer stands.
        Some(pick_producer(head, team, facilities)?)
    } else {
        None
    };
    let producers = |kind: ObjectKind| {
        facilities
            .iter()
            .filter(|f| f.team == team && f.kind == kind.producer())
            .count()
    };

    if eco.timer <= 0.0 {
        if !eco.has_enough_power() {
            return None;
        }
        eco.timer = head.production_time(producers(head));
    }

    eco.timer -= if eco.has_enough_power() { 1.0 } else { 0.5 };
    if eco.timer > 0.0 {
        return None;
    }

    eco.queue.remove(0);
    eco.timer = match eco.queue.first() {
        Some(next) if eco.has_enough_power() => next.production_time(producers(*next)),
        _ => 0.0,
    };
    match producer {
        Some(producer) => Some((head, spawn_point(&producer))),
        None => {
            debug!("{:?} finished {}, awaiting placement", team, head.label());
            eco.pending = Some(head);
            eco.pending_pos = None;
            None
        }
    }
}

pub fn production_system(
    buildings: Query<(&Team, &GameObject, &MapPosition, &BoxCollider, &Health), With<Building>>,
    mut economies: ResMut<Economies>,
    mut commands: Commands,
) {
    let facilities: Vec<Facility> = buildings
        .iter()
        .filter(|(_, _, _, _, health)| health.is_alive())
        .map(|(team, obj, pos, collider, _)| Facility {
            team: *team,
            kind: obj.kind,
            center: pos.pos,
            rect_right: collider.rect(pos.pos).x + collider.size.x,
        })
        .collect();

    for team in [Team::Gdi, Team::Nod] {
        let Some((kind, at)) = advance_queue(economies.get_mut(team), team, &facilities) else {
            continue;
        };
        debug!("{:?} {} rolls out at {:?}", team, kind.label(), at);
        let slot = calculate_formation_positions(at, None, 1, Some(0.0))
            .first()
            .copied()
            .unwrap_or(at);
        let unit = spawn_unit(&mut commands, kind, team, slot);
        commands.entity(unit).insert(Orders {
            formation_target: Some(slot),
            ..Orders::default()
        });
    }
}

/// Try to place `team`'s pending building with its top-left near
/// `position`. The position is snapped to the grid first.
///
/// On success the building is spawned under construction and the queue
/// resumes on the next tick.
pub fn place_pending_building(
    commands: &mut Commands,
    eco: &mut Economy,
    team: Team,
    position: Vector2,
    buildings: &[Footprint],
    map: &MapBounds,
) -> Result<Entity, String> {
    let Some(kind) = eco.pending else {
        return Err("no building awaiting placement".to_string());
    };
    let snapped = snap_to_grid(position);
    if !is_valid_building_position(snapped, kind, team, buildings, map) {
        return Err(format!("cannot place {} at {:?}", kind.label(), snapped));
    }
    let entity = spawn_building(commands, kind, team, snapped, false);
    info!("{:?} placed {} at {:?}", team, kind.label(), snapped);
    eco.pending = None;
    eco.pending_pos = None;
    eco.timer = 0.0;
    Ok(entity)
}

/// Drop a pending building without placing it.
pub fn cancel_pending_building(eco: &mut Economy) -> Option<ObjectKind> {
    let dropped = eco.pending.take();
    eco.pending_pos = None;
    eco.timer = 0.0;
    dropped
}

/// Fade buildings in while they are under construction.
pub fn construction_system(mut buildings: Query<&mut Building>) {
    for mut building in buildings.iter_mut() {
        if building.progress < CONSTRUCTION_TIME {
            building.progress += 1;
        }
    }
}
