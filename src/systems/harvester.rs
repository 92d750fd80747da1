//! Harvester automation: field, load, haul, deposit, repeat.
use bevy_ecs::prelude::*;
use log::debug;
use raylib::prelude::Vector2;

use crate::components::gameobject::{Building, GameObject, ObjectKind};
use crate::components::harvester::{
    CAPACITY, HARVEST_TIME, Harvester, HarvesterState, RICH_FIELD, TRANSFER_RANGE,
};
use crate::components::health::Health;
use crate::components::ironfield::IronField;
use crate::components::mapposition::MapPosition;
use crate::components::orders::Orders;
use crate::components::team::Team;
use crate::resources::economy::Economies;

/// Field a harvester at `from` should head for: the nearest rich field,
/// else the nearest one with anything left.
pub fn choose_field(
    from: Vector2,
    fields: impl IntoIterator<Item = (Entity, Vector2, i32)>,
) -> Option<Entity> {
    let mut rich: Option<(Entity, f32)> = None;
    let mut any: Option<(Entity, f32)> = None;
    for (entity, pos, resources) in fields {
        if resources <= 0 {
            continue;
        }
        let d = (pos - from).length();
        if resources >= RICH_FIELD && rich.is_none_or(|(_, best)| d < best) {
            rich = Some((entity, d));
        }
        if any.is_none_or(|(_, best)| d < best) {
            any = Some((entity, d));
        }
    }
    rich.or(any).map(|(e, _)| e)
}

pub fn harvester_system(
    mut harvesters: Query<(&Team, &MapPosition, &mut Harvester, &mut Orders)>,
    mut fields: Query<(Entity, &MapPosition, &mut IronField)>,
    headquarters: Query<(&Team, &MapPosition, &GameObject, &Health), With<Building>>,
    mut economies: ResMut<Economies>,
) {
    for (team, position, mut harvester, mut orders) in harvesters.iter_mut() {
        match harvester.state {
            HarvesterState::MovingToField => {
                let keep = harvester
                    .field
                    .and_then(|f| fields.get(f).ok())
                    .is_some_and(|(_, _, field)| !field.is_empty());
                if !keep {
                    harvester.field = choose_field(
                        position.pos,
                        fields.iter().map(|(e, p, f)| (e, p.pos, f.resources)),
                    );
                }
                let Some((_, field_pos, _)) = harvester.field.and_then(|f| fields.get(f).ok()) else {
                    orders.target = None;
                    continue;
                };
                orders.target = Some(field_pos.pos);
                if position.distance_to(field_pos.pos) < TRANSFER_RANGE {
                    harvester.state = HarvesterState::Harvesting;
                    harvester.harvest_timer = HARVEST_TIME;
                    orders.target = None;
                }
            }
            HarvesterState::Harvesting => {
                let Some(mut field) = harvester
                    .field
                    .and_then(|f| fields.get_mut(f).ok())
                    .map(|(_, _, field)| field)
                else {
                    harvester.state = HarvesterState::MovingToField;
                    continue;
                };
                if harvester.harvest_timer > 0 {
                    harvester.harvest_timer -= 1;
                    continue;
                }
                let taken = field.take(CAPACITY - harvester.cargo);
                harvester.cargo += taken;
                harvester.state = HarvesterState::ReturningToHq;
            }
            HarvesterState::ReturningToHq => {
                let hq = headquarters
                    .iter()
                    .filter(|(t, _, obj, health)| {
                        *t == team && obj.kind == ObjectKind::Headquarters && health.is_alive()
                    })
                    .map(|(_, p, _, _)| p.pos)
                    .min_by(|a, b| {
                        position.distance_to(*a).total_cmp(&position.distance_to(*b))
                    });
                let Some(hq) = hq else {
                    orders.target = None;
                    continue;
                };
                orders.target = Some(hq);
                if position.distance_to(hq) < TRANSFER_RANGE {
                    debug!("{:?} harvester delivered {} iron", team, harvester.cargo);
                    economies.get_mut(*team).iron += harvester.cargo;
                    harvester.cargo = 0;
                    harvester.state = HarvesterState::MovingToField;
                    orders.target = None;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_rich_fields_over_closer_poor_ones() {
        let mut world = World::new();
        let poor = world.spawn_empty().id();
        let rich = world.spawn_empty().id();
        let empty = world.spawn_empty().id();
        let got = choose_field(
            Vector2::zero(),
            [
                (empty, Vector2::new(1.0, 0.0), 0),
                (poor, Vector2::new(10.0, 0.0), 400),
                (rich, Vector2::new(300.0, 0.0), 2000),
            ],
        );
        assert_eq!(got, Some(rich));
    }

    #[test]
    fn falls_back_to_nearest_non_empty() {
        let mut world = World::new();
        let near = world.spawn_empty().id();
        let far = world.spawn_empty().id();
        let got = choose_field(
            Vector2::zero(),
            [(far, Vector2::new(50.0, 0.0), 10), (near, Vector2::new(20.0, 0.0), 10)],
        );
        assert_eq!(got, Some(near));
        assert_eq!(choose_field(Vector2::zero(), Vec::new()), None);
    }
}
