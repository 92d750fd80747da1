//! Removal of destroyed units and buildings.
use bevy_ecs::prelude::*;

use crate::components::gameobject::{Building, GameObject};
use crate::components::health::Health;
use crate::components::mapposition::MapPosition;
use crate::components::team::Team;
use crate::events::destroyed::EntityDestroyedEvent;
use crate::prefabs::{DEBRIS, spawn_burst};
use crate::resources::gamerng::GameRng;

/// Despawn every object at or below zero health. Buildings leave debris.
pub fn death_system(
    objects: Query<(Entity, &GameObject, &Team, &Health, &MapPosition, Has<Building>)>,
    mut rng: ResMut<GameRng>,
    mut commands: Commands,
) {
    for (entity, obj, team, health, position, is_building) in objects.iter() {
        if health.is_alive() {
            continue;
        }
        if is_building {
            spawn_burst(&mut commands, &mut rng, position.pos, DEBRIS);
        }
        commands.trigger(EntityDestroyedEvent {
            entity,
            kind: obj.kind,
            team: *team,
        });
        commands.entity(entity).try_despawn();
    }
}

/// Clear the per-frame under-attack flags once the frame has been drawn.
pub fn clear_under_attack_system(mut query: Query<&mut Health>) {
    for mut health in query.iter_mut() {
        if health.under_attack {
            health.under_attack = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::particle::Particle;
    use crate::components::gameobject::ObjectKind;
    use crate::events::destroyed::entity_destroyed_observer;
    use crate::prefabs::{spawn_building, spawn_unit};
    use crate::resources::selection::SelectionState;
    use bevy_ecs::observer::Observer;
    use raylib::prelude::Vector2;

    fn world() -> World {
        let mut world = World::new();
        world.insert_resource(GameRng::seeded(4));
        world.insert_resource(SelectionState::default());
        world.spawn(Observer::new(entity_destroyed_observer));
        world.flush();
        world
    }

    fn spawn_with(world: &mut World, f: impl FnOnce(&mut Commands) -> Entity) -> Entity {
        let entity = {
            let mut commands = world.commands();
            f(&mut commands)
        };
        world.flush();
        entity
    }

    fn run_death(world: &mut World) {
        let mut schedule = Schedule::default();
        schedule.add_systems(death_system);
        schedule.run(world);
    }

    fn particles(world: &mut World) -> usize {
        world.query::<&Particle>().iter(world).count()
    }

    #[test]
    fn destroyed_building_bursts_and_leaves_the_selection() {
        let mut world = world();
        let barracks = spawn_with(&mut world, |c| {
            spawn_building(c, ObjectKind::Barracks, Team::Gdi, Vector2::new(100.0, 100.0), true)
        });
        world.resource_mut::<SelectionState>().building = Some(barracks);
        world.get_mut::<Health>(barracks).expect("health").current = 0;

        run_death(&mut world);

        assert!(world.get::<GameObject>(barracks).is_none());
        assert_eq!(particles(&mut world), DEBRIS.count);
        assert_eq!(DEBRIS.count, 15);
        assert_eq!(world.resource::<SelectionState>().building, None);
    }

    #[test]
    fn dead_units_vanish_without_debris() {
        let mut world = world();
        let dead = spawn_with(&mut world, |c| {
            spawn_unit(c, ObjectKind::Infantry, Team::Nod, Vector2::new(100.0, 100.0))
        });
        let alive = spawn_with(&mut world, |c| {
            spawn_unit(c, ObjectKind::Infantry, Team::Nod, Vector2::new(200.0, 100.0))
        });
        world.get_mut::<Health>(dead).expect("health").damage(500);

        run_death(&mut world);

        assert!(world.get::<GameObject>(dead).is_none());
        assert!(world.get::<GameObject>(alive).is_some());
        assert_eq!(particles(&mut world), 0);
    }

    #[test]
    fn under_attack_flags_clear() {
        let mut world = World::new();
        let mut health = Health::new(100);
        health.damage(10);
        let e = world.spawn(health).id();
        let mut schedule = Schedule::default();
        schedule.add_systems(clear_under_attack_system);
        schedule.run(&mut world);
        let health = world.get::<Health>(e).copied().expect("health");
        assert!(!health.under_attack);
        assert_eq!(health.current, 90);
    }
}
