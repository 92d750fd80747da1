//! Fog of war refresh.
use bevy_ecs::prelude::*;

use crate::components::explored::Explored;
use crate::components::gameobject::{Building, Unit};
use crate::components::health::Health;
use crate::components::mapposition::MapPosition;
use crate::components::team::Team;
use crate::resources::fogofwar::FogOfWar;

/// Recompute visibility from the player's units and buildings, then mark
/// enemy buildings standing on explored ground as permanently seen.
pub fn fog_update_system(
    mut fog: ResMut<FogOfWar>,
    units: Query<(&Team, &MapPosition), With<Unit>>,
    buildings: Query<(Entity, &Team, &MapPosition, &Health, Has<Explored>), With<Building>>,
    mut commands: Commands,
) {
    fog.update(
        units
            .iter()
            .filter(|(team, _)| team.is_player())
            .map(|(_, p)| p.pos),
        buildings
            .iter()
            .filter(|(_, team, _, _, _)| team.is_player())
            .map(|(_, _, p, _, _)| p.pos),
    );
    for (entity, team, position, health, explored) in buildings.iter() {
        if !team.is_player() && !explored && health.is_alive() && fog.is_explored(position.pos) {
            commands.entity(entity).insert(Explored);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::gameobject::ObjectKind;
    use crate::prefabs::{spawn_building, spawn_unit};
    use crate::resources::mapbounds::MapBounds;
    use raylib::prelude::Vector2;

    fn spawn_with(world: &mut World, f: impl FnOnce(&mut Commands) -> Entity) -> Entity {
        let entity = {
            let mut commands = world.commands();
            f(&mut commands)
        };
        world.flush();
        entity
    }

    fn run_fog(world: &mut World) {
        let mut schedule = Schedule::default();
        schedule.add_systems(fog_update_system);
        schedule.run(world);
    }

    #[test]
    fn enemy_buildings_on_explored_ground_stay_explored() {
        let mut world = World::new();
        world.insert_resource(FogOfWar::new(&MapBounds::new(1600.0, 800.0)));
        let scout = spawn_with(&mut world, |c| {
            spawn_unit(c, ObjectKind::Infantry, Team::Gdi, Vector2::new(200.0, 200.0))
        });
        let near = spawn_with(&mut world, |c| {
            spawn_building(c, ObjectKind::Turret, Team::Nod, Vector2::new(240.0, 200.0), true)
        });
        let far = spawn_with(&mut world, |c| {
            spawn_building(c, ObjectKind::Barracks, Team::Nod, Vector2::new(1300.0, 600.0), true)
        });
        let wrecked = spawn_with(&mut world, |c| {
            spawn_building(c, ObjectKind::PowerPlant, Team::Nod, Vector2::new(150.0, 250.0), true)
        });
        world.get_mut::<Health>(wrecked).expect("health").current = 0;

        run_fog(&mut world);

        assert!(world.get::<Explored>(near).is_some());
        assert!(world.get::<Explored>(far).is_none());
        assert!(world.get::<Explored>(wrecked).is_none());

        // the scout leaves; the building stays known but drops out of sight
        world.entity_mut(scout).despawn();
        run_fog(&mut world);
        assert!(world.get::<Explored>(near).is_some());
        let centre = world.get::<MapPosition>(near).map(|p| p.pos).expect("position");
        let fog = world.resource::<FogOfWar>();
        assert!(fog.is_explored(centre));
        assert!(!fog.is_visible(centre));
    }
}
