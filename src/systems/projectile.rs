//! Shell flight and impacts.
use bevy_ecs::prelude::*;
use raylib::prelude::{Color, Vector2};

use crate::components::boxcollider::BoxCollider;
use crate::components::facing::Facing;
use crate::components::gameobject::GameObject;
use crate::components::health::Health;
use crate::components::mapposition::MapPosition;
use crate::components::projectile::{HIT_RADIUS, Projectile, SPEED, TRAIL_INTERVAL};
use crate::components::team::Team;
use crate::prefabs::{EXPLOSION, IMPACT, spawn_burst, spawn_particle};
use crate::resources::gamerng::GameRng;

const TRAIL_COLOR: Color = Color::new(255, 255, 150, 255);
const TRAIL_SIZE: f32 = 5.0;
const TRAIL_LIFETIME: u32 = 15;

/// Steer every shell toward its target.
///
/// A shell whose target is gone or dead vanishes; one within
/// [`HIT_RADIUS`] of its target bursts.
pub fn projectile_flight_system(
    mut shells: Query<(Entity, &mut MapPosition, &mut Projectile, &mut Facing)>,
    targets: Query<(&MapPosition, &Health), Without<Projectile>>,
    mut rng: ResMut<GameRng>,
    mut commands: Commands,
) {
    for (entity, mut position, mut shell, mut facing) in shells.iter_mut() {
        let Some(target) = targets
            .get(shell.target)
            .ok()
            .filter(|(_, health)| health.is_alive())
            .map(|(p, _)| p.pos)
        else {
            commands.entity(entity).try_despawn();
            continue;
        };

        let d = position.displacement_to(target);
        let dist = d.length();
        if dist <= HIT_RADIUS {
            spawn_burst(&mut commands, &mut rng, position.pos, EXPLOSION);
            commands.entity(entity).try_despawn();
            continue;
        }

        facing.angle = d.y.atan2(d.x);
        let dir = d * (1.0 / dist);
        position.pos = position.pos + dir * SPEED.min(dist);

        if shell.particle_timer == 0 {
            let velocity = Vector2::new(
                -dir.x * rng.range_f32(0.5, 1.5),
                -dir.y * rng.range_f32(0.5, 1.5),
            );
            spawn_particle(
                &mut commands,
                position.pos,
                velocity,
                TRAIL_SIZE,
                TRAIL_COLOR,
                TRAIL_LIFETIME,
            );
            shell.particle_timer = TRAIL_INTERVAL;
        } else {
            shell.particle_timer -= 1;
        }
    }
}

/// Detonate shells touching any living enemy unit or building.
pub fn projectile_hit_system(
    shells: Query<(Entity, &Projectile, &MapPosition, &BoxCollider)>,
    mut victims: Query<
        (&Team, &MapPosition, &BoxCollider, &mut Health),
        (With<GameObject>, Without<Projectile>),
    >,
    mut rng: ResMut<GameRng>,
    mut commands: Commands,
) {
    for (entity, shell, position, collider) in shells.iter() {
        let hit = victims.iter_mut().find(|(team, pos, col, health)| {
            **team != shell.team
                && health.is_alive()
                && collider.overlaps(position.pos, col, pos.pos)
        });
        if let Some((_, _, _, mut health)) = hit {
            health.damage(shell.damage);
            spawn_burst(&mut commands, &mut rng, position.pos, IMPACT);
            commands.entity(entity).try_despawn();
        }
    }
}
