//! Particle drift and expiry.
use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::particle::Particle;

/// Moves particles by their velocity and despawns them when their lifetime
/// runs out.
pub fn particle_system(
    mut query: Query<(Entity, &mut MapPosition, &mut Particle)>,
    mut commands: Commands,
) {
    for (entity, mut position, mut particle) in query.iter_mut() {
        position.pos = position.pos + particle.velocity;
        particle.lifetime = particle.lifetime.saturating_sub(1);
        if particle.lifetime == 0 {
            commands.entity(entity).try_despawn();
        }
    }
}
