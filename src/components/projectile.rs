use bevy_ecs::prelude::{Component, Entity};

use crate::components::team::Team;

/// World units travelled per tick.
pub const SPEED: f32 = 6.0;
/// Distance to the target at which a shell bursts.
pub const HIT_RADIUS: f32 = 3.0;
/// Ticks between trail particles.
pub const TRAIL_INTERVAL: u32 = 2;

/// A shell homing on `target`. Belongs to the firing team.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Projectile {
    pub target: Entity,
    pub damage: i32,
    pub team: Team,
    pub particle_timer: u32,
}

impl Projectile {
    pub fn new(target: Entity, damage: i32, team: Team) -> Self {
        Self {
            target,
            damage,
            team,
            particle_timer: TRAIL_INTERVAL,
        }
    }
}
