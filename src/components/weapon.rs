//! Weapon stats and cooldown state.

use bevy_ecs::prelude::Component;

/// How damage reaches the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delivery {
    /// Damage lands immediately with a few sparks.
    Direct,
    /// A shell is spawned that homes on the target.
    Projectile,
}

/// Which enemy objects a weapon may pick on its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetFilter {
    Any,
    UnitsOnly,
    InfantryOnly,
}

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Weapon {
    pub range: f32,
    pub damage: i32,
    pub cooldown_period: u32,
    /// Ticks left until the weapon may fire again.
    pub cooldown: u32,
    pub delivery: Delivery,
    pub targets: TargetFilter,
    /// A chased target farther than this is dropped. Zero disables chasing.
    pub tracking_range: f32,
}

impl Weapon {
    pub fn ready(&self) -> bool {
        self.cooldown == 0
    }

    pub fn reset_cooldown(&mut self) {
        self.cooldown = self.cooldown_period;
    }

    pub fn tick(&mut self) {
        self.cooldown = self.cooldown.saturating_sub(1);
    }
}
