//! Harvester automation state.

use bevy_ecs::prelude::{Component, Entity};

/// Cargo a harvester can carry.
pub const CAPACITY: i32 = 100;
/// Ticks spent loading at a field.
pub const HARVEST_TIME: u32 = 40;
/// Distance within which iron is loaded or delivered.
pub const TRANSFER_RANGE: f32 = 30.0;
/// Fields at least this rich are preferred over closer ones.
pub const RICH_FIELD: i32 = 1000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HarvesterState {
    MovingToField,
    Harvesting,
    ReturningToHq,
}

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Harvester {
    pub cargo: i32,
    pub state: HarvesterState,
    pub field: Option<Entity>,
    pub harvest_timer: u32,
}

impl Default for Harvester {
    fn default() -> Self {
        Self {
            cargo: 0,
            state: HarvesterState::MovingToField,
            field: None,
            harvest_timer: HARVEST_TIME,
        }
    }
}
