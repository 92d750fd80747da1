//! Registry for state hook systems.
//!
//! Systems that run once on entering a game state are registered with
//! [`bevy_ecs::world::World::register_system`] and stored here under a
//! [`StateHook`] so the state observer can run them without knowing where
//! they live.

use bevy_ecs::prelude::Resource;
use bevy_ecs::system::SystemId;
use rustc_hash::FxHashMap;

/// Well-known hook points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateHook {
    /// Build the match: map, fog, bases, starting armies.
    Setup,
    /// Hand control to the player.
    EnterPlay,
}

#[derive(Resource, Default)]
pub struct SystemsStore {
    map: FxHashMap<StateHook, SystemId>,
}

impl SystemsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, hook: StateHook, id: SystemId) {
        self.map.insert(hook, id);
    }

    pub fn get(&self, hook: StateHook) -> Option<SystemId> {
        self.map.get(&hook).copied()
    }
}
