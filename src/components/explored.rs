use bevy_ecs::prelude::Component;

/// Marker for enemy buildings the player has seen at least once.
/// They stay drawn under the fog from then on.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Explored;
