use bevy_ecs::prelude::Component;

/// Marker for player units in the current selection.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Selected;
