use bevy_ecs::prelude::Component;

/// Heading of a turret or tank hull in radians, plus barrel recoil ticks.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct Facing {
    pub angle: f32,
    pub recoil: u32,
}
