use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Short-lived effect dot: muzzle smoke, sparks, trails, explosions.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub velocity: Vector2,
    pub lifetime: u32,
    pub initial_lifetime: u32,
}

impl Particle {
    pub fn new(velocity: Vector2, lifetime: u32) -> Self {
        Self {
            velocity,
            lifetime,
            initial_lifetime: lifetime,
        }
    }

    /// Opacity in `[0, 1]`, fading with remaining lifetime.
    pub fn alpha(&self) -> f32 {
        if self.initial_lifetime == 0 {
            return 0.0;
        }
        self.lifetime as f32 / self.initial_lifetime as f32
    }
}
