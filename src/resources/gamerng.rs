//! Seeded random source shared by spawning, particles and the AI.

use bevy_ecs::prelude::Resource;

/// Wrapper around [`fastrand::Rng`] so a fixed seed replays a match.
#[derive(Resource, Debug, Clone)]
pub struct GameRng(pub fastrand::Rng);

impl GameRng {
    pub fn seeded(seed: u64) -> Self {
        Self(fastrand::Rng::with_seed(seed))
    }

    /// Uniform float in `[min, max)`.
    pub fn range_f32(&mut self, min: f32, max: f32) -> f32 {
        if max <= min {
            return min;
        }
        min + self.0.f32() * (max - min)
    }

    /// Uniform integer in `[min, max]`.
    pub fn range_u32(&mut self, min: u32, max: u32) -> u32 {
        if max <= min {
            return min;
        }
        self.0.u32(min..=max)
    }

    /// `true` with probability `p`.
    pub fn chance(&mut self, p: f32) -> bool {
        self.0.f32() < p
    }

    pub fn pick<T: Copy>(&mut self, items: &[T]) -> Option<T> {
        if items.is_empty() {
            return None;
        }
        Some(items[self.0.usize(..items.len())])
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self(fastrand::Rng::new())
    }
}
