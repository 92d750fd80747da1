use bevy_ecs::prelude::Resource;

/// Frame timing. The simulation itself advances in whole ticks, one per
/// frame; `delta` only feeds the FPS readout.
#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
    pub ticks: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            ticks: 0,
        }
    }
}

impl WorldTime {
    /// Frames per second derived from the last delta.
    pub fn fps(&self) -> f32 {
        if self.delta > 0.0 { 1.0 / self.delta } else { 0.0 }
    }
}
