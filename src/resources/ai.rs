//! State of the computer opponent.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

/// Ticks between production decisions.
pub const ACTION_INTERVAL: u32 = 50;
/// Ticks between scouting rounds.
pub const SCOUT_INTERVAL: u32 = 200;
/// Enemy units closer than this to the HQ put the AI on alert.
pub const THREAT_RANGE: f32 = 500.0;
pub const MAX_WAVE_SIZE: usize = 25;
pub const SURPRISE_COOLDOWN: u32 = 300;
/// Ticks the AI stays defensive after its HQ is hit.
pub const DEFENSE_COOLDOWN: u32 = 300;

/// Mood of the AI, re-evaluated every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AiState {
    /// Low on iron or income.
    Broke,
    /// HQ damaged or recently hit.
    Attacked,
    /// Enemy units near the HQ.
    Threatened,
    /// Strong enough to push.
    Aggressive,
    #[default]
    BuildUp,
}

#[derive(Resource, Debug, Clone)]
pub struct AiController {
    pub timer: u32,
    pub wave_timer: u32,
    pub wave_interval: u32,
    pub wave_number: u32,
    pub state: AiState,
    pub defense_cooldown: u32,
    pub scout_targets: Vec<Vector2>,
    pub income_rate: f32,
    pub scout_timer: u32,
    pub surprise_cooldown: u32,
}

impl AiController {
    pub fn new(wave_interval: u32) -> Self {
        Self {
            timer: 0,
            wave_timer: 0,
            wave_interval,
            wave_number: 0,
            state: AiState::BuildUp,
            defense_cooldown: 0,
            scout_targets: Vec::new(),
            income_rate: 0.0,
            scout_timer: 0,
            surprise_cooldown: 0,
        }
    }
}
