//! Game state transition event and observer.
//!
//! Systems request a change to the high-level [`GameStates`] by updating
//! [`NextGameState`]; `check_pending_state` then emits a
//! [`GameStateChangedEvent`], and the observer in this module applies the
//! transition and runs the matching hook from [`SystemsStore`].
use crate::resources::gamestate::NextGameStates::{Pending, Unchanged};
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::systemsstore::{StateHook, SystemsStore};
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

/// Event used to indicate that a pending game state transition should be
/// applied.
#[derive(Event, Debug, Clone, Copy)]
pub struct GameStateChangedEvent {}

/// Observer that applies a pending game state transition.
///
/// - Reads the intention from [`NextGameState`].
/// - If pending, copies the new value into [`GameState`], clears the
///   request and runs the enter hook of the new state.
/// - If a resource or hook is missing, logs a warning and returns.
pub fn observe_gamestate_change_event(
    _trigger: On<GameStateChangedEvent>,
    mut commands: Commands,
    mut next_game_state: Option<ResMut<NextGameState>>,
    mut game_state: Option<ResMut<GameState>>,
    systems_store: Option<Res<SystemsStore>>,
) {
    let (Some(next_game_state), Some(game_state)) =
        (next_game_state.as_deref_mut(), game_state.as_deref_mut())
    else {
        warn!(
            "GameStateChangedEvent without state resources. next_state: {}, game_state: {}",
            next_game_state.is_some(),
            game_state.is_some()
        );
        return;
    };

    match next_game_state.get() {
        Pending(new_state) => {
            info!("Transitioning from {:?} to {:?}", game_state.get(), new_state);
            game_state.set(new_state);
            next_game_state.reset();
            let hook = match new_state {
                GameStates::None => None,
                GameStates::Setup => Some(StateHook::Setup),
                GameStates::Playing => Some(StateHook::EnterPlay),
            };
            if let Some(hook) = hook {
                match systems_store.as_deref().and_then(|s| s.get(hook)) {
                    Some(id) => commands.run_system(id),
                    None => warn!("No system registered for {:?}", hook),
                }
            }
        }
        Unchanged => debug!("No state change pending."),
    }
}
