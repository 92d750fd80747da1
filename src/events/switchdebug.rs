//! Debug view toggle.
//!
//! F11 triggers a [`SwitchDebugEvent`]; [`switch_debug_observer`] adds or
//! removes [`DebugMode`]. The renderer checks for the resource once per frame,
//! so the new view appears on the next recorded frame. Nothing else reads it.
use crate::resources::debugmode::DebugMode;
use crate::resources::worldtime::WorldTime;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

#[derive(Event, Debug, Clone, Copy)]
pub struct SwitchDebugEvent {}

pub fn switch_debug_observer(
    _trigger: On<SwitchDebugEvent>,
    mut commands: Commands,
    debug_mode: Option<Res<DebugMode>>,
    time: Option<Res<WorldTime>>,
) {
    let tick = time.map(|t| t.ticks).unwrap_or_default();
    match debug_mode {
        Some(_) => {
            commands.remove_resource::<DebugMode>();
            info!("Debug view off at tick {}", tick);
        }
        None => {
            commands.insert_resource(DebugMode {});
            info!("Debug view on at tick {}: fog hidden, sprites outlined", tick);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::observer::Observer;

    #[test]
    fn each_event_flips_the_view() {
        let mut world = World::new();
        world.spawn(Observer::new(switch_debug_observer));
        world.flush();

        world.trigger(SwitchDebugEvent {});
        world.flush();
        assert!(world.contains_resource::<DebugMode>());

        world.trigger(SwitchDebugEvent {});
        world.flush();
        assert!(!world.contains_resource::<DebugMode>());
    }
}
