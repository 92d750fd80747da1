//! Destruction notifications.
//!
//! The death system triggers an [`EntityDestroyedEvent`] just before it
//! despawns a unit or building; the observer here drops any lingering
//! reference the player's selection holds to it.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::gameobject::ObjectKind;
use crate::components::team::Team;
use crate::resources::selection::SelectionState;

#[derive(Event, Debug, Clone, Copy)]
pub struct EntityDestroyedEvent {
    pub entity: Entity,
    pub kind: ObjectKind,
    pub team: Team,
}

pub fn entity_destroyed_observer(
    trigger: On<EntityDestroyedEvent>,
    mut selection: Option<ResMut<SelectionState>>,
) {
    let event = trigger.event();
    debug!("{:?} {:?} destroyed ({:?})", event.team, event.kind, event.entity);
    if let Some(selection) = selection.as_deref_mut() {
        if selection.building == Some(event.entity) {
            selection.building = None;
        }
    }
}
