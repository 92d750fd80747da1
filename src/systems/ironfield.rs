//! Iron field regrowth.
use bevy_ecs::prelude::*;

use crate::components::ironfield::{IronField, MAX_RESOURCES, REGEN_AMOUNT, REGEN_INTERVAL};

/// Every [`REGEN_INTERVAL`] ticks a field regrows [`REGEN_AMOUNT`] iron, up
/// to [`MAX_RESOURCES`]. Depleted fields regrow too.
pub fn iron_field_regen_system(mut fields: Query<&mut IronField>) {
    for mut field in fields.iter_mut() {
        if field.regen_timer > 0 {
            field.regen_timer -= 1;
        } else {
            field.resources = (field.resources + REGEN_AMOUNT).min(MAX_RESOURCES);
            field.regen_timer = REGEN_INTERVAL;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regrows_after_interval_and_caps() {
        let mut world = World::new();
        let f = world
            .spawn(IronField {
                resources: MAX_RESOURCES - 5,
                regen_timer: 1,
            })
            .id();
        let mut schedule = Schedule::default();
        schedule.add_systems(iron_field_regen_system);
        schedule.run(&mut world);
        assert_eq!(world.get::<IronField>(f).map(|f| f.resources), Some(MAX_RESOURCES - 5));
        schedule.run(&mut world);
        let field = world.get::<IronField>(f).copied().expect("field");
        assert_eq!(field.resources, MAX_RESOURCES);
        assert_eq!(field.regen_timer, REGEN_INTERVAL);
    }
}
