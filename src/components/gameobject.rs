//! Object catalogue: what every unit and building kind costs, weighs on the
//! power grid, looks like and fights with.
//!
//! Units and buildings carry a [`GameObject`] naming their kind plus one of
//! the [`Unit`] / [`Building`] markers so systems can query either family.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

use crate::components::team::Team;
use crate::components::weapon::{Delivery, TargetFilter, Weapon};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Infantry,
    Tank,
    Harvester,
    Barracks,
    WarFactory,
    PowerPlant,
    Headquarters,
    Turret,
}

/// Ticks a building needs to fade in after placement.
pub const CONSTRUCTION_TIME: u32 = 50;
/// Base production time in ticks before producer bonuses.
pub const BASE_PRODUCTION_TIME: f32 = 180.0;
/// Each additional producer speeds production by this factor.
pub const PRODUCER_BONUS: f32 = 0.9;

impl ObjectKind {
    pub const UNITS: [ObjectKind; 3] = [ObjectKind::Tank, ObjectKind::Infantry, ObjectKind::Harvester];
    pub const BUILDINGS: [ObjectKind; 4] = [
        ObjectKind::Barracks,
        ObjectKind::WarFactory,
        ObjectKind::PowerPlant,
        ObjectKind::Headquarters,
    ];
    pub const DEFENSIVE: [ObjectKind; 1] = [ObjectKind::Turret];

    pub fn is_unit(self) -> bool {
        matches!(
            self,
            ObjectKind::Infantry | ObjectKind::Tank | ObjectKind::Harvester
        )
    }

    pub fn is_building(self) -> bool {
        !self.is_unit()
    }

    /// Infantry, tanks and turrets. Used by the AI to size up armies.
    pub fn is_military(self) -> bool {
        matches!(
            self,
            ObjectKind::Infantry | ObjectKind::Tank | ObjectKind::Turret
        )
    }

    pub fn cost(self) -> i32 {
        match self {
            ObjectKind::Infantry => 100,
            ObjectKind::Tank => 500,
            ObjectKind::Harvester => 800,
            ObjectKind::Barracks => 500,
            ObjectKind::WarFactory => 1000,
            ObjectKind::PowerPlant => 300,
            ObjectKind::Headquarters => 2000,
            ObjectKind::Turret => 600,
        }
    }

    pub fn power_usage(self) -> i32 {
        match self {
            ObjectKind::Infantry => 5,
            ObjectKind::Tank => 15,
            ObjectKind::Harvester => 20,
            ObjectKind::Barracks => 25,
            ObjectKind::WarFactory => 35,
            ObjectKind::Turret => 25,
            ObjectKind::PowerPlant | ObjectKind::Headquarters => 0,
        }
    }

    pub fn power_output(self) -> i32 {
        match self {
            ObjectKind::PowerPlant => 100,
            _ => 0,
        }
    }

    /// Footprint of the object in world units.
    pub fn size(self) -> Vector2 {
        let (w, h) = match self {
            ObjectKind::Infantry => (16.0, 16.0),
            ObjectKind::Tank => (30.0, 20.0),
            ObjectKind::Harvester => (50.0, 30.0),
            ObjectKind::Headquarters => (80.0, 80.0),
            ObjectKind::Turret => (50.0, 50.0),
            ObjectKind::Barracks | ObjectKind::WarFactory | ObjectKind::PowerPlant => {
                (60.0, 60.0)
            }
        };
        Vector2::new(w, h)
    }

    pub fn max_health(self, team: Team) -> i32 {
        match (self, team) {
            (ObjectKind::Infantry, Team::Gdi) => 100,
            (ObjectKind::Infantry, Team::Nod) => 60,
            (ObjectKind::Tank, Team::Gdi) => 200,
            (ObjectKind::Tank, Team::Nod) => 120,
            (ObjectKind::Harvester, _) => 300,
            (ObjectKind::Barracks, _) => 600,
            (ObjectKind::WarFactory, _) => 800,
            (ObjectKind::PowerPlant, _) => 500,
            (ObjectKind::Headquarters, _) => 1200,
            (ObjectKind::Turret, _) => 500,
        }
    }

    /// Movement speed in world units per tick; zero for buildings.
    pub fn speed(self, team: Team) -> f32 {
        match (self, team) {
            (ObjectKind::Infantry, Team::Gdi) => 3.5,
            (ObjectKind::Infantry, Team::Nod) => 4.0,
            (ObjectKind::Tank, Team::Gdi) => 2.5,
            (ObjectKind::Tank, Team::Nod) => 3.0,
            (ObjectKind::Harvester, _) => 2.5,
            _ => 0.0,
        }
    }

    pub fn weapon(self, team: Team) -> Option<Weapon> {
        match self {
            ObjectKind::Infantry => Some(Weapon {
                range: 50.0,
                damage: 8,
                cooldown_period: 25,
                cooldown: 0,
                delivery: Delivery::Direct,
                targets: TargetFilter::Any,
                tracking_range: 200.0,
            }),
            ObjectKind::Tank => Some(Weapon {
                range: 200.0,
                damage: if team == Team::Gdi { 20 } else { 15 },
                cooldown_period: 50,
                cooldown: 0,
                delivery: Delivery::Projectile,
                targets: TargetFilter::Any,
                tracking_range: 250.0,
            }),
            ObjectKind::Harvester => Some(Weapon {
                range: 50.0,
                damage: 10,
                cooldown_period: 30,
                cooldown: 0,
                delivery: Delivery::Direct,
                targets: TargetFilter::InfantryOnly,
                tracking_range: 0.0,
            }),
            ObjectKind::Turret => Some(Weapon {
                range: 180.0,
                damage: 15,
                cooldown_period: 25,
                cooldown: 0,
                delivery: Delivery::Projectile,
                targets: TargetFilter::UnitsOnly,
                tracking_range: 0.0,
            }),
            _ => None,
        }
    }

    /// Building kind that must stand before this kind can be bought.
    pub fn requirement(self) -> Option<ObjectKind> {
        match self {
            ObjectKind::Infantry => Some(ObjectKind::Barracks),
            ObjectKind::Tank | ObjectKind::Harvester => Some(ObjectKind::WarFactory),
            _ => None,
        }
    }

    /// Building kind whose count shortens production and that units spawn
    /// next to.
    pub fn producer(self) -> ObjectKind {
        match self {
            ObjectKind::Infantry => ObjectKind::Barracks,
            ObjectKind::Tank | ObjectKind::Harvester => ObjectKind::WarFactory,
            _ => ObjectKind::Headquarters,
        }
    }

    /// Production time in ticks given the number of living producers.
    pub fn production_time(self, producers: usize) -> f32 {
        if self.is_building() {
            return BASE_PRODUCTION_TIME;
        }
        BASE_PRODUCTION_TIME * PRODUCER_BONUS.powi(producers as i32)
    }

    pub fn label(self) -> &'static str {
        match self {
            ObjectKind::Infantry => "Infantry",
            ObjectKind::Tank => "Tank",
            ObjectKind::Harvester => "Harvester",
            ObjectKind::Barracks => "Barracks",
            ObjectKind::WarFactory => "War Factory",
            ObjectKind::PowerPlant => "Power Plant",
            ObjectKind::Headquarters => "Headquarters",
            ObjectKind::Turret => "Turret",
        }
    }
}

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameObject {
    pub kind: ObjectKind,
}

impl GameObject {
    pub fn new(kind: ObjectKind) -> Self {
        Self { kind }
    }
}

/// Marker for mobile objects.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Unit;

/// Marker for stationary objects. Fades in while `progress` climbs to
/// [`CONSTRUCTION_TIME`].
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Building {
    pub progress: u32,
}

impl Building {
    pub fn built() -> Self {
        Self {
            progress: CONSTRUCTION_TIME,
        }
    }

    pub fn opacity(&self) -> f32 {
        (self.progress.min(CONSTRUCTION_TIME) as f32) / CONSTRUCTION_TIME as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_time_shrinks_with_producers() {
        assert!((ObjectKind::Infantry.production_time(0) - 180.0).abs() < 1e-4);
        assert!((ObjectKind::Infantry.production_time(1) - 162.0).abs() < 1e-3);
        assert!((ObjectKind::Tank.production_time(2) - 145.8).abs() < 1e-3);
    }

    #[test]
    fn buildings_ignore_producer_count() {
        assert_eq!(ObjectKind::Turret.production_time(5), BASE_PRODUCTION_TIME);
        assert_eq!(ObjectKind::Barracks.production_time(3), BASE_PRODUCTION_TIME);
    }

    #[test]
    fn team_dependent_stats() {
        assert_eq!(ObjectKind::Tank.max_health(Team::Gdi), 200);
        assert_eq!(ObjectKind::Tank.max_health(Team::Nod), 120);
        assert_eq!(ObjectKind::Tank.weapon(Team::Nod).map(|w| w.damage), Some(15));
        assert_eq!(ObjectKind::Infantry.speed(Team::Nod), 4.0);
        assert_eq!(ObjectKind::Barracks.speed(Team::Gdi), 0.0);
        assert!(ObjectKind::PowerPlant.weapon(Team::Gdi).is_none());
    }

    #[test]
    fn requirements_follow_producers() {
        assert_eq!(ObjectKind::Harvester.requirement(), Some(ObjectKind::WarFactory));
        assert_eq!(ObjectKind::Infantry.requirement(), Some(ObjectKind::Barracks));
        assert_eq!(ObjectKind::Turret.requirement(), None);
        assert_eq!(ObjectKind::Turret.producer(), ObjectKind::Headquarters);
    }

    #[test]
    fn construction_opacity_ramps() {
        let mut b = Building::default();
        assert_eq!(b.opacity(), 0.0);
        b.progress = CONSTRUCTION_TIME / 2;
        assert!((b.opacity() - 0.5).abs() < 1e-6);
        assert_eq!(Building::built().opacity(), 1.0);
    }
}
