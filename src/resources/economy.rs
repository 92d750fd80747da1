//! Per-team economy: iron, power grid and the production queue.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;
use smallvec::SmallVec;

use crate::components::gameobject::ObjectKind;
use crate::components::team::Team;

/// Items a team may have queued at once.
pub const MAX_QUEUE: usize = 5;
/// Power every team gets without any power plant.
pub const BASE_POWER: i32 = 300;
/// Iron each team starts with.
pub const STARTING_IRON: i32 = 1500;

#[derive(Debug, Clone, PartialEq)]
pub struct Economy {
    pub iron: i32,
    pub queue: SmallVec<[ObjectKind; MAX_QUEUE]>,
    /// Ticks left on the item at the head of the queue. Zero means idle.
    pub timer: f32,
    /// Building finished and waiting to be placed.
    pub pending: Option<ObjectKind>,
    pub pending_pos: Option<Vector2>,
    pub power_output: i32,
    pub power_usage: i32,
}

impl Default for Economy {
    fn default() -> Self {
        Self {
            iron: STARTING_IRON,
            queue: SmallVec::new(),
            timer: 0.0,
            pending: None,
            pending_pos: None,
            power_output: BASE_POWER,
            power_usage: 0,
        }
    }
}

impl Economy {
    pub fn has_enough_power(&self) -> bool {
        self.power_output >= self.power_usage
    }

    pub fn queue_full(&self) -> bool {
        self.queue.len() >= MAX_QUEUE
    }

    pub fn can_afford(&self, kind: ObjectKind) -> bool {
        self.iron >= kind.cost()
    }

    /// Pay for `kind` and queue it. Refused when the queue is full or iron
    /// is short.
    pub fn buy(&mut self, kind: ObjectKind) -> Result<(), String> {
        if self.queue_full() {
            return Err(format!("production queue full ({} items)", MAX_QUEUE));
        }
        if !self.can_afford(kind) {
            return Err(format!(
                "{} costs {} but only {} iron left",
                kind.label(),
                kind.cost(),
                self.iron
            ));
        }
        self.iron -= kind.cost();
        self.queue.push(kind);
        Ok(())
    }

    /// Refund half the cost of a sold building.
    pub fn refund_sale(&mut self, kind: ObjectKind) -> i32 {
        let refund = kind.cost() / 2;
        self.iron += refund;
        refund
    }

    /// Fraction of the current item done, given its full production time.
    pub fn progress(&self, total: f32) -> Option<f32> {
        if self.queue.is_empty() || self.timer <= 0.0 || total <= 0.0 {
            return None;
        }
        Some((1.0 - self.timer / total).clamp(0.0, 1.0))
    }
}

/// Both teams' economies.
#[derive(Resource, Debug, Clone, Default)]
pub struct Economies {
    pub gdi: Economy,
    pub nod: Economy,
}

impl Economies {
    pub fn get(&self, team: Team) -> &Economy {
        match team {
            Team::Gdi => &self.gdi,
            Team::Nod => &self.nod,
        }
    }

    pub fn get_mut(&mut self, team: Team) -> &mut Economy {
        match team {
            Team::Gdi => &mut self.gdi,
            Team::Nod => &mut self.nod,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buying_deducts_and_queues() {
        let mut eco = Economy::default();
        eco.buy(ObjectKind::Infantry).expect("affordable");
        assert_eq!(eco.iron, STARTING_IRON - 100);
        assert_eq!(eco.queue.as_slice(), &[ObjectKind::Infantry]);
    }

    #[test]
    fn queue_is_capped() {
        let mut eco = Economy {
            iron: 10_000,
            ..Economy::default()
        };
        for _ in 0..MAX_QUEUE {
            eco.buy(ObjectKind::Infantry).expect("room left");
        }
        assert!(eco.buy(ObjectKind::Infantry).is_err());
        assert_eq!(eco.iron, 10_000 - 100 * MAX_QUEUE as i32);
    }

    #[test]
    fn cannot_buy_without_iron() {
        let mut eco = Economy {
            iron: 50,
            ..Economy::default()
        };
        assert!(eco.buy(ObjectKind::Infantry).is_err());
        assert!(eco.queue.is_empty());
        assert_eq!(eco.iron, 50);
    }

    #[test]
    fn power_balance() {
        let mut eco = Economy::default();
        eco.power_usage = BASE_POWER;
        assert!(eco.has_enough_power());
        eco.power_usage = BASE_POWER + 1;
        assert!(!eco.has_enough_power());
    }

    #[test]
    fn selling_refunds_half() {
        let mut eco = Economy {
            iron: 0,
            ..Economy::default()
        };
        assert_eq!(eco.refund_sale(ObjectKind::WarFactory), 500);
        assert_eq!(eco.iron, 500);
    }

    #[test]
    fn progress_reports_fraction_done() {
        let mut eco = Economy::default();
        assert_eq!(eco.progress(180.0), None);
        eco.queue.push(ObjectKind::Tank);
        eco.timer = 45.0;
        assert!((eco.progress(180.0).unwrap_or(0.0) - 0.75).abs() < 1e-6);
    }
}
