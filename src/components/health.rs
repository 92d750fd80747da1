//! Hit points of units and buildings.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Health {
    pub current: i32,
    pub max: i32,
    /// Set when damage lands this frame; cleared after the frame is drawn.
    pub under_attack: bool,
}

impl Health {
    pub fn new(max: i32) -> Self {
        Self {
            current: max,
            max,
            under_attack: false,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0
    }

    /// Fraction of hit points left, in `[0, 1]`.
    pub fn ratio(&self) -> f32 {
        if self.max <= 0 {
            return 0.0;
        }
        (self.current.max(0) as f32 / self.max as f32).min(1.0)
    }

    pub fn damage(&mut self, amount: i32) {
        self.current -= amount;
        self.under_attack = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_marks_under_attack() {
        let mut h = Health::new(100);
        assert!(!h.under_attack);
        h.damage(30);
        assert_eq!(h.current, 70);
        assert!(h.under_attack);
        assert!((h.ratio() - 0.7).abs() < 1e-6);
    }

    #[test]
    fn overkill_clamps_ratio() {
        let mut h = Health::new(10);
        h.damage(25);
        assert!(!h.is_alive());
        assert_eq!(h.ratio(), 0.0);
    }
}
