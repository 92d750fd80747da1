use bevy_ecs::prelude::Component;

pub const MAX_RESOURCES: i32 = 5000;
pub const REGEN_AMOUNT: i32 = 15;
pub const REGEN_INTERVAL: u32 = 500;

/// Stationary iron deposit mined by harvesters.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct IronField {
    pub resources: i32,
    pub regen_timer: u32,
}

impl Default for IronField {
    fn default() -> Self {
        Self {
            resources: MAX_RESOURCES,
            regen_timer: REGEN_INTERVAL,
        }
    }
}

impl IronField {
    pub fn is_empty(&self) -> bool {
        self.resources <= 0
    }

    /// Drawing opacity, proportional to what is left.
    pub fn richness(&self) -> f32 {
        (self.resources.clamp(0, MAX_RESOURCES) as f32) / MAX_RESOURCES as f32
    }

    /// Remove up to `amount` iron and return what was taken.
    pub fn take(&mut self, amount: i32) -> i32 {
        let taken = amount.min(self.resources).max(0);
        self.resources -= taken;
        taken
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_never_overdraws() {
        let mut f = IronField {
            resources: 60,
            regen_timer: REGEN_INTERVAL,
        };
        assert_eq!(f.take(100), 60);
        assert!(f.is_empty());
        assert_eq!(f.take(100), 0);
        assert_eq!(f.richness(), 0.0);
    }
}
