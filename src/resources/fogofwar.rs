//! Fog of war resource.
//!
//! The map is split into [`TILE_SIZE`] tiles with two layers. `explored`
//! only ever turns on; `visible` is rebuilt on every [`FogOfWar::update`]
//! from the player's units and buildings.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

use crate::resources::mapbounds::{MapBounds, TILE_SIZE};

/// Reveal radius around a player unit.
pub const UNIT_VISION: f32 = 150.0;
/// Reveal radius around a player building.
pub const BUILDING_VISION: f32 = 200.0;
/// Fog opacity over explored tiles that are out of sight.
pub const EXPLORED_FOG_ALPHA: u8 = 100;

/// How a tile should be fogged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileFog {
    Unexplored,
    Explored,
    Visible,
}

#[derive(Resource, Debug, Clone)]
pub struct FogOfWar {
    cols: usize,
    rows: usize,
    explored: Vec<bool>,
    visible: Vec<bool>,
}

impl FogOfWar {
    pub fn new(map: &MapBounds) -> Self {
        let (cols, rows) = map.tiles();
        Self {
            cols,
            rows,
            explored: vec![false; cols * rows],
            visible: vec![false; cols * rows],
        }
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    fn tile_of(&self, p: Vector2) -> Option<(usize, usize)> {
        if !p.x.is_finite() || !p.y.is_finite() {
            return None;
        }
        let tx = (p.x / TILE_SIZE).floor();
        let ty = (p.y / TILE_SIZE).floor();
        if tx < 0.0 || ty < 0.0 {
            return None;
        }
        let (tx, ty) = (tx as usize, ty as usize);
        (tx < self.cols && ty < self.rows).then_some((tx, ty))
    }

    fn reveal(&mut self, center: Vector2, radius: f32) {
        let span = (radius / TILE_SIZE).floor() as i64;
        let cx = (center.x / TILE_SIZE).floor() as i64;
        let cy = (center.y / TILE_SIZE).floor() as i64;
        let r2 = radius * radius;
        let y0 = (cy - span).max(0);
        let y1 = (cy + span).min(self.rows as i64 - 1);
        let x0 = (cx - span).max(0);
        let x1 = (cx + span).min(self.cols as i64 - 1);
        for y in y0..=y1 {
            for x in x0..=x1 {
                let tile_center = Vector2::new(
                    x as f32 * TILE_SIZE + TILE_SIZE / 2.0,
                    y as f32 * TILE_SIZE + TILE_SIZE / 2.0,
                );
                let d = center - tile_center;
                if d.x * d.x + d.y * d.y <= r2 {
                    let i = y as usize * self.cols + x as usize;
                    self.explored[i] = true;
                    self.visible[i] = true;
                }
            }
        }
    }

    /// Rebuild visibility from the player's units and buildings.
    pub fn update(
        &mut self,
        units: impl IntoIterator<Item = Vector2>,
        buildings: impl IntoIterator<Item = Vector2>,
    ) {
        self.visible.iter_mut().for_each(|v| *v = false);
        for p in units {
            self.reveal(p, UNIT_VISION);
        }
        for p in buildings {
            self.reveal(p, BUILDING_VISION);
        }
    }

    pub fn is_visible(&self, p: Vector2) -> bool {
        self.tile_of(p)
            .map(|(x, y)| self.visible[y * self.cols + x])
            .unwrap_or(false)
    }

    pub fn is_explored(&self, p: Vector2) -> bool {
        self.tile_of(p)
            .map(|(x, y)| self.explored[y * self.cols + x])
            .unwrap_or(false)
    }

    /// Fog state of tile `(x, y)`.
    pub fn tile(&self, x: usize, y: usize) -> TileFog {
        let i = y * self.cols + x;
        if self.visible[i] {
            TileFog::Visible
        } else if self.explored[i] {
            TileFog::Explored
        } else {
            TileFog::Unexplored
        }
    }
}
