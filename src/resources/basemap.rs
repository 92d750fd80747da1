//! Grass tiles painted under everything else.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Color;

use crate::resources::gamerng::GameRng;
use crate::resources::mapbounds::MapBounds;

/// Colour of the occasional darker tuft.
pub const SPOT_COLOR: Color = Color::new(0, 80, 0, 255);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrassTile {
    pub color: Color,
    pub spot: bool,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct BaseMap {
    pub cols: usize,
    pub rows: usize,
    /// Row-major tiles.
    pub tiles: Vec<GrassTile>,
}

impl BaseMap {
    /// Random shades of green, one in ten tiles with a dark spot.
    pub fn generate(map: &MapBounds, rng: &mut GameRng) -> Self {
        let (cols, rows) = map.tiles();
        let tiles = (0..cols * rows)
            .map(|_| GrassTile {
                color: Color::new(0, rng.0.u8(100..=150), 0, 255),
                spot: rng.chance(0.1),
            })
            .collect();
        Self { cols, rows, tiles }
    }

    pub fn tile(&self, x: usize, y: usize) -> Option<&GrassTile> {
        if x >= self.cols || y >= self.rows {
            return None;
        }
        self.tiles.get(y * self.cols + x)
    }
}
