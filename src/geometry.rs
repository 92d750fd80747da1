//! Grid, footprint and formation math shared by input handling, production
//! and the AI.

use raylib::prelude::{Rectangle, Vector2};

use crate::components::gameobject::ObjectKind;
use crate::components::team::Team;
use crate::resources::mapbounds::{MapBounds, TILE_SIZE};

/// Max distance from a friendly building's centre at which construction may
/// start.
pub const CONSTRUCTION_RANGE: f32 = 160.0;

const FORMATION_COLS: usize = 5;
const FORMATION_ROWS: usize = 4;
const FORMATION_SPACING: f32 = 20.0;

/// A living building as seen by placement checks.
#[derive(Clone, Copy, Debug)]
pub struct Footprint {
    pub team: Team,
    pub center: Vector2,
    pub rect: Rectangle,
}

/// Top-left corner of the tile containing `p`.
pub fn snap_to_grid(p: Vector2) -> Vector2 {
    Vector2::new(
        (p.x / TILE_SIZE).floor() * TILE_SIZE,
        (p.y / TILE_SIZE).floor() * TILE_SIZE,
    )
}

/// Strict overlap; rectangles sharing only an edge do not overlap.
pub fn rects_overlap(a: &Rectangle, b: &Rectangle) -> bool {
    a.x < b.x + b.width && a.x + a.width > b.x && a.y < b.y + b.height && a.y + a.height > b.y
}

/// Point test, inclusive of the top/left edges and exclusive of the others.
pub fn rect_contains_point(r: &Rectangle, p: Vector2) -> bool {
    p.x >= r.x && p.x < r.x + r.width && p.y >= r.y && p.y < r.y + r.height
}

/// Whether `inner` lies entirely inside `outer`.
pub fn rect_within(inner: &Rectangle, outer: &Rectangle) -> bool {
    inner.x >= outer.x
        && inner.y >= outer.y
        && inner.x + inner.width <= outer.x + outer.width
        && inner.y + inner.height <= outer.y + outer.height
}

/// Rectangle spanned by two corner points in any order.
pub fn rect_from_corners(a: Vector2, b: Vector2) -> Rectangle {
    Rectangle::new(a.x.min(b.x), a.y.min(b.y), (a.x - b.x).abs(), (a.y - b.y).abs())
}

/// Whether a `kind` building may be placed with its top-left at `position`.
///
/// The footprint must lie inside the map, start within construction range
/// of a friendly building and overlap none of `buildings`.
pub fn is_valid_building_position(
    position: Vector2,
    kind: ObjectKind,
    team: Team,
    buildings: &[Footprint],
    map: &MapBounds,
) -> bool {
    let size = kind.size();
    let footprint = Rectangle::new(position.x, position.y, size.x, size.y);
    if !rect_within(&footprint, &map.rect()) {
        return false;
    }
    let near_friendly = buildings
        .iter()
        .any(|b| b.team == team && (b.center - position).length() < CONSTRUCTION_RANGE);
    if !near_friendly {
        return false;
    }
    !buildings.iter().any(|b| rects_overlap(&footprint, &b.rect))
}

/// Slots of a grid formation of up to 5x4 units centred on `center`.
///
/// The grid faces `direction` (radians) when given, otherwise it faces from
/// `center` toward `target`. With neither it is axis aligned.
pub fn calculate_formation_positions(
    center: Vector2,
    target: Option<Vector2>,
    count: usize,
    direction: Option<f32>,
) -> Vec<Vector2> {
    if count == 0 {
        return Vec::new();
    }
    let angle = match (direction, target) {
        (Some(a), _) => a,
        (None, Some(t)) => {
            let d = t - center;
            if d.x != 0.0 || d.y != 0.0 {
                d.y.atan2(d.x)
            } else {
                0.0
            }
        }
        (None, None) => 0.0,
    };
    let (sin_a, cos_a) = angle.sin_cos();
    let half_cols = (FORMATION_COLS - 1) as f32 / 2.0;
    let half_rows = (FORMATION_ROWS - 1) as f32 / 2.0;
    (0..count.min(FORMATION_COLS * FORMATION_ROWS))
        .map(|i| {
            let row = (i / FORMATION_COLS) as f32;
            let col = (i % FORMATION_COLS) as f32;
            let ox = (col - half_cols) * FORMATION_SPACING;
            let oy = (row - half_rows) * FORMATION_SPACING;
            Vector2::new(
                center.x + ox * cos_a - oy * sin_a,
                center.y + ox * sin_a + oy * cos_a,
            )
        })
        .collect()
}

/// Arithmetic mean of `points`, or `None` when empty.
pub fn mean_position(points: impl IntoIterator<Item = Vector2>) -> Option<Vector2> {
    let mut sum = Vector2::zero();
    let mut n = 0usize;
    for p in points {
        sum = sum + p;
        n += 1;
    }
    (n > 0).then(|| sum * (1.0 / n as f32))
}
