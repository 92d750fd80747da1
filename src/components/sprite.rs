use bevy_ecs::prelude::Component;
use raylib::prelude::Color;

/// Primitive silhouette a sprite is drawn with. Every sprite is built from
/// rectangles, circles, lines and polygons; the renderer picks the recipe
/// from this shape and sizes it to the entity's collider.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpriteShape {
    Soldier,
    Tank,
    Harvester,
    /// Base with inner panel, windows and a one-letter label.
    Structure,
    Turret,
    /// Green diamond for iron fields.
    Crystal,
    /// Small ellipse for shells.
    Shell,
    /// Filled circle for particles.
    Dot,
}

/// What to draw for an entity: a shape and its base colour.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Sprite {
    pub shape: SpriteShape,
    pub color: Color,
}

impl Sprite {
    pub fn new(shape: SpriteShape, color: Color) -> Self {
        Self { shape, color }
    }
}
