//! Frame draw list.
//!
//! The render system does not talk to raylib directly: it records screen
//! space [`Primitive`]s here, each tagged with what it belongs to, and
//! `crate::systems::render::present_system` replays them onto the window.
//! Keeping the frame as data lets tests inspect exactly what would be drawn.

use bevy_ecs::prelude::{Entity, Resource};
use raylib::prelude::{Color, Rectangle, Vector2};

/// One screen-space drawing command.
#[derive(Debug, Clone)]
pub enum Primitive {
    FillRect {
        rect: Rectangle,
        color: Color,
    },
    RectLines {
        rect: Rectangle,
        thickness: f32,
        color: Color,
    },
    /// Rectangle rotated `rotation` degrees around its centre `center`.
    RotatedRect {
        center: Vector2,
        size: Vector2,
        rotation: f32,
        color: Color,
    },
    Circle {
        center: Vector2,
        radius: f32,
        color: Color,
    },
    /// Ring `thickness` pixels wide, drawn inward from `radius`.
    CircleLines {
        center: Vector2,
        radius: f32,
        thickness: f32,
        color: Color,
    },
    Ellipse {
        center: Vector2,
        radius_h: f32,
        radius_v: f32,
        color: Color,
    },
    Poly {
        center: Vector2,
        sides: i32,
        radius: f32,
        rotation: f32,
        color: Color,
    },
    Line {
        start: Vector2,
        end: Vector2,
        thickness: f32,
        color: Color,
    },
    Text {
        text: String,
        position: Vector2,
        size: i32,
        color: Color,
    },
}

/// What a primitive belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawTag {
    /// Grass tiles of the base map.
    Map,
    /// Fog of war tiles.
    Fog,
    /// Body of the sprite of an entity.
    Sprite(Entity),
    /// Debug view annotation of an entity.
    Overlay(Entity),
    /// Health bars, selection rings and labels of an entity.
    Decoration(Entity),
    /// Production panel, placement ghost and selection box.
    Interface,
    /// Debug view caption.
    Hud,
}

#[derive(Debug, Clone)]
pub struct DrawItem {
    pub tag: DrawTag,
    pub primitive: Primitive,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct DrawList {
    pub items: Vec<DrawItem>,
}

impl DrawList {
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn push(&mut self, tag: DrawTag, primitive: Primitive) {
        self.items.push(DrawItem { tag, primitive });
    }

    pub fn extend(&mut self, tag: DrawTag, primitives: impl IntoIterator<Item = Primitive>) {
        self.items
            .extend(primitives.into_iter().map(|primitive| DrawItem { tag, primitive }));
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn count(&self, pred: impl Fn(&DrawTag) -> bool) -> usize {
        self.items.iter().filter(|i| pred(&i.tag)).count()
    }

    pub fn fog_count(&self) -> usize {
        self.count(|t| *t == DrawTag::Fog)
    }

    pub fn overlay_count(&self) -> usize {
        self.count(|t| matches!(t, DrawTag::Overlay(_)))
    }

    /// Primitives tagged exactly `tag`, in draw order.
    pub fn primitives_for(&self, tag: DrawTag) -> impl Iterator<Item = &Primitive> {
        self.items
            .iter()
            .filter(move |i| i.tag == tag)
            .map(|i| &i.primitive)
    }

    /// Index of the first and last item tagged `tag`.
    pub fn span_of(&self, tag: DrawTag) -> Option<(usize, usize)> {
        let first = self.items.iter().position(|i| i.tag == tag)?;
        let last = self.items.iter().rposition(|i| i.tag == tag)?;
        Some((first, last))
    }

    /// Whether any primitive for `entity` was recorded.
    pub fn draws_entity(&self, entity: Entity) -> bool {
        self.items.iter().any(|i| i.tag == DrawTag::Sprite(entity))
    }
}

/// Copy of `color` with its alpha scaled by `factor` in `[0, 1]`.
pub fn faded(color: Color, factor: f32) -> Color {
    let a = (color.a as f32 * factor.clamp(0.0, 1.0)).round() as u8;
    Color::new(color.r, color.g, color.b, a)
}

/// Copy of `color` darkened by `amount` per channel, saturating at zero.
pub fn darkened(color: Color, amount: u8) -> Color {
    Color::new(
        color.r.saturating_sub(amount),
        color.g.saturating_sub(amount),
        color.b.saturating_sub(amount),
        color.a,
    )
}

/// Outlined bar filled to `progress` in `[0, 1]`: black frame, white inner
/// border, coloured fill.
pub fn progress_bar(rect: Rectangle, progress: f32, color: Color) -> [Primitive; 3] {
    let progress = progress.clamp(0.0, 1.0);
    let inner = Rectangle::new(rect.x + 1.0, rect.y + 1.0, rect.width - 2.0, rect.height - 2.0);
    let bar = Rectangle::new(
        inner.x + 1.0,
        inner.y + 1.0,
        (progress * inner.width - 2.0).max(0.0),
        inner.height - 2.0,
    );
    [
        Primitive::FillRect {
            rect,
            color: Color::BLACK,
        },
        Primitive::RectLines {
            rect: inner,
            thickness: 1.0,
            color: Color::WHITE,
        },
        Primitive::FillRect { rect: bar, color },
    ]
}
