//! Debug view annotations for sprites.
//!
//! While [`crate::resources::debugmode::DebugMode`] is present the renderer
//! follows every sprite with its bounding rectangle and a dot on its logical
//! position, both in [`DEBUG_COLOR`]. This is the same collider and position
//! overlay the engine has always drawn in debug mode, recorded as
//! [`Primitive`]s instead of immediate draw calls.

use raylib::prelude::{Color, Rectangle, Vector2};

use crate::resources::drawlist::Primitive;

pub const DEBUG_COLOR: Color = Color::new(255, 0, 255, 255);
pub const MARKER_RADIUS: f32 = 5.0;
pub const OUTLINE_THICKNESS: f32 = 1.0;

/// Outline of `rect` and a marker at `position`, both in screen space.
///
/// Returns `None` when either is unusable: a non-finite coordinate or a
/// negative extent.
pub fn overlay_for(rect: Rectangle, position: Vector2) -> Option<[Primitive; 2]> {
    let finite = [rect.x, rect.y, rect.width, rect.height, position.x, position.y]
        .iter()
        .all(|v| v.is_finite());
    if !finite || rect.width < 0.0 || rect.height < 0.0 {
        return None;
    }
    Some([
        Primitive::RectLines {
            rect,
            thickness: OUTLINE_THICKNESS,
            color: DEBUG_COLOR,
        },
        Primitive::Circle {
            center: position,
            radius: MARKER_RADIUS,
            color: DEBUG_COLOR,
        },
    ])
}

/// Caption shown in the top-left corner while the debug view is on.
pub fn hud_caption(fps: f32) -> Primitive {
    Primitive::Text {
        text: format!("DEBUG VIEW (F11 to toggle) | FPS: {}", fps.round() as i32),
        position: Vector2::new(10.0, 10.0),
        size: 20,
        color: DEBUG_COLOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outline_then_marker() {
        let rect = Rectangle::new(10.0, 20.0, 30.0, 40.0);
        let Some([outline, marker]) = overlay_for(rect, Vector2::new(25.0, 40.0)) else {
            panic!("expected an overlay");
        };
        match outline {
            Primitive::RectLines {
                rect: r,
                thickness,
                color,
            } => {
                assert_eq!((r.x, r.y, r.width, r.height), (10.0, 20.0, 30.0, 40.0));
                assert_eq!(thickness, 1.0);
                assert_eq!((color.r, color.g, color.b), (255, 0, 255));
            }
            other => panic!("unexpected outline {:?}", other),
        }
        match marker {
            Primitive::Circle { center, radius, .. } => {
                assert_eq!(center, Vector2::new(25.0, 40.0));
                assert_eq!(radius, 5.0);
            }
            other => panic!("unexpected marker {:?}", other),
        }
    }

    #[test]
    fn zero_sized_rect_still_annotated() {
        assert!(overlay_for(Rectangle::new(0.0, 0.0, 0.0, 0.0), Vector2::zero()).is_some());
    }

    #[test]
    fn unusable_geometry_skipped() {
        let pos = Vector2::new(1.0, 1.0);
        assert!(overlay_for(Rectangle::new(f32::NAN, 0.0, 1.0, 1.0), pos).is_none());
        assert!(overlay_for(Rectangle::new(0.0, 0.0, f32::INFINITY, 1.0), pos).is_none());
        assert!(overlay_for(Rectangle::new(0.0, 0.0, -1.0, 1.0), pos).is_none());
        assert!(overlay_for(Rectangle::new(0.0, 0.0, 1.0, 1.0), Vector2::new(0.0, f32::NAN)).is_none());
    }

    #[test]
    fn caption_mentions_the_toggle() {
        match hud_caption(59.6) {
            Primitive::Text { text, .. } => {
                assert!(text.starts_with("DEBUG VIEW (F11 to toggle)"));
                assert!(text.ends_with("FPS: 60"));
            }
            other => panic!("unexpected caption {:?}", other),
        }
    }
}
