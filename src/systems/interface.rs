//! Production panel: purchase rules and drawing.
//!
//! Clicks on the panel are routed here by the command system; the renderer
//! asks [`panel_primitives`] for the panel and [`placement_ghost`] for the
//! building preview under the mouse.
use raylib::prelude::{Color, Rectangle, Vector2};

use crate::components::gameobject::ObjectKind;
use crate::components::team::Team;
use crate::resources::drawlist::{Primitive, faded, progress_bar};
use crate::resources::economy::Economy;
use crate::resources::interface::{
    ACTION_ALLOWED_COLOR, ACTION_BLOCKED_COLOR, ACTIVE_TAB_COLOR, FILL_COLOR,
    INACTIVE_TAB_COLOR, IRON_POS_Y, LINE_COLOR, MARGIN_X, PLACEMENT_INVALID_COLOR,
    PLACEMENT_VALID_COLOR, POWER_POS_Y, PRODUCTION_QUEUE_POS_Y, ProductionInterface, Tab,
};
use crate::resources::screensize::INTERFACE_WIDTH;

pub const TEXT_SIZE: i32 = 18;
const TEXT_INSET: f32 = 10.0;
const QUEUE_LINE: f32 = 25.0;
const GHOST_ALPHA: f32 = 100.0 / 255.0;
const GHOST_BORDER: f32 = 3.0;

/// Whether the tech requirement of `kind` is met by the living buildings
/// the team owns.
pub fn requirement_met(kind: ObjectKind, owned: &[ObjectKind]) -> bool {
    kind.requirement().is_none_or(|req| owned.contains(&req))
}

/// Whether the buy button for `kind` is enabled.
pub fn can_buy(kind: ObjectKind, eco: &Economy, owned: &[ObjectKind]) -> bool {
    eco.can_afford(kind) && requirement_met(kind, owned)
}

fn text(s: impl Into<String>, x: f32, y: f32, color: Color) -> Primitive {
    Primitive::Text {
        text: s.into(),
        position: Vector2::new(x, y),
        size: TEXT_SIZE,
        color,
    }
}

fn shifted(r: Rectangle, dx: f32) -> Rectangle {
    Rectangle::new(r.x + dx, r.y, r.width, r.height)
}

/// Everything drawn on the panel, in screen coordinates.
///
/// `progress` is the fraction done of the item at the head of the queue.
pub fn panel_primitives(
    ui: &ProductionInterface,
    eco: &Economy,
    owned: &[ObjectKind],
    sell_enabled: bool,
    progress: Option<f32>,
    panel_x: f32,
    screen_h: f32,
) -> Vec<Primitive> {
    let panel = Rectangle::new(panel_x, 0.0, INTERFACE_WIDTH as f32, screen_h);
    let mut out = vec![
        Primitive::FillRect {
            rect: panel,
            color: FILL_COLOR,
        },
        Primitive::RectLines {
            rect: panel,
            thickness: 2.0,
            color: LINE_COLOR,
        },
        text(format!("Iron: {}", eco.iron), panel_x + MARGIN_X, IRON_POS_Y, Color::WHITE),
        text(
            format!("Power: {}/{}", eco.power_output, eco.power_usage),
            panel_x + MARGIN_X,
            POWER_POS_Y,
            if eco.has_enough_power() { Color::GREEN } else { Color::RED },
        ),
    ];

    for (i, tab) in Tab::ALL.iter().enumerate() {
        let rect = shifted(ProductionInterface::tab_rect(i), panel_x);
        out.push(Primitive::FillRect {
            rect,
            color: if *tab == ui.tab {
                ACTIVE_TAB_COLOR
            } else {
                INACTIVE_TAB_COLOR
            },
        });
        out.push(text(tab.label(), rect.x + TEXT_INSET, rect.y + TEXT_INSET, Color::WHITE));
    }

    for (i, kind) in ui.tab.kinds().iter().enumerate() {
        let rect = shifted(ProductionInterface::buy_rect(i), panel_x);
        out.push(Primitive::FillRect {
            rect,
            color: if can_buy(*kind, eco, owned) {
                ACTION_ALLOWED_COLOR
            } else {
                ACTION_BLOCKED_COLOR
            },
        });
        out.push(text(
            format!("{} ({})", kind.label(), kind.cost()),
            rect.x + TEXT_INSET,
            rect.y + TEXT_INSET,
            Color::WHITE,
        ));
    }

    if let Some(progress) = progress {
        let bar = shifted(ProductionInterface::progress_rect(), panel_x);
        out.extend(progress_bar(bar, progress, Color::GREEN));
    }
    for (i, kind) in eco.queue.iter().enumerate() {
        out.push(text(
            format!("{} ({})", kind.label(), kind.cost()),
            panel_x + MARGIN_X,
            PRODUCTION_QUEUE_POS_Y + 20.0 + i as f32 * QUEUE_LINE,
            Color::WHITE,
        ));
    }

    let sell = shifted(ProductionInterface::sell_rect(), panel_x);
    out.push(Primitive::FillRect {
        rect: sell,
        color: if sell_enabled {
            ACTION_ALLOWED_COLOR
        } else {
            ACTION_BLOCKED_COLOR
        },
    });
    out.push(text("Sell", sell.x + TEXT_INSET, sell.y + TEXT_INSET, Color::WHITE));
    out
}

/// Translucent preview of a pending building centred on the mouse, framed
/// green where it may be placed and red elsewhere.
pub fn placement_ghost(kind: ObjectKind, team: Team, mouse: Vector2, valid: bool) -> [Primitive; 2] {
    let size = kind.size();
    let rect = Rectangle::new(mouse.x - size.x / 2.0, mouse.y - size.y / 2.0, size.x, size.y);
    [
        Primitive::FillRect {
            rect,
            color: faded(team.color(), GHOST_ALPHA),
        },
        Primitive::RectLines {
            rect,
            thickness: GHOST_BORDER,
            color: if valid {
                PLACEMENT_VALID_COLOR
            } else {
                PLACEMENT_INVALID_COLOR
            },
        },
    ]
}
