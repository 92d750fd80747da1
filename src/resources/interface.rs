//! Layout and state of the player's production panel.
//!
//! All rectangles are panel-local: x is measured from the panel's left
//! edge, y from the top of the screen.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Color, Rectangle, Vector2};

use crate::components::gameobject::ObjectKind;
use crate::geometry::rect_contains_point;
use crate::resources::screensize::INTERFACE_WIDTH;

pub const MARGIN_X: f32 = 20.0;
pub const IRON_POS_Y: f32 = 20.0;
pub const POWER_POS_Y: f32 = 45.0;
pub const TAB_BUTTONS_POS_Y: f32 = 70.0;
pub const BUY_BUTTONS_POS_Y: f32 = 190.0;
pub const SELL_BUTTON_POS_Y: f32 = 390.0;
pub const PRODUCTION_QUEUE_POS_Y: f32 = 460.0;
pub const BUTTON_SPACING_Y: f32 = 10.0;
pub const TAB_BUTTON_HEIGHT: f32 = 30.0;
pub const ACTION_BUTTON_HEIGHT: f32 = 40.0;
pub const BUTTON_WIDTH: f32 = INTERFACE_WIDTH as f32 - 2.0 * MARGIN_X;

pub const FILL_COLOR: Color = Color::new(60, 60, 60, 255);
pub const LINE_COLOR: Color = Color::new(100, 100, 100, 255);
pub const ACTIVE_TAB_COLOR: Color = Color::new(0, 200, 200, 255);
pub const INACTIVE_TAB_COLOR: Color = Color::new(50, 50, 50, 255);
pub const ACTION_ALLOWED_COLOR: Color = Color::new(0, 200, 0, 255);
pub const ACTION_BLOCKED_COLOR: Color = Color::new(200, 0, 0, 255);
pub const PLACEMENT_VALID_COLOR: Color = Color::new(0, 255, 0, 255);
pub const PLACEMENT_INVALID_COLOR: Color = Color::new(255, 0, 0, 255);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Units,
    Buildings,
    Defensive,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Units, Tab::Buildings, Tab::Defensive];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Units => "Units",
            Tab::Buildings => "Buildings",
            Tab::Defensive => "Defensive",
        }
    }

    /// Kinds offered on this tab, top to bottom.
    pub fn kinds(self) -> &'static [ObjectKind] {
        match self {
            Tab::Units => &ObjectKind::UNITS,
            Tab::Buildings => &ObjectKind::BUILDINGS,
            Tab::Defensive => &ObjectKind::DEFENSIVE,
        }
    }
}

/// What a click on the panel landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelHit {
    Tab(Tab),
    Buy(ObjectKind),
    Sell,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct ProductionInterface {
    pub tab: Tab,
}

impl ProductionInterface {
    pub fn tab_rect(index: usize) -> Rectangle {
        Rectangle::new(
            MARGIN_X,
            TAB_BUTTONS_POS_Y + index as f32 * (TAB_BUTTON_HEIGHT + BUTTON_SPACING_Y),
            BUTTON_WIDTH,
            TAB_BUTTON_HEIGHT,
        )
    }

    pub fn buy_rect(index: usize) -> Rectangle {
        Rectangle::new(
            MARGIN_X,
            BUY_BUTTONS_POS_Y + index as f32 * (ACTION_BUTTON_HEIGHT + BUTTON_SPACING_Y),
            BUTTON_WIDTH,
            ACTION_BUTTON_HEIGHT,
        )
    }

    pub fn sell_rect() -> Rectangle {
        Rectangle::new(MARGIN_X, SELL_BUTTON_POS_Y, BUTTON_WIDTH, ACTION_BUTTON_HEIGHT)
    }

    pub fn progress_rect() -> Rectangle {
        Rectangle::new(MARGIN_X, PRODUCTION_QUEUE_POS_Y, BUTTON_WIDTH, 10.0)
    }

    /// Which control sits under the panel-local point `local`.
    pub fn hit(&self, local: Vector2) -> Option<PanelHit> {
        if let Some(i) = (0..Tab::ALL.len()).find(|&i| rect_contains_point(&Self::tab_rect(i), local)) {
            return Some(PanelHit::Tab(Tab::ALL[i]));
        }
        if let Some((_, kind)) = self
            .tab
            .kinds()
            .iter()
            .enumerate()
            .find(|(i, _)| rect_contains_point(&Self::buy_rect(*i), local))
        {
            return Some(PanelHit::Buy(*kind));
        }
        if rect_contains_point(&Self::sell_rect(), local) {
            return Some(PanelHit::Sell);
        }
        None
    }
}
