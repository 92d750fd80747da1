//! Screen size resource.
//!
//! Stores the window dimensions in pixels. The rightmost
//! [`INTERFACE_WIDTH`] pixels belong to the production panel; the rest shows
//! the map.

use bevy_ecs::prelude::Resource;

/// Width of the production interface panel in pixels.
pub const INTERFACE_WIDTH: i32 = 200;

/// Current screen size in pixels.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl ScreenSize {
    /// Width of the map view, left of the panel.
    pub fn view_width(&self) -> i32 {
        (self.w - INTERFACE_WIDTH).max(0)
    }

    /// Left edge of the interface panel.
    pub fn panel_x(&self) -> i32 {
        self.view_width()
    }
}
