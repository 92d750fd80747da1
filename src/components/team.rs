//! Team ownership.
//!
//! Two sides exist: GDI, controlled by the player, and NOD, controlled by
//! the computer opponent.

use bevy_ecs::prelude::Component;
use raylib::prelude::Color;

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Team {
    Gdi,
    Nod,
}

impl Team {
    /// The team driven by mouse and keyboard.
    pub const PLAYER: Team = Team::Gdi;
    /// The team driven by the AI controller.
    pub const COMPUTER: Team = Team::Nod;

    pub fn is_player(self) -> bool {
        self == Self::PLAYER
    }

    pub fn opponent(self) -> Team {
        match self {
            Team::Gdi => Team::Nod,
            Team::Nod => Team::Gdi,
        }
    }

    pub fn color(self) -> Color {
        match self {
            Team::Gdi => Color::new(200, 150, 0, 255),
            Team::Nod => Color::new(200, 0, 0, 255),
        }
    }
}
