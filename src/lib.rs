//! CondaRTS library.
//!
//! Everything except the window loop lives here so integration tests can
//! build a world, run the update schedule headlessly and inspect the draw
//! list.

pub mod components;
pub mod events;
pub mod game;
pub mod geometry;
pub mod prefabs;
pub mod resources;
pub mod systems;
