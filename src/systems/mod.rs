//! Game systems.
//!
//! Every system that advances the match, reads input or records the frame.
//! The order they run in is set up by `crate::game::update_schedule`.
//!
//! Submodules overview
//! - [`ai`] – computer opponent: production, building placement, scouting, waves
//! - [`camera`] – arrow-key panning, edge scrolling, centring on the selection
//! - [`collision`] – push overlapping units apart
//! - [`combat`] – target acquisition and firing
//! - [`command`] – player mouse commands: selection, orders, panel clicks
//! - [`death`] – despawn destroyed objects
//! - [`debugoverlay`] – outline and position marker for each sprite in debug view
//! - [`fog`] – refresh the fog of war from the player's sight
//! - [`gamestate`] – check for pending state transitions and trigger events
//! - [`harvester`] – mining loop of harvesters
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`interface`] – production panel rules and drawing
//! - [`ironfield`] – iron regeneration
//! - [`movement`] – move units along their orders
//! - [`particle`] – move and expire particles
//! - [`production`] – power, production queues, placement and construction
//! - [`projectile`] – shell flight and impacts
//! - [`render`] – record the frame into the draw list and present it with raylib
//! - [`time`] – update frame timing and tick count

pub mod ai;
pub mod camera;
pub mod collision;
pub mod combat;
pub mod command;
pub mod death;
pub mod debugoverlay;
pub mod fog;
pub mod gamestate;
pub mod harvester;
pub mod input;
pub mod interface;
pub mod ironfield;
pub mod movement;
pub mod particle;
pub mod production;
pub mod projectile;
pub mod render;
pub mod time;
