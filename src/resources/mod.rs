//! ECS resources made available to systems.
//!
//! Long-lived data injected into the ECS world: configuration, input, the
//! camera, per-team economies, fog of war, the AI's memory and the frame's
//! draw list.
//!
//! Overview
//! - `ai` – state of the computer opponent
//! - `basemap` – generated grass tiles
//! - `camera` – visible map rectangle and world/screen transforms
//! - `debugmode` – presence turns the debug view on
//! - `drawlist` – screen-space primitives recorded for the current frame
//! - `economy` – iron, power and production queues per team
//! - `fogofwar` – explored and visible tile layers
//! - `gameconfig` – settings loaded from the INI file
//! - `gamerng` – seeded random source
//! - `gamestate` – authoritative and pending high-level game state
//! - `input` – per-frame mouse and keyboard state
//! - `interface` – production panel layout and active tab
//! - `mapbounds` – playable map size
//! - `screensize` – window dimensions in pixels
//! - `selection` – drag box and selected building
//! - `systemsstore` – state hook systems
//! - `worldtime` – frame timing and tick count
pub mod ai;
pub mod basemap;
pub mod camera;
pub mod debugmode;
pub mod drawlist;
pub mod economy;
pub mod fogofwar;
pub mod gameconfig;
pub mod gamerng;
pub mod gamestate;
pub mod input;
pub mod interface;
pub mod mapbounds;
pub mod screensize;
pub mod selection;
pub mod systemsstore;
pub mod worldtime;
