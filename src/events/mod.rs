//! Event types and observers.
//!
//! Submodules:
//! - [`destroyed`] – a unit or building is about to be despawned
//! - [`gamestate`] – state transition notifications for the high-level game flow
//! - [`switchdebug`] – toggle the debug view on/off
pub mod destroyed;
pub mod gamestate;
pub mod switchdebug;
