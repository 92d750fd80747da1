//! CondaRTS main entry point.
//!
//! A small two-team real-time strategy game written in Rust using:
//! - **raylib** for the window, input and drawing
//! - **bevy_ecs** for the entity-component-system architecture
//!
//! # Main Loop
//!
//! 1. Read the command line and `config.ini`, decide whether the debug view
//!    starts on
//! 2. Open the raylib window and build the ECS world
//! 3. Enter the `Setup` state, which lays out both bases
//! 4. Every frame: poll input, advance the match one tick, record the frame
//!    into the draw list and present it
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --debug-view
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info, warn};
use std::path::PathBuf;

use condarts::game::{init_world, start_match, update_schedule};
use condarts::resources::debugmode::{DEBUG_VIEW_ENV, resolve_debug_view};
use condarts::resources::gameconfig::GameConfig;
use condarts::systems::gamestate::check_pending_state;
use condarts::systems::input::update_input_state;
use condarts::systems::render::{present_system, render_system};
use condarts::systems::time::update_world_time;

/// CondaRTS
#[derive(Parser)]
#[command(version, about = "A small two-team real-time strategy game")]
struct Cli {
    /// INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Start with the debug view on: no fog of war, sprite outlines and
    /// position markers. Overrides CONDARTS_DEBUG_VIEW and the config file.
    #[arg(long)]
    debug_view: bool,

    /// Fixed random seed, overriding `[game] seed`.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    info!("Starting CondaRTS");

    let mut config = GameConfig::with_path(cli.config.clone());
    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    let env_value = std::env::var(DEBUG_VIEW_ENV).ok();
    let debug_view = resolve_debug_view(cli.debug_view, env_value.as_deref(), config.debug_view);

    let (mut rl, thread) = raylib::init()
        .size(config.window_width as i32, config.window_height as i32)
        .title("CondaRTS")
        .build();
    rl.set_target_fps(config.target_fps);
    // Escape clears the selection instead of quitting
    rl.set_exit_key(None);

    let mut world = init_world(&config, debug_view);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);
    start_match(&mut world);

    let mut update = update_schedule();
    update.add_systems(update_input_state.before(check_pending_state));
    update.add_systems(present_system.after(render_system));
    if let Err(e) = update.initialize(&mut world) {
        error!("Failed to initialize schedule: {}", e);
        return;
    }

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers();
    }
    info!("Window closed, bye");
}
