//! Game configuration resource.
//!
//! Settings loaded from an INI configuration file. Defaults are safe to start
//! with; any key missing from the file keeps its default.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! target_fps = 60
//!
//! [map]
//! width = 1600
//! height = 800
//!
//! [game]
//! seed = 42
//!
//! [debug]
//! view = false
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_MAP_WIDTH: u32 = 1600;
const DEFAULT_MAP_HEIGHT: u32 = 800;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Window width in pixels, interface panel included.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second. The simulation advances one tick per frame.
    pub target_fps: u32,
    /// Map width in world units.
    pub map_width: u32,
    /// Map height in world units.
    pub map_height: u32,
    /// Fixed random seed. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Start with the debug view overlay enabled.
    pub debug_view: bool,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            map_width: DEFAULT_MAP_WIDTH,
            map_height: DEFAULT_MAP_HEIGHT,
            seed: None,
            debug_view: false,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file at `config_path`.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply(&config);
        Ok(())
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply(&config);
        Ok(())
    }

    fn apply(&mut self, config: &Ini) {
        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }

        // [map] section
        if let Some(width) = config.getuint("map", "width").ok().flatten() {
            self.map_width = width as u32;
        }
        if let Some(height) = config.getuint("map", "height").ok().flatten() {
            self.map_height = height as u32;
        }

        // [game] section
        if let Some(seed) = config.getuint("game", "seed").ok().flatten() {
            self.seed = Some(seed);
        }

        // [debug] section
        if let Some(view) = config.getboolcoerce("debug", "view").ok().flatten() {
            self.debug_view = view;
        }

        info!(
            "Loaded config: {}x{} window, fps={}, map {}x{}, seed={:?}, debug_view={}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.map_width,
            self.map_height,
            self.seed,
            self.debug_view
        );
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));

        config.set("map", "width", Some(self.map_width.to_string()));
        config.set("map", "height", Some(self.map_height.to_string()));

        if let Some(seed) = self.seed {
            config.set("game", "seed", Some(seed.to_string()));
        }

        config.set("debug", "view", Some(self.debug_view.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}
