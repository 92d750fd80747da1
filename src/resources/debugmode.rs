//! Debug view toggle resource.
//!
//! The mere presence of [`DebugMode`] turns the debug view on: fog of war is
//! not drawn, every object is drawn regardless of visibility, and each sprite
//! gets its bounding rectangle outlined and its logical position marked.
//! Remove the resource to return to the normal view.
//!
//! The initial value comes from outside the binary. [`resolve_debug_view`]
//! merges the command line, the `CONDARTS_DEBUG_VIEW` environment variable
//! and the config file, in that order of priority.

use bevy_ecs::prelude::Resource;

/// Environment variable that enables or disables the debug view at startup.
pub const DEBUG_VIEW_ENV: &str = "CONDARTS_DEBUG_VIEW";

/// Marker resource: when present, the renderer draws the debug view.
#[derive(Resource, Clone, Copy, Debug)]
pub struct DebugMode {}

/// Parse a boolean switch as accepted in the environment.
///
/// `1`, `true`, `yes` and `on` enable; `0`, `false`, `no` and `off` disable.
/// Anything else is not a decision.
pub fn parse_switch(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Decide whether the game starts with the debug view on.
///
/// `cli_flag` wins when set, then a recognised `env_value`, then the config
/// file value.
pub fn resolve_debug_view(cli_flag: bool, env_value: Option<&str>, config_value: bool) -> bool {
    if cli_flag {
        return true;
    }
    env_value.and_then(parse_switch).unwrap_or(config_value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_flag_wins() {
        assert!(resolve_debug_view(true, Some("off"), false));
    }

    #[test]
    fn env_overrides_config() {
        assert!(resolve_debug_view(false, Some("YES"), false));
        assert!(!resolve_debug_view(false, Some("0"), true));
    }

    #[test]
    fn unrecognised_env_falls_back_to_config() {
        assert!(resolve_debug_view(false, Some("maybe"), true));
        assert!(!resolve_debug_view(false, Some(""), false));
    }

    #[test]
    fn default_is_off() {
        assert!(!resolve_debug_view(false, None, false));
    }
}
