//! Match setup and the per-frame schedule.
//!
//! [`init_world`] builds a [`World`] holding every resource and observer the
//! game needs. [`start_match`] requests the `Setup` state, whose hook
//! ([`setup`]) lays out both bases and the iron fields and then asks for
//! `Playing`. [`update_schedule`] is everything that runs once per frame
//! without touching the window.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use log::info;
use raylib::prelude::Vector2;

use crate::components::gameobject::ObjectKind;
use crate::components::team::Team;
use crate::events::destroyed::entity_destroyed_observer;
use crate::events::gamestate::{GameStateChangedEvent, observe_gamestate_change_event};
use crate::events::switchdebug::switch_debug_observer;
use crate::prefabs::{spawn_building, spawn_iron_field, spawn_unit};
use crate::resources::ai::AiController;
use crate::resources::basemap::BaseMap;
use crate::resources::camera::GameCamera;
use crate::resources::debugmode::DebugMode;
use crate::resources::drawlist::DrawList;
use crate::resources::economy::Economies;
use crate::resources::fogofwar::FogOfWar;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamerng::GameRng;
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::input::InputState;
use crate::resources::interface::ProductionInterface;
use crate::resources::mapbounds::MapBounds;
use crate::resources::screensize::ScreenSize;
use crate::resources::selection::SelectionState;
use crate::resources::systemsstore::{StateHook, SystemsStore};
use crate::resources::worldtime::WorldTime;
use crate::systems::ai::ai_system;
use crate::systems::camera::camera_system;
use crate::systems::collision::separation_system;
use crate::systems::combat::attack_system;
use crate::systems::command::{left_click_system, right_click_system};
use crate::systems::death::{clear_under_attack_system, death_system};
use crate::systems::fog::fog_update_system;
use crate::systems::gamestate::{check_pending_state, state_is_playing};
use crate::systems::harvester::harvester_system;
use crate::systems::input::{clear_selection_system, debug_toggle_system};
use crate::systems::ironfield::iron_field_regen_system;
use crate::systems::movement::{movement_system, target_tracking_system};
use crate::systems::particle::particle_system;
use crate::systems::production::{construction_system, power_system, production_system};
use crate::systems::projectile::{projectile_flight_system, projectile_hit_system};
use crate::systems::render::render_system;

/// Distance of each headquarters' top-left corner from its map corner.
pub const BASE_INSET: f32 = 300.0;
pub const IRON_FIELD_COUNT: usize = 40;
/// Iron fields keep this far from the map edges.
pub const FIELD_MARGIN: f32 = 100.0;
pub const STARTING_INFANTRY: usize = 3;
pub const MIN_WAVE_INTERVAL: u32 = 150;
pub const MAX_WAVE_INTERVAL: u32 = 250;

/// Top-left corner of `team`'s headquarters: the player near the top-left
/// of the map, the computer near the opposite corner.
pub fn headquarters_corner(team: Team, map: &MapBounds) -> Vector2 {
    if team.is_player() {
        Vector2::new(BASE_INSET, BASE_INSET)
    } else {
        Vector2::new(map.width - BASE_INSET, map.height - BASE_INSET)
    }
}

fn spawn_base(commands: &mut Commands, team: Team, hq: Vector2) {
    spawn_building(commands, ObjectKind::Headquarters, team, hq, true);
    for i in 0..STARTING_INFANTRY {
        let offset = Vector2::new(50.0 + 20.0 * i as f32, 0.0);
        spawn_unit(commands, ObjectKind::Infantry, team, hq + offset);
    }
    spawn_unit(commands, ObjectKind::Harvester, team, hq + Vector2::new(100.0, 100.0));
}

/// `Setup` hook: fresh map, fog and economies, both bases and the iron
/// fields. Requests `Playing` when done.
pub fn setup(
    mut commands: Commands,
    mut next_state: ResMut<NextGameState>,
    mut rng: ResMut<GameRng>,
    map: Res<MapBounds>,
) {
    commands.insert_resource(BaseMap::generate(&map, &mut rng));
    commands.insert_resource(FogOfWar::new(&map));
    commands.insert_resource(Economies::default());
    let wave_interval = rng.range_u32(MIN_WAVE_INTERVAL, MAX_WAVE_INTERVAL);
    commands.insert_resource(AiController::new(wave_interval));

    for team in [Team::PLAYER, Team::COMPUTER] {
        spawn_base(&mut commands, team, headquarters_corner(team, &map));
    }
    for _ in 0..IRON_FIELD_COUNT {
        let at = Vector2::new(
            rng.range_f32(FIELD_MARGIN, map.width - FIELD_MARGIN),
            rng.range_f32(FIELD_MARGIN, map.height - FIELD_MARGIN),
        );
        spawn_iron_field(&mut commands, at);
    }

    info!(
        "Match set up on a {}x{} map, first computer wave in {} ticks",
        map.width, map.height, wave_interval
    );
    next_state.set(GameStates::Playing);
}

/// `Playing` hook: point the camera at the player's base.
pub fn enter_play(mut camera: ResMut<GameCamera>, map: Res<MapBounds>) {
    let hq = headquarters_corner(Team::PLAYER, &map) + ObjectKind::Headquarters.size() * 0.5;
    camera.center_on(hq, &map);
    info!("Battle started");
}

/// Build the world with every resource, observer and state hook in place.
/// The debug view starts on when `debug_view` is set.
pub fn init_world(config: &GameConfig, debug_view: bool) -> World {
    let mut world = World::new();
    let screen = ScreenSize {
        w: config.window_width as i32,
        h: config.window_height as i32,
    };
    let map = MapBounds::new(config.map_width as f32, config.map_height as f32);
    let mut camera = GameCamera::new(screen.view_width() as f32, screen.h as f32);
    camera.clamp(&map);

    world.insert_resource(config.clone());
    world.insert_resource(screen);
    world.insert_resource(map);
    world.insert_resource(camera);
    world.insert_resource(WorldTime::default());
    world.insert_resource(InputState::default());
    world.insert_resource(SelectionState::default());
    world.insert_resource(ProductionInterface::default());
    world.insert_resource(DrawList::default());
    world.insert_resource(Economies::default());
    world.insert_resource(FogOfWar::new(&map));
    world.insert_resource(BaseMap::default());
    world.insert_resource(AiController::new(MIN_WAVE_INTERVAL));
    world.insert_resource(match config.seed {
        Some(seed) => GameRng::seeded(seed),
        None => GameRng::default(),
    });
    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());
    if debug_view {
        world.insert_resource(DebugMode {});
        info!("Debug view enabled at startup");
    }

    world.spawn(Observer::new(observe_gamestate_change_event));
    world.spawn(Observer::new(switch_debug_observer));
    world.spawn(Observer::new(entity_destroyed_observer));

    let mut systems_store = SystemsStore::new();
    let setup_id = world.register_system(setup);
    systems_store.insert(StateHook::Setup, setup_id);
    let enter_play_id = world.register_system(enter_play);
    systems_store.insert(StateHook::EnterPlay, enter_play_id);
    world.insert_resource(systems_store);

    world.flush();
    world
}

/// Enter the `Setup` state right away. The `Playing` transition it requests
/// is picked up by the next run of the update schedule.
pub fn start_match(world: &mut World) {
    world.resource_mut::<NextGameState>().set(GameStates::Setup);
    world.trigger(GameStateChangedEvent {});
    world.flush();
}

/// Per-frame systems that need no window.
///
/// Input must already be in [`InputState`]; the frame ends up in
/// [`DrawList`]. Match systems only run while `Playing`.
pub fn update_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems(check_pending_state);
    update.add_systems(
        (
            (
                debug_toggle_system,
                clear_selection_system,
                camera_system,
                left_click_system,
                right_click_system,
            )
                .chain(),
            (
                harvester_system,
                movement_system,
                iron_field_regen_system,
                power_system,
                production_system,
                construction_system,
            )
                .chain(),
            (
                projectile_flight_system,
                particle_system,
                separation_system,
                target_tracking_system,
                attack_system,
                projectile_hit_system,
                death_system,
            )
                .chain(),
            (ai_system, fog_update_system).chain(),
        )
            .chain()
            .run_if(state_is_playing)
            .after(check_pending_state),
    );
    update.add_systems(
        (render_system, clear_under_attack_system)
            .chain()
            .after(fog_update_system),
    );
    update
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bases_sit_in_opposite_corners() {
        let map = MapBounds::new(1600.0, 800.0);
        assert_eq!(headquarters_corner(Team::PLAYER, &map), Vector2::new(300.0, 300.0));
        assert_eq!(headquarters_corner(Team::COMPUTER, &map), Vector2::new(1300.0, 500.0));
    }

    #[test]
    fn init_world_honours_debug_view() {
        let config = GameConfig::new();
        assert!(init_world(&config, true).contains_resource::<DebugMode>());
        assert!(!init_world(&config, false).contains_resource::<DebugMode>());
    }
}
