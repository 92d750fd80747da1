//! Headless match tests: setup, the full update schedule and the debug key.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use condarts::components::gameobject::{GameObject, ObjectKind};
use condarts::components::ironfield::IronField;
use condarts::components::mapposition::MapPosition;
use condarts::components::orders::Orders;
use condarts::components::selected::Selected;
use condarts::components::team::Team;
use condarts::game::{init_world, start_match, update_schedule};
use condarts::resources::debugmode::DebugMode;
use condarts::resources::drawlist::DrawList;
use condarts::resources::economy::Economies;
use condarts::resources::fogofwar::FogOfWar;
use condarts::resources::gameconfig::GameConfig;
use condarts::resources::gamestate::{GameState, GameStates};
use condarts::resources::input::InputState;
use condarts::resources::screensize::ScreenSize;

fn new_match(seed: u64, debug_view: bool) -> World {
    let mut config = GameConfig::new();
    config.seed = Some(seed);
    let mut world = init_world(&config, debug_view);
    start_match(&mut world);
    // keep the camera still: mouse in the middle of the map view
    let screen = *world.resource::<ScreenSize>();
    world.resource_mut::<InputState>().mouse =
        Vector2::new(screen.view_width() as f32 / 2.0, screen.h as f32 / 2.0);
    world
}

fn run_ticks(world: &mut World, schedule: &mut Schedule, ticks: usize) {
    for _ in 0..ticks {
        schedule.run(world);
    }
}

fn count_kind(world: &mut World, kind: ObjectKind, team: Team) -> usize {
    world
        .query::<(&GameObject, &Team)>()
        .iter(world)
        .filter(|(obj, t)| obj.kind == kind && **t == team)
        .count()
}

fn positions(world: &mut World) -> Vec<(Entity, Vector2)> {
    let mut all: Vec<(Entity, Vector2)> = world
        .query_filtered::<(Entity, &MapPosition), With<GameObject>>()
        .iter(world)
        .map(|(e, p)| (e, p.pos))
        .collect();
    all.sort_by_key(|(e, _)| *e);
    all
}

#[test]
fn setup_lays_out_both_bases() {
    let mut world = new_match(3, false);
    assert_eq!(world.resource::<GameState>().get(), GameStates::Setup);
    for team in [Team::PLAYER, Team::COMPUTER] {
        assert_eq!(count_kind(&mut world, ObjectKind::Headquarters, team), 1);
        assert_eq!(count_kind(&mut world, ObjectKind::Infantry, team), 3);
        assert_eq!(count_kind(&mut world, ObjectKind::Harvester, team), 1);
    }
    let fields = world.query::<&IronField>().iter(&world).count();
    assert_eq!(fields, 40);
    assert_eq!(world.resource::<Economies>().get(Team::PLAYER).iron, 1500);

    let mut update = update_schedule();
    update.run(&mut world);
    assert_eq!(world.resource::<GameState>().get(), GameStates::Playing);
}

#[test]
fn match_runs_and_reveals_the_player_base() {
    let mut world = new_match(5, false);
    let mut update = update_schedule();
    run_ticks(&mut world, &mut update, 120);

    let fog = world.resource::<FogOfWar>();
    assert!(fog.is_visible(Vector2::new(340.0, 340.0)));
    assert!(!fog.is_explored(Vector2::new(1500.0, 750.0)));
    assert!(world.resource::<DrawList>().fog_count() > 0);
    assert_eq!(count_kind(&mut world, ObjectKind::Headquarters, Team::PLAYER), 1);
}

#[test]
fn debug_view_does_not_change_the_simulation() {
    let mut plain = new_match(9, false);
    let mut debug = new_match(9, true);
    let mut plain_update = update_schedule();
    let mut debug_update = update_schedule();
    run_ticks(&mut plain, &mut plain_update, 150);
    run_ticks(&mut debug, &mut debug_update, 150);

    assert_eq!(positions(&mut plain), positions(&mut debug));
    assert_eq!(
        plain.resource::<Economies>().get(Team::COMPUTER).iron,
        debug.resource::<Economies>().get(Team::COMPUTER).iron
    );
    assert!(plain.resource::<DrawList>().fog_count() > 0);
    assert_eq!(debug.resource::<DrawList>().fog_count(), 0);
    assert!(debug.resource::<DrawList>().overlay_count() > 0);
}

#[test]
fn debug_key_toggles_the_view() {
    let mut world = new_match(1, false);
    let mut update = update_schedule();
    update.run(&mut world);
    assert!(!world.contains_resource::<DebugMode>());

    world.resource_mut::<InputState>().mode_debug.update(true);
    update.run(&mut world);
    assert!(world.contains_resource::<DebugMode>());

    // held key does not toggle again
    world.resource_mut::<InputState>().mode_debug.update(true);
    update.run(&mut world);
    assert!(world.contains_resource::<DebugMode>());
    assert!(world.resource::<DrawList>().overlay_count() > 0);
    assert_eq!(world.resource::<DrawList>().fog_count(), 0);

    world.resource_mut::<InputState>().mode_debug.update(false);
    world.resource_mut::<InputState>().mode_debug.update(true);
    update.run(&mut world);
    assert!(!world.contains_resource::<DebugMode>());
}

#[test]
fn escape_clears_the_selection() {
    let mut world = new_match(2, false);
    let mut update = update_schedule();
    update.run(&mut world);

    let infantry: Vec<Entity> = world
        .query::<(Entity, &GameObject, &Team)>()
        .iter(&world)
        .filter(|(_, obj, t)| obj.kind == ObjectKind::Infantry && t.is_player())
        .map(|(e, ..)| e)
        .collect();
    for e in &infantry {
        world.entity_mut(*e).insert(Selected);
    }
    world.resource_mut::<InputState>().clear_selection.update(true);
    update.run(&mut world);

    assert_eq!(world.query::<&Selected>().iter(&world).count(), 0);
    for e in infantry {
        assert!(world.get::<Orders>(e).is_some());
    }
}
