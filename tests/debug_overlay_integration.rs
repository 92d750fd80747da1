//! Debug view integration tests: what the renderer records with the debug
//! view off and on.

use bevy_ecs::prelude::*;
use raylib::prelude::{Color, Rectangle, Vector2};

use condarts::components::boxcollider::BoxCollider;
use condarts::components::gameobject::ObjectKind;
use condarts::components::health::Health;
use condarts::components::ironfield::IronField;
use condarts::components::mapposition::MapPosition;
use condarts::components::sprite::{Sprite, SpriteShape};
use condarts::components::team::Team;
use condarts::components::zindex::ZIndex;
use condarts::events::switchdebug::SwitchDebugEvent;
use condarts::game::init_world;
use condarts::prefabs::{
    spawn_building, spawn_iron_field, spawn_particle, spawn_projectile, spawn_unit,
};
use condarts::resources::debugmode::DebugMode;
use condarts::resources::drawlist::{DrawList, DrawTag, Primitive};
use condarts::resources::gameconfig::GameConfig;
use condarts::systems::render::render_system;

fn make_world(debug_view: bool) -> World {
    let mut config = GameConfig::new();
    config.seed = Some(11);
    init_world(&config, debug_view)
}

fn spawn_with(world: &mut World, f: impl FnOnce(&mut Commands) -> Entity) -> Entity {
    let entity = {
        let mut commands = world.commands();
        f(&mut commands)
    };
    world.flush();
    entity
}

fn render(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(render_system);
    schedule.run(world);
}

/// One of each renderable kind, all on screen with the camera at the origin.
fn spawn_scene(world: &mut World) -> Vec<Entity> {
    let infantry = spawn_with(world, |c| {
        spawn_unit(c, ObjectKind::Infantry, Team::PLAYER, Vector2::new(100.0, 100.0))
    });
    let tank = spawn_with(world, |c| {
        spawn_unit(c, ObjectKind::Tank, Team::COMPUTER, Vector2::new(600.0, 400.0))
    });
    let barracks = spawn_with(world, |c| {
        spawn_building(c, ObjectKind::Barracks, Team::COMPUTER, Vector2::new(700.0, 500.0), true)
    });
    let field = spawn_with(world, |c| spawn_iron_field(c, Vector2::new(300.0, 300.0)));
    let shell = spawn_with(world, |c| {
        spawn_projectile(c, Vector2::new(590.0, 390.0), infantry, 20, Team::COMPUTER)
    });
    let dot = spawn_with(world, |c| {
        spawn_particle(c, Vector2::new(400.0, 200.0), Vector2::zero(), 4.0, Color::GRAY, 20)
    });
    vec![infantry, tank, barracks, field, shell, dot]
}

fn screen_rect(world: &World, entity: Entity) -> (Rectangle, Vector2) {
    let pos = world.get::<MapPosition>(entity).expect("position").pos;
    let collider = world.get::<BoxCollider>(entity).expect("collider");
    (collider.rect(pos), pos)
}

#[test]
fn inactive_view_draws_fog_and_no_overlay() {
    let mut world = make_world(false);
    let entities = spawn_scene(&mut world);
    render(&mut world);

    let list = world.resource::<DrawList>();
    assert!(list.fog_count() > 0);
    assert_eq!(list.overlay_count(), 0);
    assert_eq!(list.count(|t| *t == DrawTag::Hud), 0);
    // player infantry is always drawn, the unseen enemy tank is not
    assert!(list.draws_entity(entities[0]));
    assert!(!list.draws_entity(entities[1]));
    assert!(!list.draws_entity(entities[2]));
    assert!(!list.draws_entity(entities[3]));
}

#[test]
fn active_view_skips_fog_and_annotates_every_sprite() {
    let mut world = make_world(true);
    let entities = spawn_scene(&mut world);
    render(&mut world);

    let list = world.resource::<DrawList>();
    assert_eq!(list.fog_count(), 0);
    assert_eq!(list.overlay_count(), 2 * entities.len());
    assert_eq!(list.count(|t| *t == DrawTag::Hud), 1);

    for entity in entities {
        assert!(list.draws_entity(entity), "{:?} not drawn", entity);
        let (_, sprite_end) = list.span_of(DrawTag::Sprite(entity)).expect("sprite");
        let (overlay_start, overlay_end) = list.span_of(DrawTag::Overlay(entity)).expect("overlay");
        assert_eq!(overlay_start, sprite_end + 1);
        assert_eq!(overlay_end, overlay_start + 1);

        let (rect, pos) = screen_rect(&world, entity);
        let overlay: Vec<&Primitive> = list.primitives_for(DrawTag::Overlay(entity)).collect();
        match overlay.as_slice() {
            [
                Primitive::RectLines {
                    rect: outline,
                    thickness,
                    color: outline_color,
                },
                Primitive::Circle {
                    center,
                    radius,
                    color: marker_color,
                },
            ] => {
                assert_eq!(
                    (outline.x, outline.y, outline.width, outline.height),
                    (rect.x, rect.y, rect.width, rect.height)
                );
                assert_eq!(*thickness, 1.0);
                assert_eq!(*center, pos);
                assert_eq!(*radius, 5.0);
                for c in [outline_color, marker_color] {
                    assert_eq!((c.r, c.g, c.b), (255, 0, 255));
                }
            }
            other => panic!("unexpected overlay {:?}", other),
        }
    }
}

#[test]
fn off_centre_position_gets_its_own_marker() {
    let mut world = make_world(true);
    let entity = world
        .spawn((
            Sprite::new(SpriteShape::Dot, Color::WHITE),
            MapPosition::new(25.0, 15.0),
            BoxCollider::new(20.0, 20.0).with_offset(Vector2::new(-15.0, -5.0)),
            ZIndex::PARTICLES,
        ))
        .id();
    render(&mut world);

    let list = world.resource::<DrawList>();
    let (_, sprite_end) = list.span_of(DrawTag::Sprite(entity)).expect("sprite");
    let overlay: Vec<(usize, &Primitive)> = list
        .items
        .iter()
        .enumerate()
        .filter(|(_, i)| i.tag == DrawTag::Overlay(entity))
        .map(|(n, i)| (n, &i.primitive))
        .collect();
    assert_eq!(overlay.len(), 2);
    assert!(overlay[0].0 > sprite_end);
    match (overlay[0].1, overlay[1].1) {
        (Primitive::RectLines { rect, .. }, Primitive::Circle { center, .. }) => {
            assert_eq!((rect.x, rect.y, rect.width, rect.height), (10.0, 10.0, 20.0, 20.0));
            assert_eq!(*center, Vector2::new(25.0, 15.0));
        }
        other => panic!("unexpected overlay {:?}", other),
    }
}

#[test]
fn overlay_follows_the_camera() {
    let mut world = make_world(true);
    let infantry = spawn_with(&mut world, |c| {
        spawn_unit(c, ObjectKind::Infantry, Team::PLAYER, Vector2::new(500.0, 500.0))
    });
    world
        .resource_mut::<condarts::resources::camera::GameCamera>()
        .view
        .x = 100.0;
    render(&mut world);

    let list = world.resource::<DrawList>();
    let marker = list
        .primitives_for(DrawTag::Overlay(infantry))
        .find_map(|p| match p {
            Primitive::Circle { center, .. } => Some(*center),
            _ => None,
        })
        .expect("marker");
    assert_eq!(marker, Vector2::new(400.0, 500.0));
}

#[test]
fn no_sprites_no_overlay() {
    let mut world = make_world(true);
    render(&mut world);
    let list = world.resource::<DrawList>();
    assert_eq!(list.overlay_count(), 0);
    assert_eq!(list.fog_count(), 0);
}

#[test]
fn dead_and_depleted_objects_are_not_annotated() {
    let mut world = make_world(true);
    let infantry = spawn_with(&mut world, |c| {
        spawn_unit(c, ObjectKind::Infantry, Team::COMPUTER, Vector2::new(100.0, 100.0))
    });
    let field = spawn_with(&mut world, |c| spawn_iron_field(c, Vector2::new(300.0, 300.0)));
    world.get_mut::<Health>(infantry).expect("health").current = 0;
    world.get_mut::<IronField>(field).expect("field").resources = 0;
    render(&mut world);

    let list = world.resource::<DrawList>();
    assert_eq!(list.overlay_count(), 0);
    assert!(!list.draws_entity(infantry));
    assert!(!list.draws_entity(field));
}

#[test]
fn unusable_geometry_is_skipped_not_fatal() {
    let mut world = make_world(true);
    let good = spawn_with(&mut world, |c| {
        spawn_unit(c, ObjectKind::Infantry, Team::PLAYER, Vector2::new(100.0, 100.0))
    });
    let bad = spawn_with(&mut world, |c| {
        spawn_particle(c, Vector2::new(f32::NAN, 10.0), Vector2::zero(), 4.0, Color::GRAY, 20)
    });
    render(&mut world);

    let list = world.resource::<DrawList>();
    assert_eq!(list.primitives_for(DrawTag::Overlay(bad)).count(), 0);
    assert_eq!(list.primitives_for(DrawTag::Overlay(good)).count(), 2);
}

#[test]
fn switch_event_toggles_the_view_without_touching_the_world() {
    let mut world = make_world(false);
    let entities = spawn_scene(&mut world);
    let before: Vec<Vector2> = entities
        .iter()
        .map(|e| world.get::<MapPosition>(*e).expect("position").pos)
        .collect();

    world.trigger(SwitchDebugEvent {});
    world.flush();
    assert!(world.contains_resource::<DebugMode>());
    render(&mut world);
    assert_eq!(world.resource::<DrawList>().overlay_count(), 2 * entities.len());

    world.trigger(SwitchDebugEvent {});
    world.flush();
    assert!(!world.contains_resource::<DebugMode>());
    render(&mut world);
    assert_eq!(world.resource::<DrawList>().overlay_count(), 0);

    let after: Vec<Vector2> = entities
        .iter()
        .map(|e| world.get::<MapPosition>(*e).expect("position").pos)
        .collect();
    assert_eq!(before, after);
}

#[test]
fn health_bar_only_shows_once_hurt_or_hit() {
    let mut world = make_world(false);
    let fresh = spawn_with(&mut world, |c| {
        spawn_unit(c, ObjectKind::Infantry, Team::PLAYER, Vector2::new(100.0, 100.0))
    });
    let hurt = spawn_with(&mut world, |c| {
        spawn_unit(c, ObjectKind::Infantry, Team::PLAYER, Vector2::new(200.0, 100.0))
    });
    let hit = spawn_with(&mut world, |c| {
        spawn_unit(c, ObjectKind::Infantry, Team::PLAYER, Vector2::new(300.0, 100.0))
    });
    world.get_mut::<Health>(hurt).expect("health").current = 40;
    world.get_mut::<Health>(hit).expect("health").under_attack = true;
    render(&mut world);

    let list = world.resource::<DrawList>();
    assert!(list.draws_entity(fresh));
    assert_eq!(list.primitives_for(DrawTag::Decoration(fresh)).count(), 0);
    assert_eq!(list.primitives_for(DrawTag::Decoration(hurt)).count(), 3);
    assert_eq!(list.primitives_for(DrawTag::Decoration(hit)).count(), 3);
}
