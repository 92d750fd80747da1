//! Frame rendering.
//!
//! [`render_system`] records the frame into the [`DrawList`]: grass, sprites
//! under the fog, the fog itself, sprites over the fog, per-sprite
//! decorations and finally the production panel. [`present_system`] replays
//! the list onto the raylib window. Only the second half needs a window, so
//! everything about what gets drawn can be tested headlessly.

use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemParam;
use log::debug;
use raylib::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::explored::Explored;
use crate::components::facing::Facing;
use crate::components::gameobject::{Building, GameObject, ObjectKind};
use crate::components::harvester::Harvester;
use crate::components::health::Health;
use crate::components::ironfield::IronField;
use crate::components::mapposition::MapPosition;
use crate::components::particle::Particle;
use crate::components::selected::Selected;
use crate::components::sprite::{Sprite, SpriteShape};
use crate::components::team::Team;
use crate::components::zindex::ZIndex;
use crate::geometry::{Footprint, is_valid_building_position, snap_to_grid};
use crate::resources::basemap::{BaseMap, SPOT_COLOR};
use crate::resources::camera::GameCamera;
use crate::resources::debugmode::DebugMode;
use crate::resources::drawlist::{DrawList, DrawTag, Primitive, darkened, faded};
use crate::resources::economy::Economies;
use crate::resources::fogofwar::{EXPLORED_FOG_ALPHA, FogOfWar, TileFog};
use crate::resources::input::InputState;
use crate::resources::interface::ProductionInterface;
use crate::resources::mapbounds::{MapBounds, TILE_SIZE};
use crate::resources::screensize::ScreenSize;
use crate::resources::selection::SelectionState;
use crate::resources::worldtime::WorldTime;
use crate::systems::debugoverlay::{hud_caption, overlay_for};
use crate::systems::interface::{panel_primitives, placement_ghost};

const BARREL_COLOR: Color = Color::new(60, 60, 60, 255);
const WHEEL_COLOR: Color = Color::new(50, 50, 50, 255);
const WINDOW_COLOR: Color = Color::new(200, 200, 200, 255);
const BUILDING_SELECTION_COLOR: Color = Color::new(255, 255, 0, 255);
const LABEL_SIZE: i32 = 20;
const INFO_SIZE: i32 = 14;
const HEALTH_BAR_HEIGHT: f32 = 8.0;
const MIN_HEALTH_BAR: f32 = 10.0;
const INFANTRY_RING_RADIUS: f32 = 10.0;
const RING_THICKNESS: f32 = 2.0;

/// Resources read while building the frame.
#[derive(SystemParam)]
pub struct RenderContext<'w> {
    pub camera: Res<'w, GameCamera>,
    pub screen: Res<'w, ScreenSize>,
    pub map: Res<'w, MapBounds>,
    pub fog: Res<'w, FogOfWar>,
    pub basemap: Res<'w, BaseMap>,
    pub economies: Res<'w, Economies>,
    pub ui: Res<'w, ProductionInterface>,
    pub selection: Res<'w, SelectionState>,
    pub input: Res<'w, InputState>,
    pub time: Res<'w, WorldTime>,
    pub debug: Option<Res<'w, DebugMode>>,
}

type SpriteView<'a> = (
    Entity,
    &'a Sprite,
    &'a MapPosition,
    &'a BoxCollider,
    &'a ZIndex,
    (
        Option<&'a Team>,
        Option<&'a Health>,
        Option<&'a Building>,
        Option<&'a GameObject>,
    ),
    (
        Option<&'a Facing>,
        Option<&'a Particle>,
        Option<&'a IronField>,
        Option<&'a Harvester>,
    ),
    (Has<Selected>, Has<Explored>),
);

/// A sprite that made it past the visibility rules, in screen space.
struct Visible {
    entity: Entity,
    z: ZIndex,
    sprite: Sprite,
    rect: Rectangle,
    center: Vector2,
    angle: f32,
    recoil: f32,
    alpha: f32,
    label: Option<String>,
    /// Health ratio, only while the bar is worth showing.
    health: Option<f32>,
    info: Option<String>,
    selected: bool,
    ring_radius: f32,
}

/// Whether the player gets to see this object.
///
/// Iron fields show once explored, buildings once the player owns or has
/// explored them, everything else while in sight. Player objects always
/// show. The debug view shows every live object.
fn is_shown(
    debug: bool,
    fog: &FogOfWar,
    at: Vector2,
    team: Option<Team>,
    is_building: bool,
    is_field: bool,
    explored: bool,
) -> bool {
    if debug || team.is_some_and(Team::is_player) {
        return true;
    }
    if is_field {
        fog.is_explored(at)
    } else if is_building {
        explored
    } else {
        fog.is_visible(at)
    }
}

fn direction(angle: f32) -> Vector2 {
    Vector2::new(angle.cos(), angle.sin())
}

/// Primitives making up the body of a sprite.
fn body(v: &Visible) -> Vec<Primitive> {
    let fade = |c: Color| faded(c, v.alpha);
    let color = fade(v.sprite.color);
    let r = v.rect;
    match v.sprite.shape {
        SpriteShape::Soldier => vec![
            Primitive::Circle {
                center: v.center,
                radius: r.width / 2.0,
                color,
            },
            Primitive::Circle {
                center: Vector2::new(v.center.x, r.y + r.height / 4.0),
                radius: r.width / 4.0,
                color: fade(darkened(v.sprite.color, 60)),
            },
        ],
        SpriteShape::Tank => {
            let reach = r.width / 2.0 + 8.0 - v.recoil;
            vec![
                Primitive::RotatedRect {
                    center: v.center,
                    size: Vector2::new(r.width, r.height),
                    rotation: v.angle.to_degrees(),
                    color,
                },
                Primitive::Circle {
                    center: v.center,
                    radius: r.height / 3.0,
                    color: fade(darkened(v.sprite.color, 40)),
                },
                Primitive::Line {
                    start: v.center,
                    end: v.center + direction(v.angle) * reach,
                    thickness: 3.0,
                    color: fade(BARREL_COLOR),
                },
            ]
        }
        SpriteShape::Harvester => vec![
            Primitive::FillRect { rect: r, color },
            Primitive::FillRect {
                rect: Rectangle::new(r.x + 5.0, r.y + 5.0, r.width - 10.0, r.height - 10.0),
                color: fade(darkened(v.sprite.color, 20)),
            },
            Primitive::Circle {
                center: Vector2::new(r.x + 10.0, r.y + r.height),
                radius: 5.0,
                color: fade(WHEEL_COLOR),
            },
            Primitive::Circle {
                center: Vector2::new(r.x + r.width - 10.0, r.y + r.height),
                radius: 5.0,
                color: fade(WHEEL_COLOR),
            },
        ],
        SpriteShape::Structure => {
            let mut out = vec![
                Primitive::FillRect { rect: r, color },
                Primitive::FillRect {
                    rect: Rectangle::new(r.x + 5.0, r.y + 5.0, r.width - 10.0, r.height - 10.0),
                    color: fade(darkened(v.sprite.color, 50)),
                },
            ];
            let mut x = 10.0;
            while x + 10.0 <= r.width - 10.0 {
                out.push(Primitive::FillRect {
                    rect: Rectangle::new(r.x + x, r.y + 10.0, 10.0, 10.0),
                    color: fade(WINDOW_COLOR),
                });
                x += 20.0;
            }
            out
        }
        SpriteShape::Turret => vec![
            Primitive::FillRect {
                rect: r,
                color: fade(darkened(v.sprite.color, 50)),
            },
            Primitive::Circle {
                center: v.center,
                radius: r.width / 4.0,
                color,
            },
            Primitive::Line {
                start: v.center,
                end: v.center + direction(v.angle) * (r.width / 2.0),
                thickness: 4.0,
                color: fade(BARREL_COLOR),
            },
        ],
        SpriteShape::Crystal => vec![Primitive::Poly {
            center: v.center,
            sides: 4,
            radius: r.width / 2.0,
            rotation: 0.0,
            color,
        }],
        SpriteShape::Shell => vec![Primitive::Ellipse {
            center: v.center,
            radius_h: r.width / 2.0,
            radius_v: r.height / 2.0,
            color,
        }],
        SpriteShape::Dot => vec![Primitive::Circle {
            center: v.center,
            radius: r.width / 2.0,
            color,
        }],
    }
}

/// Whether an object's health bar is drawn: only once it is hurt or while
/// it is being hit.
pub fn shows_health_bar(health: &Health) -> bool {
    health.under_attack || health.ratio() < 1.0
}

/// Selection ring radius: fixed for infantry, hugging the body otherwise.
fn ring_radius(kind: Option<ObjectKind>, rect: Rectangle) -> f32 {
    match kind {
        Some(ObjectKind::Infantry) => INFANTRY_RING_RADIUS,
        _ => rect.width / 2.0 + 2.0,
    }
}

/// Health bar hovering above `rect`: dark frame, a fill that turns red at
/// half health, then a white border around the full bar length.
pub fn health_bar(rect: Rectangle, ratio: f32) -> [Primitive; 3] {
    let fill = if ratio > 0.5 { Color::GREEN } else { Color::RED };
    [
        Primitive::FillRect {
            rect: Rectangle::new(rect.x - 1.0, rect.y - 16.0, rect.width + 2.0, HEALTH_BAR_HEIGHT + 2.0),
            color: Color::BLACK,
        },
        Primitive::FillRect {
            rect: Rectangle::new(
                rect.x,
                rect.y - 15.0,
                (rect.width * ratio).max(MIN_HEALTH_BAR),
                HEALTH_BAR_HEIGHT,
            ),
            color: fill,
        },
        Primitive::RectLines {
            rect: Rectangle::new(rect.x, rect.y - 15.0, rect.width, HEALTH_BAR_HEIGHT),
            thickness: 1.0,
            color: Color::WHITE,
        },
    ]
}

fn decorations(v: &Visible, building_selected: bool) -> Vec<Primitive> {
    let mut out = Vec::new();
    if let Some(label) = &v.label {
        out.push(Primitive::Text {
            text: label.clone(),
            position: Vector2::new(v.center.x - 6.0, v.center.y - 10.0),
            size: LABEL_SIZE,
            color: faded(Color::WHITE, v.alpha),
        });
    }
    if let Some(ratio) = v.health {
        out.extend(health_bar(v.rect, ratio));
    }
    if v.selected {
        out.push(Primitive::CircleLines {
            center: v.center,
            radius: v.ring_radius,
            thickness: RING_THICKNESS,
            color: Color::WHITE,
        });
    }
    if building_selected {
        out.push(Primitive::RectLines {
            rect: Rectangle::new(v.rect.x - 2.0, v.rect.y - 2.0, v.rect.width + 4.0, v.rect.height + 4.0),
            thickness: 2.0,
            color: BUILDING_SELECTION_COLOR,
        });
    }
    if let Some(info) = &v.info {
        let above = if v.health.is_some() { 35.0 } else { 20.0 };
        out.push(Primitive::Text {
            text: info.clone(),
            position: Vector2::new(v.rect.x, v.rect.y - above),
            size: INFO_SIZE,
            color: Color::WHITE,
        });
    }
    out
}

/// Tile index range covering `[start, start + len)` world units.
fn tile_span(start: f32, len: f32, count: usize) -> std::ops::Range<usize> {
    let first = (start / TILE_SIZE).floor().max(0.0) as usize;
    let last = ((start + len) / TILE_SIZE).ceil().max(0.0) as usize;
    first.min(count)..last.min(count)
}

fn tile_rect(camera: &GameCamera, x: usize, y: usize) -> Rectangle {
    camera.rect_to_screen(Rectangle::new(
        x as f32 * TILE_SIZE,
        y as f32 * TILE_SIZE,
        TILE_SIZE,
        TILE_SIZE,
    ))
}

fn push_sprite(list: &mut DrawList, v: &Visible, debug: bool, building_selected: bool) {
    list.extend(DrawTag::Sprite(v.entity), body(v));
    if debug {
        match overlay_for(v.rect, v.center) {
            Some(overlay) => list.extend(DrawTag::Overlay(v.entity), overlay),
            None => debug!("No debug overlay for {:?}: unusable geometry", v.entity),
        }
    }
    list.extend(DrawTag::Decoration(v.entity), decorations(v, building_selected));
}

/// Record the whole frame into the [`DrawList`].
pub fn render_system(
    ctx: RenderContext,
    sprites: Query<SpriteView>,
    mut list: ResMut<DrawList>,
) {
    list.clear();
    let debug = ctx.debug.is_some();
    let camera = *ctx.camera;
    let view = camera.view;

    let (cols, rows) = (ctx.basemap.cols, ctx.basemap.rows);
    for y in tile_span(view.y, view.height, rows) {
        for x in tile_span(view.x, view.width, cols) {
            let Some(tile) = ctx.basemap.tile(x, y) else {
                continue;
            };
            let rect = tile_rect(&camera, x, y);
            list.push(DrawTag::Map, Primitive::FillRect { rect, color: tile.color });
            if tile.spot {
                list.push(
                    DrawTag::Map,
                    Primitive::Circle {
                        center: Vector2::new(rect.x + TILE_SIZE / 2.0, rect.y + TILE_SIZE / 2.0),
                        radius: TILE_SIZE / 4.0,
                        color: SPOT_COLOR,
                    },
                );
            }
        }
    }

    let mut footprints: Vec<Footprint> = Vec::new();
    let mut owned: Vec<ObjectKind> = Vec::new();
    let mut player_buildings: Vec<Entity> = Vec::new();
    let mut shown: Vec<Visible> = Vec::new();
    for (entity, sprite, position, collider, z, (team, health, building, object), extra, (selected, explored)) in
        sprites.iter()
    {
        let (facing, particle, field, harvester) = extra;
        if health.is_some_and(|h| !h.is_alive()) || field.is_some_and(IronField::is_empty) {
            continue;
        }
        if let (Some(team), Some(_)) = (team, building) {
            footprints.push(Footprint {
                team: *team,
                center: position.pos,
                rect: collider.rect(position.pos),
            });
            if team.is_player() {
                player_buildings.push(entity);
                if let Some(object) = object {
                    owned.push(object.kind);
                }
            }
        }
        let team = team.copied();
        if !is_shown(
            debug,
            &ctx.fog,
            position.pos,
            team,
            building.is_some(),
            field.is_some(),
            explored,
        ) {
            continue;
        }

        let alpha = if let Some(b) = building {
            b.opacity()
        } else if let Some(p) = particle {
            p.alpha()
        } else if let Some(f) = field {
            f.richness()
        } else {
            1.0
        };
        let label = match (building, object) {
            (Some(_), Some(object)) => object.kind.label().chars().next().map(String::from),
            _ => None,
        };
        let info = if let Some(f) = field {
            Some(format!("{}", f.resources))
        } else {
            harvester.map(|h| format!("Iron: {}", h.cargo))
        };
        let facing = facing.copied().unwrap_or_default();
        shown.push(Visible {
            entity,
            z: *z,
            sprite: *sprite,
            rect: camera.rect_to_screen(collider.rect(position.pos)),
            center: camera.to_screen(position.pos),
            angle: facing.angle,
            recoil: facing.recoil as f32,
            alpha,
            label,
            health: health.copied().filter(shows_health_bar).map(|h| h.ratio()),
            info,
            selected,
            ring_radius: ring_radius(object.map(|o| o.kind), collider.rect(position.pos)),
        });
    }
    shown.sort_by_key(|v| v.z);

    let building_selected = |e: Entity| ctx.selection.building == Some(e);
    for v in shown.iter().filter(|v| v.z.is_under_fog()) {
        push_sprite(&mut list, v, debug, building_selected(v.entity));
    }

    if !debug {
        let (cols, rows) = ctx.fog.dimensions();
        for y in tile_span(view.y, view.height, rows) {
            for x in tile_span(view.x, view.width, cols) {
                let color = match ctx.fog.tile(x, y) {
                    TileFog::Unexplored => Color::BLACK,
                    TileFog::Explored => Color::new(0, 0, 0, EXPLORED_FOG_ALPHA),
                    TileFog::Visible => continue,
                };
                list.push(
                    DrawTag::Fog,
                    Primitive::FillRect {
                        rect: tile_rect(&camera, x, y),
                        color,
                    },
                );
            }
        }
    }

    for v in shown.iter().filter(|v| !v.z.is_under_fog()) {
        push_sprite(&mut list, v, debug, building_selected(v.entity));
    }

    let eco = ctx.economies.get(Team::PLAYER);
    let mouse = ctx.input.mouse;
    let panel_x = ctx.screen.panel_x() as f32;
    let progress = eco.queue.first().and_then(|head| {
        let producers = owned.iter().filter(|k| **k == head.producer()).count();
        eco.progress(head.production_time(producers))
    });
    let sell_enabled = ctx
        .selection
        .building
        .is_some_and(|e| player_buildings.contains(&e));
    list.extend(
        DrawTag::Interface,
        panel_primitives(&ctx.ui, eco, &owned, sell_enabled, progress, panel_x, ctx.screen.h as f32),
    );

    if let Some(kind) = eco.pending {
        if mouse.x < panel_x {
            let top_left = snap_to_grid(camera.to_world(mouse, &ctx.map));
            let valid = is_valid_building_position(top_left, kind, Team::PLAYER, &footprints, &ctx.map);
            let center = camera.to_screen(top_left + kind.size() * 0.5);
            list.extend(DrawTag::Interface, placement_ghost(kind, Team::PLAYER, center, valid));
        }
    }

    if let Some(rect) = ctx.selection.box_rect(mouse) {
        list.push(
            DrawTag::Interface,
            Primitive::RectLines {
                rect,
                thickness: 2.0,
                color: Color::WHITE,
            },
        );
    }

    if debug {
        list.push(DrawTag::Hud, hud_caption(ctx.time.fps()));
    }
}

fn draw_primitive<D: RaylibDraw>(d: &mut D, primitive: &Primitive) {
    match primitive {
        Primitive::FillRect { rect, color } => d.draw_rectangle_rec(*rect, *color),
        Primitive::RectLines {
            rect,
            thickness,
            color,
        } => d.draw_rectangle_lines_ex(*rect, *thickness, *color),
        Primitive::RotatedRect {
            center,
            size,
            rotation,
            color,
        } => d.draw_rectangle_pro(
            Rectangle::new(center.x, center.y, size.x, size.y),
            Vector2::new(size.x / 2.0, size.y / 2.0),
            *rotation,
            *color,
        ),
        Primitive::Circle {
            center,
            radius,
            color,
        } => d.draw_circle_v(*center, *radius, *color),
        Primitive::CircleLines {
            center,
            radius,
            thickness,
            color,
        } => {
            if *thickness <= 1.0 {
                d.draw_circle_lines(center.x as i32, center.y as i32, *radius, *color)
            } else {
                d.draw_ring(*center, (*radius - *thickness).max(0.0), *radius, 0.0, 360.0, 36, *color)
            }
        }
        Primitive::Ellipse {
            center,
            radius_h,
            radius_v,
            color,
        } => d.draw_ellipse(center.x as i32, center.y as i32, *radius_h, *radius_v, *color),
        Primitive::Poly {
            center,
            sides,
            radius,
            rotation,
            color,
        } => d.draw_poly(*center, *sides, *radius, *rotation, *color),
        Primitive::Line {
            start,
            end,
            thickness,
            color,
        } => d.draw_line_ex(*start, *end, *thickness, *color),
        Primitive::Text {
            text,
            position,
            size,
            color,
        } => d.draw_text(text, position.x as i32, position.y as i32, *size, *color),
    }
}

/// Replay the recorded frame onto the window.
pub fn present_system(
    mut rl: NonSendMut<RaylibHandle>,
    thread: NonSend<RaylibThread>,
    list: Res<DrawList>,
) {
    let mut d = rl.begin_drawing(&thread);
    d.clear_background(Color::BLACK);
    for item in &list.items {
        draw_primitive(&mut d, &item.primitive);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_bar_turns_red_at_half() {
        let rect = Rectangle::new(0.0, 100.0, 40.0, 40.0);
        let [_, healthy, _] = health_bar(rect, 0.75);
        let [frame, hurt, _] = health_bar(rect, 0.5);
        match (healthy, hurt, frame) {
            (
                Primitive::FillRect { rect: a, color: ca },
                Primitive::FillRect { rect: b, color: cb },
                Primitive::FillRect { rect: f, .. },
            ) => {
                assert_eq!((a.width, ca.g), (30.0, Color::GREEN.g));
                assert_eq!((b.width, cb.r), (20.0, Color::RED.r));
                assert_eq!((f.x, f.y, f.width, f.height), (-1.0, 84.0, 42.0, 10.0));
            }
            other => panic!("unexpected primitives {:?}", other),
        }
    }

    #[test]
    fn health_bar_keeps_a_minimum_width() {
        let [_, fill] = health_bar(Rectangle::new(0.0, 0.0, 16.0, 16.0), 0.1);
        match fill {
            Primitive::FillRect { rect, .. } => assert_eq!(rect.width, 10.0),
            other => panic!("unexpected primitive {:?}", other),
        }
    }

    #[test]
    fn health_bar_border_spans_the_full_bar() {
        let [_, _, border] = health_bar(Rectangle::new(5.0, 50.0, 30.0, 20.0), 0.2);
        match border {
            Primitive::RectLines { rect, thickness, color } => {
                assert_eq!((rect.x, rect.y, rect.width, rect.height), (5.0, 35.0, 30.0, 8.0));
                assert_eq!(thickness, 1.0);
                assert_eq!((color.r, color.g, color.b), (255, 255, 255));
            }
            other => panic!("unexpected primitive {:?}", other),
        }
    }

    #[test]
    fn health_bar_only_for_hurt_or_attacked() {
        let mut health = Health::new(100);
        assert!(!shows_health_bar(&health));
        health.under_attack = true;
        assert!(shows_health_bar(&health));
        health.under_attack = false;
        health.current = 99;
        assert!(shows_health_bar(&health));
    }

    #[test]
    fn infantry_ring_is_fixed_size() {
        let small = Rectangle::new(0.0, 0.0, 16.0, 16.0);
        let tank = Rectangle::new(0.0, 0.0, 30.0, 20.0);
        assert_eq!(ring_radius(Some(ObjectKind::Infantry), small), 10.0);
        assert_eq!(ring_radius(Some(ObjectKind::Tank), tank), 17.0);
    }

    #[test]
    fn tile_span_clips_to_grid() {
        assert_eq!(tile_span(0.0, 64.0, 10), 0..2);
        assert_eq!(tile_span(16.0, 64.0, 10), 0..3);
        assert_eq!(tile_span(300.0, 100.0, 10), 9..10);
        assert_eq!(tile_span(-20.0, 10.0, 10), 0..0);
    }

    #[test]
    fn visibility_rules() {
        let fog = FogOfWar::new(&MapBounds::new(320.0, 320.0));
        let at = Vector2::new(50.0, 50.0);
        assert!(is_shown(false, &fog, at, Some(Team::PLAYER), false, false, false));
        assert!(!is_shown(false, &fog, at, Some(Team::COMPUTER), false, false, false));
        assert!(is_shown(false, &fog, at, Some(Team::COMPUTER), true, false, true));
        assert!(!is_shown(false, &fog, at, None, false, true, false));
        assert!(is_shown(true, &fog, at, None, false, false, false));
    }
}
