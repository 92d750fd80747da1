//! Entity recipes.
//!
//! Every unit, building, iron field, shell and particle in the game is
//! spawned through one of these helpers so the component set of each kind
//! lives in one place.

use bevy_ecs::prelude::*;
use raylib::prelude::{Color, Vector2};

use crate::components::boxcollider::BoxCollider;
use crate::components::facing::Facing;
use crate::components::gameobject::{Building, GameObject, ObjectKind, Unit};
use crate::components::harvester::Harvester;
use crate::components::health::Health;
use crate::components::ironfield::IronField;
use crate::components::mapposition::MapPosition;
use crate::components::orders::{Mobile, Orders};
use crate::components::particle::Particle;
use crate::components::projectile::Projectile;
use crate::components::sprite::{Sprite, SpriteShape};
use crate::components::team::Team;
use crate::components::zindex::ZIndex;
use crate::resources::gamerng::GameRng;

/// Edge length of an iron field diamond.
pub const IRON_FIELD_SIZE: f32 = 40.0;
/// Shell footprint.
pub const SHELL_SIZE: Vector2 = Vector2 { x: 10.0, y: 5.0 };
pub const SHELL_COLOR: Color = Color::new(255, 200, 0, 255);
pub const CRYSTAL_COLOR: Color = Color::new(0, 200, 0, 255);

/// Base colour of a kind for a team.
pub fn kind_color(kind: ObjectKind, team: Team) -> Color {
    let shade = match kind {
        ObjectKind::Barracks => 150,
        ObjectKind::WarFactory => 170,
        ObjectKind::PowerPlant => 130,
        ObjectKind::Turret => 180,
        _ => return team.color(),
    };
    match team {
        Team::Gdi => Color::new(shade, shade, 0, 255),
        Team::Nod => Color::new(shade, 0, 0, 255),
    }
}

fn shape_of(kind: ObjectKind) -> SpriteShape {
    match kind {
        ObjectKind::Infantry => SpriteShape::Soldier,
        ObjectKind::Tank => SpriteShape::Tank,
        ObjectKind::Harvester => SpriteShape::Harvester,
        ObjectKind::Turret => SpriteShape::Turret,
        _ => SpriteShape::Structure,
    }
}

/// Spawn a unit centred on `center`.
pub fn spawn_unit(commands: &mut Commands, kind: ObjectKind, team: Team, center: Vector2) -> Entity {
    let mut entity = commands.spawn((
        GameObject::new(kind),
        Unit,
        team,
        MapPosition::from_vec(center),
        BoxCollider::centered(kind.size()),
        Health::new(kind.max_health(team)),
        Orders::default(),
        Mobile {
            speed: kind.speed(team),
        },
        Sprite::new(shape_of(kind), kind_color(kind, team)),
        ZIndex::UNITS,
    ));
    if let Some(weapon) = kind.weapon(team) {
        entity.insert(weapon);
    }
    match kind {
        ObjectKind::Tank => {
            entity.insert(Facing::default());
        }
        ObjectKind::Harvester => {
            entity.insert(Harvester::default());
        }
        _ => {}
    }
    entity.id()
}

/// Spawn a building with its footprint's top-left corner at `top_left`.
/// `built` skips the construction fade-in.
pub fn spawn_building(
    commands: &mut Commands,
    kind: ObjectKind,
    team: Team,
    top_left: Vector2,
    built: bool,
) -> Entity {
    let size = kind.size();
    let mut entity = commands.spawn((
        GameObject::new(kind),
        if built {
            Building::built()
        } else {
            Building::default()
        },
        team,
        MapPosition::from_vec(top_left + size * 0.5),
        BoxCollider::centered(size),
        Health::new(kind.max_health(team)),
        Sprite::new(shape_of(kind), kind_color(kind, team)),
        ZIndex::BUILDINGS,
    ));
    if let Some(weapon) = kind.weapon(team) {
        entity.insert((weapon, Facing::default()));
    }
    entity.id()
}

/// Spawn a full iron field with its top-left corner at `top_left`.
pub fn spawn_iron_field(commands: &mut Commands, top_left: Vector2) -> Entity {
    let size = Vector2::new(IRON_FIELD_SIZE, IRON_FIELD_SIZE);
    commands
        .spawn((
            IronField::default(),
            MapPosition::from_vec(top_left + size * 0.5),
            BoxCollider::centered(size),
            Sprite::new(SpriteShape::Crystal, CRYSTAL_COLOR),
            ZIndex::FIELDS,
        ))
        .id()
}

/// Spawn a shell at `from` homing on `target`.
pub fn spawn_projectile(
    commands: &mut Commands,
    from: Vector2,
    target: Entity,
    damage: i32,
    team: Team,
) -> Entity {
    commands
        .spawn((
            Projectile::new(target, damage, team),
            team,
            Facing::default(),
            MapPosition::from_vec(from),
            BoxCollider::centered(SHELL_SIZE),
            Sprite::new(SpriteShape::Shell, SHELL_COLOR),
            ZIndex::PROJECTILES,
        ))
        .id()
}

pub fn spawn_particle(
    commands: &mut Commands,
    at: Vector2,
    velocity: Vector2,
    size: f32,
    color: Color,
    lifetime: u32,
) -> Entity {
    commands
        .spawn((
            Particle::new(velocity, lifetime),
            MapPosition::from_vec(at),
            BoxCollider::centered(Vector2::new(size, size)),
            Sprite::new(SpriteShape::Dot, color),
            ZIndex::PARTICLES,
        ))
        .id()
}

/// Parameters of a particle burst.
#[derive(Debug, Clone, Copy)]
pub struct Burst {
    pub count: usize,
    /// Each velocity component is drawn from `[-spread, spread)`.
    pub spread: f32,
    pub min_size: u32,
    pub max_size: u32,
    pub color: Color,
    pub lifetime: u32,
}

/// Grey smoke at a muzzle.
pub const MUZZLE_SMOKE: Burst = Burst {
    count: 5,
    spread: 1.5,
    min_size: 6,
    max_size: 10,
    color: Color::new(100, 100, 100, 255),
    lifetime: 20,
};

/// Sparks from direct fire.
pub const SPARKS: Burst = Burst {
    count: 3,
    spread: 1.0,
    min_size: 4,
    max_size: 4,
    color: Color::new(255, 200, 100, 255),
    lifetime: 10,
};

/// Shell striking an object.
pub const IMPACT: Burst = Burst {
    count: 5,
    spread: 2.0,
    min_size: 6,
    max_size: 6,
    color: Color::new(255, 200, 100, 255),
    lifetime: 15,
};

/// Shell bursting at its target point.
pub const EXPLOSION: Burst = Burst {
    count: 5,
    spread: 2.0,
    min_size: 6,
    max_size: 6,
    color: Color::new(255, 100, 0, 255),
    lifetime: 15,
};

/// Debris of a destroyed building.
pub const DEBRIS: Burst = Burst {
    count: 15,
    spread: 3.0,
    min_size: 6,
    max_size: 12,
    color: Color::new(200, 100, 100, 255),
    lifetime: 30,
};

pub fn spawn_burst(commands: &mut Commands, rng: &mut GameRng, at: Vector2, burst: Burst) {
    for _ in 0..burst.count {
        let velocity = Vector2::new(
            rng.range_f32(-burst.spread, burst.spread),
            rng.range_f32(-burst.spread, burst.spread),
        );
        let size = rng.range_u32(burst.min_size, burst.max_size) as f32;
        spawn_particle(commands, at, velocity, size, burst.color, burst.lifetime);
    }
}
