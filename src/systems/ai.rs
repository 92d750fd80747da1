//! Computer opponent.
//!
//! [`ai_system`] runs once per tick for [`Team::COMPUTER`]: it re-evaluates
//! its [`AiState`], sends scouts, queues production every
//! [`ACTION_INTERVAL`] ticks, places finished buildings and launches attack
//! waves. The decision helpers are plain functions over snapshots so they
//! can be tested without a world.
use bevy_ecs::prelude::*;
use log::{debug, info, warn};
use raylib::prelude::Vector2;

use crate::components::boxcollider::BoxCollider;
use crate::components::gameobject::{Building, GameObject, ObjectKind};
use crate::components::harvester::Harvester;
use crate::components::health::Health;
use crate::components::ironfield::IronField;
use crate::components::mapposition::MapPosition;
use crate::components::orders::Orders;
use crate::components::team::Team;
use crate::geometry::{Footprint, is_valid_building_position, snap_to_grid};
use crate::resources::ai::{
    ACTION_INTERVAL, AiController, AiState, DEFENSE_COOLDOWN, MAX_WAVE_SIZE, SCOUT_INTERVAL,
    SURPRISE_COOLDOWN, THREAT_RANGE,
};
use crate::resources::economy::Economies;
use crate::resources::gamerng::GameRng;
use crate::resources::mapbounds::MapBounds;
use crate::systems::production::{footprints, place_pending_building};

const BROKE_IRON: i32 = 300;
const BROKE_INCOME: f32 = 50.0;
const ATTACKED_HEALTH: f32 = 0.6;
const AGGRESSIVE_WAVE: u32 = 2;
const AGGRESSIVE_BASE_SIZE: usize = 8;
const PRIORITY_RANGE: f32 = 250.0;
const WEAK_UNIT: f32 = 0.3;
const PLACEMENT_RING: f32 = 120.0;
const PLACEMENT_STEP_DEG: usize = 20;
const PLACEMENT_FIELD_RANGE: f32 = 600.0;
const SCOUTS_PER_ROUND: usize = 3;
const SURPRISE_CHANCE: f32 = 0.1;
const SURPRISE_MILITARY: usize = 5;
const WAVE_INTERVAL_MIN: u32 = 150;
const WAVE_INTERVAL_MAX: u32 = 250;
const WAVE_SPREAD: f32 = 20.0;

/// Desired unit and turret counts.
pub const DESIRED_HARVESTERS: usize = 7;
pub const DESIRED_INFANTRY: usize = 10;
pub const DESIRED_TANKS: usize = 5;
pub const DESIRED_TURRETS: usize = 5;

/// A unit or building as the AI sees it this tick.
#[derive(Debug, Clone, Copy)]
pub struct Seen {
    pub entity: Entity,
    pub team: Team,
    pub kind: ObjectKind,
    pub position: Vector2,
    pub health_ratio: f32,
    pub alive: bool,
    pub idle: bool,
}

/// Per-kind head count of one team.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Census {
    pub harvesters: usize,
    pub infantry: usize,
    pub tanks: usize,
    pub turrets: usize,
    pub power_plants: usize,
    /// Living plus queued.
    pub barracks: usize,
    /// Living plus queued.
    pub war_factories: usize,
}

impl Census {
    pub fn of(team: Team, seen: &[Seen], queue: &[ObjectKind]) -> Self {
        let mut c = Census::default();
        for s in seen.iter().filter(|s| s.team == team) {
            match s.kind {
                ObjectKind::Harvester => c.harvesters += 1,
                ObjectKind::Infantry => c.infantry += 1,
                ObjectKind::Tank => c.tanks += 1,
                ObjectKind::Turret => c.turrets += 1,
                ObjectKind::PowerPlant => c.power_plants += 1,
                ObjectKind::Barracks if s.alive => c.barracks += 1,
                ObjectKind::WarFactory if s.alive => c.war_factories += 1,
                _ => {}
            }
        }
        c.barracks += queue.iter().filter(|k| **k == ObjectKind::Barracks).count();
        c.war_factories += queue.iter().filter(|k| **k == ObjectKind::WarFactory).count();
        c
    }

    pub fn military(&self) -> usize {
        self.infantry + self.tanks + self.turrets
    }

    pub fn desired_power_plants(&self) -> usize {
        ((self.harvesters + 1) / 2).max(1)
    }
}

/// Inputs of the per-tick mood evaluation.
#[derive(Debug, Clone, Copy)]
pub struct Situation {
    pub iron: i32,
    pub income_rate: f32,
    /// Health ratio of the AI's headquarters, if it stands.
    pub hq_health: Option<f32>,
    pub defense_cooldown: u32,
    pub enemy_near_hq: bool,
    pub wave_number: u32,
    pub enemy_base_size: usize,
}

pub fn determine_state(s: &Situation) -> AiState {
    if s.iron < BROKE_IRON || s.income_rate < BROKE_INCOME {
        AiState::Broke
    } else if s.hq_health.is_some_and(|h| h < ATTACKED_HEALTH) || s.defense_cooldown > 0 {
        AiState::Attacked
    } else if s.enemy_near_hq {
        AiState::Threatened
    } else if s.wave_number >= AGGRESSIVE_WAVE || s.enemy_base_size > AGGRESSIVE_BASE_SIZE {
        AiState::Aggressive
    } else {
        AiState::BuildUp
    }
}

/// Expected iron per harvest cycle: mean cargo scaled to a minute of ticks
/// over the harvest time.
pub fn income_rate(cargos: &[i32]) -> f32 {
    let total: i32 = cargos.iter().sum();
    total as f32 / cargos.len().max(1) as f32 * 60.0 / 40.0
}

/// What to queue next, if anything.
pub fn choose_production(
    state: AiState,
    own: &Census,
    enemy_harvesters: usize,
    iron: i32,
    has_power: bool,
    income: f32,
    rng: &mut GameRng,
) -> Option<ObjectKind> {
    let affordable = |k: ObjectKind| iron >= k.cost();
    let has_barracks = own.barracks > 0;
    let has_factory = own.war_factories > 0;
    let harvester_goal = DESIRED_HARVESTERS.min(enemy_harvesters + 1);

    if !has_barracks && affordable(ObjectKind::Barracks) {
        return Some(ObjectKind::Barracks);
    }
    if !has_factory && affordable(ObjectKind::WarFactory) {
        return Some(ObjectKind::WarFactory);
    }
    if has_power && affordable(ObjectKind::PowerPlant) && own.power_plants < own.desired_power_plants() {
        return Some(ObjectKind::PowerPlant);
    }
    if (own.harvesters < harvester_goal || income < BROKE_INCOME)
        && affordable(ObjectKind::Harvester)
        && has_factory
    {
        return Some(ObjectKind::Harvester);
    }
    if iron <= 0 {
        return None;
    }

    let want_infantry = has_barracks && affordable(ObjectKind::Infantry) && own.infantry < DESIRED_INFANTRY;
    let want_tank = has_factory && affordable(ObjectKind::Tank) && own.tanks < DESIRED_TANKS;
    let want_turret = affordable(ObjectKind::Turret) && own.turrets < DESIRED_TURRETS;
    let want_power = own.power_plants < own.desired_power_plants() && affordable(ObjectKind::PowerPlant);

    let mut options: Vec<ObjectKind> = Vec::new();
    match state {
        AiState::BuildUp | AiState::Aggressive => {
            let small_army = own.military() < 6;
            if small_army && want_infantry {
                options.push(ObjectKind::Infantry);
            }
            if small_army && want_tank {
                options.push(ObjectKind::Tank);
            }
            if want_turret {
                options.push(ObjectKind::Turret);
            }
            if want_infantry {
                options.push(ObjectKind::Infantry);
            }
            if want_tank {
                options.push(ObjectKind::Tank);
            }
            if own.harvesters < DESIRED_HARVESTERS && affordable(ObjectKind::Harvester) && has_factory {
                options.push(ObjectKind::Harvester);
            }
            if want_power {
                options.push(ObjectKind::PowerPlant);
            }
            if !small_army && own.barracks < 2 && affordable(ObjectKind::Barracks) {
                options.push(ObjectKind::Barracks);
            }
            if !small_army && own.war_factories < 2 && affordable(ObjectKind::WarFactory) {
                options.push(ObjectKind::WarFactory);
            }
            if affordable(ObjectKind::Headquarters) && own.harvesters >= 2 {
                options.push(ObjectKind::Headquarters);
            }
        }
        AiState::Attacked | AiState::Threatened => {
            if want_turret {
                options.push(ObjectKind::Turret);
            }
            if want_tank {
                options.push(ObjectKind::Tank);
            }
            if want_infantry {
                options.push(ObjectKind::Infantry);
            }
            if own.harvesters < harvester_goal && affordable(ObjectKind::Harvester) && has_factory {
                options.push(ObjectKind::Harvester);
            }
            if want_power {
                options.push(ObjectKind::PowerPlant);
            }
        }
        AiState::Broke => {
            if has_factory && affordable(ObjectKind::Harvester) && own.harvesters < harvester_goal {
                options.push(ObjectKind::Harvester);
            }
        }
    }
    rng.pick(&options)
}

fn priority(target: &Seen) -> f32 {
    match target.kind {
        ObjectKind::Harvester => 3.0,
        ObjectKind::Headquarters => 2.5,
        ObjectKind::Turret => 2.0,
        k if k.is_unit() && target.health_ratio < WEAK_UNIT => 1.5,
        _ => 1.0,
    }
}

/// Best target for a unit at `from`: lowest distance over priority among
/// living enemies, accepted only within [`PRIORITY_RANGE`].
pub fn priority_target(from: Vector2, team: Team, seen: &[Seen]) -> Option<Seen> {
    seen.iter()
        .filter(|s| s.alive && s.team != team)
        .map(|s| (s, (s.position - from).length()))
        .min_by(|(a, da), (b, db)| (da / priority(a)).total_cmp(&(db / priority(b))))
        .filter(|(_, d)| *d < PRIORITY_RANGE)
        .map(|(s, _)| *s)
}

/// Spot for a new `kind` building: the first valid grid cell on a ring
/// around a friendly building that lies near the iron field closest to the
/// headquarters. Falls back to the headquarters' own cell.
pub fn find_building_position(
    kind: ObjectKind,
    team: Team,
    hq: Vector2,
    buildings: &[Footprint],
    fields: &[Vector2],
    map: &MapBounds,
) -> Vector2 {
    let closest_field = fields
        .iter()
        .copied()
        .min_by(|a, b| (*a - hq).length().total_cmp(&(*b - hq).length()));
    for building in buildings.iter().filter(|b| b.team == team) {
        for deg in (0..360).step_by(PLACEMENT_STEP_DEG) {
            let a = (deg as f32).to_radians();
            let spot = snap_to_grid(building.center + Vector2::new(a.cos(), a.sin()) * PLACEMENT_RING);
            if !is_valid_building_position(spot, kind, team, buildings, map) {
                continue;
            }
            match closest_field {
                Some(field) if (spot - field).length() < PLACEMENT_FIELD_RANGE => return spot,
                None => return spot,
                _ => {}
            }
        }
    }
    snap_to_grid(hq)
}

/// How a wave is sent in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tactic {
    Balanced,
    Flank,
    AllIn,
    Defensive,
}

pub fn wave_size(wave_number: u32, surprise: bool) -> usize {
    let size = if surprise {
        12 + wave_number as usize
    } else {
        8 + 2 * wave_number as usize
    };
    size.min(MAX_WAVE_SIZE)
}

fn tactics_for(state: AiState, surprise: bool) -> &'static [Tactic] {
    match state {
        _ if surprise => &[Tactic::Balanced, Tactic::Flank, Tactic::AllIn],
        AiState::Threatened | AiState::Attacked => &[Tactic::AllIn, Tactic::Defensive],
        _ => &[Tactic::Balanced, Tactic::Flank, Tactic::AllIn],
    }
}

/// Orders for one attack wave: `(unit, point, entity to chase)`.
pub fn plan_wave(
    ai: &mut AiController,
    rng: &mut GameRng,
    seen: &[Seen],
    own_hq: Option<Vector2>,
    surprise: bool,
) -> Vec<(Entity, Vector2, Option<Entity>)> {
    let team = Team::COMPUTER;
    ai.wave_timer = 0;
    ai.wave_number += 1;
    let size = wave_size(ai.wave_number, surprise);
    ai.wave_interval = rng.range_u32(WAVE_INTERVAL_MIN, WAVE_INTERVAL_MAX);

    let combat: Vec<&Seen> = seen
        .iter()
        .filter(|s| {
            s.team == team && s.idle && matches!(s.kind, ObjectKind::Tank | ObjectKind::Infantry)
        })
        .collect();
    if combat.is_empty() {
        return Vec::new();
    }
    let Some(tactic) = rng.pick(tactics_for(ai.state, surprise)) else {
        return Vec::new();
    };
    info!("AI wave {} ({:?}, size {}, surprise {})", ai.wave_number, tactic, size, surprise);

    let attackers: Vec<&Seen> = match tactic {
        Tactic::Balanced => {
            let infantry = combat.iter().filter(|s| s.kind == ObjectKind::Infantry);
            let tanks = combat.iter().filter(|s| s.kind == ObjectKind::Tank);
            infantry
                .take((size as f32 * 0.6) as usize)
                .chain(tanks.take((size as f32 * 0.4) as usize))
                .copied()
                .collect()
        }
        _ => combat.iter().take(size).copied().collect(),
    };
    let Some(lead) = attackers.first() else {
        return Vec::new();
    };

    let spread = |rng: &mut GameRng, lo: f32, hi: f32| {
        Vector2::new(rng.range_f32(lo, hi), rng.range_f32(lo, hi))
    };
    match tactic {
        Tactic::Balanced | Tactic::AllIn => {
            let Some(target) = priority_target(lead.position, team, seen) else {
                return Vec::new();
            };
            attackers
                .iter()
                .map(|u| {
                    let point = target.position + spread(rng, -WAVE_SPREAD, WAVE_SPREAD);
                    (u.entity, point, Some(target.entity))
                })
                .collect()
        }
        Tactic::Flank => {
            let Some(hq) = seen
                .iter()
                .find(|s| s.team != team && s.alive && s.kind == ObjectKind::Headquarters)
            else {
                return Vec::new();
            };
            let half = attackers.len() / 2;
            attackers
                .iter()
                .enumerate()
                .map(|(i, u)| {
                    let offset = if i < half {
                        spread(rng, 80.0, 120.0)
                    } else {
                        spread(rng, -120.0, -80.0)
                    };
                    (u.entity, hq.position + offset, Some(hq.entity))
                })
                .collect()
        }
        Tactic::Defensive => {
            let Some(home) = own_hq else {
                return Vec::new();
            };
            attackers
                .iter()
                .map(|u| (u.entity, home + spread(rng, -50.0, 50.0), None))
                .collect()
        }
    }
}

#[allow(clippy::too_many_arguments)]
pub fn ai_system(
    mut ai: ResMut<AiController>,
    mut economies: ResMut<Economies>,
    mut rng: ResMut<GameRng>,
    map: Res<MapBounds>,
    objects: Query<(
        Entity,
        &Team,
        &GameObject,
        &MapPosition,
        &BoxCollider,
        &Health,
        Has<Building>,
    )>,
    mut orders: Query<&mut Orders>,
    fields: Query<&MapPosition, With<IronField>>,
    harvesters: Query<(&Team, &Harvester)>,
    mut commands: Commands,
) {
    let team = Team::COMPUTER;
    let seen: Vec<Seen> = objects
        .iter()
        .map(|(entity, t, obj, pos, _, health, _)| Seen {
            entity,
            team: *t,
            kind: obj.kind,
            position: pos.pos,
            health_ratio: health.ratio(),
            alive: health.is_alive(),
            idle: orders.get(entity).map(|o| o.is_idle()).unwrap_or(false),
        })
        .collect();
    let own_hq = objects.iter().find(|(_, t, obj, _, _, health, _)| {
        **t == team && obj.kind == ObjectKind::Headquarters && health.is_alive()
    });
    let hq_pos = own_hq.map(|(_, _, _, p, _, _, _)| p.pos);

    ai.timer += 1;
    ai.wave_timer += 1;
    ai.surprise_cooldown = ai.surprise_cooldown.saturating_sub(1);
    ai.defense_cooldown = ai.defense_cooldown.saturating_sub(1);
    if own_hq.is_some_and(|(_, _, _, _, _, health, _)| health.under_attack) {
        ai.defense_cooldown = DEFENSE_COOLDOWN;
    }

    let cargos: Vec<i32> = harvesters
        .iter()
        .filter(|(t, _)| **t == team)
        .map(|(_, h)| h.cargo)
        .collect();
    ai.income_rate = income_rate(&cargos);

    let enemy = Census::of(team.opponent(), &seen, &[]);
    let enemy_base_size = seen.iter().filter(|s| s.team != team).count();
    let situation = Situation {
        iron: economies.get(team).iron,
        income_rate: ai.income_rate,
        hq_health: own_hq.map(|(_, _, _, _, _, health, _)| health.ratio()),
        defense_cooldown: ai.defense_cooldown,
        enemy_near_hq: hq_pos.is_some_and(|hq| {
            seen.iter()
                .any(|s| s.team != team && s.kind.is_unit() && (s.position - hq).length() < THREAT_RANGE)
        }),
        wave_number: ai.wave_number,
        enemy_base_size,
    };
    let state = determine_state(&situation);
    if state != ai.state {
        debug!("AI state {:?} -> {:?}", ai.state, state);
        ai.state = state;
    }

    // Scouting.
    if ai.scout_timer == 0 {
        if ai.scout_targets.is_empty() {
            ai.scout_targets = fields.iter().map(|p| p.pos).collect();
            ai.scout_targets.push(map.center());
            if let Some(hq) = seen
                .iter()
                .find(|s| s.team != team && s.kind == ObjectKind::Headquarters)
            {
                ai.scout_targets.push(hq.position);
            }
        }
        let scouts: Vec<Entity> = seen
            .iter()
            .filter(|s| s.team == team && s.kind == ObjectKind::Infantry && s.idle)
            .take(SCOUTS_PER_ROUND)
            .map(|s| s.entity)
            .collect();
        for scout in scouts {
            if ai.scout_targets.is_empty() {
                break;
            }
            let point = ai.scout_targets.remove(0);
            if let Ok(mut o) = orders.get_mut(scout) {
                o.target = Some(point);
                o.target_entity = None;
            }
        }
        ai.scout_timer = SCOUT_INTERVAL;
    } else {
        ai.scout_timer -= 1;
    }

    // Production and placement.
    if ai.timer >= ACTION_INTERVAL {
        ai.timer = 0;
        let eco = economies.get_mut(team);
        let own = Census::of(team, &seen, &eco.queue);
        debug!(
            "AI production check: iron {}, barracks {}, war factories {}",
            eco.iron, own.barracks, own.war_factories
        );
        if let Some(kind) = choose_production(
            ai.state,
            &own,
            enemy.harvesters,
            eco.iron,
            eco.has_enough_power(),
            ai.income_rate,
            &mut rng,
        ) {
            match eco.buy(kind) {
                Ok(()) => debug!("AI queued {}, iron left {}", kind.label(), eco.iron),
                Err(e) => debug!("AI could not queue {}: {}", kind.label(), e),
            }
        }

        if let Some(kind) = eco.pending {
            if eco.pending_pos.is_none() {
                let all = footprints(
                    objects
                        .iter()
                        .filter(|(.., is_building)| *is_building)
                        .map(|(_, t, _, p, c, h, _)| (t, p, c, h)),
                );
                let field_spots: Vec<Vector2> = fields.iter().map(|p| p.pos).collect();
                let spot = find_building_position(
                    kind,
                    team,
                    hq_pos.unwrap_or(map.center()),
                    &all,
                    &field_spots,
                    &map,
                );
                if let Err(e) = place_pending_building(&mut commands, eco, team, spot, &all, &map) {
                    warn!("AI placement failed: {}", e);
                }
            }
        }
    }

    // Attack waves.
    let surprise = ai.surprise_cooldown == 0
        && enemy.military() < SURPRISE_MILITARY
        && rng.chance(SURPRISE_CHANCE);
    let plan = if surprise {
        ai.surprise_cooldown = SURPRISE_COOLDOWN;
        plan_wave(&mut ai, &mut rng, &seen, hq_pos, true)
    } else if ai.wave_timer >= ai.wave_interval {
        plan_wave(&mut ai, &mut rng, &seen, hq_pos, false)
    } else {
        Vec::new()
    };
    for (unit, point, chase) in plan {
        if let Ok(mut o) = orders.get_mut(unit) {
            o.target = Some(point);
            o.target_entity = chase;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calm() -> Situation {
        Situation {
            iron: 1500,
            income_rate: 100.0,
            hq_health: Some(1.0),
            defense_cooldown: 0,
            enemy_near_hq: false,
            wave_number: 0,
            enemy_base_size: 4,
        }
    }

    fn seen(world: &mut World, team: Team, kind: ObjectKind, x: f32) -> Seen {
        Seen {
            entity: world.spawn_empty().id(),
            team,
            kind,
            position: Vector2::new(x, 0.0),
            health_ratio: 1.0,
            alive: true,
            idle: true,
        }
    }

    #[test]
    fn state_priorities() {
        assert_eq!(determine_state(&calm()), AiState::BuildUp);
        assert_eq!(determine_state(&Situation { iron: 200, ..calm() }), AiState::Broke);
        assert_eq!(determine_state(&Situation { income_rate: 10.0, ..calm() }), AiState::Broke);
        assert_eq!(determine_state(&Situation { hq_health: Some(0.5), ..calm() }), AiState::Attacked);
        assert_eq!(determine_state(&Situation { defense_cooldown: 3, ..calm() }), AiState::Attacked);
        assert_eq!(determine_state(&Situation { enemy_near_hq: true, ..calm() }), AiState::Threatened);
        assert_eq!(determine_state(&Situation { wave_number: 2, ..calm() }), AiState::Aggressive);
        assert_eq!(determine_state(&Situation { enemy_base_size: 9, ..calm() }), AiState::Aggressive);
    }

    #[test]
    fn income_is_mean_cargo_scaled() {
        assert_eq!(income_rate(&[]), 0.0);
        assert!((income_rate(&[100, 0]) - 75.0).abs() < 1e-4);
    }

    #[test]
    fn builds_barracks_then_war_factory_first() {
        let mut rng = GameRng::seeded(1);
        let own = Census::default();
        let first = choose_production(AiState::BuildUp, &own, 1, 1500, true, 100.0, &mut rng);
        assert_eq!(first, Some(ObjectKind::Barracks));
        let own = Census { barracks: 1, ..own };
        let second = choose_production(AiState::BuildUp, &own, 1, 1500, true, 100.0, &mut rng);
        assert_eq!(second, Some(ObjectKind::WarFactory));
    }

    #[test]
    fn broke_ai_only_buys_harvesters() {
        let mut rng = GameRng::seeded(2);
        let own = Census {
            barracks: 1,
            war_factories: 1,
            power_plants: 1,
            harvesters: 1,
            ..Census::default()
        };
        let got = choose_production(AiState::Broke, &own, 3, 900, true, 100.0, &mut rng);
        assert_eq!(got, Some(ObjectKind::Harvester));
        let got = choose_production(AiState::Broke, &own, 3, 700, true, 100.0, &mut rng);
        assert_eq!(got, None);
    }

    #[test]
    fn priority_prefers_harvesters_and_respects_range() {
        let mut world = World::new();
        let infantry = seen(&mut world, Team::Gdi, ObjectKind::Infantry, 60.0);
        let harvester = seen(&mut world, Team::Gdi, ObjectKind::Harvester, 150.0);
        let got = priority_target(Vector2::zero(), Team::Nod, &[infantry, harvester]);
        assert_eq!(got.map(|s| s.entity), Some(harvester.entity));

        let far = seen(&mut world, Team::Gdi, ObjectKind::Harvester, 260.0);
        assert!(priority_target(Vector2::zero(), Team::Nod, &[far]).is_none());
    }

    #[test]
    fn wave_sizes_are_capped() {
        assert_eq!(wave_size(1, false), 10);
        assert_eq!(wave_size(1, true), 13);
        assert_eq!(wave_size(20, false), MAX_WAVE_SIZE);
        assert_eq!(wave_size(20, true), MAX_WAVE_SIZE);
    }

    #[test]
    fn placement_rings_around_own_buildings() {
        let map = MapBounds::new(1600.0, 800.0);
        let hq_center = Vector2::new(1340.0, 540.0);
        let hq = Footprint {
            team: Team::Nod,
            center: hq_center,
            rect: raylib::prelude::Rectangle::new(1300.0, 500.0, 80.0, 80.0),
        };
        let spot = find_building_position(
            ObjectKind::PowerPlant,
            Team::Nod,
            hq_center,
            &[hq],
            &[Vector2::new(1200.0, 400.0)],
            &map,
        );
        assert!(is_valid_building_position(spot, ObjectKind::PowerPlant, Team::Nod, &[hq], &map));
        assert!((spot - hq_center).length() < 200.0);
    }

    #[test]
    fn waves_target_the_best_enemy() {
        let mut world = World::new();
        let mut ai = AiController::new(200);
        ai.state = AiState::BuildUp;
        let mut rng = GameRng::seeded(7);
        let tank = seen(&mut world, Team::Nod, ObjectKind::Tank, 0.0);
        let soldier = seen(&mut world, Team::Nod, ObjectKind::Infantry, 10.0);
        let gdi_hq = seen(&mut world, Team::Gdi, ObjectKind::Headquarters, 100.0);
        let plan = plan_wave(&mut ai, &mut rng, &[tank, soldier, gdi_hq], None, false);
        assert_eq!(ai.wave_number, 1);
        assert_eq!(ai.wave_timer, 0);
        assert!((WAVE_INTERVAL_MIN..=WAVE_INTERVAL_MAX).contains(&ai.wave_interval));
        assert!(!plan.is_empty());
        assert!(plan.iter().all(|(_, _, chase)| *chase == Some(gdi_hq.entity)));
    }
}
