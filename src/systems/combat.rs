//! Weapons fire.
//!
//! Every armed object with a ready weapon picks a target and either deals
//! damage on the spot ([`Delivery::Direct`]) or launches a homing shell
//! ([`Delivery::Projectile`]). Dead victims are left for the death system.
use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::boxcollider::BoxCollider;
use crate::components::facing::Facing;
use crate::components::gameobject::{GameObject, ObjectKind};
use crate::components::health::Health;
use crate::components::mapposition::MapPosition;
use crate::components::orders::Orders;
use crate::components::team::Team;
use crate::components::weapon::{Delivery, TargetFilter, Weapon};
use crate::prefabs::{MUZZLE_SMOKE, SPARKS, spawn_burst, spawn_projectile};
use crate::resources::gamerng::GameRng;

/// Ticks of barrel recoil after a tank shot.
pub const RECOIL: u32 = 5;
/// Distance past the hull edge where muzzle smoke appears.
const MUZZLE_OFFSET: f32 = 12.0;

/// A potential victim as seen by target selection.
#[derive(Debug, Clone, Copy)]
pub struct Candidate {
    pub entity: Entity,
    pub team: Team,
    pub kind: ObjectKind,
    pub position: Vector2,
    pub alive: bool,
}

fn accepts(filter: TargetFilter, kind: ObjectKind) -> bool {
    match filter {
        TargetFilter::Any => true,
        TargetFilter::UnitsOnly => kind.is_unit(),
        TargetFilter::InfantryOnly => kind == ObjectKind::Infantry,
    }
}

/// Nearest living enemy within `weapon` range that the weapon may engage.
///
/// Mobile attackers (those with a `TargetFilter::Any` weapon) engage at
/// exactly their range; stationary weapons need the target strictly inside.
pub fn nearest_enemy(
    from: Vector2,
    team: Team,
    weapon: &Weapon,
    candidates: impl IntoIterator<Item = Candidate>,
) -> Option<(Entity, Vector2)> {
    let inclusive = weapon.targets == TargetFilter::Any;
    candidates
        .into_iter()
        .filter(|c| c.alive && c.team != team && accepts(weapon.targets, c.kind))
        .map(|c| (c, (c.position - from).length()))
        .filter(|(_, d)| if inclusive { *d <= weapon.range } else { *d < weapon.range })
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(c, _)| (c.entity, c.position))
}

pub fn attack_system(
    mut attackers: Query<(
        &Team,
        &MapPosition,
        &BoxCollider,
        &mut Weapon,
        Option<&mut Orders>,
        Option<&mut Facing>,
    )>,
    mut victims: Query<(Entity, &Team, &MapPosition, &GameObject, &mut Health)>,
    mut rng: ResMut<GameRng>,
    mut commands: Commands,
) {
    for (team, position, collider, mut weapon, mut orders, mut facing) in attackers.iter_mut() {
        if let Some(facing) = facing.as_deref_mut() {
            facing.recoil = facing.recoil.saturating_sub(1);
        }
        weapon.tick();
        if !weapon.ready() {
            continue;
        }

        // Keep shooting at the ordered target while it stays in range.
        let kept = orders
            .as_deref()
            .and_then(|o| o.target_entity)
            .and_then(|e| victims.get(e).ok())
            .filter(|(_, _, p, _, h)| {
                h.is_alive() && position.distance_to(p.pos) <= weapon.range
            })
            .map(|(e, _, p, _, _)| (e, p.pos));

        let target = kept.or_else(|| {
            nearest_enemy(
                position.pos,
                *team,
                &weapon,
                victims.iter().map(|(entity, team, pos, obj, health)| Candidate {
                    entity,
                    team: *team,
                    kind: obj.kind,
                    position: pos.pos,
                    alive: health.is_alive(),
                }),
            )
        });
        let Some((target, target_pos)) = target else {
            continue;
        };

        if weapon.targets == TargetFilter::Any {
            if let Some(orders) = orders.as_deref_mut() {
                orders.attack(target, target_pos);
            }
        }

        let d = target_pos - position.pos;
        let angle = d.y.atan2(d.x);
        if let Some(facing) = facing.as_deref_mut() {
            facing.angle = angle;
        }

        match weapon.delivery {
            Delivery::Projectile => {
                spawn_projectile(&mut commands, position.pos, target, weapon.damage, *team);
                let smoke_at = match facing.as_deref_mut() {
                    // Tanks recoil and smoke at the barrel tip; turrets at the base.
                    Some(facing) if orders.is_some() => {
                        facing.recoil = RECOIL;
                        let reach = collider.size.x / 2.0 + MUZZLE_OFFSET;
                        position.pos + Vector2::new(angle.cos(), angle.sin()) * reach
                    }
                    _ => position.pos,
                };
                spawn_burst(&mut commands, &mut rng, smoke_at, MUZZLE_SMOKE);
            }
            Delivery::Direct => {
                if let Ok((_, _, _, _, mut health)) = victims.get_mut(target) {
                    health.damage(weapon.damage);
                    if !health.is_alive() {
                        if let Some(orders) = orders.as_deref_mut() {
                            if orders.target_entity == Some(target) {
                                orders.target = None;
                                orders.target_entity = None;
                            }
                        }
                    }
                }
                if weapon.targets == TargetFilter::Any {
                    spawn_burst(&mut commands, &mut rng, position.pos, SPARKS);
                }
            }
        }
        weapon.reset_cooldown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(world: &mut World, team: Team, kind: ObjectKind, x: f32, alive: bool) -> Candidate {
        Candidate {
            entity: world.spawn_empty().id(),
            team,
            kind,
            position: Vector2::new(x, 0.0),
            alive,
        }
    }

    #[test]
    fn picks_nearest_living_enemy_in_range() {
        let mut world = World::new();
        let weapon = ObjectKind::Infantry.weapon(Team::Gdi).expect("armed");
        let far = candidate(&mut world, Team::Nod, ObjectKind::Infantry, 45.0, true);
        let near = candidate(&mut world, Team::Nod, ObjectKind::Barracks, 30.0, true);
        let dead = candidate(&mut world, Team::Nod, ObjectKind::Infantry, 10.0, false);
        let friend = candidate(&mut world, Team::Gdi, ObjectKind::Infantry, 5.0, true);
        let out = candidate(&mut world, Team::Nod, ObjectKind::Infantry, 60.0, true);
        let got = nearest_enemy(Vector2::zero(), Team::Gdi, &weapon, [far, near, dead, friend, out]);
        assert_eq!(got.map(|(e, _)| e), Some(near.entity));
    }

    #[test]
    fn infantry_weapon_reaches_exactly_its_range() {
        let mut world = World::new();
        let weapon = ObjectKind::Infantry.weapon(Team::Gdi).expect("armed");
        let edge = candidate(&mut world, Team::Nod, ObjectKind::Tank, 50.0, true);
        assert!(nearest_enemy(Vector2::zero(), Team::Gdi, &weapon, [edge]).is_some());
    }

    #[test]
    fn turret_ignores_buildings_and_its_range_edge() {
        let mut world = World::new();
        let weapon = ObjectKind::Turret.weapon(Team::Nod).expect("armed");
        let building = candidate(&mut world, Team::Gdi, ObjectKind::Barracks, 10.0, true);
        let edge = candidate(&mut world, Team::Gdi, ObjectKind::Tank, 180.0, true);
        assert!(nearest_enemy(Vector2::zero(), Team::Nod, &weapon, [building, edge]).is_none());
    }

    #[test]
    fn harvester_only_hits_infantry() {
        let mut world = World::new();
        let weapon = ObjectKind::Harvester.weapon(Team::Gdi).expect("armed");
        let tank = candidate(&mut world, Team::Nod, ObjectKind::Tank, 10.0, true);
        let soldier = candidate(&mut world, Team::Nod, ObjectKind::Infantry, 40.0, true);
        let got = nearest_enemy(Vector2::zero(), Team::Gdi, &weapon, [tank, soldier]);
        assert_eq!(got.map(|(e, _)| e), Some(soldier.entity));
    }
}
