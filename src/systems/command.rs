//! Player mouse commands.
//!
//! Left click, in priority order: place the pending building, operate the
//! production panel, pick an own building, or start a selection box.
//! Releasing the button selects the player's units inside the box.
//! Right click cancels a pending placement or orders the selected units.
use bevy_ecs::prelude::*;
use log::{info, warn};
use raylib::prelude::Vector2;

use crate::components::boxcollider::BoxCollider;
use crate::components::gameobject::{Building, GameObject, ObjectKind, Unit};
use crate::components::harvester::{Harvester, HarvesterState};
use crate::components::health::Health;
use crate::components::ironfield::IronField;
use crate::components::mapposition::MapPosition;
use crate::components::orders::Orders;
use crate::components::selected::Selected;
use crate::components::team::Team;
use crate::geometry::{calculate_formation_positions, rect_from_corners, rects_overlap};
use crate::resources::camera::GameCamera;
use crate::resources::economy::Economies;
use crate::resources::input::InputState;
use crate::resources::interface::{PanelHit, ProductionInterface};
use crate::resources::mapbounds::MapBounds;
use crate::resources::screensize::ScreenSize;
use crate::resources::selection::SelectionState;
use crate::systems::interface::requirement_met;
use crate::systems::production::{cancel_pending_building, footprints, place_pending_building};

type ObjectView<'a> = (
    Entity,
    &'a Team,
    &'a GameObject,
    &'a MapPosition,
    &'a BoxCollider,
    &'a Health,
    Has<Building>,
);

#[allow(clippy::too_many_arguments)]
pub fn left_click_system(
    input: Res<InputState>,
    screen: Res<ScreenSize>,
    camera: Res<GameCamera>,
    map: Res<MapBounds>,
    mut economies: ResMut<Economies>,
    mut ui: ResMut<ProductionInterface>,
    mut selection: ResMut<SelectionState>,
    objects: Query<ObjectView>,
    selected: Query<Entity, With<Selected>>,
    mut commands: Commands,
) {
    let team = Team::PLAYER;
    let mouse = input.mouse;
    let over_panel = mouse.x >= screen.panel_x() as f32;

    if input.select.just_pressed {
        let eco = economies.get_mut(team);
        if eco.pending.is_some() {
            if !over_panel {
                let all = footprints(
                    objects
                        .iter()
                        .filter(|(.., is_building)| *is_building)
                        .map(|(_, t, _, p, c, h, _)| (t, p, c, h)),
                );
                let at = camera.to_world(mouse, &map);
                if let Err(e) = place_pending_building(&mut commands, eco, team, at, &all, &map) {
                    warn!("{}", e);
                }
            }
            return;
        }

        if over_panel {
            let local = Vector2::new(mouse.x - screen.panel_x() as f32, mouse.y);
            match ui.hit(local) {
                Some(PanelHit::Tab(tab)) => ui.tab = tab,
                Some(PanelHit::Buy(kind)) => {
                    let owned: Vec<ObjectKind> = objects
                        .iter()
                        .filter(|(_, t, _, _, _, h, is_building)| **t == team && *is_building && h.is_alive())
                        .map(|(_, _, obj, ..)| obj.kind)
                        .collect();
                    if !requirement_met(kind, &owned) {
                        info!("{} needs a {}", kind.label(), kind.requirement().map(|r| r.label()).unwrap_or("?"));
                    } else {
                        match eco.buy(kind) {
                            Ok(()) => info!("Queued {}", kind.label()),
                            Err(e) => info!("{}", e),
                        }
                    }
                }
                Some(PanelHit::Sell) => {
                    let sold = selection
                        .building
                        .and_then(|e| objects.get(e).ok())
                        .filter(|(_, t, _, _, _, h, is_building)| **t == team && *is_building && h.is_alive());
                    if let Some((entity, _, obj, ..)) = sold {
                        let refund = eco.refund_sale(obj.kind);
                        info!("Sold {} for {}", obj.kind.label(), refund);
                        commands.entity(entity).try_despawn();
                        selection.building = None;
                    }
                }
                None => {}
            }
            return;
        }

        let at = camera.to_world(mouse, &map);
        let clicked = objects.iter().find(|(_, t, _, p, c, h, is_building)| {
            **t == team && *is_building && h.is_alive() && c.contains_point(p.pos, at)
        });
        match clicked {
            Some((entity, ..)) => selection.building = Some(entity),
            None => {
                selection.building = None;
                selection.drag_start = Some(mouse);
            }
        }
        return;
    }

    if input.select.just_released {
        let Some(start) = selection.drag_start.take() else {
            return;
        };
        let a = camera.to_world(start, &map);
        let b = camera.to_world(mouse, &map);
        let area = rect_from_corners(a, b);
        for entity in selected.iter() {
            commands.entity(entity).remove::<Selected>();
        }
        for (entity, t, _, p, c, h, is_building) in objects.iter() {
            if *t == team && !is_building && h.is_alive() && rects_overlap(&area, &c.rect(p.pos)) {
                commands.entity(entity).insert(Selected);
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
pub fn right_click_system(
    input: Res<InputState>,
    screen: Res<ScreenSize>,
    camera: Res<GameCamera>,
    map: Res<MapBounds>,
    mut economies: ResMut<Economies>,
    targets: Query<ObjectView>,
    fields: Query<(Entity, &MapPosition, &BoxCollider), With<IronField>>,
    mut units: Query<(&mut Orders, Option<&mut Harvester>), (With<Selected>, With<Unit>)>,
) {
    if !input.command.just_pressed {
        return;
    }
    let team = Team::PLAYER;
    let eco = economies.get_mut(team);
    if eco.pending.is_some() {
        if let Some(kind) = cancel_pending_building(eco) {
            info!("Cancelled placement of {}", kind.label());
        }
        return;
    }
    if input.mouse.x >= screen.panel_x() as f32 {
        return;
    }

    let at = camera.to_world(input.mouse, &map);
    let enemy = |want_building: bool| {
        targets
            .iter()
            .find(|(_, t, _, p, c, h, is_building)| {
                **t != team && *is_building == want_building && h.is_alive() && c.contains_point(p.pos, at)
            })
            .map(|(e, _, _, p, ..)| (e, p.pos))
    };
    let attack = enemy(false).or_else(|| enemy(true));
    let field = fields
        .iter()
        .find(|(_, p, c)| c.contains_point(p.pos, at))
        .map(|(e, p, _)| (e, p.pos));

    let count = units.iter().count();
    let slots = calculate_formation_positions(at, Some(at), count, None);
    for (i, (mut orders, harvester)) in units.iter_mut().enumerate() {
        let slot = slots.get(i).copied().unwrap_or(at);
        orders.target = Some(slot);
        orders.formation_target = Some(slot);
        orders.target_entity = None;
        if let Some((entity, pos)) = attack {
            orders.target_entity = Some(entity);
            orders.target = Some(pos);
        } else if let Some((entity, pos)) = field {
            orders.target = Some(pos);
            orders.formation_target = None;
            if let Some(mut harvester) = harvester {
                harvester.field = Some(entity);
                harvester.state = HarvesterState::MovingToField;
            }
        }
    }
}
