mod common;

use std::f32::consts::{FRAC_PI_2, PI};

use survivor_agent::actions::*;
use survivor_agent::{keys, AgentState, Inventory};
use survivor_bt::BtStatus;
use survivor_core::{EnemyKind, HostView, ItemKind, Vec2};
use survivor_steering::SteeringMode;

use common::{context, context_with, empty_host};

#[test]
fn explore_seeks_the_next_frontier_cell() {
    let mut ctx = context(empty_host());
    ctx.agent.seek_to(Vec2::new(50.0, 50.0));
    assert_eq!(explore(&mut ctx), BtStatus::Failure, "no frontier yet");
    assert_eq!(ctx.agent.target, None);

    ctx.memory.update(0.1, Vec2::ZERO);
    assert_eq!(explore(&mut ctx), BtStatus::Success);
    assert_eq!(ctx.agent.steering_mode, SteeringMode::Seek);
    assert_eq!(ctx.agent.target, ctx.memory.next_free_cell_position());

    ctx.agent.set_state(AgentState::GoingToHouse);
    assert_eq!(explore(&mut ctx), BtStatus::Failure);
}

#[test]
fn explore_run_mode_only_flips_at_the_stamina_limits() {
    let mut ctx = context(empty_host());
    ctx.memory.update(0.1, Vec2::ZERO);

    ctx.agent.info.stamina = 10.0;
    explore(&mut ctx);
    assert!(ctx.agent.run_mode);

    ctx.agent.info.stamina = 4.0;
    explore(&mut ctx);
    assert!(ctx.agent.run_mode);

    ctx.agent.info.stamina = 0.0;
    explore(&mut ctx);
    assert!(!ctx.agent.run_mode);

    ctx.agent.info.stamina = 9.5;
    explore(&mut ctx);
    assert!(!ctx.agent.run_mode);
}

#[test]
fn going_to_a_house_runs_until_inside_then_occupies_it() {
    let mut ctx = context(empty_host());
    ctx.memory.add_house(Vec2::new(20.0, 0.0));
    ctx.agent.set_state(AgentState::GoingToHouse);
    ctx.agent.run_mode = true;

    assert_eq!(go_to_closest_available_house(&mut ctx), BtStatus::Running);
    assert_eq!(ctx.agent.target, Some(Vec2::new(20.0, 0.0)));
    assert!(!ctx.agent.run_mode);
    let cell = ctx.memory.houses()[0].cell;
    assert_eq!(ctx.blackboard.get_copied(keys::CURRENT_HOUSE), Some(cell));

    ctx.agent.info.position = Vec2::new(17.0, 0.0);
    assert_eq!(go_to_closest_available_house(&mut ctx), BtStatus::Success);
    assert_eq!(ctx.agent.state, AgentState::Free);
    assert!(!ctx.blackboard.contains(keys::CURRENT_HOUSE));
    assert!(!ctx.memory.any_available_houses());

    assert_eq!(go_to_closest_available_house(&mut ctx), BtStatus::Failure);
}

#[test]
fn needed_items_are_stored_and_the_rest_destroyed() {
    let mut host = empty_host();
    let pistol = host.spawn_item(ItemKind::Pistol, Vec2::new(1.0, 0.0), 9);
    let junk = host.spawn_item(ItemKind::Garbage, Vec2::new(0.0, 1.0), 0);
    let mut ctx = context(host);

    ctx.blackboard.set(keys::ITEM_UNDER_INSPECTION, pistol);
    ctx.blackboard.set(keys::CURRENT_ITEM_LOC, pistol.location);
    ctx.agent.set_state(AgentState::LookingForItem);
    assert_eq!(process_item(&mut ctx), BtStatus::Success);
    assert!(ctx.inventory.has_item(ItemKind::Pistol));
    assert_eq!(ctx.host.inventory_item(0).map(|i| i.hash), Some(pistol.hash));
    assert_eq!(ctx.agent.state, AgentState::Free);
    assert!(!ctx.blackboard.contains(keys::ITEM_UNDER_INSPECTION));
    assert!(!ctx.blackboard.contains(keys::CURRENT_ITEM_LOC));

    ctx.blackboard.set(keys::ITEM_UNDER_INSPECTION, junk);
    assert_eq!(process_item(&mut ctx), BtStatus::Success);
    assert_eq!(ctx.host.items_on_ground(), 0);
    assert_eq!(ctx.host.stats().items_destroyed, 1);
}

#[test]
fn failed_grab_keeps_the_item_under_inspection() {
    let mut host = empty_host();
    let food = host.spawn_item(ItemKind::Food, Vec2::new(8.0, 0.0), 3);
    let mut ctx = context(host);
    ctx.blackboard.set(keys::ITEM_UNDER_INSPECTION, food);

    assert_eq!(process_item(&mut ctx), BtStatus::Failure);
    assert!(ctx.blackboard.contains(keys::ITEM_UNDER_INSPECTION));
    assert_eq!(ctx.host.items_on_ground(), 1);
}

#[test]
fn go_to_item_walks_to_the_remembered_location() {
    let mut ctx = context(empty_host());
    assert_eq!(go_to_item(&mut ctx), BtStatus::Failure);

    ctx.agent.run_mode = true;
    ctx.blackboard.set(keys::CURRENT_ITEM_LOC, Vec2::new(4.0, 4.0));
    assert_eq!(go_to_item(&mut ctx), BtStatus::Success);
    assert_eq!(ctx.agent.state, AgentState::LookingForItem);
    assert_eq!(ctx.agent.target, Some(Vec2::new(4.0, 4.0)));
    assert!(!ctx.agent.run_mode);
}

#[test]
fn turn_faces_a_fixed_point_behind_the_agent() {
    let mut ctx = context(empty_host());
    ctx.agent.info.position = Vec2::new(2.0, 3.0);
    ctx.agent.done_facing = true;

    assert_eq!(turn(&mut ctx), BtStatus::Running);
    let behind = Vec2::new(-8.0, 3.0);
    assert_eq!(ctx.blackboard.get_copied(keys::BEHIND_TARGET), Some(behind));
    assert_eq!(ctx.agent.target, Some(behind));
    assert_eq!(ctx.agent.steering_mode, SteeringMode::Face);
    assert_eq!(ctx.agent.state, AgentState::Combat);

    // Turning does not move the point.
    ctx.agent.info.orientation = 1.0;
    assert_eq!(turn(&mut ctx), BtStatus::Running);
    assert_eq!(ctx.agent.target, Some(behind));

    ctx.blackboard.set(keys::WAS_BITTEN, true);
    ctx.agent.info.orientation = PI;
    assert_eq!(turn(&mut ctx), BtStatus::Success);
    assert_eq!(ctx.agent.state, AgentState::Free);
    assert_eq!(ctx.blackboard.get_copied(keys::WAS_BITTEN), Some(false));
    assert!(!ctx.blackboard.contains(keys::BEHIND_TARGET));
}

#[test]
fn face_enemy_waits_for_the_face_to_finish() {
    let mut host = empty_host();
    let enemy = host.spawn_enemy(EnemyKind::Normal, Vec2::new(0.0, 10.0));
    let mut ctx = context(host);
    assert_eq!(face_enemy(&mut ctx), BtStatus::Failure);

    ctx.blackboard.set(keys::ENEMY_IN_FOV, enemy);
    assert_eq!(face_enemy(&mut ctx), BtStatus::Running);
    assert_eq!(ctx.agent.target, Some(Vec2::new(0.0, 10.0)));
    assert_eq!(ctx.agent.steering_mode, SteeringMode::Face);

    ctx.agent.info.orientation = FRAC_PI_2;
    assert_eq!(face_enemy(&mut ctx), BtStatus::Success);
}

#[test]
fn face_enemy_ignores_a_face_finished_toward_another_target() {
    let mut host = empty_host();
    let enemy = host.spawn_enemy(EnemyKind::Normal, Vec2::from_angle(0.6) * 10.0);
    let mut ctx = context(host);
    ctx.blackboard.set(keys::ENEMY_IN_FOV, enemy);

    // Left over from a completed turn toward a point behind the agent.
    ctx.agent.face_toward(Vec2::new(-10.0, 0.0));
    ctx.agent.done_facing = true;

    assert_eq!(face_enemy(&mut ctx), BtStatus::Running);

    ctx.agent.info.orientation = 0.6;
    assert_eq!(face_enemy(&mut ctx), BtStatus::Success);
}

#[test]
fn shoot_prefers_the_shotgun() {
    let mut host = empty_host();
    host.give_item(0, ItemKind::Pistol, 5).expect("slot 0 free");
    host.give_item(1, ItemKind::Shotgun, 2).expect("slot 1 free");
    let inventory = Inventory::with_occupancy(
        vec![ItemKind::Pistol, ItemKind::Shotgun],
        vec![Some(ItemKind::Pistol), Some(ItemKind::Shotgun)],
    );
    let mut ctx = context_with(host, inventory);
    ctx.agent.set_state(AgentState::Combat);

    assert_eq!(shoot(&mut ctx), BtStatus::Success);
    assert_eq!(ctx.agent.state, AgentState::Free);
    let shotgun = ctx.host.inventory_item(1).expect("shotgun stored");
    let pistol = ctx.host.inventory_item(0).expect("pistol stored");
    assert_eq!(ctx.host.weapon_ammo(&shotgun), Some(1));
    assert_eq!(ctx.host.weapon_ammo(&pistol), Some(5));
}

#[test]
fn shoot_without_weapons_fails() {
    let mut ctx = context(empty_host());
    ctx.agent.set_state(AgentState::Combat);
    assert_eq!(shoot(&mut ctx), BtStatus::Failure);
    assert_eq!(ctx.agent.state, AgentState::Combat);
}

#[test]
fn consuming_without_items_fails() {
    let mut ctx = context(empty_host());
    assert_eq!(consume_food(&mut ctx), BtStatus::Failure);
    assert_eq!(use_medkit(&mut ctx), BtStatus::Failure);
}
