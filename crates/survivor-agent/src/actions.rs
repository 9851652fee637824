//! Action leaves of the decision tree.
//!
//! Actions set the agent's steering target and mode; the plugin turns that intent into a
//! steering output after the tree has run. Host failures are logged and reported as
//! [`BtStatus::Failure`].

use survivor_bt::BtStatus;
use survivor_core::{orientation_to_vector, HostMut, HostView, ItemKind, Vec2};
use survivor_steering::face;
use tracing::debug;

use crate::context::{keys, DecisionContext};
use crate::state::AgentState;

/// Look at the point behind the agent, fixed on the first tick after a bite.
pub fn turn<H: HostView>(ctx: &mut DecisionContext<H>) -> BtStatus {
    let behind = match ctx.blackboard.get_copied(keys::BEHIND_TARGET) {
        Some(point) => point,
        None => {
            let info = &ctx.agent.info;
            let point =
                info.position - orientation_to_vector(info.orientation) * ctx.limits.turn_distance;
            ctx.blackboard.set(keys::BEHIND_TARGET, point);
            debug!(x = point.x, y = point.y, "turning toward attacker");
            point
        }
    };

    ctx.agent.face_toward(behind);
    ctx.agent.set_state(AgentState::Combat);

    if !is_facing(ctx, behind) {
        return BtStatus::Running;
    }

    ctx.blackboard.remove(keys::BEHIND_TARGET);
    ctx.blackboard.set(keys::WAS_BITTEN, false);
    ctx.agent.set_state(AgentState::Free);
    BtStatus::Success
}

/// Head for the next frontier cell. Runs once stamina is full and walks once it is empty.
pub fn explore<H: HostView>(ctx: &mut DecisionContext<H>) -> BtStatus {
    if ctx.agent.state != AgentState::Free {
        return BtStatus::Failure;
    }
    let Some(cell) = ctx.memory.next_free_cell_position() else {
        // No frontier left; the agent stands still.
        ctx.agent.target = None;
        return BtStatus::Failure;
    };

    ctx.agent.seek_to(cell);

    let stamina = ctx.agent.info.stamina;
    if stamina <= 0.0 {
        ctx.agent.run_mode = false;
    } else if stamina >= ctx.limits.max_stamina {
        ctx.agent.run_mode = true;
    }

    BtStatus::Success
}

pub fn go_to_closest_available_house<H: HostView>(ctx: &mut DecisionContext<H>) -> BtStatus {
    let position = ctx.agent.info.position;
    let Some(house) = ctx.memory.closest_available_house(position).copied() else {
        return BtStatus::Failure;
    };

    ctx.agent.seek_to(house.center);
    ctx.agent.run_mode = false;
    ctx.blackboard.set(keys::CURRENT_HOUSE, house.cell);

    if !ctx.memory.is_agent_in_house(position, &house) {
        return BtStatus::Running;
    }

    ctx.blackboard.remove(keys::CURRENT_HOUSE);
    ctx.agent.set_state(AgentState::Free);
    ctx.memory.occupy_house(house.cell);
    BtStatus::Success
}

/// Keep the item under inspection if a loadout slot wants it, destroy it otherwise.
pub fn process_item<H: HostMut>(ctx: &mut DecisionContext<H>) -> BtStatus {
    let Some(entity) = ctx.blackboard.get_copied(keys::ITEM_UNDER_INSPECTION) else {
        return BtStatus::Failure;
    };
    let Some(item) = ctx.host.item_info(&entity) else {
        return BtStatus::Failure;
    };

    if ctx.inventory.is_item_needed(item.kind) {
        let grabbed = match ctx.host.grab_item(&entity) {
            Ok(grabbed) => grabbed,
            Err(err) => {
                debug!(hash = entity.hash, %err, "grab failed");
                return BtStatus::Failure;
            }
        };
        ctx.inventory.add_item(&mut ctx.host, &grabbed);
    } else if let Err(err) = ctx.host.destroy_item(&entity) {
        debug!(hash = entity.hash, %err, "destroy failed");
    } else {
        debug!(hash = entity.hash, kind = ?item.kind, "unneeded item destroyed");
    }

    ctx.blackboard.remove(keys::ITEM_UNDER_INSPECTION);
    ctx.blackboard.remove(keys::CURRENT_ITEM_LOC);
    ctx.agent.set_state(AgentState::Free);
    BtStatus::Success
}

pub fn go_to_item<H: HostView>(ctx: &mut DecisionContext<H>) -> BtStatus {
    let Some(location) = ctx.blackboard.get_copied(keys::CURRENT_ITEM_LOC) else {
        return BtStatus::Failure;
    };

    ctx.agent.set_state(AgentState::LookingForItem);
    ctx.agent.seek_to(location);
    ctx.agent.run_mode = false;
    BtStatus::Success
}

pub fn face_enemy<H: HostView>(ctx: &mut DecisionContext<H>) -> BtStatus {
    let Some(entity) = ctx.blackboard.get_copied(keys::ENEMY_IN_FOV) else {
        return BtStatus::Failure;
    };
    let Some(enemy) = ctx.host.enemy_info(&entity) else {
        return BtStatus::Failure;
    };

    ctx.agent.face_toward(enemy.location);
    if is_facing(ctx, enemy.location) {
        BtStatus::Success
    } else {
        BtStatus::Running
    }
}

/// Fire the shotgun if possible, the pistol otherwise.
pub fn shoot<H: HostMut>(ctx: &mut DecisionContext<H>) -> BtStatus {
    for weapon in [ItemKind::Shotgun, ItemKind::Pistol] {
        if ctx.inventory.has_item(weapon) && ctx.inventory.use_item(&mut ctx.host, weapon) {
            ctx.agent.set_state(AgentState::Free);
            return BtStatus::Success;
        }
    }
    BtStatus::Failure
}

pub fn consume_food<H: HostMut>(ctx: &mut DecisionContext<H>) -> BtStatus {
    BtStatus::from_bool(ctx.inventory.use_item(&mut ctx.host, ItemKind::Food))
}

pub fn use_medkit<H: HostMut>(ctx: &mut DecisionContext<H>) -> BtStatus {
    BtStatus::from_bool(ctx.inventory.use_item(&mut ctx.host, ItemKind::Medkit))
}

/// Facing check against this frame's snapshot. The record's `done_facing` describes last
/// frame's target, which may not be `target`.
fn is_facing<H>(ctx: &DecisionContext<H>, target: Vec2) -> bool {
    let info = &ctx.agent.info;
    face(
        info.position,
        info.orientation,
        target,
        info.max_angular_speed,
        ctx.limits.face_tolerance,
    )
    .done_facing
}
