//! Condition leaves of the decision tree.
//!
//! Conditions may write to the context: the ones that look for something in the field of view
//! remember what they matched so the actions after them can act on it.

use survivor_core::{EntityKind, HostView, ItemKind};

use crate::context::{keys, DecisionContext};
use crate::state::AgentState;

/// First enemy whose details the host can resolve. Entering combat is a side effect.
pub fn is_enemy_in_fov<H: HostView>(ctx: &mut DecisionContext<H>) -> bool {
    let enemy = ctx
        .entities_in_fov
        .iter()
        .filter(|entity| entity.kind == EntityKind::Enemy)
        .find(|entity| ctx.host.enemy_info(entity).is_some())
        .copied();

    match enemy {
        Some(entity) => {
            ctx.blackboard.set(keys::ENEMY_IN_FOV, entity);
            ctx.agent.set_state(AgentState::Combat);
            true
        }
        None => {
            ctx.blackboard.remove(keys::ENEMY_IN_FOV);
            if ctx.agent.state == AgentState::Combat {
                ctx.agent.set_state(AgentState::Free);
            }
            false
        }
    }
}

/// An item to pursue: the one already being pursued if it is visible, otherwise the first item
/// in view.
pub fn is_item_in_fov<H: HostView>(ctx: &mut DecisionContext<H>) -> bool {
    if ctx.agent.state == AgentState::Combat || ctx.entities_in_fov.is_empty() {
        return false;
    }

    let mut items = ctx
        .entities_in_fov
        .iter()
        .filter(|entity| entity.kind == EntityKind::Item);

    match ctx.blackboard.get_copied(keys::CURRENT_ITEM_LOC) {
        None => {
            let Some(&entity) = items.next() else {
                return false;
            };
            ctx.blackboard.set(keys::ITEM_UNDER_INSPECTION, entity);
            ctx.blackboard.set(keys::CURRENT_ITEM_LOC, entity.location);
            true
        }
        Some(location) => {
            let Some(&entity) = items.find(|entity| entity.location == location) else {
                return false;
            };
            ctx.blackboard.set(keys::ITEM_UNDER_INSPECTION, entity);
            true
        }
    }
}

pub fn has_ammo<H: HostView>(ctx: &mut DecisionContext<H>) -> bool {
    ctx.inventory.has_item(ItemKind::Shotgun) || ctx.inventory.has_item(ItemKind::Pistol)
}

pub fn has_food<H: HostView>(ctx: &mut DecisionContext<H>) -> bool {
    ctx.inventory.has_item(ItemKind::Food)
}

pub fn has_medkit<H: HostView>(ctx: &mut DecisionContext<H>) -> bool {
    ctx.inventory.has_item(ItemKind::Medkit)
}

/// Known houses, at least one available, and nothing more urgent going on.
pub fn are_there_available_houses<H: HostView>(ctx: &mut DecisionContext<H>) -> bool {
    if matches!(
        ctx.agent.state,
        AgentState::LookingForItem | AgentState::Combat
    ) {
        return false;
    }

    if !ctx.memory.any_known_houses() || !ctx.memory.any_available_houses() {
        return false;
    }

    ctx.agent.set_state(AgentState::GoingToHouse);
    true
}

pub fn is_item_in_grab_range<H: HostView>(ctx: &mut DecisionContext<H>) -> bool {
    let Some(item) = ctx.blackboard.get_copied(keys::ITEM_UNDER_INSPECTION) else {
        return false;
    };
    let range = ctx.agent.info.grab_range;
    item.location.distance_squared(ctx.agent.info.position) <= range * range
}

/// Latches the host's short-lived bite flag until a turn has handled it.
pub fn was_bitten<H: HostView>(ctx: &mut DecisionContext<H>) -> bool {
    if ctx.agent.info.was_bitten {
        ctx.blackboard.set(keys::WAS_BITTEN, true);
    }
    ctx.blackboard.get_copied(keys::WAS_BITTEN).unwrap_or(false)
}

/// Eat only when the whole meal fits under the energy ceiling.
pub fn needs_to_consume_food<H: HostView>(ctx: &mut DecisionContext<H>) -> bool {
    let Some(energy) = ctx.inventory.food_energy(&ctx.host) else {
        return false;
    };
    ctx.agent.info.energy + energy as f32 <= ctx.limits.max_energy
}

/// Heal only when the whole medkit fits under the health ceiling.
pub fn needs_to_use_medkit<H: HostView>(ctx: &mut DecisionContext<H>) -> bool {
    let Some(health) = ctx.inventory.medkit_health(&ctx.host) else {
        return false;
    };
    ctx.agent.info.health + health as f32 <= ctx.limits.max_health
}
