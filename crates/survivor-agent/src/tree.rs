use survivor_bt::BtNode;
use survivor_core::HostMut;

use crate::actions::*;
use crate::conditions::*;
use crate::context::DecisionContext;

/// The survivor's decision tree, highest priority first. Node order drives the agent state
/// transitions; do not reorder.
pub fn decision_tree<H: HostMut>() -> BtNode<DecisionContext<H>> {
    BtNode::selector(vec![
        BtNode::sequence(vec![
            BtNode::condition("has_food", has_food::<H>),
            BtNode::condition("needs_to_consume_food", needs_to_consume_food::<H>),
            BtNode::action("consume_food", consume_food::<H>),
        ]),
        BtNode::sequence(vec![
            BtNode::condition("has_medkit", has_medkit::<H>),
            BtNode::condition("needs_to_use_medkit", needs_to_use_medkit::<H>),
            BtNode::action("use_medkit", use_medkit::<H>),
        ]),
        BtNode::sequence(vec![
            BtNode::condition("has_ammo", has_ammo::<H>),
            BtNode::selector(vec![
                BtNode::sequence(vec![
                    BtNode::condition("is_enemy_in_fov", is_enemy_in_fov::<H>),
                    BtNode::action("face_enemy", face_enemy::<H>),
                    BtNode::action("shoot", shoot::<H>),
                ]),
                BtNode::sequence(vec![
                    BtNode::condition("was_bitten", was_bitten::<H>),
                    BtNode::action("turn", turn::<H>),
                ]),
            ]),
        ]),
        BtNode::sequence(vec![
            BtNode::condition("is_item_in_fov", is_item_in_fov::<H>),
            BtNode::action("go_to_item", go_to_item::<H>),
            BtNode::sequence(vec![
                BtNode::condition("is_item_in_grab_range", is_item_in_grab_range::<H>),
                BtNode::action("process_item", process_item::<H>),
            ]),
        ]),
        BtNode::sequence(vec![
            BtNode::condition(
                "are_there_available_houses",
                are_there_available_houses::<H>,
            ),
            BtNode::action(
                "go_to_closest_available_house",
                go_to_closest_available_house::<H>,
            ),
        ]),
        BtNode::sequence(vec![BtNode::action("explore", explore::<H>)]),
    ])
}
