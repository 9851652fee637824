use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BtStatus {
    Running,
    Success,
    Failure,
}

impl BtStatus {
    pub fn from_bool(ok: bool) -> Self {
        if ok {
            BtStatus::Success
        } else {
            BtStatus::Failure
        }
    }

    pub fn is_success(self) -> bool {
        self == BtStatus::Success
    }
}

/// Condition leaf. Conditions may write to the context (e.g. remember what they matched).
pub type ConditionFn<C> = fn(&mut C) -> bool;

/// Action leaf.
pub type ActionFn<C> = fn(&mut C) -> BtStatus;

/// A behavior tree node.
///
/// Composites are reactive: every tick starts again from their first child, so a
/// higher-priority branch always gets the chance to take over from a `Running` one.
///
/// - `Selector` returns the first child status that is not `Failure` (or `Failure`).
/// - `Sequence` returns the first child status that is not `Success` (or `Success`).
pub enum BtNode<C> {
    Selector(Vec<BtNode<C>>),
    Sequence(Vec<BtNode<C>>),
    Condition {
        name: &'static str,
        check: ConditionFn<C>,
    },
    Action {
        name: &'static str,
        run: ActionFn<C>,
    },
}

impl<C> BtNode<C> {
    pub fn selector(children: Vec<BtNode<C>>) -> Self {
        BtNode::Selector(children)
    }

    pub fn sequence(children: Vec<BtNode<C>>) -> Self {
        BtNode::Sequence(children)
    }

    pub fn condition(name: &'static str, check: ConditionFn<C>) -> Self {
        BtNode::Condition { name, check }
    }

    pub fn action(name: &'static str, run: ActionFn<C>) -> Self {
        BtNode::Action { name, run }
    }

    pub fn tick(&self, ctx: &mut C) -> BtStatus {
        match self {
            BtNode::Selector(children) => {
                for child in children {
                    match child.tick(ctx) {
                        BtStatus::Failure => continue,
                        status => return status,
                    }
                }
                BtStatus::Failure
            }
            BtNode::Sequence(children) => {
                for child in children {
                    match child.tick(ctx) {
                        BtStatus::Success => continue,
                        status => return status,
                    }
                }
                BtStatus::Success
            }
            BtNode::Condition { name, check } => {
                let status = BtStatus::from_bool(check(ctx));
                tracing::trace!(condition = *name, ?status, "bt leaf");
                status
            }
            BtNode::Action { name, run } => {
                let status = run(ctx);
                tracing::trace!(action = *name, ?status, "bt leaf");
                status
            }
        }
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        match self {
            BtNode::Selector(children) | BtNode::Sequence(children) => {
                1 + children.iter().map(BtNode::node_count).sum::<usize>()
            }
            BtNode::Condition { .. } | BtNode::Action { .. } => 1,
        }
    }
}

impl<C> fmt::Debug for BtNode<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BtNode::Selector(children) => f.debug_tuple("Selector").field(children).finish(),
            BtNode::Sequence(children) => f.debug_tuple("Sequence").field(children).finish(),
            BtNode::Condition { name, .. } => write!(f, "Condition({name})"),
            BtNode::Action { name, .. } => write!(f, "Action({name})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_composites_use_their_identity_status() {
        let sel: BtNode<()> = BtNode::selector(vec![]);
        let seq: BtNode<()> = BtNode::sequence(vec![]);
        assert_eq!(sel.tick(&mut ()), BtStatus::Failure);
        assert_eq!(seq.tick(&mut ()), BtStatus::Success);
    }

    #[test]
    fn debug_lists_leaf_names() {
        fn yes(_: &mut ()) -> bool {
            true
        }
        let tree: BtNode<()> = BtNode::sequence(vec![BtNode::condition("yes", yes)]);
        assert_eq!(format!("{tree:?}"), "Sequence([Condition(yes)])");
        assert_eq!(tree.node_count(), 2);
    }
}
